use yew::prelude::*;
use yew_router::prelude::*;

use crate::motion::hooks::use_scrolled_past;
use crate::Route;

fn icon_search() -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round">
            <circle cx="11" cy="11" r="8" />
            <line x1="21" y1="21" x2="16.65" y2="16.65" />
        </svg>
    }
}

fn icon_user() -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round">
            <path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2" />
            <circle cx="12" cy="7" r="4" />
        </svg>
    }
}

fn icon_bag() -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round">
            <path d="M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4z" />
            <line x1="3" y1="6" x2="21" y2="6" />
            <path d="M16 10a4 4 0 0 1-8 0" />
        </svg>
    }
}

fn icon_chevron_down() -> Html {
    html! {
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round">
            <polyline points="6 9 12 15 18 9" />
        </svg>
    }
}

/// Fixed site navbar with a desktop top bar that collapses once the page
/// scrolls, and a mobile sidebar that closes itself whenever the route
/// changes.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let scrolled = use_scrolled_past(50.0);
    let mobile_open = use_state(|| false);
    let route = use_route::<Route>();

    // Whatever state the sidebar was left in, a navigation closes it.
    {
        let mobile_open = mobile_open.clone();
        use_effect_with_deps(
            move |_| {
                mobile_open.set(false);
                || ()
            },
            route.clone(),
        );
    }

    let open_menu = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            mobile_open.set(true);
        })
    };

    let close_menu = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            mobile_open.set(false);
        })
    };

    let category_class = |target: Route| {
        if route.as_ref() == Some(&target) {
            "cat-link active"
        } else {
            "cat-link"
        }
    };

    html! {
        <>
        <nav class={classes!("site-nav", scrolled.then(|| "scrolled"))}>
            <div class={classes!("nav-top-bar", scrolled.then(|| "collapsed"))}>
                <div class="shell nav-top-inner">
                    <div class="cat-links">
                        <Link<Route> to={Route::Home} classes={category_class(Route::Home)}>{"Home"}</Link<Route>>
                        <Link<Route> to={Route::Men} classes={category_class(Route::Men)}>{"Men"}</Link<Route>>
                        <Link<Route> to={Route::Skin} classes={category_class(Route::Skin)}>{"Skin"}</Link<Route>>
                    </div>
                    <div class="nav-promo">
                        {"Fullest Hair Kit for visible results in as little as 3 months. "}
                        <span class="promo-em">{"Shop Now"}</span>
                    </div>
                </div>
            </div>

            <div class="nav-main-bar">
                <div class="shell nav-main-inner">
                    <button class="burger-menu" onclick={open_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>

                    <div class="nav-left-links">
                        <button class="nav-drop">{"Products"}{icon_chevron_down()}</button>
                        <button class="nav-drop">{"Science"}{icon_chevron_down()}</button>
                        <button class="nav-drop">{"Results"}</button>
                    </div>

                    <Link<Route> to={Route::Home} classes="nav-logo">
                        {"GREEN WEALTH"}
                    </Link<Route>>

                    <div class="nav-actions">
                        <button class="quiz-button">{"Take the Quiz"}</button>
                        <button class="icon-button">{icon_search()}</button>
                        <button class="icon-button desktop-only">{icon_user()}</button>
                        <button class="icon-button">{icon_bag()}</button>
                    </div>
                </div>
            </div>
        </nav>

        <div class={classes!("mobile-sidebar", (*mobile_open).then(|| "open"))}>
            <div class="sidebar-backdrop" onclick={close_menu.clone()}></div>
            <div class="sidebar-panel">
                <div class="sidebar-header">
                    <div class="sidebar-logo">{"GREEN WEALTH"}</div>
                    <button class="sidebar-close" onclick={close_menu}>{"✕"}</button>
                </div>

                <div class="sidebar-body">
                    <div class="sidebar-group">
                        <div class="sidebar-label">{"Categories"}</div>
                        <Link<Route> to={Route::Home} classes={classes!("sidebar-link", (route == Some(Route::Home)).then(|| "active"))}>
                            {"Women"}
                        </Link<Route>>
                        <Link<Route> to={Route::Men} classes={classes!("sidebar-link", (route == Some(Route::Men)).then(|| "active"))}>
                            {"Men"}
                        </Link<Route>>
                        <Link<Route> to={Route::Skin} classes={classes!("sidebar-link", (route == Some(Route::Skin)).then(|| "active"))}>
                            {"Skin"}
                        </Link<Route>>
                    </div>

                    <div class="sidebar-group">
                        <div class="sidebar-label">{"Menu"}</div>
                        <button class="sidebar-item">{"Products"}{icon_chevron_down()}</button>
                        <button class="sidebar-item">{"Science"}{icon_chevron_down()}</button>
                        <button class="sidebar-item">{"Results"}</button>
                    </div>

                    <div class="sidebar-account">
                        <button class="sidebar-quiz">{"Take the Quiz"}</button>
                        <button class="sidebar-signin">{icon_user()}<span>{"Sign In"}</span></button>
                    </div>
                </div>

                <div class="sidebar-footer">
                    {"Fullest Hair Kit for visible results in as little as 3 months."}
                </div>
            </div>
        </div>

        <style>
            {r#"
                .site-nav {
                    position: fixed;
                    left: 0;
                    right: 0;
                    top: 0;
                    margin: 1.25rem 2.5rem 0;
                    z-index: 50;
                    background: #fff;
                    border-radius: 0.5rem;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.06);
                    transition: margin 0.3s ease, box-shadow 0.3s ease;
                }

                .site-nav.scrolled {
                    margin: 0;
                    border-radius: 0;
                    box-shadow: 0 4px 14px rgba(0, 0, 0, 0.1);
                }

                @media (max-width: 640px) {
                    .site-nav {
                        margin: 1.25rem 0 0;
                    }
                }

                .nav-top-bar {
                    background: #f9fafb;
                    border-radius: 0.5rem 0.5rem 0 0;
                    overflow: hidden;
                    max-height: 3.5rem;
                    transition: max-height 0.3s ease;
                }

                .nav-top-bar.collapsed {
                    max-height: 0;
                }

                @media (max-width: 768px) {
                    .nav-top-bar {
                        display: none;
                    }
                }

                .nav-top-inner {
                    display: flex;
                    align-items: center;
                    height: 3.5rem;
                }

                .cat-links {
                    display: flex;
                    border-right: 1px solid #d1d5db;
                }

                .cat-link {
                    padding: 1rem 2rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #4b5563;
                    border-right: 1px solid #d1d5db;
                    transition: color 0.2s ease;
                }

                .cat-link:last-child {
                    border-right: none;
                }

                .cat-link:hover {
                    color: #0f766e;
                }

                .cat-link.active {
                    color: #111827;
                    font-weight: 600;
                }

                .nav-promo {
                    flex: 1;
                    text-align: center;
                    font-size: 0.8rem;
                    color: #374151;
                }

                .promo-em {
                    font-style: italic;
                    font-weight: 500;
                }

                .nav-main-inner {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    height: 5rem;
                    position: relative;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    padding: 0.5rem;
                }

                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #374151;
                    border-radius: 1px;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-left-links {
                        display: none;
                    }
                }

                .nav-left-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-drop {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.25rem;
                    font-weight: 500;
                    color: #111827;
                    transition: color 0.2s ease;
                }

                .nav-drop:hover {
                    color: #0f766e;
                }

                .nav-logo {
                    position: absolute;
                    left: 50%;
                    transform: translateX(-50%);
                    font-size: 1.25rem;
                    font-weight: 700;
                    letter-spacing: 0.25em;
                    color: #111827;
                }

                .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .quiz-button {
                    background: #0f766e;
                    color: #fff;
                    padding: 0.75rem 1.75rem;
                    border-radius: 0.25rem;
                    font-size: 0.85rem;
                    font-weight: 500;
                    transition: background 0.2s ease;
                }

                .quiz-button:hover {
                    background: #115e59;
                }

                @media (max-width: 640px) {
                    .quiz-button,
                    .desktop-only {
                        display: none;
                    }
                }

                .icon-button {
                    padding: 0.5rem;
                    border-radius: 9999px;
                    color: #374151;
                    display: inline-flex;
                    transition: background 0.2s ease;
                }

                .icon-button:hover {
                    background: #f3f4f6;
                }

                .mobile-sidebar {
                    position: fixed;
                    inset: 0;
                    z-index: 60;
                    visibility: hidden;
                }

                .mobile-sidebar.open {
                    visibility: visible;
                }

                .sidebar-backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }

                .mobile-sidebar.open .sidebar-backdrop {
                    opacity: 1;
                }

                .sidebar-panel {
                    position: absolute;
                    top: 0;
                    left: 0;
                    bottom: 0;
                    width: 20rem;
                    max-width: 85vw;
                    background: #fff;
                    box-shadow: 10px 0 30px rgba(0, 0, 0, 0.15);
                    display: flex;
                    flex-direction: column;
                    transform: translateX(-100%);
                    transition: transform 0.3s ease;
                }

                .mobile-sidebar.open .sidebar-panel {
                    transform: translateX(0);
                }

                .sidebar-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.5rem;
                    border-bottom: 1px solid #e5e7eb;
                }

                .sidebar-logo {
                    font-size: 1.1rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                }

                .sidebar-close {
                    padding: 0.5rem;
                    border-radius: 9999px;
                    color: #374151;
                }

                .sidebar-close:hover {
                    background: #f3f4f6;
                }

                .sidebar-body {
                    flex: 1;
                    overflow-y: auto;
                }

                .sidebar-group {
                    border-bottom: 1px solid #e5e7eb;
                    padding-bottom: 0.5rem;
                }

                .sidebar-label {
                    padding: 1rem 1.5rem 0.5rem;
                    font-size: 0.72rem;
                    font-weight: 600;
                    color: #6b7280;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }

                .sidebar-link {
                    display: block;
                    padding: 1rem 1.5rem;
                    font-weight: 500;
                    color: #111827;
                }

                .sidebar-link:hover {
                    background: #f9fafb;
                }

                .sidebar-link.active {
                    color: #0f766e;
                    background: #f0fdfa;
                }

                .sidebar-item {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem 1.5rem;
                    font-weight: 500;
                    color: #111827;
                    text-align: left;
                }

                .sidebar-item:hover {
                    background: #f9fafb;
                }

                .sidebar-account {
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .sidebar-quiz {
                    background: #0f766e;
                    color: #fff;
                    padding: 0.9rem 1.5rem;
                    border-radius: 0.5rem;
                    font-weight: 500;
                }

                .sidebar-signin {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 0.5rem;
                    border: 1px solid #d1d5db;
                    padding: 0.9rem 1.5rem;
                    border-radius: 0.5rem;
                    font-weight: 500;
                    color: #111827;
                }

                .sidebar-footer {
                    border-top: 1px solid #e5e7eb;
                    padding: 1.5rem;
                    font-size: 0.85rem;
                    color: #4b5563;
                    text-align: center;
                }
            "#}
        </style>
        </>
    }
}
