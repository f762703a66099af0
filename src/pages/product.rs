use log::debug;
use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::motion::hooks::{use_section_progress, ProgressMode};
use crate::motion::keyframes::{Rgba, Track};
use crate::motion::selector::active_slide;

/// One viewport-height of scroll per slide; the track below is sized to
/// `TECH_SLIDES.len() * 100vh`.
struct TechSlide {
    title: &'static str,
    subtitle: &'static str,
    blurb: &'static str,
}

const TECH_SLIDES: &[TechSlide] = &[
    TechSlide {
        title: "MULTI-TARGETED",
        subtitle: "GREEN WEALTH MEN'S HAIR GROWTH NUTRACEUTICAL",
        blurb: "While many hair growth solutions target just one cause of thinning, our \
                Men's Hair Growth Nutraceutical addresses multiple root causes that affect \
                hair health.",
    },
    TechSlide {
        title: "STANDARDIZED",
        subtitle: "GREEN WEALTH MEN'S HAIR GROWTH NUTRACEUTICAL",
        blurb: "We extract our ingredients from the most concentrated, potent parts of each \
                plant, and ensure you get the same amount of active phytonutrients in every \
                pill.",
    },
    TechSlide {
        title: "BIOAVAILABLE",
        subtitle: "GREEN WEALTH MEN'S HAIR GROWTH NUTRACEUTICAL",
        blurb: "Our ingredients are more easily recognized and absorbed by the body, \
                improving their efficacy.",
    },
    TechSlide {
        title: "PATENTED",
        subtitle: "GREEN WEALTH MEN'S HAIR GROWTH NUTRACEUTICAL",
        blurb: "Featuring Synergen Complex®, a proprietary blend of ingredients formulated \
                in unique ratios to effectively address root causes of hair thinning in men.",
    },
];

struct IngredientTag {
    name: &'static str,
    x: f64,
    y: f64,
}

const INGREDIENT_TAGS: &[IngredientTag] = &[
    IngredientTag { name: "SAW PALMETTO", x: -60.0, y: -30.0 },
    IngredientTag { name: "MARINE COLLAGEN", x: -70.0, y: 15.0 },
    IngredientTag { name: "ASHWAGANDHA", x: -65.0, y: 60.0 },
    IngredientTag { name: "CURCUMIN", x: 60.0, y: -45.0 },
    IngredientTag { name: "TOCOTRIENOL", x: 70.0, y: 15.0 },
];

struct IngredientDetail {
    name: &'static str,
    benefit: &'static str,
    blurb: &'static str,
    color: &'static str,
}

const INGREDIENT_DETAILS: &[IngredientDetail] = &[
    IngredientDetail {
        name: "Saw Palmetto",
        benefit: "Blocks DHT production",
        blurb: "Clinically proven to reduce hair loss by targeting the root cause",
        color: "#10B981",
    },
    IngredientDetail {
        name: "Ashwagandha",
        benefit: "Reduces stress",
        blurb: "Adaptogen that helps balance cortisol levels affecting hair growth",
        color: "#3B82F6",
    },
    IngredientDetail {
        name: "Curcumin",
        benefit: "Anti-inflammatory",
        blurb: "Supports scalp health and reduces inflammation",
        color: "#F59E0B",
    },
    IngredientDetail {
        name: "Marine Collagen",
        benefit: "Strengthens hair",
        blurb: "Provides building blocks for healthy hair structure",
        color: "#8B5CF6",
    },
    IngredientDetail {
        name: "Biotin",
        benefit: "Hair thickness",
        blurb: "Essential vitamin for keratin production",
        color: "#EC4899",
    },
];

#[derive(Clone, Copy, PartialEq)]
pub enum Plan {
    Subscribe,
    OneTime,
}

struct PlanInfo {
    id: Plan,
    name: &'static str,
    price: &'static str,
    original_price: Option<&'static str>,
    savings: Option<&'static str>,
    delivery: &'static str,
    badge: Option<&'static str>,
}

const PLANS: &[PlanInfo] = &[
    PlanInfo {
        id: Plan::Subscribe,
        name: "Subscribe & Save",
        price: "$79",
        original_price: Some("$88"),
        savings: Some("Save 10%"),
        delivery: "Auto-delivery every 30 days",
        badge: Some("Most Popular"),
    },
    PlanInfo {
        id: Plan::OneTime,
        name: "One-Time Purchase",
        price: "$88",
        original_price: None,
        savings: None,
        delivery: "Single bottle",
        badge: None,
    },
];

struct GalleryImage {
    src: &'static str,
    alt: &'static str,
    video: bool,
}

const GALLERY: &[GalleryImage] = &[
    GalleryImage { src: "/images/ingredients-culture.jpg", alt: "Organic Fermented Ingredients", video: false },
    GalleryImage { src: "/images/video-testimonial-thumb.jpg", alt: "Video Testimonial", video: true },
    GalleryImage { src: "/images/clinical-stats.jpg", alt: "Clinical Research Results", video: false },
    GalleryImage { src: "/images/certification-badge.jpg", alt: "NSF Certified", video: false },
];

const PRODUCT_BENEFITS: &[&str] = &["Targets DHT", "Reduces Stress", "Strengthens Hair", "100% Drug-Free"];

/// Capsule shell pulling apart as the page scroll feeds `split` from 0 to 1,
/// with the ingredient callouts drifting out of the opened halves.
#[derive(Properties, PartialEq)]
struct CapsuleVisualProps {
    split: f64,
}

#[function_component(CapsuleVisual)]
fn capsule_visual(props: &CapsuleVisualProps) -> Html {
    let split = props.split;

    html! {
        <div class="capsule-stage">
            <div
                class="cap-half left"
                style={format!(
                    "transform: translateX({:.1}px) rotate({:.1}deg);",
                    -split * 60.0,
                    -split * 15.0
                )}
            ></div>
            <div
                class="cap-half right"
                style={format!(
                    "transform: translateX({:.1}px) rotate({:.1}deg);",
                    split * 60.0,
                    split * 15.0
                )}
            ></div>

            { if split > 0.1 {
                html! {
                    <>
                    { for INGREDIENT_TAGS.iter().enumerate().map(|(idx, tag)| html! {
                        <div
                            class="cap-tag"
                            style={format!(
                                "transform: translate({:.1}px, {:.1}px); transition-delay: {}ms;",
                                tag.x * split,
                                tag.y * split,
                                idx * 100
                            )}
                        >
                            <span class="cap-dot" style={format!("animation-delay: {}ms", idx * 200)}></span>
                            <span class="cap-label">{tag.name}</span>
                        </div>
                    }) }
                    </>
                }
            } else {
                html! {}
            } }

            { if split > 0.3 {
                html! { <div class="cap-glow"></div> }
            } else {
                html! {}
            } }
        </div>
    }
}

/// Plan selection, quantity stepper, and the add-to-cart row. Pure display
/// plus local callbacks; the cart button itself goes nowhere.
#[derive(Properties, PartialEq)]
struct PurchasePanelProps {
    selected_plan: Plan,
    quantity: usize,
    on_select_plan: Callback<Plan>,
    on_decrement: Callback<MouseEvent>,
    on_increment: Callback<MouseEvent>,
}

#[function_component(PurchasePanel)]
fn purchase_panel(props: &PurchasePanelProps) -> Html {
    let selected_price = PLANS
        .iter()
        .find(|plan| plan.id == props.selected_plan)
        .map(|plan| plan.price)
        .unwrap_or("$88");

    html! {
        <div class="purchase-panel">
            <h3>{"Choose Your Plan"}</h3>
            { for PLANS.iter().map(|plan| {
                let selected = plan.id == props.selected_plan;
                let onclick = {
                    let on_select = props.on_select_plan.clone();
                    let id = plan.id;
                    Callback::from(move |_| on_select.emit(id))
                };
                html! {
                    <div class={classes!("plan-card", selected.then(|| "selected"))} {onclick}>
                        { if let Some(badge) = plan.badge {
                            html! { <span class="plan-badge">{badge}</span> }
                        } else {
                            html! {}
                        } }
                        <div class="plan-row">
                            <div class="plan-main">
                                <div class="plan-title-row">
                                    <span class={classes!("plan-radio", selected.then(|| "checked"))}></span>
                                    <h4>{plan.name}</h4>
                                </div>
                                <p class="plan-delivery">{plan.delivery}</p>
                            </div>
                            <div class="plan-pricing">
                                <div class="plan-price">{plan.price}</div>
                                { if let Some(original) = plan.original_price {
                                    html! { <div class="plan-original">{original}</div> }
                                } else {
                                    html! {}
                                } }
                                { if let Some(savings) = plan.savings {
                                    html! { <div class="plan-savings">{savings}</div> }
                                } else {
                                    html! {}
                                } }
                            </div>
                        </div>
                    </div>
                }
            }) }

            <div class="qty-row">
                <span>{"Quantity:"}</span>
                <button class="qty-button" onclick={props.on_decrement.clone()}>{"−"}</button>
                <span class="qty-value">{props.quantity}</span>
                <button class="qty-button" onclick={props.on_increment.clone()}>{"+"}</button>
            </div>

            <button class="add-cart">
                {format!("🛒 Add to Cart - {}", selected_price)}
            </button>

            <div class="mini-actions">
                <button>{"♡ Save"}</button>
                <button>{"↗ Share"}</button>
            </div>

            <div class="trust-mini">
                <div>
                    <div class="trust-glyph">{"🚚"}</div>
                    <div class="trust-title">{"Free Shipping"}</div>
                    <div class="trust-sub">{"On all orders"}</div>
                </div>
                <div>
                    <div class="trust-glyph">{"✅"}</div>
                    <div class="trust-title">{"90-Day Guarantee"}</div>
                    <div class="trust-sub">{"Money back"}</div>
                </div>
                <div>
                    <div class="trust-glyph">{"🔬"}</div>
                    <div class="trust-title">{"Clinically Tested"}</div>
                    <div class="trust-sub">{"Proven results"}</div>
                </div>
            </div>
        </div>
    }
}

/// The pinned showcase: a 400vh track whose sticky panel swaps copy and
/// visual as scroll consumes one viewport-height per slide.
#[function_component(TechnologySection)]
fn technology_section() -> Html {
    let track_ref = use_node_ref();
    let progress = use_section_progress(track_ref.clone(), ProgressMode::Pinned);
    let active = active_slide(progress, TECH_SLIDES.len());

    // Runs on integer slide transitions only, not on every fractional tick.
    use_effect_with_deps(
        move |slide| {
            debug!("technology slide {} active", slide + 1);
            || ()
        },
        active,
    );

    let slide = &TECH_SLIDES[active];

    html! {
        <div ref={track_ref} class="tech-track">
            <div class="tech-pin">
                <div class="tech-bg">
                    <div class="tech-grid">
                        <div class="tech-copy-side">
                            <div class="tech-copy" key={active}>
                                <div class="tech-chip">
                                    <div class="chip-pill">{"💊"}</div>
                                    <div class="chip-sub">{slide.subtitle}</div>
                                </div>
                                <h2>{slide.title}</h2>
                                <p>{slide.blurb}</p>
                                <div class="tech-count">
                                    <span class="count-now">{format!("0{}", active + 1)}</span>
                                    <span class="count-line"></span>
                                    <span class="count-total">{format!("0{}", TECH_SLIDES.len())}</span>
                                </div>
                            </div>
                        </div>

                        <div class="tech-divider"></div>

                        <div class="tech-visual-side">
                            <div class="tech-visual" key={active}>
                                { match active {
                                    0 => html! { <BodyVisual /> },
                                    1 => html! { <DotsVisual /> },
                                    2 => html! { <ChartVisual /> },
                                    _ => html! { <PillVisual /> },
                                } }
                            </div>
                        </div>
                    </div>

                    <div class="tech-dots">
                        { for (0..TECH_SLIDES.len()).map(|idx| html! {
                            <span class={classes!("tech-dot", (idx == active).then(|| "active"))}></span>
                        }) }
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(BodyVisual)]
fn body_visual() -> Html {
    html! {
        <div class="body-visual">
            <svg width="220" height="440" viewBox="0 0 300 600" class="silhouette">
                <ellipse cx="150" cy="80" rx="50" ry="60" fill="#4A5568" />
                <rect x="100" y="140" width="100" height="200" rx="30" fill="#4A5568" />
                <rect x="40" y="160" width="50" height="150" rx="25" fill="#4A5568" />
                <rect x="210" y="160" width="50" height="150" rx="25" fill="#4A5568" />
                <rect x="110" y="340" width="35" height="200" rx="17" fill="#4A5568" />
                <rect x="155" y="340" width="35" height="200" rx="17" fill="#4A5568" />
            </svg>
            <div class="hotspot"></div>
        </div>
    }
}

#[function_component(DotsVisual)]
fn dots_visual() -> Html {
    const RING_COLORS: &[&str] = &["#F59E0B", "#10B981", "#3B82F6"];

    html! {
        <div class="dots-visual">
            { for (0..12).map(|i| {
                let angle = (i as f64 / 12.0) * std::f64::consts::TAU;
                let x = angle.cos() * 130.0;
                let y = angle.sin() * 130.0;
                html! {
                    <span
                        class="burst-dot"
                        style={format!(
                            "transform: translate({x:.0}px, {y:.0}px); background: {}; animation-delay: {}ms;",
                            RING_COLORS[i % RING_COLORS.len()],
                            500 + i * 50
                        )}
                    ></span>
                }
            }) }
            <div class="molecule-card">
                <div class="molecule-name">{"ASHWAGANDHA"}</div>
                <div class="molecule-sub">{"(WITHANOLIDE)"}</div>
                <svg width="200" height="90" viewBox="0 0 200 120" class="molecule-svg">
                    <path d="M40,40 L60,30 L80,40 L80,60 L60,70 L40,60 Z" stroke="#60A5FA" fill="none" stroke-width="2" />
                    <path d="M80,60 L100,70 L120,60 L120,40 L100,30 L80,40" stroke="#60A5FA" fill="none" stroke-width="2" />
                    <line x1="120" y1="40" x2="140" y2="50" stroke="#60A5FA" stroke-width="2" />
                    <line x1="140" y1="50" x2="160" y2="40" stroke="#60A5FA" stroke-width="2" />
                    <circle cx="60" cy="30" r="4" fill="#FCD34D" />
                    <circle cx="100" cy="30" r="4" fill="#FCD34D" />
                    <circle cx="140" cy="50" r="4" fill="#10B981" />
                    <circle cx="160" cy="40" r="4" fill="#EC4899" />
                </svg>
            </div>
        </div>
    }
}

#[function_component(ChartVisual)]
fn chart_visual() -> Html {
    html! {
        <div class="chart-visual">
            <div class="chart-title">{"ABSORPTION LEVEL TIMELINE"}</div>
            <div class="chart-bars">
                <div class="chart-col">
                    <div class="bar ours">
                        <div class="bar-shine"></div>
                    </div>
                    <div class="bar-label">{"GREEN WEALTH MEN"}</div>
                </div>
                <div class="chart-col">
                    <div class="bar theirs"></div>
                    <div class="bar-label dim">{"OTHER PRODUCTS"}</div>
                </div>
            </div>
            <div class="chart-base">
                <span>{"TIME"}</span>
                <span class="chart-marker"></span>
            </div>
        </div>
    }
}

#[function_component(PillVisual)]
fn pill_visual() -> Html {
    html! {
        <div class="pill-visual">
            <div class="pill-half dark"></div>
            <div class="pill-half gold"></div>
            { for INGREDIENT_TAGS.iter().enumerate().map(|(idx, tag)| html! {
                <div
                    class="pill-tag"
                    style={format!(
                        "transform: translate({:.0}px, {:.0}px); animation-delay: {}ms;",
                        tag.x * 1.6,
                        tag.y * 1.6,
                        300 + idx * 100
                    )}
                >
                    <span class="pill-dot"></span>
                    <span class="pill-name">{tag.name}</span>
                </div>
            }) }
            <div class="pill-burst"></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductPageProps {
    pub id: u32,
}

#[function_component(ProductPage)]
pub fn product_page(props: &ProductPageProps) -> Html {
    let _ = props.id; // Single-product catalog; the route still carries it.

    use_effect_once(|| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        || ()
    });

    let page_ref = use_node_ref();
    let page_progress = use_section_progress(page_ref.clone(), ProgressMode::Pinned);

    // The capsule opens across the first 30% of the page scroll; the hero
    // headline holds, then fades over the same window.
    let split = Track::new(vec![(0.0, 0.0), (0.3, 1.0)]).sample(page_progress);
    let headline_fade = Track::new(vec![(0.0, 1.0), (0.2, 1.0), (0.3, 0.0)]).sample(page_progress);
    let headline_drift = Track::new(vec![(0.0, 0.0), (0.3, -100.0)]).sample(page_progress);
    let aura = Track::span(
        Rgba::new(96.0, 165.0, 250.0, 0.10),
        Rgba::new(45.0, 212.0, 191.0, 0.28),
    )
    .sample(split);

    let selected_plan = use_state(|| Plan::Subscribe);
    let quantity = use_state(|| 1usize);

    let on_select_plan = {
        let selected_plan = selected_plan.clone();
        Callback::from(move |plan: Plan| selected_plan.set(plan))
    };
    let on_decrement = {
        let quantity = quantity.clone();
        Callback::from(move |_| quantity.set((*quantity).saturating_sub(1).max(1)))
    };
    let on_increment = {
        let quantity = quantity.clone();
        Callback::from(move |_| quantity.set(*quantity + 1))
    };

    let dial_circumference = 2.0 * std::f64::consts::PI * 20.0;

    html! {
        <div ref={page_ref} class="product-page">
            <Navbar />

            <section class="product-hero">
                <div
                    class="aura-layer"
                    style={format!(
                        "background: radial-gradient(circle at 50% 40%, {}, transparent 70%);",
                        aura.css()
                    )}
                ></div>

                <CapsuleVisual {split} />

                <div class="shell hero-layout">
                    <div class="hero-gallery">
                        <div
                            class="hero-headline"
                            style={format!(
                                "opacity: {headline_fade:.3}; transform: translateY({headline_drift:.1}px);"
                            )}
                        >
                            <span class="derm-badge">{"#1 Dermatologist Recommended"}</span>
                            <h1>{"Floradyle Essence"}</h1>
                            <p>
                                {"Our daily hair growth supplement for men with shedding and \
                                  decreased scalp coverage who want to take a proactive approach \
                                  to hair thinning. Our patented technology visibly improves hair \
                                  growth and thickness by multi-targeting root causes like \
                                  hormone, stress, and nutrition."}
                            </p>
                            <div class="hero-rating-row">
                                <span class="stars">{"★★★★★"}</span>
                                <span>{"4.8 (2,847 reviews)"}</span>
                            </div>
                        </div>

                        <div class="gallery-grid">
                            { for GALLERY.iter().map(|image| html! {
                                <div class="gallery-card">
                                    <img src={image.src} alt={image.alt} loading="lazy" />
                                    { if image.video {
                                        html! { <div class="play-chip">{"▶"}</div> }
                                    } else {
                                        html! {}
                                    } }
                                    <div class="gallery-caption">{image.alt}</div>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div class="hero-purchase">
                        <PurchasePanel
                            selected_plan={*selected_plan}
                            quantity={*quantity}
                            on_select_plan={on_select_plan.clone()}
                            on_decrement={on_decrement.clone()}
                            on_increment={on_increment.clone()}
                        />
                    </div>
                </div>

                <div
                    class="product-cue"
                    style={format!("opacity: {};", if split > 0.2 { 0.0 } else { 1.0 })}
                >
                    <span>{"Scroll to discover"}</span>
                    <div class="cue-shell">
                        <div class="cue-dot"></div>
                    </div>
                </div>

                <div
                    class="split-dial"
                    style={format!("opacity: {};", if split > 0.1 { 1.0 } else { 0.0 })}
                >
                    <svg width="48" height="48" class="dial-svg">
                        <circle cx="24" cy="24" r="20" stroke="#E5E7EB" stroke-width="3" fill="none" />
                        <circle
                            cx="24" cy="24" r="20"
                            stroke="#3B82F6"
                            stroke-width="3"
                            fill="none"
                            stroke-linecap="round"
                            stroke-dasharray={format!("{dial_circumference:.2}")}
                            stroke-dashoffset={format!("{:.2}", dial_circumference * (1.0 - split))}
                        />
                    </svg>
                    <span class="dial-text">{format!("{}%", (split * 100.0).round() as u32)}</span>
                    <div class="dial-caption">
                        <div class="dial-small">{"Revealing"}</div>
                        <div class="dial-big">{"Ingredients"}</div>
                    </div>
                </div>

                <div class="hero-fade-out"></div>
            </section>

            <TechnologySection />

            <section class="product-details">
                <div class="shell details-grid">
                    <div class="details-copy">
                        <div class="tag-row">
                            <span class="tag blue">{"Men's Formula"}</span>
                            <span class="tag green">{"Clinically Proven"}</span>
                        </div>
                        <h2>{"Hair Growth Supplement for Men"}</h2>
                        <div class="hero-rating-row">
                            <span class="stars">{"★★★★★"}</span>
                            <span>{"4.8/5 (2,847 reviews)"}</span>
                        </div>
                        <p class="details-lede">
                            {"Target the root causes of thinning hair with our \
                              physician-formulated, drug-free supplement. Clinically shown to \
                              improve hair growth in men."}
                        </p>
                        <div class="benefit-grid">
                            { for PRODUCT_BENEFITS.iter().map(|benefit| html! {
                                <div class="benefit-chip">{"✓ "}{*benefit}</div>
                            }) }
                        </div>
                    </div>

                    <div class="details-purchase">
                        <PurchasePanel
                            selected_plan={*selected_plan}
                            quantity={*quantity}
                            {on_select_plan}
                            {on_decrement}
                            {on_increment}
                        />
                    </div>
                </div>
            </section>

            <IngredientsPanel />

            <section class="product-cta">
                <div class="cta-inner">
                    <h2>{"Start Your Hair Growth Journey Today"}</h2>
                    <p>{"Join thousands of men who've transformed their hair"}</p>
                    <button class="btn btn-light cta-btn">{"🛒 Add to Cart ›"}</button>
                    <p class="cta-note">{"Free shipping • 90-day guarantee • Cancel anytime"}</p>
                </div>
            </section>

            <Footer />

            <style>
                {r#"
                    .product-page {
                        background: #fff;
                    }

                    .product-hero {
                        position: relative;
                        min-height: 100vh;
                        padding: 10rem 0 6rem;
                        background: linear-gradient(135deg, #fff, #eff6ff, #f1f5f9);
                        overflow: hidden;
                    }

                    .aura-layer {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                    }

                    .capsule-stage {
                        position: absolute;
                        top: 18rem;
                        left: 50%;
                        width: 0;
                        height: 0;
                        z-index: 1;
                    }

                    .cap-half {
                        position: absolute;
                        top: -5rem;
                        left: -1.25rem;
                        width: 2.5rem;
                        height: 10rem;
                        transition: transform 0.1s linear;
                    }

                    .cap-half.left {
                        background: linear-gradient(180deg, #374151, #111827);
                        border-radius: 9999px 0 0 9999px;
                        box-shadow: -10px 10px 40px rgba(17, 24, 39, 0.4);
                    }

                    .cap-half.right {
                        background: linear-gradient(180deg, #ca8a04, #854d0e);
                        border-radius: 0 9999px 9999px 0;
                        box-shadow: 10px 10px 40px rgba(133, 77, 14, 0.4);
                    }

                    .cap-tag {
                        position: absolute;
                        top: 0;
                        left: 0;
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        transition: transform 0.1s linear;
                    }

                    .cap-dot {
                        width: 0.9rem;
                        height: 0.9rem;
                        border-radius: 9999px;
                        background: #F59E0B;
                        animation: pulse-scale 2s ease-in-out infinite;
                    }

                    .cap-label {
                        background: rgba(30, 41, 59, 0.9);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        color: #fff;
                        font-size: 0.65rem;
                        font-weight: 600;
                        padding: 0.25rem 0.6rem;
                        border-radius: 0.5rem;
                        white-space: nowrap;
                    }

                    @media (max-width: 768px) {
                        .cap-label {
                            display: none;
                        }
                    }

                    .cap-glow {
                        position: absolute;
                        top: -2.5rem;
                        left: -2.5rem;
                        width: 5rem;
                        height: 5rem;
                        background: #facc15;
                        border-radius: 9999px;
                        filter: blur(40px);
                        opacity: 0.6;
                    }

                    @keyframes pulse-scale {
                        0%, 100% { transform: scale(1); }
                        50% { transform: scale(1.2); }
                    }

                    .hero-layout {
                        position: relative;
                        z-index: 10;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: start;
                    }

                    @media (max-width: 900px) {
                        .hero-layout {
                            grid-template-columns: 1fr;
                        }
                    }

                    .hero-headline {
                        margin-bottom: 2rem;
                        will-change: transform, opacity;
                    }

                    .derm-badge {
                        display: inline-block;
                        background: #fbbf24;
                        color: #78350f;
                        font-size: 0.75rem;
                        font-weight: 700;
                        padding: 0.35rem 0.9rem;
                        border-radius: 9999px;
                        margin-bottom: 1rem;
                    }

                    .hero-headline h1 {
                        font-size: clamp(2.5rem, 5vw, 3.25rem);
                        margin: 0 0 1rem;
                    }

                    .hero-headline p {
                        font-size: 1.15rem;
                        color: #4b5563;
                        margin: 0 0 1.5rem;
                    }

                    .hero-rating-row {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        color: #4b5563;
                        font-size: 0.9rem;
                        margin-bottom: 1rem;
                    }

                    .gallery-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }

                    .gallery-card {
                        position: relative;
                        border-radius: 0.75rem;
                        overflow: hidden;
                        border: 2px solid #e5e7eb;
                        cursor: pointer;
                        transition: border-color 0.3s ease, box-shadow 0.3s ease;
                    }

                    .gallery-card:hover {
                        border-color: #3b82f6;
                        box-shadow: 0 12px 30px rgba(59, 130, 246, 0.2);
                    }

                    .gallery-card img {
                        width: 100%;
                        height: 11rem;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }

                    .gallery-card:hover img {
                        transform: scale(1.1);
                    }

                    .play-chip {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        width: 3.5rem;
                        height: 3.5rem;
                        background: rgba(255, 255, 255, 0.9);
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #1d4ed8;
                        font-size: 1.1rem;
                    }

                    .gallery-caption {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        padding: 1.5rem 0.75rem 0.6rem;
                        background: linear-gradient(180deg, transparent, rgba(0, 0, 0, 0.6));
                        color: #fff;
                        font-size: 0.8rem;
                        font-weight: 500;
                    }

                    .hero-purchase {
                        position: sticky;
                        top: 8rem;
                    }

                    .purchase-panel {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }

                    .purchase-panel h3 {
                        margin: 0;
                        font-size: 1.1rem;
                    }

                    .plan-card {
                        position: relative;
                        border: 2px solid #e5e7eb;
                        border-radius: 1rem;
                        padding: 1.5rem;
                        background: #fff;
                        cursor: pointer;
                        transition: border-color 0.2s ease, background 0.2s ease,
                            transform 0.2s ease;
                    }

                    .plan-card:hover {
                        transform: scale(1.02);
                        border-color: #d1d5db;
                    }

                    .plan-card.selected {
                        border-color: #2563eb;
                        background: #eff6ff;
                    }

                    .plan-badge {
                        position: absolute;
                        top: -0.75rem;
                        left: 1.5rem;
                        background: #2563eb;
                        color: #fff;
                        font-size: 0.7rem;
                        font-weight: 700;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                    }

                    .plan-row {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                    }

                    .plan-title-row {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 0.35rem;
                    }

                    .plan-radio {
                        width: 1.25rem;
                        height: 1.25rem;
                        border: 2px solid #d1d5db;
                        border-radius: 9999px;
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .plan-radio.checked {
                        border-color: #2563eb;
                    }

                    .plan-radio.checked::after {
                        content: "";
                        width: 0.7rem;
                        height: 0.7rem;
                        background: #2563eb;
                        border-radius: 9999px;
                    }

                    .plan-title-row h4 {
                        margin: 0;
                        font-size: 1.1rem;
                    }

                    .plan-delivery {
                        margin: 0 0 0 2rem;
                        color: #4b5563;
                        font-size: 0.875rem;
                    }

                    .plan-pricing {
                        text-align: right;
                    }

                    .plan-price {
                        font-size: 1.75rem;
                        font-weight: 700;
                    }

                    .plan-original {
                        color: #6b7280;
                        font-size: 0.875rem;
                        text-decoration: line-through;
                    }

                    .plan-savings {
                        color: #16a34a;
                        font-size: 0.875rem;
                        font-weight: 600;
                    }

                    .qty-row {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        color: #374151;
                        font-weight: 500;
                    }

                    .qty-button {
                        width: 2.5rem;
                        height: 2.5rem;
                        border: 2px solid #d1d5db;
                        border-radius: 9999px;
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.1rem;
                        transition: border-color 0.2s ease;
                    }

                    .qty-button:hover {
                        border-color: #2563eb;
                    }

                    .qty-value {
                        width: 3rem;
                        text-align: center;
                        font-size: 1.25rem;
                        font-weight: 600;
                    }

                    .add-cart {
                        background: #2563eb;
                        color: #fff;
                        padding: 1rem;
                        border-radius: 0.75rem;
                        font-size: 1.1rem;
                        font-weight: 600;
                        transition: background 0.2s ease, transform 0.2s ease;
                    }

                    .add-cart:hover {
                        background: #1d4ed8;
                        transform: scale(1.02);
                    }

                    .add-cart:active {
                        transform: scale(0.98);
                    }

                    .mini-actions {
                        display: flex;
                        gap: 0.75rem;
                    }

                    .mini-actions button {
                        flex: 1;
                        border: 2px solid #d1d5db;
                        padding: 0.75rem;
                        border-radius: 0.75rem;
                        font-weight: 600;
                        transition: border-color 0.2s ease;
                    }

                    .mini-actions button:hover {
                        border-color: #9ca3af;
                    }

                    .trust-mini {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1rem;
                        padding-top: 1.5rem;
                        border-top: 1px solid #e5e7eb;
                        text-align: center;
                    }

                    .trust-glyph {
                        font-size: 1.4rem;
                        margin-bottom: 0.25rem;
                    }

                    .trust-title {
                        font-size: 0.85rem;
                        font-weight: 600;
                    }

                    .trust-sub {
                        font-size: 0.75rem;
                        color: #4b5563;
                    }

                    .product-cue {
                        position: absolute;
                        bottom: 3rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 20;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        color: #6b7280;
                        font-size: 0.875rem;
                        font-weight: 500;
                        transition: opacity 0.3s ease;
                    }

                    .product-cue .cue-shell {
                        width: 1.5rem;
                        height: 2.5rem;
                        border: 2px solid #9ca3af;
                        border-radius: 9999px;
                        display: flex;
                        justify-content: center;
                        padding-top: 0.5rem;
                    }

                    .product-cue .cue-dot {
                        width: 0.35rem;
                        height: 0.35rem;
                        background: #9ca3af;
                        border-radius: 9999px;
                        animation: cue-bob 1.5s ease-in-out infinite;
                    }

                    @keyframes cue-bob {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(12px); }
                    }

                    .split-dial {
                        position: absolute;
                        top: 8rem;
                        right: 2rem;
                        z-index: 20;
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        background: rgba(255, 255, 255, 0.9);
                        border: 1px solid #e5e7eb;
                        padding: 0.75rem 1.5rem;
                        border-radius: 9999px;
                        box-shadow: 0 12px 30px rgba(0, 0, 0, 0.1);
                        transition: opacity 0.3s ease;
                    }

                    .dial-svg {
                        transform: rotate(-90deg);
                    }

                    .dial-text {
                        position: absolute;
                        left: 1.5rem;
                        width: 48px;
                        text-align: center;
                        font-size: 0.7rem;
                        font-weight: 700;
                        color: #2563eb;
                    }

                    .dial-small {
                        font-size: 0.7rem;
                        color: #6b7280;
                    }

                    .dial-big {
                        font-size: 0.85rem;
                        font-weight: 600;
                    }

                    .hero-fade-out {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        height: 8rem;
                        background: linear-gradient(180deg, transparent, #fff);
                        z-index: 10;
                        pointer-events: none;
                    }

                    .tech-track {
                        position: relative;
                        height: 400vh;
                    }

                    .tech-pin {
                        position: sticky;
                        top: 0;
                        height: 100vh;
                        overflow: hidden;
                    }

                    .tech-bg {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(135deg, #0f172a, #134e4a, #0f172a);
                    }

                    .tech-grid {
                        position: relative;
                        height: 100%;
                        display: flex;
                    }

                    @media (max-width: 900px) {
                        .tech-grid {
                            flex-direction: column;
                        }
                    }

                    .tech-copy-side,
                    .tech-visual-side {
                        flex: 1;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 3rem;
                    }

                    .tech-copy {
                        max-width: 32rem;
                        animation: slide-in 0.5s ease both;
                    }

                    @keyframes slide-in {
                        from {
                            opacity: 0;
                            transform: translateX(-50px);
                        }
                        to {
                            opacity: 1;
                            transform: translateX(0);
                        }
                    }

                    .tech-chip {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.75rem;
                        background: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        backdrop-filter: blur(4px);
                        padding: 0.75rem 1rem;
                        border-radius: 0.75rem;
                        margin-bottom: 2rem;
                    }

                    .chip-pill {
                        width: 2.5rem;
                        height: 3.5rem;
                        background: linear-gradient(180deg, #374151, #111827);
                        border-radius: 0.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.4rem;
                    }

                    .chip-sub {
                        max-width: 14rem;
                        font-size: 0.7rem;
                        color: #d1d5db;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }

                    .tech-copy h2 {
                        font-size: clamp(2.2rem, 4vw, 3rem);
                        color: #fff;
                        margin: 0 0 1.5rem;
                    }

                    .tech-copy p {
                        font-size: 1.1rem;
                        color: #d1d5db;
                        line-height: 1.7;
                        margin: 0 0 2rem;
                    }

                    .tech-count {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }

                    .count-now {
                        font-size: 1.75rem;
                        font-weight: 700;
                        color: #fff;
                    }

                    .count-line {
                        flex: 1;
                        height: 1px;
                        background: rgba(255, 255, 255, 0.3);
                    }

                    .count-total {
                        color: #9ca3af;
                    }

                    .tech-divider {
                        position: absolute;
                        left: 50%;
                        top: 0;
                        bottom: 0;
                        width: 1px;
                        background: linear-gradient(180deg, transparent, rgba(255, 255, 255, 0.3), transparent);
                    }

                    @media (max-width: 900px) {
                        .tech-divider {
                            display: none;
                        }
                    }

                    .tech-visual {
                        position: relative;
                        width: 100%;
                        height: 100%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        animation: fade-up 0.6s ease both;
                    }

                    @keyframes fade-up {
                        from {
                            opacity: 0;
                            transform: scale(0.9);
                        }
                        to {
                            opacity: 1;
                            transform: scale(1);
                        }
                    }

                    .tech-dots {
                        position: absolute;
                        bottom: 3rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        gap: 0.75rem;
                        z-index: 10;
                    }

                    .tech-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.3);
                        transition: width 0.3s ease, background 0.3s ease;
                    }

                    .tech-dot.active {
                        width: 3rem;
                        background: #fff;
                    }

                    .body-visual {
                        position: relative;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .silhouette {
                        opacity: 0.4;
                    }

                    .hotspot {
                        position: absolute;
                        top: 30%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        width: 7rem;
                        height: 7rem;
                        background: rgba(239, 68, 68, 0.3);
                        border-radius: 9999px;
                        filter: blur(30px);
                        animation: pulse-scale 2s ease-in-out infinite;
                    }

                    .dots-visual {
                        position: relative;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 100%;
                        height: 100%;
                    }

                    .burst-dot {
                        position: absolute;
                        width: 1.5rem;
                        height: 1.5rem;
                        border-radius: 9999px;
                        opacity: 0;
                        animation: dot-pop 0.6s ease both;
                    }

                    @keyframes dot-pop {
                        from {
                            opacity: 0;
                            scale: 0;
                        }
                        to {
                            opacity: 1;
                            scale: 1;
                        }
                    }

                    .molecule-card {
                        position: relative;
                        background: rgba(30, 41, 59, 0.9);
                        border: 2px solid rgba(255, 255, 255, 0.3);
                        border-radius: 1rem;
                        padding: 1.5rem;
                        text-align: center;
                        box-shadow: 0 25px 60px rgba(0, 0, 0, 0.4);
                        animation: fade-up 0.5s ease 1s both;
                    }

                    .molecule-name {
                        font-size: 0.85rem;
                        color: #d1d5db;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }

                    .molecule-sub {
                        font-size: 0.7rem;
                        color: #9ca3af;
                        margin-bottom: 0.75rem;
                    }

                    .molecule-svg {
                        opacity: 0.7;
                    }

                    .chart-visual {
                        width: 100%;
                        max-width: 28rem;
                        color: #fff;
                    }

                    .chart-title {
                        text-align: center;
                        font-weight: 700;
                        margin-bottom: 2rem;
                    }

                    .chart-bars {
                        display: flex;
                        align-items: flex-end;
                        gap: 1.5rem;
                        height: 16rem;
                    }

                    .chart-col {
                        flex: 1;
                        display: flex;
                        flex-direction: column;
                        justify-content: flex-end;
                        height: 100%;
                    }

                    .bar {
                        position: relative;
                        border-radius: 0.75rem 0.75rem 0 0;
                        overflow: hidden;
                        animation: bar-grow 2s ease both;
                    }

                    .bar.ours {
                        height: 85%;
                        background: linear-gradient(0deg, #0891b2, #22d3ee);
                        animation-delay: 0.5s;
                    }

                    .bar.theirs {
                        height: 45%;
                        background: linear-gradient(0deg, #4b5563, #6b7280);
                        opacity: 0.6;
                        animation-delay: 0.7s;
                    }

                    @keyframes bar-grow {
                        from { max-height: 0; }
                        to { max-height: 100%; }
                    }

                    .bar-shine {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(0deg,
                            rgba(255, 255, 255, 0),
                            rgba(255, 255, 255, 0.2),
                            rgba(255, 255, 255, 0));
                        animation: shine-rise 2s linear infinite;
                    }

                    @keyframes shine-rise {
                        from { transform: translateY(100%); }
                        to { transform: translateY(-100%); }
                    }

                    .bar-label {
                        margin-top: 1rem;
                        text-align: center;
                        font-size: 0.8rem;
                        font-weight: 700;
                    }

                    .bar-label.dim {
                        color: #9ca3af;
                    }

                    .chart-base {
                        margin-top: 2rem;
                        border-top: 2px solid rgba(255, 255, 255, 0.3);
                        padding-top: 1rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        color: #9ca3af;
                        font-size: 0.75rem;
                    }

                    .chart-marker {
                        width: 0.75rem;
                        height: 0.75rem;
                        background: #fff;
                        border-radius: 9999px;
                        animation: marker-slide 1.5s ease-in-out infinite;
                    }

                    @keyframes marker-slide {
                        0%, 100% { transform: translateX(0); }
                        50% { transform: translateX(10px); }
                    }

                    .pill-visual {
                        position: relative;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .pill-half {
                        position: absolute;
                        top: -5rem;
                        width: 4rem;
                        height: 10rem;
                        box-shadow: 0 25px 60px rgba(0, 0, 0, 0.4);
                        animation: pill-open 1s ease 0.5s both;
                    }

                    .pill-half.dark {
                        left: -4rem;
                        background: linear-gradient(180deg, #374151, #111827);
                        border-radius: 9999px 0 0 9999px;
                        --open-x: -40px;
                        --open-rot: -15deg;
                    }

                    .pill-half.gold {
                        left: 0;
                        background: linear-gradient(180deg, #ca8a04, #854d0e);
                        border-radius: 0 9999px 9999px 0;
                        --open-x: 40px;
                        --open-rot: 15deg;
                    }

                    @keyframes pill-open {
                        from { transform: translateX(0) rotate(0); }
                        to { transform: translateX(var(--open-x)) rotate(var(--open-rot)); }
                    }

                    .pill-tag {
                        position: absolute;
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        opacity: 0;
                        animation: dot-pop 0.8s ease both;
                    }

                    .pill-dot {
                        width: 1rem;
                        height: 1rem;
                        background: #F59E0B;
                        border-radius: 9999px;
                    }

                    .pill-name {
                        background: rgba(30, 41, 59, 0.9);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        color: #fff;
                        font-size: 0.65rem;
                        font-weight: 600;
                        padding: 0.25rem 0.6rem;
                        border-radius: 0.5rem;
                        white-space: nowrap;
                    }

                    @media (max-width: 768px) {
                        .pill-name {
                            display: none;
                        }
                    }

                    .pill-burst {
                        position: absolute;
                        width: 5rem;
                        height: 5rem;
                        background: #facc15;
                        border-radius: 9999px;
                        filter: blur(50px);
                        opacity: 0;
                        animation: burst-glow 1s ease 0.8s both;
                    }

                    @keyframes burst-glow {
                        to { opacity: 0.6; transform: scale(2); }
                    }

                    .product-details {
                        position: relative;
                        z-index: 10;
                        padding: 5rem 0;
                        background: #fff;
                    }

                    .details-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: start;
                    }

                    @media (max-width: 900px) {
                        .details-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    .tag-row {
                        display: flex;
                        gap: 0.5rem;
                        margin-bottom: 1rem;
                    }

                    .tag {
                        font-size: 0.75rem;
                        font-weight: 600;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                    }

                    .tag.blue {
                        background: #dbeafe;
                        color: #1e40af;
                    }

                    .tag.green {
                        background: #dcfce7;
                        color: #166534;
                    }

                    .details-copy h2 {
                        font-size: clamp(2.2rem, 4vw, 3rem);
                        margin: 0 0 1rem;
                    }

                    .details-lede {
                        font-size: 1.25rem;
                        color: #374151;
                        line-height: 1.7;
                        margin: 0 0 2rem;
                    }

                    .benefit-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }

                    .benefit-chip {
                        background: #f9fafb;
                        padding: 1rem;
                        border-radius: 0.75rem;
                        font-weight: 500;
                        color: #166534;
                    }

                    .details-purchase {
                        position: sticky;
                        top: 8rem;
                    }

                    .ing-panel {
                        padding: 5rem 0;
                        background: linear-gradient(135deg, #0f172a, #1e293b);
                        color: #fff;
                    }

                    .ing-panel .section-head h2 {
                        color: #fff;
                    }

                    .ing-panel .section-head p {
                        color: #d1d5db;
                    }

                    .ing-panel-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }

                    @media (max-width: 900px) {
                        .ing-panel-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    .ing-entries {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }

                    .ing-entry {
                        display: flex;
                        gap: 1rem;
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.05);
                        cursor: pointer;
                        transition: background 0.3s ease, transform 0.3s ease;
                    }

                    .ing-entry:hover {
                        background: rgba(255, 255, 255, 0.08);
                    }

                    .ing-entry.active {
                        background: rgba(255, 255, 255, 0.1);
                        transform: scale(1.05);
                    }

                    .ing-index {
                        flex-shrink: 0;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.25rem;
                        font-weight: 700;
                    }

                    .ing-entry h3 {
                        margin: 0 0 0.35rem;
                        font-size: 1.25rem;
                    }

                    .ing-benefit {
                        color: #34d399;
                        font-weight: 600;
                        margin: 0 0 0.35rem;
                    }

                    .ing-entry p {
                        margin: 0;
                        color: #d1d5db;
                    }

                    .ing-showcase {
                        position: relative;
                        height: 31rem;
                        border-radius: 1.5rem;
                        background: linear-gradient(135deg,
                            rgba(59, 130, 246, 0.2),
                            rgba(139, 92, 246, 0.2));
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .ing-capsule {
                        font-size: 7rem;
                        animation: spin-slow-10 10s linear infinite;
                    }

                    @keyframes spin-slow-10 {
                        to { transform: rotate(360deg); }
                    }

                    .product-cta {
                        padding: 5rem 1rem;
                        background: linear-gradient(90deg, #2563eb, #7c3aed);
                        color: #fff;
                        text-align: center;
                    }

                    .product-cta h2 {
                        font-size: clamp(2.2rem, 4vw, 3rem);
                        margin: 0 0 1.5rem;
                    }

                    .product-cta p {
                        font-size: 1.25rem;
                        opacity: 0.9;
                        margin: 0 0 2rem;
                    }

                    .cta-btn {
                        color: #2563eb;
                    }

                    .cta-note {
                        margin-top: 1.5rem !important;
                        opacity: 0.75;
                        font-size: 1rem !important;
                    }
                "#}
            </style>
        </div>
    }
}

/// "Inside Every Capsule": ingredient list with a hover-driven highlight.
#[function_component(IngredientsPanel)]
fn ingredients_panel() -> Html {
    let active = use_state(|| 0usize);

    html! {
        <section class="ing-panel">
            <div class="shell">
                <div class="section-head">
                    <h2>{"Inside Every Capsule"}</h2>
                    <p>{"6 clinically-proven ingredients working together"}</p>
                </div>
                <div class="ing-panel-grid">
                    <div class="ing-entries">
                        { for INGREDIENT_DETAILS.iter().enumerate().map(|(idx, ingredient)| {
                            let onmouseenter = {
                                let active = active.clone();
                                Callback::from(move |_| active.set(idx))
                            };
                            html! {
                                <div
                                    class={classes!("ing-entry", (idx == *active).then(|| "active"))}
                                    {onmouseenter}
                                >
                                    <div class="ing-index" style={format!("background: {};", ingredient.color)}>
                                        {idx + 1}
                                    </div>
                                    <div>
                                        <h3>{ingredient.name}</h3>
                                        <p class="ing-benefit">{ingredient.benefit}</p>
                                        <p>{ingredient.blurb}</p>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                    <div class="ing-showcase">
                        <div class="ing-capsule">{"💊"}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
