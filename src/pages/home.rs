use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlVideoElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::config;
use crate::motion::hooks::{use_reveal, use_scrolled_past, use_section_progress, ProgressMode};
use crate::motion::keyframes::Track;
use crate::Route;

const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "#"),
    ("Shop", "/product/1"),
    ("Product Verification", "#verify"),
    ("How To Use", "#howto"),
    ("Wholesale Registration", "#wholesale"),
    ("FAQs", "#faq"),
    ("Reviews", "#reviews"),
    ("Login", "#login"),
    ("Contact us", "#contact"),
];

struct VerifyStep {
    number: &'static str,
    title: &'static str,
    blurb: &'static str,
    image: &'static str,
    badge: Option<&'static str>,
}

const VERIFY_STEPS: &[VerifyStep] = &[
    VerifyStep {
        number: "Step 1",
        title: "Identify The Secret Code",
        blurb: "When you purchase Neo Hair Lotion Green, look for the silver sticker on the box.",
        image: "https://images.unsplash.com/photo-1556228578-8c89e6adf883?w=400&h=300&fit=crop",
        badge: None,
    },
    VerifyStep {
        number: "Step 2",
        title: "Scratch off the Secret Code",
        blurb: "Gently scratch the coating with a coin or your fingernail to reveal the unique 6-digit code.",
        image: "https://images.unsplash.com/photo-1614935151651-0bea6508db6b?w=400&h=300&fit=crop",
        badge: Some("SECRET CODE"),
    },
    VerifyStep {
        number: "Step 3",
        title: "Go to Verification Page",
        blurb: "Visit our verification website and enter the code to verify your product's authenticity.",
        image: "https://images.unsplash.com/photo-1563986768609-322da13575f3?w=400&h=300&fit=crop",
        badge: None,
    },
    VerifyStep {
        number: "Step 4",
        title: "Confirmation",
        blurb: "Once you submit the code, you will receive an instant confirmation if your product is authentic.",
        image: "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=400&h=300&fit=crop",
        badge: None,
    },
];

const AUTH_MARKS: &[(&str, &str)] = &[
    ("Hologram Sticker", "Multi-dimensional security feature that changes color when tilted"),
    ("Secret code on back", "Unique verification code protected by scratch-off coating"),
    ("Unique serial number", "Individual tracking number printed on each bottle"),
    ("QR code verification", "Scan to instantly verify product authenticity"),
];

const EXPERIENCE_BENEFITS: &[(&str, &str, &str)] = &[
    ("🌿", "Natural", "Herbal Formula"),
    ("🔬", "Clinically", "Tested"),
    ("💪", "Prevents", "Hair Loss"),
    ("✨", "Stimulates", "Growth"),
    ("🎯", "Targets", "DHT"),
    ("⚡", "Fast", "Results"),
];

const PILLARS: &[(&str, &str, &str)] = &[
    ("🛡", "BLOCK DHT", "Prevents hormone-related hair loss"),
    ("🌿", "STIMULATE FOLLICLES", "Awakens dormant hair roots"),
    ("❤", "INCREASE CIRCULATION", "Delivers nutrients to scalp"),
];

struct ShopProduct {
    id: u32,
    name: &'static str,
    category: &'static str,
    price: &'static str,
    rating: usize,
    image_path: &'static str,
    blurb: &'static str,
    benefits: &'static [&'static str],
    badge: &'static str,
}

const SHOP_PRODUCTS: &[ShopProduct] = &[
    ShopProduct {
        id: 1,
        name: "Neo Hair Lotion",
        category: "Hair Serum",
        price: "125.00 AED",
        rating: 4,
        image_path: "/product.template/2427/image_512",
        blurb: "All-natural Thai herbal solution for hair regrowth.",
        benefits: &["Reduces Hair Fall", "Natural Ingredients", "Clinically Proven"],
        badge: "Best Seller",
    },
    ShopProduct {
        id: 2,
        name: "Rosemary Mint Oil",
        category: "Hair Oil",
        price: "40.00 AED",
        rating: 5,
        image_path: "/product.template/2429/image_512",
        blurb: "Enriched with rosemary and biotin to nourish scalp.",
        benefits: &["Scalp Health", "Growth Boost", "Shine Enhancement"],
        badge: "New",
    },
    ShopProduct {
        id: 3,
        name: "Derma Roller Kit",
        category: "Hair Regrowth",
        price: "15.00 AED",
        rating: 4,
        image_path: "/product.template/2428/image_512",
        blurb: "Microneedling tool that improves absorption.",
        benefits: &["Boosts Absorption", "Stimulates Scalp", "Easy to Use"],
        badge: "Tool",
    },
    ShopProduct {
        id: 4,
        name: "Hair Growth Pack",
        category: "Hair Regrowth",
        price: "170.00 AED",
        rating: 4,
        image_path: "/product.template/2471/image_512",
        blurb: "Complete solution combining Neo Hair Lotion.",
        benefits: &["Complete Kit", "3-6 Month Supply", "Best Value"],
        badge: "Bundle",
    },
];

struct Testimonial {
    name: &'static str,
    age: &'static str,
    result: &'static str,
    detail: &'static str,
    image: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Hasan Bakheet",
        age: "27 years old",
        result: "This product is very good",
        detail: "It is really working great for me and stopped my hair falling at the second month",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=300&h=300&fit=crop",
    },
    Testimonial {
        name: "Fareeque Ali",
        age: "34 years old",
        result: "It has great result!",
        detail: "I was using since 4 month now. I find improvements in my hair fall.",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=300&h=300&fit=crop",
    },
    Testimonial {
        name: "Renji Santro",
        age: "29 years old",
        result: "Highly good product!",
        detail: "I am using this product since January and the results are highly satisfied.",
        image: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=300&h=300&fit=crop",
    },
    Testimonial {
        name: "Hassan Omer",
        age: "45 years old",
        result: "Amazing result!!",
        detail: "This is a magic for hair growth. I see results I didn't expect.",
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=300&h=300&fit=crop",
    },
];

const STATS: &[(&str, &str)] = &[
    ("200K+", "Happy Customers"),
    ("85%", "Saw Results"),
    ("95%", "Would Recommend"),
];

const INGREDIENTS: &[(&str, &str)] = &[
    ("Saw Palmetto", "Blocks DHT hormone"),
    ("Biotin", "Strengthens hair structure"),
    ("Zinc", "Promotes scalp health"),
    ("Thai Herbs", "Natural nourishment"),
];

const USAGE_STEPS: &[(&str, &str, &str)] = &[
    ("1", "Cleanse", "Wash hair with mild shampoo"),
    ("2", "Apply", "Massage lotion into scalp"),
    ("3", "Wait", "Leave on for best results"),
    ("4", "Repeat", "Use daily for 3-6 months"),
];

struct Article {
    image: &'static str,
    category: &'static str,
    title: &'static str,
    date: &'static str,
}

const ARTICLES: &[Article] = &[
    Article {
        image: "https://images.unsplash.com/photo-1519699047748-de8e457a634e?w=600&h=400&fit=crop",
        category: "Hair Loss",
        title: "Why Is My Hair Falling? Causes, Proven Solutions",
        date: "Posted 2 days ago",
    },
    Article {
        image: "https://images.unsplash.com/photo-1560869713-7d0a29430803?w=600&h=400&fit=crop",
        category: "Treatment",
        title: "Transform Your Hair: The Ultimate Guide to Natural Solutions",
        date: "Posted 1 week ago",
    },
    Article {
        image: "https://images.unsplash.com/photo-1515377905703-c4788e51af15?w=600&h=400&fit=crop",
        category: "Ingredients",
        title: "Is Saw Palmetto Effective for Hair Loss?",
        date: "Posted 2 weeks ago",
    },
];

const TRUST_BADGES: &[(&str, &str, &str)] = &[
    ("🛡", "100% Authentic", "Verified Original Product"),
    ("🏅", "Clinically Tested", "Proven Results"),
    ("💚", "Safe & Natural", "No Side Effects"),
    ("📦", "Fast Shipping", "Delivered Worldwide"),
];

const FAQS: &[(&str, &str)] = &[
    (
        "How long does it take to see results?",
        "Most customers notice visible improvements within 3-6 months of consistent daily \
         use. Results may vary based on individual hair conditions.",
    ),
    (
        "Is Neo Hair Lotion safe to use?",
        "Yes, our formula is made from natural Thai herbs and has been clinically tested. \
         It's safe for daily use and suitable for both men and women.",
    ),
    (
        "Can I use it with other hair products?",
        "Yes, Neo Hair Lotion can be used alongside your regular hair care routine. Apply \
         it after shampooing and allow it to fully absorb.",
    ),
    (
        "What if I'm not satisfied with the results?",
        "We offer a 90-day money-back guarantee. If you're not satisfied with the results, \
         contact us for a full refund.",
    ),
];

/// Transparent navbar used only on the home page: see-through over the hero
/// video, solid white once the page scrolls.
#[function_component(HomeNavbar)]
fn home_navbar() -> Html {
    let scrolled = use_scrolled_past(50.0);
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    html! {
        <nav class={classes!("home-nav", scrolled.then(|| "solid"))}>
            <div class="shell home-nav-inner">
                <Link<Route> to={Route::Home} classes="home-brand">
                    {"GREEN WEALTH"}
                </Link<Route>>

                <div class="home-links">
                    { for NAV_LINKS.iter().take(7).map(|(name, href)| html! {
                        <a href={*href} class="home-link">{*name}</a>
                    }) }
                </div>

                <div class="home-icons">
                    <button class="home-icon">{"⌕"}</button>
                    <button class="home-icon cart">
                        {"🛍"}
                        <span class="cart-badge">{"0"}</span>
                    </button>
                    <button class="home-burger" onclick={toggle_menu}>
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </div>

            <div class={classes!("home-mobile-menu", (*menu_open).then(|| "open"))}>
                { for NAV_LINKS.iter().map(|(name, href)| html! {
                    <a href={*href} class="home-mobile-link">{*name}</a>
                }) }
            </div>
        </nav>
    }
}

/// Full-screen video hero. The headline block drifts down and fades as the
/// section scrolls out; the video is a best-effort autoplay and quietly
/// stays on its poster frame when the browser refuses.
#[function_component(VideoHero)]
fn video_hero() -> Html {
    let section_ref = use_node_ref();
    let video_ref = use_node_ref();
    let progress = use_section_progress(section_ref.clone(), ProgressMode::EntryToExit);

    // The hero opens the page, so it rests at progress 0.5 (top pinned at
    // the viewport top, bottom at the fold); the exit half drives the
    // parallax.
    let drift = Track::new(vec![(0.5, 0.0), (1.0, 100.0)]).sample(progress);
    let fade = Track::new(vec![(0.5, 1.0), (0.75, 0.0)]).sample(progress);

    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    if let Ok(promise) = video.play() {
                        spawn_local(async move {
                            let _ = JsFuture::from(promise).await;
                        });
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <section ref={section_ref} class="video-hero">
            <div class="hero-media">
                <video
                    ref={video_ref}
                    autoplay=true
                    loop=true
                    muted=true
                    playsinline=true
                    poster="https://images.unsplash.com/photo-1562322140-8baeececf3df?w=1920&h=1080&fit=crop"
                >
                    <source src="/video/hair_video.mp4" type="video/mp4" />
                </video>
                <div class="hero-shade"></div>
            </div>

            <div
                class="hero-inner"
                style={format!("transform: translateY({drift:.1}px); opacity: {fade:.3};")}
            >
                <div class="shell">
                    <div class="hero-copy">
                        <h1 class="hero-title">
                            {"HORMONAL"}<br />
                            <span class="grad-text">{"HAIR LOSS"}</span>
                        </h1>
                        <div class="hero-pill">{"DISCOVER SOLUTION"}</div>
                        <p class="hero-lede">
                            {"A natural DHT blocker hair loss treatment hormone triggered hair \
                              thinning in both men and women."}
                        </p>
                        <div class="hero-cta-row">
                            <Link<Route> to={Route::Product { id: 1 }}>
                                <button class="btn btn-solid">{"Shop Now ›"}</button>
                            </Link<Route>>
                            <button class="btn btn-glass">{"▶ Watch How It Works"}</button>
                        </div>
                        <div class="hero-proof">
                            <div class="avatar-row">
                                <span class="avatar"></span>
                                <span class="avatar"></span>
                                <span class="avatar"></span>
                                <span class="avatar"></span>
                            </div>
                            <div>
                                <div class="stars">{"★★★★★"}</div>
                                <p>{"Trusted by 200,000+ customers"}</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="scroll-cue">
                <div class="cue-shell">
                    <div class="cue-dot"></div>
                </div>
            </div>
        </section>
    }
}

#[function_component(VerificationSection)]
fn verification_section() -> Html {
    let head_ref = use_node_ref();
    let head_seen = use_reveal(head_ref.clone(), 0.85);
    let grid_ref = use_node_ref();
    let grid_seen = use_reveal(grid_ref.clone(), 0.85);
    let form_ref = use_node_ref();
    let form_seen = use_reveal(form_ref.clone(), 0.85);

    html! {
        <section id="verify" class="verify-section">
            <div class="shell">
                <div ref={head_ref} class={classes!("section-head", "reveal", head_seen.then(|| "visible"))}>
                    <h2>
                        {"Follow 4 simple steps to verify the original "}
                        <span class="accent-text">{"Neo Hair Lotion"}</span>
                    </h2>
                </div>

                <div ref={grid_ref} class={classes!("step-grid", "reveal", grid_seen.then(|| "visible"))}>
                    { for VERIFY_STEPS.iter().enumerate().map(|(idx, step)| html! {
                        <div class="step-card" style={format!("transition-delay: {}ms", idx * 100)}>
                            <div class="step-media">
                                <img src={step.image} alt={step.title} loading="lazy" />
                                { if let Some(badge) = step.badge {
                                    html! { <span class="step-badge">{badge}</span> }
                                } else {
                                    html! {}
                                } }
                            </div>
                            <div class="step-body">
                                <div class="step-num">{step.number}</div>
                                <h3>{step.title}</h3>
                                <p>{step.blurb}</p>
                            </div>
                        </div>
                    }) }
                </div>

                <div ref={form_ref} class={classes!("verify-form", "reveal", form_seen.then(|| "visible"))}>
                    <h3>{"Verify Neo Hair Lotion"}</h3>
                    <p class="form-sub">{"Product Verification"}</p>
                    <label>{"1. Put the 'Secret code' on the top of the box."}</label>
                    <input type="text" placeholder="Enter 6-digit number code" />
                    <label>{"2. After do 'little number code' on the side."}</label>
                    <input type="text" placeholder="Enter code" />
                    <button class="verify-submit">{"Verify"}</button>
                </div>
            </div>
        </section>
    }
}

#[function_component(ShowcaseSection)]
fn showcase_section() -> Html {
    let media_ref = use_node_ref();
    let media_seen = use_reveal(media_ref.clone(), 0.85);
    let copy_ref = use_node_ref();
    let copy_seen = use_reveal(copy_ref.clone(), 0.85);

    let product_image = format!("{}{}", config::get_image_base(), "/product.template/2427/image_512");

    html! {
        <section class="showcase-section">
            <div class="shell showcase-grid">
                <div ref={media_ref} class={classes!("showcase-media", "reveal", "from-left", media_seen.then(|| "visible"))}>
                    <div class="spin-ring"></div>
                    <div class="pack-grid">
                        <div class="pack-card">
                            <img src={product_image.clone()} alt="Neo Hair Lotion Box" loading="lazy" />
                            <div class="pack-label">{"AUTHENTIC PACKAGING"}</div>
                        </div>
                        <div class="pack-card offset">
                            <img src={product_image} alt="Neo Hair Lotion Bottle" loading="lazy" />
                            <div class="pack-label">{"ORIGINAL PRODUCT"}</div>
                        </div>
                    </div>
                    <div class="float-tag top">{"Hologram security sticker"}</div>
                    <div class="float-tag bottom">{"Unique serial number"}</div>
                </div>

                <div ref={copy_ref} class={classes!("showcase-copy", "reveal", "from-right", copy_seen.then(|| "visible"))}>
                    <span class="eyebrow showcase-eyebrow">{"Identify the original"}</span>
                    <h2>{"GREEN WEALTH NEO HAIR LOTION!"}</h2>
                    <div class="auth-list">
                        { for AUTH_MARKS.iter().map(|(label, blurb)| html! {
                            <div class="auth-item">
                                <span class="auth-check">{"✓"}</span>
                                <div>
                                    <h4>{*label}</h4>
                                    <p>{*blurb}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                    <button class="btn accent-btn">{"Verify Your Product ›"}</button>
                </div>
            </div>
        </section>
    }
}

#[function_component(ExperienceSection)]
fn experience_section() -> Html {
    let copy_ref = use_node_ref();
    let copy_seen = use_reveal(copy_ref.clone(), 0.85);
    let figure_ref = use_node_ref();
    let figure_seen = use_reveal(figure_ref.clone(), 0.85);

    let product_image = format!("{}{}", config::get_image_base(), "/product.template/2427/image_512");

    html! {
        <section class="experience-section">
            <div class="shell exp-grid">
                <div ref={copy_ref} class={classes!("exp-copy", "reveal", "from-left", copy_seen.then(|| "visible"))}>
                    <h2>
                        {"Experience Hair Regrowth with"}<br />
                        <span class="accent-text">{"Neo Hair Lotion"}</span>
                    </h2>
                    <h3>{"The Authentic, Ancient Thai Herbal Solution for Hair Loss"}</h3>
                    <p>
                        {"Discover the power of traditional Thai medicine combined with modern \
                          science. Our natural hair regrowth serum is formulated with premium \
                          Thai herbs designed to combat your hair's destiny. Made from powerful \
                          blend of Thai herbs, our formula is clinically proven to revive \
                          dormant hair follicles, enhance blood circulation, and shield your \
                          scalp from DHT effects."}
                    </p>
                    <div class="benefit-tiles">
                        { for EXPERIENCE_BENEFITS.iter().map(|(glyph, label, blurb)| html! {
                            <div class="tile">
                                <div class="tile-glyph">{*glyph}</div>
                                <div class="tile-label">{*label}</div>
                                <div class="tile-blurb">{*blurb}</div>
                            </div>
                        }) }
                    </div>
                    <button class="btn accent-btn">{"Learn More ›"}</button>
                </div>

                <div ref={figure_ref} class={classes!("exp-figure", "reveal", "from-right", figure_seen.then(|| "visible"))}>
                    <div class="exp-stage">
                        <img class="float-img" src={product_image} alt="Neo Hair Lotion Product" loading="lazy" />
                    </div>
                    <div class="exp-stats">
                        <div>
                            <div class="stat-value">{"85%"}</div>
                            <div class="stat-label">{"Success Rate"}</div>
                        </div>
                        <div>
                            <div class="stat-value">{"3-6"}</div>
                            <div class="stat-label">{"Months Result"}</div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(PillarsSection)]
fn pillars_section() -> Html {
    let head_ref = use_node_ref();
    let head_seen = use_reveal(head_ref.clone(), 0.85);
    let grid_ref = use_node_ref();
    let grid_seen = use_reveal(grid_ref.clone(), 0.85);

    html! {
        <section id="howto" class="pillars-section">
            <div class="shell">
                <div ref={head_ref} class={classes!("section-head", "reveal", head_seen.then(|| "visible"))}>
                    <h2 class="on-dark">{"How Neo Hair Lotion Revitalizes Your Hair"}</h2>
                    <p class="on-dark-sub">
                        {"Our formula works by targeting the scalp and revitalizing dormant hair \
                          follicles, our natural ingredients significantly stimulate blood flow, \
                          delivering essential nutrients directly to the hair roots."}
                    </p>
                </div>
                <div ref={grid_ref} class={classes!("pillar-grid", "reveal", grid_seen.then(|| "visible"))}>
                    { for PILLARS.iter().enumerate().map(|(idx, (glyph, title, blurb))| html! {
                        <div class="pillar-card" style={format!("transition-delay: {}ms", idx * 200)}>
                            <div class="pillar-icon">{*glyph}</div>
                            <h3>{*title}</h3>
                            <p>{*blurb}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(ShopSection)]
fn shop_section() -> Html {
    let head_ref = use_node_ref();
    let head_seen = use_reveal(head_ref.clone(), 0.85);
    let grid_ref = use_node_ref();
    let grid_seen = use_reveal(grid_ref.clone(), 0.85);

    html! {
        <section id="shop" class="shop-section">
            <div class="shop-backdrop">
                <img
                    src="https://d1or11in5278oe.cloudfront.net/how-to-stop-and-prevent-hair-loss-in-men-under-25-1.jpg"
                    alt="Hair wellness background"
                    loading="lazy"
                />
                <div class="shop-shade"></div>
            </div>

            <div class="shell shop-inner">
                <div ref={head_ref} class={classes!("shop-head", "reveal", head_seen.then(|| "visible"))}>
                    <span class="shop-eyebrow">{"Ancient Thai Herbal Solutions"}</span>
                    <h2>
                        {"Experience Hair Regrowth"}<br />
                        <span class="grad-text">{"The Natural Way"}</span>
                    </h2>
                    <p>
                        {"Time-tested, all-natural hair growth treatments designed to restore \
                          your hair's vitality."}
                    </p>
                    <div class="shop-cta-row">
                        <button class="btn btn-solid">{"Shop Collection ›"}</button>
                        <button class="btn btn-glass">{"Learn More"}</button>
                    </div>
                </div>

                <div ref={grid_ref} class={classes!("shop-grid", "reveal", grid_seen.then(|| "visible"))}>
                    { for SHOP_PRODUCTS.iter().enumerate().map(|(idx, product)| {
                        let image = format!("{}{}", config::get_image_base(), product.image_path);
                        html! {
                            <div class="shop-card" style={format!("transition-delay: {}ms", idx * 100)}>
                                <span class="shop-badge">{product.badge}</span>
                                <div class="shop-media">
                                    <img src={image} alt={product.name} loading="lazy" />
                                    <div class="benefit-overlay">
                                        <h4>{"Key Benefits"}</h4>
                                        { for product.benefits.iter().map(|benefit| html! {
                                            <div class="overlay-line">{"✓ "}{*benefit}</div>
                                        }) }
                                    </div>
                                </div>
                                <div class="shop-body">
                                    <div class="shop-meta">
                                        <span class="shop-category">{product.category}</span>
                                        <span class="stars">{ ("★").repeat(product.rating) }</span>
                                    </div>
                                    <h3>{product.name}</h3>
                                    <p>{product.blurb}</p>
                                    <div class="shop-row">
                                        <span class="shop-price">{product.price}</span>
                                        <Link<Route> to={Route::Product { id: product.id }}>
                                            <button class="shop-add">{"Add ›"}</button>
                                        </Link<Route>>
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(TestimonialsSection)]
fn testimonials_section() -> Html {
    let grid_ref = use_node_ref();
    let grid_seen = use_reveal(grid_ref.clone(), 0.85);

    html! {
        <section id="reviews" class="voices-section">
            <div class="shell">
                <div class="section-head">
                    <h2>{"Real People, Real Result"}</h2>
                    <p>{"Join thousands of satisfied customers"}</p>
                </div>
                <div ref={grid_ref} class={classes!("voices-grid", "reveal", grid_seen.then(|| "visible"))}>
                    { for TESTIMONIALS.iter().enumerate().map(|(idx, voice)| html! {
                        <div class="voice-card" style={format!("transition-delay: {}ms", idx * 100)}>
                            <div class="voice-top">
                                <img src={voice.image} alt={voice.name} loading="lazy" />
                                <h3>{voice.name}</h3>
                                <p>{voice.age}</p>
                            </div>
                            <div class="voice-body">
                                <div class="stars">{"★★★★★"}</div>
                                <h4>{voice.result}</h4>
                                <p>{format!("\u{201c}{}\u{201d}", voice.detail)}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(StatsSection)]
fn stats_section() -> Html {
    let band_ref = use_node_ref();
    let band_seen = use_reveal(band_ref.clone(), 0.85);

    html! {
        <section class="stats-band">
            <div ref={band_ref} class={classes!("shell", "stats-grid", "reveal", "shrunk", band_seen.then(|| "visible"))}>
                { for STATS.iter().map(|(value, label)| html! {
                    <div class="stat">
                        <div class="stat-big">{*value}</div>
                        <div class="stat-sub">{*label}</div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(IngredientsSection)]
fn ingredients_section() -> Html {
    let figure_ref = use_node_ref();
    let figure_seen = use_reveal(figure_ref.clone(), 0.85);
    let list_ref = use_node_ref();
    let list_seen = use_reveal(list_ref.clone(), 0.85);

    html! {
        <section class="ingredients-section">
            <div class="shell">
                <div class="section-head">
                    <h2>{"Powered by Nature: Our Key Ingredients"}</h2>
                    <p>
                        {"Each bottle of Neo Hair Lotion is formulated with a powerhouse blend \
                          of natural Thai herbs."}
                    </p>
                </div>
                <div class="ing-grid">
                    <div ref={figure_ref} class={classes!("ing-figure", "reveal", "from-left", figure_seen.then(|| "visible"))}>
                        <img
                            src="https://images.unsplash.com/photo-1608571423902-eed4a5ad8108?w=800&h=600&fit=crop"
                            alt="Natural Ingredients"
                            loading="lazy"
                        />
                        <div class="pulse-leaf">{"🌿"}</div>
                    </div>
                    <div ref={list_ref} class={classes!("ing-list", "reveal", "from-right", list_seen.then(|| "visible"))}>
                        { for INGREDIENTS.iter().enumerate().map(|(idx, (name, blurb))| html! {
                            <div class="ing-item" style={format!("transition-delay: {}ms", idx * 100)}>
                                <span class="ing-check">{"✓"}</span>
                                <div>
                                    <h3>{*name}</h3>
                                    <p>{*blurb}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(StepsSection)]
fn steps_section() -> Html {
    let grid_ref = use_node_ref();
    let grid_seen = use_reveal(grid_ref.clone(), 0.85);

    html! {
        <section class="steps-section">
            <div class="shell">
                <div class="section-head">
                    <h2>{"Simple Steps to Thicker Hair"}</h2>
                    <p>{"Follow these four simple steps for optimal results."}</p>
                </div>
                <div ref={grid_ref} class={classes!("usteps-grid", "reveal", grid_seen.then(|| "visible"))}>
                    { for USAGE_STEPS.iter().enumerate().map(|(idx, (num, title, blurb))| html! {
                        <div class="ustep" style={format!("transition-delay: {}ms", idx * 100)}>
                            <div class="ustep-card">
                                <div class="ustep-num">{*num}</div>
                                <h3>{*title}</h3>
                                <p>{*blurb}</p>
                            </div>
                            { if idx + 1 < USAGE_STEPS.len() {
                                html! { <span class="ustep-arrow">{"›"}</span> }
                            } else {
                                html! {}
                            } }
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(BlogSection)]
fn blog_section() -> Html {
    let grid_ref = use_node_ref();
    let grid_seen = use_reveal(grid_ref.clone(), 0.85);

    html! {
        <section class="blog-section">
            <div class="shell">
                <div class="section-head">
                    <h2>{"Our latest content"}</h2>
                    <p>{"Check out what's new in our company!"}</p>
                </div>
                <div ref={grid_ref} class={classes!("article-grid", "reveal", grid_seen.then(|| "visible"))}>
                    { for ARTICLES.iter().enumerate().map(|(idx, article)| html! {
                        <article class="article-card" style={format!("transition-delay: {}ms", idx * 100)}>
                            <div class="article-media">
                                <img src={article.image} alt={article.title} loading="lazy" />
                                <span class="article-tag">{article.category}</span>
                            </div>
                            <div class="article-body">
                                <p class="article-date">{article.date}</p>
                                <h3>{article.title}</h3>
                                <button class="article-more">{"Continue Reading ›"}</button>
                            </div>
                        </article>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(TrustSection)]
fn trust_section() -> Html {
    let grid_ref = use_node_ref();
    let grid_seen = use_reveal(grid_ref.clone(), 0.85);

    html! {
        <section class="trust-section">
            <div ref={grid_ref} class={classes!("shell", "trust-grid", "reveal", "shrunk", grid_seen.then(|| "visible"))}>
                { for TRUST_BADGES.iter().map(|(glyph, title, blurb)| html! {
                    <div class="trust-item">
                        <div class="trust-icon">{*glyph}</div>
                        <h3>{*title}</h3>
                        <p>{*blurb}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

/// FAQ accordion. One entry open at a time; opening another closes the
/// previous one.
#[function_component(FaqSection)]
fn faq_section() -> Html {
    let open_index = use_state(|| None::<usize>);

    html! {
        <section id="faq" class="faq-section">
            <div class="faq-shell">
                <div class="section-head">
                    <h2>{"Frequently Asked Questions"}</h2>
                    <p>{"Everything you need to know"}</p>
                </div>
                <div class="faq-list">
                    { for FAQS.iter().enumerate().map(|(idx, (question, answer))| {
                        let is_open = *open_index == Some(idx);
                        let toggle = {
                            let open_index = open_index.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                open_index.set(if is_open { None } else { Some(idx) });
                            })
                        };
                        html! {
                            <div class={classes!("faq-card", is_open.then(|| "open"))}>
                                <button class="faq-q" onclick={toggle}>
                                    <span>{*question}</span>
                                    <span class="chev">{"›"}</span>
                                </button>
                                <div class="faq-a">
                                    <p>{*answer}</p>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(CtaSection)]
fn cta_section() -> Html {
    let inner_ref = use_node_ref();
    let inner_seen = use_reveal(inner_ref.clone(), 0.85);

    html! {
        <section class="home-cta">
            <div class="cta-orb top"></div>
            <div class="cta-orb bottom"></div>
            <div ref={inner_ref} class={classes!("cta-inner", "reveal", inner_seen.then(|| "visible"))}>
                <h2>{"Ready to Transform Your Hair?"}</h2>
                <p>{"Join 200,000+ satisfied customers and start your hair regrowth journey today"}</p>
                <div class="cta-row">
                    <Link<Route> to={Route::Product { id: 1 }}>
                        <button class="btn btn-light">{"Shop Now ›"}</button>
                    </Link<Route>>
                    <button class="btn btn-glass">{"Verify Product 🔒"}</button>
                </div>
                <div class="cta-perks">
                    <span>{"✓ Free Shipping"}</span>
                    <span>{"✓ 90-Day Guarantee"}</span>
                    <span>{"✓ Secure Payment"}</span>
                </div>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <HomeNavbar />
            <VideoHero />
            <VerificationSection />
            <ShowcaseSection />
            <ExperienceSection />
            <PillarsSection />
            <ShopSection />
            <TestimonialsSection />
            <StatsSection />
            <IngredientsSection />
            <StepsSection />
            <BlogSection />
            <TrustSection />
            <FaqSection />
            <CtaSection />
            <Footer />

            <style>
                {r#"
                    .home-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: transparent;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                        color: #fff;
                    }

                    .home-nav.solid {
                        background: #fff;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1);
                        color: #374151;
                    }

                    .home-nav-inner {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        height: 5rem;
                    }

                    .home-brand {
                        font-weight: 700;
                        letter-spacing: 0.25em;
                        font-size: 1.1rem;
                    }

                    .home-links {
                        display: flex;
                        gap: 0.25rem;
                    }

                    @media (max-width: 1024px) {
                        .home-links {
                            display: none;
                        }
                    }

                    .home-link {
                        padding: 0.5rem 0.75rem;
                        border-radius: 0.5rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        transition: background 0.2s ease, color 0.2s ease;
                    }

                    .home-link:hover {
                        background: rgba(255, 255, 255, 0.1);
                    }

                    .home-nav.solid .home-link:hover {
                        background: #ecfdf5;
                        color: #059669;
                    }

                    .home-icons {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }

                    .home-icon {
                        color: inherit;
                        font-size: 1.2rem;
                        padding: 0.5rem;
                        border-radius: 9999px;
                        position: relative;
                    }

                    .home-icon:hover {
                        background: rgba(255, 255, 255, 0.1);
                    }

                    .home-nav.solid .home-icon:hover {
                        background: #f3f4f6;
                    }

                    .cart-badge {
                        position: absolute;
                        top: -2px;
                        right: -2px;
                        background: #10b981;
                        color: #fff;
                        font-size: 0.7rem;
                        width: 1.25rem;
                        height: 1.25rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .home-burger {
                        display: none;
                        color: inherit;
                        font-size: 1.4rem;
                        padding: 0.5rem;
                    }

                    @media (max-width: 1024px) {
                        .home-burger {
                            display: block;
                        }
                    }

                    .home-mobile-menu {
                        display: none;
                        background: #fff;
                        border-top: 1px solid #e5e7eb;
                        padding: 1rem;
                        flex-direction: column;
                        gap: 0.25rem;
                    }

                    .home-mobile-menu.open {
                        display: flex;
                    }

                    .home-mobile-link {
                        padding: 0.6rem 1rem;
                        border-radius: 0.5rem;
                        color: #374151;
                    }

                    .home-mobile-link:hover {
                        background: #ecfdf5;
                        color: #059669;
                    }

                    .video-hero {
                        position: relative;
                        height: 100vh;
                        overflow: hidden;
                    }

                    .hero-media {
                        position: absolute;
                        inset: 0;
                    }

                    .hero-media video {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }

                    .hero-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(180deg,
                            rgba(15, 23, 42, 0.7),
                            rgba(15, 23, 42, 0.6),
                            rgba(15, 23, 42, 0.8));
                    }

                    .hero-inner {
                        position: relative;
                        z-index: 10;
                        height: 100%;
                        display: flex;
                        align-items: center;
                        will-change: transform, opacity;
                    }

                    .hero-copy {
                        max-width: 48rem;
                        display: flex;
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 1.5rem;
                    }

                    .hero-title {
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        line-height: 1.1;
                        color: #fff;
                        margin: 0;
                    }

                    .grad-text {
                        background: linear-gradient(90deg, #34d399, #5eead4);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    .hero-pill {
                        background: #10b981;
                        color: #fff;
                        padding: 0.5rem 1.5rem;
                        border-radius: 9999px;
                        font-size: 0.85rem;
                        font-weight: 700;
                    }

                    .hero-lede {
                        font-size: 1.4rem;
                        color: #e5e7eb;
                        margin: 0;
                    }

                    .hero-cta-row {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }

                    .hero-proof {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                        color: #fff;
                    }

                    .hero-proof p {
                        margin: 0.25rem 0 0;
                        font-size: 0.9rem;
                    }

                    .avatar-row {
                        display: flex;
                    }

                    .avatar {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        border: 2px solid #fff;
                        background: #10b981;
                        margin-left: -0.75rem;
                    }

                    .avatar:first-child {
                        margin-left: 0;
                    }

                    .scroll-cue {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 20;
                    }

                    .cue-shell {
                        width: 1.5rem;
                        height: 2.5rem;
                        border: 2px solid rgba(255, 255, 255, 0.5);
                        border-radius: 9999px;
                        display: flex;
                        justify-content: center;
                        padding-top: 0.5rem;
                    }

                    .cue-dot {
                        width: 0.35rem;
                        height: 0.35rem;
                        background: #fff;
                        border-radius: 9999px;
                        animation: cue-bob 1.5s ease-in-out infinite;
                    }

                    @keyframes cue-bob {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(12px); }
                    }

                    .accent-text {
                        color: #059669;
                    }

                    .verify-section {
                        padding: 5rem 0;
                        background: linear-gradient(135deg, #fff, #ecfdf580, #fff);
                    }

                    .step-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                        margin-bottom: 4rem;
                    }

                    @media (max-width: 1024px) {
                        .step-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (max-width: 640px) {
                        .step-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    .step-card {
                        background: #fff;
                        border-radius: 1rem;
                        overflow: hidden;
                        box-shadow: 0 12px 30px rgba(0, 0, 0, 0.08);
                        transition: transform 0.4s ease, box-shadow 0.4s ease,
                            opacity 0.7s ease;
                    }

                    .step-card:hover {
                        transform: translateY(-10px);
                        box-shadow: 0 25px 60px rgba(0, 0, 0, 0.15);
                    }

                    .step-media {
                        position: relative;
                        height: 12rem;
                        overflow: hidden;
                    }

                    .step-media img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }

                    .step-badge {
                        position: absolute;
                        top: 1rem;
                        left: 1rem;
                        background: #10b981;
                        color: #fff;
                        font-size: 0.7rem;
                        font-weight: 700;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                    }

                    .step-body {
                        padding: 1.5rem;
                    }

                    .step-num {
                        color: #059669;
                        font-weight: 700;
                        font-size: 0.85rem;
                        margin-bottom: 0.5rem;
                    }

                    .step-body h3 {
                        margin: 0 0 0.5rem;
                        font-size: 1.25rem;
                    }

                    .step-body p {
                        margin: 0;
                        color: #4b5563;
                        font-size: 0.9rem;
                    }

                    .verify-form {
                        max-width: 28rem;
                        margin: 0 auto;
                        background: #fff;
                        border-radius: 1.5rem;
                        box-shadow: 0 25px 70px rgba(0, 0, 0, 0.15);
                        padding: 2rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }

                    .verify-form h3 {
                        text-align: center;
                        font-size: 1.5rem;
                        margin: 0;
                    }

                    .form-sub {
                        text-align: center;
                        color: #059669;
                        font-weight: 600;
                        margin: 0 0 1rem;
                    }

                    .verify-form label {
                        font-size: 0.875rem;
                        font-weight: 600;
                        color: #374151;
                    }

                    .verify-form input {
                        padding: 0.75rem 1rem;
                        border: 2px solid #d1d5db;
                        border-radius: 0.5rem;
                        font: inherit;
                    }

                    .verify-form input:focus {
                        outline: none;
                        border-color: #10b981;
                    }

                    .verify-submit {
                        margin-top: 1rem;
                        background: #059669;
                        color: #fff;
                        padding: 1rem;
                        border-radius: 0.5rem;
                        font-size: 1.1rem;
                        font-weight: 600;
                        transition: background 0.2s ease;
                    }

                    .verify-submit:hover {
                        background: #047857;
                    }

                    .showcase-section {
                        padding: 5rem 0;
                        background: linear-gradient(135deg, #ecfdf5, #fff);
                    }

                    .showcase-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }

                    @media (max-width: 900px) {
                        .showcase-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    .showcase-media {
                        position: relative;
                    }

                    .spin-ring {
                        position: absolute;
                        inset: 0;
                        border: 4px dashed #6ee7b7;
                        border-radius: 9999px;
                        opacity: 0.2;
                        animation: spin-slow 50s linear infinite;
                    }

                    @keyframes spin-slow {
                        to { transform: rotate(360deg); }
                    }

                    .pack-grid {
                        position: relative;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }

                    .pack-card {
                        background: #fff;
                        border-radius: 1.5rem;
                        padding: 1.5rem;
                        box-shadow: 0 20px 50px rgba(0, 0, 0, 0.12);
                        transition: transform 0.3s ease;
                    }

                    .pack-card:hover {
                        transform: scale(1.05) rotate(3deg);
                    }

                    .pack-card.offset {
                        margin-top: 2rem;
                    }

                    .pack-card.offset:hover {
                        transform: scale(1.05) rotate(-3deg);
                    }

                    .pack-label {
                        margin-top: 1rem;
                        text-align: center;
                        color: #059669;
                        font-weight: 700;
                        font-size: 0.85rem;
                    }

                    .float-tag {
                        position: absolute;
                        background: #10b981;
                        color: #fff;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        font-size: 0.85rem;
                        font-weight: 700;
                        box-shadow: 0 12px 30px rgba(16, 185, 129, 0.35);
                    }

                    .float-tag.top {
                        top: -1rem;
                        right: 2rem;
                        animation: float-y 3s ease-in-out infinite;
                    }

                    .float-tag.bottom {
                        bottom: 2rem;
                        left: -1rem;
                        animation: float-y 3s ease-in-out 0.5s infinite reverse;
                    }

                    @keyframes float-y {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-10px); }
                    }

                    .showcase-copy h2 {
                        font-size: clamp(2.2rem, 4vw, 3rem);
                        margin: 1rem 0 2rem;
                    }

                    .showcase-eyebrow {
                        background: #d1fae5;
                        color: #065f46;
                    }

                    .auth-list {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        margin-bottom: 2rem;
                    }

                    .auth-item {
                        display: flex;
                        gap: 1rem;
                        padding: 1rem;
                        border-radius: 0.75rem;
                        transition: background 0.2s ease, transform 0.2s ease;
                    }

                    .auth-item:hover {
                        background: #ecfdf5;
                        transform: translateX(10px);
                    }

                    .auth-check {
                        flex-shrink: 0;
                        width: 2rem;
                        height: 2rem;
                        background: #10b981;
                        color: #fff;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .auth-item h4 {
                        margin: 0 0 0.25rem;
                    }

                    .auth-item p {
                        margin: 0;
                        color: #4b5563;
                        font-size: 0.9rem;
                    }

                    .accent-btn {
                        background: #059669;
                        color: #fff;
                    }

                    .accent-btn:hover {
                        background: #047857;
                    }

                    .experience-section {
                        padding: 5rem 0;
                        background: #fff;
                    }

                    .exp-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }

                    @media (max-width: 900px) {
                        .exp-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    .exp-copy h2 {
                        font-size: clamp(2.2rem, 5vw, 3.5rem);
                        margin: 0 0 1.5rem;
                        line-height: 1.15;
                    }

                    .exp-copy h3 {
                        font-size: 1.5rem;
                        margin: 0 0 1rem;
                        color: #1f2937;
                    }

                    .exp-copy > p {
                        font-size: 1.1rem;
                        color: #4b5563;
                        line-height: 1.7;
                        margin: 0 0 2rem;
                    }

                    .benefit-tiles {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1rem;
                        margin-bottom: 2rem;
                    }

                    .tile {
                        text-align: center;
                        padding: 1rem;
                        background: #ecfdf5;
                        border-radius: 1rem;
                        transition: transform 0.2s ease;
                    }

                    .tile:hover {
                        transform: scale(1.1) rotate(5deg);
                    }

                    .tile-glyph {
                        font-size: 2rem;
                        margin-bottom: 0.5rem;
                    }

                    .tile-label {
                        font-weight: 700;
                        font-size: 0.9rem;
                    }

                    .tile-blurb {
                        font-size: 0.75rem;
                        color: #4b5563;
                    }

                    .exp-figure {
                        position: relative;
                    }

                    .exp-stage {
                        background: linear-gradient(135deg, #d1fae5, #ccfbf1);
                        border-radius: 1.5rem;
                        padding: 3rem;
                    }

                    .float-img {
                        max-width: 24rem;
                        margin: 0 auto;
                        animation: float-y 4s ease-in-out infinite;
                    }

                    .exp-stats {
                        position: absolute;
                        bottom: -2rem;
                        left: -2rem;
                        background: #fff;
                        border-radius: 1rem;
                        box-shadow: 0 25px 60px rgba(0, 0, 0, 0.18);
                        padding: 1.5rem;
                        display: flex;
                        gap: 1.5rem;
                        text-align: center;
                    }

                    .stat-value {
                        font-size: 2rem;
                        font-weight: 700;
                        color: #059669;
                    }

                    .stat-label {
                        font-size: 0.85rem;
                        color: #4b5563;
                    }

                    .pillars-section {
                        padding: 5rem 0;
                        background: linear-gradient(135deg, #064e3b, #115e59);
                        color: #fff;
                    }

                    .on-dark {
                        color: #fff;
                    }

                    .on-dark-sub {
                        color: #a7f3d0 !important;
                    }

                    .pillar-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }

                    @media (max-width: 768px) {
                        .pillar-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    .pillar-card {
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(12px);
                        border-radius: 1.5rem;
                        padding: 2rem;
                        text-align: center;
                        transition: transform 0.4s ease, opacity 0.7s ease;
                    }

                    .pillar-card:hover {
                        transform: translateY(-10px);
                    }

                    .pillar-icon {
                        width: 5rem;
                        height: 5rem;
                        margin: 0 auto 1.5rem;
                        background: #10b981;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2rem;
                    }

                    .pillar-card h3 {
                        margin: 0 0 1rem;
                        font-size: 1.5rem;
                    }

                    .pillar-card p {
                        margin: 0;
                        color: #a7f3d0;
                    }

                    .shop-section {
                        position: relative;
                        min-height: 100vh;
                        padding: 5rem 0;
                        overflow: hidden;
                    }

                    .shop-backdrop {
                        position: absolute;
                        inset: 0;
                    }

                    .shop-backdrop img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }

                    .shop-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(180deg,
                            rgba(15, 23, 42, 0.7),
                            rgba(15, 23, 42, 0.8),
                            rgba(15, 23, 42, 0.9));
                    }

                    .shop-inner {
                        position: relative;
                        z-index: 10;
                    }

                    .shop-head {
                        text-align: center;
                        margin-bottom: 4rem;
                    }

                    .shop-eyebrow {
                        display: inline-block;
                        background: rgba(16, 185, 129, 0.2);
                        border: 1px solid rgba(52, 211, 153, 0.3);
                        color: #6ee7b7;
                        padding: 0.75rem 1.5rem;
                        border-radius: 9999px;
                        font-size: 0.85rem;
                        font-weight: 600;
                        margin-bottom: 1.5rem;
                        backdrop-filter: blur(4px);
                    }

                    .shop-head h2 {
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        color: #fff;
                        line-height: 1.1;
                        margin: 0 0 1.5rem;
                    }

                    .shop-head p {
                        font-size: 1.25rem;
                        color: #d1d5db;
                        max-width: 48rem;
                        margin: 0 auto 2rem;
                    }

                    .shop-cta-row {
                        display: flex;
                        justify-content: center;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }

                    .shop-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                    }

                    @media (max-width: 1024px) {
                        .shop-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (max-width: 640px) {
                        .shop-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    .shop-card {
                        position: relative;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(12px);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 1.5rem;
                        overflow: hidden;
                        box-shadow: 0 25px 60px rgba(0, 0, 0, 0.3);
                        transition: transform 0.3s ease, opacity 0.7s ease;
                    }

                    .shop-card:hover {
                        transform: translateY(-15px);
                    }

                    .shop-badge {
                        position: absolute;
                        top: 1rem;
                        left: 1rem;
                        z-index: 20;
                        background: linear-gradient(90deg, #10b981, #14b8a6);
                        color: #fff;
                        font-size: 0.7rem;
                        font-weight: 700;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                    }

                    .shop-media {
                        position: relative;
                        height: 16rem;
                        overflow: hidden;
                    }

                    .shop-media img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }

                    .shop-card:hover .shop-media img {
                        transform: scale(1.1);
                    }

                    .benefit-overlay {
                        position: absolute;
                        inset: 0;
                        background: rgba(5, 150, 105, 0.95);
                        backdrop-filter: blur(4px);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        color: #fff;
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }

                    .shop-card:hover .benefit-overlay {
                        opacity: 1;
                    }

                    .benefit-overlay h4 {
                        margin: 0 0 0.5rem;
                    }

                    .overlay-line {
                        font-size: 0.875rem;
                    }

                    .shop-body {
                        padding: 1.5rem;
                    }

                    .shop-meta {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 0.5rem;
                    }

                    .shop-category {
                        color: #34d399;
                        font-size: 0.7rem;
                        font-weight: 600;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }

                    .shop-body h3 {
                        color: #fff;
                        margin: 0 0 0.5rem;
                        font-size: 1.25rem;
                    }

                    .shop-card:hover .shop-body h3 {
                        color: #34d399;
                    }

                    .shop-body p {
                        color: #d1d5db;
                        font-size: 0.875rem;
                        margin: 0 0 1rem;
                    }

                    .shop-row {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }

                    .shop-price {
                        font-size: 1.4rem;
                        font-weight: 700;
                        color: #34d399;
                    }

                    .shop-add {
                        background: #10b981;
                        color: #fff;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        font-weight: 600;
                        transition: background 0.2s ease, transform 0.2s ease;
                    }

                    .shop-add:hover {
                        background: #059669;
                        transform: scale(1.1);
                    }

                    .voices-section {
                        padding: 5rem 0;
                        background: linear-gradient(135deg, #f9fafb, #ecfdf5);
                    }

                    .voices-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                    }

                    @media (max-width: 1024px) {
                        .voices-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (max-width: 640px) {
                        .voices-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    .voice-card {
                        background: #fff;
                        border-radius: 1.5rem;
                        overflow: hidden;
                        box-shadow: 0 12px 30px rgba(0, 0, 0, 0.08);
                        transition: transform 0.4s ease, box-shadow 0.4s ease,
                            opacity 0.7s ease;
                    }

                    .voice-card:hover {
                        transform: translateY(-10px);
                        box-shadow: 0 25px 60px rgba(0, 0, 0, 0.15);
                    }

                    .voice-top {
                        background: linear-gradient(135deg, #10b981, #14b8a6);
                        padding: 2rem;
                        color: #fff;
                        text-align: center;
                    }

                    .voice-top img {
                        width: 6rem;
                        height: 6rem;
                        margin: 0 auto 1rem;
                        border-radius: 9999px;
                        border: 4px solid #fff;
                        object-fit: cover;
                        transition: transform 0.3s ease;
                    }

                    .voice-top img:hover {
                        transform: scale(1.1);
                    }

                    .voice-top h3 {
                        margin: 0 0 0.25rem;
                        font-size: 1.25rem;
                    }

                    .voice-top p {
                        margin: 0;
                        color: #d1fae5;
                        font-size: 0.875rem;
                    }

                    .voice-body {
                        padding: 1.5rem;
                        text-align: center;
                    }

                    .voice-body h4 {
                        color: #059669;
                        font-size: 1.1rem;
                        margin: 0.75rem 0 0.5rem;
                        text-decoration: underline;
                    }

                    .voice-body p {
                        color: #4b5563;
                        font-size: 0.875rem;
                        font-style: italic;
                        margin: 0;
                    }

                    .stats-band {
                        padding: 5rem 0;
                        background: #059669;
                    }

                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 3rem;
                        text-align: center;
                        color: #fff;
                    }

                    @media (max-width: 640px) {
                        .stats-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    .stat-big {
                        font-size: 3.75rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }

                    .stat-sub {
                        font-size: 1.5rem;
                        font-weight: 600;
                        color: #a7f3d0;
                    }

                    .ingredients-section {
                        padding: 5rem 0;
                        background: #fff;
                    }

                    .ing-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }

                    @media (max-width: 900px) {
                        .ing-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    .ing-figure {
                        position: relative;
                    }

                    .ing-figure img {
                        border-radius: 1.5rem;
                        box-shadow: 0 25px 60px rgba(0, 0, 0, 0.18);
                        width: 100%;
                    }

                    .pulse-leaf {
                        position: absolute;
                        top: -1rem;
                        right: -1rem;
                        background: #10b981;
                        border-radius: 9999px;
                        width: 5rem;
                        height: 5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2rem;
                        box-shadow: 0 18px 40px rgba(16, 185, 129, 0.4);
                        animation: pulse-scale 3s ease-in-out infinite;
                    }

                    @keyframes pulse-scale {
                        0%, 100% { transform: scale(1); }
                        50% { transform: scale(1.1); }
                    }

                    .ing-list {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }

                    .ing-item {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        padding: 1.5rem;
                        background: #ecfdf5;
                        border-radius: 1rem;
                        transition: transform 0.2s ease, opacity 0.7s ease;
                    }

                    .ing-item:hover {
                        transform: translateX(10px);
                    }

                    .ing-check {
                        flex-shrink: 0;
                        width: 3rem;
                        height: 3rem;
                        background: #10b981;
                        color: #fff;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.25rem;
                    }

                    .ing-item h3 {
                        margin: 0 0 0.25rem;
                        font-size: 1.25rem;
                    }

                    .ing-item p {
                        margin: 0;
                        color: #4b5563;
                    }

                    .steps-section {
                        padding: 5rem 0;
                        background: linear-gradient(135deg, #ecfdf5, #fff);
                    }

                    .usteps-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                    }

                    @media (max-width: 900px) {
                        .usteps-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (max-width: 560px) {
                        .usteps-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    .ustep {
                        position: relative;
                        text-align: center;
                        transition: transform 0.3s ease, opacity 0.7s ease;
                    }

                    .ustep:hover {
                        transform: scale(1.05);
                    }

                    .ustep-card {
                        background: #fff;
                        border-radius: 1.5rem;
                        padding: 2rem;
                        box-shadow: 0 12px 30px rgba(0, 0, 0, 0.08);
                    }

                    .ustep-num {
                        width: 5rem;
                        height: 5rem;
                        margin: 0 auto 1.5rem;
                        background: linear-gradient(135deg, #10b981, #14b8a6);
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        font-size: 1.9rem;
                        font-weight: 700;
                    }

                    .ustep h3 {
                        margin: 0 0 0.75rem;
                        font-size: 1.5rem;
                    }

                    .ustep p {
                        margin: 0;
                        color: #4b5563;
                    }

                    .ustep-arrow {
                        display: none;
                        position: absolute;
                        top: 50%;
                        right: -1.1rem;
                        transform: translateY(-50%);
                        color: #10b981;
                        font-size: 1.5rem;
                        z-index: 10;
                    }

                    @media (min-width: 900px) {
                        .ustep:not(:last-child) .ustep-arrow {
                            display: block;
                        }
                    }

                    .blog-section {
                        padding: 5rem 0;
                        background: #fff;
                    }

                    .article-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }

                    @media (max-width: 900px) {
                        .article-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    .article-card {
                        background: #fff;
                        border-radius: 1.5rem;
                        overflow: hidden;
                        box-shadow: 0 12px 30px rgba(0, 0, 0, 0.08);
                        cursor: pointer;
                        transition: transform 0.4s ease, box-shadow 0.4s ease,
                            opacity 0.7s ease;
                    }

                    .article-card:hover {
                        transform: translateY(-10px);
                        box-shadow: 0 25px 60px rgba(0, 0, 0, 0.15);
                    }

                    .article-media {
                        position: relative;
                        height: 16rem;
                        overflow: hidden;
                    }

                    .article-media img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }

                    .article-card:hover .article-media img {
                        transform: scale(1.1);
                    }

                    .article-tag {
                        position: absolute;
                        top: 1rem;
                        left: 1rem;
                        background: #10b981;
                        color: #fff;
                        font-size: 0.7rem;
                        font-weight: 700;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                    }

                    .article-body {
                        padding: 1.5rem;
                    }

                    .article-date {
                        color: #6b7280;
                        font-size: 0.85rem;
                        margin: 0 0 0.5rem;
                    }

                    .article-body h3 {
                        margin: 0 0 1rem;
                        font-size: 1.25rem;
                    }

                    .article-card:hover .article-body h3 {
                        color: #059669;
                    }

                    .article-more {
                        color: #059669;
                        font-weight: 600;
                        padding: 0;
                    }

                    .trust-section {
                        padding: 3rem 0;
                        background: #fff;
                        border-top: 1px solid #e5e7eb;
                        border-bottom: 1px solid #e5e7eb;
                    }

                    .trust-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                        text-align: center;
                    }

                    @media (max-width: 768px) {
                        .trust-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    .trust-icon {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 0.75rem;
                        background: #d1fae5;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.6rem;
                        transition: transform 0.5s ease;
                    }

                    .trust-item:hover .trust-icon {
                        transform: rotate(360deg);
                    }

                    .trust-item h3 {
                        margin: 0 0 0.25rem;
                        font-size: 1rem;
                    }

                    .trust-item p {
                        margin: 0;
                        color: #4b5563;
                        font-size: 0.85rem;
                    }

                    .faq-section {
                        padding: 5rem 1rem;
                        background: linear-gradient(135deg, #ecfdf5, #fff);
                    }

                    .faq-shell {
                        max-width: 56rem;
                        margin: 0 auto;
                    }

                    .faq-list {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }

                    .faq-card {
                        background: #fff;
                        border-radius: 1rem;
                        box-shadow: 0 12px 30px rgba(0, 0, 0, 0.08);
                        overflow: hidden;
                    }

                    .faq-q {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1.5rem;
                        font-size: 1.1rem;
                        font-weight: 700;
                        color: #111827;
                        text-align: left;
                        transition: background 0.2s ease;
                    }

                    .faq-q:hover {
                        background: #ecfdf5;
                    }

                    .chev {
                        color: #059669;
                        font-size: 1.5rem;
                        transition: transform 0.3s ease;
                    }

                    .faq-card.open .chev {
                        transform: rotate(90deg);
                    }

                    .faq-a {
                        max-height: 0;
                        overflow: hidden;
                        transition: max-height 0.3s ease;
                    }

                    .faq-card.open .faq-a {
                        max-height: 12rem;
                    }

                    .faq-a p {
                        padding: 0 1.5rem 1.5rem;
                        margin: 0;
                        color: #4b5563;
                    }

                    .home-cta {
                        position: relative;
                        padding: 5rem 1rem;
                        background: linear-gradient(135deg, #059669, #0d9488, #047857);
                        color: #fff;
                        overflow: hidden;
                    }

                    .cta-orb {
                        position: absolute;
                        width: 24rem;
                        height: 24rem;
                        background: #fff;
                        border-radius: 9999px;
                        opacity: 0.1;
                    }

                    .cta-orb.top {
                        top: 0;
                        left: 0;
                        transform: translate(-50%, -50%);
                    }

                    .cta-orb.bottom {
                        bottom: 0;
                        right: 0;
                        transform: translate(50%, 50%);
                    }

                    .cta-inner {
                        position: relative;
                        z-index: 10;
                        max-width: 56rem;
                        margin: 0 auto;
                        text-align: center;
                    }

                    .cta-inner h2 {
                        font-size: clamp(2.2rem, 5vw, 3.5rem);
                        margin: 0 0 1.5rem;
                    }

                    .cta-inner > p {
                        font-size: 1.4rem;
                        opacity: 0.9;
                        margin: 0 0 2rem;
                    }

                    .cta-row {
                        display: flex;
                        justify-content: center;
                        flex-wrap: wrap;
                        gap: 1rem;
                        margin-bottom: 2rem;
                    }

                    .cta-perks {
                        display: flex;
                        justify-content: center;
                        flex-wrap: wrap;
                        gap: 2rem;
                        font-size: 0.9rem;
                    }
                "#}
            </style>
        </div>
    }
}
