use stylist::css;
use stylist::yew::styled_component;
use yew::prelude::*;

use crate::motion::carousel::CarouselAction;
use crate::motion::hooks::use_autoplay;

/// Wall-clock cadence of the testimonial carousel. It keeps rotating while
/// the page is open, pointer hover included.
const TESTIMONIAL_ROTATE_MS: u32 = 5_000;

#[derive(Clone, Copy, PartialEq)]
pub struct CategoryProduct {
    pub name: &'static str,
    pub blurb: &'static str,
    pub price: &'static str,
}

#[derive(Clone, Copy, PartialEq)]
pub struct CategoryTestimonial {
    pub name: &'static str,
    pub quote: &'static str,
    pub rating: usize,
}

/// Everything that differs between the Men and Skin landing pages: palette,
/// copy, and the hard-coded product and testimonial tables.
#[derive(Properties, PartialEq)]
pub struct CategoryPageProps {
    pub accent: &'static str,
    pub accent_dark: &'static str,
    pub accent_soft: &'static str,
    pub wash_gradient: &'static str,
    pub eyebrow: &'static str,
    pub headline: &'static str,
    pub lede: &'static str,
    pub quiz_label: &'static str,
    pub shop_label: &'static str,
    pub rating_line: &'static str,
    pub hero_image: &'static str,
    pub hero_alt: &'static str,
    pub stat_value: &'static str,
    pub stat_label: &'static str,
    pub glyph: &'static str,
    pub collection_title: &'static str,
    pub collection_lede: &'static str,
    pub benefits: &'static [&'static str],
    pub products: &'static [CategoryProduct],
    pub testimonials_title: &'static str,
    pub testimonials: &'static [CategoryTestimonial],
    pub cta_gradient: &'static str,
    pub cta_title: &'static str,
    pub cta_lede: &'static str,
    pub cta_label: &'static str,
}

#[styled_component(CategoryPage)]
pub fn category_page(props: &CategoryPageProps) -> Html {
    let carousel = use_autoplay(props.testimonials.len(), TESTIMONIAL_ROTATE_MS);

    let page_css = css!(
        r#"
        .category-hero {
            position: relative;
            padding: 11rem 1rem 5rem;
            overflow: hidden;
        }

        .hero-wash {
            position: absolute;
            inset: 0;
            opacity: 0.6;
        }

        .hero-grid {
            position: relative;
            z-index: 1;
            max-width: 80rem;
            margin: 0 auto;
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 3rem;
            align-items: center;
        }

        @media (max-width: 768px) {
            .hero-grid {
                grid-template-columns: 1fr;
            }
        }

        .hero-copy {
            display: flex;
            flex-direction: column;
            gap: 1.5rem;
            align-items: flex-start;
        }

        .hero-copy h1 {
            font-size: clamp(2.8rem, 5vw, 3.75rem);
            line-height: 1.1;
            margin: 0;
            color: #111827;
        }

        .hero-copy .lede {
            font-size: 1.25rem;
            color: #4b5563;
            margin: 0;
        }

        .hero-buttons {
            display: flex;
            flex-wrap: wrap;
            gap: 1rem;
        }

        .hero-rating {
            display: flex;
            align-items: center;
            gap: 1.5rem;
            padding-top: 1rem;
            color: #4b5563;
        }

        .hero-figure {
            position: relative;
        }

        .figure-tilt {
            position: absolute;
            inset: 0;
            background: var(--accent);
            border-radius: 1.5rem;
            transform: rotate(3deg);
            opacity: 0.2;
        }

        .figure-card {
            position: relative;
            background: #fff;
            border-radius: 1.5rem;
            padding: 2rem;
            box-shadow: 0 25px 60px rgba(0, 0, 0, 0.18);
            transition: transform 0.3s ease;
        }

        .figure-card:hover {
            transform: scale(1.05);
        }

        .figure-card img {
            width: 100%;
            height: 24rem;
            object-fit: cover;
            border-radius: 1rem;
        }

        .figure-stat {
            position: absolute;
            bottom: -1rem;
            right: -1rem;
            background: #fff;
            border-radius: 1rem;
            padding: 1.5rem;
            box-shadow: 0 18px 40px rgba(0, 0, 0, 0.15);
        }

        .figure-stat .value {
            font-size: 1.9rem;
            font-weight: 700;
            color: var(--accent);
        }

        .figure-stat .label {
            font-size: 0.85rem;
            color: #4b5563;
        }

        .benefits-bar {
            background: var(--accent);
            padding: 2rem 1rem;
        }

        .benefits-grid {
            max-width: 80rem;
            margin: 0 auto;
            display: grid;
            grid-template-columns: repeat(4, 1fr);
            gap: 1.5rem;
            text-align: center;
            color: #fff;
            font-weight: 600;
        }

        @media (max-width: 768px) {
            .benefits-grid {
                grid-template-columns: repeat(2, 1fr);
            }
        }

        .benefit-check {
            font-size: 1.6rem;
            margin-bottom: 0.5rem;
        }

        .collection {
            padding: 5rem 1rem;
            background: #f9fafb;
        }

        .product-grid {
            max-width: 80rem;
            margin: 0 auto;
            display: grid;
            grid-template-columns: repeat(4, 1fr);
            gap: 2rem;
        }

        @media (max-width: 900px) {
            .product-grid {
                grid-template-columns: repeat(2, 1fr);
            }
        }

        @media (max-width: 560px) {
            .product-grid {
                grid-template-columns: 1fr;
            }
        }

        .product-card {
            background: #fff;
            border-radius: 1rem;
            padding: 1.5rem;
            box-shadow: 0 12px 30px rgba(0, 0, 0, 0.08);
            cursor: pointer;
            transition: transform 0.3s ease, box-shadow 0.3s ease;
        }

        .product-card:hover {
            transform: translateY(-8px);
            box-shadow: 0 25px 60px rgba(0, 0, 0, 0.15);
        }

        .product-tile {
            background: var(--accent-soft);
            height: 12rem;
            border-radius: 0.75rem;
            margin-bottom: 1.5rem;
            display: flex;
            align-items: center;
            justify-content: center;
            font-size: 3.5rem;
        }

        .product-card h3 {
            font-size: 1.4rem;
            margin: 0 0 0.5rem;
            color: #111827;
        }

        .product-card p {
            color: #4b5563;
            margin: 0 0 1rem;
        }

        .product-row {
            display: flex;
            justify-content: space-between;
            align-items: center;
        }

        .product-price {
            font-size: 1.4rem;
            font-weight: 700;
            color: var(--accent);
        }

        .add-button {
            background: var(--accent);
            color: #fff;
            padding: 0.5rem 1rem;
            border-radius: 9999px;
            transition: background 0.2s ease;
        }

        .add-button:hover {
            background: var(--accent-dark);
        }

        .voices {
            padding: 5rem 1rem;
        }

        .voices-inner {
            max-width: 56rem;
            margin: 0 auto;
            text-align: center;
        }

        .voices-inner > h2 {
            font-size: 2.4rem;
            color: #111827;
            margin: 0 0 3rem;
        }

        .voice-stage {
            position: relative;
            background: var(--accent-soft);
            border-radius: 1.5rem;
            padding: 3rem;
            min-height: 17rem;
        }

        .voice-slide {
            position: absolute;
            inset: 0;
            padding: 3rem;
            opacity: 0;
            transition: opacity 0.5s ease;
        }

        .voice-slide.active {
            opacity: 1;
        }

        .voice-slide .quote {
            font-size: 1.5rem;
            color: #1f2937;
            font-style: italic;
            margin: 1rem 0 1.5rem;
        }

        .voice-slide .author {
            font-size: 1.1rem;
            font-weight: 600;
            color: var(--accent);
        }

        .voice-dots {
            position: absolute;
            bottom: 1.5rem;
            left: 50%;
            transform: translateX(-50%);
            display: flex;
            gap: 0.5rem;
        }

        .voice-dot {
            width: 0.75rem;
            height: 0.75rem;
            border-radius: 9999px;
            background: #d1d5db;
            transition: background 0.2s ease;
        }

        .voice-dot.active {
            background: var(--accent);
        }

        .category-cta {
            padding: 5rem 1rem;
            color: #fff;
            text-align: center;
        }

        .category-cta h2 {
            font-size: clamp(2.2rem, 4vw, 3rem);
            margin: 0 0 1.5rem;
        }

        .category-cta .lede {
            font-size: 1.25rem;
            opacity: 0.9;
            margin: 0 0 2rem;
        }

        .category-cta .note {
            margin-top: 1.5rem;
            opacity: 0.75;
        }
    "#
    );

    let palette = format!(
        "--accent: {}; --accent-dark: {}; --accent-soft: {};",
        props.accent, props.accent_dark, props.accent_soft
    );

    html! {
        <div class={page_css} style={palette}>
            <section class="category-hero">
                <div class="hero-wash" style={format!("background: {};", props.wash_gradient)}></div>
                <div class="hero-grid">
                    <div class="hero-copy">
                        <span class="eyebrow" style="background: var(--accent-soft); color: var(--accent-dark);">
                            {props.eyebrow}
                        </span>
                        <h1>{props.headline}</h1>
                        <p class="lede">{props.lede}</p>
                        <div class="hero-buttons">
                            <button class="btn" style="background: var(--accent); color: #fff;">
                                {props.quiz_label}{" ›"}
                            </button>
                            <button class="btn" style="border: 2px solid var(--accent); color: var(--accent);">
                                {props.shop_label}
                            </button>
                        </div>
                        <div class="hero-rating">
                            <span class="stars">{"★★★★★"}</span>
                            <span>{props.rating_line}</span>
                        </div>
                    </div>
                    <div class="hero-figure">
                        <div class="figure-tilt"></div>
                        <div class="figure-card">
                            <img src={props.hero_image} alt={props.hero_alt} loading="lazy" />
                            <div class="figure-stat">
                                <div class="value">{props.stat_value}</div>
                                <div class="label">{props.stat_label}</div>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="benefits-bar">
                <div class="benefits-grid">
                    { for props.benefits.iter().map(|benefit| html! {
                        <div>
                            <div class="benefit-check">{"✓"}</div>
                            <div>{*benefit}</div>
                        </div>
                    }) }
                </div>
            </section>

            <section id="products" class="collection">
                <div class="section-head">
                    <h2>{props.collection_title}</h2>
                    <p>{props.collection_lede}</p>
                </div>
                <div class="product-grid">
                    { for props.products.iter().map(|product| html! {
                        <div class="product-card">
                            <div class="product-tile">{props.glyph}</div>
                            <h3>{product.name}</h3>
                            <p>{product.blurb}</p>
                            <div class="product-row">
                                <span class="product-price">{product.price}</span>
                                <button class="add-button">{"Add to Cart"}</button>
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section id="results" class="voices">
                <div class="voices-inner">
                    <h2>{props.testimonials_title}</h2>
                    <div class="voice-stage">
                        { for props.testimonials.iter().enumerate().map(|(idx, voice)| html! {
                            <div class={classes!("voice-slide", (idx == carousel.index).then(|| "active"))}>
                                <div class="stars">{ ("★").repeat(voice.rating) }</div>
                                <p class="quote">{format!("\u{201c}{}\u{201d}", voice.quote)}</p>
                                <p class="author">{format!("- {}", voice.name)}</p>
                            </div>
                        }) }
                        <div class="voice-dots">
                            { for (0..props.testimonials.len()).map(|idx| {
                                let onclick = {
                                    let carousel = carousel.clone();
                                    Callback::from(move |_| carousel.dispatch(CarouselAction::Jump(idx)))
                                };
                                html! {
                                    <button
                                        class={classes!("voice-dot", (idx == carousel.index).then(|| "active"))}
                                        {onclick}
                                    />
                                }
                            }) }
                        </div>
                    </div>
                </div>
            </section>

            <section class="category-cta" style={format!("background: {};", props.cta_gradient)}>
                <h2>{props.cta_title}</h2>
                <p class="lede">{props.cta_lede}</p>
                <button class="btn btn-light" style="color: var(--accent);">
                    {props.cta_label}{" ›"}
                </button>
                <p class="note">{"Free shipping on all orders • 90-day money-back guarantee"}</p>
            </section>
        </div>
    }
}
