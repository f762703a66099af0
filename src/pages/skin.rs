use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::components::category::{CategoryPage, CategoryProduct, CategoryTestimonial};
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;

const PRODUCTS: &[CategoryProduct] = &[
    CategoryProduct {
        name: "Skin Balance",
        blurb: "Multi-vitamin for radiant, healthy skin",
        price: "$78",
    },
    CategoryProduct {
        name: "Collagen Infusion",
        blurb: "Boost elasticity and hydration",
        price: "$88",
    },
    CategoryProduct {
        name: "Anti-Aging Formula",
        blurb: "Combat signs of aging from within",
        price: "$98",
    },
    CategoryProduct {
        name: "Skin Glow",
        blurb: "Achieve luminous, youthful skin",
        price: "$78",
    },
];

const BENEFITS: &[&str] = &[
    "Clinically proven ingredients",
    "Boost collagen production",
    "Hydrate from within",
    "Visible results in 30 days",
];

const TESTIMONIALS: &[CategoryTestimonial] = &[
    CategoryTestimonial {
        name: "Amanda L.",
        quote: "My skin has never looked better! The glow is real and people notice.",
        rating: 5,
    },
    CategoryTestimonial {
        name: "Rachel P.",
        quote: "After just 2 months, my fine lines are less visible. Amazing product!",
        rating: 5,
    },
    CategoryTestimonial {
        name: "Sophie H.",
        quote: "Finally found a supplement that actually works for my skin.",
        rating: 5,
    },
];

#[function_component(Skin)]
pub fn skin() -> Html {
    use_effect_once(|| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        || ()
    });

    html! {
        <div>
            <Navbar />
            <CategoryPage
                accent="#d97706"
                accent_dark="#b45309"
                accent_soft="#fef3c7"
                wash_gradient="linear-gradient(135deg, #fffbeb, #fff7ed, #fff1f2)"
                cta_gradient="linear-gradient(90deg, #d97706, #ea580c)"
                eyebrow="Radiant Skin from Within"
                headline="Nourish Your Skin Naturally"
                lede="Science-backed supplements to support collagen production, hydration, \
                      and overall skin health. Beauty that starts from within."
                quiz_label="Take Skin Quiz"
                shop_label="Shop Skin Care"
                rating_line="4.9/5 from 12,000+ reviews"
                hero_image="https://images.unsplash.com/photo-1616394584738-fc6e612e71b9?w=600&h=700&fit=crop"
                hero_alt="Skin wellness"
                stat_value="95%"
                stat_label="saw skin improvement"
                glyph="✨"
                collection_title="Skin Wellness Collection"
                collection_lede="Comprehensive solutions for radiant, healthy skin"
                benefits={BENEFITS}
                products={PRODUCTS}
                testimonials_title="Glowing Skin, Happy Customers"
                testimonials={TESTIMONIALS}
                cta_title="Unlock Your Natural Radiance"
                cta_lede="Discover your personalized skin wellness routine"
                cta_label="Begin Your Journey"
            />
            <Footer />
        </div>
    }
}
