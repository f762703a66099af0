use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::components::category::{CategoryPage, CategoryProduct, CategoryTestimonial};
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;

const PRODUCTS: &[CategoryProduct] = &[
    CategoryProduct {
        name: "Men Core",
        blurb: "Target DHT and root causes of male pattern baldness",
        price: "$88",
    },
    CategoryProduct {
        name: "Men Performance",
        blurb: "Enhanced formula for active lifestyles",
        price: "$98",
    },
    CategoryProduct {
        name: "Men Balance",
        blurb: "For stress-related thinning",
        price: "$88",
    },
    CategoryProduct {
        name: "Men Plus",
        blurb: "Advanced strength formula",
        price: "$108",
    },
];

const BENEFITS: &[&str] = &[
    "Targets DHT production",
    "Clinically tested on men",
    "No side effects",
    "Visible results in 3-6 months",
];

const TESTIMONIALS: &[CategoryTestimonial] = &[
    CategoryTestimonial {
        name: "Michael T.",
        quote: "After 4 months, my hair loss has significantly slowed down. Highly recommend!",
        rating: 5,
    },
    CategoryTestimonial {
        name: "James K.",
        quote: "Finally a solution that works without harsh chemicals. My hair feels stronger.",
        rating: 5,
    },
    CategoryTestimonial {
        name: "David R.",
        quote: "Impressive results! My confidence is back.",
        rating: 5,
    },
];

#[function_component(Men)]
pub fn men() -> Html {
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
                accent="#2563eb"
                accent_dark="#1d4ed8"
                accent_soft="#dbeafe"
                wash_gradient="linear-gradient(135deg, #eff6ff, #eef2ff, #f8fafc)"
                cta_gradient="linear-gradient(90deg, #2563eb, #4f46e5)"
                eyebrow="Trusted by Men Worldwide"
                headline="Reclaim Your Hair Confidence"
                lede="Scientifically formulated to target DHT and the root causes of male \
                      pattern baldness. Drug-free and clinically proven."
                quiz_label="Take the Men's Quiz"
                shop_label="Shop Men's Products"
                rating_line="4.7/5 from 8,000+ men"
                hero_image="https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?w=600&h=700&fit=crop"
                hero_alt="Men's hair wellness"
                stat_value="84%"
                stat_label="saw hair growth"
                glyph="💊"
                collection_title="Men's Hair Solutions"
                collection_lede="Powerful formulas designed for men's hair needs"
                benefits={BENEFITS}
                products={PRODUCTS}
                testimonials_title="Men Who've Transformed Their Hair"
                testimonials={TESTIMONIALS}
                cta_title="Take Control of Your Hair Health"
                cta_lede="Get your personalized men's hair solution today"
                cta_label="Start Your Journey"
            />
            <Footer />
        </div>
    }
}
