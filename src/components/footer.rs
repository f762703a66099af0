use stylist::css;
use stylist::yew::styled_component;
use yew::prelude::*;

#[styled_component(Footer)]
pub fn footer() -> Html {
    let footer_css = css!(
        r#"
        background: #111827;
        color: #fff;
        padding: 3rem 1rem;

        .footer-grid {
            max-width: 80rem;
            margin: 0 auto;
            display: grid;
            grid-template-columns: repeat(4, 1fr);
            gap: 2rem;
        }

        @media (max-width: 768px) {
            .footer-grid {
                grid-template-columns: 1fr;
            }
        }

        h3 {
            font-size: 1.2rem;
            margin: 0 0 1rem;
            color: #34d399;
        }

        .footer-brand {
            font-size: 1.5rem;
            font-weight: 700;
            margin-bottom: 1rem;
        }

        p, li, a {
            color: #9ca3af;
            font-size: 0.9rem;
        }

        ul {
            list-style: none;
            margin: 0;
            padding: 0;
            display: flex;
            flex-direction: column;
            gap: 0.5rem;
        }

        a:hover {
            color: #fff;
        }

        .footer-bottom {
            max-width: 80rem;
            margin: 3rem auto 0;
            padding-top: 2rem;
            border-top: 1px solid #1f2937;
            text-align: center;
            color: #9ca3af;
            font-size: 0.85rem;
        }
    "#
    );

    html! {
        <footer class={footer_css}>
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">{"Green Wealth"}</div>
                    <p>
                        {"Paradise International General Trading LLC is the proud owner and \
                          exclusive distributor of the Green Wealth® brand and its flagship \
                          product, Neo Hair Lotion®, both protected trademarks recognized for \
                          premium herbal hair care and wellness solutions."}
                    </p>
                </div>
                <div>
                    <h3>{"Information"}</h3>
                    <ul>
                        <li><a href="#">{"About us"}</a></li>
                        <li><a href="#">{"Science"}</a></li>
                        <li><a href="#">{"Blog"}</a></li>
                        <li><a href="#">{"FAQs"}</a></li>
                    </ul>
                </div>
                <div>
                    <h3>{"Customer Support"}</h3>
                    <ul>
                        <li><a href="#">{"Terms of Use"}</a></li>
                        <li><a href="#">{"Refund Policy"}</a></li>
                        <li><a href="#">{"Shipping & Returns"}</a></li>
                        <li><a href="#">{"Privacy Policy"}</a></li>
                    </ul>
                </div>
                <div>
                    <h3>{"Store Information"}</h3>
                    <ul>
                        <li>{"Email: info@greenwealth.com"}</li>
                        <li>{"Phone: +971504556326"}</li>
                        <li>{"Address: 2003, One By Omniyat, Business Bay, Dubai, United Arab Emirates"}</li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                {"Copyright © Green Wealth International General LLC."}
            </div>
        </footer>
    }
}
