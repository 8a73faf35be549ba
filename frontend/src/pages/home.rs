use yew::prelude::*;

use crate::components::referral_dialog::ReferralDialog;
use crate::components::referral_form::ReferralForm;
use crate::content::{BENEFITS, FAQS, FEATURES, STEPS};

#[function_component(Home)]
pub fn home() -> Html {
    let is_modal_open = use_state(|| false);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let open_modal = {
        let is_modal_open = is_modal_open.clone();
        Callback::from(move |_: MouseEvent| is_modal_open.set(true))
    };

    let on_open_change = {
        let is_modal_open = is_modal_open.clone();
        Callback::from(move |open: bool| is_modal_open.set(open))
    };

    html! {
        <div class="landing-page">
            <style>
            {r#".landing-page section {
                padding: 6rem 1.5rem;
            }
            .landing-page .container {
                max-width: 72rem;
                margin: 0 auto;
            }
            .hero {
                background: linear-gradient(135deg, rgba(124, 58, 237, 0.05), rgba(236, 72, 153, 0.05));
            }
            .hero-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                gap: 4rem;
                align-items: center;
            }
            .hero-badge {
                display: inline-block;
                border-radius: 9999px;
                background: rgba(124, 58, 237, 0.1);
                color: #7c3aed;
                padding: 0.375rem 1rem;
                font-size: 0.875rem;
                font-weight: 500;
            }
            .hero h1 {
                font-size: 3.5rem;
                line-height: 1.1;
                margin: 1.5rem 0;
            }
            .hero h1 span {
                color: #7c3aed;
            }
            .hero-subtitle {
                font-size: 1.125rem;
                color: #4b5563;
            }
            .hero img {
                width: 100%;
                border-radius: 1rem;
                object-fit: cover;
                box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
            }
            .btn-primary {
                display: inline-block;
                background: #7c3aed;
                color: #fff;
                border: none;
                border-radius: 8px;
                padding: 0.75rem 1.5rem;
                font-weight: 500;
                cursor: pointer;
                text-decoration: none;
            }
            .card-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                gap: 2rem;
                margin-top: 3rem;
            }
            .feature-card {
                background: #fff;
                border-radius: 1rem;
                padding: 1.5rem;
                box-shadow: 0 4px 20px rgba(0, 0, 0, 0.06);
            }
            .step-number {
                display: inline-flex;
                width: 2.5rem;
                height: 2.5rem;
                border-radius: 50%;
                align-items: center;
                justify-content: center;
                background: #7c3aed;
                color: #fff;
                font-weight: 700;
            }
            .section-title {
                text-align: center;
                font-size: 2.25rem;
            }
            .referral-section .feature-card {
                max-width: 36rem;
                margin: 3rem auto 0;
            }
            .faq-item {
                border-bottom: 1px solid #e5e7eb;
                padding: 1rem 0;
            }
            .faq-item summary {
                font-weight: 600;
                cursor: pointer;
            }"#}
            </style>

            <section id="home" class="hero">
                <div class="container hero-grid">
                    <div>
                        <span class="hero-badge">{"Refer & Earn Program"}</span>
                        <h1>
                            {"Share Knowledge,"}<br />
                            <span>{"Earn Rewards"}</span>
                        </h1>
                        <p class="hero-subtitle">
                            {"Refer your friends to our courses and earn exclusive rewards. Help them start their learning journey while you get amazing benefits."}
                        </p>
                        <button class="btn-primary" onclick={open_modal}>{"Refer Now"}</button>
                    </div>
                    <div>
                        <img
                            src="https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d"
                            loading="lazy"
                            alt="Person using laptop"
                        />
                    </div>
                </div>
                <div class="container card-grid">
                    {
                        FEATURES.iter().map(|feature| html! {
                            <div class="feature-card" key={feature.title}>
                                <h3>{ feature.title }</h3>
                                <p>{ feature.description }</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="how">
                <div class="container">
                    <h2 class="section-title">{"How it Works"}</h2>
                    <div class="card-grid">
                        {
                            STEPS.iter().map(|step| html! {
                                <div class="feature-card" key={step.title}>
                                    <span class="step-number">{ step.number }</span>
                                    <h3>{ step.title }</h3>
                                    <p>{ step.description }</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section id="benefit">
                <div class="container">
                    <h2 class="section-title">{"Benefits"}</h2>
                    <div class="card-grid">
                        {
                            BENEFITS.iter().map(|benefit| html! {
                                <div class="feature-card" key={benefit.title}>
                                    <h3>{ benefit.title }</h3>
                                    <p>{ benefit.description }</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section id="referral" class="referral-section">
                <div class="container">
                    <h2 class="section-title">{"Refer a Friend"}</h2>
                    <div class="feature-card">
                        <ReferralForm />
                    </div>
                </div>
            </section>

            <section id="faq">
                <div class="container">
                    <h2 class="section-title">{"Frequently Asked Questions"}</h2>
                    {
                        FAQS.iter().map(|faq| html! {
                            <details class="faq-item" key={faq.question}>
                                <summary>{ faq.question }</summary>
                                <p>{ faq.answer }</p>
                            </details>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <ReferralDialog open={*is_modal_open} on_open_change={on_open_change} />
        </div>
    }
}
