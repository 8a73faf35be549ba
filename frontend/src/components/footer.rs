use chrono::Datelike;
use yew::prelude::*;

use crate::content::{FOOTER_SECTIONS, LEGAL_LINKS, SOCIAL_LINKS};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
            {r#".site-footer {
                background: #111827;
                color: #d1d5db;
                padding: 3rem 1.5rem;
            }
            .footer-grid {
                max-width: 72rem;
                margin: 0 auto;
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                gap: 2rem;
            }
            .site-footer h3, .site-footer h4 {
                color: #fff;
            }
            .site-footer ul {
                list-style: none;
                padding: 0;
            }
            .site-footer a {
                color: inherit;
                text-decoration: none;
                font-size: 0.875rem;
            }
            .site-footer a:hover {
                color: #a78bfa;
            }
            .footer-social {
                display: flex;
                gap: 1rem;
            }
            .footer-bottom {
                max-width: 72rem;
                margin: 3rem auto 0;
                padding-top: 2rem;
                border-top: 1px solid #1f2937;
                display: flex;
                flex-wrap: wrap;
                justify-content: space-between;
                gap: 1rem;
                font-size: 0.875rem;
            }
            .footer-legal {
                display: flex;
                gap: 1.5rem;
            }"#}
            </style>
            <div class="footer-grid">
                <div>
                    <h3>{"Earnify"}</h3>
                    <p>{"Join our referral program and start earning rewards while helping others learn."}</p>
                    <div class="footer-social">
                        {
                            SOCIAL_LINKS.iter().map(|link| html! {
                                <a href={link.href} target="_blank" rel="noopener noreferrer">{ link.label }</a>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
                {
                    FOOTER_SECTIONS.iter().map(|section| html! {
                        <div>
                            <h4>{ section.title }</h4>
                            <ul>
                                {
                                    section.links.iter().map(|link| html! {
                                        <li><a href={link.href}>{ link.label }</a></li>
                                    }).collect::<Html>()
                                }
                            </ul>
                        </div>
                    }).collect::<Html>()
                }
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} Earnify. All rights reserved.", year)}</p>
                <div class="footer-legal">
                    {
                        LEGAL_LINKS.iter().map(|link| html! {
                            <a href={link.href}>{ link.label }</a>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </footer>
    }
}
