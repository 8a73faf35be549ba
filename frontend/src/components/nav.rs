use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::content::NAV_ITEMS;
use crate::Route;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 20.0;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <style>
            {r#".top-nav {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                z-index: 50;
                transition: background 0.3s, box-shadow 0.3s;
            }
            .top-nav.scrolled {
                background: rgba(255, 255, 255, 0.8);
                backdrop-filter: blur(12px);
                box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
            }
            .nav-content {
                max-width: 72rem;
                margin: 0 auto;
                padding: 0 1.5rem;
                height: 4rem;
                display: flex;
                align-items: center;
                justify-content: space-between;
            }
            .nav-logo {
                font-size: 1.5rem;
                font-weight: 700;
                color: #7c3aed;
                text-decoration: none;
            }
            .nav-right {
                display: flex;
                align-items: center;
                gap: 2rem;
            }
            .nav-link {
                font-size: 0.875rem;
                font-weight: 500;
                color: #374151;
                text-decoration: none;
            }
            .burger-menu {
                display: none;
                background: none;
                border: none;
                cursor: pointer;
            }
            .burger-menu span {
                display: block;
                width: 22px;
                height: 2px;
                margin: 5px 0;
                background: #374151;
            }
            @media (max-width: 768px) {
                .burger-menu {
                    display: block;
                }
                .nav-right {
                    display: none;
                }
                .nav-right.mobile-menu-open {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    position: absolute;
                    top: 4rem;
                    left: 0;
                    right: 0;
                    padding: 1rem 1.5rem;
                    gap: 0.75rem;
                    background: #fff;
                }
            }"#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Earnify"}
                </Link<Route>>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        NAV_ITEMS.iter().map(|item| html! {
                            <a href={item.href} class="nav-link" onclick={close_menu.clone()}>
                                { item.label }
                            </a>
                        }).collect::<Html>()
                    }
                    <a href="#referral" class="btn-primary" onclick={close_menu.clone()}>
                        {"Get Started"}
                    </a>
                </div>
            </div>
        </nav>
    }
}
