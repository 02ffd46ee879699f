use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod scroll;
mod visibility;
mod terminal {
    pub mod scheduler;
    pub mod sequencer;
    pub mod line_source;
    pub mod driver;
}
mod contact {
    pub mod form;
    pub mod submit;
}
mod components {
    pub mod reveal;
    pub mod hero;
    pub mod services;
    pub mod vibe;
    pub mod terminal;
    pub mod pricing;
    pub mod contact;
    pub mod footer;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;
use scroll::is_scrolled_past;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            warn!("Unknown route, sending visitor home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


pub const NAV_LINKS: [(&str, &str); 3] = [
    ("SERVICES", "#services"),
    ("ETHOS", "#ethos"),
    ("PRICING", "#pricing"),
];

fn menu_toggle_label(open: bool) -> &'static str {
    if open { "Close menu" } else { "Open menu" }
}

/// Logs a failed add/remove of the nav's scroll listener.
fn listener_ok<E: std::fmt::Debug>(result: Result<(), E>, action: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            warn!("could not {} scroll events: {:?}", action, err);
            false
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_y = window.as_ref().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    is_scrolled.set(is_scrolled_past(scroll_y, config::NAV_SCROLL_THRESHOLD));
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                listener_ok(
                    window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()),
                    "listen for",
                );
            }

            move || {
                if let Some(window) = window {
                    listener_ok(
                        window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()),
                        "stop listening for",
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Links still jump to their section, the menu just folds away.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="container nav-content">
                <a href="#" class="brand">
                    <span class="text-primary mono">{"</>"}</span>
                    <span>{"AMBITIOUS"}<span class="text-primary">{"REALISM"}</span></span>
                </a>

                <div class="nav-desktop">
                    { for NAV_LINKS.iter().map(|(label, href)| html! {
                        <a href={*href} class="nav-link">{ *label }</a>
                    }) }
                    <a href="#contact" class="btn-primary pill small">{"INITIATE"}</a>
                </div>

                <button
                    class="burger-menu"
                    onclick={toggle_menu}
                    aria-label={menu_toggle_label(*menu_open)}
                    aria-expanded={menu_open.to_string()}
                >
                    { if *menu_open { "✕" } else { "☰" } }
                </button>

                if *menu_open {
                    <div class="nav-mobile">
                        { for NAV_LINKS.iter().map(|(label, href)| html! {
                            <a href={*href} class="nav-link" onclick={close_menu.clone()}>{ *label }</a>
                        }) }
                        <a href="#contact" class="nav-link text-primary" onclick={close_menu.clone()}>{"INITIATE"}</a>
                    </div>
                }
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if console_log::init_with_level(Level::Info).is_err() {
        gloo_console::warn!("logger already initialized");
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
