use yew::prelude::*;

use crate::components::{
    contact::Contact,
    footer::Footer,
    hero::Hero,
    pricing::Pricing,
    services::Services,
    terminal::TerminalSection,
    vibe::VibeSection,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount, unless a section was linked
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                let linked = window.location().hash().map(|hash| !hash.is_empty()).unwrap_or(false);
                if !linked {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <Hero />
            <Services />
            <VibeSection />
            <TerminalSection />
            <Pricing />
            <Contact />
            <Footer />
        </div>
    }
}
