use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealStyle};
use crate::config;
use crate::scroll::{map_range, use_section_progress};

const PILLARS: [(&str, &str, &str); 3] = [
    (
        "CHAOS ENGINEERING",
        "text-primary",
        "Systems are inherently chaotic. We don't fight entropy; we surf it. Building resilience through controlled failure.",
    ),
    (
        "AESTHETIC DRIVEN",
        "text-secondary",
        "Functionality without form is a soul without a body. We prioritize the \"vibe\" as a core architectural component.",
    ),
    (
        "REALITY PATCHING",
        "text-white",
        "The digital world is the new real. We patch the fabric of reality to upgrade the user experience.",
    ),
];

/// Horizontal offsets, in percent, of the two marquee rows.
pub fn marquee_offsets(progress: f64) -> (f64, f64) {
    (
        map_range(progress, (0.0, 1.0), config::MARQUEE_TOP_SHIFT),
        map_range(progress, (0.0, 1.0), config::MARQUEE_BOTTOM_SHIFT),
    )
}

#[function_component(VibeSection)]
pub fn vibe_section() -> Html {
    let section_ref = use_node_ref();
    let progress = use_section_progress(section_ref.clone());
    let (top_x, bottom_x) = marquee_offsets(progress);

    html! {
        <section id="ethos" class="vibe-section" ref={section_ref}>
            <style>
                {r#"
                    .vibe-section {
                        padding: 10rem 0;
                        position: relative;
                        overflow: hidden;
                        background: #000;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        min-height: 100vh;
                    }
                    .vibe-glow { position: absolute; inset: 0; background: rgba(176, 38, 255, 0.05); filter: blur(100px); pointer-events: none; }
                    .marquee { white-space: nowrap; opacity: 0.5; margin-bottom: 2rem; }
                    .marquee h2 {
                        font-size: clamp(6rem, 15vw, 12rem);
                        font-weight: 900;
                        font-family: 'Fira Code', monospace;
                        line-height: 1;
                        margin: 0;
                    }
                    .marquee .solid { color: rgba(255, 255, 255, 0.05); }
                    .marquee .outline { color: transparent; -webkit-text-stroke: 2px rgba(255, 255, 255, 0.1); }
                    .vibe-content { position: relative; z-index: 10; margin-top: 8rem; text-align: center; }
                    .vibe-content h3 { font-size: clamp(2.5rem, 6vw, 4.5rem); font-weight: 700; margin-bottom: 3rem; }
                    .vibe-content > div > p { font-size: 1.5rem; color: var(--text-muted); max-width: 48rem; margin: 0 auto 4rem; line-height: 1.6; }
                    .pillar { text-align: left; background: rgba(255, 255, 255, 0.05); }
                    .pillar:hover { background: rgba(255, 255, 255, 0.1); }
                    .pillar h4 { font-size: 1.25rem; font-weight: 700; margin-bottom: 1rem; }
                    .pillar p { color: var(--text-muted); font-size: 0.875rem; line-height: 1.6; }
                "#}
            </style>
            <div class="vibe-glow"></div>

            <div class="marquee" style={format!("transform: translateX({:.2}%);", top_x)}>
                <h2 class="solid">{"VIBECODING VIBECODING VIBECODING VIBECODING"}</h2>
            </div>
            <div class="marquee" style={format!("transform: translateX({:.2}%);", bottom_x)}>
                <h2 class="outline">{"REALISM REALISM REALISM REALISM"}</h2>
            </div>

            <div class="container vibe-content">
                <Reveal style={RevealStyle::Zoom}>
                    <h3 class="glow-text">{"CODE IS POETRY"}</h3>
                    <p>
                        {"We don't just write functions; we compose digital symphonies. \
                          Every line of code is a brushstroke on the canvas of the internet. \
                          Embrace the chaos. Compile the dream."}
                    </p>
                    <div class="grid three">
                        { for PILLARS.iter().map(|(title, tone, body)| html! {
                            <div class="glass-panel pillar">
                                <h4 class={*tone}>{ *title }</h4>
                                <p>{ *body }</p>
                            </div>
                        }) }
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_move_in_opposite_directions() {
        assert_eq!(marquee_offsets(0.0), (0.0, -20.0));
        assert_eq!(marquee_offsets(0.5), (-10.0, -10.0));
        assert_eq!(marquee_offsets(1.0), (-20.0, 0.0));
    }
}
