use yew::prelude::*;

use crate::components::reveal::{stagger_delay, Reveal};

pub struct Service {
    pub glyph: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub accent: &'static str,
}

pub const SERVICES: [Service; 3] = [
    Service {
        glyph: ">_",
        title: "Business Consulting",
        desc: "Strategic chaos management for enterprise systems.",
        accent: "linear-gradient(135deg, var(--primary-color), #9333ea)",
    },
    Service {
        glyph: "ϟ",
        title: "Vibecoding Content",
        desc: "High-frequency aesthetic injection for your brand.",
        accent: "linear-gradient(135deg, var(--secondary-color), #2563eb)",
    },
    Service {
        glyph: "◍",
        title: "App Development",
        desc: "Full-stack reality distortion fields.",
        accent: "linear-gradient(135deg, #ec4899, #f43f5e)",
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="section dimmed">
            <style>
                {r#"
                    .service-card { position: relative; overflow: hidden; height: 100%; }
                    .service-accent {
                        position: absolute;
                        inset: 0;
                        opacity: 0;
                        transition: opacity 0.5s;
                    }
                    .service-card:hover .service-accent { opacity: 0.1; }
                    .service-icon {
                        margin-bottom: 1.5rem;
                        padding: 1rem;
                        background: rgba(255, 255, 255, 0.05);
                        border-radius: 9999px;
                        width: fit-content;
                        font-size: 2rem;
                        font-family: 'Fira Code', monospace;
                        transition: transform 0.3s;
                    }
                    .service-card:hover .service-icon { transform: scale(1.1); }
                    .service-card:hover h3 { color: var(--primary-color); }
                    .service-card p { color: var(--text-muted); margin-bottom: 2rem; line-height: 1.6; }
                "#}
            </style>
            <div class="container">
                <Reveal class="section-heading">
                    <h2><span class="text-gradient">{"OUR SERVICES"}</span></h2>
                    <p>{"Deploying cutting-edge solutions for problems you didn't know you had."}</p>
                </Reveal>

                <div class="grid three">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <Reveal delay_ms={stagger_delay(index)}>
                            <div class="glass-panel service-card">
                                <div class="service-accent" style={format!("background: {};", service.accent)}></div>
                                <div class="layer-up">
                                    <div class="service-icon">{ service.glyph }</div>
                                    <h3>{ service.title }</h3>
                                    <p>{ service.desc }</p>
                                    <a href="#contact" class="underline-link">{"LEARN MORE"}</a>
                                </div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
