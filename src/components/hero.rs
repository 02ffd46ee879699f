use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use web_sys::js_sys::Date;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::scroll::map_range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Code,
    Terminal,
    Cpu,
    Globe,
}

impl Glyph {
    const CYCLE: [Glyph; 4] = [Glyph::Code, Glyph::Terminal, Glyph::Cpu, Glyph::Globe];

    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Code => "</>",
            Glyph::Terminal => ">_",
            Glyph::Cpu => "▣",
            Glyph::Globe => "◍",
        }
    }
}

/// Placement of one decorative icon floating behind the headline.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingIcon {
    pub glyph: Glyph,
    pub top_pct: f64,
    pub left_pct: f64,
    pub size_px: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl FloatingIcon {
    fn style(&self) -> String {
        format!(
            "top: {:.2}%; left: {:.2}%; font-size: {:.0}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.top_pct, self.left_pct, self.size_px, self.duration_s, self.delay_s
        )
    }
}

pub fn floating_icons(rng: &mut impl Rng, count: usize) -> Vec<FloatingIcon> {
    (0..count)
        .map(|i| FloatingIcon {
            glyph: Glyph::CYCLE[i % Glyph::CYCLE.len()],
            top_pct: rng.gen_range(0.0..100.0),
            left_pct: rng.gen_range(0.0..100.0),
            size_px: rng.gen_range(20.0..50.0),
            duration_s: rng.gen_range(5.0..10.0),
            delay_s: rng.gen_range(0.0..2.0),
        })
        .collect()
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let (_, scroll_y) = use_window_scroll();
    // Computed once per mount, then reused for every render.
    let icons = use_memo(
        |_| {
            let mut rng = StdRng::seed_from_u64(Date::now() as u64);
            floating_icons(&mut rng, config::FLOATING_ICON_COUNT)
        },
        (),
    );
    let parallax_y = map_range(scroll_y, config::HERO_PARALLAX_SCROLL, config::HERO_PARALLAX_OFFSET);

    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 100vh;
                        width: 100%;
                        overflow: hidden;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: var(--bg-color);
                    }
                    .hero-parallax {
                        position: absolute;
                        inset: 0;
                        opacity: 0.2;
                        pointer-events: none;
                    }
                    .hero-glow {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at center, var(--primary-color) 0%, transparent 70%);
                        opacity: 0.2;
                        filter: blur(100px);
                    }
                    .floating-icon {
                        position: absolute;
                        color: var(--primary-color);
                        font-family: 'Fira Code', monospace;
                        animation-name: float;
                        animation-iteration-count: infinite;
                        animation-timing-function: ease-in-out;
                    }
                    @keyframes float {
                        0%, 100% { transform: translateY(0); opacity: 0.3; }
                        50% { transform: translateY(-50px); opacity: 0.6; }
                    }
                    .hero-content { position: relative; z-index: 10; text-align: center; }
                    .hero-title {
                        font-size: clamp(4rem, 12vw, 8rem);
                        font-weight: 900;
                        letter-spacing: -0.05em;
                        margin-bottom: 1.5rem;
                        animation: rise 0.8s ease-out both;
                    }
                    .hero-title .plain {
                        display: block;
                        background: linear-gradient(to right, #fff, #6b7280);
                        -webkit-background-clip: text;
                        color: transparent;
                    }
                    .glitch { position: relative; display: inline-block; }
                    .glitch .main { position: relative; z-index: 20; color: #fff; text-shadow: 0 0 15px rgba(176, 38, 255, 0.8); }
                    .glitch .layer { position: absolute; top: 0; left: 0; width: 100%; height: 100%; opacity: 0.8; z-index: 10; mix-blend-mode: screen; }
                    .glitch .layer.red { color: #ef4444; animation: glitch-1 2.5s infinite linear alternate-reverse; }
                    .glitch .layer.cyan { color: #22d3ee; animation: glitch-2 3s infinite linear alternate-reverse; }
                    .hero-copy {
                        max-width: 42rem;
                        margin: 0 auto;
                        animation: fade 0.8s ease-out 0.5s both;
                    }
                    .hero-copy p { font-size: 1.5rem; color: var(--text-muted); margin-bottom: 2.5rem; font-weight: 300; }
                    .hero-actions { display: flex; flex-wrap: wrap; gap: 1.5rem; justify-content: center; align-items: center; }
                    .manifesto-link {
                        color: var(--text-muted);
                        font-family: 'Fira Code', monospace;
                        font-size: 0.875rem;
                        letter-spacing: 0.2em;
                        border-bottom: 1px solid transparent;
                        padding-bottom: 0.25rem;
                    }
                    .manifesto-link:hover { color: #fff; border-color: #fff; }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 2.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        color: var(--text-muted);
                        animation: bob 2s infinite;
                    }
                    .scroll-mouse {
                        width: 1.5rem;
                        height: 2.5rem;
                        border: 2px solid rgba(255, 255, 255, 0.2);
                        border-radius: 9999px;
                        display: flex;
                        justify-content: center;
                        padding: 0.25rem;
                    }
                    .scroll-wheel { width: 0.25rem; height: 0.5rem; background: var(--primary-color); border-radius: 9999px; animation: wheel 1.5s infinite; }
                    @keyframes bob { 0%, 100% { transform: translate(-50%, 0); } 50% { transform: translate(-50%, 10px); } }
                    @keyframes wheel { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(15px); } }
                "#}
            </style>
            <div class="hero-parallax" style={format!("transform: translateY({:.1}px);", parallax_y)}>
                <div class="hero-glow"></div>
                { for icons.iter().map(|icon| html! {
                    <div class="floating-icon" style={icon.style()}>{ icon.glyph.symbol() }</div>
                }) }
            </div>

            <div class="container hero-content">
                <h1 class="hero-title">
                    <span class="plain">{"AMBITIOUS"}</span>
                    <div class="glitch">
                        <span class="main">{"REALISM"}</span>
                        <span class="layer red">{"REALISM"}</span>
                        <span class="layer cyan">{"REALISM"}</span>
                    </div>
                </h1>
                <div class="hero-copy">
                    <p>
                        {"We bridge the gap between "}
                        <span class="text-primary mono">{"chaos"}</span>
                        {" and "}
                        <span class="text-secondary mono">{"structure"}</span>
                        {"."}
                        <br />
                        {"Vibecoding for the post-ironic web."}
                    </p>
                    <div class="hero-actions">
                        <a href="#pricing" class="btn-primary pill">{"DEPLOY REALITY"}</a>
                        <a href="#ethos" class="manifesto-link">{"READ MANIFESTO"}</a>
                    </div>
                </div>
            </div>

            <div class="scroll-indicator">
                <div class="scroll-mouse">
                    <div class="scroll-wheel"></div>
                </div>
                <span class="mono tiny">{"SCROLL"}</span>
            </div>
        </section>
    }
}
