use yew::prelude::*;

use crate::components::reveal::{stagger_delay, Reveal};

#[derive(Clone, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub highlight: bool,
}

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "Script Kiddie",
        price: "$999",
        features: &["Basic Vibe Audit", "1 Reality Patch", "Standard Support"],
        highlight: false,
    },
    Plan {
        name: "Full Stack",
        price: "$2,499",
        features: &[
            "Deep Chaos Engineering",
            "5 Reality Patches",
            "24/7 Vibe Monitoring",
            "Aesthetic Consultation",
        ],
        highlight: true,
    },
    Plan {
        name: "10x Engineer",
        price: "$9,999",
        features: &[
            "Total Reality Overhaul",
            "Unlimited Patches",
            "Direct Neural Link",
            "CTO-as-a-Service",
        ],
        highlight: false,
    },
];

#[derive(Properties, PartialEq)]
pub struct PlanCardProps {
    pub plan: Plan,
}

#[function_component(PlanCard)]
pub fn plan_card(props: &PlanCardProps) -> Html {
    let plan = &props.plan;

    html! {
        <div class={classes!("glass-panel", "plan-card", plan.highlight.then(|| "highlight"))}>
            if plan.highlight {
                <div class="plan-badge">{"MOST POPULAR"}</div>
            }
            <h3>{ plan.name }</h3>
            <div class="plan-price">{ plan.price }</div>
            <ul class="plan-features">
                { for plan.features.iter().map(|feature| html! {
                    <li><span class="text-primary">{"✓"}</span><span>{ *feature }</span></li>
                }) }
            </ul>
            <a href="#contact" class={classes!("btn", "wide", plan.highlight.then(|| "btn-primary"))}>
                {"SELECT PLAN"}
            </a>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <section id="pricing" class="section">
            <style>
                {r#"
                    .plan-card { position: relative; padding: 2rem; background: rgba(255, 255, 255, 0.05); }
                    .plan-card.highlight {
                        border-color: rgba(176, 38, 255, 0.5);
                        background: rgba(176, 38, 255, 0.05);
                        transform: scale(1.05);
                        z-index: 10;
                        box-shadow: 0 0 40px rgba(176, 38, 255, 0.2);
                    }
                    .plan-badge {
                        position: absolute;
                        top: 0;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        background: var(--primary-color);
                        color: #000;
                        font-size: 0.75rem;
                        font-weight: 700;
                        padding: 0.25rem 1rem;
                        border-radius: 9999px;
                        letter-spacing: 0.2em;
                    }
                    .plan-card h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 0.5rem; }
                    .plan-price { font-size: 2.25rem; font-weight: 700; margin-bottom: 2rem; font-family: 'Fira Code', monospace; }
                    .plan-features { list-style: none; padding: 0; margin: 0 0 2rem; }
                    .plan-features li { display: flex; align-items: center; gap: 0.75rem; color: var(--text-muted); margin-bottom: 1rem; }
                "#}
            </style>
            <div class="container">
                <Reveal class="section-heading">
                    <h2><span class="text-gradient">{"INVEST IN REALITY"}</span></h2>
                    <p>{"Choose your level of engagement."}</p>
                </Reveal>

                <div class="grid three centered">
                    { for PLANS.iter().enumerate().map(|(index, plan)| html! {
                        <Reveal delay_ms={stagger_delay(index)}>
                            <PlanCard plan={plan.clone()} />
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_highlighted_plan() {
        let highlighted: Vec<&str> = PLANS.iter().filter(|p| p.highlight).map(|p| p.name).collect();
        assert_eq!(highlighted, vec!["Full Stack"]);
    }
}
