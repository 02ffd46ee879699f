use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::config::{self, TypingTiming};
use crate::terminal::driver::TypingDriver;
use crate::terminal::line_source::LineSource;
use crate::terminal::scheduler::GlooScheduler;
use crate::terminal::sequencer::RenderSnapshot;
use crate::visibility::use_in_view;

#[derive(Properties, PartialEq)]
pub struct TerminalBodyProps {
    pub snapshot: RenderSnapshot,
}

/// The shell prompt shown under the script once typing has finished.
fn prompt_line(snapshot: &RenderSnapshot) -> Option<Html> {
    snapshot.is_done().then(|| html! {
        <div class="terminal-prompt">
            <span class="prompt-user">{"user@ambitious"}</span>
            {":"}
            <span class="prompt-path">{"~"}</span>
            {"$ "}
            <span class="prompt-caret">{"_"}</span>
        </div>
    })
}

#[function_component(TerminalBody)]
pub fn terminal_body(props: &TerminalBodyProps) -> Html {
    let snapshot = &props.snapshot;

    html! {
        <div class="terminal-body">
            { for snapshot.revealed_lines.iter().map(|line| html! {
                <div class="terminal-line">{ line.clone() }</div>
            }) }
            <div class="terminal-line">
                { snapshot.active_text.clone() }
                <span class="terminal-cursor"></span>
            </div>
            { for prompt_line(snapshot) }
        </div>
    }
}

#[function_component(TerminalSection)]
pub fn terminal_section() -> Html {
    let container_ref = use_node_ref();
    let in_view = use_in_view(container_ref.clone(), config::TERMINAL_VIEW_MARGIN);
    let snapshot = use_state(RenderSnapshot::default);
    let driver = use_mut_ref(|| None::<TypingDriver>);

    // Driver lives exactly as long as the section is mounted.
    {
        let driver = driver.clone();
        let snapshot = snapshot.clone();
        use_effect_with_deps(
            move |_| {
                let on_change = Callback::from(move |next: RenderSnapshot| snapshot.set(next));
                *driver.borrow_mut() = Some(TypingDriver::new(
                    &LineSource::terminal_script(config::LATE_LINE_DELAY_MS),
                    TypingTiming::default(),
                    Rc::new(GlooScheduler),
                    on_change,
                ));
                move || {
                    let torn_down = driver.borrow_mut().take();
                    drop(torn_down);
                }
            },
            (),
        );
    }

    {
        let driver = driver.clone();
        use_effect_with_deps(
            move |in_view: &bool| {
                if *in_view {
                    info!("terminal section visible, starting typing sequence");
                    if let Some(driver) = driver.borrow().as_ref() {
                        driver.on_visible();
                    }
                }
                || ()
            },
            in_view,
        );
    }

    html! {
        <section class="terminal-section">
            <style>
                {r#"
                    .terminal-section {
                        padding: 8rem 0;
                        position: relative;
                        display: flex;
                        justify-content: center;
                        align-items: center;
                        min-height: 80vh;
                    }
                    .terminal-window {
                        background: rgba(0, 0, 0, 0.9);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 8px;
                        overflow: hidden;
                        box-shadow: 0 0 50px rgba(0, 240, 255, 0.2);
                        font-family: 'Fira Code', monospace;
                        opacity: 0;
                        transform: scale(0.9);
                        transition: opacity 0.5s ease, transform 0.5s ease;
                    }
                    .terminal-window.visible {
                        opacity: 1;
                        transform: scale(1);
                    }
                    .terminal-header {
                        background: rgba(255, 255, 255, 0.1);
                        padding: 0.75rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        color: var(--text-muted);
                        font-size: 0.75rem;
                    }
                    .terminal-dots { display: flex; gap: 0.5rem; }
                    .terminal-dots span { width: 12px; height: 12px; border-radius: 50%; }
                    .terminal-dots .red { background: #ef4444; }
                    .terminal-dots .yellow { background: #eab308; }
                    .terminal-dots .green { background: #22c55e; }
                    .terminal-body {
                        padding: 1.5rem;
                        height: 24rem;
                        overflow-y: auto;
                    }
                    .terminal-line { margin-bottom: 0.5rem; color: #4ade80; }
                    .terminal-cursor {
                        display: inline-block;
                        width: 0.5rem;
                        height: 1rem;
                        margin-left: 0.25rem;
                        vertical-align: middle;
                        background: #4ade80;
                        animation: pulse 1s infinite;
                    }
                    .terminal-prompt { margin-top: 1rem; color: #fff; }
                    .prompt-user { color: var(--primary-color); }
                    .prompt-path { color: var(--secondary-color); }
                    .prompt-caret { animation: pulse 1s infinite; }
                "#}
            </style>
            <div class="container narrow" ref={container_ref}>
                <div class={classes!("terminal-window", in_view.then(|| "visible"))}>
                    <div class="terminal-header">
                        <div class="terminal-dots">
                            <span class="red"></span>
                            <span class="yellow"></span>
                            <span class="green"></span>
                        </div>
                        <div>{">_ ambitious-realism-cli — v1.0.0"}</div>
                        <div>{"_ □ ×"}</div>
                    </div>
                    <TerminalBody snapshot={(*snapshot).clone()} />
                </div>
            </div>
        </section>
    }
}
