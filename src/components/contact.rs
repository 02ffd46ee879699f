use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealStyle};
use crate::config;
use crate::contact::form::{ContactForm, SubmitStatus, SUBJECTS};
use crate::contact::submit::{default_submitter, ContactSubmitter};

/// Pulls `(name, value)` out of whichever form control fired the event.
fn field_change(e: &Event) -> Option<(String, String)> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        return Some((select.name(), select.value()));
    }
    target
        .dyn_ref::<HtmlTextAreaElement>()
        .map(|area| (area.name(), area.value()))
}

/// Holds the success-reset timer. Once the form unmounts nothing can be
/// armed any more, so a submission that resolves late stays silent.
struct ResetSlot<T> {
    mounted: bool,
    pending: Option<T>,
}

impl<T> Default for ResetSlot<T> {
    fn default() -> Self {
        Self {
            mounted: true,
            pending: None,
        }
    }
}

impl<T> ResetSlot<T> {
    fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Stores the timer built by `arm`, replacing any earlier one. Returns
    /// `false` without calling `arm` after unmount.
    fn arm(&mut self, arm: impl FnOnce() -> T) -> bool {
        if !self.mounted {
            return false;
        }
        self.pending = Some(arm());
        true
    }

    fn unmount(&mut self) -> Option<T> {
        self.mounted = false;
        self.pending.take()
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let status = use_state(SubmitStatus::default);
    let submitter: Rc<Box<dyn ContactSubmitter>> = use_memo(|_| default_submitter(), ());
    let reset_timer = use_mut_ref(ResetSlot::<Timeout>::default);

    // Pending reset must not fire into an unmounted component.
    {
        let reset_timer = reset_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    let cancelled = reset_timer.borrow_mut().unmount();
                    drop(cancelled);
                }
            },
            (),
        );
    }

    let on_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some((name, value)) = field_change(&e) {
                let mut next = (*form).clone();
                if !next.set_field(&name, value) {
                    warn!("ignoring change from unknown field {}", name);
                }
                form.set(next);
            }
        })
    };
    let on_input = {
        let on_change = on_change.clone();
        Callback::from(move |e: InputEvent| on_change.emit(e.into()))
    };

    let on_submit = {
        let form = form.clone();
        let status = status.clone();
        let submitter = submitter.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if status.button_disabled() {
                return;
            }

            let payload = match form.validate() {
                Ok(payload) => payload,
                Err(err) => {
                    status.set(SubmitStatus::Error(err.to_string()));
                    return;
                }
            };

            status.set(SubmitStatus::Loading);
            let request = submitter.submit(payload);
            let form = form.clone();
            let status = status.clone();
            let reset_timer = reset_timer.clone();
            spawn_local(async move {
                let outcome = request.await;
                if !reset_timer.borrow().is_mounted() {
                    info!("contact form gone before the transmission settled");
                    return;
                }
                match outcome {
                    Ok(receipt) => {
                        info!("contact transmission delivered ({:?})", receipt.reference);
                        status.set(SubmitStatus::Success);
                        form.set(ContactForm::default());
                        let status = status.clone();
                        reset_timer.borrow_mut().arm(move || {
                            Timeout::new(config::SUCCESS_RESET_MS, move || status.set(SubmitStatus::Idle))
                        });
                    }
                    Err(err) => {
                        gloo_console::error!("contact transmission failed:", err.to_string());
                        status.set(SubmitStatus::Error(err.to_string()));
                    }
                }
            });
        })
    };

    let button_body = match &*status {
        SubmitStatus::Loading => html! { <span class="spinner" aria-label={status.button_label()}></span> },
        SubmitStatus::Idle => html! { <>{ status.button_label() }<span class="send-glyph">{" ➤"}</span></> },
        other => html! { { other.button_label() } },
    };

    html! {
        <section id="contact" class="section">
            <style>
                {r#"
                    .contact-form { display: flex; flex-direction: column; gap: 1.5rem; }
                    .contact-row { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 1.5rem; }
                    .contact-field { display: flex; flex-direction: column; gap: 0.5rem; }
                    .contact-field label {
                        font-size: 0.875rem;
                        font-family: 'Fira Code', monospace;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }
                    .contact-field input, .contact-field select, .contact-field textarea {
                        width: 100%;
                        background: rgba(0, 0, 0, 0.5);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 4px;
                        padding: 0.75rem;
                        color: #fff;
                        font: inherit;
                        transition: border-color 0.2s, box-shadow 0.2s;
                        resize: none;
                        appearance: none;
                    }
                    .contact-field input:focus, .contact-field textarea:focus {
                        outline: none;
                        border-color: var(--primary-color);
                        box-shadow: 0 0 0 1px var(--primary-color);
                    }
                    .contact-error { color: #f87171; font-family: 'Fira Code', monospace; font-size: 0.875rem; }
                    .btn.success { background: #22c55e; border-color: #22c55e; }
                    .spinner {
                        width: 1.25rem;
                        height: 1.25rem;
                        border: 2px solid rgba(255, 255, 255, 0.3);
                        border-top-color: #fff;
                        border-radius: 50%;
                        animation: spin 0.8s linear infinite;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                "#}
            </style>
            <div class="container narrow">
                <Reveal class="section-heading">
                    <h2><span class="text-gradient">{"INITIATE UPLINK"}</span></h2>
                    <p>{"Send your signal. We are listening."}</p>
                </Reveal>

                <Reveal style={RevealStyle::Zoom}>
                    <div class="glass-panel roomy">
                        <form class="contact-form" onsubmit={on_submit}>
                            <div class="contact-row">
                                <div class="contact-field">
                                    <label for="codename" class="text-primary">{"Codename"}</label>
                                    <input
                                        type="text"
                                        id="codename"
                                        name="codename"
                                        value={form.codename.clone()}
                                        oninput={on_input.clone()}
                                        required=true
                                        placeholder="Neo"
                                    />
                                </div>
                                <div class="contact-field">
                                    <label for="email" class="text-secondary">{"Signal Frequency"}</label>
                                    <input
                                        type="email"
                                        id="email"
                                        name="email"
                                        value={form.email.clone()}
                                        oninput={on_input.clone()}
                                        required=true
                                        placeholder="neo@matrix.com"
                                    />
                                </div>
                            </div>

                            <div class="contact-field">
                                <label for="subject">{"Vibe Check"}</label>
                                <select id="subject" name="subject" onchange={on_change.clone()}>
                                    <option value="" disabled=true selected={form.subject.is_empty()}>{"Select Protocol"}</option>
                                    { for SUBJECTS.iter().map(|(value, label)| html! {
                                        <option value={*value} selected={form.subject == *value}>{ *label }</option>
                                    }) }
                                </select>
                            </div>

                            <div class="contact-field">
                                <label for="message" class="text-muted">{"Payload"}</label>
                                <textarea
                                    id="message"
                                    name="message"
                                    rows="5"
                                    value={form.message.clone()}
                                    oninput={on_input}
                                    required=true
                                    placeholder="Describe your reality distortion requirements..."
                                />
                            </div>

                            if let SubmitStatus::Error(message) = &*status {
                                <p class="contact-error">{ message.clone() }</p>
                            }

                            <button
                                type="submit"
                                disabled={status.button_disabled()}
                                class={classes!("btn", "btn-primary", "wide", (*status == SubmitStatus::Success).then(|| "success"))}
                            >
                                { button_body }
                            </button>
                        </form>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Tracked(Rc<Cell<u32>>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn rearming_replaces_the_previous_timer() {
        let dropped = Rc::new(Cell::new(0));
        let mut slot = ResetSlot::default();
        assert!(slot.arm(|| Tracked(dropped.clone())));
        assert!(slot.arm(|| Tracked(dropped.clone())));
        assert_eq!(dropped.get(), 1);

        drop(slot.unmount());
        assert_eq!(dropped.get(), 2);
    }

    #[test]
    fn nothing_is_armed_after_unmount() {
        let mut slot = ResetSlot::<Tracked>::default();
        assert!(slot.is_mounted());
        assert!(slot.unmount().is_none());

        // a submission resolving after teardown
        let built = Cell::new(false);
        assert!(!slot.arm(|| {
            built.set(true);
            Tracked(Rc::new(Cell::new(0)))
        }));
        assert!(!built.get());
        assert!(!slot.is_mounted());
    }
}
