use std::cell::RefCell;
use std::rc::Rc;
#[cfg(test)]
use std::rc::Weak;

use log::debug;
use yew::Callback;

use super::line_source::LineSource;
use super::scheduler::{Scheduler, TimerHandle};
use super::sequencer::{RenderSnapshot, TypingSequencer};
use crate::config::TypingTiming;

struct Inner {
    sequencer: Rc<RefCell<TypingSequencer>>,
    scheduler: Rc<dyn Scheduler>,
    pending: RefCell<Option<TimerHandle>>,
    on_change: Callback<RenderSnapshot>,
}

impl Inner {
    fn emit(&self) {
        let snapshot = self.sequencer.borrow().snapshot();
        self.on_change.emit(snapshot);
    }
}

/// Runs a [`TypingSequencer`] on a [`Scheduler`] and reports every change.
///
/// The driver owns every timer it arms. Dropping it cancels them, and any
/// callback that still slips through finds only dead `Weak`s.
pub struct TypingDriver {
    inner: Rc<Inner>,
    _late_line: Option<TimerHandle>,
}

impl TypingDriver {
    pub fn new(
        source: &LineSource,
        timing: TypingTiming,
        scheduler: Rc<dyn Scheduler>,
        on_change: Callback<RenderSnapshot>,
    ) -> Self {
        let inner = Rc::new(Inner {
            sequencer: Rc::new(RefCell::new(TypingSequencer::new(source.initial_lines(), timing))),
            scheduler,
            pending: RefCell::new(None),
            on_change,
        });

        let late_line = {
            let weak = Rc::downgrade(&inner);
            source.schedule_append(
                &*inner.scheduler,
                Rc::downgrade(&inner.sequencer),
                move || {
                    if let Some(inner) = weak.upgrade() {
                        inner.emit();
                    }
                },
            )
        };

        Self {
            inner,
            _late_line: late_line,
        }
    }

    /// Called by the view when the terminal scrolls into sight. Only the
    /// first call does anything.
    pub fn on_visible(&self) {
        let started = {
            let mut sequencer = self.inner.sequencer.borrow_mut();
            sequencer.observe_visibility(true);
            sequencer.start()
        };
        if started {
            self.inner.emit();
            arm_next_tick(&self.inner);
        }
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> RenderSnapshot {
        self.inner.sequencer.borrow().snapshot()
    }

    #[cfg(test)]
    pub fn sequencer(&self) -> Weak<RefCell<TypingSequencer>> {
        Rc::downgrade(&self.inner.sequencer)
    }
}

impl Drop for TypingDriver {
    fn drop(&mut self) {
        let pending = self.inner.pending.borrow_mut().take();
        if pending.is_some() {
            debug!("terminal torn down mid-sequence, cancelling pending tick");
        }
        drop(pending);
    }
}

fn arm_next_tick(inner: &Rc<Inner>) {
    let Some(delay) = inner.sequencer.borrow().next_delay() else {
        inner.pending.borrow_mut().take();
        return;
    };

    let weak = Rc::downgrade(inner);
    let handle = inner.scheduler.schedule(
        delay,
        Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            // The timer fired after exactly `delay`, so this is one step.
            inner.sequencer.borrow_mut().advance(delay);
            inner.emit();
            arm_next_tick(&inner);
        }),
    );
    // Replaces (and so drops) the handle of the timer that just fired.
    let previous = inner.pending.borrow_mut().replace(handle);
    drop(previous);
}
