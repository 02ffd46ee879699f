use std::cell::RefCell;
use std::rc::Weak;

use log::info;

use super::scheduler::{Scheduler, TimerHandle};
use super::sequencer::{Line, TypingSequencer};

pub const INITIAL_SCRIPT: [&str; 5] = [
    "> INITIALIZING VIBE_SEQUENCE...",
    "> LOADING ASSETS...",
    "> OPTIMIZING REALITY MATRIX...",
    "> ESTABLISHING SECURE CONNECTION...",
    "> ACCESS GRANTED.",
];

pub const READY_LINE: &str = "> SYSTEM READY.";

/// The script the terminal types: a fixed opening plus one line that shows up
/// a while after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSource {
    initial: Vec<Line>,
    late_line: Option<Line>,
    late_delay_ms: u32,
}

impl LineSource {
    pub fn new(initial: Vec<Line>, late_line: Option<Line>, late_delay_ms: u32) -> Self {
        Self {
            initial,
            late_line,
            late_delay_ms,
        }
    }

    pub fn terminal_script(late_delay_ms: u32) -> Self {
        Self::new(
            INITIAL_SCRIPT.iter().map(|line| line.to_string()).collect(),
            Some(READY_LINE.to_string()),
            late_delay_ms,
        )
    }

    pub fn initial_lines(&self) -> Vec<Line> {
        self.initial.clone()
    }

    /// Arms the one-off append. The clock starts now, regardless of what the
    /// sequencer is doing; dropping the handle cancels the append.
    pub fn schedule_append(
        &self,
        scheduler: &dyn Scheduler,
        target: Weak<RefCell<TypingSequencer>>,
        on_appended: impl FnOnce() + 'static,
    ) -> Option<TimerHandle> {
        let line = self.late_line.clone()?;
        Some(scheduler.schedule(
            self.late_delay_ms,
            Box::new(move || {
                let Some(sequencer) = target.upgrade() else {
                    return;
                };
                info!("appending late line to terminal script");
                sequencer.borrow_mut().append_line(line);
                on_appended();
            }),
        ))
    }
}
