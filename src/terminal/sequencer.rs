use log::{debug, info};

use crate::config::TypingTiming;
use crate::visibility::VisibilityTrigger;

pub type Line = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Revealing,
    LinePause,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencerState {
    pub current_line_index: usize,
    pub revealed_length: usize,
    pub phase: Phase,
}

/// What the terminal window paints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSnapshot {
    pub revealed_lines: Vec<Line>,
    pub active_text: String,
    /// `None` until the sequencer has started.
    pub phase: Option<Phase>,
}

impl RenderSnapshot {
    pub fn is_done(&self) -> bool {
        self.phase == Some(Phase::Done)
    }
}

/// Types a script out one character at a time.
///
/// The sequencer is a plain state machine: it knows nothing about timers.
/// Whoever drives it asks [`next_delay`](Self::next_delay) how long to wait
/// and calls [`tick`](Self::tick) when that time is up, or feeds wall-clock
/// time through [`advance`](Self::advance).
pub struct TypingSequencer {
    lines: Vec<Line>,
    timing: TypingTiming,
    trigger: VisibilityTrigger,
    state: Option<SequencerState>,
    elapsed_in_step: u32,
}

fn char_len(line: &str) -> usize {
    line.chars().count()
}

impl TypingSequencer {
    pub fn new(lines: Vec<Line>, timing: TypingTiming) -> Self {
        Self {
            lines,
            timing,
            trigger: VisibilityTrigger::default(),
            state: None,
            elapsed_in_step: 0,
        }
    }

    #[cfg(test)]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[cfg(test)]
    pub fn state(&self) -> Option<&SequencerState> {
        self.state.as_ref()
    }

    pub fn phase(&self) -> Option<Phase> {
        self.state.as_ref().map(|state| state.phase)
    }

    #[cfg(test)]
    pub fn has_started(&self) -> bool {
        self.state.is_some()
    }

    /// Feeds a visibility observation from the view layer. Returns `true`
    /// when this observation is the one that fired the trigger.
    pub fn observe_visibility(&mut self, visible: bool) -> bool {
        self.trigger.observe(visible)
    }

    /// Creates the sequencer state. Does nothing if the trigger has not
    /// fired yet or the sequencer already started.
    pub fn start(&mut self) -> bool {
        if !self.trigger.has_fired() || self.state.is_some() {
            return false;
        }

        let phase = match self.lines.first() {
            None => Phase::Done,
            Some(line) if line.is_empty() => Phase::LinePause,
            Some(_) => Phase::Revealing,
        };
        info!("typing sequence started with {} lines", self.lines.len());
        self.state = Some(SequencerState {
            current_line_index: 0,
            revealed_length: 0,
            phase,
        });
        self.elapsed_in_step = 0;
        true
    }

    /// How long to wait before the next `tick`, or `None` when there is
    /// nothing left to do.
    pub fn next_delay(&self) -> Option<u32> {
        match self.phase()? {
            Phase::Revealing => Some(self.timing.char_interval_ms),
            Phase::LinePause => Some(self.timing.line_pause_ms),
            Phase::Done => None,
        }
    }

    /// Performs one step. Safe to call before `start` and after `Done`.
    pub fn tick(&mut self) -> bool {
        self.elapsed_in_step = 0;
        let Some(state) = self.state.as_mut() else {
            return false;
        };

        match state.phase {
            Phase::Revealing => {
                let len = char_len(&self.lines[state.current_line_index]);
                if state.revealed_length < len {
                    state.revealed_length += 1;
                }
                if state.revealed_length >= len {
                    state.phase = Phase::LinePause;
                }
                true
            }
            Phase::LinePause => {
                state.current_line_index += 1;
                state.revealed_length = 0;
                state.phase = match self.lines.get(state.current_line_index) {
                    None => {
                        info!("typing sequence finished after {} lines", state.current_line_index);
                        Phase::Done
                    }
                    Some(line) if line.is_empty() => Phase::LinePause,
                    Some(_) => Phase::Revealing,
                };
                true
            }
            Phase::Done => false,
        }
    }

    /// Elapsed-time form of `tick`. Returns the number of steps taken.
    pub fn advance(&mut self, elapsed_ms: u32) -> usize {
        let mut budget = self.elapsed_in_step.saturating_add(elapsed_ms);
        let mut steps = 0;
        while let Some(delay) = self.next_delay() {
            if budget < delay {
                break;
            }
            budget -= delay;
            self.tick();
            steps += 1;
        }
        self.elapsed_in_step = if self.next_delay().is_some() { budget } else { 0 };
        steps
    }

    /// Adds a line to the end of the script. Never resumes a finished
    /// sequencer: once `Done`, the line is kept but not typed.
    pub fn append_line(&mut self, line: impl Into<Line>) {
        let line = line.into();
        if self.phase() == Some(Phase::Done) {
            debug!("line appended after typing finished, leaving it unrendered: {}", line);
        } else {
            debug!("line appended to script: {}", line);
        }
        self.lines.push(line);
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        let Some(state) = self.state.as_ref() else {
            return RenderSnapshot::default();
        };

        let active_text = match state.phase {
            Phase::Done => String::new(),
            Phase::Revealing | Phase::LinePause => self.lines[state.current_line_index]
                .chars()
                .take(state.revealed_length)
                .collect(),
        };

        RenderSnapshot {
            revealed_lines: self.lines[..state.current_line_index].to_vec(),
            active_text,
            phase: Some(state.phase),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::line_source::{INITIAL_SCRIPT, READY_LINE};

    fn timing() -> TypingTiming {
        TypingTiming {
            char_interval_ms: 50,
            line_pause_ms: 500,
        }
    }

    fn script() -> Vec<Line> {
        INITIAL_SCRIPT.iter().map(|line| line.to_string()).collect()
    }

    fn started(lines: Vec<Line>) -> TypingSequencer {
        let mut sequencer = TypingSequencer::new(lines, timing());
        sequencer.observe_visibility(true);
        assert!(sequencer.start());
        sequencer
    }

    fn run_to_completion(sequencer: &mut TypingSequencer) {
        let mut guard = 0;
        while sequencer.next_delay().is_some() {
            sequencer.tick();
            guard += 1;
            assert!(guard < 10_000, "sequencer never finished");
        }
    }

    #[test]
    fn nothing_happens_before_visibility() {
        let mut sequencer = TypingSequencer::new(script(), timing());
        for _ in 0..20 {
            assert!(!sequencer.tick());
        }
        assert_eq!(sequencer.advance(10_000), 0);
        assert!(!sequencer.start());
        assert_eq!(sequencer.phase(), None);
        assert_eq!(sequencer.snapshot(), RenderSnapshot::default());

        sequencer.observe_visibility(false);
        assert!(!sequencer.start());
        assert!(!sequencer.has_started());
    }

    #[test]
    fn start_initializes_state() {
        let sequencer = started(script());
        assert_eq!(
            sequencer.state(),
            Some(&SequencerState {
                current_line_index: 0,
                revealed_length: 0,
                phase: Phase::Revealing,
            })
        );
        assert_eq!(sequencer.next_delay(), Some(50));
    }

    #[test]
    fn each_tick_reveals_exactly_one_character() {
        let mut sequencer = started(vec!["> HELLO".to_string(), "> NEXT".to_string()]);

        for expected in 1..=7 {
            sequencer.tick();
            let snapshot = sequencer.snapshot();
            assert_eq!(snapshot.active_text.chars().count(), expected);
            assert!(snapshot.revealed_lines.is_empty());
        }
        assert_eq!(sequencer.snapshot().active_text, "> HELLO");
        assert_eq!(sequencer.phase(), Some(Phase::LinePause));
    }

    #[test]
    fn holds_for_one_line_pause_before_next_line() {
        let mut sequencer = started(vec!["ab".to_string(), "cd".to_string()]);
        assert_eq!(sequencer.advance(100), 2);
        assert_eq!(sequencer.phase(), Some(Phase::LinePause));

        assert_eq!(sequencer.advance(499), 0);
        let paused = sequencer.snapshot();
        assert_eq!(paused.active_text, "ab");
        assert!(paused.revealed_lines.is_empty());

        assert_eq!(sequencer.advance(1), 1);
        let snapshot = sequencer.snapshot();
        assert_eq!(snapshot.revealed_lines, vec!["ab".to_string()]);
        assert_eq!(snapshot.active_text, "");
        assert_eq!(snapshot.phase, Some(Phase::Revealing));
    }

    #[test]
    fn advance_carries_partial_time_between_calls() {
        let mut sequencer = started(vec!["abc".to_string()]);
        assert_eq!(sequencer.advance(30), 0);
        assert_eq!(sequencer.advance(30), 1);
        assert_eq!(sequencer.advance(39), 0);
        assert_eq!(sequencer.advance(1), 1);
        assert_eq!(sequencer.snapshot().active_text, "ab");
    }

    #[test]
    fn line_index_never_decreases() {
        let mut sequencer = started(script());
        let mut last = 0;
        while sequencer.next_delay().is_some() {
            sequencer.tick();
            let index = sequencer.state().map(|s| s.current_line_index).unwrap_or_default();
            assert!(index >= last);
            let state = sequencer.state().expect("started");
            if state.phase != Phase::Done {
                let len = sequencer.lines()[state.current_line_index].chars().count();
                assert!(state.revealed_length <= len);
            }
            last = index;
        }
    }

    #[test]
    fn full_script_ends_done_with_lines_in_order() {
        let mut sequencer = started(script());
        run_to_completion(&mut sequencer);

        let snapshot = sequencer.snapshot();
        assert!(snapshot.is_done());
        assert_eq!(snapshot.revealed_lines, script());
        assert_eq!(snapshot.active_text, "");
        assert!(!sequencer.tick());
        assert_eq!(sequencer.next_delay(), None);
    }

    #[test]
    fn script_takes_expected_time() {
        let total_chars: u32 = INITIAL_SCRIPT.iter().map(|l| l.chars().count() as u32).sum();
        let expected = total_chars * 50 + INITIAL_SCRIPT.len() as u32 * 500;

        let mut sequencer = started(script());
        sequencer.advance(expected - 1);
        assert_eq!(sequencer.phase(), Some(Phase::LinePause));
        sequencer.advance(1);
        assert_eq!(sequencer.phase(), Some(Phase::Done));
    }

    #[test]
    fn line_appended_after_done_stays_hidden() {
        let mut sequencer = started(script());
        run_to_completion(&mut sequencer);

        sequencer.append_line(READY_LINE);
        assert_eq!(sequencer.lines().len(), 6);
        assert!(!sequencer.tick());
        assert_eq!(sequencer.advance(60_000), 0);

        let snapshot = sequencer.snapshot();
        assert!(snapshot.is_done());
        assert_eq!(snapshot.revealed_lines, script());
        assert!(!snapshot.revealed_lines.iter().any(|l| l == READY_LINE));
    }

    #[test]
    fn line_appended_while_typing_is_typed() {
        let mut sequencer = started(script());
        sequencer.tick();
        sequencer.append_line(READY_LINE);
        run_to_completion(&mut sequencer);

        let snapshot = sequencer.snapshot();
        assert_eq!(snapshot.revealed_lines.len(), 6);
        assert_eq!(snapshot.revealed_lines.last().map(String::as_str), Some(READY_LINE));
    }

    #[test]
    fn second_start_keeps_progress() {
        let mut sequencer = started(script());
        for _ in 0..5 {
            sequencer.tick();
        }
        let before = sequencer.state().cloned();

        sequencer.observe_visibility(true);
        assert!(!sequencer.start());
        assert_eq!(sequencer.state().cloned(), before);
    }

    #[test]
    fn empty_script_starts_done() {
        let sequencer = started(Vec::new());
        assert_eq!(sequencer.phase(), Some(Phase::Done));
        assert_eq!(sequencer.next_delay(), None);
        assert!(sequencer.snapshot().revealed_lines.is_empty());
    }

    #[test]
    fn empty_lines_only_pause() {
        let mut sequencer = started(vec![String::new(), "x".to_string()]);
        assert_eq!(sequencer.phase(), Some(Phase::LinePause));
        sequencer.tick();
        assert_eq!(sequencer.phase(), Some(Phase::Revealing));
        assert_eq!(sequencer.snapshot().revealed_lines, vec![String::new()]);
    }

    #[test]
    fn reveals_by_character_not_byte() {
        let mut sequencer = started(vec!["→ ok".to_string()]);
        sequencer.tick();
        assert_eq!(sequencer.snapshot().active_text, "→");
        sequencer.tick();
        assert_eq!(sequencer.snapshot().active_text, "→ ");
    }
}
