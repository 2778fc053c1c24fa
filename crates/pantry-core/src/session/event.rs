//! Notifications emitted by a cooking session.

use std::fmt;

use super::{countdown::Clock, SessionError};

/// Label on the advance control for every step but the last.
pub const NEXT_STEP_LABEL: &str = "Next Step";
/// Label on the advance control on the last step.
pub const FINISH_LABEL: &str = "Finish";

/// Snapshot of the step a session is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    /// Instruction text of the current step
    pub text: String,
    /// Zero-based index of the current step
    pub index: usize,
    /// Number of steps in the session
    pub total: usize,
}

impl StepView {
    /// `"Step {n} of {total}"`, one-based.
    pub fn position_label(&self) -> String {
        format!("Step {} of {}", self.index + 1, self.total)
    }

    /// Whether going back a step is allowed from here.
    pub fn can_retreat(&self) -> bool {
        self.index > 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.total
    }

    /// What the advance control should read on this step.
    pub fn advance_label(&self) -> &'static str {
        if self.is_last() {
            FINISH_LABEL
        } else {
            NEXT_STEP_LABEL
        }
    }
}

impl fmt::Display for StepView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.position_label())?;
        writeln!(f)?;
        writeln!(f, "{}", self.text)
    }
}

/// Everything a session can tell its observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The current step changed (or is being shown for the first time).
    StepChanged(StepView),
    /// A countdown started; carries the initial `MM:SS` display.
    CountdownStarted { display: String },
    /// One second of the countdown elapsed.
    CountdownTick { display: String },
    /// The countdown reached zero.
    CountdownExpired,
    /// The last step was finished.
    Completed,
}

impl SessionEvent {
    pub(crate) fn countdown_started(seconds: u32) -> Self {
        SessionEvent::CountdownStarted {
            display: Clock(seconds).to_string(),
        }
    }

    pub(crate) fn countdown_tick(seconds: u32) -> Self {
        SessionEvent::CountdownTick {
            display: Clock(seconds).to_string(),
        }
    }
}

/// Receives session notifications.
///
/// The driver calls exactly one of these per processed input, in order.
pub trait NotificationSink {
    /// Called for every event a transition produced.
    fn notify(&mut self, event: &SessionEvent);

    /// Called when an input was rejected. The session state is unchanged.
    fn reject(&mut self, error: &SessionError) {
        let _ = error;
    }

    /// Called when a running countdown ends for any reason, including the
    /// silent ones (stopped, toggled off, session closed).
    fn countdown_cleared(&mut self) {}
}

impl<S: NotificationSink + ?Sized> NotificationSink for &mut S {
    fn notify(&mut self, event: &SessionEvent) {
        (**self).notify(event);
    }

    fn reject(&mut self, error: &SessionError) {
        (**self).reject(error);
    }

    fn countdown_cleared(&mut self) {
        (**self).countdown_cleared();
    }
}

/// Sink that keeps everything it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<SessionEvent>,
    pub rejections: Vec<SessionError>,
    pub countdowns_cleared: usize,
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, event: &SessionEvent) {
        self.events.push(event.clone());
    }

    fn reject(&mut self, error: &SessionError) {
        self.rejections.push(error.clone());
    }

    fn countdown_cleared(&mut self) {
        self.countdowns_cleared += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(index: usize, total: usize) -> StepView {
        StepView {
            text: "Stir".to_string(),
            index,
            total,
        }
    }

    #[test]
    fn test_step_view_labels() {
        let first = view(0, 3);
        assert_eq!(first.position_label(), "Step 1 of 3");
        assert!(!first.can_retreat());
        assert_eq!(first.advance_label(), "Next Step");

        let last = view(2, 3);
        assert_eq!(last.position_label(), "Step 3 of 3");
        assert!(last.can_retreat());
        assert_eq!(last.advance_label(), "Finish");
    }

    #[test]
    fn test_single_step_is_first_and_last() {
        let only = view(0, 1);
        assert!(!only.can_retreat());
        assert_eq!(only.advance_label(), "Finish");
    }

    #[test]
    fn test_countdown_event_display() {
        assert_eq!(
            SessionEvent::countdown_tick(75),
            SessionEvent::CountdownTick {
                display: "01:15".to_string()
            }
        );
    }
}
