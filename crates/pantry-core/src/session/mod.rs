//! Step-by-step cooking mode.
//!
//! A [`CookingSession`] walks through a recipe's instructions one step at a
//! time and carries one optional countdown. It is a plain state machine:
//! every input goes through [`CookingSession::handle`], which either returns
//! the event the transition produced or rejects the input and leaves the
//! session untouched.
//!
//! ```text
//!   AtStep(0) ──advance──▶ AtStep(1) ──advance──▶ ... AtStep(N-1) ──advance──▶ Completed
//!       ◀──retreat──            ◀──retreat──
//!
//!   Countdown:  Idle ──start(m > 0)──▶ Running(s) ──tick──▶ Running(s-1)
//!                 ▲                        │
//!                 └──── stop / start / tick to zero / session end
//! ```
//!
//! Time is supplied from outside. [`driver::run_session`] feeds user inputs
//! and ticks from a [`ticker::TickSource`] into the session one at a time and
//! forwards results to a [`NotificationSink`].
//!
//! ```rust
//! use pantry_core::session::{CookingSession, SessionEvent, SessionInput};
//!
//! let steps = vec!["Chop onions".to_string(), "Serve".to_string()];
//! let mut session = CookingSession::new(&steps)?;
//! assert_eq!(session.current_step().position_label(), "Step 1 of 2");
//!
//! session.handle(SessionInput::Advance)?;
//! let done = session.handle(SessionInput::Advance)?;
//! assert_eq!(done, Some(SessionEvent::Completed));
//! # Ok::<(), pantry_core::session::SessionError>(())
//! ```

use thiserror::Error;

use crate::models::Recipe;

pub mod countdown;
pub mod driver;
pub mod event;
pub mod ticker;

#[cfg(test)]
mod tests;

pub use countdown::{Clock, Countdown, CountdownChange};
pub use driver::{run_session, SessionOutcome};
pub use event::{NotificationSink, RecordingSink, SessionEvent, StepView};
pub use ticker::{ChannelTicker, IntervalTicker, TickSource};

/// Inputs a cooking session accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionInput {
    /// Go to the next step, or finish on the last one.
    Advance,
    /// Go back one step.
    Retreat,
    /// Start a countdown of the given minutes, or stop the running one.
    StartCountdown(String),
    /// Cancel the running countdown.
    StopCountdown,
    /// One second elapsed.
    Tick,
    /// Leave cooking mode without finishing.
    Close,
}

/// Rejections a cooking session can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The input is not allowed in the current state.
    #[error("Cannot {action}: {reason}")]
    InvalidTransition {
        action: &'static str,
        reason: &'static str,
    },
    /// The countdown duration was not a positive number of minutes.
    #[error("Invalid timer duration '{input}': enter a positive number of minutes")]
    InvalidDuration { input: String },
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Showing the step at this index.
    AtStep(usize),
    /// The last step was finished.
    Completed,
    /// The session was left before finishing.
    Closed,
}

/// Cooking mode over a borrowed list of instructions.
#[derive(Debug)]
pub struct CookingSession<'a> {
    instructions: &'a [String],
    prep_time: Option<&'a str>,
    cook_time: Option<&'a str>,
    index: usize,
    state: SessionState,
    countdown: Countdown,
}

impl<'a> CookingSession<'a> {
    /// Opens a session on the first instruction.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` when there are no instructions.
    pub fn new(instructions: &'a [String]) -> Result<Self, SessionError> {
        if instructions.is_empty() {
            return Err(SessionError::InvalidTransition {
                action: "start cooking mode",
                reason: "the recipe has no instructions",
            });
        }

        Ok(Self {
            instructions,
            prep_time: None,
            cook_time: None,
            index: 0,
            state: SessionState::AtStep(0),
            countdown: Countdown::Idle,
        })
    }

    /// Opens a session on a stored recipe, carrying its time labels.
    pub fn for_recipe(recipe: &'a Recipe) -> Result<Self, SessionError> {
        let mut session = Self::new(&recipe.instructions)?;
        session.prep_time = Some(&recipe.prep_time);
        session.cook_time = Some(&recipe.cook_time);
        Ok(session)
    }

    /// Applies one input.
    ///
    /// Returns the event the transition produced, `Ok(None)` for transitions
    /// that are silent (stopping a countdown, closing, an idle tick), or the
    /// rejection. A rejected input never changes the session.
    pub fn handle(&mut self, input: SessionInput) -> Result<Option<SessionEvent>, SessionError> {
        match input {
            SessionInput::Advance => self.advance().map(Some),
            SessionInput::Retreat => self.retreat().map(Some),
            SessionInput::StartCountdown(minutes) => self.start_countdown(&minutes),
            SessionInput::StopCountdown => {
                self.stop_countdown()?;
                Ok(None)
            }
            SessionInput::Tick => Ok(self.tick()),
            SessionInput::Close => {
                self.close();
                Ok(None)
            }
        }
    }

    /// Moves to the next step, or completes the session from the last one.
    pub fn advance(&mut self) -> Result<SessionEvent, SessionError> {
        let index = self.active_index("advance")?;

        if index + 1 < self.instructions.len() {
            self.move_to(index + 1);
            Ok(SessionEvent::StepChanged(self.current_step()))
        } else {
            self.state = SessionState::Completed;
            self.countdown.stop();
            Ok(SessionEvent::Completed)
        }
    }

    /// Moves to the previous step.
    pub fn retreat(&mut self) -> Result<SessionEvent, SessionError> {
        let index = self.active_index("go back")?;

        if index == 0 {
            return Err(SessionError::InvalidTransition {
                action: "go back",
                reason: "already at the first step",
            });
        }

        self.move_to(index - 1);
        Ok(SessionEvent::StepChanged(self.current_step()))
    }

    /// Starts a countdown, or stops the running one.
    ///
    /// Stopping this way is silent and does not start a new countdown.
    pub fn start_countdown(&mut self, minutes: &str) -> Result<Option<SessionEvent>, SessionError> {
        self.active_index("start a timer")?;

        match self.countdown.start(minutes)? {
            CountdownChange::Started(seconds) => Ok(Some(SessionEvent::countdown_started(seconds))),
            CountdownChange::Stopped | CountdownChange::Ticked(_) | CountdownChange::Expired => {
                Ok(None)
            }
        }
    }

    /// Cancels the running countdown, if any.
    pub fn stop_countdown(&mut self) -> Result<(), SessionError> {
        self.active_index("stop the timer")?;
        self.countdown.stop();
        Ok(())
    }

    /// One second elapsed. Ignored unless a countdown is running.
    pub fn tick(&mut self) -> Option<SessionEvent> {
        match self.countdown.tick()? {
            CountdownChange::Ticked(remaining) => Some(SessionEvent::countdown_tick(remaining)),
            CountdownChange::Expired => Some(SessionEvent::CountdownExpired),
            CountdownChange::Started(_) | CountdownChange::Stopped => None,
        }
    }

    /// Leaves the session. Closing twice, or after completion, is a no-op.
    pub fn close(&mut self) {
        self.countdown.stop();
        if let SessionState::AtStep(_) = self.state {
            self.state = SessionState::Closed;
        }
    }

    /// The step currently shown.
    ///
    /// After the session ended this is the last step that was shown.
    pub fn current_step(&self) -> StepView {
        StepView {
            text: self.instructions[self.index].clone(),
            index: self.index,
            total: self.instructions.len(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn countdown(&self) -> Countdown {
        self.countdown
    }

    pub fn is_finished(&self) -> bool {
        !matches!(self.state, SessionState::AtStep(_))
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Always false; a session cannot be opened without steps.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn prep_time(&self) -> Option<&'a str> {
        self.prep_time
    }

    pub fn cook_time(&self) -> Option<&'a str> {
        self.cook_time
    }

    fn move_to(&mut self, index: usize) {
        self.index = index;
        self.state = SessionState::AtStep(index);
    }

    fn active_index(&self, action: &'static str) -> Result<usize, SessionError> {
        match self.state {
            SessionState::AtStep(index) => Ok(index),
            SessionState::Completed => Err(SessionError::InvalidTransition {
                action,
                reason: "all steps are already complete",
            }),
            SessionState::Closed => Err(SessionError::InvalidTransition {
                action,
                reason: "cooking mode was closed",
            }),
        }
    }
}
