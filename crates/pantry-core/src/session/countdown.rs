//! Single countdown timer used while cooking.
//!
//! The countdown knows nothing about wall-clock time. Each call to
//! [`Countdown::tick`] stands for one elapsed second, so whatever drives it
//! (a real interval or a test channel) decides how fast time passes.

use std::fmt;

use super::SessionError;

/// Countdown sub-state of a cooking session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Countdown {
    /// No countdown is running.
    #[default]
    Idle,
    /// Counting down; holds the whole seconds left.
    Running { remaining: u32 },
}

/// What a countdown transition produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownChange {
    /// A countdown started with this many seconds.
    Started(u32),
    /// One second elapsed; this many remain.
    Ticked(u32),
    /// The countdown reached zero.
    Expired,
    /// A running countdown was cancelled.
    Stopped,
}

impl Countdown {
    /// Starts a countdown from user text such as `"2"` or `"1.5"` minutes.
    ///
    /// If a countdown is already running it is stopped instead and no new one
    /// is started; the caller has to start again explicitly. Input that is not
    /// a number, or that rounds to zero or fewer seconds, is rejected and the
    /// countdown stays idle.
    pub fn start(&mut self, minutes: &str) -> Result<CountdownChange, SessionError> {
        if self.is_running() {
            *self = Countdown::Idle;
            return Ok(CountdownChange::Stopped);
        }

        let trimmed = minutes.trim();
        let parsed = trimmed
            .parse::<f64>()
            .map_err(|_| SessionError::InvalidDuration {
                input: trimmed.to_string(),
            })?;
        self.start_minutes(parsed).map_err(|_| SessionError::InvalidDuration {
            input: trimmed.to_string(),
        })
    }

    /// Starts a countdown of `minutes`, rounded to whole seconds.
    pub fn start_minutes(&mut self, minutes: f64) -> Result<CountdownChange, SessionError> {
        if self.is_running() {
            *self = Countdown::Idle;
            return Ok(CountdownChange::Stopped);
        }

        let seconds = to_seconds(minutes).ok_or_else(|| SessionError::InvalidDuration {
            input: minutes.to_string(),
        })?;
        *self = Countdown::Running { remaining: seconds };
        Ok(CountdownChange::Started(seconds))
    }

    /// Advances the countdown by one second.
    ///
    /// Returns `None` when idle; a tick with nothing running is ignored.
    pub fn tick(&mut self) -> Option<CountdownChange> {
        let Countdown::Running { remaining } = *self else {
            return None;
        };

        let remaining = remaining.saturating_sub(1);
        if remaining == 0 {
            *self = Countdown::Idle;
            Some(CountdownChange::Expired)
        } else {
            *self = Countdown::Running { remaining };
            Some(CountdownChange::Ticked(remaining))
        }
    }

    /// Cancels a running countdown. Returns whether anything was running.
    pub fn stop(&mut self) -> bool {
        let was_running = self.is_running();
        *self = Countdown::Idle;
        was_running
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Countdown::Running { .. })
    }

    /// Seconds left, or `None` when idle.
    pub fn remaining(&self) -> Option<u32> {
        match self {
            Countdown::Idle => None,
            Countdown::Running { remaining } => Some(*remaining),
        }
    }
}

/// Converts minutes to whole seconds, `None` unless the result is positive.
fn to_seconds(minutes: f64) -> Option<u32> {
    if !minutes.is_finite() {
        return None;
    }
    let seconds = (minutes * 60.0).round();
    if seconds < 1.0 || seconds > f64::from(u32::MAX) {
        return None;
    }
    Some(seconds as u32)
}

/// `MM:SS` rendering of a number of seconds.
///
/// Minutes are not wrapped into hours, so 7200 seconds shows as `120:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock(pub u32);

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}
