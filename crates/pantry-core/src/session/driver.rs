//! Event loop that drives a cooking session.

use log::debug;
use tokio::sync::mpsc;

use super::{
    CookingSession, NotificationSink, SessionEvent, SessionInput, SessionState, TickSource,
};

/// How a driven session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every step was finished.
    Completed,
    /// The session was closed, or its input channel went away.
    Closed,
}

/// Runs a session until it completes or is closed.
///
/// Announces the first step, then takes inputs one at a time: user inputs
/// from `inputs` and, only while a countdown is running, ticks from
/// `ticker`. When both are ready the user input goes first. Each input is
/// fully applied and reported to `sink` before the next one is read. A
/// closed input channel counts as [`SessionInput::Close`].
///
/// Whenever a running countdown ends, `sink` also hears about it through
/// [`NotificationSink::countdown_cleared`], after any event for the input.
pub async fn run_session<T, S>(
    session: &mut CookingSession<'_>,
    inputs: &mut mpsc::Receiver<SessionInput>,
    ticker: &mut T,
    mut sink: S,
) -> SessionOutcome
where
    T: TickSource,
    S: NotificationSink,
{
    sink.notify(&SessionEvent::StepChanged(session.current_step()));

    loop {
        let input = next_input(session, inputs, ticker).await;
        debug!("Cooking session input: {input:?}");

        let was_running = session.countdown().is_running();
        match session.handle(input) {
            Ok(Some(event)) => {
                if !was_running && session.countdown().is_running() {
                    ticker.reset();
                }
                sink.notify(&event);
            }
            Ok(None) => {}
            Err(error) => {
                debug!("Cooking session rejected input: {error}");
                sink.reject(&error);
            }
        }

        if was_running && !session.countdown().is_running() {
            sink.countdown_cleared();
        }

        match session.state() {
            SessionState::AtStep(_) => {}
            SessionState::Completed => return SessionOutcome::Completed,
            SessionState::Closed => return SessionOutcome::Closed,
        }
    }
}

async fn next_input<T: TickSource>(
    session: &CookingSession<'_>,
    inputs: &mut mpsc::Receiver<SessionInput>,
    ticker: &mut T,
) -> SessionInput {
    if session.countdown().is_running() {
        tokio::select! {
            biased;
            input = inputs.recv() => input.unwrap_or(SessionInput::Close),
            () = ticker.next_tick() => SessionInput::Tick,
        }
    } else {
        inputs.recv().await.unwrap_or(SessionInput::Close)
    }
}
