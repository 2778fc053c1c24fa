use tokio::sync::mpsc;

use super::*;

fn steps(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|s| s.to_string()).collect()
}

fn numbered_steps(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Step text {i}")).collect()
}

/// Forwards everything to a channel so tests can await events one by one.
struct ForwardingSink(mpsc::UnboundedSender<Result<SessionEvent, SessionError>>);

impl NotificationSink for ForwardingSink {
    fn notify(&mut self, event: &SessionEvent) {
        let _ = self.0.send(Ok(event.clone()));
    }

    fn reject(&mut self, error: &SessionError) {
        let _ = self.0.send(Err(error.clone()));
    }
}

fn tick_display(display: &str) -> SessionEvent {
    SessionEvent::CountdownTick {
        display: display.to_string(),
    }
}

#[test]
fn test_empty_instructions_cannot_start() {
    let empty: Vec<String> = Vec::new();
    let result = CookingSession::new(&empty);
    assert!(matches!(
        result,
        Err(SessionError::InvalidTransition { .. })
    ));
}

#[test]
fn test_session_starts_at_first_step() {
    let instructions = steps(&["Chop onions", "Boil water", "Serve"]);
    let session = CookingSession::new(&instructions).unwrap();

    let step = session.current_step();
    assert_eq!(step.text, "Chop onions");
    assert_eq!(step.position_label(), "Step 1 of 3");
    assert!(!step.can_retreat());
    assert_eq!(step.advance_label(), "Next Step");
    assert_eq!(session.state(), SessionState::AtStep(0));
    assert_eq!(session.countdown(), Countdown::Idle);
}

#[test]
fn test_three_step_walkthrough() {
    let instructions = steps(&["Chop onions", "Boil water", "Serve"]);
    let mut session = CookingSession::new(&instructions).unwrap();

    let SessionEvent::StepChanged(second) = session.advance().unwrap() else {
        panic!("expected a step change");
    };
    assert_eq!(second.text, "Boil water");
    assert_eq!(second.position_label(), "Step 2 of 3");
    assert!(second.can_retreat());
    assert_eq!(second.advance_label(), "Next Step");

    let SessionEvent::StepChanged(third) = session.advance().unwrap() else {
        panic!("expected a step change");
    };
    assert_eq!(third.text, "Serve");
    assert_eq!(third.position_label(), "Step 3 of 3");
    assert_eq!(third.advance_label(), "Finish");

    assert_eq!(session.advance().unwrap(), SessionEvent::Completed);
    assert_eq!(session.state(), SessionState::Completed);
    assert!(session.is_finished());
}

#[test]
fn test_retreat_at_first_step_is_rejected_without_change() {
    let instructions = steps(&["Whisk", "Bake"]);
    let mut session = CookingSession::new(&instructions).unwrap();

    let err = session.retreat().unwrap_err();
    assert!(matches!(err, SessionError::InvalidTransition { .. }));
    assert_eq!(session.state(), SessionState::AtStep(0));
    assert_eq!(session.current_step().text, "Whisk");
}

#[test]
fn test_retreat_moves_back() {
    let instructions = steps(&["Whisk", "Bake"]);
    let mut session = CookingSession::new(&instructions).unwrap();
    session.advance().unwrap();

    let SessionEvent::StepChanged(step) = session.retreat().unwrap() else {
        panic!("expected a step change");
    };
    assert_eq!(step.index, 0);
    assert_eq!(step.advance_label(), "Next Step");
}

#[test]
fn test_n_minus_one_advances_reach_last_step() {
    for n in 1..=6 {
        let instructions = numbered_steps(n);
        let mut session = CookingSession::new(&instructions).unwrap();
        for _ in 0..n - 1 {
            session.advance().unwrap();
        }
        assert_eq!(session.state(), SessionState::AtStep(n - 1));
        assert_eq!(session.current_step().advance_label(), "Finish");

        assert_eq!(session.advance().unwrap(), SessionEvent::Completed);
    }
}

#[test]
fn test_index_stays_in_bounds_for_every_sequence() {
    // Every advance/retreat sequence up to length 8, for N = 1..=4.
    const LENGTH: u32 = 8;
    for n in 1..=4usize {
        let instructions = numbered_steps(n);
        for pattern in 0..(1u32 << LENGTH) {
            let mut session = CookingSession::new(&instructions).unwrap();
            let mut expected = 0usize;

            for bit in 0..LENGTH {
                if session.is_finished() {
                    break;
                }
                let advance = pattern & (1 << bit) != 0;
                let before = session.state();

                if advance {
                    let event = session.advance().unwrap();
                    if expected == n - 1 {
                        assert_eq!(event, SessionEvent::Completed);
                        assert_eq!(before, SessionState::AtStep(n - 1));
                    } else {
                        expected += 1;
                    }
                } else if expected == 0 {
                    assert!(session.retreat().is_err());
                    assert_eq!(session.state(), before);
                } else {
                    session.retreat().unwrap();
                    expected -= 1;
                }

                if let SessionState::AtStep(index) = session.state() {
                    assert!(index < n);
                    assert_eq!(index, expected);
                }
            }
        }
    }
}

#[test]
fn test_inputs_after_completion_are_rejected() {
    let instructions = steps(&["Serve"]);
    let mut session = CookingSession::new(&instructions).unwrap();
    assert_eq!(session.advance().unwrap(), SessionEvent::Completed);

    assert!(session.advance().is_err());
    assert!(session.retreat().is_err());
    assert!(session.start_countdown("1").is_err());
    assert_eq!(session.state(), SessionState::Completed);
}

#[test]
fn test_countdown_two_minutes_after_45_ticks() {
    let instructions = steps(&["Simmer"]);
    let mut session = CookingSession::new(&instructions).unwrap();

    let started = session.start_countdown("2").unwrap();
    assert_eq!(
        started,
        Some(SessionEvent::CountdownStarted {
            display: "02:00".to_string()
        })
    );
    assert_eq!(session.countdown().remaining(), Some(120));

    let mut last = None;
    for _ in 0..45 {
        last = session.tick();
    }
    assert_eq!(session.countdown().remaining(), Some(75));
    assert_eq!(last, Some(tick_display("01:15")));
}

#[test]
fn test_countdown_zero_is_rejected() {
    let instructions = steps(&["Simmer"]);
    let mut session = CookingSession::new(&instructions).unwrap();

    let err = session.handle(SessionInput::StartCountdown("0".to_string()));
    assert!(matches!(err, Err(SessionError::InvalidDuration { .. })));
    assert_eq!(session.countdown(), Countdown::Idle);
}

#[test]
fn test_tick_while_idle_is_ignored() {
    let instructions = steps(&["Simmer", "Serve"]);
    let mut session = CookingSession::new(&instructions).unwrap();

    assert_eq!(session.handle(SessionInput::Tick), Ok(None));
    assert_eq!(session.countdown(), Countdown::Idle);
    assert_eq!(session.state(), SessionState::AtStep(0));
}

#[test]
fn test_stop_then_tick_produces_no_expiry() {
    let instructions = steps(&["Simmer"]);
    let mut session = CookingSession::new(&instructions).unwrap();

    session.start_countdown("0.05").unwrap();
    assert_eq!(session.handle(SessionInput::StopCountdown), Ok(None));
    assert_eq!(session.handle(SessionInput::Tick), Ok(None));
    assert_eq!(session.countdown(), Countdown::Idle);
}

#[test]
fn test_countdown_expires_at_zero() {
    let instructions = steps(&["Simmer"]);
    let mut session = CookingSession::new(&instructions).unwrap();

    session.start_countdown("0.05").unwrap();
    assert_eq!(session.tick(), Some(tick_display("00:02")));
    assert_eq!(session.tick(), Some(tick_display("00:01")));
    assert_eq!(session.tick(), Some(SessionEvent::CountdownExpired));
    assert_eq!(session.countdown(), Countdown::Idle);
    assert_eq!(session.tick(), None);
}

#[test]
fn test_start_while_running_toggles_off() {
    let instructions = steps(&["Simmer"]);
    let mut session = CookingSession::new(&instructions).unwrap();

    session.start_countdown("5").unwrap();
    assert_eq!(session.start_countdown("5"), Ok(None));
    assert_eq!(session.countdown(), Countdown::Idle);

    // A second press starts it again
    assert!(session.start_countdown("5").unwrap().is_some());
    assert!(session.countdown().is_running());
}

#[test]
fn test_countdown_is_independent_of_steps() {
    let instructions = steps(&["Boil", "Drain", "Serve"]);
    let mut session = CookingSession::new(&instructions).unwrap();

    session.start_countdown("1").unwrap();
    session.advance().unwrap();
    session.tick();
    session.retreat().unwrap();

    assert_eq!(session.countdown().remaining(), Some(59));
}

#[test]
fn test_completion_and_close_stop_the_countdown() {
    let instructions = steps(&["Serve"]);
    let mut session = CookingSession::new(&instructions).unwrap();
    session.start_countdown("3").unwrap();
    session.advance().unwrap();
    assert_eq!(session.countdown(), Countdown::Idle);

    let instructions = steps(&["Boil", "Serve"]);
    let mut session = CookingSession::new(&instructions).unwrap();
    session.start_countdown("3").unwrap();
    session.handle(SessionInput::Close).unwrap();
    assert_eq!(session.countdown(), Countdown::Idle);
    assert_eq!(session.state(), SessionState::Closed);
    assert_eq!(session.current_step().index, 0);
}

#[test]
fn test_for_recipe_carries_time_labels() {
    let recipe = crate::models::Recipe {
        id: 7,
        name: "Soup".to_string(),
        prep_time: "10 minutes".to_string(),
        cook_time: "25 minutes".to_string(),
        ingredients: vec!["Water".to_string()],
        instructions: steps(&["Boil", "Season"]),
        created_at: jiff::Timestamp::now(),
    };
    let session = CookingSession::for_recipe(&recipe).unwrap();
    assert_eq!(session.prep_time(), Some("10 minutes"));
    assert_eq!(session.cook_time(), Some("25 minutes"));
    assert_eq!(session.len(), 2);
}

#[tokio::test]
async fn test_driver_walks_steps_and_completes() {
    let instructions = steps(&["Chop onions", "Boil water", "Serve"]);
    let mut session = CookingSession::new(&instructions).unwrap();
    let (input_tx, mut input_rx) = mpsc::channel(8);
    let (_tick_tx, mut ticker) = ChannelTicker::new();
    let mut sink = RecordingSink::default();

    for _ in 0..3 {
        input_tx.send(SessionInput::Advance).await.unwrap();
    }

    let outcome = run_session(&mut session, &mut input_rx, &mut ticker, &mut sink).await;
    assert_eq!(outcome, SessionOutcome::Completed);

    let labels: Vec<String> = sink
        .events
        .iter()
        .filter_map(|event| match event {
            SessionEvent::StepChanged(step) => Some(step.position_label()),
            _ => None,
        })
        .collect();
    assert_eq!(labels, ["Step 1 of 3", "Step 2 of 3", "Step 3 of 3"]);
    assert_eq!(sink.events.last(), Some(&SessionEvent::Completed));
}

#[tokio::test]
async fn test_driver_reports_every_countdown_end() {
    let instructions = steps(&["Simmer", "Serve"]);
    let mut session = CookingSession::new(&instructions).unwrap();
    let (input_tx, mut input_rx) = mpsc::channel(8);
    let (_tick_tx, mut ticker) = ChannelTicker::new();
    let mut sink = RecordingSink::default();

    for input in [
        SessionInput::StartCountdown("1".to_string()),
        SessionInput::StopCountdown,
        SessionInput::StopCountdown,
        SessionInput::StartCountdown("1".to_string()),
        SessionInput::StartCountdown(String::new()),
        SessionInput::StartCountdown("2".to_string()),
    ] {
        input_tx.send(input).await.unwrap();
    }
    drop(input_tx);

    let outcome = run_session(&mut session, &mut input_rx, &mut ticker, &mut sink).await;
    assert_eq!(outcome, SessionOutcome::Closed);

    // stop, toggle off, then the close that ends the last countdown
    assert_eq!(sink.countdowns_cleared, 3);
    assert!(sink.rejections.is_empty());
    assert_eq!(
        sink.events
            .iter()
            .filter(|event| matches!(event, SessionEvent::CountdownStarted { .. }))
            .count(),
        3
    );
}

#[tokio::test]
async fn test_driver_reports_rejections_and_keeps_going() {
    let instructions = steps(&["Whisk", "Bake"]);
    let mut session = CookingSession::new(&instructions).unwrap();
    let (input_tx, mut input_rx) = mpsc::channel(8);
    let (_tick_tx, mut ticker) = ChannelTicker::new();
    let mut sink = RecordingSink::default();

    input_tx.send(SessionInput::Retreat).await.unwrap();
    input_tx
        .send(SessionInput::StartCountdown("soon".to_string()))
        .await
        .unwrap();
    input_tx.send(SessionInput::Advance).await.unwrap();
    drop(input_tx);

    let outcome = run_session(&mut session, &mut input_rx, &mut ticker, &mut sink).await;
    assert_eq!(outcome, SessionOutcome::Closed);
    assert_eq!(sink.rejections.len(), 2);
    assert!(matches!(
        sink.rejections[0],
        SessionError::InvalidTransition { .. }
    ));
    assert_eq!(
        sink.rejections[1],
        SessionError::InvalidDuration {
            input: "soon".to_string()
        }
    );
    assert_eq!(session.state(), SessionState::Closed);
    assert_eq!(session.current_step().index, 1);
}

#[tokio::test]
async fn test_driver_runs_countdown_on_virtual_ticks() {
    let instructions = steps(&["Boil water", "Serve"]);
    let mut session = CookingSession::new(&instructions).unwrap();
    let (input_tx, mut input_rx) = mpsc::channel(8);
    let (tick_tx, mut ticker) = ChannelTicker::new();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let driver = run_session(
        &mut session,
        &mut input_rx,
        &mut ticker,
        ForwardingSink(event_tx),
    );

    let script = async move {
        let first = event_rx.recv().await.unwrap().unwrap();
        assert!(matches!(first, SessionEvent::StepChanged(ref step) if step.index == 0));

        input_tx
            .send(SessionInput::StartCountdown("0.05".to_string()))
            .await
            .unwrap();
        assert_eq!(
            event_rx.recv().await.unwrap(),
            Ok(SessionEvent::CountdownStarted {
                display: "00:03".to_string()
            })
        );

        for _ in 0..3 {
            tick_tx.send(()).unwrap();
        }
        assert_eq!(event_rx.recv().await.unwrap(), Ok(tick_display("00:02")));
        assert_eq!(event_rx.recv().await.unwrap(), Ok(tick_display("00:01")));
        assert_eq!(
            event_rx.recv().await.unwrap(),
            Ok(SessionEvent::CountdownExpired)
        );

        // Extra ticks after expiry are never read
        tick_tx.send(()).unwrap();
        input_tx.send(SessionInput::Advance).await.unwrap();
        let next = event_rx.recv().await.unwrap().unwrap();
        assert!(matches!(next, SessionEvent::StepChanged(ref step) if step.is_last()));

        input_tx.send(SessionInput::Advance).await.unwrap();
        assert_eq!(event_rx.recv().await.unwrap(), Ok(SessionEvent::Completed));
    };

    let (outcome, ()) = tokio::join!(driver, script);
    assert_eq!(outcome, SessionOutcome::Completed);
}

#[tokio::test]
async fn test_driver_stopped_countdown_ignores_ticks() {
    let instructions = steps(&["Boil water", "Serve"]);
    let mut session = CookingSession::new(&instructions).unwrap();
    let (input_tx, mut input_rx) = mpsc::channel(8);
    let (tick_tx, mut ticker) = ChannelTicker::new();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let driver = run_session(
        &mut session,
        &mut input_rx,
        &mut ticker,
        ForwardingSink(event_tx),
    );

    let script = async move {
        event_rx.recv().await.unwrap().unwrap();
        input_tx
            .send(SessionInput::StartCountdown("1".to_string()))
            .await
            .unwrap();
        event_rx.recv().await.unwrap().unwrap();

        input_tx.send(SessionInput::StopCountdown).await.unwrap();
        input_tx.send(SessionInput::Advance).await.unwrap();
        let next = event_rx.recv().await.unwrap().unwrap();
        assert!(matches!(next, SessionEvent::StepChanged(_)));

        for _ in 0..5 {
            tick_tx.send(()).unwrap();
        }
        drop(input_tx);
        assert!(event_rx.recv().await.is_none());
    };

    let (outcome, ()) = tokio::join!(driver, script);
    assert_eq!(outcome, SessionOutcome::Closed);
    assert_eq!(session.countdown(), Countdown::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_driver_with_interval_ticker_expires_on_time() {
    let instructions = steps(&["Rest the dough"]);
    let mut session = CookingSession::new(&instructions).unwrap();
    let (input_tx, mut input_rx) = mpsc::channel(8);
    let mut ticker = IntervalTicker::every_second();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let driver = run_session(
        &mut session,
        &mut input_rx,
        &mut ticker,
        ForwardingSink(event_tx),
    );

    let script = async move {
        event_rx.recv().await.unwrap().unwrap();
        let started = tokio::time::Instant::now();
        input_tx
            .send(SessionInput::StartCountdown("0.05".to_string()))
            .await
            .unwrap();

        let mut ticks = Vec::new();
        loop {
            match event_rx.recv().await.unwrap().unwrap() {
                SessionEvent::CountdownExpired => break,
                SessionEvent::CountdownTick { display } => ticks.push(display),
                _ => {}
            }
        }
        assert_eq!(ticks, ["00:02", "00:01"]);
        assert!(started.elapsed() >= tokio::time::Duration::from_secs(3));

        input_tx.send(SessionInput::Close).await.unwrap();
    };

    let (outcome, ()) = tokio::join!(driver, script);
    assert_eq!(outcome, SessionOutcome::Closed);
}
