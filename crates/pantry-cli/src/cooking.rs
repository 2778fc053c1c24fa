//! Interactive cooking mode on the terminal.
//!
//! Standard input is read line by line on its own thread and turned into
//! session inputs; a one-second interval drives the countdown. Closing
//! standard input leaves cooking mode.

use std::{io::BufRead, thread};

use anyhow::Result;
use log::{debug, warn};
use pantry_core::{
    display::OperationStatus,
    models::Recipe,
    session::{
        run_session, CookingSession, IntervalTicker, NotificationSink, SessionError,
        SessionEvent, SessionInput, SessionOutcome,
    },
};
use tokio::sync::mpsc;

use crate::renderer::TerminalRenderer;

const HELP: &str = "Commands: [n]ext, [p]rev, [t]imer <minutes>, [s]top timer, [q]uit, [h]elp";

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookCommand {
    Input(SessionInput),
    Help,
    Unknown(String),
}

/// Parses a line typed during cooking mode. Blank lines yield `None`.
///
/// `t` without minutes is passed through so that it still stops a running
/// timer.
pub fn parse_command(line: &str) -> Option<CookCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "n" | "next" | "f" | "finish" => CookCommand::Input(SessionInput::Advance),
        "p" | "prev" | "previous" | "back" => CookCommand::Input(SessionInput::Retreat),
        "t" | "timer" => CookCommand::Input(SessionInput::StartCountdown(rest.to_string())),
        "s" | "stop" => CookCommand::Input(SessionInput::StopCountdown),
        "q" | "quit" | "exit" => CookCommand::Input(SessionInput::Close),
        "h" | "help" | "?" => CookCommand::Help,
        _ => CookCommand::Unknown(line.to_string()),
    };

    Some(command)
}

/// Prints session notifications through the renderer.
struct TerminalSink<'r> {
    renderer: &'r TerminalRenderer,
}

impl TerminalSink<'_> {
    fn print(&self, markdown: &str) {
        if let Err(e) = self.renderer.render(markdown) {
            warn!("Failed to write to terminal: {e}");
        }
    }
}

impl NotificationSink for TerminalSink<'_> {
    fn notify(&mut self, event: &SessionEvent) {
        let result = match event {
            SessionEvent::StepChanged(step) => {
                let back = if step.can_retreat() { "[p] Back  " } else { "" };
                self.print(&format!(
                    "\n{step}\n{back}[n] {}  [t <min>] Timer  [q] Quit\n",
                    step.advance_label()
                ));
                Ok(())
            }
            SessionEvent::CountdownStarted { display } => self
                .renderer
                .render_status_line(&format!("Timer started: **{display}**")),
            SessionEvent::CountdownTick { display } => {
                self.renderer.render_status_line(&format!("Timer: **{display}**"))
            }
            SessionEvent::CountdownExpired => self
                .renderer
                .render_status_line("**Time's up!** Your timer has finished.\x07")
                .and_then(|()| self.renderer.end_status_line()),
            SessionEvent::Completed => {
                self.print("\n**All steps complete. Enjoy your meal!**\n");
                Ok(())
            }
        };

        if let Err(e) = result {
            warn!("Failed to write to terminal: {e}");
        }
    }

    fn reject(&mut self, error: &SessionError) {
        self.print(&OperationStatus::failure(error.to_string()).to_string());
    }

    fn countdown_cleared(&mut self) {
        if let Err(e) = self.renderer.end_status_line() {
            warn!("Failed to write to terminal: {e}");
        }
    }
}

/// Reads commands from standard input until it closes or the user quits.
///
/// Runs on a plain thread: a blocking stdin read cannot be cancelled, and
/// the process may exit while it is still waiting.
fn spawn_input_reader(inputs: mpsc::Sender<SessionInput>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };

            match parse_command(&line) {
                Some(CookCommand::Input(input)) => {
                    let quit = input == SessionInput::Close;
                    if inputs.blocking_send(input).is_err() || quit {
                        break;
                    }
                }
                Some(CookCommand::Help) => println!("{HELP}"),
                Some(CookCommand::Unknown(text)) => {
                    println!("Unknown command '{text}'. {HELP}");
                }
                None => {}
            }
        }
        debug!("Cooking input reader finished");
    });
}

/// Runs cooking mode for a recipe until it is finished or left.
pub async fn cook(recipe: &Recipe, renderer: &TerminalRenderer) -> Result<()> {
    let mut session = CookingSession::for_recipe(recipe)?;

    renderer.render(&format!(
        "# Cooking: {}\n\n- **Prep time**: {}\n- **Cook time**: {}\n\n{HELP}\n",
        recipe.name, recipe.prep_time, recipe.cook_time
    ))?;

    let (sender, mut inputs) = mpsc::channel(16);
    spawn_input_reader(sender);

    let mut ticker = IntervalTicker::every_second();
    let sink = TerminalSink { renderer };
    let outcome = run_session(&mut session, &mut inputs, &mut ticker, sink).await;

    debug!("Cooking session for recipe {} ended: {outcome:?}", recipe.id);
    if outcome == SessionOutcome::Closed {
        renderer.render("Cooking mode closed.\n")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation() {
        assert_eq!(
            parse_command("n"),
            Some(CookCommand::Input(SessionInput::Advance))
        );
        assert_eq!(
            parse_command("  Next "),
            Some(CookCommand::Input(SessionInput::Advance))
        );
        assert_eq!(
            parse_command("prev"),
            Some(CookCommand::Input(SessionInput::Retreat))
        );
        assert_eq!(
            parse_command("q"),
            Some(CookCommand::Input(SessionInput::Close))
        );
    }

    #[test]
    fn test_parse_timer() {
        assert_eq!(
            parse_command("t 2.5"),
            Some(CookCommand::Input(SessionInput::StartCountdown(
                "2.5".to_string()
            )))
        );
        assert_eq!(
            parse_command("timer"),
            Some(CookCommand::Input(SessionInput::StartCountdown(
                String::new()
            )))
        );
        assert_eq!(
            parse_command("stop"),
            Some(CookCommand::Input(SessionInput::StopCountdown))
        );
    }

    #[test]
    fn test_parse_other_lines() {
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("?"), Some(CookCommand::Help));
        assert_eq!(
            parse_command("stir well"),
            Some(CookCommand::Unknown("stir well".to_string()))
        );
    }
}
