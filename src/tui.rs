use crate::servers::Scope;
use crate::session::{Action, Outcome, Session};
use crate::McpToggleError;
use anyhow::Context;
use crossterm::cursor::{Hide, MoveTo, MoveToNextLine, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use std::io::{self, IsTerminal, Write};
use tracing::debug;

const TITLE: &str = "MCP Servers";
const HINT: &str =
    "↑/↓ or k/j move  space toggle  a all on  n all off  enter save  q/esc cancel";

/// Map a key press to a session action. Unbound keys yield `None`.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Cancel);
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Char(' ') => Some(Action::Toggle),
        KeyCode::Char('a') => Some(Action::EnableAll),
        KeyCode::Char('n') => Some(Action::DisableAll),
        KeyCode::Enter | KeyCode::Char('\n' | '\r') => Some(Action::Confirm),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Cancel),
        _ => None,
    }
}

/// Redraw the whole screen for the current session state.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(0, 0),
        SetAttribute(Attribute::Bold),
        Print(TITLE),
        SetAttribute(Attribute::Reset),
        MoveToNextLine(1),
        SetForegroundColor(Color::DarkGrey),
        Print(HINT),
        ResetColor,
        MoveToNextLine(2),
    )?;

    for (index, entry) in session.entries().iter().enumerate() {
        let selected = index == session.cursor();
        let (indicator, color) =
            if entry.enabled { ("●", Color::Green) } else { ("○", Color::DarkGrey) };

        queue!(
            out,
            Print(if selected { "❯ " } else { "  " }),
            SetForegroundColor(color),
            Print(indicator),
            ResetColor,
            Print(" "),
        )?;
        if selected {
            queue!(out, SetAttribute(Attribute::Reverse))?;
        }
        queue!(out, Print(&entry.name), SetAttribute(Attribute::Reset))?;
        if entry.scope == Scope::Local {
            queue!(
                out,
                SetForegroundColor(Color::Cyan),
                Print(" (local)"),
                ResetColor
            )?;
        }
        queue!(out, MoveToNextLine(1))?;
    }

    let (enabled, disabled) = session.counts();
    queue!(
        out,
        MoveToNextLine(1),
        SetForegroundColor(Color::DarkGrey),
        Print(format!("{enabled} enabled, {disabled} disabled")),
        ResetColor,
        MoveToNextLine(1),
    )?;

    out.flush()
}

/// Drive a session from a stream of terminal events until it is confirmed or
/// cancelled. Each event is handled fully before the next one is read.
///
/// # Errors
///
/// Returns an error if reading an event or drawing fails, or if the event
/// stream ends before the session does.
pub fn run_loop<W, I>(out: &mut W, session: &mut Session, events: I) -> anyhow::Result<Outcome>
where
    W: Write,
    I: IntoIterator<Item = io::Result<Event>>,
{
    render(out, session).context("Failed to draw server list")?;

    for event in events {
        let event = event.context("Failed to read terminal input")?;
        let action = match event {
            Event::Key(key) => action_for_key(key),
            Event::Resize(..) => {
                render(out, session).context("Failed to draw server list")?;
                continue;
            },
            _ => None,
        };
        let Some(action) = action else {
            continue;
        };

        debug!("Applying {action:?}");
        match session.apply(action) {
            Outcome::Running => render(out, session).context("Failed to draw server list")?,
            outcome => return Ok(outcome),
        }
    }

    anyhow::bail!("Terminal input closed before the selection was confirmed")
}

/// Raw keystrokes need a terminal on `input`. Screen output may be redirected.
fn require_keystroke_input(input: &impl IsTerminal) -> Result<(), McpToggleError> {
    if input.is_terminal() {
        Ok(())
    } else {
        Err(McpToggleError::UnsupportedTerminal)
    }
}

/// Raw mode with a hidden cursor, restored on drop.
struct RawTerminal;

impl RawTerminal {
    fn enter() -> Result<Self, McpToggleError> {
        require_keystroke_input(&io::stdin())?;
        terminal::enable_raw_mode().map_err(|e| {
            debug!("Failed to enable raw mode: {e}");
            McpToggleError::UnsupportedTerminal
        })?;
        let guard = Self;
        execute!(io::stdout(), Hide)?;
        Ok(guard)
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, Clear(ClearType::All), MoveTo(0, 0), Show);
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the interactive selection on the controlling terminal.
///
/// # Errors
///
/// Returns `McpToggleError::UnsupportedTerminal` when stdin is not a terminal
/// or raw mode is unavailable, or an error if terminal I/O fails.
pub fn run(session: &mut Session) -> anyhow::Result<Outcome> {
    let _terminal = RawTerminal::enter()?;
    let mut stdout = io::stdout();
    run_loop(&mut stdout, session, std::iter::repeat_with(event::read))
}
