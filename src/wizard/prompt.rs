use std::io::{stdin, stdout, Write};

use colored::*;
use crossterm::{
    cursor::MoveUp,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, Clear, ClearType},
};

use crate::error::{PanelError, PanelResult};
use crate::formatting::{format_expiry, sanitize, truncate};
use crate::models::TeamOption;

/// What the user picked on step 2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection {
    Team(i64),
    /// Let the backend choose the soonest-expiring team.
    Auto,
    Cancel,
}

/// Restores the terminal even when a draw or read fails mid-picker.
struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> PanelResult<Self> {
        terminal::enable_raw_mode().map_err(|e| PanelError::TerminalError(e.to_string()))?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Raw-mode list picker for step 2. Teams are shown in server order.
pub fn pick_team(teams: &[TeamOption]) -> PanelResult<Selection> {
    if teams.is_empty() {
        return Ok(Selection::Cancel);
    }

    let _guard = RawModeGuard::enter()?;
    let mut selected: usize = 0;
    let mut drawn_lines: u16 = 0;

    loop {
        redraw(teams, selected, drawn_lines)?;
        drawn_lines = (teams.len() + 2) as u16;

        let event = event::read().map_err(|e| PanelError::TerminalError(e.to_string()))?;
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Selection::Cancel);
            }
            match key.code {
                KeyCode::Char('j') | KeyCode::Down => {
                    if selected + 1 < teams.len() {
                        selected += 1;
                    }
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    selected = selected.saturating_sub(1);
                }
                KeyCode::Enter => return Ok(Selection::Team(teams[selected].id)),
                KeyCode::Char('a') => return Ok(Selection::Auto),
                KeyCode::Esc | KeyCode::Char('q') => return Ok(Selection::Cancel),
                _ => {}
            }
        }
    }
}

fn redraw(teams: &[TeamOption], selected: usize, previous_lines: u16) -> PanelResult<()> {
    let mut out = stdout();

    if previous_lines > 0 {
        execute!(out, MoveUp(previous_lines), Clear(ClearType::FromCursorDown))
            .map_err(|e| PanelError::TerminalError(e.to_string()))?;
    }

    // Raw mode needs explicit carriage returns
    write!(out, "{}\r\n", "Choose a team to join:".bold())?;

    for (index, team) in teams.iter().enumerate() {
        let line = team_line(team);
        if index == selected {
            write!(out, "  {} {}\r\n", "❯".cyan().bold(), line.cyan().bold())?;
        } else {
            write!(out, "    {}\r\n", line)?;
        }
    }

    write!(
        out,
        "{}\r\n",
        "↑/↓ move · Enter join · a auto-select · Esc cancel".dimmed()
    )?;
    out.flush()?;

    Ok(())
}

fn team_line(team: &TeamOption) -> String {
    let name = truncate(&sanitize(team.display_name()), 28);
    let plan = team
        .subscription_plan
        .as_deref()
        .map(sanitize)
        .unwrap_or_else(|| "-".to_string());
    let expiry = team
        .expires_at
        .as_deref()
        .map(format_expiry)
        .unwrap_or_else(|| "no expiry".to_string());

    format!(
        "{:<30} {:<14} {}/{} seats  expires {}",
        name, plan, team.current_members, team.max_members, expiry
    )
}

/// Cooked-mode single line prompt, used for email and code entry.
pub fn prompt_line(label: &str) -> PanelResult<String> {
    print!("{}: ", label.bold());
    stdout().flush()?;

    let mut input = String::new();
    stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Prompt with a default shown in brackets; empty input keeps the default.
pub fn prompt_line_with_default(label: &str, default: &str) -> PanelResult<String> {
    print!("{} [{}]: ", label.bold(), default.dimmed());
    stdout().flush()?;

    let mut input = String::new();
    stdin().read_line(&mut input)?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn prompt_yes_no(label: &str) -> PanelResult<bool> {
    print!("{} (y/N): ", label.bold());
    stdout().flush()?;

    let mut input = String::new();
    stdin().read_line(&mut input)?;
    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}
