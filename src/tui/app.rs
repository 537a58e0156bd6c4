//! TUI Application - event loop and terminal management
//!
//! The loop is synchronous: draw, block until the next key, apply it,
//! redraw. Every frame is rebuilt from [`hud::view`], so no widget state
//! survives between frames except the skills scroll offset.

use std::io::{self, stdout};

use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    tty::IsTty,
};
use ratatui::prelude::*;

use super::widgets::{self, Chrome};
use crate::{Error, Result};
use crate::hud::{self, HudOptions, RenderContext, SkillsPolicy, View};
use crate::models::Snapshot;
use crate::session::{SessionGate, SubmitOutcome};
use crate::storage::Storage;
use crate::theme::{ThemeController, ThemePreference};

const GATE_HINTS: &str = "Enter:Engage  Ctrl-U:Clear  Ctrl-T:Theme  Esc:Quit";
const DASHBOARD_HINTS: &str = "t:Theme  l:Logout  j/k:Scroll skills  q:Quit";

/// TUI Application state
pub struct HudApp {
    storage: Storage,
    theme: ThemeController,
    session: SessionGate,
    data: Snapshot,
    options: HudOptions,
    /// First visible row of the skills scroll region
    skills_offset: usize,
    should_quit: bool,
}

impl HudApp {
    /// Restore persisted theme and session, then hold the data set.
    pub fn new(storage: Storage, data: Snapshot, options: HudOptions) -> Self {
        let theme = ThemeController::initialize(&storage);
        let session = SessionGate::initialize(&storage);
        Self {
            storage,
            theme,
            session,
            data,
            options,
            skills_offset: 0,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &SessionGate {
        &self.session
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme.preference()
    }

    pub fn skills_offset(&self) -> usize {
        self.skills_offset
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The screen for the current state.
    pub fn view(&self) -> View {
        let ctx = RenderContext::new(self.theme.preference(), self.options);
        hud::view(&ctx, &self.session, &self.data)
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.session.is_unlocked() {
            self.handle_dashboard_key(key.code, ctrl);
        } else {
            self.handle_gate_key(key.code, key.modifiers);
        }
    }

    fn handle_gate_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);
        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('t') if ctrl => {
                self.theme.toggle(&mut self.storage);
            }
            KeyCode::Char('u') if ctrl => self.session.clear_input(),
            KeyCode::Char(c) if !ctrl && !modifiers.contains(KeyModifiers::ALT) => {
                self.session.input_char(c);
            }
            KeyCode::Backspace => self.session.backspace(),
            KeyCode::Enter => {
                if self.session.submit(&mut self.storage) == SubmitOutcome::Unlocked {
                    self.skills_offset = 0;
                }
            }
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, code: KeyCode, ctrl: bool) {
        if ctrl {
            return;
        }
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('t') => {
                self.theme.toggle(&mut self.storage);
            }
            KeyCode::Char('l') => {
                self.session.logout(&mut self.storage);
                self.skills_offset = 0;
            }
            KeyCode::Char('j') | KeyCode::Down => self.scroll_skills(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_skills(-1),
            KeyCode::Home => self.skills_offset = 0,
            KeyCode::End => self.skills_offset = self.max_skills_offset(),
            _ => {}
        }
    }

    fn max_skills_offset(&self) -> usize {
        match self.options.skills {
            SkillsPolicy::ShowAll { max_rows } => {
                self.data.skills.len().saturating_sub(usize::from(max_rows))
            }
            SkillsPolicy::Truncate { .. } => 0,
        }
    }

    fn scroll_skills(&mut self, delta: isize) {
        self.skills_offset = self
            .skills_offset
            .saturating_add_signed(delta)
            .min(self.max_skills_offset());
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let view = self.view();
        let hints = if self.session.is_unlocked() {
            DASHBOARD_HINTS
        } else {
            GATE_HINTS
        };
        let chrome = Chrome {
            palette: self.theme.palette(),
            scroll_offset: self.skills_offset,
            hints,
            clock: chrono::Local::now().format("%H:%M").to_string(),
        };
        widgets::draw(frame, &view, &chrome);
    }
}

/// Pass `result` through, running `undo` first when it failed.
fn undo_on_err<T>(result: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

/// Setup the terminal for TUI mode
///
/// Raw mode is switched back off if any later step fails.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let leave_raw = || {
        let _ = disable_raw_mode();
    };
    undo_on_err(stdout().execute(EnterAlternateScreen).map(|_| ()), leave_raw)?;
    undo_on_err(Terminal::new(CrosstermBackend::new(stdout())), || {
        let _ = stdout().execute(LeaveAlternateScreen);
        leave_raw();
    })
}

/// Restore the terminal to normal mode
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut HudApp) -> io::Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Run the interactive HUD until the user quits.
///
/// The terminal is restored even when drawing or reading input fails.
pub fn run_tui(storage: Storage, data: Snapshot, options: HudOptions) -> Result<()> {
    if !stdout().is_tty() {
        return Err(Error::Other(
            "the interactive HUD needs a terminal; use `hud render` instead".to_string(),
        ));
    }

    let mut app = HudApp::new(storage, data, options);
    tracing::info!(
        theme = %app.theme(),
        session = %app.session().state(),
        "starting terminal UI"
    );

    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut app);
    restore_terminal()?;

    tracing::info!("terminal UI closed");
    Ok(result?)
}
