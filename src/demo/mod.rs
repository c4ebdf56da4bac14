//! Interactive demo hosting a single typeahead field.
//!
//! Owns the terminal lifecycle and the synchronous poll/draw/dispatch
//! loop; everything interesting happens inside the component.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers, poll,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
};
use tracing::info;

mod state;


pub use state::{Command, DemoState};

use crate::components::{
    Component,
    typeahead::{Typeahead, TypeaheadConfig},
};
use crate::constants::{
    DOUBLE_CTRL_C_TIMEOUT_SECS, EVENT_POLL_INTERVAL_MS, STATUS_BAR_HEIGHT, STATUS_CLEAR_DELAY_MS,
};
use crate::data::TypeaheadOption;
use crate::events::Message;

pub struct DemoApp {
    field: Typeahead,
    state: DemoState,
    status_timer: Option<Instant>,
    last_ctrl_c_press: Option<Instant>,
}

impl DemoApp {
    pub fn new(data: Vec<TypeaheadOption>, placeholder: String, label: String) -> Self {
        let mut field = Typeahead::new(TypeaheadConfig {
            id: "typeahead-demo".to_string(),
            name: "typeahead".to_string(),
            data,
            placeholder,
            label,
        });
        field.on_select(|option| {
            info!(value = %option.value, label = %option.label, "option selected");
        });

        Self {
            field,
            state: DemoState::new(),
            status_timer: None,
            last_ctrl_c_press: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;
        let result = self.run_app(&mut terminal);
        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to restore cursor")?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            // Check for scheduled status clear
            if let Some(timer) = self.status_timer {
                if timer.elapsed() >= Duration::from_millis(STATUS_CLEAR_DELAY_MS) {
                    self.status_timer = None;
                    self.state.status = None;
                }
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_input(key) {
                            break;
                        }
                    }
                    Event::Mouse(mouse) => {
                        if let Some(msg) = self.field.handle_mouse(mouse) {
                            self.handle_message(msg);
                        }
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),                    // typeahead field
                Constraint::Length(STATUS_BAR_HEIGHT), // status bar
            ])
            .split(f.area());

        self.field.render(f, chunks[0]);

        let status_text = match &self.state.status {
            Some(status) => status.clone(),
            None => {
                "Tab: Focus/blur | ↑/↓: Navigate | Enter: Select | Esc: Dismiss | Ctrl+C twice: Quit"
                    .to_string()
            }
        };
        let status_bar = Paragraph::new(status_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(ratatui::layout::Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(status_bar, chunks[1]);
    }

    /// Returns true when the app should quit.
    fn handle_input(&mut self, key: KeyEvent) -> bool {
        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return true;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.state.status = Some("Press Ctrl+C again to exit".to_string());
            self.status_timer = Some(Instant::now());
            return false;
        }

        let message = match key.code {
            KeyCode::Tab => {
                if self.field.is_open() {
                    self.field.blur()
                } else {
                    self.field.focus()
                }
            }
            _ => self.field.handle_key(key),
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }
        false
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::ShowStatus(status) => {
                self.state.status = Some(status);
                self.status_timer = Some(Instant::now());
            }
            Command::ClearStatus => {
                self.state.status = None;
                self.status_timer = None;
            }
        }
    }
}
