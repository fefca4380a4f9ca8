//! Terminal setup and the event loop.

use choice_form::{FieldValues, FormError, PrefillParams, panels};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::CrosstermBackend, style::Color};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::info;

use crate::{AppAction, PageApp, draw_page};

/// Error type for the Ratatui page backend.
#[derive(Debug, Error)]
pub enum RatatuiPageError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The page addressed a field that does not exist.
    #[error("Form error: {0}")]
    Form(#[from] FormError),

    /// A display panel could not be rendered as JSON.
    #[error("Panel error: {0}")]
    Panel(#[from] serde_json::Error),
}

/// Color theme for the TUI page.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub text: Color,
    pub muted: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
    pub selected_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::LightRed,
            secondary: Color::Cyan,
            text: Color::White,
            muted: Color::Gray,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            border: Color::DarkGray,
            selected_bg: Color::DarkGray,
        }
    }
}

/// Runs the storage/user page in the terminal.
#[derive(Debug, Clone)]
pub struct RatatuiPageBackend {
    /// Title shown at the top of the page.
    title: String,
    /// Color theme for the UI.
    theme: Theme,
}

impl Default for RatatuiPageBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiPageBackend {
    /// Create a new backend with default settings.
    pub fn new() -> Self {
        Self {
            title: "Scalar-value selection widgets".to_string(),
            theme: Theme::default(),
        }
    }

    /// Set the title shown at the top of the page.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Get the page title.
    pub fn title(&self) -> &str {
        &self.title
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, RatatuiPageError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RatatuiPageError> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Show the page until the user quits.
    ///
    /// Returns the last submitted values (empty if nothing was submitted
    /// since the last prefill).
    pub fn run(&self, params: PrefillParams) -> Result<FieldValues, RatatuiPageError> {
        let mut terminal = self.setup_terminal()?;
        let mut app = PageApp::new(params);

        let result = self.event_loop(&mut terminal, &mut app);
        self.restore_terminal(&mut terminal)?;
        result?;

        info!(submit_count = app.page().meta().submit_count, "page closed");
        Ok(app.page().submission().clone())
    }

    fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        app: &mut PageApp,
    ) -> Result<(), RatatuiPageError> {
        loop {
            let panels = panels::panels(app.page())?;
            terminal.draw(|frame| draw_page(frame, app, &panels, &self.title, &self.theme))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.handle_key(key)? == AppAction::Quit {
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_creation() {
        let backend = RatatuiPageBackend::new().with_title("Test");
        assert_eq!(backend.title(), "Test");
        let _with_theme = RatatuiPageBackend::new().with_theme(Theme::default());
    }

    #[test]
    fn error_types() {
        let err = RatatuiPageError::from(FormError::UnknownField("plan".into()));
        assert_eq!(err.to_string(), "Form error: Unknown field: plan");

        let err = RatatuiPageError::from(io::Error::other("boom"));
        assert_eq!(err.to_string(), "I/O error: boom");
    }

    #[test]
    fn theme_default() {
        let theme = Theme::default();
        assert_eq!(theme.error, Color::Red);
        assert_eq!(theme.secondary, Color::Cyan);
    }
}
