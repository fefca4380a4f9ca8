//! Page state plus keyboard handling, independent of any terminal.

use choice_form::{ChoicePage, PrefillParams, PrefillSync};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use crate::RatatuiPageError;

/// The control that currently receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Storage,
    User,
    Submit,
    PrefillLink,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Storage, Focus::User, Focus::Submit, Focus::PrefillLink];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    Quit,
}

/// The page as seen by the terminal front end.
#[derive(Debug, Clone)]
pub struct PageApp {
    page: ChoicePage,
    prefill: PrefillSync,
    params: PrefillParams,
    focus: Focus,
}

impl PageApp {
    /// Mount the page with the given query params.
    pub fn new(params: PrefillParams) -> Self {
        let mut app = Self {
            page: ChoicePage::new(),
            prefill: PrefillSync::new(),
            params: PrefillParams::default(),
            focus: Focus::Storage,
        };
        app.navigate(params);
        app
    }

    pub fn page(&self) -> &ChoicePage {
        &self.page
    }

    /// The query params of the page currently shown.
    pub fn params(&self) -> &PrefillParams {
        &self.params
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Load the page with new query params.
    pub fn navigate(&mut self, params: PrefillParams) {
        info!(query = %params.to_query(), "navigating");
        self.prefill.sync(&mut self.page, &params);
        self.params = params;
    }

    /// Move focus to `target`, blurring the control being left.
    pub fn set_focus(&mut self, target: Focus) -> Result<(), RatatuiPageError> {
        if target == self.focus {
            return Ok(());
        }
        match self.focus {
            Focus::Storage => self.page.blur_storage()?,
            Focus::User => self.page.blur_user()?,
            Focus::Submit | Focus::PrefillLink => {}
        }
        if target == Focus::User {
            self.page.user_open();
        }
        debug!(from = ?self.focus, to = ?target, "focus moved");
        self.focus = target;
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<AppAction, RatatuiPageError> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(AppAction::Quit);
        }

        match key.code {
            KeyCode::BackTab => self.set_focus(self.focus.prev())?,
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.set_focus(self.focus.prev())?
            }
            KeyCode::Tab => self.set_focus(self.focus.next())?,
            KeyCode::Esc if self.focus == Focus::User && self.page.user().is_open() => {
                self.page.user_escape();
            }
            KeyCode::Esc => return Ok(AppAction::Quit),
            _ => match self.focus {
                Focus::Storage => self.storage_key(key)?,
                Focus::User => self.user_key(key)?,
                Focus::Submit => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.page.submit();
                    }
                }
                Focus::PrefillLink => {
                    if key.code == KeyCode::Enter {
                        let target = self.params.toggle_link().params();
                        self.navigate(target);
                    }
                }
            },
        }
        Ok(AppAction::Continue)
    }

    fn storage_key(&mut self, key: KeyEvent) -> Result<(), RatatuiPageError> {
        match key.code {
            KeyCode::Up => self.page.storage_highlight_prev(),
            KeyCode::Down => self.page.storage_highlight_next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.page.select_storage_highlighted()?,
            KeyCode::Char(c) if !has_command_modifier(&key) => {
                // 1-9 pick an option directly
                if let Some(n) = c.to_digit(10).filter(|n| *n > 0) {
                    self.page.select_storage(n as usize - 1)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn user_key(&mut self, key: KeyEvent) -> Result<(), RatatuiPageError> {
        match key.code {
            KeyCode::Char(c) if !has_command_modifier(&key) => self.page.user_input(c),
            KeyCode::Backspace => self.page.user_backspace(),
            KeyCode::Up => {
                self.page.user_open();
                self.page.user_highlight_prev();
            }
            KeyCode::Down => {
                self.page.user_open();
                self.page.user_highlight_next();
            }
            KeyCode::Enter if self.page.user().is_open() => self.page.choose_user_highlighted()?,
            KeyCode::Enter => self.page.user_open(),
            _ => {}
        }
        Ok(())
    }
}

/// Ctrl/Alt chords are commands, never text.
fn has_command_modifier(key: &KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_both_ways() {
        assert_eq!(Focus::Storage.next(), Focus::User);
        assert_eq!(Focus::PrefillLink.next(), Focus::Storage);
        assert_eq!(Focus::Storage.prev(), Focus::PrefillLink);
    }
}
