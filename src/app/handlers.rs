//! Message and key handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, AppMessage, Screen};

impl App {
    /// Handle an incoming async message
    /// All message handlers mark the app as dirty since they update visible state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        // All messages result in state changes that require a redraw
        self.mark_dirty();
        match msg {
            AppMessage::ProfileLoaded(profile) => {
                self.profile = Some(profile);
                self.loading = false;
            }
            AppMessage::ProfileLoadError(error) => {
                self.loading = false;
                self.last_error = Some(error);
            }
            AppMessage::InboxLoaded(messages) => {
                self.messages = messages;
                self.loading = false;
                // Clamp the cursor in case the list shrank
                if self.selected >= self.messages.len() {
                    self.selected = self.messages.len().saturating_sub(1);
                }
            }
            AppMessage::InboxLoadError(error) => {
                self.loading = false;
                self.last_error = Some(error);
            }
            AppMessage::MessageDetailLoaded(detail) => {
                self.open_message = Some(detail);
            }
            AppMessage::MessageDetailLoadError(error) => {
                self.last_error = Some(error);
            }
        }
    }

    /// Handle a key press for the current screen
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits, regardless of screen
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match self.screen {
            Screen::Board => self.handle_board_key(key),
            Screen::TestIntro => self.handle_test_intro_key(key),
        }
    }

    fn handle_board_key(&mut self, key: KeyEvent) {
        // The guide overlay captures keys while open
        if self.guide.is_detail_open() {
            match key.code {
                KeyCode::Esc | KeyCode::Char('i') | KeyCode::Char('q') => {
                    self.guide.close_detail();
                    self.mark_dirty();
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Char('t') => self.show_test_intro(),
            KeyCode::Char('i') => self.toggle_heart_guide(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Enter => {
                if self.open_message.is_none() {
                    self.open_selected_message();
                }
            }
            KeyCode::Esc => {
                if self.open_message.is_some() {
                    self.close_message();
                } else if self.notice.take().is_some() || self.last_error.take().is_some() {
                    self.mark_dirty();
                }
            }
            _ => {}
        }
    }

    fn handle_test_intro_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.on_test_mode(),
            KeyCode::Esc => self.leave_test_intro(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }
}
