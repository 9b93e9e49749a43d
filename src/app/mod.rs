//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`AppMessage`] - Messages for async communication

mod handlers;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::Screen;

use crate::api::{MessageApiClient, UserApiClient};
use crate::models::{HeartDetailInfo, HeartIcon, MessageDetail, Profile, ReceivedMessage};
use crate::state::GuideState;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::warn;

/// Main application state
pub struct App {
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Current screen being displayed
    pub screen: Screen,
    /// Heart guide overlay state
    pub guide: GuideState,
    /// Board owner profile, once loaded
    pub profile: Option<Profile>,
    /// Received messages for the signed-in user (empty in guest view)
    pub messages: Vec<ReceivedMessage>,
    /// Selected index in the message list
    pub selected: usize,
    /// Currently opened message, if any
    pub open_message: Option<MessageDetail>,
    /// One-line notice shown in the footer
    pub notice: Option<String>,
    /// Last fetch error for display
    pub last_error: Option<String>,
    /// True while a board refresh is in flight
    pub loading: bool,
    /// Set once the user has asked to enter heart test mode
    pub test_requested: bool,
    /// User id of the board being viewed
    pub board_user_id: String,
    /// True when viewing our own board with a valid token
    pub signed_in: bool,
    /// Receiver for async messages (fetch results)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Message API client (shared across async tasks)
    pub messages_api: Arc<MessageApiClient>,
    /// User API client (shared across async tasks)
    pub users_api: Arc<UserApiClient>,
    /// Tick counter for animations
    pub tick_count: u64,
    /// Dirty flag: when true, the UI needs to be redrawn.
    /// Set to true on state mutations, cleared after each draw.
    pub needs_redraw: bool,
}

impl App {
    /// Create a new App instance viewing the given user's board.
    ///
    /// `signed_in` controls whether the inbox is fetched and which hearts
    /// the guide overlay marks as locked.
    pub fn new(
        board_user_id: String,
        signed_in: bool,
        messages_api: Arc<MessageApiClient>,
        users_api: Arc<UserApiClient>,
    ) -> Self {
        // Create the message channel for async communication
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            should_quit: false,
            screen: Screen::default(),
            guide: GuideState::new(),
            profile: None,
            messages: Vec::new(),
            selected: 0,
            open_message: None,
            notice: None,
            last_error: None,
            loading: false,
            test_requested: false,
            board_user_id,
            signed_in,
            message_rx: Some(message_rx),
            message_tx,
            messages_api,
            users_api,
            tick_count: 0,
            needs_redraw: true, // Start with redraw needed
        }
    }

    /// Mark the app to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Clear the redraw flag after a frame has been drawn
    pub fn clear_dirty(&mut self) {
        self.needs_redraw = false;
    }

    /// Advance the animation tick counter
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    /// Kick off the initial board load
    pub fn initialize(&mut self) {
        self.refresh();
    }

    /// Refresh the board: profile always, inbox only when signed in.
    pub fn refresh(&mut self) {
        self.loading = true;
        self.last_error = None;
        self.mark_dirty();
        self.spawn_profile_fetch();
        if self.signed_in {
            self.spawn_inbox_fetch();
        }
    }

    /// Move the selection down one row
    pub fn select_next(&mut self) {
        if !self.messages.is_empty() && self.selected + 1 < self.messages.len() {
            self.selected += 1;
            self.mark_dirty();
        }
    }

    /// Move the selection up one row
    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.mark_dirty();
        }
    }

    /// The message currently under the cursor, if any
    pub fn selected_message(&self) -> Option<&ReceivedMessage> {
        self.messages.get(self.selected)
    }

    /// Open the selected message by fetching its full detail
    pub fn open_selected_message(&mut self) {
        let Some(message) = self.selected_message() else {
            return;
        };
        let message_id = message.message_id;
        let api = Arc::clone(&self.messages_api);
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            match api.fetch_message_detail(message_id).await {
                Ok(detail) => {
                    let _ = message_tx.send(AppMessage::MessageDetailLoaded(detail));
                }
                Err(e) => {
                    warn!(message_id, error = %e, "failed to load message detail");
                    let _ = message_tx.send(AppMessage::MessageDetailLoadError(e.to_string()));
                }
            }
        });
    }

    /// Close the open message and return to the list
    pub fn close_message(&mut self) {
        if self.open_message.take().is_some() {
            self.mark_dirty();
        }
    }

    /// Toggle the heart guide overlay for the heart under the cursor.
    ///
    /// An unknown heart id still opens the overlay, with no detail record,
    /// so the placeholder card is shown instead of stale content.
    pub fn toggle_heart_guide(&mut self) {
        if self.guide.is_detail_open() {
            self.guide.close_detail();
        } else {
            let heart_id = self
                .open_message
                .as_ref()
                .map(|m| m.heart_id)
                .or_else(|| self.selected_message().map(|m| m.heart_id));
            let Some(heart_id) = heart_id else {
                return;
            };
            match HeartIcon::from_id(heart_id) {
                Some(icon) => {
                    let info = HeartDetailInfo::builtin(icon, self.signed_in);
                    self.guide.open_detail(info);
                }
                None => {
                    self.guide.set_heart_detail(None);
                    self.guide.set_detail_open(true);
                }
            }
        }
        self.mark_dirty();
    }

    /// Show the heart test intro screen
    pub fn show_test_intro(&mut self) {
        self.screen = Screen::TestIntro;
        self.mark_dirty();
    }

    /// Enter heart test mode.
    ///
    /// The test itself runs in the Hearting web app, so the TUI records the
    /// request and returns to the board with a notice.
    pub fn on_test_mode(&mut self) {
        self.test_requested = true;
        self.screen = Screen::Board;
        self.notice = Some("Heart test mode requested. Take the test at hearting.site".to_string());
        self.mark_dirty();
    }

    /// Leave the intro screen without starting the test
    pub fn leave_test_intro(&mut self) {
        self.screen = Screen::Board;
        self.mark_dirty();
    }

    fn spawn_profile_fetch(&self) {
        let api = Arc::clone(&self.users_api);
        let message_tx = self.message_tx.clone();
        let user_id = self.board_user_id.clone();

        tokio::spawn(async move {
            match api.fetch_profile(&user_id).await {
                Ok(profile) => {
                    let _ = message_tx.send(AppMessage::ProfileLoaded(profile));
                }
                Err(e) => {
                    warn!(user_id = %user_id, error = %e, "failed to load board profile");
                    let _ = message_tx.send(AppMessage::ProfileLoadError(e.to_string()));
                }
            }
        });
    }

    fn spawn_inbox_fetch(&self) {
        let api = Arc::clone(&self.messages_api);
        let message_tx = self.message_tx.clone();
        let user_id = self.board_user_id.clone();

        tokio::spawn(async move {
            match api.fetch_received(&user_id).await {
                Ok(messages) => {
                    let _ = message_tx.send(AppMessage::InboxLoaded(messages));
                }
                Err(e) => {
                    warn!(user_id = %user_id, error = %e, "failed to load received messages");
                    let _ = message_tx.send(AppMessage::InboxLoadError(e.to_string()));
                }
            }
        });
    }
}
