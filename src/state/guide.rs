//! Heart guide overlay state.
//!
//! Two cells coordinate the detail overlay: a visibility flag and the
//! record under inspection. They are deliberately independent; the overlay
//! renderer tolerates the flag being set while no record is stored.

use crate::models::HeartDetailInfo;

/// State container for the heart guide overlay.
///
/// Owned by the app; there is no global. Writers may set either cell on
/// its own, or use [`GuideState::open_detail`] / [`GuideState::close_detail`]
/// to keep the usual pairing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuideState {
    /// Whether the detail overlay is visible
    detail_open: bool,
    /// The heart record the overlay presents
    heart_detail: Option<HeartDetailInfo>,
}

impl GuideState {
    /// Create a fresh guide state: overlay hidden, no record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the detail overlay is visible.
    pub fn is_detail_open(&self) -> bool {
        self.detail_open
    }

    /// The record under inspection, if any.
    pub fn heart_detail(&self) -> Option<&HeartDetailInfo> {
        self.heart_detail.as_ref()
    }

    /// Show or hide the overlay without touching the record.
    pub fn set_detail_open(&mut self, open: bool) {
        self.detail_open = open;
    }

    /// Store or clear the record without touching visibility.
    pub fn set_heart_detail(&mut self, detail: Option<HeartDetailInfo>) {
        self.heart_detail = detail;
    }

    /// Store a record and show the overlay.
    pub fn open_detail(&mut self, detail: HeartDetailInfo) {
        self.heart_detail = Some(detail);
        self.detail_open = true;
    }

    /// Hide the overlay and clear the record.
    pub fn close_detail(&mut self) {
        self.detail_open = false;
        self.heart_detail = None;
    }
}
