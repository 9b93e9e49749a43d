//! Application state management
//!
//! State containers owned by the app:
//! - GuideState: heart guide overlay visibility and record

pub mod guide;

pub use guide::GuideState;
