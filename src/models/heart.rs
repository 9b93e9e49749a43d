//! Heart kinds and the guide records shown in the detail overlay.
//!
//! The backend names hearts by small integer ids. Id 0 means "no heart";
//! ids 1 through 5 are the default hearts every user can send. Special
//! hearts live above 5 and are out of scope for this client.

use serde::{Deserialize, Serialize};

/// One of the five default hearts, keyed by backend id.
///
/// The discriminants match the wire ids so `icon as i64` round-trips
/// through [`HeartIcon::from_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeartIcon {
    Yellow = 1,
    Blue = 2,
    Green = 3,
    Pink = 4,
    Red = 5,
}

impl HeartIcon {
    /// All default hearts in id order.
    pub const ALL: [HeartIcon; 5] = [
        HeartIcon::Yellow,
        HeartIcon::Blue,
        HeartIcon::Green,
        HeartIcon::Pink,
        HeartIcon::Red,
    ];

    /// Resolve a backend heart id to an icon.
    ///
    /// Returns `None` for id 0 (no heart) and for any id outside the
    /// default range, so unexpected wire values never panic the renderer.
    pub fn from_id(id: i64) -> Option<HeartIcon> {
        match id {
            1 => Some(HeartIcon::Yellow),
            2 => Some(HeartIcon::Blue),
            3 => Some(HeartIcon::Green),
            4 => Some(HeartIcon::Pink),
            5 => Some(HeartIcon::Red),
            _ => None,
        }
    }

    /// The backend id for this heart.
    pub fn id(&self) -> i64 {
        *self as i64
    }

    /// Display name shown in the board and the guide overlay.
    pub fn label(&self) -> &'static str {
        match self {
            HeartIcon::Yellow => "Yellow Heart",
            HeartIcon::Blue => "Blue Heart",
            HeartIcon::Green => "Green Heart",
            HeartIcon::Pink => "Pink Heart",
            HeartIcon::Red => "Red Heart",
        }
    }

    /// Whether this heart is locked for signed-out viewers.
    ///
    /// Pink and red are reserved for signed-in users on the backend.
    pub fn locked_without_login(&self) -> bool {
        matches!(self, HeartIcon::Pink | HeartIcon::Red)
    }
}

/// Guide record for a heart, as presented by the detail overlay.
///
/// The overlay does not interpret the record beyond display; whatever is
/// stored in the guide state is rendered as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartDetailInfo {
    /// Backend heart id
    pub heart_id: i64,
    /// Display name
    pub name: String,
    /// One-line guide description
    pub short_description: String,
    /// Heart category ("default" for the base five)
    pub kind: String,
    /// Whether the viewer may send this heart
    pub is_locked: bool,
}

impl HeartDetailInfo {
    /// Built-in guide entry for a default heart.
    ///
    /// `signed_in` controls the lock flag on the pink and red hearts.
    pub fn builtin(icon: HeartIcon, signed_in: bool) -> Self {
        let short_description = match icon {
            HeartIcon::Yellow => "A bright heart for everyday cheer.",
            HeartIcon::Blue => "A calm heart for quiet support.",
            HeartIcon::Green => "A fresh heart for new beginnings.",
            HeartIcon::Pink => "A tender heart for someone special.",
            HeartIcon::Red => "A bold heart that says it all.",
        };

        Self {
            heart_id: icon.id(),
            name: icon.label().to_string(),
            short_description: short_description.to_string(),
            kind: "default".to_string(),
            is_locked: icon.locked_without_login() && !signed_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_resolves_default_hearts() {
        assert_eq!(HeartIcon::from_id(1), Some(HeartIcon::Yellow));
        assert_eq!(HeartIcon::from_id(2), Some(HeartIcon::Blue));
        assert_eq!(HeartIcon::from_id(3), Some(HeartIcon::Green));
        assert_eq!(HeartIcon::from_id(4), Some(HeartIcon::Pink));
        assert_eq!(HeartIcon::from_id(5), Some(HeartIcon::Red));
    }

    #[test]
    fn test_from_id_zero_is_absent() {
        assert_eq!(HeartIcon::from_id(0), None);
    }

    #[test]
    fn test_from_id_out_of_range() {
        assert_eq!(HeartIcon::from_id(-1), None);
        assert_eq!(HeartIcon::from_id(6), None);
        assert_eq!(HeartIcon::from_id(100), None);
    }

    #[test]
    fn test_from_id_is_stable() {
        for icon in HeartIcon::ALL {
            assert_eq!(HeartIcon::from_id(icon.id()), Some(icon));
            assert_eq!(HeartIcon::from_id(icon.id()), HeartIcon::from_id(icon.id()));
        }
    }

    #[test]
    fn test_ids_are_distinct() {
        let mut ids: Vec<i64> = HeartIcon::ALL.iter().map(|h| h.id()).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_labels_are_distinct() {
        let labels: Vec<&str> = HeartIcon::ALL.iter().map(|h| h.label()).collect();
        let mut deduped = labels.clone();
        deduped.dedup();
        assert_eq!(labels, deduped);
    }

    #[test]
    fn test_lock_applies_to_pink_and_red_only() {
        assert!(!HeartIcon::Yellow.locked_without_login());
        assert!(!HeartIcon::Blue.locked_without_login());
        assert!(!HeartIcon::Green.locked_without_login());
        assert!(HeartIcon::Pink.locked_without_login());
        assert!(HeartIcon::Red.locked_without_login());
    }

    #[test]
    fn test_builtin_guide_entry() {
        let info = HeartDetailInfo::builtin(HeartIcon::Yellow, false);
        assert_eq!(info.heart_id, 1);
        assert_eq!(info.name, "Yellow Heart");
        assert_eq!(info.kind, "default");
        assert!(!info.is_locked);
    }

    #[test]
    fn test_builtin_lock_follows_login_state() {
        assert!(HeartDetailInfo::builtin(HeartIcon::Red, false).is_locked);
        assert!(!HeartDetailInfo::builtin(HeartIcon::Red, true).is_locked);
        assert!(!HeartDetailInfo::builtin(HeartIcon::Green, false).is_locked);
    }

    #[test]
    fn test_detail_info_camel_case_wire_format() {
        let info = HeartDetailInfo::builtin(HeartIcon::Blue, true);
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["heartId"], 2);
        assert_eq!(json["shortDescription"], "A calm heart for quiet support.");
        assert_eq!(json["isLocked"], false);
    }
}
