//! Notification privacy classification
//!
//! This module provides the privacy level read from the persisted
//! notification-privacy preference. The level determines which fields a
//! notification may surface:
//! - ALL: sender identity and message content
//! - CONTACT: sender identity only
//! - NONE: neither

use serde::{Deserialize, Serialize};

/// Privacy level for message notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationPrivacy {
    /// Show contact name and message content
    ContactAndMessage,
    /// Show contact name only
    ContactOnly,
    /// Show nothing beyond "new messages"
    ShowNothing,
}

impl NotificationPrivacy {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationPrivacy::ContactAndMessage => "all",
            NotificationPrivacy::ContactOnly => "contact",
            NotificationPrivacy::ShowNothing => "none",
        }
    }

    /// Parse the persisted preference value.
    ///
    /// Unknown values fall back to `ContactAndMessage`, the preference's
    /// default.
    pub fn from_preference(value: &str) -> Self {
        match value {
            "none" => NotificationPrivacy::ShowNothing,
            "contact" => NotificationPrivacy::ContactOnly,
            _ => NotificationPrivacy::ContactAndMessage,
        }
    }

    /// Whether sender identity (person, shortcut, bubble) may be shown
    pub fn is_display_contact(&self) -> bool {
        matches!(
            self,
            NotificationPrivacy::ContactAndMessage | NotificationPrivacy::ContactOnly
        )
    }

    /// Whether message content (body, reply actions) may be shown
    pub fn is_display_message(&self) -> bool {
        matches!(self, NotificationPrivacy::ContactAndMessage)
    }

    /// Whether nothing at all may be shown
    pub fn is_display_nothing(&self) -> bool {
        matches!(self, NotificationPrivacy::ShowNothing)
    }
}

impl std::fmt::Display for NotificationPrivacy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
