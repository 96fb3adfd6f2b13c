//! Judge announcement messages.

use serde::Serialize;
use time::OffsetDateTime;

/// DTO for appending an announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementCreate {
    pub sender_kind: String,
    pub display_name: String,
    pub body: String,
}

/// A stored announcement with its server-assigned timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Announcement {
    pub sender_kind: String,
    pub display_name: String,
    pub body: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
