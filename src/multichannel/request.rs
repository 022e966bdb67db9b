//! Request payloads for the Multichannel API.

use serde::{Deserialize, Serialize};

/// Create room tag request payload.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CreateRoomTagReq {
    /// The room to tag.
    pub room_id: String,
    /// The tag to attach.
    pub tag: String,
}

/// A single key/value entry of a room's additional info.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProperty {
    /// Property name.
    pub key: String,
    /// Property value.
    pub value: String,
}

/// Create additional info room request payload.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CreateAdditionalInfoRoomReq {
    /// The properties to store on the room.
    pub user_properties: Vec<UserProperty>,
}

/// Send message text by bot request payload.
///
/// The message type is pinned to `"text"` on the wire.
#[derive(Clone, Debug, Default)]
pub struct SendMessageTextByBotReq {
    /// Email of the sending bot user.
    pub sender_email: String,
    /// The message text.
    pub message: String,
    /// The room to post into.
    pub room_id: String,
}

/// Set toggle bot in room request payload.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct SetToggleBotInRoomReq {
    /// Whether the bot is active in the room.
    pub is_active: bool,
}

/// Login admin request payload, used to bootstrap a client from credentials.
#[derive(Clone, Debug, Default, Serialize)]
pub struct LoginAdminReq {
    /// Admin email.
    pub email: String,
    /// Admin password.
    pub password: String,
}

/// Get all agents request parameters.
#[derive(Clone, Debug, Default)]
pub struct GetAllAgentsReq {
    /// Page number; non-positive values default to 1.
    pub page: i32,
    /// Page size; non-positive values default to 20.
    pub limit: i32,
    /// Search term.
    pub search: String,
    /// Search scope: `division`, `name`, or `email`.
    pub scope: String,
}

/// Assign agent request payload.
#[derive(Clone, Debug, Default, Serialize)]
pub struct AssignAgentReq {
    /// The room to assign into.
    pub room_id: String,
    /// The agent to assign.
    pub agent_id: String,
    /// Whether to replace the most recently assigned agent.
    pub replace_latest_agent: bool,
    /// Maximum agents in the room; non-positive values default to 5.
    pub max_agent: i32,
}

/// Get agents by division request parameters.
#[derive(Clone, Debug, Default)]
pub struct GetAgentsByDivisionReq {
    /// Page number; non-positive values default to 1.
    pub page: i32,
    /// Page size; non-positive values default to 20.
    pub limit: i32,
    /// Divisions to filter by; sent as repeated `division_ids[]` parameters.
    pub division_ids: Vec<String>,
    /// Online availability filter.
    pub is_available: bool,
    /// Sort order by customer count: `asc` or `desc`.
    pub sort: String,
}

/// Get all division request parameters.
#[derive(Clone, Copy, Debug, Default)]
pub struct GetAllDivisionReq {
    /// Page number; non-positive values default to 1.
    pub page: i32,
    /// Page size; non-positive values default to 20.
    pub limit: i32,
}

/// Mark as resolved request payload.
#[derive(Clone, Debug, Default, Serialize)]
pub struct MarkAsResolvedReq {
    /// The room to resolve.
    pub room_id: String,
    /// Resolution notes.
    pub notes: String,
    /// The last comment in the conversation.
    pub last_comment_id: String,
}
