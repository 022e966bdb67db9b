//! Request payloads for the SDK API.

use serde::Serialize;
use serde_json::Value;

/// Login or register request payload.
#[derive(Clone, Debug, Default, Serialize)]
pub struct LoginOrRegisterReq {
    /// Unique user identifier.
    pub user_id: String,
    /// User password.
    pub password: String,
    /// Display name.
    pub username: String,
    /// Avatar image URL.
    pub avatar_url: String,
}

/// Reset user token request payload.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ResetUserTokenReq {
    /// The user whose token is reset.
    pub user_id: String,
}

/// Create room request payload.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CreateRoomReq {
    pub room_name: String,
    pub creator: String,
    pub participants: Vec<String>,
    pub room_avatar_url: String,
    pub room_options: String,
}

/// Get or create room with target request payload.
#[derive(Clone, Debug, Default, Serialize)]
pub struct GetOrCreateRoomWithTargetReq {
    pub user_ids: Vec<String>,
    pub room_options: String,
}

/// Update room request payload.
#[derive(Clone, Debug, Default, Serialize)]
pub struct UpdateRoomReq {
    pub room_id: String,
    pub room_name: String,
    pub room_options: String,
}

/// Add room participants request payload.
#[derive(Clone, Debug, Default, Serialize)]
pub struct AddRoomParticipantsReq {
    pub room_id: String,
    pub user_ids: Vec<String>,
}

/// Remove room participants request payload.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RemoveRoomParticipantsReq {
    pub room_id: String,
    pub user_ids: Vec<String>,
}

/// Post comment request payload.
#[derive(Clone, Debug, Default, Serialize)]
pub struct PostCommentReq {
    pub user_id: String,
    pub room_id: String,
    pub message: String,
    /// Comment type, e.g. `text`.
    #[serde(rename = "type")]
    pub kind: String,
    pub extras: Value,
    pub payload: Value,
}

/// Get room participants request parameters.
#[derive(Clone, Debug, Default)]
pub struct GetRoomParticipantsReq {
    pub room_id: String,
    /// Page number; non-positive values default to 1.
    pub page: i32,
    /// Page size; non-positive values default to 20.
    pub limit: i32,
}

/// Get user rooms request parameters.
#[derive(Clone, Debug, Default)]
pub struct GetUserRoomsReq {
    pub user_id: String,
    /// Page number; non-positive values default to 1.
    pub page: i32,
    /// Page size; non-positive values default to 20.
    pub limit: i32,
}

/// Load comments request parameters.
#[derive(Clone, Debug, Default)]
pub struct LoadCommentsReq {
    pub room_id: String,
    /// Page number; non-positive values default to 1.
    pub page: i32,
    /// Page size; non-positive values default to 20.
    pub limit: i32,
}

/// Post system event message request payload.
///
/// The system event type is pinned to `"custom"` on the wire.
#[derive(Clone, Debug, Default)]
pub struct PostSystemEventMessageReq {
    pub room_id: String,
    pub message: String,
    pub payload: Value,
    pub extras: Value,
}

/// Get unread count request parameters.
#[derive(Clone, Debug, Default)]
pub struct GetUnreadCountReq {
    pub user_id: String,
    /// Rooms to count; sent as repeated `room_ids[]` parameters.
    pub room_ids: Vec<String>,
}

/// Get users request parameters.
#[derive(Clone, Debug, Default)]
pub struct GetUsersReq {
    /// Page number; non-positive values default to 1.
    pub page: i32,
    /// Page size; non-positive values default to 20.
    pub limit: i32,
    /// Include deactivated users.
    pub show_all: bool,
    /// Sort expression; empty defaults to `created_at desc nulls last`.
    pub order_query: String,
}

/// Load comments with range request parameters.
#[derive(Clone, Debug, Default)]
pub struct LoadCommentsWithRangeReq {
    pub room_id: String,
    pub first_comment_id: String,
    pub last_comment_id: String,
}

/// Get or create channel request payload.
#[derive(Clone, Debug, Default, Serialize)]
pub struct GetOrCreateChannelReq {
    pub unique_id: String,
    pub room_name: String,
    pub participants: Vec<String>,
    pub room_avatar_url: String,
    pub room_options: String,
}

/// Get average reply time user request parameters.
#[derive(Clone, Debug, Default)]
pub struct GetAverageReplyTimeUserReq {
    pub user_id: String,
    /// Start of the window, `YYYY-MM-DD hh:mm:ss`.
    pub start_time: String,
    /// End of the window, `YYYY-MM-DD hh:mm:ss`.
    pub end_time: String,
}

/// Get webhook logs request parameters.
#[derive(Clone, Debug, Default)]
pub struct GetWebhookLogsReq {
    /// Page number; non-positive values default to 1.
    pub page: i32,
    /// Page size; non-positive values default to 20.
    pub limit: i32,
    /// Log type filter: `all`, `mobile`, or `rest`; empty defaults to `all`.
    pub kind: String,
}

/// Deactivate user request payload.
#[derive(Clone, Debug, Default, Serialize)]
pub struct DeactivateUserReq {
    pub user_ids: Vec<String>,
}

/// Reactivate user request payload.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ReactivateUserReq {
    pub user_ids: Vec<String>,
}
