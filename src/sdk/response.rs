//! Response payloads for the SDK API.
//!
//! Every struct tolerates partially-populated responses: missing fields
//! decode to their default values. Free-form fields are kept as
//! [`serde_json::Value`].

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// A messaging user.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SdkUser {
    pub active: bool,
    pub avatar_url: String,
    pub extras: Value,
    pub user_id: String,
    pub username: String,
}

/// A chat room summary.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Room {
    pub room_avatar_url: String,
    pub room_channel_id: String,
    pub room_id: String,
    pub room_name: String,
    pub room_options: String,
    pub room_type: String,
}

/// A posted comment.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub extras: Value,
    pub id: i64,
    pub message: String,
    pub payload: Value,
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub kind: String,
    pub user: SdkUser,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserResult {
    pub user: SdkUser,
}

/// Login or register response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginOrRegisterResponse {
    pub results: UserResult,
    pub status: i64,
}

/// Get user profile response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GetUserProfileResponse {
    pub results: UserResult,
    pub status: i64,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct TokenResult {
    pub token: String,
}

/// Get or reset user token response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GetUserTokenResponse {
    pub results: TokenResult,
    pub status: i64,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RoomResult {
    pub room: Room,
}

/// Create room response payload, also returned when fetching or creating a
/// room by target.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateRoomResponse {
    pub results: RoomResult,
    pub status: i64,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RoomsResult {
    pub rooms: Vec<Room>,
}

/// Get rooms info response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GetRoomsInfoResponse {
    pub results: RoomsResult,
    pub status: i64,
}

/// A room together with whether the call changed it.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChangedRoomResult {
    pub changed: bool,
    pub room: Room,
}

/// Update room response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateRoomResponse {
    pub results: ChangedRoomResult,
    pub status: i64,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ParticipantsResult {
    pub participants: Vec<SdkUser>,
}

/// Get room participants response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GetRoomParticipantsResponse {
    pub results: ParticipantsResult,
    pub status: i64,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ParticipantsAddedResult {
    pub participants_added: Vec<SdkUser>,
}

/// Add room participants response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddRoomParticipantsResponse {
    pub results: ParticipantsAddedResult,
    pub status: i64,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ParticipantsRemovedResult {
    pub participants_removed: Vec<SdkUser>,
}

/// Remove room participants response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RemoveRoomParticipantsResponse {
    pub results: ParticipantsRemovedResult,
    pub status: i64,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserRoomsMeta {
    pub current_page: i64,
    pub total_room: i64,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserRoomsResult {
    pub meta: UserRoomsMeta,
    pub rooms: Vec<Room>,
}

/// Get user rooms response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GetUserRoomsResponse {
    pub results: UserRoomsResult,
    pub status: i64,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CommentResult {
    pub comment: Comment,
}

/// Post comment response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PostCommentResponse {
    pub results: CommentResult,
    pub status: i64,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CommentsResult {
    pub comments: Vec<Comment>,
}

/// Load comments response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoadCommentsResponse {
    pub results: CommentsResult,
    pub status: i64,
}

/// Post system event message response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PostSystemEventMessageResponse {
    pub results: CommentResult,
    pub status: i64,
}

/// Unread count of a single room.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct UnreadCount {
    pub room_id: String,
    pub unread_count: i64,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct UnreadCountsResult {
    pub unread_counts: Vec<UnreadCount>,
}

/// Get unread count response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GetUnreadCountResponse {
    pub results: UnreadCountsResult,
    pub status: i64,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct UsersMeta {
    pub total_data: i64,
    pub total_page: i64,
}

/// A user account as returned by the user listing.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserAccount {
    pub active: bool,
    pub avatar_url: String,
    pub created_at: Option<DateTime<Utc>>,
    pub email: String,
    pub extras: Value,
    pub id: i64,
    pub name: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub username: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct UsersResult {
    pub meta: UsersMeta,
    pub users: Vec<UserAccount>,
}

/// Get users response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GetUsersResponse {
    pub results: UsersResult,
    pub status: i64,
}

/// A comment as returned by the ranged listing, whose timestamps are plain
/// strings.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RangedComment {
    pub extras: Value,
    pub id: i64,
    pub message: String,
    pub payload: Value,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub unique_id: String,
    pub user: SdkUser,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RangedCommentsResult {
    pub comments: Vec<RangedComment>,
}

/// Load comments with range response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoadCommentsWithRangeResponse {
    pub results: RangedCommentsResult,
}

/// Get or create channel response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GetOrCreateChannelResponse {
    pub results: ChangedRoomResult,
    pub status: i64,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReplyTimeDuration {
    pub average: i64,
    pub longest: i64,
    pub shortest: i64,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReplyTimeData {
    pub duration: ReplyTimeDuration,
    pub user_id: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReplyTimeResult {
    pub data: ReplyTimeData,
    pub end_time: String,
    pub start_time: String,
}

/// Get average reply time user response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GetAverageReplyTimeUserResponse {
    pub results: ReplyTimeResult,
    pub status: i64,
}

/// A webhook delivery attempt.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct WebhookLog {
    pub attempted_at: Option<DateTime<Utc>>,
    pub endpoint: String,
    pub error_message: String,
    pub id: i64,
    pub is_success: bool,
    pub request_body: String,
    pub response_body: String,
    pub response_code: i64,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct WebhookLogsResult {
    pub webhook_logs: Vec<WebhookLog>,
}

/// Get webhook logs response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GetWebhookLogsResponse {
    pub results: WebhookLogsResult,
    pub status: i64,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct MessageResult {
    pub message: String,
}

/// Deactivate user response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeactivateUserResponse {
    pub results: MessageResult,
    pub status: i64,
}

/// Reactivate user response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReactivateUserResponse {
    pub results: MessageResult,
    pub status: i64,
}
