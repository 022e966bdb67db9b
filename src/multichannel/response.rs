//! Response payloads for the Multichannel API.
//!
//! Every struct tolerates partially-populated responses: missing fields
//! decode to their default values, matching the tolerant decoding the API's
//! evolving payloads require. Free-form fields are kept as
//! [`serde_json::Value`].

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use super::request::UserProperty;

/// A room tag.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RoomTag {
    pub id: i64,
    pub name: String,
}

/// Get room tags response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RoomTagsResponse {
    pub data: Vec<RoomTag>,
}

/// Create room tag response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateRoomTagResponse {
    pub data: RoomTag,
}

/// The additional-info property set of a room.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdditionalInfoExtras {
    pub user_properties: Vec<UserProperty>,
}

/// A timestamp carried with its zone description.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct TimeWithZone {
    pub date: String,
    pub timezone_type: i64,
    pub timezone: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateAdditionalInfoRoomData {
    pub extras: AdditionalInfoExtras,
    pub first_initiated: TimeWithZone,
    pub first_agent_response_time: TimeWithZone,
    pub user_id: String,
}

/// Create additional info room response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateAdditionalInfoRoomResponse {
    pub data: CreateAdditionalInfoRoomData,
}

/// A channel attached to a customer room.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RoomChannel {
    pub id: i64,
    pub app_code: String,
    pub secret_key: String,
    pub created_at: String,
    pub updated_at: String,
    pub is_active: bool,
    pub app_id: i64,
    pub forward_url: Value,
    pub forward_enabled: bool,
    pub name: String,
    pub badge_url: String,
    pub use_channel_responder: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GetAdditionalInfoRoomData {
    pub extras: AdditionalInfoExtras,
    pub first_initiated: Option<DateTime<Utc>>,
    pub first_agent_response_time: Option<DateTime<Utc>>,
    pub user_id: String,
    pub channel_id: i64,
    pub is_blocked: bool,
    pub channel_name: String,
    pub channel: RoomChannel,
}

/// Get additional info room response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GetAdditionalInfoRoomResponse {
    pub data: GetAdditionalInfoRoomData,
}

/// A customer room as seen by the bot toggle endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct BotRoom {
    pub id: i64,
    pub app_id: i64,
    pub user_id: String,
    pub room_id: String,
    pub source: String,
    pub created_at: String,
    pub updated_at: String,
    pub is_handled_by_bot: bool,
    pub start_service_comment_id: String,
    pub user_avatar_url: String,
    pub name: String,
    pub has_no_message: bool,
    pub extras: String,
    pub check_wa_contact: bool,
    pub origin: String,
    pub room_badge: String,
    pub is_waiting: bool,
    pub sub_source: Value,
    pub channel_id: i64,
    pub resolved: bool,
    pub resolved_ts: Value,
    #[serde(rename = "type")]
    pub room_type: Value,
    pub deleted_at: Value,
    pub customer_id: Value,
}

/// Set toggle bot in room response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SetToggleBotInRoomResponse {
    pub data: BotRoom,
}

/// An agent role / division.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AgentRole {
    pub id: i64,
    pub app_id: i64,
    pub name: String,
    pub is_default_role: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Per-app widget and assignment configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdminAppConfig {
    pub id: i64,
    pub app_id: i64,
    pub widget: String,
    pub created_at: String,
    pub updated_at: String,
    pub offline_message: Value,
    pub online_message: String,
    pub timezone: String,
    pub enable_bulk_assign: bool,
    pub send_online_if_resolved: bool,
    pub send_offline_each_message: bool,
}

/// A Multichannel application.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdminApp {
    pub id: i64,
    pub name: String,
    pub app_code: String,
    pub secret_key: String,
    pub created_at: String,
    pub updated_at: String,
    pub bot_webhook_url: String,
    pub is_bot_enabled: bool,
    pub allocate_agent_webhook_url: String,
    pub is_allocate_agent_webhook_enabled: bool,
    pub mark_as_resolved_webhook_url: String,
    pub is_mark_as_resolved_webhook_enabled: bool,
    pub is_mobile_pn_enabled: bool,
    pub is_active: bool,
    pub is_sessional: bool,
    pub is_agent_allocation_enabled: bool,
    pub is_agent_takeover_enabled: bool,
    pub is_token_expiring: bool,
    pub paid_channel_approved: Value,
    pub use_latest: bool,
    pub app_config: AdminAppConfig,
    pub agent_roles: Vec<AgentRole>,
}

/// An admin-level user, as returned by the login and assignment endpoints.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdminUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub authentication_token: String,
    pub created_at: String,
    pub updated_at: String,
    pub sdk_email: String,
    pub sdk_key: String,
    pub is_available: bool,
    #[serde(rename = "type")]
    pub user_type: i64,
    pub avatar_url: String,
    pub app_id: i64,
    pub is_verified: bool,
    pub notifications_room_id: String,
    pub bubble_color: Value,
    pub qismo_key: String,
    pub direct_login_token: Value,
    pub last_login: String,
    pub force_offline: bool,
    pub deleted_at: Value,
    pub type_as_string: String,
    pub assigned_rules: Vec<Value>,
    pub app: AdminApp,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginAdminData {
    pub user: AdminUser,
    pub details: Value,
    pub long_lived_token: String,
    pub user_configs: Value,
}

/// Login admin response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginAdminResponse {
    pub data: LoginAdminData,
}

/// An id/name pair, used for channels and roles attached to an agent.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct IdName {
    pub id: i64,
    pub name: String,
}

/// A customer-service agent.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Agent {
    pub avatar_url: String,
    pub created_at: String,
    pub current_customer_count: i64,
    pub email: String,
    pub force_offline: bool,
    pub id: i64,
    pub is_available: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub name: String,
    pub sdk_email: String,
    pub sdk_key: String,
    #[serde(rename = "type")]
    pub agent_type: i64,
    pub type_as_string: String,
    pub user_channels: Vec<IdName>,
    pub user_roles: Vec<IdName>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AgentsData {
    pub agents: Vec<Agent>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CountMeta {
    pub per_page: i64,
    pub total_count: i64,
}

/// Get all agents response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GetAllAgentsResponse {
    pub data: AgentsData,
    pub meta: CountMeta,
    pub status: i64,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AssignedAgentData {
    pub added_agent: AdminUser,
}

/// Assign agent response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AssignAgentResponse {
    pub data: AssignedAgentData,
}

/// Page-based listing metadata.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub limit: i64,
    pub page: i64,
    pub total: i64,
    pub total_page: i64,
}

/// Get agents by division response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GetAgentsByDivisionResponse {
    pub data: Vec<Agent>,
    pub meta: PageMeta,
}

/// A division.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Division {
    pub app_id: i64,
    pub created_at: String,
    pub id: i64,
    pub is_default_role: bool,
    pub name: String,
    pub updated_at: String,
}

/// Get all division response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GetAllDivisionResponse {
    pub data: Vec<Division>,
    pub meta: PageMeta,
}

/// The service record written when a room is resolved.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResolvedService {
    pub notes: String,
    pub is_resolved: bool,
    pub resolved_at: TimeWithZone,
    pub user_id: i64,
    pub app_id: i64,
    pub room_log_id: i64,
    pub room_id: String,
    pub retrieved_at: TimeWithZone,
    pub first_comment_id: String,
    pub last_comment_id: String,
    pub updated_at: String,
    pub created_at: String,
    pub id: i64,
    pub user: AdminUser,
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

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RoomInfo {
    pub room: Room,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct MarkAsResolvedData {
    pub service: ResolvedService,
    pub room_info: RoomInfo,
}

/// Mark as resolved response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct MarkAsResolvedResponse {
    pub data: MarkAsResolvedData,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CustomChannel {
    pub id: i64,
    pub webhook_url: String,
    pub logo_url: String,
    pub identifier_key: String,
    pub name: String,
    pub is_active: bool,
    pub use_channel_responder: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FbChannel {
    pub id: i64,
    pub is_active: bool,
    pub long_lived_token: String,
    pub profile_name: String,
    pub page_id: String,
    pub badge_url: String,
    pub app_id: i64,
    pub use_channel_responder: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct IgChannel {
    pub id: i64,
    pub is_active: bool,
    pub long_lived_token: String,
    pub name: String,
    pub page_id: String,
    pub badge_url: String,
    pub app_id: i64,
    pub use_channel_responder: bool,
    pub ig_id: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct LineChannel {
    pub id: i64,
    pub is_active: bool,
    pub access_token: String,
    pub secret_key: String,
    pub badge_url: String,
    pub name: String,
    pub app_id: i64,
    pub use_channel_responder: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct QiscusChannel {
    pub id: i64,
    pub is_active: bool,
    pub app_code: String,
    pub secret_key: String,
    pub name: String,
    pub badge_url: Value,
    pub app_id: i64,
    pub use_channel_responder: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct TelegramChannel {
    pub id: i64,
    pub is_active: bool,
    pub name: String,
    pub username: String,
    pub bot_token: String,
    pub badge_url: Value,
    pub use_channel_responder: bool,
    pub app_id: i64,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct WaChannel {
    pub allow_intl_hsm: bool,
    pub app_id: i64,
    pub badge_url: String,
    pub base_url: String,
    pub business_id: Value,
    pub business_verification_status: Value,
    pub created_at: String,
    pub encoded_token: String,
    pub forward_enabled: bool,
    pub forward_url: Value,
    pub hsm_24_enabled: bool,
    pub id: i64,
    pub is_active: bool,
    pub is_ssl_enabled: bool,
    pub name: String,
    pub on_sync: bool,
    pub phone_number: String,
    pub phone_number_status: Value,
    pub platform: String,
    pub read_enabled: bool,
    pub updated_at: String,
    pub use_channel_responder: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChannelsData {
    pub custom_channels: Vec<CustomChannel>,
    pub fb_channels: Vec<FbChannel>,
    pub ig_channels: Vec<IgChannel>,
    pub line_channels: Vec<LineChannel>,
    pub qiscus_channels: Vec<QiscusChannel>,
    pub telegram_channels: Vec<TelegramChannel>,
    pub wa_channels: Vec<WaChannel>,
}

/// Get all channels response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GetAllChannelsResponse {
    pub data: ChannelsData,
}

/// A customer room.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CustomerRoom {
    pub channel_id: i64,
    pub contact_id: Value,
    pub id: i64,
    pub is_handled_by_bot: bool,
    pub is_resolved: bool,
    pub is_waiting: bool,
    pub last_comment_sender: String,
    pub last_comment_sender_type: String,
    pub last_comment_text: String,
    pub last_comment_timestamp: Option<DateTime<Utc>>,
    pub last_customer_comment_text: Value,
    pub last_customer_timestamp: Option<DateTime<Utc>>,
    pub name: String,
    pub room_badge: String,
    pub room_id: String,
    pub room_type: String,
    pub source: String,
    pub user_avatar_url: String,
    pub user_id: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CustomerRoomData {
    pub customer_room: CustomerRoom,
}

/// Get room by room ID response payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GetRoomByRoomIDResponse {
    pub data: CustomerRoomData,
    pub status: i64,
}
