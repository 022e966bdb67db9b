//! Client for the Qiscus SDK messaging API.
//!
//! [`SdkClient`] holds the base URL and credentials and exposes one async
//! method per API endpoint; every method delegates to the shared request
//! pipeline in [`crate::clients`]. Authentication uses the
//! `QISCUS_SDK_APP_ID` and `QISCUS_SDK_SECRET` request headers.
//!
//! # Example
//!
//! ```rust,ignore
//! use qiscus_api::{AppId, SecretKey};
//! use qiscus_api::sdk::{LoginOrRegisterReq, SdkClient};
//!
//! let client = SdkClient::new(
//!     AppId::new("qiscus-app-id")?,
//!     SecretKey::new("qiscus-secret-key")?,
//! );
//!
//! let user = client
//!     .login_or_register(&LoginOrRegisterReq {
//!         user_id: "guest@qiscus.com".to_string(),
//!         password: "12345678".to_string(),
//!         username: "User Demo".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

mod api;
mod client;
mod request;
mod response;

pub use client::{SdkClient, API_BASE};
pub use request::{
    AddRoomParticipantsReq, CreateRoomReq, DeactivateUserReq, GetAverageReplyTimeUserReq,
    GetOrCreateChannelReq, GetOrCreateRoomWithTargetReq, GetRoomParticipantsReq,
    GetUnreadCountReq, GetUserRoomsReq, GetUsersReq, GetWebhookLogsReq, LoadCommentsReq,
    LoadCommentsWithRangeReq, LoginOrRegisterReq, PostCommentReq, PostSystemEventMessageReq,
    ReactivateUserReq, RemoveRoomParticipantsReq, ResetUserTokenReq, UpdateRoomReq,
};
pub use response::{
    AddRoomParticipantsResponse, ChangedRoomResult, Comment, CommentResult, CommentsResult,
    CreateRoomResponse, DeactivateUserResponse, GetAverageReplyTimeUserResponse,
    GetOrCreateChannelResponse, GetRoomParticipantsResponse, GetRoomsInfoResponse,
    GetUnreadCountResponse, GetUserProfileResponse, GetUserRoomsResponse, GetUserTokenResponse,
    GetUsersResponse, GetWebhookLogsResponse, LoadCommentsResponse, LoadCommentsWithRangeResponse,
    LoginOrRegisterResponse, MessageResult, ParticipantsAddedResult, ParticipantsRemovedResult,
    ParticipantsResult, PostCommentResponse, PostSystemEventMessageResponse, RangedComment,
    RangedCommentsResult, ReactivateUserResponse, RemoveRoomParticipantsResponse,
    ReplyTimeData, ReplyTimeDuration, ReplyTimeResult, Room, RoomResult, RoomsResult, SdkUser,
    TokenResult, UnreadCount, UnreadCountsResult, UpdateRoomResponse, UserAccount, UserResult,
    UserRoomsMeta, UserRoomsResult, UsersMeta, UsersResult, WebhookLog, WebhookLogsResult,
};
