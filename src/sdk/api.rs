//! Endpoint methods of the SDK API.
//!
//! Each method fills in a URL template, optionally serializes a request
//! payload, and delegates to the shared request pipeline.

use serde::Serialize;
use serde_json::Value;

use crate::clients::{HttpMethod, QiscusClient, QiscusError};
use crate::sdk::client::SdkClient;
use crate::sdk::request::{
    AddRoomParticipantsReq, CreateRoomReq, DeactivateUserReq, GetAverageReplyTimeUserReq,
    GetOrCreateChannelReq, GetOrCreateRoomWithTargetReq, GetRoomParticipantsReq,
    GetUnreadCountReq, GetUserRoomsReq, GetUsersReq, GetWebhookLogsReq, LoadCommentsReq,
    LoadCommentsWithRangeReq, LoginOrRegisterReq, PostCommentReq, PostSystemEventMessageReq,
    ReactivateUserReq, RemoveRoomParticipantsReq, ResetUserTokenReq, UpdateRoomReq,
};
use crate::sdk::response::{
    AddRoomParticipantsResponse, CreateRoomResponse, DeactivateUserResponse,
    GetAverageReplyTimeUserResponse, GetOrCreateChannelResponse, GetRoomParticipantsResponse,
    GetRoomsInfoResponse, GetUnreadCountResponse, GetUserProfileResponse, GetUserRoomsResponse,
    GetUserTokenResponse, GetUsersResponse, GetWebhookLogsResponse, LoadCommentsResponse,
    LoadCommentsWithRangeResponse, LoginOrRegisterResponse, PostCommentResponse,
    PostSystemEventMessageResponse, ReactivateUserResponse, RemoveRoomParticipantsResponse,
    UpdateRoomResponse,
};

impl SdkClient {
    /// Login an existing user or register a new one.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn login_or_register(
        &self,
        req: &LoginOrRegisterReq,
    ) -> Result<LoginOrRegisterResponse, QiscusError> {
        let url = format!("{}/api/v2.1/rest/login_or_register", self.api_base());

        self.request(HttpMethod::Post, &url)
            .json(req)?
            .build()
            .send_json(self.config())
            .await
    }

    /// Get a user profile by user ID.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn get_user_profile(
        &self,
        user_id: &str,
    ) -> Result<GetUserProfileResponse, QiscusError> {
        let url = format!("{}/api/v2.1/rest/user_profile", self.api_base());

        self.request(HttpMethod::Get, &url)
            .param("user_id", user_id)
            .build()
            .send_json(self.config())
            .await
    }

    /// Get a user token by user ID.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn get_user_token(&self, user_id: &str) -> Result<GetUserTokenResponse, QiscusError> {
        let url = format!("{}/api/v2.1/rest/get_user_token", self.api_base());

        self.request(HttpMethod::Get, &url)
            .param("user_id", user_id)
            .build()
            .send_json(self.config())
            .await
    }

    /// Reset a user token by user ID.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn reset_user_token(
        &self,
        user_id: &str,
    ) -> Result<GetUserTokenResponse, QiscusError> {
        let url = format!("{}/api/v2.1/rest/reset_user_token", self.api_base());
        let req = ResetUserTokenReq {
            user_id: user_id.to_string(),
        };

        self.request(HttpMethod::Post, &url)
            .json(&req)?
            .build()
            .send_json(self.config())
            .await
    }

    /// Create a new room.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn create_room(&self, req: &CreateRoomReq) -> Result<CreateRoomResponse, QiscusError> {
        let url = format!("{}/api/v2.1/rest/create_room", self.api_base());

        self.request(HttpMethod::Post, &url)
            .json(req)?
            .build()
            .send_json(self.config())
            .await
    }

    /// Get or create a single room with the target users.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn get_or_create_room_with_target(
        &self,
        req: &GetOrCreateRoomWithTargetReq,
    ) -> Result<CreateRoomResponse, QiscusError> {
        let url = format!(
            "{}/api/v2.1/rest/get_or_create_room_with_target",
            self.api_base()
        );

        self.request(HttpMethod::Post, &url)
            .json(req)?
            .build()
            .send_json(self.config())
            .await
    }

    /// Get room info by room IDs.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn get_rooms_info(
        &self,
        room_ids: &[String],
    ) -> Result<GetRoomsInfoResponse, QiscusError> {
        let url = format!("{}/api/v2.1/rest/get_rooms_info", self.api_base());

        let mut builder = self.request(HttpMethod::Get, &url);
        for room_id in room_ids {
            builder = builder.param("room_ids[]", room_id.as_str());
        }

        builder.build().send_json(self.config()).await
    }

    /// Update a room.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn update_room(&self, req: &UpdateRoomReq) -> Result<UpdateRoomResponse, QiscusError> {
        let url = format!("{}/api/v2.1/rest/update_room", self.api_base());

        self.request(HttpMethod::Post, &url)
            .json(req)?
            .build()
            .send_json(self.config())
            .await
    }

    /// Get room participants.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn get_room_participants(
        &self,
        req: &GetRoomParticipantsReq,
    ) -> Result<GetRoomParticipantsResponse, QiscusError> {
        let url = format!("{}/api/v2.1/rest/get_room_participants", self.api_base());

        let page = if req.page > 0 { req.page } else { 1 };
        let limit = if req.limit > 0 { req.limit } else { 20 };

        self.request(HttpMethod::Get, &url)
            .param("room_id", req.room_id.as_str())
            .param("page", page.to_string())
            .param("limit", limit.to_string())
            .build()
            .send_json(self.config())
            .await
    }

    /// Add room participants.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn add_room_participants(
        &self,
        req: &AddRoomParticipantsReq,
    ) -> Result<AddRoomParticipantsResponse, QiscusError> {
        let url = format!("{}/api/v2.1/rest/add_room_participants", self.api_base());

        self.request(HttpMethod::Post, &url)
            .json(req)?
            .build()
            .send_json(self.config())
            .await
    }

    /// Remove room participants.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn remove_room_participants(
        &self,
        req: &RemoveRoomParticipantsReq,
    ) -> Result<RemoveRoomParticipantsResponse, QiscusError> {
        let url = format!("{}/api/v2.1/rest/remove_room_participants", self.api_base());

        self.request(HttpMethod::Post, &url)
            .json(req)?
            .build()
            .send_json(self.config())
            .await
    }

    /// Get the rooms a user participates in.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn get_user_rooms(
        &self,
        req: &GetUserRoomsReq,
    ) -> Result<GetUserRoomsResponse, QiscusError> {
        let url = format!("{}/api/v2.1/rest/get_user_rooms", self.api_base());

        let page = if req.page > 0 { req.page } else { 1 };
        let limit = if req.limit > 0 { req.limit } else { 20 };

        self.request(HttpMethod::Get, &url)
            .param("user_id", req.user_id.as_str())
            .param("page", page.to_string())
            .param("limit", limit.to_string())
            .build()
            .send_json(self.config())
            .await
    }

    /// Post a comment.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn post_comment(
        &self,
        req: &PostCommentReq,
    ) -> Result<PostCommentResponse, QiscusError> {
        let url = format!("{}/api/v2.1/rest/post_comment", self.api_base());

        self.request(HttpMethod::Post, &url)
            .json(req)?
            .build()
            .send_json(self.config())
            .await
    }

    /// Load comments of a room.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn load_comments(
        &self,
        req: &LoadCommentsReq,
    ) -> Result<LoadCommentsResponse, QiscusError> {
        let url = format!("{}/api/v2.1/rest/load_comments", self.api_base());

        let page = if req.page > 0 { req.page } else { 1 };
        let limit = if req.limit > 0 { req.limit } else { 20 };

        self.request(HttpMethod::Get, &url)
            .param("room_id", req.room_id.as_str())
            .param("page", page.to_string())
            .param("limit", limit.to_string())
            .build()
            .send_json(self.config())
            .await
    }

    /// Post a system event message.
    ///
    /// The system event type is pinned to `"custom"`.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn post_system_event_message(
        &self,
        req: &PostSystemEventMessageReq,
    ) -> Result<PostSystemEventMessageResponse, QiscusError> {
        let url = format!(
            "{}/api/v2.1/rest/post_system_event_message",
            self.api_base()
        );

        #[derive(Serialize)]
        struct Payload<'a> {
            system_event_type: &'a str,
            room_id: &'a str,
            message: &'a str,
            payload: &'a Value,
            extras: &'a Value,
        }

        let payload = Payload {
            system_event_type: "custom",
            room_id: &req.room_id,
            message: &req.message,
            payload: &req.payload,
            extras: &req.extras,
        };

        self.request(HttpMethod::Post, &url)
            .json(&payload)?
            .build()
            .send_json(self.config())
            .await
    }

    /// Get unread counts of the given rooms for a user.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn get_unread_count(
        &self,
        req: &GetUnreadCountReq,
    ) -> Result<GetUnreadCountResponse, QiscusError> {
        let url = format!("{}/api/v2.1/rest/get_unread_count", self.api_base());

        let mut builder = self
            .request(HttpMethod::Get, &url)
            .param("user_id", req.user_id.as_str());

        for room_id in &req.room_ids {
            builder = builder.param("room_ids[]", room_id.as_str());
        }

        builder.build().send_json(self.config()).await
    }

    /// Get the user list.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn get_users(&self, req: &GetUsersReq) -> Result<GetUsersResponse, QiscusError> {
        let url = format!("{}/api/v2.1/rest/get_user_list", self.api_base());

        let page = if req.page > 0 { req.page } else { 1 };
        let limit = if req.limit > 0 { req.limit } else { 20 };
        let order_query = if req.order_query.is_empty() {
            "created_at desc nulls last"
        } else {
            req.order_query.as_str()
        };

        self.request(HttpMethod::Get, &url)
            .param("page", page.to_string())
            .param("limit", limit.to_string())
            .param("show_all", req.show_all.to_string())
            .param("order_query", order_query)
            .build()
            .send_json(self.config())
            .await
    }

    /// Load comments of a room within a comment-ID range.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn load_comments_with_range(
        &self,
        req: &LoadCommentsWithRangeReq,
    ) -> Result<LoadCommentsWithRangeResponse, QiscusError> {
        let url = format!("{}/api/v2.1/rest/load_comments_with_range", self.api_base());

        self.request(HttpMethod::Get, &url)
            .param("room_id", req.room_id.as_str())
            .param("first_comment_id", req.first_comment_id.as_str())
            .param("last_comment_id", req.last_comment_id.as_str())
            .build()
            .send_json(self.config())
            .await
    }

    /// Get or create a channel.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn get_or_create_channel(
        &self,
        req: &GetOrCreateChannelReq,
    ) -> Result<GetOrCreateChannelResponse, QiscusError> {
        let url = format!("{}/api/v2.1/rest/get_or_create_channel", self.api_base());

        self.request(HttpMethod::Post, &url)
            .json(req)?
            .build()
            .send_json(self.config())
            .await
    }

    /// Get the average reply time of a user within a window.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn get_average_reply_time_user(
        &self,
        req: &GetAverageReplyTimeUserReq,
    ) -> Result<GetAverageReplyTimeUserResponse, QiscusError> {
        let url = format!(
            "{}/api/v2.1/rest/get_average_reply_time_user",
            self.api_base()
        );

        self.request(HttpMethod::Get, &url)
            .param("user_id", req.user_id.as_str())
            .param("start_time", req.start_time.as_str())
            .param("end_time", req.end_time.as_str())
            .build()
            .send_json(self.config())
            .await
    }

    /// Get webhook delivery logs.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn get_webhook_logs(
        &self,
        req: &GetWebhookLogsReq,
    ) -> Result<GetWebhookLogsResponse, QiscusError> {
        let url = format!("{}/api/v2.1/rest/webhook_logs", self.api_base());

        let page = if req.page > 0 { req.page } else { 1 };
        let limit = if req.limit > 0 { req.limit } else { 20 };
        let kind = if req.kind.is_empty() {
            "all"
        } else {
            req.kind.as_str()
        };

        self.request(HttpMethod::Get, &url)
            .param("page", page.to_string())
            .param("limit", limit.to_string())
            .param("type", kind)
            .build()
            .send_json(self.config())
            .await
    }

    /// Deactivate users.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn deactivate_user(
        &self,
        req: &DeactivateUserReq,
    ) -> Result<DeactivateUserResponse, QiscusError> {
        let url = format!("{}/api/v2.1/rest/deactivate_users", self.api_base());

        self.request(HttpMethod::Delete, &url)
            .json(req)?
            .build()
            .send_json(self.config())
            .await
    }

    /// Reactivate users.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn reactivate_user(
        &self,
        req: &ReactivateUserReq,
    ) -> Result<ReactivateUserResponse, QiscusError> {
        let url = format!("{}/api/v2.1/rest/reactivate_users", self.api_base());

        self.request(HttpMethod::Post, &url)
            .json(req)?
            .build()
            .send_json(self.config())
            .await
    }
}
