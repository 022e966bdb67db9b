//! Endpoint methods of the Multichannel API.
//!
//! Each method fills in a URL template, optionally serializes a request
//! payload, and delegates to the shared request pipeline.

use serde::Serialize;

use crate::clients::{HttpMethod, QiscusClient, QiscusError};
use crate::multichannel::client::MultichannelClient;
use crate::multichannel::request::{
    AssignAgentReq, CreateAdditionalInfoRoomReq, CreateRoomTagReq, GetAgentsByDivisionReq,
    GetAllAgentsReq, GetAllDivisionReq, MarkAsResolvedReq, SendMessageTextByBotReq,
    SetToggleBotInRoomReq,
};
use crate::multichannel::response::{
    AssignAgentResponse, CreateAdditionalInfoRoomResponse, CreateRoomTagResponse,
    GetAdditionalInfoRoomResponse, GetAgentsByDivisionResponse, GetAllAgentsResponse,
    GetAllChannelsResponse, GetAllDivisionResponse, GetRoomByRoomIDResponse,
    MarkAsResolvedResponse, RoomTagsResponse, SetToggleBotInRoomResponse,
};

impl MultichannelClient {
    /// Get room tags by room ID.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn get_room_tags(&self, room_id: &str) -> Result<RoomTagsResponse, QiscusError> {
        let url = format!("{}/api/v1/room_tag/{room_id}", self.api_base());

        self.request(HttpMethod::Get, &url)
            .build()
            .send_json(self.config())
            .await
    }

    /// Create a room tag.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn create_room_tag(
        &self,
        req: &CreateRoomTagReq,
    ) -> Result<CreateRoomTagResponse, QiscusError> {
        let url = format!("{}/api/v1/room_tag/create", self.api_base());

        self.request(HttpMethod::Post, &url)
            .json(req)?
            .build()
            .send_json(self.config())
            .await
    }

    /// Create additional info on a room, replacing any existing data.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn create_additional_info_room_with_replace(
        &self,
        room_id: &str,
        req: &CreateAdditionalInfoRoomReq,
    ) -> Result<CreateAdditionalInfoRoomResponse, QiscusError> {
        let url = format!("{}/api/v1/qiscus/room/{room_id}/user_info", self.api_base());

        self.request(HttpMethod::Post, &url)
            .json(req)?
            .build()
            .send_json(self.config())
            .await
    }

    /// Get additional info of a room by room ID.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn get_additional_info_room(
        &self,
        room_id: &str,
    ) -> Result<GetAdditionalInfoRoomResponse, QiscusError> {
        let url = format!("{}/api/v1/qiscus/room/{room_id}/user_info", self.api_base());

        self.request(HttpMethod::Get, &url)
            .build()
            .send_json(self.config())
            .await
    }

    /// Create additional info on a room without replacing existing data.
    ///
    /// The endpoint itself always replaces, so existing properties are
    /// fetched first and merged into the new set before writing.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when either the fetch or the write fails.
    pub async fn create_additional_info_room(
        &self,
        room_id: &str,
        req: &CreateAdditionalInfoRoomReq,
    ) -> Result<CreateAdditionalInfoRoomResponse, QiscusError> {
        let existing = self.get_additional_info_room(room_id).await?;

        let mut merged = req.clone();
        merged
            .user_properties
            .extend(existing.data.extras.user_properties);

        self.create_additional_info_room_with_replace(room_id, &merged)
            .await
    }

    /// Send a text message as the bot.
    ///
    /// The message type is pinned to `"text"`; no response payload is
    /// decoded.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn send_message_text_by_bot(
        &self,
        req: &SendMessageTextByBotReq,
    ) -> Result<(), QiscusError> {
        let url = format!("{}/{}/bot", self.api_base(), self.app_id());

        #[derive(Serialize)]
        struct Payload<'a> {
            sender_email: &'a str,
            message: &'a str,
            room_id: &'a str,
            #[serde(rename = "type")]
            kind: &'a str,
        }

        let payload = Payload {
            sender_email: &req.sender_email,
            message: &req.message,
            room_id: &req.room_id,
            kind: "text",
        };

        self.request(HttpMethod::Post, &url)
            .json(&payload)?
            .build()
            .send(self.config())
            .await?;

        Ok(())
    }

    /// Activate or deactivate the bot in a room.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn set_toggle_bot_in_room(
        &self,
        room_id: &str,
        is_active: bool,
    ) -> Result<SetToggleBotInRoomResponse, QiscusError> {
        let url = format!("{}/bot/{room_id}/activate", self.api_base());
        let req = SetToggleBotInRoomReq { is_active };

        self.request(HttpMethod::Post, &url)
            .json(&req)?
            .build()
            .send_json(self.config())
            .await
    }

    /// Get all agents, with search and scope filters.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn get_all_agents(
        &self,
        req: &GetAllAgentsReq,
    ) -> Result<GetAllAgentsResponse, QiscusError> {
        let url = format!("{}/api/v2/admin/agents", self.api_base());

        let page = if req.page > 0 { req.page } else { 1 };
        let limit = if req.limit > 0 { req.limit } else { 20 };

        self.request(HttpMethod::Get, &url)
            .param("page", page.to_string())
            .param("limit", limit.to_string())
            .param("search", req.search.as_str())
            .param("scope", req.scope.as_str())
            .build()
            .send_json(self.config())
            .await
    }

    /// Assign an agent to a room.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn assign_agent(
        &self,
        req: &AssignAgentReq,
    ) -> Result<AssignAgentResponse, QiscusError> {
        let url = format!("{}/api/v1/admin/service/assign_agent", self.api_base());

        let mut req = req.clone();
        if req.max_agent <= 0 {
            req.max_agent = 5;
        }

        self.request(HttpMethod::Post, &url)
            .json(&req)?
            .build()
            .send_json(self.config())
            .await
    }

    /// Get agents filtered by division.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn get_agents_by_division(
        &self,
        req: &GetAgentsByDivisionReq,
    ) -> Result<GetAgentsByDivisionResponse, QiscusError> {
        let url = format!("{}/api/v2/admin/agents/by_division", self.api_base());

        let page = if req.page > 0 { req.page } else { 1 };
        let limit = if req.limit > 0 { req.limit } else { 20 };

        let mut builder = self
            .request(HttpMethod::Get, &url)
            .param("page", page.to_string())
            .param("limit", limit.to_string())
            .param("is_available", req.is_available.to_string())
            .param("sort", req.sort.as_str());

        for division_id in &req.division_ids {
            builder = builder.param("division_ids[]", division_id.as_str());
        }

        builder.build().send_json(self.config()).await
    }

    /// Get all divisions.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn get_all_division(
        &self,
        req: &GetAllDivisionReq,
    ) -> Result<GetAllDivisionResponse, QiscusError> {
        let url = format!("{}/api/v2/divisions", self.api_base());

        let page = if req.page > 0 { req.page } else { 1 };
        let limit = if req.limit > 0 { req.limit } else { 20 };

        self.request(HttpMethod::Get, &url)
            .param("page", page.to_string())
            .param("limit", limit.to_string())
            .build()
            .send_json(self.config())
            .await
    }

    /// Mark a room as resolved.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn mark_as_resolved(
        &self,
        req: &MarkAsResolvedReq,
    ) -> Result<MarkAsResolvedResponse, QiscusError> {
        let url = format!("{}/api/v1/admin/service/mark_as_resolved", self.api_base());

        self.request(HttpMethod::Post, &url)
            .json(req)?
            .build()
            .send_json(self.config())
            .await
    }

    /// Get all channels.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn get_all_channels(&self) -> Result<GetAllChannelsResponse, QiscusError> {
        let url = format!("{}/api/v2/channels", self.api_base());

        self.request(HttpMethod::Get, &url)
            .build()
            .send_json(self.config())
            .await
    }

    /// Get a customer room by room ID.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError`] when the call fails at any pipeline stage.
    pub async fn get_room_by_room_id(
        &self,
        room_id: &str,
    ) -> Result<GetRoomByRoomIDResponse, QiscusError> {
        let url = format!("{}/api/v2/customer_rooms/{room_id}", self.api_base());

        self.request(HttpMethod::Get, &url)
            .build()
            .send_json(self.config())
            .await
    }
}
