//! Client for the Qiscus Multichannel customer-service API.
//!
//! [`MultichannelClient`] holds the base URL and credentials and exposes one
//! async method per API endpoint; every method delegates to the shared
//! request pipeline in [`crate::clients`]. Authentication uses the
//! `Qiscus-App-Id` and `Qiscus-Secret-Key` request headers.
//!
//! # Example
//!
//! ```rust,ignore
//! use qiscus_api::{AppId, SecretKey};
//! use qiscus_api::multichannel::MultichannelClient;
//!
//! let client = MultichannelClient::new(
//!     AppId::new("qiscus-app-id")?,
//!     SecretKey::new("qiscus-secret-key")?,
//! );
//!
//! let tags = client.get_room_tags("12345678").await?;
//! ```

mod api;
mod client;
mod request;
mod response;

pub use client::{MultichannelClient, API_BASE};
pub use request::{
    AssignAgentReq, CreateAdditionalInfoRoomReq, CreateRoomTagReq, GetAgentsByDivisionReq,
    GetAllAgentsReq, GetAllDivisionReq, LoginAdminReq, MarkAsResolvedReq, SendMessageTextByBotReq,
    SetToggleBotInRoomReq, UserProperty,
};
pub use response::{
    AdditionalInfoExtras, AdminApp, AdminAppConfig, AdminUser, Agent, AgentRole, AgentsData,
    AssignAgentResponse, AssignedAgentData, BotRoom, ChannelsData, CountMeta,
    CreateAdditionalInfoRoomData, CreateAdditionalInfoRoomResponse, CreateRoomTagResponse,
    CustomChannel, CustomerRoom, CustomerRoomData, Division, FbChannel,
    GetAdditionalInfoRoomData, GetAdditionalInfoRoomResponse, GetAgentsByDivisionResponse,
    GetAllAgentsResponse, GetAllChannelsResponse, GetAllDivisionResponse, GetRoomByRoomIDResponse,
    IdName, IgChannel, LineChannel, LoginAdminData, LoginAdminResponse, MarkAsResolvedData,
    MarkAsResolvedResponse, PageMeta, QiscusChannel, ResolvedService, Room, RoomChannel, RoomInfo,
    RoomTag, RoomTagsResponse, SetToggleBotInRoomResponse, TelegramChannel, TimeWithZone,
    WaChannel,
};
