//! Integration tests for the Multichannel API client.
//!
//! Each test mounts a mock endpoint that asserts the method, path, and
//! authentication headers the client must send, then verifies the decoded
//! response payload.

use qiscus_api::multichannel::{
    AssignAgentReq, CreateAdditionalInfoRoomReq, CreateRoomTagReq, GetAgentsByDivisionReq,
    GetAllAgentsReq, GetAllDivisionReq, MarkAsResolvedReq, MultichannelClient,
    SendMessageTextByBotReq, UserProperty,
};
use qiscus_api::{AppId, QiscusClient, SecretKey};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const APP_ID: &str = "test-qiscus-app-id";
const SECRET_KEY: &str = "test-qiscus-secret-key";
const ROOM_ID: &str = "123123";

fn create_client(api_base: &str) -> MultichannelClient {
    let mut client = MultichannelClient::new(
        AppId::new(APP_ID).unwrap(),
        SecretKey::new(SECRET_KEY).unwrap(),
    );
    client.set_api_base(api_base);
    client
}

fn auth_mock(http_method: &str, endpoint: impl Into<String>) -> wiremock::MockBuilder {
    Mock::given(method(http_method))
        .and(path(endpoint.into()))
        .and(header("Qiscus-App-Id", APP_ID))
        .and(header("Qiscus-Secret-Key", SECRET_KEY))
}

#[tokio::test]
async fn test_get_room_tags() {
    let mock_server = MockServer::start().await;

    auth_mock("GET", format!("/api/v1/room_tag/{ROOM_ID}"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"data":[{"id":1,"name":"test"}]}"#, "application/json"),
        )
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    let result = client.get_room_tags(ROOM_ID).await.unwrap();

    assert_eq!(result.data.len(), 1);
    assert_eq!(result.data[0].id, 1);
    assert_eq!(result.data[0].name, "test");
}

#[tokio::test]
async fn test_create_room_tag() {
    let mock_server = MockServer::start().await;

    auth_mock("POST", "/api/v1/room_tag/create")
        .and(body_json(json!({"room_id": ROOM_ID, "tag": "1"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"data":{"id":1,"name":"test"}}"#, "application/json"),
        )
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    let result = client
        .create_room_tag(&CreateRoomTagReq {
            room_id: ROOM_ID.to_string(),
            tag: "1".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(result.data.id, 1);
    assert_eq!(result.data.name, "test");
}

#[tokio::test]
async fn test_create_additional_info_room_with_replace() {
    let mock_server = MockServer::start().await;

    auth_mock("POST", format!("/api/v1/qiscus/room/{ROOM_ID}/user_info"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"data":{"extras":{"user_properties":[{"key":"ping","value":"pong"}]}}}"#,
            "application/json",
        ))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    let result = client
        .create_additional_info_room_with_replace(
            ROOM_ID,
            &CreateAdditionalInfoRoomReq {
                user_properties: vec![UserProperty {
                    key: "ping".to_string(),
                    value: "pong".to_string(),
                }],
            },
        )
        .await
        .unwrap();

    let properties = &result.data.extras.user_properties;
    assert_eq!(properties[0].key, "ping");
    assert_eq!(properties[0].value, "pong");
}

#[tokio::test]
async fn test_get_additional_info_room() {
    let mock_server = MockServer::start().await;

    auth_mock("GET", format!("/api/v1/qiscus/room/{ROOM_ID}/user_info"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"data":{"extras":{"user_properties":[{"key":"ping","value":"pong"}]}}}"#,
            "application/json",
        ))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    let result = client.get_additional_info_room(ROOM_ID).await.unwrap();

    let properties = &result.data.extras.user_properties;
    assert_eq!(properties[0].key, "ping");
    assert_eq!(properties[0].value, "pong");
}

#[tokio::test]
async fn test_create_additional_info_room_merges_existing_properties() {
    let mock_server = MockServer::start().await;

    auth_mock("GET", format!("/api/v1/qiscus/room/{ROOM_ID}/user_info"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"data":{"extras":{"user_properties":[{"key":"existing","value":"kept"}]}}}"#,
            "application/json",
        ))
        .mount(&mock_server)
        .await;

    // The write must carry the new property followed by the existing one.
    auth_mock("POST", format!("/api/v1/qiscus/room/{ROOM_ID}/user_info"))
        .and(body_json(json!({
            "user_properties": [
                {"key": "ping", "value": "pong"},
                {"key": "existing", "value": "kept"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"data":{"extras":{"user_properties":[{"key":"ping","value":"pong"},{"key":"existing","value":"kept"}]}}}"#,
            "application/json",
        ))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    let result = client
        .create_additional_info_room(
            ROOM_ID,
            &CreateAdditionalInfoRoomReq {
                user_properties: vec![UserProperty {
                    key: "ping".to_string(),
                    value: "pong".to_string(),
                }],
            },
        )
        .await
        .unwrap();

    assert_eq!(result.data.extras.user_properties.len(), 2);
}

#[tokio::test]
async fn test_send_message_text_by_bot() {
    let mock_server = MockServer::start().await;

    auth_mock("POST", format!("/{APP_ID}/bot"))
        .and(body_json(json!({
            "sender_email": "test@mail.com",
            "message": "Hello",
            "room_id": ROOM_ID,
            "type": "text"
        })))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    let result = client
        .send_message_text_by_bot(&SendMessageTextByBotReq {
            sender_email: "test@mail.com".to_string(),
            message: "Hello".to_string(),
            room_id: ROOM_ID.to_string(),
        })
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_set_toggle_bot_in_room() {
    let mock_server = MockServer::start().await;

    auth_mock("POST", format!("/bot/{ROOM_ID}/activate"))
        .and(body_json(json!({"is_active": false})))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            format!(r#"{{"data":{{"room_id":"{ROOM_ID}"}}}}"#),
            "application/json",
        ))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    let result = client.set_toggle_bot_in_room(ROOM_ID, false).await.unwrap();

    assert_eq!(result.data.room_id, ROOM_ID);
}

#[tokio::test]
async fn test_get_all_agents() {
    let mock_server = MockServer::start().await;

    auth_mock("GET", "/api/v2/admin/agents")
        .and(query_param("search", "agentsample@mail.com"))
        .and(query_param("scope", "email"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"data":{"agents":[{"name":"Agent Sample","email":"agentsample@mail.com"}]}}"#,
            "application/json",
        ))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    let result = client
        .get_all_agents(&GetAllAgentsReq {
            search: "agentsample@mail.com".to_string(),
            scope: "email".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(result.data.agents[0].name, "Agent Sample");
    assert_eq!(result.data.agents[0].email, "agentsample@mail.com");
}

#[tokio::test]
async fn test_assign_agent_defaults_max_agent() {
    let mock_server = MockServer::start().await;

    auth_mock("POST", "/api/v1/admin/service/assign_agent")
        .and(body_json(json!({
            "room_id": ROOM_ID,
            "agent_id": "1",
            "replace_latest_agent": false,
            "max_agent": 5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"data":{"added_agent":{"id":1,"name":"Agent Sample","email":"agentsample@mail.com"}}}"#,
            "application/json",
        ))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    let result = client
        .assign_agent(&AssignAgentReq {
            room_id: ROOM_ID.to_string(),
            agent_id: "1".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(result.data.added_agent.id, 1);
    assert_eq!(result.data.added_agent.name, "Agent Sample");
    assert_eq!(result.data.added_agent.email, "agentsample@mail.com");
}

#[tokio::test]
async fn test_get_agents_by_division() {
    let mock_server = MockServer::start().await;

    auth_mock("GET", "/api/v2/admin/agents/by_division")
        .and(query_param("division_ids[]", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"data":[{"id":1,"name":"Agent Sample","email":"agentsample@mail.com","user_roles":[{"id":1,"name":"general"}]}]}"#,
            "application/json",
        ))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    let result = client
        .get_agents_by_division(&GetAgentsByDivisionReq {
            division_ids: vec!["1".to_string()],
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(result.data[0].id, 1);
    assert_eq!(result.data[0].name, "Agent Sample");
    assert_eq!(result.data[0].email, "agentsample@mail.com");
    assert_eq!(result.data[0].user_roles[0].id, 1);
    assert_eq!(result.data[0].user_roles[0].name, "general");
}

#[tokio::test]
async fn test_get_all_division_defaults_pagination() {
    let mock_server = MockServer::start().await;

    auth_mock("GET", "/api/v2/divisions")
        .and(query_param("page", "1"))
        .and(query_param("limit", "20"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"data":[{"id":1,"name":"general"}]}"#, "application/json"),
        )
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());

    // page and limit of zero fall back to 1 and 20.
    let result = client
        .get_all_division(&GetAllDivisionReq { page: 0, limit: 0 })
        .await
        .unwrap();

    assert_eq!(result.data[0].id, 1);
    assert_eq!(result.data[0].name, "general");
}

#[tokio::test]
async fn test_mark_as_resolved() {
    let mock_server = MockServer::start().await;

    auth_mock("POST", "/api/v1/admin/service/mark_as_resolved")
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            format!(
                r#"{{"data":{{"service":{{"room_id":"{ROOM_ID}","notes":"test","last_comment_id":"1"}}}}}}"#
            ),
            "application/json",
        ))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    let result = client
        .mark_as_resolved(&MarkAsResolvedReq {
            room_id: ROOM_ID.to_string(),
            notes: "test".to_string(),
            last_comment_id: "1".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(result.data.service.room_id, ROOM_ID);
    assert_eq!(result.data.service.notes, "test");
    assert_eq!(result.data.service.last_comment_id, "1");
}

#[tokio::test]
async fn test_get_all_channels() {
    let mock_server = MockServer::start().await;

    auth_mock("GET", "/api/v2/channels")
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"data":{"qiscus_channels":[{"id":1,"name":"test"}]}}"#,
            "application/json",
        ))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    let result = client.get_all_channels().await.unwrap();

    assert_eq!(result.data.qiscus_channels[0].id, 1);
    assert_eq!(result.data.qiscus_channels[0].name, "test");
}

#[tokio::test]
async fn test_get_room_by_room_id() {
    let mock_server = MockServer::start().await;

    auth_mock("GET", format!("/api/v2/customer_rooms/{ROOM_ID}"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            format!(r#"{{"data":{{"customer_room":{{"room_id":"{ROOM_ID}"}}}}}}"#),
            "application/json",
        ))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server.uri());
    let result = client.get_room_by_room_id(ROOM_ID).await.unwrap();

    assert_eq!(result.data.customer_room.room_id, ROOM_ID);
}
