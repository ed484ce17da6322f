//! ReqwestHttpClient against a mockito Bot API server.
//!
//! Paths follow the Bot API format `/bot<token>/<method>`.

use bot_setup::{Configurator, HttpClient, PrettyJson, ReqwestHttpClient, SetupError, TelegramApi};
use mockito::Matcher;

const TEST_BOT_TOKEN: &str = "123:ABC";

fn configurator(server: &mockito::ServerGuard) -> Configurator<ReqwestHttpClient, PrettyJson> {
    Configurator::new(
        ReqwestHttpClient::default(),
        PrettyJson,
        TelegramApi::new(server.url()),
    )
}

/// **Test: setWebhook is POSTed as JSON with the exact body.**
#[tokio::test]
async fn test_set_webhook_over_http() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", format!("/bot{}/setWebhook", TEST_BOT_TOKEN).as_str())
        .match_header("content-type", "application/json")
        .match_body(Matcher::Exact(
            r#"{"url":"https://sms.nk0.uk/","allowed_updates":["message"],"drop_pending_updates":true,"secret_token":"hunter2"}"#
                .to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true,"result":true,"description":"Webhook was set"}"#)
        .create_async()
        .await;

    let reply = configurator(&server)
        .set_webhook(TEST_BOT_TOKEN, "hunter2")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(reply.status, 200);
    assert!(reply.body.contains("\"description\": \"Webhook was set\""));
}

/// **Test: setMyCommands body matches the fixed menu.**
#[tokio::test]
async fn test_set_my_commands_over_http() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", format!("/bot{}/setMyCommands", TEST_BOT_TOKEN).as_str())
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({
            "commands": [
                {"command": "info", "description": "Command device to report current status"},
                {"command": "version", "description": "Query bot version"}
            ]
        })))
        .with_status(200)
        .with_body(r#"{"ok":true,"result":true}"#)
        .create_async()
        .await;

    let reply = configurator(&server)
        .set_my_commands(TEST_BOT_TOKEN)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(reply.body, "{\n  \"ok\": true,\n  \"result\": true\n}");
}

/// **Test: 4xx status is returned by the client, then mapped to an Api error.**
#[tokio::test]
async fn test_unauthorized_over_http() {
    let mut server = mockito::Server::new_async().await;
    let body = r#"{"ok":false,"error_code":401,"description":"Unauthorized"}"#;
    let _mock = server
        .mock("POST", "/botbad/setMyCommands")
        .with_status(401)
        .with_body(body)
        .create_async()
        .await;

    let raw = ReqwestHttpClient::default()
        .post_json(&format!("{}/botbad/setMyCommands", server.url()), "{}".to_string())
        .await
        .unwrap();
    assert_eq!(raw.status, 401);
    assert_eq!(raw.body, body);

    let err = configurator(&server)
        .set_my_commands("bad")
        .await
        .unwrap_err();
    assert!(matches!(err, SetupError::Api { status: 401, .. }));
}

/// **Test: connection refused surfaces as a transport error.**
#[tokio::test]
async fn test_transport_error() {
    let c = Configurator::new(
        ReqwestHttpClient::default(),
        PrettyJson,
        TelegramApi::new("http://127.0.0.1:1"),
    );
    let err = c.set_webhook("T", "S").await.unwrap_err();
    assert!(matches!(err, SetupError::Http(_)));
    assert!(err.response_body().is_none());
}
