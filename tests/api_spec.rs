use axum::body::Bytes;
use axum::http::{Method, StatusCode};
use axum_test::TestServer;
use fieldline::api::{create_router, ALLOW_HEADERS, ALLOW_METHODS};
use fieldline::gateway::Gateway;
use fieldline::models::*;

fn setup() -> TestServer {
    let gateway = Gateway::builtin().expect("Failed to build gateway");
    let app = create_router(gateway);
    TestServer::new(app).expect("Failed to create test server")
}

fn session_request(text: &str) -> SessionRequest {
    SessionRequest {
        session_id: "ATUid_3f1c".to_string(),
        service_code: "*123#".to_string(),
        phone_number: "+254711000222".to_string(),
        text: text.to_string(),
    }
}

fn message_request(text: &str) -> MessageRequest {
    MessageRequest {
        from: "+254711000222".to_string(),
        to: "40404".to_string(),
        text: text.to_string(),
    }
}

async fn dial(server: &TestServer, text: &str) -> SessionResponse {
    let response = server
        .post("/api/v1/ussd")
        .json(&session_request(text))
        .await;
    response.assert_status_ok();
    response.json::<SessionResponse>()
}

async fn send(server: &TestServer, text: &str) -> MessageResponse {
    let response = server
        .post("/api/v1/sms")
        .json(&message_request(text))
        .await;
    response.assert_status_ok();
    response.json::<MessageResponse>()
}

// ============================================================
// Health endpoint
// ============================================================

mod health {
    use super::*;

    #[tokio::test]
    async fn returns_ok() {
        let server = setup();

        let response = server.get("/api/v1/health").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "ok");
    }
}

// ============================================================
// Short-code menu channel
// ============================================================

mod session_channel {
    use super::*;

    #[tokio::test]
    async fn initial_request_lists_top_level_menu() {
        let server = setup();

        let reply = dial(&server, "").await;

        assert!(reply.response.starts_with("CON "));
        let options: Vec<&str> = reply.response.lines().skip(1).collect();
        assert_eq!(options.len(), 6);
        assert!(options.contains(&"1. Agriculture Info"));
        assert!(options.contains(&"0. Exit"));
    }

    #[tokio::test]
    async fn mirrors_request_identifiers() {
        let server = setup();

        let reply = dial(&server, "2").await;

        assert_eq!(reply.session_id, "ATUid_3f1c");
        assert_eq!(reply.service_code, "*123#");
        assert_eq!(reply.phone_number, "+254711000222");
    }

    #[tokio::test]
    async fn branch_selection_continues_session() {
        let server = setup();

        let reply = dial(&server, "1").await;

        assert_eq!(
            reply.response,
            "CON Agriculture Info\n1. Weather Forecast\n2. Market Prices\n3. Farming Tips"
        );
    }

    #[tokio::test]
    async fn terminal_selection_ends_with_weather() {
        let server = setup();

        let reply = dial(&server, "1*1").await;

        assert!(reply.response.starts_with("END "));
        assert!(reply.response.contains("Nairobi: 28°C"));
        assert!(reply.response.contains("Rain expected tomorrow 3PM"));
    }

    #[tokio::test]
    async fn deepest_selection_ends_with_phrases() {
        let server = setup();

        let reply = dial(&server, "4*2*1").await;

        assert!(reply.response.starts_with("END Swahili Phrases:"));
        assert!(reply.response.contains("Thank you - Asante"));
    }

    #[tokio::test]
    async fn unknown_selector_ends_with_invalid_option() {
        let server = setup();

        let reply = dial(&server, "9").await;

        assert_eq!(
            reply.response,
            "END Invalid option. Please try again by dialing *123#"
        );
    }

    #[tokio::test]
    async fn selector_after_terminal_is_invalid() {
        let server = setup();

        let reply = dial(&server, "1*1*1").await;

        assert_eq!(
            reply.response,
            "END Invalid option. Please try again by dialing *123#"
        );
    }

    #[tokio::test]
    async fn exit_ends_session() {
        let server = setup();

        let reply = dial(&server, "0").await;

        assert_eq!(reply.response, "END Thank you for using FieldLine. Goodbye!");
    }

    #[tokio::test]
    async fn resending_same_path_gives_same_response() {
        let server = setup();

        let first = dial(&server, "3*1").await;
        let second = dial(&server, "3*1").await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn missing_text_is_treated_as_initial_request() {
        let server = setup();

        let response = server
            .post("/api/v1/ussd")
            .json(&serde_json::json!({
                "sessionId": "s1",
                "serviceCode": "*123#",
                "phoneNumber": "+254700000000",
            }))
            .await;

        response.assert_status_ok();
        let reply: SessionResponse = response.json();
        assert!(reply.response.starts_with("CON Welcome to FieldLine"));
    }

    #[tokio::test]
    async fn rejects_malformed_json() {
        let server = setup();

        let response = server
            .post("/api/v1/ussd")
            .bytes(Bytes::from_static(b"{\"sessionId\": "))
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert!(body["error"]
            .as_str()
            .unwrap_or_default()
            .starts_with("malformed request"));
    }

    #[tokio::test]
    async fn rejects_wrong_shape() {
        let server = setup();

        let response = server
            .post("/api/v1/ussd")
            .json(&serde_json::json!({ "from": "+254700000000", "text": "1" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rejects_missing_content_type() {
        let server = setup();

        let response = server
            .post("/api/v1/ussd")
            .bytes(Bytes::from_static(
                br#"{"sessionId":"s1","serviceCode":"*123#","phoneNumber":"+254700000000","text":""}"#,
            ))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_is_not_allowed() {
        let server = setup();

        let response = server.get("/api/v1/ussd").await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }
}

// ============================================================
// Message channel
// ============================================================

mod message_channel {
    use super::*;

    #[tokio::test]
    async fn price_question_returns_prices_and_hints() {
        let server = setup();

        let reply = send(&server, "What are maize prices?").await;

        assert!(reply.text.contains("Maize: KES 3,200"));
        assert!(reply.text.contains("Beans: KES 7,500"));
        let hints = reply.text.lines().last().unwrap_or_default();
        assert!(hints.contains("WEATHER"));
        assert!(hints.contains("BORDER"));
        assert!(hints.contains("CULTURE"));
    }

    #[tokio::test]
    async fn reply_is_addressed_back_to_sender() {
        let server = setup();

        let reply = send(&server, "border status").await;

        assert_eq!(reply.to, "+254711000222");
        assert_eq!(reply.from, "40404");
        assert!(reply.text.starts_with("Border Status:"));
    }

    #[tokio::test]
    async fn unmatched_message_echoes_text_and_lists_topics() {
        let server = setup();

        let reply = send(&server, "asdkjhasd").await;

        assert!(reply.text.contains("You asked \"asdkjhasd\""));
        for keyword in [
            "WEATHER",
            "PRICES",
            "BORDER",
            "ROUTES",
            "CULTURE",
            "FARMING",
            "EMERGENCY",
        ] {
            assert!(reply.text.contains(keyword), "missing {keyword}");
        }
    }

    #[tokio::test]
    async fn empty_message_gets_default_reply() {
        let server = setup();

        let reply = send(&server, "").await;

        assert!(reply.text.starts_with("AI Assistant:"));
    }

    #[tokio::test]
    async fn identical_messages_get_identical_replies() {
        let server = setup();

        let first = send(&server, "Any accident on the road?").await;
        let second = send(&server, "Any accident on the road?").await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn rejects_malformed_json() {
        let server = setup();

        let response = server
            .post("/api/v1/sms")
            .bytes(Bytes::from_static(b"not json"))
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rejects_missing_text() {
        let server = setup();

        let response = server
            .post("/api/v1/sms")
            .json(&serde_json::json!({ "from": "+254700000000", "to": "40404" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

// ============================================================
// CORS
// ============================================================

mod cors {
    use super::*;

    async fn assert_preflight(server: &TestServer, path: &str) {
        let response = server.method(Method::OPTIONS, path).await;

        response.assert_status_ok();
        assert_eq!(response.header("access-control-allow-origin"), "*");
        assert_eq!(response.header("access-control-allow-methods"), ALLOW_METHODS);
        assert_eq!(response.header("access-control-allow-headers"), ALLOW_HEADERS);
        assert!(response.text().is_empty());
    }

    #[tokio::test]
    async fn preflight_on_session_endpoint() {
        let server = setup();
        assert_preflight(&server, "/api/v1/ussd").await;
    }

    #[tokio::test]
    async fn preflight_on_message_endpoint() {
        let server = setup();
        assert_preflight(&server, "/api/v1/sms").await;
    }

    #[test]
    fn allow_methods_header_has_expected_value() {
        assert_eq!(ALLOW_METHODS, "GET, POST, OPTIONS");
        assert_eq!(ALLOW_HEADERS, "Content-Type");
    }

    #[tokio::test]
    async fn channel_responses_allow_any_origin() {
        let server = setup();

        let response = server
            .post("/api/v1/ussd")
            .json(&session_request(""))
            .await;

        assert_eq!(response.header("access-control-allow-origin"), "*");
    }

    #[tokio::test]
    async fn error_responses_allow_any_origin() {
        let server = setup();

        let response = server
            .post("/api/v1/sms")
            .bytes(Bytes::from_static(b"{"))
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.header("access-control-allow-origin"), "*");
    }
}
