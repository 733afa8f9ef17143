use axum::http::StatusCode;
use axum_test::TestServer;
use launch_quest::api::create_router;
use launch_quest::services::Planner;
use serde_json::json;
use serial_test::serial;

fn setup() -> TestServer {
    let app = create_router(Planner::new());
    TestServer::new(app).expect("Failed to create test server")
}

mod health {
    use super::*;

    #[tokio::test]
    async fn reports_ok() {
        let server = setup();
        let response = server.get("/api/health").await;
        response.assert_status_ok();
        response.assert_json(&json!({ "status": "ok" }));
    }
}

mod plan {
    use super::*;

    #[tokio::test]
    async fn rejects_missing_description() {
        let server = setup();
        let response = server.post("/api/plan").json(&json!({})).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert!(body["error"].as_str().unwrap().contains("description"));
    }

    #[tokio::test]
    async fn rejects_blank_description() {
        let server = setup();
        let response = server
            .post("/api/plan")
            .json(&json!({ "description": "   " }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    #[serial]
    async fn surfaces_missing_credential_as_server_error() {
        // An empty override does not count as a credential, and the env var
        // for the routed family is cleared, so the call fails before any
        // network activity. Serialized because the removal is process-wide.
        std::env::remove_var("GEMINI_API_KEY");
        let server = setup();
        let response = server
            .post("/api/plan")
            .json(&json!({
                "description": "A bakery marketplace",
                "model": "gemini-3-flash-preview",
                "apiKeys": { "gemini": "" }
            }))
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = response.json();
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("API key is missing for provider: google"));
    }
}

mod breakdown {
    use super::*;

    #[tokio::test]
    async fn rejects_missing_task_title() {
        let server = setup();
        let response = server
            .post("/api/task/breakdown")
            .json(&json!({ "taskDetail": "detail without a title" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert!(body["error"].as_str().unwrap().contains("task title"));
    }
}

mod execute {
    use super::*;

    #[tokio::test]
    async fn rejects_missing_task() {
        let server = setup();
        let response = server
            .post("/api/execute")
            .json(&json!({ "projectContext": "some context" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert!(body["error"].as_str().unwrap().contains("task"));
    }
}
