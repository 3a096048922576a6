#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use base64::{engine::general_purpose, Engine as _};
use http_body_util::BodyExt;
use orgchart_frontend::config::Settings;
use orgchart_frontend::startup::build_router;
use orgchart_frontend::AppState;
use serde_json::{json, Value};

/// Router with default settings: `admin` and `nodal_officer` may enter.
pub fn test_app() -> Router {
    let settings: Settings = serde_json::from_value(json!({})).expect("default settings");
    build_router(AppState::new(settings))
}

/// Unsigned token carrying the given role claims.
pub fn token_with_roles(roles: &[&str]) -> String {
    let payload = json!({ "sub": "user_123", "roles": roles, "exp": 9999999999_i64 });
    format!(
        "eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9.{}.signature",
        general_purpose::URL_SAFE_NO_PAD.encode(payload.to_string())
    )
}

pub fn json_post(uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Nodal Officer (1) -> IT (2) -> HOD (3) -> categories 4, 5; plus Estate (6).
pub fn grievance_tree() -> Value {
    json!({
        "id": 1,
        "groupName": "Nodal Office",
        "isRoleGroup": true,
        "roleId": 4,
        "childGroups": [
            {
                "id": 2,
                "groupName": "IT",
                "roleId": null,
                "childGroups": [
                    {
                        "id": 3,
                        "groupName": "HOD IT",
                        "isRoleGroup": true,
                        "roleId": 6,
                        "mappedUser": [
                            {"userCode": "E100", "userDetail": "A. Kumar", "departments": ["IT"]}
                        ],
                        "childGroups": [
                            {"id": 4, "groupName": "Network", "isServiceCategory": true},
                            {"id": 5, "groupName": "Hardware", "isServiceCategory": true}
                        ]
                    }
                ]
            },
            {"id": 6, "groupName": "Estate", "childGroups": []}
        ]
    })
}
