#![cfg(not(coverage))]

use super::*;
use httpmock::prelude::*;
use serde_json::json;

fn user_json(id: &str, role: &str) -> serde_json::Value {
    json!({
        "id": id,
        "username": "alice",
        "full_name": "Alice Example",
        "role": role,
        "created_at": "2025-01-01T00:00:00Z"
    })
}

fn attendance_json(id: &str, clock_out: Option<&str>) -> serde_json::Value {
    json!({
        "id": id,
        "user_id": "u1",
        "date": "2025-01-02",
        "clock_in_time": "2025-01-02T09:00:00",
        "clock_out_time": clock_out,
        "total_work_hours": null
    })
}

fn leave_request_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "user_id": "u1",
        "user_name": "Alice Example",
        "leave_type": "annual",
        "start_date": "2025-01-10",
        "end_date": "2025-01-12",
        "reason": null,
        "status": status,
        "decision_comment": null,
        "created_at": "2025-01-01T00:00:00Z"
    })
}

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
}

#[tokio::test]
async fn auth_endpoints_return_session_user() {
    let server = MockServer::start_async().await;
    let login = server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/login")
            .json_body(json!({ "username": "alice", "password": "secret-pass" }));
        then.status(200)
            .json_body(json!({ "user": user_json("u1", "admin") }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/register");
        then.status(201)
            .json_body(json!({ "user": user_json("u2", "employee") }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/auth/me");
        then.status(200).json_body(user_json("u1", "admin"));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/logout");
        then.status(204);
    });

    let api = api_client(&server);
    let session = api
        .login(&LoginRequest {
            username: "alice".into(),
            password: "secret-pass".into(),
        })
        .await
        .unwrap();
    assert!(session.user.is_admin());
    login.assert();

    let registered = api
        .register(&RegisterRequest {
            username: "bob".into(),
            password: "secret-pass".into(),
            full_name: "Bob Example".into(),
        })
        .await
        .unwrap();
    assert_eq!(registered.user.role, UserRole::Employee);

    assert_eq!(api.get_me().await.unwrap().id, "u1");
    api.logout().await.unwrap();
}

#[tokio::test]
async fn login_failure_surfaces_backend_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(401)
            .json_body(json!({ "error": "invalid credentials", "code": "INVALID_CREDENTIALS" }));
    });

    let err = api_client(&server)
        .login(&LoginRequest {
            username: "alice".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.error, "invalid credentials");
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn admin_user_endpoints_succeed() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/users");
        then.status(200)
            .json_body(json!([user_json("u1", "admin"), user_json("u2", "employee")]));
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/admin/users")
            .json_body(json!({
                "username": "carol",
                "password": "secret-pass",
                "full_name": "Carol Example",
                "role": "employee"
            }));
        then.status(200).json_body(user_json("u3", "employee"));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE).path("/api/admin/users/u2");
        then.status(204);
    });

    let api = api_client(&server);
    let users = api.list_users().await.unwrap();
    assert_eq!(users.len(), 2);

    let created = api
        .create_user(&CreateUser {
            username: "carol".into(),
            password: "secret-pass".into(),
            full_name: "Carol Example".into(),
            role: UserRole::Employee,
        })
        .await
        .unwrap();
    assert_eq!(created.id, "u3");

    api.delete_user("u2").await.unwrap();
    delete.assert();
}

#[tokio::test]
async fn attendance_endpoints_decode_records() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/attendance/clock-in");
        then.status(200).json_body(attendance_json("a1", None));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/attendance/clock-out");
        then.status(200)
            .json_body(attendance_json("a1", Some("2025-01-02T18:00:00")));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/attendance/me");
        then.status(200)
            .json_body(json!([attendance_json("a1", Some("2025-01-02T18:00:00"))]));
    });

    let api = api_client(&server);
    assert!(api.clock_in().await.unwrap().is_clocked_in());
    assert!(!api.clock_out().await.unwrap().is_clocked_in());
    assert_eq!(api.get_my_attendance().await.unwrap().len(), 1);
}

#[tokio::test]
async fn clock_in_conflict_is_reported_as_api_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/attendance/clock-in");
        then.status(400)
            .json_body(json!({ "error": "Already clocked in today", "code": "BAD_REQUEST" }));
    });

    let err = api_client(&server).clock_in().await.unwrap_err();
    assert_eq!(err.error, "Already clocked in today");
    assert_eq!(err.code, "BAD_REQUEST");
}

#[tokio::test]
async fn leave_request_endpoints_succeed() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/requests/leave")
            .json_body(json!({
                "leave_type": "annual",
                "start_date": "2025-01-10",
                "end_date": "2025-01-12",
                "reason": "Family trip"
            }));
        then.status(200)
            .json_body(leave_request_json("lr1", "pending"));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/requests/leave/me");
        then.status(200)
            .json_body(json!([leave_request_json("lr1", "pending")]));
    });
    let filtered = server.mock(|when, then| {
        when.method(GET)
            .path("/api/admin/requests/leave")
            .query_param("status", "pending");
        then.status(200)
            .json_body(json!([leave_request_json("lr1", "pending")]));
    });
    server.mock(|when, then| {
        when.method(PUT)
            .path("/api/admin/requests/leave/lr1/approve")
            .json_body(json!({ "comment": "Enjoy" }));
        then.status(200)
            .json_body(leave_request_json("lr1", "approved"));
    });
    server.mock(|when, then| {
        when.method(PUT)
            .path("/api/admin/requests/leave/lr2/reject")
            .json_body(json!({}));
        then.status(200)
            .json_body(leave_request_json("lr2", "rejected"));
    });

    let api = api_client(&server);
    let created = api
        .create_leave_request(&CreateLeaveRequest {
            leave_type: LeaveType::Annual,
            start_date: chrono::NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            end_date: chrono::NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
            reason: Some("Family trip".into()),
        })
        .await
        .unwrap();
    assert_eq!(created.status, LeaveStatus::Pending);
    assert_eq!(api.get_my_leave_requests().await.unwrap().len(), 1);

    let pending = api
        .admin_list_leave_requests(Some(LeaveStatus::Pending))
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);
    filtered.assert();

    let approved = api
        .admin_approve_leave_request(
            "lr1",
            &DecisionPayload {
                comment: Some("Enjoy".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(approved.status, LeaveStatus::Approved);

    let rejected = api
        .admin_reject_leave_request("lr2", &DecisionPayload::default())
        .await
        .unwrap();
    assert_eq!(rejected.status, LeaveStatus::Rejected);
}

#[tokio::test]
async fn unreachable_backend_maps_to_request_failed() {
    let api = ApiClient::new_with_base_url("http://127.0.0.1:9/api");
    let err = api.get_me().await.unwrap_err();
    assert_eq!(err.code, "REQUEST_FAILED");
    assert!(err.error.starts_with("Request failed"));
}
