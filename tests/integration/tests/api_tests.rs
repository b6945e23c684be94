//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Group Creation Tests
// ============================================================================

#[tokio::test]
async fn test_create_group() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = server.seed_user(&unique_username()).await.unwrap();
    let token = server.token_for(user_id).unwrap();

    let request = CreateGroupRequest::unique();
    let response = server
        .post_auth("/api/v1/groups", &token, &request)
        .await
        .unwrap();
    let group: GroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(group.name, request.name);
    assert_eq!(group.description, request.description);
    assert_eq!(group.rules, request.rules);
    assert_eq!(group.private, request.private);
    assert_eq!(group.author_id, user_id.to_string());
}

#[tokio::test]
async fn test_create_group_duplicate_name() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = server.seed_user(&unique_username()).await.unwrap();
    let token = server.token_for(user_id).unwrap();

    let request = CreateGroupRequest::unique();

    // First creation
    let response = server
        .post_auth("/api/v1/groups", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Second creation with the same name
    let response = server
        .post_auth("/api/v1/groups", &token, &request)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "GROUP_NAME_TAKEN");
}

#[tokio::test]
async fn test_create_group_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = CreateGroupRequest::unique();
    let response = server.post("/api/v1/groups", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(error.error.code, "MISSING_AUTHORIZATION");
}

#[tokio::test]
async fn test_create_group_invalid_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = CreateGroupRequest::unique();
    let response = server
        .post_auth("/api/v1/groups", "not.a.token", &request)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(error.error.code, "INVALID_TOKEN");
}

#[tokio::test]
async fn test_create_group_expired_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = server.seed_user(&unique_username()).await.unwrap();
    let token = server.expired_token_for(user_id).unwrap();

    let request = CreateGroupRequest::unique();
    let response = server
        .post_auth("/api/v1/groups", &token, &request)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(error.error.code, "TOKEN_EXPIRED");
}

#[tokio::test]
async fn test_create_group_name_too_long() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = server.seed_user(&unique_username()).await.unwrap();
    let token = server.token_for(user_id).unwrap();

    let mut request = CreateGroupRequest::unique();
    request.name = "x".repeat(101);

    let response = server
        .post_auth("/api/v1/groups", &token, &request)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
    assert_eq!(error.error.code, "VALIDATION_ERROR");
}

// ============================================================================
// Group Retrieval Tests
// ============================================================================

#[tokio::test]
async fn test_get_group_by_name() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let username = unique_username();
    let user_id = server.seed_user(&username).await.unwrap();
    let token = server.token_for(user_id).unwrap();

    let request = CreateGroupRequest::unique();
    let response = server
        .post_auth("/api/v1/groups", &token, &request)
        .await
        .unwrap();
    let created: GroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Fetch by name (no auth required)
    let response = server
        .get(&format!("/api/v1/groups/{}", request.name))
        .await
        .unwrap();
    let group: GroupDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(group.id, created.id);
    assert_eq!(group.name, request.name);
    assert_eq!(group.author.id, user_id.to_string());
    assert_eq!(group.author.username, username);
    assert!(group.posts.is_empty());
}

#[tokio::test]
async fn test_get_group_posts_newest_first() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = server.seed_user(&unique_username()).await.unwrap();
    let token = server.token_for(user_id).unwrap();

    let request = CreateGroupRequest::unique();
    let response = server
        .post_auth("/api/v1/groups", &token, &request)
        .await
        .unwrap();
    let created: GroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let first = server
        .seed_post(&created.id, user_id, "first post")
        .await
        .unwrap();
    let second = server
        .seed_post(&created.id, user_id, "second post")
        .await
        .unwrap();

    let response = server
        .get(&format!("/api/v1/groups/{}", request.name))
        .await
        .unwrap();
    let group: GroupDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(group.posts.len(), 2);
    assert_eq!(group.posts[0].id, second.to_string());
    assert_eq!(group.posts[1].id, first.to_string());
    assert_eq!(group.posts[0].author.id, user_id.to_string());
}

#[tokio::test]
async fn test_get_group_absent_returns_null() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get(&format!("/api/v1/groups/no-such-group-{}", unique_suffix()))
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.is_null());
}

// ============================================================================
// Popular Groups Tests
// ============================================================================

#[tokio::test]
async fn test_popular_groups_ordering() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = server.seed_user(&unique_username()).await.unwrap();
    let token = server.token_for(user_id).unwrap();

    let busy_req = CreateGroupRequest::unique();
    let response = server
        .post_auth("/api/v1/groups", &token, &busy_req)
        .await
        .unwrap();
    let busy: GroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let quiet_req = CreateGroupRequest::unique();
    let response = server
        .post_auth("/api/v1/groups", &token, &quiet_req)
        .await
        .unwrap();
    let quiet: GroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    for i in 0..3 {
        server
            .seed_post(&busy.id, user_id, &format!("busy post {i}"))
            .await
            .unwrap();
    }
    server
        .seed_post(&quiet.id, user_id, "quiet post")
        .await
        .unwrap();

    let response = server
        .get("/api/v1/groups/popular?limit=100")
        .await
        .unwrap();
    let popular: Vec<PopularGroupResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let busy_pos = popular.iter().position(|g| g.id == busy.id);
    let quiet_pos = popular.iter().position(|g| g.id == quiet.id);
    assert!(busy_pos.is_some(), "busy group missing from listing");
    assert!(quiet_pos.is_some(), "quiet group missing from listing");
    assert!(
        busy_pos < quiet_pos,
        "group with more posts should rank higher"
    );
}

#[tokio::test]
async fn test_popular_groups_tie_broken_by_name() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = server.seed_user(&unique_username()).await.unwrap();
    let token = server.token_for(user_id).unwrap();

    // Two groups with the same post count (one each)
    let suffix = unique_suffix();
    let early = CreateGroupRequest {
        name: format!("aaa-tie-{suffix}"),
        description: String::new(),
        rules: vec![],
        private: false,
    };
    let late = CreateGroupRequest {
        name: format!("zzz-tie-{suffix}"),
        description: String::new(),
        rules: vec![],
        private: false,
    };

    // Create in reverse alphabetical order so insertion order cannot mask
    // the name tiebreak.
    let response = server.post_auth("/api/v1/groups", &token, &late).await.unwrap();
    let late_group: GroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let response = server.post_auth("/api/v1/groups", &token, &early).await.unwrap();
    let early_group: GroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    server
        .seed_post(&early_group.id, user_id, "post")
        .await
        .unwrap();
    server
        .seed_post(&late_group.id, user_id, "post")
        .await
        .unwrap();

    let response = server
        .get("/api/v1/groups/popular?limit=100")
        .await
        .unwrap();
    let popular: Vec<PopularGroupResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let early_pos = popular.iter().position(|g| g.id == early_group.id);
    let late_pos = popular.iter().position(|g| g.id == late_group.id);
    assert!(early_pos.is_some(), "early group missing from listing");
    assert!(late_pos.is_some(), "late group missing from listing");
    assert!(
        early_pos < late_pos,
        "equal post counts should be ordered by name"
    );
}

#[tokio::test]
async fn test_popular_groups_limit_zero_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/groups/popular?limit=0").await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
    assert_eq!(error.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_popular_groups_limit_too_high_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get("/api/v1/groups/popular?limit=101")
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Group Update Tests
// ============================================================================

#[tokio::test]
async fn test_update_group() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = server.seed_user(&unique_username()).await.unwrap();
    let token = server.token_for(user_id).unwrap();

    let request = CreateGroupRequest::unique();
    let response = server
        .post_auth("/api/v1/groups", &token, &request)
        .await
        .unwrap();
    let created: GroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let update = UpdateGroupRequest {
        description: "Updated description".to_string(),
        rules: vec!["New rule".to_string(), "Another rule".to_string()],
    };
    let response = server
        .patch_auth(&format!("/api/v1/groups/{}", request.name), &token, &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Re-fetch and verify only description and rules changed
    let response = server
        .get(&format!("/api/v1/groups/{}", request.name))
        .await
        .unwrap();
    let group: GroupDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(group.id, created.id);
    assert_eq!(group.name, request.name);
    assert_eq!(group.private, request.private);
    assert_eq!(group.description, update.description);
    assert_eq!(group.rules, update.rules);
}

#[tokio::test]
async fn test_update_group_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = server.seed_user(&unique_username()).await.unwrap();
    let token = server.token_for(user_id).unwrap();

    let update = UpdateGroupRequest {
        description: "whatever".to_string(),
        rules: vec![],
    };
    let response = server
        .patch_auth(
            &format!("/api/v1/groups/no-such-group-{}", unique_suffix()),
            &token,
            &update,
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "GROUP_NOT_FOUND");
}

#[tokio::test]
async fn test_update_group_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = server.seed_user(&unique_username()).await.unwrap();
    let token = server.token_for(user_id).unwrap();

    let request = CreateGroupRequest::unique();
    let response = server
        .post_auth("/api/v1/groups", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let update = UpdateGroupRequest {
        description: "nope".to_string(),
        rules: vec![],
    };
    let response = server
        .patch(&format!("/api/v1/groups/{}", request.name), &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Preference Tests
// ============================================================================

#[tokio::test]
async fn test_preferences_default_dark() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = server.seed_user(&unique_username()).await.unwrap();
    let token = server.token_for(user_id).unwrap();

    let response = server
        .get_auth("/api/v1/users/@me/preferences", &token)
        .await
        .unwrap();
    let prefs: PreferencesResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(prefs.theme, "dark");
}

#[tokio::test]
async fn test_update_preferences() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = server.seed_user(&unique_username()).await.unwrap();
    let token = server.token_for(user_id).unwrap();

    let update = UpdatePreferencesRequest {
        theme: "light".to_string(),
    };
    let response = server
        .patch_auth("/api/v1/users/@me/preferences", &token, &update)
        .await
        .unwrap();
    let prefs: PreferencesResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(prefs.theme, "light");

    // GET reflects the new value
    let response = server
        .get_auth("/api/v1/users/@me/preferences", &token)
        .await
        .unwrap();
    let prefs: PreferencesResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(prefs.theme, "light");
}

#[tokio::test]
async fn test_update_preferences_invalid_theme() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = server.seed_user(&unique_username()).await.unwrap();
    let token = server.token_for(user_id).unwrap();

    let update = UpdatePreferencesRequest {
        theme: "sepia".to_string(),
    };
    let response = server
        .patch_auth("/api/v1/users/@me/preferences", &token, &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_preferences_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/users/@me/preferences").await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(error.error.code, "MISSING_AUTHORIZATION");
}

#[tokio::test]
async fn test_preferences_unknown_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    // Token for a user that was never seeded
    let token = server
        .token_for(commune_core::Snowflake::new(999_999_999_999))
        .unwrap();

    let response = server
        .get_auth("/api/v1/users/@me/preferences", &token)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "USER_NOT_FOUND");
}
