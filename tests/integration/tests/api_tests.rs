//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET (ADMIN_USERNAME/ADMIN_PASSWORD optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use uuid::Uuid;

/// Admin creates a blog with one post; returns the post
async fn seed_post(server: &TestServer) -> PostView {
    let response = server
        .admin_post("/api/sa/blogs", &BlogInput::unique())
        .await
        .unwrap();
    let blog: BlogView = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .admin_post(&format!("/api/sa/blogs/{}/posts", blog.id), &PostInput::sample())
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn set_post_status(server: &TestServer, post_id: &str, token: &str, status: &str) {
    let response = server
        .put(
            &format!("/api/posts/{post_id}/like-status"),
            Some(token),
            &LikeStatusInput::new(status),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

async fn view_post(server: &TestServer, post_id: &str, token: Option<&str>) -> PostView {
    let response = server
        .get(&format!("/api/posts/{post_id}"), token)
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready", None).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_login_and_me() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (registration, tokens) = server.register_and_login().await.unwrap();

    let response = server
        .get("/api/auth/me", Some(&tokens.access_token))
        .await
        .unwrap();
    let me: Me = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.login, registration.login);
    assert_eq!(me.email, registration.email);
}

#[tokio::test]
async fn test_register_taken_login_is_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (registration, _) = server.register_and_login().await.unwrap();

    let response = server
        .post("/api/auth/registration", None, &registration)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login = LoginRequest {
        login_or_email: "nobody".to_string(),
        password: "wrongpass".to_string(),
    };

    let response = server.post("/api/auth/login", None, &login).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = server.register_and_login().await.unwrap();

    let body = serde_json::json!({ "refreshToken": tokens.refresh_token });
    let response = server
        .post("/api/auth/refresh-token", None, &body)
        .await
        .unwrap();
    let refreshed: AuthTokens = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!refreshed.access_token.is_empty());
}

// ============================================================================
// Post Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_post_like_status_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let post = seed_post(&server).await;
    let (_, tokens) = server.register_and_login().await.unwrap();
    let token = tokens.access_token.as_str();

    let fresh = view_post(&server, &post.id, Some(token)).await;
    assert_eq!(fresh.extended_likes_info.likes_count, 0);
    assert_eq!(fresh.extended_likes_info.my_status, "None");

    set_post_status(&server, &post.id, token, "Like").await;
    let liked = view_post(&server, &post.id, Some(token)).await;
    assert_eq!(liked.extended_likes_info.likes_count, 1);
    assert_eq!(liked.extended_likes_info.my_status, "Like");

    set_post_status(&server, &post.id, token, "Dislike").await;
    let disliked = view_post(&server, &post.id, Some(token)).await;
    assert_eq!(disliked.extended_likes_info.likes_count, 0);
    assert_eq!(disliked.extended_likes_info.dislikes_count, 1);
    assert_eq!(disliked.extended_likes_info.my_status, "Dislike");

    // Clearing twice succeeds both times
    set_post_status(&server, &post.id, token, "None").await;
    set_post_status(&server, &post.id, token, "None").await;
    let cleared = view_post(&server, &post.id, Some(token)).await;
    assert_eq!(cleared.extended_likes_info.likes_count, 0);
    assert_eq!(cleared.extended_likes_info.dislikes_count, 0);
    assert_eq!(cleared.extended_likes_info.my_status, "None");
}

#[tokio::test]
async fn test_newest_likes_are_three_most_recent() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let post = seed_post(&server).await;

    let mut users = Vec::new();
    for _ in 0..4 {
        users.push(server.register_and_login().await.unwrap());
    }
    let login = |i: usize| users[i].0.login.as_str();
    let token = |i: usize| users[i].1.access_token.as_str();

    for i in 0..3 {
        set_post_status(&server, &post.id, token(i), "Like").await;
    }
    let view = view_post(&server, &post.id, None).await;
    assert_eq!(view.extended_likes_info.likes_count, 3);
    assert_eq!(
        view.extended_likes_info.newest_logins(),
        vec![login(2), login(1), login(0)]
    );

    set_post_status(&server, &post.id, token(3), "Like").await;
    let view = view_post(&server, &post.id, None).await;
    assert_eq!(view.extended_likes_info.likes_count, 4);
    assert_eq!(
        view.extended_likes_info.newest_logins(),
        vec![login(3), login(2), login(1)]
    );

    // A dislike drops out of the newest likes
    set_post_status(&server, &post.id, token(2), "Dislike").await;
    let view = view_post(&server, &post.id, None).await;
    assert_eq!(view.extended_likes_info.likes_count, 3);
    assert_eq!(view.extended_likes_info.dislikes_count, 1);
    assert_eq!(
        view.extended_likes_info.newest_logins(),
        vec![login(3), login(1), login(0)]
    );
    assert_eq!(view.extended_likes_info.my_status, "None");
}

#[tokio::test]
async fn test_post_list_carries_viewer_status() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let post = seed_post(&server).await;
    let (_, tokens) = server.register_and_login().await.unwrap();
    set_post_status(&server, &post.id, &tokens.access_token, "Dislike").await;

    let response = server
        .get(
            &format!("/api/blogs/{}/posts", post.blog_id),
            Some(&tokens.access_token),
        )
        .await
        .unwrap();
    let page: Page<PostView> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.total_count, 1);
    let listed = &page.items[0];
    assert_eq!(listed.id, post.id);
    assert_eq!(listed.extended_likes_info.dislikes_count, 1);
    assert_eq!(listed.extended_likes_info.my_status, "Dislike");
}

#[tokio::test]
async fn test_like_status_rejections() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let post = seed_post(&server).await;
    let (_, tokens) = server.register_and_login().await.unwrap();
    let token = Some(tokens.access_token.as_str());

    let response = server
        .put(
            &format!("/api/posts/{}/like-status", post.id),
            None,
            &LikeStatusInput::new("Like"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .put(
            &format!("/api/posts/{}/like-status", post.id),
            token,
            &LikeStatusInput::new("Love"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .put(
            &format!("/api/posts/{}/like-status", Uuid::new_v4()),
            token,
            &LikeStatusInput::new("Like"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_deleted_post_is_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let post = seed_post(&server).await;

    let response = server
        .admin_delete(&format!("/api/sa/blogs/{}/posts/{}", post.blog_id, post.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/posts/{}", post.id), None)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_likes_and_ownership() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let post = seed_post(&server).await;
    let (author, author_tokens) = server.register_and_login().await.unwrap();
    let (_, reader_tokens) = server.register_and_login().await.unwrap();

    let response = server
        .post(
            &format!("/api/posts/{}/comments", post.id),
            Some(&author_tokens.access_token),
            &CommentInput::sample(),
        )
        .await
        .unwrap();
    let comment: CommentView = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comment.commentator_info.user_login, author.login);
    assert_eq!(comment.likes_info.likes_count, 0);

    let response = server
        .put(
            &format!("/api/comments/{}/like-status", comment.id),
            Some(&reader_tokens.access_token),
            &LikeStatusInput::new("Like"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(
            &format!("/api/comments/{}", comment.id),
            Some(&reader_tokens.access_token),
        )
        .await
        .unwrap();
    let seen: CommentView = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(seen.likes_info.likes_count, 1);
    assert_eq!(seen.likes_info.my_status, "Like");

    let response = server
        .get(&format!("/api/comments/{}", comment.id), None)
        .await
        .unwrap();
    let anonymous: CommentView = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(anonymous.likes_info.my_status, "None");

    // Only the author may delete
    let response = server
        .delete(
            &format!("/api/comments/{}", comment.id),
            Some(&reader_tokens.access_token),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .delete(
            &format!("/api/comments/{}", comment.id),
            Some(&author_tokens.access_token),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_comment_of_deleted_post_is_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let post = seed_post(&server).await;
    let (_, tokens) = server.register_and_login().await.unwrap();

    let response = server
        .post(
            &format!("/api/posts/{}/comments", post.id),
            Some(&tokens.access_token),
            &CommentInput::sample(),
        )
        .await
        .unwrap();
    let comment: CommentView = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .admin_delete(&format!("/api/sa/blogs/{}/posts/{}", post.blog_id, post.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/comments/{}", comment.id), None)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .put(
            &format!("/api/comments/{}/like-status", comment.id),
            Some(&tokens.access_token),
            &LikeStatusInput::new("Like"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
