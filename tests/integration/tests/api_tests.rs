//! API Integration Tests
//!
//! These tests require a running PostgreSQL instance reachable through
//! `DATABASE_URL`. Migrations run on server start.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

async fn create_match(server: &TestServer, token: &str, body: &CreateMatchBody) -> MatchBody {
    let response = server
        .post_auth("/api/v1/matches", token, body)
        .await
        .expect("Request failed");
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn create_guest(server: &TestServer, token: &str) -> PlayerBody {
    let response = server
        .post_auth("/api/v1/players/guests", token, &GuestBody::unique())
        .await
        .expect("Request failed");
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn add_to_roster(
    server: &TestServer,
    token: &str,
    match_id: &str,
    player_id: &str,
    team: &'static str,
) -> reqwest::Response {
    let body = RosterBody {
        player_id: player_id.to_string(),
        team,
    };
    server
        .post_auth(&format!("/api/v1/matches/{match_id}/roster"), token, &body)
        .await
        .expect("Request failed")
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth and Path Tests
// ============================================================================

#[tokio::test]
async fn test_create_match_requires_auth() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .client
        .post(format!("{}/api/v1/matches", server.base_url()))
        .json(&CreateMatchBody::doubles())
        .send()
        .await
        .expect("Request failed");

    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "MISSING_AUTHORIZATION");
}

#[tokio::test]
async fn test_invalid_token_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get_auth("/api/v1/players/@me", "not-a-token")
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_malformed_match_id() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/matches/12345").await.expect("Request failed");

    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_PATH_PARAMETER");
}

// ============================================================================
// Match and Roster Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_view_match_anonymously() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.new_account();

    let created = create_match(&server, &token, &CreateMatchBody::doubles()).await;
    assert_eq!(created.status, "scheduled");
    assert_eq!(created.team_capacity, 2);

    let response = server
        .get(&format!("/api/v1/matches/{}", created.id))
        .await
        .expect("Request failed");
    let detail: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail["id"], json!(created.id));
    assert!(detail["result"].is_null());
}

#[tokio::test]
async fn test_venue_becomes_club() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.new_account();

    let venue = format!("Integration Padel {}", unique_suffix());
    let body = CreateMatchBody {
        venue: Some(venue),
        ..CreateMatchBody::doubles()
    };
    let created = create_match(&server, &token, &body).await;
    let club_id = created.club_id.expect("venue should resolve to a club");

    let response = server
        .get(&format!("/api/v1/clubs/{club_id}"))
        .await
        .expect("Request failed");
    let club: ClubBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(club.claim_status, "unclaimed");
}

#[tokio::test]
async fn test_roster_capacity_and_duplicates() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.new_account();
    let game = create_match(&server, &token, &CreateMatchBody::singles()).await;

    let first = create_guest(&server, &token).await;
    let second = create_guest(&server, &token).await;

    let response = add_to_roster(&server, &token, &game.id, &first.id, "A").await;
    let roster: RosterResponseBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(roster.team_a.len(), 1);
    assert_eq!(roster.team_a[0].player_id, first.id);

    let response = add_to_roster(&server, &token, &game.id, &second.id, "A").await;
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "CAPACITY_EXCEEDED");

    let response = add_to_roster(&server, &token, &game.id, &first.id, "B").await;
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "DUPLICATE_PLAYER");
}

#[tokio::test]
async fn test_stranger_cannot_edit_roster() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = server.new_account();
    let (_, stranger) = server.new_account();

    let game = create_match(&server, &owner, &CreateMatchBody::doubles()).await;
    let guest = create_guest(&server, &stranger).await;

    let response = add_to_roster(&server, &stranger, &game.id, &guest.id, "B").await;
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "NOT_MATCH_PARTICIPANT");
}

// ============================================================================
// Result Tests
// ============================================================================

#[tokio::test]
async fn test_result_requires_both_teams_then_completes() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.new_account();
    let game = create_match(&server, &token, &CreateMatchBody::singles()).await;
    let path = format!("/api/v1/matches/{}/result", game.id);

    let first = create_guest(&server, &token).await;
    let response = add_to_roster(&server, &token, &game.id, &first.id, "A").await;
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let result = ResultBody::sets(&[(6, 3), (6, 4)]);
    let response = server.put_auth(&path, &token, &result).await.expect("Request failed");
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "ROSTER_INCOMPLETE");

    let second = create_guest(&server, &token).await;
    let response = add_to_roster(&server, &token, &game.id, &second.id, "B").await;
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.put_auth(&path, &token, &result).await.expect("Request failed");
    let stored: ResultResponseBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stored.winner_team, "A");
    assert_eq!((stored.sets_won_a, stored.sets_won_b), (2, 0));

    let response = server
        .get(&format!("/api/v1/matches/{}", game.id))
        .await
        .expect("Request failed");
    let detail: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail["status"], "completed");
    assert_eq!(detail["result"]["winner_team"], "A");

    let response = server
        .get(&format!("/api/v1/players/{}/metrics", first.id))
        .await
        .expect("Request failed");
    let metrics: MetricsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(metrics.matches_played, 1);
    assert_eq!(metrics.wins, 1);
    assert!(metrics.pasala_index > 50);
}

#[tokio::test]
async fn test_result_absent_is_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.new_account();
    let game = create_match(&server, &token, &CreateMatchBody::doubles()).await;

    let response = server
        .get(&format!("/api/v1/matches/{}/result", game.id))
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_tied_result_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.new_account();
    let game = create_match(&server, &token, &CreateMatchBody::singles()).await;
    for team in ["A", "B"] {
        let guest = create_guest(&server, &token).await;
        let response = add_to_roster(&server, &token, &game.id, &guest.id, team).await;
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .put_auth(
            &format!("/api/v1/matches/{}/result", game.id),
            &token,
            &ResultBody::sets(&[(6, 3), (3, 6)]),
        )
        .await
        .expect("Request failed");
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "AMBIGUOUS_RESULT");
}

#[tokio::test]
async fn test_non_numeric_scores_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.new_account();
    let game = create_match(&server, &token, &CreateMatchBody::singles()).await;

    let body = json!({ "sets": [{ "a": "six", "b": 4 }] });
    let response = server
        .put_auth(&format!("/api/v1/matches/{}/result", game.id), &token, &body)
        .await
        .expect("Request failed");
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_SCORES");

    let body = json!({
        "max_players": 2,
        "team_a": [{ "guest_name": "Ana Typo" }],
        "team_b": [{ "guest_name": "Bea Typo" }],
        "sets": [{ "a": 6, "b": -1.5 }]
    });
    let response = server
        .post_auth("/api/v1/matches/quick", &token, &body)
        .await
        .expect("Request failed");
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_SCORES");
}

#[tokio::test]
async fn test_cancelled_match_roster_is_frozen() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.new_account();
    let game = create_match(&server, &token, &CreateMatchBody::singles()).await;
    let guest = create_guest(&server, &token).await;
    let response = add_to_roster(&server, &token, &game.id, &guest.id, "A").await;
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(&format!("/api/v1/matches/{}/cancel", game.id), &token, &json!({}))
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/matches/{}/roster/{}", game.id, guest.id), &token)
        .await
        .expect("Request failed");
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "MATCH_CANCELLED");
}

#[tokio::test]
async fn test_quick_match_creates_guests() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.new_account();

    let body = json!({
        "max_players": 4,
        "team_a": [{ "guest_name": "Ana Quick" }, { "guest_name": "Bea Quick" }],
        "team_b": [{ "guest_name": "Carla Quick" }, { "guest_name": "Dana Quick" }],
        "sets": [{ "a": 4, "b": 6 }, { "a": 3, "b": 6 }]
    });
    let response = server
        .post_auth("/api/v1/matches/quick", &token, &body)
        .await
        .expect("Request failed");
    let recorded: serde_json::Value = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(recorded["status"], "completed");
    assert_eq!(recorded["created_guests"].as_array().map(Vec::len), Some(4));
    assert_eq!(recorded["result"]["winner_team"], "B");
    assert_eq!(recorded["roster"]["team_b"].as_array().map(Vec::len), Some(2));
}

// ============================================================================
// Claim Tests
// ============================================================================

#[tokio::test]
async fn test_claim_guest_once() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, organizer) = server.new_account();
    let (claimer_id, claimer) = server.new_account();
    let (_, latecomer) = server.new_account();

    let guest = create_guest(&server, &organizer).await;
    let claim = ClaimBody {
        target_player_id: guest.id.clone(),
        match_id: None,
    };

    let response = server
        .post_auth("/api/v1/claims", &claimer, &claim)
        .await
        .expect("Request failed");
    let profile: OwnProfileBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.id, guest.id);
    assert_eq!(profile.user_id, Some(claimer_id.to_string()));
    assert!(!profile.is_guest);

    let response = server
        .post_auth("/api/v1/claims", &latecomer, &claim)
        .await
        .expect("Request failed");
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "PROFILE_ALREADY_CLAIMED");

    let response = server
        .get_auth("/api/v1/players/@me", &claimer)
        .await
        .expect("Request failed");
    let mine: OwnProfileBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(mine.id, guest.id);

    let response = server
        .get(&format!("/api/v1/players/{}", guest.id))
        .await
        .expect("Request failed");
    let public: PlayerBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(public.claimed);
}

#[tokio::test]
async fn test_claim_from_match_requires_roster() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, organizer) = server.new_account();
    let (_, claimer) = server.new_account();

    let game = create_match(&server, &organizer, &CreateMatchBody::doubles()).await;
    let guest = create_guest(&server, &organizer).await;

    let response = server
        .post_auth(
            "/api/v1/claims",
            &claimer,
            &ClaimBody {
                target_player_id: guest.id,
                match_id: Some(game.id),
            },
        )
        .await
        .expect("Request failed");
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "CLAIM_NOT_ALLOWED");
}

// ============================================================================
// Club Claim Tests
// ============================================================================

#[tokio::test]
async fn test_club_claim_moderation() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = server.new_account();
    let admin = server.admin_token();

    let response = server
        .post_auth(
            "/api/v1/clubs",
            &owner,
            &CreateClubBody {
                name: format!("Moderated Club {}", unique_suffix()),
            },
        )
        .await
        .expect("Request failed");
    let club: ClubBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/clubs/{}/claim-requests", club.id),
            &owner,
            &ClubClaimBody::sample(),
        )
        .await
        .expect("Request failed");
    let request: ClubClaimRequestBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(request.status, "pending");

    // A second request while the first is in review
    let response = server
        .post_auth(
            &format!("/api/v1/clubs/{}/claim-requests", club.id),
            &owner,
            &ClubClaimBody::sample(),
        )
        .await
        .expect("Request failed");
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "CLUB_CLAIM_IN_REVIEW");

    let resolve_path = format!("/api/v1/admin/club-claims/{}/resolve", request.id);
    let approve = ResolveBody {
        decision: "approved",
    };

    let response = server
        .post_auth(&resolve_path, &owner, &approve)
        .await
        .expect("Request failed");
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "ADMIN_ONLY");

    let response = server
        .get_auth("/api/v1/admin/club-claims", &admin)
        .await
        .expect("Request failed");
    let queue: DataEnvelope<Vec<ClubClaimRequestBody>> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(queue.data.iter().any(|pending| pending.id == request.id));

    let response = server
        .post_auth(&resolve_path, &admin, &approve)
        .await
        .expect("Request failed");
    let resolved: ClubClaimRequestBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(resolved.status, "approved");

    let response = server
        .get(&format!("/api/v1/clubs/{}", club.id))
        .await
        .expect("Request failed");
    let club: ClubBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(club.claim_status, "claimed");

    let response = server
        .post_auth(&resolve_path, &admin, &approve)
        .await
        .expect("Request failed");
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "CLAIM_ALREADY_RESOLVED");
}

// ============================================================================
// Share Tests
// ============================================================================

#[tokio::test]
async fn test_share_link() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.new_account();
    let game = create_match(&server, &token, &CreateMatchBody::doubles()).await;

    let response = server
        .get(&format!("/api/v1/matches/{}/share", game.id))
        .await
        .expect("Request failed");
    let share: ShareBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(share.url, format!("https://pasala.test/m/{}", game.id));
    assert!(share.whatsapp_url.starts_with("https://wa.me/?text="));
}
