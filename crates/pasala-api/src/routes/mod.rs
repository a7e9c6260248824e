//! Route definitions
//!
//! API routes are mounted under /api/v1; health probes sit at the root.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{admin, claims, clubs, health, matches, players, results, roster};
use crate::state::AppState;

/// API router (health is exported separately so it bypasses rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Liveness and readiness probes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(match_routes())
        .merge(player_routes())
        .merge(claim_routes())
        .merge(club_routes())
        .merge(admin_routes())
}

/// Matches, their roster and result
fn match_routes() -> Router<AppState> {
    Router::new()
        .route("/matches", post(matches::create_match))
        .route("/matches/quick", post(matches::record_quick_match))
        .route(
            "/matches/:match_id",
            get(matches::get_match).delete(matches::delete_match),
        )
        .route("/matches/:match_id/cancel", post(matches::cancel_match))
        .route("/matches/:match_id/share", get(matches::share_link))
        // Roster
        .route(
            "/matches/:match_id/roster",
            get(roster::get_roster).post(roster::add_player),
        )
        .route(
            "/matches/:match_id/roster/:player_id",
            delete(roster::remove_player),
        )
        // Result
        .route(
            "/matches/:match_id/result",
            get(results::get_result).put(results::submit_result),
        )
}

/// Player identities
fn player_routes() -> Router<AppState> {
    Router::new()
        .route("/players/guests", post(players::create_guest))
        .route(
            "/players/@me",
            get(players::get_my_profile).post(players::create_own_profile),
        )
        .route("/players/:player_id", get(players::get_player))
        .route("/players/:player_id/matches", get(players::list_player_matches))
        .route("/players/:player_id/metrics", get(players::player_metrics))
}

/// Identity claims
fn claim_routes() -> Router<AppState> {
    Router::new()
        .route("/claims", post(claims::claim_profile))
        .route("/claims/candidates", get(claims::claim_candidates))
}

/// Clubs and club claim requests
fn club_routes() -> Router<AppState> {
    Router::new()
        .route("/clubs", post(clubs::create_club))
        .route("/clubs/:club_id", get(clubs::get_club))
        .route("/clubs/:club_id/matches", get(clubs::club_calendar))
        .route("/clubs/:club_id/claim-requests", post(clubs::request_club_claim))
}

/// Moderation endpoints (admin accounts only)
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/club-claims", get(admin::list_pending_club_claims))
        .route(
            "/admin/club-claims/:request_id/resolve",
            post(admin::resolve_club_claim),
        )
        .route("/admin/clubs/candidates", get(admin::club_candidates))
        .route(
            "/admin/matches/:match_id/roster/:player_id",
            delete(admin::remove_roster_entry),
        )
}
