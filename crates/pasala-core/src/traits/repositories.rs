//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Methods documented as atomic must perform their
//! check and write in a single transaction or guarded statement; services rely on
//! that instead of holding locks themselves.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{ClaimRequestStatus, Club, ClubClaimRequest, Match, MatchResult, Player, RosterEntry};
use crate::error::DomainError;
use crate::value_objects::{
    AccountId, ClaimRequestId, ClubId, MatchId, PlayerId, RosterRequirement, Team,
};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// A completed match seen from one player's side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedMatch {
    pub match_id: MatchId,
    pub scheduled_at: DateTime<Utc>,
    pub team: Team,
    pub result: MatchResult,
}

impl PlayedMatch {
    #[inline]
    pub fn won(&self) -> bool {
        self.result.winner_team == self.team
    }
}

/// Outcome of the guarded ownership write on a player identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// Ownership transferred; the updated identity
    Claimed(Player),
    /// Target already had an owner; nothing changed
    AlreadyClaimed,
    /// Target holds no active entry in the given match
    NotRostered,
    /// Target does not exist or is deleted
    NotFound,
}

// ============================================================================
// Match Repository
// ============================================================================

#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Find a non-deleted match by ID
    async fn find_by_id(&self, id: MatchId) -> RepoResult<Option<Match>>;

    /// Create a new match with an empty roster
    async fn create(&self, game: &Match) -> RepoResult<()>;

    /// Create match, roster and result in one transaction (quick record flow)
    async fn create_recorded(
        &self,
        game: &Match,
        roster: &[RosterEntry],
        result: &MatchResult,
    ) -> RepoResult<()>;

    /// Set status to cancelled
    async fn cancel(&self, id: MatchId) -> RepoResult<()>;

    /// Soft delete a match
    async fn delete(&self, id: MatchId) -> RepoResult<()>;

    /// Non-deleted matches the player is rostered in, most recent first
    async fn find_by_player(&self, player_id: PlayerId, limit: i64) -> RepoResult<Vec<Match>>;

    /// Non-deleted matches at a club, soonest first
    async fn find_by_club(&self, club_id: ClubId, limit: i64) -> RepoResult<Vec<Match>>;
}

// ============================================================================
// Roster Repository
// ============================================================================

#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Active entries of a match in join order
    async fn list(&self, match_id: MatchId) -> RepoResult<Vec<RosterEntry>>;

    /// Whether the player holds an active entry in the match
    async fn is_rostered(&self, match_id: MatchId, player_id: PlayerId) -> RepoResult<bool>;

    /// Add an entry. Atomic: the match row is locked while capacity and duplicates
    /// are checked with `Match::check_roster_slot`.
    ///
    /// Fails with `MatchNotFound`, `MatchCancelled`, `DuplicatePlayer` or
    /// `CapacityExceeded`.
    async fn add(&self, entry: &RosterEntry) -> RepoResult<()>;

    /// Soft delete the active entry. Returns `false` when there was none.
    ///
    /// Takes the same match row lock as `add` and `ResultRepository::upsert`.
    /// Fails with `MatchNotFound` or `MatchCancelled`.
    async fn remove(&self, match_id: MatchId, player_id: PlayerId) -> RepoResult<bool>;
}

// ============================================================================
// Result Repository
// ============================================================================

#[async_trait]
pub trait ResultRepository: Send + Sync {
    /// Stored result of a match
    async fn find_by_match(&self, match_id: MatchId) -> RepoResult<Option<MatchResult>>;

    /// Insert or replace the result and mark the match completed, atomically.
    /// The active roster is counted under the match row lock and must satisfy
    /// `requirement`.
    ///
    /// Fails with `MatchNotFound`, `MatchCancelled` or `RosterIncomplete`.
    async fn upsert(&self, result: &MatchResult, requirement: RosterRequirement) -> RepoResult<()>;

    /// Completed, non-cancelled, non-deleted matches of a player, most recent first
    async fn history_for_player(&self, player_id: PlayerId) -> RepoResult<Vec<PlayedMatch>>;
}

// ============================================================================
// Player Repository
// ============================================================================

#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Find a non-deleted player by ID
    async fn find_by_id(&self, id: PlayerId) -> RepoResult<Option<Player>>;

    /// Find several players at once; missing ids are skipped
    async fn find_by_ids(&self, ids: &[PlayerId]) -> RepoResult<Vec<Player>>;

    /// Identity owned by an account
    async fn find_by_user(&self, account: AccountId) -> RepoResult<Option<Player>>;

    /// Create a player. An owned identity for an account that already has one
    /// fails with `UserAlreadyHasProfile`.
    async fn create(&self, player: &Player) -> RepoResult<()>;

    /// Transfer an unclaimed identity to `account`.
    ///
    /// Atomic guarded update: succeeds only when the target is unowned and, when
    /// `match_context` is given, rostered in that match. A second identity for the
    /// same account fails with `UserAlreadyHasProfile`.
    async fn claim(
        &self,
        id: PlayerId,
        account: AccountId,
        match_context: Option<MatchId>,
    ) -> RepoResult<ClaimOutcome>;

    /// Unclaimed identities whose normalized name contains any of the fragments
    async fn find_unclaimed_by_name(
        &self,
        fragments: &[String],
        limit: i64,
    ) -> RepoResult<Vec<Player>>;
}

// ============================================================================
// Club Repository
// ============================================================================

#[async_trait]
pub trait ClubRepository: Send + Sync {
    /// Find a non-deleted club by ID
    async fn find_by_id(&self, id: ClubId) -> RepoResult<Option<Club>>;

    /// Find a club with exactly this normalized name
    async fn find_by_normalized_name(&self, normalized_name: &str) -> RepoResult<Option<Club>>;

    /// Create a new club
    async fn create(&self, club: &Club) -> RepoResult<()>;

    /// Clubs whose normalized name contains any of the fragments
    async fn find_by_name(
        &self,
        fragments: &[String],
        exclude: Option<ClubId>,
        limit: i64,
    ) -> RepoResult<Vec<Club>>;
}

// ============================================================================
// Club Claim Repository
// ============================================================================

#[async_trait]
pub trait ClubClaimRepository: Send + Sync {
    /// Find a claim request by ID
    async fn find_by_id(&self, id: ClaimRequestId) -> RepoResult<Option<ClubClaimRequest>>;

    /// Open a pending request and mark the club pending.
    ///
    /// Atomic: fails with `ClubNotFound`, `ClubAlreadyClaimed` or
    /// `ClubClaimInReview` without inserting a row.
    async fn create(&self, request: &ClubClaimRequest) -> RepoResult<()>;

    /// Approve or reject a pending request and update the club accordingly.
    ///
    /// Atomic: fails with `ClaimRequestNotFound` or `ClaimAlreadyResolved`.
    async fn resolve(
        &self,
        id: ClaimRequestId,
        decision: ClaimRequestStatus,
        resolver: AccountId,
        note: Option<String>,
    ) -> RepoResult<ClubClaimRequest>;

    /// Pending requests, oldest first
    async fn list_pending(&self, limit: i64) -> RepoResult<Vec<ClubClaimRequest>>;
}
