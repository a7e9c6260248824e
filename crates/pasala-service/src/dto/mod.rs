//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    AddRosterPlayerRequest, ClaimCandidatesQuery, ClaimProfileRequest, ClubCandidatesQuery,
    ClubClaimDecision, CreateClubRequest, CreateGuestRequest, CreateMatchRequest,
    CreateProfileRequest, QuickMatchRequest, QuickRosterSlot, RequestClubClaimRequest,
    ResolveClubClaimRequest, SubmitResultRequest,
};

pub use responses::{
    ApiResponse, ClaimCandidateResponse, ClubCalendarResponse, ClubCandidateResponse,
    ClubClaimRequestResponse, ClubResponse, HealthResponse, MatchDetailResponse, MatchResponse,
    PlayerMetricsResponse, PlayerResponse, ProfileResponse, QuickMatchResponse,
    ReadinessResponse, ResultResponse, RosterEntryResponse, RosterResponse, ShareLinkResponse,
};

pub use mappers::RosterWithPlayers;
