//! Service context - dependency container for services
//!
//! Holds all repositories and the deployment policies needed by services.

use std::sync::Arc;

use pasala_common::DomainConfig;
use pasala_core::traits::{
    ClubClaimRepository, ClubRepository, MatchRepository, PlayerRepository, ResultRepository,
    RosterRepository,
};
use pasala_core::{AccountId, MatchFormat, RosterRequirement};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Repositories for matches, rosters, results, players, clubs and club claims
/// - Domain policies (admins, result roster requirement, match format)
/// - The public base URL used to render share links
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    match_repo: Arc<dyn MatchRepository>,
    roster_repo: Arc<dyn RosterRepository>,
    result_repo: Arc<dyn ResultRepository>,
    player_repo: Arc<dyn PlayerRepository>,
    club_repo: Arc<dyn ClubRepository>,
    club_claim_repo: Arc<dyn ClubClaimRepository>,

    // Policies
    domain: DomainConfig,
    match_format: MatchFormat,
    public_base_url: String,
}

impl ServiceContext {
    // === Repositories ===

    pub fn match_repo(&self) -> &dyn MatchRepository {
        self.match_repo.as_ref()
    }

    pub fn roster_repo(&self) -> &dyn RosterRepository {
        self.roster_repo.as_ref()
    }

    pub fn result_repo(&self) -> &dyn ResultRepository {
        self.result_repo.as_ref()
    }

    pub fn player_repo(&self) -> &dyn PlayerRepository {
        self.player_repo.as_ref()
    }

    pub fn club_repo(&self) -> &dyn ClubRepository {
        self.club_repo.as_ref()
    }

    pub fn club_claim_repo(&self) -> &dyn ClubClaimRepository {
        self.club_claim_repo.as_ref()
    }

    // === Policies ===

    /// Whether the account may use the moderation surface
    pub fn is_admin(&self, account: AccountId) -> bool {
        self.domain.is_admin(account)
    }

    /// Roster completeness required by the standard result endpoint
    pub fn result_roster_requirement(&self) -> RosterRequirement {
        self.domain.result_roster_requirement
    }

    pub fn match_format(&self) -> MatchFormat {
        self.match_format
    }

    /// Base URL of the public pages, without trailing slash
    pub fn public_base_url(&self) -> &str {
        &self.public_base_url
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("domain", &self.domain)
            .field("match_format", &self.match_format)
            .field("public_base_url", &self.public_base_url)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    match_repo: Option<Arc<dyn MatchRepository>>,
    roster_repo: Option<Arc<dyn RosterRepository>>,
    result_repo: Option<Arc<dyn ResultRepository>>,
    player_repo: Option<Arc<dyn PlayerRepository>>,
    club_repo: Option<Arc<dyn ClubRepository>>,
    club_claim_repo: Option<Arc<dyn ClubClaimRepository>>,
    domain: DomainConfig,
    match_format: MatchFormat,
    public_base_url: Option<String>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn match_repo(mut self, repo: Arc<dyn MatchRepository>) -> Self {
        self.match_repo = Some(repo);
        self
    }

    pub fn roster_repo(mut self, repo: Arc<dyn RosterRepository>) -> Self {
        self.roster_repo = Some(repo);
        self
    }

    pub fn result_repo(mut self, repo: Arc<dyn ResultRepository>) -> Self {
        self.result_repo = Some(repo);
        self
    }

    pub fn player_repo(mut self, repo: Arc<dyn PlayerRepository>) -> Self {
        self.player_repo = Some(repo);
        self
    }

    pub fn club_repo(mut self, repo: Arc<dyn ClubRepository>) -> Self {
        self.club_repo = Some(repo);
        self
    }

    pub fn club_claim_repo(mut self, repo: Arc<dyn ClubClaimRepository>) -> Self {
        self.club_claim_repo = Some(repo);
        self
    }

    pub fn domain(mut self, domain: DomainConfig) -> Self {
        self.domain = domain;
        self
    }

    pub fn match_format(mut self, format: MatchFormat) -> Self {
        self.match_format = format;
        self
    }

    pub fn public_base_url(mut self, url: impl Into<String>) -> Self {
        self.public_base_url = Some(url.into().trim_end_matches('/').to_string());
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            match_repo: self.match_repo.ok_or_else(|| missing("match_repo"))?,
            roster_repo: self.roster_repo.ok_or_else(|| missing("roster_repo"))?,
            result_repo: self.result_repo.ok_or_else(|| missing("result_repo"))?,
            player_repo: self.player_repo.ok_or_else(|| missing("player_repo"))?,
            club_repo: self.club_repo.ok_or_else(|| missing("club_repo"))?,
            club_claim_repo: self.club_claim_repo.ok_or_else(|| missing("club_claim_repo"))?,
            domain: self.domain,
            match_format: self.match_format,
            public_base_url: self.public_base_url.ok_or_else(|| missing("public_base_url"))?,
        })
    }
}

fn missing(dependency: &str) -> ServiceError {
    ServiceError::validation(format!("{dependency} is required"))
}
