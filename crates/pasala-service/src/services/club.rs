//! Club service
//!
//! Clubs, venue resolution during match creation, the club claim workflow and
//! its moderation queue.

use pasala_core::{
    name_similarity, normalize_name, AccountId, ClaimRequestId, ClaimRequestStatus, Club,
    ClubClaimRequest, ClubId, DomainError, Location,
};
use tracing::{debug, info, instrument};

use crate::dto::{
    ClubCalendarResponse, ClubCandidateResponse, ClubCandidatesQuery, ClubClaimDecision,
    ClubClaimRequestResponse, ClubResponse, CreateClubRequest, MatchResponse,
    RequestClubClaimRequest, ResolveClubClaimRequest,
};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::{parse_id, ServiceResult};

/// Maximum candidates returned by duplicate detection
pub const MAX_CLUB_CANDIDATES: usize = 10;

/// Club service
pub struct ClubService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ClubService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a club explicitly
    #[instrument(skip(self, request))]
    pub async fn create_club(
        &self,
        account: AccountId,
        request: CreateClubRequest,
    ) -> ServiceResult<ClubResponse> {
        let mut club = Club::new(ClubId::new(), request.name, Some(account))?;
        club.location = request.location.unwrap_or_default();
        club.address = request.address;

        self.ctx.club_repo().create(&club).await?;

        info!(club_id = %club.id, created_by = %account, "Club created");
        Ok(ClubResponse::from(&club))
    }

    #[instrument(skip(self))]
    pub async fn get_club(&self, club_id: ClubId) -> ServiceResult<ClubResponse> {
        Ok(ClubResponse::from(self.load_club(club_id).await?))
    }

    /// Club with its matches, soonest first
    #[instrument(skip(self))]
    pub async fn club_calendar(&self, club_id: ClubId, limit: i64) -> ServiceResult<ClubCalendarResponse> {
        let club = self.load_club(club_id).await?;
        let matches = self.ctx.match_repo().find_by_club(club_id, limit).await?;

        Ok(ClubCalendarResponse {
            club: ClubResponse::from(&club),
            matches: matches.iter().map(MatchResponse::from).collect(),
        })
    }

    /// Resolve the venue of a new match.
    ///
    /// An explicit club id must exist. A free-text venue is matched against club
    /// names by normalized equality and otherwise synthesized into a new
    /// unclaimed club. The free text is kept on the match either way.
    #[instrument(skip(self))]
    pub async fn resolve_venue(
        &self,
        account: AccountId,
        club_id: Option<&str>,
        venue: Option<&str>,
    ) -> ServiceResult<(Option<ClubId>, Option<String>)> {
        let venue = venue.map(str::trim).filter(|v| !v.is_empty()).map(String::from);

        if let Some(raw) = club_id {
            let club_id: ClubId = parse_id("club_id", raw)?;
            let club = self.load_club(club_id).await?;
            return Ok((Some(club.id), venue.or(Some(club.name))));
        }

        let Some(name) = venue else {
            return Ok((None, None));
        };
        let normalized = normalize_name(&name);
        if normalized.is_empty() {
            return Ok((None, Some(name)));
        }

        if let Some(existing) = self.ctx.club_repo().find_by_normalized_name(&normalized).await? {
            debug!(club_id = %existing.id, "Venue matched existing club");
            return Ok((Some(existing.id), Some(name)));
        }

        let club = Club::new(ClubId::new(), name.clone(), Some(account))?;
        self.ctx.club_repo().create(&club).await?;
        info!(club_id = %club.id, created_by = %account, "Club synthesized from venue");

        Ok((Some(club.id), Some(name)))
    }

    /// Open a claim request; the club becomes pending until moderation
    #[instrument(skip(self, request))]
    pub async fn request_claim(
        &self,
        club_id: ClubId,
        account: AccountId,
        request: RequestClubClaimRequest,
    ) -> ServiceResult<ClubClaimRequestResponse> {
        let club = self.load_club(club_id).await?;
        club.ensure_claimable()?;

        let mut claim = ClubClaimRequest::new(
            ClaimRequestId::new(),
            club_id,
            account,
            request.contact_name,
            request.contact_email,
        );
        claim.contact_phone = request.contact_phone;
        claim.message = request.message;

        self.ctx.club_claim_repo().create(&claim).await?;

        info!(club_id = %club_id, request_id = %claim.id, requester = %account, "Club claim requested");
        Ok(ClubClaimRequestResponse::from(claim))
    }

    /// Approve or reject a pending request (admin only)
    #[instrument(skip(self, request))]
    pub async fn resolve_claim(
        &self,
        request_id: ClaimRequestId,
        admin: AccountId,
        request: ResolveClubClaimRequest,
    ) -> ServiceResult<ClubClaimRequestResponse> {
        AccessService::new(self.ctx).require_admin(admin)?;

        let decision = match request.decision {
            ClubClaimDecision::Approved => ClaimRequestStatus::Approved,
            ClubClaimDecision::Rejected => ClaimRequestStatus::Rejected,
        };
        let resolved = self
            .ctx
            .club_claim_repo()
            .resolve(request_id, decision, admin, request.note)
            .await?;

        info!(
            request_id = %request_id,
            club_id = %resolved.club_id,
            decision = decision.as_str(),
            resolved_by = %admin,
            "Club claim resolved"
        );
        Ok(ClubClaimRequestResponse::from(resolved))
    }

    /// Moderation queue, oldest first (admin only)
    #[instrument(skip(self))]
    pub async fn list_pending_claims(
        &self,
        admin: AccountId,
        limit: i64,
    ) -> ServiceResult<Vec<ClubClaimRequestResponse>> {
        AccessService::new(self.ctx).require_admin(admin)?;

        let pending = self.ctx.club_claim_repo().list_pending(limit).await?;
        Ok(pending.into_iter().map(ClubClaimRequestResponse::from).collect())
    }

    /// Existing clubs that may duplicate `name`, best first (admin only).
    ///
    /// Advisory: location match ranks first, then name similarity.
    #[instrument(skip(self))]
    pub async fn find_claim_candidates(
        &self,
        admin: AccountId,
        query: ClubCandidatesQuery,
    ) -> ServiceResult<Vec<ClubCandidateResponse>> {
        AccessService::new(self.ctx).require_admin(admin)?;

        let exclude = query
            .exclude_club_id
            .as_deref()
            .map(|raw| parse_id::<ClubId>("exclude_club_id", raw))
            .transpose()?;
        let fragments = name_fragments(&query.name);
        if fragments.is_empty() {
            return Ok(Vec::new());
        }

        let clubs = self
            .ctx
            .club_repo()
            .find_by_name(&fragments, exclude, (MAX_CLUB_CANDIDATES * 5) as i64)
            .await?;

        let wanted = Location {
            city: query.city,
            region: query.region,
            ..Location::default()
        };
        let mut candidates: Vec<ClubCandidateResponse> = clubs
            .iter()
            .map(|club| ClubCandidateResponse {
                club: ClubResponse::from(club),
                location_match: same_place(&wanted, &club.location),
                similarity: name_similarity(&query.name, &club.name),
            })
            .collect();
        candidates.sort_by(|a, b| {
            b.location_match
                .cmp(&a.location_match)
                .then(b.similarity.total_cmp(&a.similarity))
        });
        candidates.truncate(MAX_CLUB_CANDIDATES);
        Ok(candidates)
    }

    async fn load_club(&self, club_id: ClubId) -> ServiceResult<Club> {
        Ok(self
            .ctx
            .club_repo()
            .find_by_id(club_id)
            .await?
            .ok_or(DomainError::ClubNotFound(club_id))?)
    }
}

/// Normalized words worth searching for. Very short words match too much, so
/// they are only used when the whole name is short.
pub(crate) fn name_fragments(name: &str) -> Vec<String> {
    let normalized = normalize_name(name);
    let words: Vec<String> = normalized
        .split_whitespace()
        .filter(|word| word.chars().count() >= 3)
        .map(String::from)
        .collect();
    if words.is_empty() && !normalized.is_empty() {
        vec![normalized]
    } else {
        words
    }
}

/// City equality when both cities are known, else region equality when both are known
fn same_place(wanted: &Location, found: &Location) -> bool {
    match (wanted.normalized_city(), found.normalized_city()) {
        (Some(a), Some(b)) => a == b,
        _ => matches!(
            (wanted.normalized_region(), found.normalized_region()),
            (Some(a), Some(b)) if a == b
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_fragments_skip_short_words() {
        assert_eq!(name_fragments("Club de Pádel Norte"), vec!["club", "padel", "norte"]);
        assert_eq!(name_fragments("Li Po"), vec!["li po"]);
        assert!(name_fragments("!!").is_empty());
    }

    #[test]
    fn test_same_place() {
        let madrid = Location::city("Madrid");
        assert!(same_place(&Location::city("madrid"), &madrid));
        assert!(!same_place(&Location::city("Sevilla"), &madrid));

        let region_only = Location {
            region: Some("Andalucía".to_string()),
            ..Location::default()
        };
        let found = Location {
            region: Some("andalucia".to_string()),
            city: Some("Málaga".to_string()),
            ..Location::default()
        };
        assert!(same_place(&region_only, &found));
        assert!(!same_place(&Location::default(), &found));
    }
}
