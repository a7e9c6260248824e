//! Claim service
//!
//! Transfers an unclaimed identity to the calling account. The ownership write is
//! a single guarded update in the repository, so a concurrent second claim of the
//! same identity sees `ProfileAlreadyClaimed` and the first owner stays.

use pasala_core::{
    name_similarity, names_overlap, normalize_name, AccountId, ClaimOutcome, DomainError, MatchId,
    Player, PlayerId,
};
use tracing::{info, instrument, warn};

use crate::dto::{
    ClaimCandidateResponse, ClaimCandidatesQuery, ClaimProfileRequest, PlayerResponse,
    ProfileResponse,
};

use super::club::name_fragments;
use super::context::ServiceContext;
use super::error::{parse_id, ServiceResult};

/// Maximum candidates returned to the caller
pub const MAX_CLAIM_CANDIDATES: usize = 10;

/// Similarity above which a non-overlapping name is still offered as a candidate
pub const CANDIDATE_SIMILARITY_THRESHOLD: f64 = 0.8;

/// Claim service
pub struct ClaimService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ClaimService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Claim an identity. A request carrying names is checked against the target
    /// before ownership moves.
    #[instrument(skip(self, request), fields(guided = request.is_guided()))]
    pub async fn claim(
        &self,
        account: AccountId,
        request: ClaimProfileRequest,
    ) -> ServiceResult<ProfileResponse> {
        let target_id: PlayerId = parse_id("target_player_id", &request.target_player_id)?;
        let match_context = request
            .match_id
            .as_deref()
            .map(|raw| parse_id::<MatchId>("match_id", raw))
            .transpose()?;

        if self.ctx.player_repo().find_by_user(account).await?.is_some() {
            warn!(account_id = %account, target = %target_id, "Claim rejected: account already has a profile");
            return Err(DomainError::UserAlreadyHasProfile.into());
        }

        if request.is_guided() {
            let target = self
                .ctx
                .player_repo()
                .find_by_id(target_id)
                .await?
                .ok_or(DomainError::PlayerNotFound(target_id))?;
            if target.is_claimed() {
                return Err(DomainError::ProfileAlreadyClaimed.into());
            }
            check_identity(&target, &request)?;
        }

        let outcome = self
            .ctx
            .player_repo()
            .claim(target_id, account, match_context)
            .await?;

        match outcome {
            ClaimOutcome::Claimed(player) => {
                info!(player_id = %player.id, account_id = %account, "Player identity claimed");
                Ok(ProfileResponse::from(&player))
            }
            ClaimOutcome::AlreadyClaimed => {
                warn!(target = %target_id, account_id = %account, "Claim rejected: identity already owned");
                Err(DomainError::ProfileAlreadyClaimed.into())
            }
            ClaimOutcome::NotRostered => {
                warn!(target = %target_id, match_id = ?match_context, "Claim rejected: identity not in match");
                Err(DomainError::ClaimNotAllowed.into())
            }
            ClaimOutcome::NotFound => Err(DomainError::PlayerNotFound(target_id).into()),
        }
    }

    /// Unclaimed identities that may belong to the caller, city matches first and
    /// then by name similarity
    #[instrument(skip(self, query))]
    pub async fn find_candidates(
        &self,
        query: ClaimCandidatesQuery,
    ) -> ServiceResult<Vec<ClaimCandidateResponse>> {
        let full_name = format!("{} {}", query.first_name, query.last_name);
        let fragments = name_fragments(&full_name);
        if fragments.is_empty() {
            return Ok(Vec::new());
        }

        let found = self
            .ctx
            .player_repo()
            .find_unclaimed_by_name(&fragments, (MAX_CLAIM_CANDIDATES * 5) as i64)
            .await?;

        let city = query.city.as_deref().map(normalize_name).filter(|c| !c.is_empty());
        let mut candidates: Vec<ClaimCandidateResponse> = found
            .iter()
            .filter(|player| !player.is_claimed())
            .filter_map(|player| {
                let similarity = name_similarity(&full_name, &player.full_name())
                    .max(name_similarity(&full_name, &player.display_name));
                let overlaps = names_overlap(&full_name, &player.full_name())
                    || names_overlap(&full_name, &player.display_name);
                (overlaps || similarity >= CANDIDATE_SIMILARITY_THRESHOLD).then(|| {
                    ClaimCandidateResponse {
                        player: PlayerResponse::from(player),
                        city_match: city.is_some() && player.location.normalized_city() == city,
                        similarity,
                    }
                })
            })
            .collect();

        candidates.sort_by(|a, b| {
            b.city_match
                .cmp(&a.city_match)
                .then(b.similarity.total_cmp(&a.similarity))
        });
        candidates.truncate(MAX_CLAIM_CANDIDATES);
        Ok(candidates)
    }
}

/// Guided claim guardrail: the supplied name must overlap the target's name and,
/// when both sides know a city, the cities must agree.
fn check_identity(target: &Player, request: &ClaimProfileRequest) -> ServiceResult<()> {
    let (Some(first), Some(last)) = (request.first_name.as_deref(), request.last_name.as_deref())
    else {
        return Err(DomainError::ValidationError(
            "first_name and last_name are required for a guided claim".to_string(),
        )
        .into());
    };

    let target_city = target.location.normalized_city();
    let claimed_city = request.city.as_deref().map(normalize_name).filter(|c| !c.is_empty());
    if target_city.is_some() && claimed_city.is_none() {
        return Err(DomainError::ValidationError(
            "city is required to claim this player".to_string(),
        )
        .into());
    }

    let supplied = format!("{first} {last}");
    let name_ok =
        names_overlap(&supplied, &target.full_name()) || names_overlap(&supplied, &target.display_name);
    let city_ok = match (&target_city, &claimed_city) {
        (Some(a), Some(b)) => a == b,
        _ => true,
    };

    if name_ok && city_ok {
        Ok(())
    } else {
        warn!(target = %target.id, name_ok, city_ok, "Guided claim rejected: identity mismatch");
        Err(DomainError::ClaimIdentityMismatch.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pasala_core::Location;

    fn guest(first: &str, last: &str, city: Option<&str>) -> Player {
        let mut player = Player::new_guest(
            PlayerId::new(),
            AccountId::new(),
            None,
            Some(first.to_string()),
            Some(last.to_string()),
        )
        .unwrap();
        if let Some(city) = city {
            player.location = Location::city(city);
        }
        player
    }

    fn guided(first: &str, last: &str, city: Option<&str>) -> ClaimProfileRequest {
        ClaimProfileRequest {
            target_player_id: PlayerId::new().to_string(),
            match_id: None,
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            city: city.map(String::from),
        }
    }

    #[test]
    fn test_identity_accepts_accent_and_case_variants() {
        let target = guest("José", "Pérez", Some("Córdoba"));
        assert!(check_identity(&target, &guided("jose", "PEREZ", Some("cordoba"))).is_ok());
    }

    #[test]
    fn test_identity_rejects_other_name() {
        let target = guest("José", "Pérez", None);
        let err = check_identity(&target, &guided("Ana", "Gómez", None)).unwrap_err();
        assert_eq!(err.error_code(), "CLAIM_IDENTITY_MISMATCH");
    }

    #[test]
    fn test_identity_rejects_other_city() {
        let target = guest("José", "Pérez", Some("Rosario"));
        let err = check_identity(&target, &guided("José", "Pérez", Some("Mendoza"))).unwrap_err();
        assert_eq!(err.error_code(), "CLAIM_IDENTITY_MISMATCH");
    }

    #[test]
    fn test_identity_requires_city_when_target_has_one() {
        let target = guest("José", "Pérez", Some("Rosario"));
        let err = check_identity(&target, &guided("José", "Pérez", None)).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");

        let target = guest("José", "Pérez", None);
        assert!(check_identity(&target, &guided("José", "Pérez", Some("Rosario"))).is_ok());
    }

    #[test]
    fn test_identity_requires_both_names() {
        let target = guest("José", "Pérez", None);
        let mut request = guided("José", "Pérez", None);
        request.last_name = None;
        assert!(check_identity(&target, &request).is_err());
    }
}
