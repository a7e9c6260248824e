//! Player service
//!
//! Guest identities created on someone else's behalf, the caller's own identity,
//! and public player lookups.

use pasala_common::AppError;
use pasala_core::{AccountId, DomainError, Player, PlayerId};
use tracing::{info, instrument};

use crate::dto::{CreateGuestRequest, CreateProfileRequest, PlayerResponse, ProfileResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Player service
pub struct PlayerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PlayerService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an unclaimed guest identity. Duplicates by name are allowed.
    #[instrument(skip(self, request))]
    pub async fn create_guest(
        &self,
        account: AccountId,
        request: CreateGuestRequest,
    ) -> ServiceResult<PlayerResponse> {
        let mut guest = Player::new_guest(
            PlayerId::new(),
            account,
            request.display_name,
            request.first_name,
            request.last_name,
        )?;
        guest.phone = request.phone;
        guest.position = request.position;
        guest.location = request.location.unwrap_or_default();

        self.ctx.player_repo().create(&guest).await?;

        info!(player_id = %guest.id, created_by = %account, "Guest identity created");
        Ok(PlayerResponse::from(&guest))
    }

    /// Create the caller's own identity
    #[instrument(skip(self, request))]
    pub async fn create_own_profile(
        &self,
        account: AccountId,
        request: CreateProfileRequest,
    ) -> ServiceResult<ProfileResponse> {
        if self.ctx.player_repo().find_by_user(account).await?.is_some() {
            return Err(DomainError::UserAlreadyHasProfile.into());
        }
        if let Some(skill) = request.skill_category {
            Player::validate_skill(skill)?;
        }

        let mut player = Player::new_owned(
            PlayerId::new(),
            account,
            request.display_name,
            request.first_name,
            request.last_name,
        )?;
        player.phone = request.phone;
        player.position = request.position;
        player.skill_category = request.skill_category;
        player.location = request.location.unwrap_or_default();
        player.avatar_url = request.avatar_url;

        self.ctx.player_repo().create(&player).await?;

        info!(player_id = %player.id, account_id = %account, "Player profile created");
        Ok(ProfileResponse::from(&player))
    }

    /// The caller's own identity
    #[instrument(skip(self))]
    pub async fn get_my_profile(&self, account: AccountId) -> ServiceResult<ProfileResponse> {
        let player = self
            .ctx
            .player_repo()
            .find_by_user(account)
            .await?
            .ok_or_else(|| AppError::not_found("player profile"))?;
        Ok(ProfileResponse::from(&player))
    }

    /// Public projection of any identity
    #[instrument(skip(self))]
    pub async fn get_player(&self, player_id: PlayerId) -> ServiceResult<PlayerResponse> {
        let player = self
            .ctx
            .player_repo()
            .find_by_id(player_id)
            .await?
            .ok_or(DomainError::PlayerNotFound(player_id))?;
        Ok(PlayerResponse::from(&player))
    }
}
