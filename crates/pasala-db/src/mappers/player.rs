//! Player model mapper

use pasala_core::{AccountId, Location, Player, PlayerId};

use crate::models::PlayerModel;

impl From<PlayerModel> for Player {
    fn from(model: PlayerModel) -> Self {
        Player {
            id: PlayerId::from_uuid(model.id),
            user_id: model.user_id.map(AccountId::from_uuid),
            first_name: model.first_name,
            last_name: model.last_name,
            display_name: model.display_name,
            normalized_name: model.normalized_name,
            phone: model.phone,
            position: model.position.and_then(|p| p.parse().ok()),
            skill_category: model.skill_category,
            location: Location {
                country: model.country,
                region: model.region,
                city: model.city,
                geo_id: model.geo_id,
            },
            avatar_url: model.avatar_url,
            onboarding_completed: model.onboarding_completed,
            is_guest: model.is_guest,
            created_by: model.created_by.map(AccountId::from_uuid),
            claimed_at: model.claimed_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}
