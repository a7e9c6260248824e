//! Club and claim request model mappers

use pasala_core::{
    AccountId, ClaimRequestId, ClaimRequestStatus, Club, ClubClaimRequest, ClubClaimStatus, ClubId,
    Location,
};

use crate::models::{ClubClaimRequestModel, ClubModel};

impl From<ClubModel> for Club {
    fn from(model: ClubModel) -> Self {
        Club {
            id: ClubId::from_uuid(model.id),
            name: model.name,
            normalized_name: model.normalized_name,
            location: Location {
                country: model.country,
                region: model.region,
                city: model.city,
                geo_id: model.geo_id,
            },
            address: model.address,
            claim_status: ClubClaimStatus::from(model.claim_status.as_str()),
            created_by: model.created_by.map(AccountId::from_uuid),
            claimed_by: model.claimed_by.map(AccountId::from_uuid),
            claimed_at: model.claimed_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}

impl From<ClubClaimRequestModel> for ClubClaimRequest {
    fn from(model: ClubClaimRequestModel) -> Self {
        ClubClaimRequest {
            id: ClaimRequestId::from_uuid(model.id),
            club_id: ClubId::from_uuid(model.club_id),
            requester: AccountId::from_uuid(model.requester_id),
            contact_name: model.contact_name,
            contact_email: model.contact_email,
            contact_phone: model.contact_phone,
            message: model.message,
            status: ClaimRequestStatus::from(model.status.as_str()),
            resolved_by: model.resolved_by.map(AccountId::from_uuid),
            resolved_at: model.resolved_at,
            resolution_note: model.resolution_note,
            created_at: model.created_at,
        }
    }
}
