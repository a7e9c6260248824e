//! Player identity - either claimed by an account or an unclaimed guest

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{normalize_name, AccountId, PlayerId};

use super::location::Location;

/// Lowest and highest skill category
pub const SKILL_CATEGORY_RANGE: std::ops::RangeInclusive<i16> = 1..=7;

/// Preferred court side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayingPosition {
    Drive,
    Reves,
    Both,
}

impl PlayingPosition {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Drive => "drive",
            Self::Reves => "reves",
            Self::Both => "both",
        }
    }
}

impl std::str::FromStr for PlayingPosition {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drive" => Ok(Self::Drive),
            "reves" => Ok(Self::Reves),
            "both" => Ok(Self::Both),
            other => Err(DomainError::ValidationError(format!(
                "unknown playing position {other:?}"
            ))),
        }
    }
}

/// Player identity entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    /// Owning account; `None` while the identity is an unclaimed guest
    pub user_id: Option<AccountId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: String,
    pub normalized_name: String,
    pub phone: Option<String>,
    pub position: Option<PlayingPosition>,
    pub skill_category: Option<i16>,
    pub location: Location,
    pub avatar_url: Option<String>,
    pub onboarding_completed: bool,
    pub is_guest: bool,
    pub created_by: Option<AccountId>,
    pub claimed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Player {
    /// Create an unclaimed guest identity on behalf of `created_by`.
    ///
    /// The display name falls back to "first last" when not given.
    pub fn new_guest(
        id: PlayerId,
        created_by: AccountId,
        display_name: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<Self, DomainError> {
        let display_name = Self::compose_display_name(
            display_name.as_deref(),
            first_name.as_deref(),
            last_name.as_deref(),
        )?;
        let now = Utc::now();
        Ok(Self {
            id,
            user_id: None,
            normalized_name: normalize_name(&display_name),
            display_name,
            first_name,
            last_name,
            phone: None,
            position: None,
            skill_category: None,
            location: Location::default(),
            avatar_url: None,
            onboarding_completed: false,
            is_guest: true,
            created_by: Some(created_by),
            claimed_at: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        })
    }

    /// Create the identity owned by `account` (onboarding)
    pub fn new_owned(
        id: PlayerId,
        account: AccountId,
        display_name: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<Self, DomainError> {
        let mut player = Self::new_guest(id, account, display_name, first_name, last_name)?;
        player.user_id = Some(account);
        player.is_guest = false;
        player.onboarding_completed = true;
        Ok(player)
    }

    /// Pick the explicit display name, or build one from first and last name
    pub fn compose_display_name(
        display_name: Option<&str>,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<String, DomainError> {
        if let Some(name) = display_name.map(str::trim).filter(|s| !s.is_empty()) {
            return Ok(name.to_string());
        }
        let first = first_name.map(str::trim).filter(|s| !s.is_empty());
        let last = last_name.map(str::trim).filter(|s| !s.is_empty());
        match (first, last) {
            (Some(first), Some(last)) => Ok(format!("{first} {last}")),
            (Some(first), None) => Ok(first.to_string()),
            _ => Err(DomainError::ValidationError(
                "display_name or first_name is required".to_string(),
            )),
        }
    }

    /// Validate a skill category value
    pub fn validate_skill(skill: i16) -> Result<(), DomainError> {
        if SKILL_CATEGORY_RANGE.contains(&skill) {
            Ok(())
        } else {
            Err(DomainError::ValidationError(format!(
                "skill_category must be between 1 and 7, got {skill}"
            )))
        }
    }

    #[inline]
    pub fn is_claimed(&self) -> bool {
        self.user_id.is_some()
    }

    #[inline]
    pub fn is_owned_by(&self, account: AccountId) -> bool {
        self.user_id == Some(account)
    }

    /// Name used for identity comparison: "first last" when known, else the display name
    pub fn full_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.to_string(),
            _ => self.display_name.clone(),
        }
    }
}
