//! Free-text location shared by players and clubs

use serde::{Deserialize, Serialize};

use crate::value_objects::normalize_name;

/// Country / region / city as typed by the user, plus an optional reference into
/// an external geographic catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub country: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub geo_id: Option<String>,
}

impl Location {
    pub fn city(city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            ..Self::default()
        }
    }

    /// Normalized city, `None` when absent or blank
    pub fn normalized_city(&self) -> Option<String> {
        normalized(self.city.as_deref())
    }

    /// Normalized region, `None` when absent or blank
    pub fn normalized_region(&self) -> Option<String> {
        normalized(self.region.as_deref())
    }
}

fn normalized(value: Option<&str>) -> Option<String> {
    value.map(normalize_name).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_city() {
        assert_eq!(Location::city("Málaga").normalized_city().as_deref(), Some("malaga"));
        assert_eq!(Location::city("  ").normalized_city(), None);
        assert_eq!(Location::default().normalized_city(), None);
    }
}
