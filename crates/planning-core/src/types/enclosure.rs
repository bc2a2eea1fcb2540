//! Enclosure attributes: where it sits, how tall it is, what it is
//!
//! Heights are pre-bucketed categories, never raw measurements.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position of the enclosure relative to a highway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// Adjacent to a highway used by vehicular traffic
    Adjacent,
    /// Anywhere else on the site
    NotAdjacent,
}

impl Location {
    /// All locations in menu order
    pub const ALL: [Location; 2] = [Location::Adjacent, Location::NotAdjacent];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Adjacent => "adjacent",
            Location::NotAdjacent => "not_adjacent",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Location::ALL
            .into_iter()
            .find(|location| location.as_str() == s)
            .ok_or_else(|| CoreError::InvalidLocation(s.to_string()))
    }
}

/// Height bucket of the enclosure
///
/// Ordered from lowest to highest. `Above1m` and `UpTo2m` overlap in the
/// real world; the matrix treats them as distinct categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeightCategory {
    #[serde(rename = "up_to_1m")]
    UpTo1m,
    #[serde(rename = "above_1m")]
    Above1m,
    #[serde(rename = "up_to_2m")]
    UpTo2m,
    #[serde(rename = "above_2m")]
    Above2m,
}

impl HeightCategory {
    /// All categories in ascending order
    pub const ALL: [HeightCategory; 4] = [
        HeightCategory::UpTo1m,
        HeightCategory::Above1m,
        HeightCategory::UpTo2m,
        HeightCategory::Above2m,
    ];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            HeightCategory::UpTo1m => "up_to_1m",
            HeightCategory::Above1m => "above_1m",
            HeightCategory::UpTo2m => "up_to_2m",
            HeightCategory::Above2m => "above_2m",
        }
    }
}

impl fmt::Display for HeightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeightCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        HeightCategory::ALL
            .into_iter()
            .find(|height| height.as_str() == s)
            .ok_or_else(|| CoreError::InvalidHeight(s.to_string()))
    }
}

/// Kind of boundary enclosure
///
/// `Other` holds any value outside the matrix. Deserialization is lenient
/// (case-insensitive, unknown values become `Other`); `FromStr` is strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum StructureType {
    Fence,
    Wall,
    Gate,
    /// Not one of the enumerated structures
    Other,
}

impl StructureType {
    /// The structures the matrix enumerates, in menu order
    pub const KNOWN: [StructureType; 3] = [
        StructureType::Fence,
        StructureType::Wall,
        StructureType::Gate,
    ];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            StructureType::Fence => "fence",
            StructureType::Wall => "wall",
            StructureType::Gate => "gate",
            StructureType::Other => "other",
        }
    }

    /// Whether the matrix has rows for this structure
    pub fn is_recognized(&self) -> bool {
        !matches!(self, StructureType::Other)
    }

    fn recognize(s: &str) -> Option<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        StructureType::KNOWN
            .into_iter()
            .find(|structure| structure.as_str() == lowered)
    }
}

impl fmt::Display for StructureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StructureType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        StructureType::recognize(s).ok_or_else(|| CoreError::InvalidStructureType(s.to_string()))
    }
}

impl From<String> for StructureType {
    fn from(s: String) -> Self {
        StructureType::recognize(&s).unwrap_or(StructureType::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_parse() {
        assert_eq!("adjacent".parse::<Location>().unwrap(), Location::Adjacent);
        assert_eq!(
            "not_adjacent".parse::<Location>().unwrap(),
            Location::NotAdjacent
        );
        assert!(matches!(
            "Adjacent".parse::<Location>(),
            Err(CoreError::InvalidLocation(_))
        ));
    }

    #[test]
    fn test_height_parse_and_display() {
        for height in HeightCategory::ALL {
            assert_eq!(
                height.to_string().parse::<HeightCategory>().unwrap(),
                height
            );
        }
        assert!("2m".parse::<HeightCategory>().is_err());
    }

    #[test]
    fn test_height_ordering() {
        assert!(HeightCategory::UpTo1m < HeightCategory::Above1m);
        assert!(HeightCategory::Above1m < HeightCategory::UpTo2m);
        assert!(HeightCategory::UpTo2m < HeightCategory::Above2m);
        assert_eq!(
            HeightCategory::ALL.iter().max(),
            Some(&HeightCategory::Above2m)
        );
    }

    #[test]
    fn test_structure_parse_is_case_insensitive() {
        assert_eq!(
            "Fence".parse::<StructureType>().unwrap(),
            StructureType::Fence
        );
        assert_eq!(
            " WALL ".parse::<StructureType>().unwrap(),
            StructureType::Wall
        );
        assert_eq!(
            "gate".parse::<StructureType>().unwrap(),
            StructureType::Gate
        );
    }

    #[test]
    fn test_structure_parse_rejects_unknown() {
        assert!(matches!(
            "hedge".parse::<StructureType>(),
            Err(CoreError::InvalidStructureType(s)) if s == "hedge"
        ));
        assert!("other".parse::<StructureType>().is_err());
    }

    #[test]
    fn test_structure_from_string_is_lenient() {
        assert_eq!(StructureType::from("GATE".to_string()), StructureType::Gate);
        assert_eq!(
            StructureType::from("shed".to_string()),
            StructureType::Other
        );
        assert!(!StructureType::Other.is_recognized());
        assert!(StructureType::Fence.is_recognized());
    }

    #[test]
    fn test_serde_wire_names() {
        assert_eq!(
            serde_json::to_string(&HeightCategory::UpTo1m).unwrap(),
            "\"up_to_1m\""
        );
        assert_eq!(
            serde_json::to_string(&Location::NotAdjacent).unwrap(),
            "\"not_adjacent\""
        );
        assert_eq!(
            serde_json::to_string(&StructureType::Wall).unwrap(),
            "\"wall\""
        );

        let structure: StructureType = serde_json::from_str("\"Fence\"").unwrap();
        assert_eq!(structure, StructureType::Fence);
        let structure: StructureType = serde_json::from_str("\"carport\"").unwrap();
        assert_eq!(structure, StructureType::Other);

        let height: HeightCategory = serde_json::from_str("\"above_2m\"").unwrap();
        assert_eq!(height, HeightCategory::Above2m);
        assert!(serde_json::from_str::<HeightCategory>("\"tall\"").is_err());
    }
}
