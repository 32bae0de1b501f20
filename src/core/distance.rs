use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of race distances tracked on the leaderboard.
///
/// Declaration order is the canonical column order for display and is
/// independent of whichever key is currently used for sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DistanceKey {
    FourHundredM,
    OneHalfMile,
    OneK,
    OneMile,
    TwoMile,
    FiveK,
    TenK,
    FifteenK,
    TenMile,
    TwentyK,
    HalfMarathon,
    Marathon,
}

impl DistanceKey {
    /// All distances in canonical column order.
    pub const ALL: [DistanceKey; 12] = [
        DistanceKey::FourHundredM,
        DistanceKey::OneHalfMile,
        DistanceKey::OneK,
        DistanceKey::OneMile,
        DistanceKey::TwoMile,
        DistanceKey::FiveK,
        DistanceKey::TenK,
        DistanceKey::FifteenK,
        DistanceKey::TenMile,
        DistanceKey::TwentyK,
        DistanceKey::HalfMarathon,
        DistanceKey::Marathon,
    ];

    /// Wire name as used by the query API and the nested record shape.
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceKey::FourHundredM => "FOUR_HUNDRED_M",
            DistanceKey::OneHalfMile => "ONE_HALF_MILE",
            DistanceKey::OneK => "ONE_K",
            DistanceKey::OneMile => "ONE_MILE",
            DistanceKey::TwoMile => "TWO_MILE",
            DistanceKey::FiveK => "FIVE_K",
            DistanceKey::TenK => "TEN_K",
            DistanceKey::FifteenK => "FIFTEEN_K",
            DistanceKey::TenMile => "TEN_MILE",
            DistanceKey::TwentyK => "TWENTY_K",
            DistanceKey::HalfMarathon => "HALF_MARATHON",
            DistanceKey::Marathon => "MARATHON",
        }
    }

    /// Human-readable column label.
    pub fn label(&self) -> &'static str {
        match self {
            DistanceKey::FourHundredM => "400m",
            DistanceKey::OneHalfMile => "Half-mile",
            DistanceKey::OneK => "1000m",
            DistanceKey::OneMile => "One-mile",
            DistanceKey::TwoMile => "Two-mile",
            DistanceKey::FiveK => "5K",
            DistanceKey::TenK => "10K",
            DistanceKey::FifteenK => "15K",
            DistanceKey::TenMile => "10-mile",
            DistanceKey::TwentyK => "20K",
            DistanceKey::HalfMarathon => "Half-Marathon",
            DistanceKey::Marathon => "Marathon",
        }
    }
}

impl fmt::Display for DistanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DistanceKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown distance key: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for key in DistanceKey::ALL {
            assert_eq!(key.as_str().parse::<DistanceKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_unknown_wire_name_rejected() {
        assert!("FIFTY_K".parse::<DistanceKey>().is_err());
        assert!("marathon".parse::<DistanceKey>().is_err());
    }

    #[test]
    fn test_canonical_order() {
        assert_eq!(DistanceKey::ALL[0], DistanceKey::FourHundredM);
        assert_eq!(DistanceKey::ALL[11], DistanceKey::Marathon);
        assert!(DistanceKey::FourHundredM < DistanceKey::Marathon);
        assert!(DistanceKey::HalfMarathon < DistanceKey::Marathon);
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&DistanceKey::FourHundredM).unwrap();
        assert_eq!(json, "\"FOUR_HUNDRED_M\"");

        let key: DistanceKey = serde_json::from_str("\"HALF_MARATHON\"").unwrap();
        assert_eq!(key, DistanceKey::HalfMarathon);
    }
}
