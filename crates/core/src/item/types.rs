use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Numeric item identity, assigned by the store on insert.
///
/// `0` means "not yet persisted" - the store replaces it with a real
/// identity when the item is first saved.
pub type ItemId = i64;

/// Lifecycle status of an item. The enumeration is closed: unknown tokens
/// at the boundary are rejected, never defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    Current,
    Discontinued,
}

impl ItemStatus {
    /// Sort rank for listing: CURRENT items come before DISCONTINUED ones.
    pub fn sort_rank(&self) -> u8 {
        match self {
            ItemStatus::Current => 1,
            ItemStatus::Discontinued => 2,
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemStatus::Current => write!(f, "CURRENT"),
            ItemStatus::Discontinued => write!(f, "DISCONTINUED"),
        }
    }
}

/// Error returned when a status token does not name a known status.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid item status: {0}")]
pub struct ParseItemStatusError(pub String);

impl FromStr for ItemStatus {
    type Err = ParseItemStatusError;

    /// Parses a status token case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("current") {
            Ok(ItemStatus::Current)
        } else if s.eq_ignore_ascii_case("discontinued") {
            Ok(ItemStatus::Discontinued)
        } else {
            Err(ParseItemStatusError(s.to_string()))
        }
    }
}

/// A catalog item.
///
/// `created_at` is set once on creation and never mutated afterwards;
/// `last_modified_at` moves forward on every mutation. `discontinued_at`
/// is set exactly when the status transitions CURRENT -> DISCONTINUED and
/// cleared when the item returns to CURRENT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub status: ItemStatus,
    pub name: String,
    pub summary: String,
    pub created_at: DateTime<Utc>,
    pub last_modified_at: DateTime<Utc>,
    pub discontinued_at: Option<DateTime<Utc>>,
}

impl Item {
    /// Returns true if the store has not assigned an identity yet.
    pub fn is_new(&self) -> bool {
        self.id == 0
    }

    /// Sets a specific identity (useful for tests and store backends).
    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = id;
        self
    }
}

/// Incoming item fields, as supplied by a caller for create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub status: ItemStatus,
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parses_case_insensitively() {
        assert_eq!("current".parse::<ItemStatus>(), Ok(ItemStatus::Current));
        assert_eq!("CURRENT".parse::<ItemStatus>(), Ok(ItemStatus::Current));
        assert_eq!(
            "Discontinued".parse::<ItemStatus>(),
            Ok(ItemStatus::Discontinued)
        );
    }

    #[test]
    fn test_unknown_status_token_is_rejected() {
        let err = "retired".parse::<ItemStatus>().unwrap_err();
        assert_eq!(err, ParseItemStatusError("retired".to_string()));
        assert_eq!(err.to_string(), "Invalid item status: retired");
    }

    #[test]
    fn test_status_serializes_as_upper_snake() {
        let json = serde_json::to_string(&ItemStatus::Discontinued).unwrap();
        assert_eq!(json, "\"DISCONTINUED\"");

        let status: ItemStatus = serde_json::from_str("\"CURRENT\"").unwrap();
        assert_eq!(status, ItemStatus::Current);
    }

    #[test]
    fn test_sort_rank_orders_current_first() {
        assert!(ItemStatus::Current.sort_rank() < ItemStatus::Discontinued.sort_rank());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ItemStatus::Current.to_string(), "CURRENT");
        assert_eq!(ItemStatus::Discontinued.to_string(), "DISCONTINUED");
    }
}
