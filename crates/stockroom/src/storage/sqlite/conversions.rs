//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types,
//! testable in isolation without database access.

use chrono::{DateTime, Utc};
use rusqlite::Row;

use stockroom_core::item::{Item, ItemStatus};

/// Convert a SQLite row to an Item.
///
/// Expected columns: id, status, name, summary, created_at,
/// last_modified_at, discontinued_at
pub fn row_to_item(row: &Row) -> rusqlite::Result<Item> {
    let id: i64 = row.get(0)?;
    let status: String = row.get(1)?;
    let name: String = row.get(2)?;
    let summary: String = row.get(3)?;
    let created_at: String = row.get(4)?;
    let last_modified_at: String = row.get(5)?;
    let discontinued_at: Option<String> = row.get(6)?;

    Ok(Item {
        id,
        status: parse_status(&status)?,
        name,
        summary,
        created_at: parse_datetime(&created_at)?,
        last_modified_at: parse_datetime(&last_modified_at)?,
        discontinued_at: discontinued_at.as_deref().map(parse_datetime).transpose()?,
    })
}

/// Format a timestamp for storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Format the status for storage using its wire token.
pub fn format_status(status: ItemStatus) -> String {
    status.to_string()
}

fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

fn parse_status(s: &str) -> rusqlite::Result<ItemStatus> {
    s.parse().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(e) as Box<dyn std::error::Error + Send + Sync>,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_datetime_roundtrip() {
        let dt = Utc.with_ymd_and_hms(2025, 4, 1, 12, 30, 45).unwrap();
        let formatted = format_datetime(&dt);
        let parsed = parse_datetime(&formatted).unwrap();

        assert_eq!(parsed, dt);
    }

    #[test]
    fn test_invalid_datetime_is_rejected() {
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn test_status_roundtrip() {
        assert_eq!(format_status(ItemStatus::Current), "CURRENT");
        assert_eq!(parse_status("CURRENT").unwrap(), ItemStatus::Current);
        assert_eq!(
            parse_status("DISCONTINUED").unwrap(),
            ItemStatus::Discontinued
        );
    }

    #[test]
    fn test_unknown_status_column_is_rejected() {
        assert!(parse_status("RETIRED").is_err());
    }
}
