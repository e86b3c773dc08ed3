//! SQLite schema definition and SQL query constants.
//!
//! All SQL lives here as pure data so the repository code stays free of
//! inline query strings.

/// SQL statement to create the items table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    status TEXT NOT NULL,
    name TEXT NOT NULL,
    summary TEXT NOT NULL,
    created_at TEXT NOT NULL,
    last_modified_at TEXT NOT NULL,
    discontinued_at TEXT
);

-- Status filtering is a first-class query, so index it.
CREATE INDEX IF NOT EXISTS idx_items_status ON items(status);
"#;

pub const INSERT_ITEM: &str = r#"
INSERT INTO items (status, name, summary, created_at, last_modified_at, discontinued_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
"#;

pub const SELECT_ITEM_BY_ID: &str = r#"
SELECT id, status, name, summary, created_at, last_modified_at, discontinued_at
FROM items
WHERE id = ?1
"#;

pub const SELECT_ITEMS: &str = r#"
SELECT id, status, name, summary, created_at, last_modified_at, discontinued_at
FROM items
"#;

pub const SELECT_ITEMS_BY_STATUS: &str = r#"
SELECT id, status, name, summary, created_at, last_modified_at, discontinued_at
FROM items
WHERE status = ?1
"#;

pub const UPDATE_ITEM: &str = r#"
UPDATE items
SET status = ?2, name = ?3, summary = ?4, last_modified_at = ?5, discontinued_at = ?6
WHERE id = ?1
"#;

pub const DELETE_ITEM: &str = r#"
DELETE FROM items
WHERE id = ?1
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_defines_items_and_index() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS items"));
        assert!(CREATE_TABLES.contains("idx_items_status"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(INSERT_ITEM.contains("INSERT"));
        assert!(SELECT_ITEM_BY_ID.contains("WHERE id"));
        assert!(SELECT_ITEMS_BY_STATUS.contains("WHERE status"));
        assert!(UPDATE_ITEM.contains("UPDATE"));
        // created_at is written once and never updated
        assert!(!UPDATE_ITEM.contains("created_at"));
        assert!(DELETE_ITEM.contains("DELETE"));
    }
}
