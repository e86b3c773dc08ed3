//! Pure lifecycle rules for items.
//!
//! These functions own every timestamp and status transition so that the
//! service layer never computes entity state inline. They take `now` as a
//! parameter, which keeps them deterministic and directly testable.

use chrono::{DateTime, Utc};

use super::error::ItemError;
use super::types::{Item, ItemDraft, ItemStatus};

/// Builds a brand-new item from a draft.
///
/// The identity is left unassigned (0) for the store to fill in;
/// `created_at == last_modified_at == now` and `discontinued_at` is absent
/// regardless of the draft's status.
pub fn create_item(draft: &ItemDraft, now: DateTime<Utc>) -> Item {
    Item {
        id: 0,
        status: draft.status,
        name: draft.name.clone(),
        summary: draft.summary.clone(),
        created_at: now,
        last_modified_at: now,
        discontinued_at: None,
    }
}

/// Applies a full draft on top of the current persisted state.
///
/// Identity and `created_at` are preserved; name, status and summary are
/// replaced; `last_modified_at` becomes `now`.
pub fn apply_draft(current: &Item, draft: &ItemDraft, now: DateTime<Utc>) -> Item {
    Item {
        id: current.id,
        status: draft.status,
        name: draft.name.clone(),
        summary: draft.summary.clone(),
        created_at: current.created_at,
        last_modified_at: now,
        discontinued_at: discontinued_at_after(current, draft.status, now),
    }
}

/// Applies a status-only change on top of the current persisted state.
pub fn apply_status(current: &Item, status: ItemStatus, now: DateTime<Utc>) -> Item {
    Item {
        status,
        last_modified_at: now,
        discontinued_at: discontinued_at_after(current, status, now),
        ..current.clone()
    }
}

/// Validates a draft before it reaches the store.
pub fn validate_draft(draft: &ItemDraft) -> Result<(), ItemError> {
    if draft.name.trim().is_empty() {
        return Err(ItemError::EmptyName);
    }
    if draft.name.len() > 200 {
        return Err(ItemError::NameTooLong);
    }
    Ok(())
}

/// Computes the `discontinued_at` value after a status change.
///
/// - CURRENT -> DISCONTINUED stamps `now`.
/// - DISCONTINUED -> DISCONTINUED keeps the original timestamp.
/// - Any transition to CURRENT clears it.
fn discontinued_at_after(
    current: &Item,
    new_status: ItemStatus,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match new_status {
        ItemStatus::Discontinued => match current.status {
            ItemStatus::Current => Some(now),
            ItemStatus::Discontinued => current.discontinued_at,
        },
        ItemStatus::Current => None,
    }
}
