use thiserror::Error;

/// Validation errors for incoming item drafts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("Item name cannot be empty")]
    EmptyName,
    #[error("Item name cannot exceed 200 characters")]
    NameTooLong,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_display() {
        assert_eq!(ItemError::EmptyName.to_string(), "Item name cannot be empty");
    }

    #[test]
    fn test_name_too_long_display() {
        assert_eq!(
            ItemError::NameTooLong.to_string(),
            "Item name cannot exceed 200 characters"
        );
    }
}
