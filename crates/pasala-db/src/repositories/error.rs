//! Error handling utilities for repositories

use pasala_core::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

/// Like `map_unique_violation`, also translating foreign key violations
pub fn map_constraint_violation<U, F>(e: SqlxError, on_unique: U, on_foreign_key: F) -> DomainError
where
    U: FnOnce() -> DomainError,
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
        if db_err.is_foreign_key_violation() {
            return on_foreign_key();
        }
    }
    map_db_error(e)
}

/// LIKE patterns matching any of the fragments as substrings.
///
/// Fragments come from `normalize_name`, which strips `%` and `_`.
pub fn contains_patterns(fragments: &[String]) -> Vec<String> {
    fragments
        .iter()
        .filter(|f| !f.is_empty())
        .map(|f| format!("%{f}%"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_patterns_skips_empty() {
        let patterns = contains_patterns(&["ana".to_string(), String::new()]);
        assert_eq!(patterns, vec!["%ana%".to_string()]);
    }

    #[test]
    fn test_non_database_error_passes_through() {
        let err = map_unique_violation(SqlxError::RowNotFound, || DomainError::DuplicatePlayer);
        assert_eq!(err.code(), "DATABASE_ERROR");
    }
}
