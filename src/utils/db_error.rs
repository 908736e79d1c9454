//! Helpers for classifying database errors.

/// Name of the unique constraint over `books (title, author)`.
pub const BOOKS_TITLE_AUTHOR_KEY: &str = "books_title_author_key";

/// Returns true if `e` is a unique violation raised by `constraint`.
pub fn is_unique_violation_on(e: &sqlx::Error, constraint: &str) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.constraint() == Some(constraint)
}

/// Coarse category of a database failure, safe to expose in error details.
pub fn sqlx_error_kind(e: &sqlx::Error) -> &'static str {
    match e {
        sqlx::Error::Database(_) => "database",
        sqlx::Error::PoolTimedOut => "pool_timeout",
        sqlx::Error::PoolClosed => "pool_closed",
        sqlx::Error::Io(_) | sqlx::Error::Tls(_) | sqlx::Error::Protocol(_) => "connection",
        sqlx::Error::RowNotFound => "row_not_found",
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => "decode",
        _ => "other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlx_error_kind() {
        assert_eq!(sqlx_error_kind(&sqlx::Error::PoolTimedOut), "pool_timeout");
        assert_eq!(sqlx_error_kind(&sqlx::Error::PoolClosed), "pool_closed");
        assert_eq!(sqlx_error_kind(&sqlx::Error::RowNotFound), "row_not_found");
    }

    #[test]
    fn test_non_database_error_is_not_unique_violation() {
        assert!(!is_unique_violation_on(
            &sqlx::Error::RowNotFound,
            BOOKS_TITLE_AUTHOR_KEY
        ));
        assert!(!is_unique_violation_on(
            &sqlx::Error::PoolTimedOut,
            BOOKS_TITLE_AUTHOR_KEY
        ));
    }
}
