use crate::domain::errors::DomainError;
use crate::domain::product::ProductSlug;

const CNT_PRODUCT_SLUG: &str = "products_slug_key";
const CNT_PRODUCT_TITLE: &str = "products_title_key";
const CNT_PRODUCT_PRICE_CHECK: &str = "products_price_non_negative_chk";
const CNT_PRODUCT_STOCK_CHECK: &str = "products_stock_non_negative_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    map_sqlx_for_slug(err, None)
}

/// Like [`map_sqlx`], but a slug unique-constraint violation becomes a
/// [`DomainError::SlugConflict`] naming the slug that lost the race.
pub fn map_sqlx_for_slug(err: sqlx::Error, slug: Option<&ProductSlug>) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_PRODUCT_SLUG => match slug {
                        Some(slug) => DomainError::SlugConflict(slug.as_str().to_string()),
                        None => DomainError::Conflict("slug already exists".into()),
                    },
                    CNT_PRODUCT_TITLE => DomainError::Conflict("title already exists".into()),
                    CNT_PRODUCT_PRICE_CHECK => {
                        DomainError::Validation("price must be non-negative".into())
                    }
                    CNT_PRODUCT_STOCK_CHECK => {
                        DomainError::Validation("stock must be non-negative".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            tracing::error!(error = %db_err, "database error");
            DomainError::Persistence(db_err.message().to_string())
        }
        _ => {
            tracing::error!(error = %err, "database error");
            DomainError::Persistence(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    #[derive(Debug)]
    struct UniqueViolation {
        constraint: Option<&'static str>,
    }

    impl fmt::Display for UniqueViolation {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("duplicate key value violates unique constraint")
        }
    }

    impl StdError for UniqueViolation {}

    impl DatabaseError for UniqueViolation {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed("23505"))
        }

        fn constraint(&self) -> Option<&str> {
            self.constraint
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::UniqueViolation
        }
    }

    fn unique_violation(constraint: Option<&'static str>) -> sqlx::Error {
        sqlx::Error::Database(Box::new(UniqueViolation { constraint }))
    }

    #[test]
    fn slug_constraint_names_the_slug_that_lost() {
        let slug = ProductSlug::new("red_shoes").unwrap();
        let err = map_sqlx_for_slug(unique_violation(Some(CNT_PRODUCT_SLUG)), Some(&slug));
        match err {
            DomainError::SlugConflict(taken) => assert_eq!(taken, "red_shoes"),
            other => panic!("expected slug conflict, got {other:?}"),
        }
    }

    #[test]
    fn slug_constraint_without_known_slug_is_a_plain_conflict() {
        let err = map_sqlx(unique_violation(Some(CNT_PRODUCT_SLUG)));
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn title_constraint_is_a_conflict_even_when_writing_a_slug() {
        let slug = ProductSlug::new("red_shoes").unwrap();
        let err = map_sqlx_for_slug(unique_violation(Some(CNT_PRODUCT_TITLE)), Some(&slug));
        match err {
            DomainError::Conflict(msg) => assert_eq!(msg, "title already exists"),
            other => panic!("expected title conflict, got {other:?}"),
        }
    }

    #[test]
    fn unnamed_unique_violation_falls_back_to_sqlstate() {
        let err = map_sqlx(unique_violation(None));
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn non_database_errors_are_opaque_persistence_failures() {
        let err = map_sqlx_for_slug(sqlx::Error::RowNotFound, None);
        assert!(matches!(err, DomainError::Persistence(_)));
        let err = map_sqlx(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, DomainError::Persistence(_)));
    }
}
