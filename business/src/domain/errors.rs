/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.duplicated")]
    Duplicated,
    /// A storage-level constraint (CHECK, numeric range) rejected the data.
    #[error("repository.constraint_violation")]
    ConstraintViolation,
    #[error("repository.timeout")]
    Timeout,
    #[error("repository.database_error")]
    DatabaseError,
}

impl RepositoryError {
    /// True when the failure is on the store's side rather than the caller's.
    pub fn is_store_failure(&self) -> bool {
        matches!(
            self,
            RepositoryError::Timeout | RepositoryError::DatabaseError
        )
    }
}
