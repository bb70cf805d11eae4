#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth.name_empty")]
    NameEmpty,
    #[error("auth.invalid_email")]
    InvalidEmail,
    #[error("auth.password_too_short")]
    PasswordTooShort,
    #[error("auth.credentials_required")]
    CredentialsRequired,
    #[error("auth.email_taken")]
    EmailTaken,
    /// Unknown e-mail and wrong password are reported identically.
    #[error("auth.invalid_credentials")]
    InvalidCredentials,
    #[error("auth.invalid_token")]
    InvalidToken,
    #[error("auth.token_issue_failed")]
    TokenIssue,
    #[error("auth.hashing_failed")]
    Hashing,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
