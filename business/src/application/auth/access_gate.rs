use std::sync::Arc;

use crate::domain::auth::gate::AccessGate;
use crate::domain::auth::model::AuthContext;
use crate::domain::auth::services::TokenService;
use crate::domain::logger::Logger;

/// Access gate backed by signed bearer tokens.
pub struct TokenAccessGate {
    pub tokens: Arc<dyn TokenService>,
    pub logger: Arc<dyn Logger>,
}

impl AccessGate for TokenAccessGate {
    fn resolve(&self, bearer_token: &str) -> AuthContext {
        match self.tokens.verify(bearer_token) {
            Ok(user_id) => {
                self.logger
                    .debug(&format!("Resolved caller: {}", user_id));
                AuthContext::Authenticated { user_id }
            }
            Err(e) => {
                self.logger.warn(&format!("Bearer token rejected: {}", e));
                AuthContext::Anonymous
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::errors::AuthError;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;

    mock! {
        pub Tokens {}

        impl TokenService for Tokens {
            fn issue(&self, user_id: &UserId) -> Result<String, AuthError>;
            fn verify(&self, token: &str) -> Result<UserId, AuthError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn gate() -> TokenAccessGate {
        let mut tokens = MockTokens::new();
        tokens.expect_verify().returning(|token| match token {
            "valid-token" => Ok(UserId::new("user-a")),
            _ => Err(AuthError::InvalidToken),
        });
        TokenAccessGate {
            tokens: Arc::new(tokens),
            logger: mock_logger(),
        }
    }

    #[test]
    fn should_authenticate_valid_token() {
        assert_eq!(
            gate().resolve("valid-token"),
            AuthContext::Authenticated {
                user_id: UserId::new("user-a")
            }
        );
    }

    #[test]
    fn should_fall_back_to_anonymous_for_invalid_token() {
        assert_eq!(gate().resolve("forged"), AuthContext::Anonymous);
        assert_eq!(gate().resolve(""), AuthContext::Anonymous);
    }
}
