use super::model::AuthContext;

/// Resolves a bearer token into the caller's identity.
///
/// Never fails: an unusable token yields [`AuthContext::Anonymous`] and the
/// protected operation decides to reject it.
pub trait AccessGate: Send + Sync {
    fn resolve(&self, bearer_token: &str) -> AuthContext;
}
