use serde::{Deserialize, Serialize};

/// Opaque, stable identifier of an authenticated caller, as issued by the
/// access gate. Cart entries are scoped by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<uuid::Uuid> for UserId {
    fn from(id: uuid::Uuid) -> Self {
        Self(crate::domain::shared::identifier::encode(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_user_id() {
        let user_id = UserId::new("test-user");
        assert_eq!(format!("{}", user_id), "test-user");
    }

    #[test]
    fn should_compare_user_ids_for_equality() {
        assert_eq!(UserId::new("same-user"), UserId::new("same-user"));
        assert_ne!(UserId::new("same-user"), UserId::new("different-user"));
    }

    #[test]
    fn should_build_from_uuid_in_canonical_form() {
        let id = uuid::Uuid::parse_str("67E55044-10B1-426F-9247-BB680E5FE0C8").unwrap();
        let user_id = UserId::from(id);
        assert_eq!(user_id.as_str(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
    }
}
