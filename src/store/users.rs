use async_trait::async_trait;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::auth::Role;

/// A persisted user as the credential store returns it.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password_hash: String,
}

impl UserRecord {
    pub fn verify_password(&self, candidate: &str) -> bool {
        hash_password(candidate) == self.password_hash
    }
}

/// Digest stand-in for the externally supplied password primitive.
pub fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

/// User lookup by identifier, supplied by a collaborator. The auth core
/// only reads from it.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Option<UserRecord>;
    async fn find_by_id(&self, id: Uuid) -> Option<UserRecord>;
    async fn list(&self) -> Vec<UserRecord>;
}

/// In-memory credential store used by the server and the test suite.
pub struct MemoryCredentialStore {
    users: Vec<UserRecord>,
}

impl MemoryCredentialStore {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    /// Demo accounts, one per role.
    pub fn seeded() -> Self {
        Self::new(vec![
            UserRecord {
                id: Uuid::new_v4(),
                name: "Site Admin".to_string(),
                email: "admin@classtrack.test".to_string(),
                role: Role::Admin,
                password_hash: hash_password("admin-password"),
            },
            UserRecord {
                id: Uuid::new_v4(),
                name: "Ina Structor".to_string(),
                email: "instructor@classtrack.test".to_string(),
                role: Role::Instructor,
                password_hash: hash_password("instructor-password"),
            },
            UserRecord {
                id: Uuid::new_v4(),
                name: "Stu Dent".to_string(),
                email: "student@classtrack.test".to_string(),
                role: Role::Student,
                password_hash: hash_password("student-password"),
            },
        ])
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        self.users.iter().find(|u| u.email == email).cloned()
    }

    async fn find_by_id(&self, id: Uuid) -> Option<UserRecord> {
        self.users.iter().find(|u| u.id == id).cloned()
    }

    async fn list(&self) -> Vec<UserRecord> {
        self.users.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_verification() {
        let user = UserRecord {
            id: Uuid::new_v4(),
            name: "Test".into(),
            email: "t@classtrack.test".into(),
            role: Role::Student,
            password_hash: hash_password("hunter2"),
        };
        assert!(user.verify_password("hunter2"));
        assert!(!user.verify_password("hunter3"));
    }

    #[tokio::test]
    async fn test_lookup_by_email_and_id() {
        let store = MemoryCredentialStore::seeded();
        let admin = store.find_by_email("admin@classtrack.test").await.unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert!(store.find_by_id(admin.id).await.is_some());
        assert!(store.find_by_email("nobody@classtrack.test").await.is_none());
    }
}
