// Collaborator stores. The credential store stands in for the external user
// database the gate consults at login; the project store backs the
// dashboard's tracking endpoints. Both are memory-backed here.

pub mod projects;
pub mod users;

pub use projects::{Project, ProjectStatus, ProjectStore};
pub use users::{hash_password, CredentialStore, MemoryCredentialStore, UserRecord};
