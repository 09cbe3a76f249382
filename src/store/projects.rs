use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

/// A tracked student/course project on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub owner: Uuid,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Planned,
    Active,
    Completed,
}

/// Memory-backed project records. Stands in for the out-of-scope database;
/// handler-facing surface only.
#[derive(Default)]
pub struct ProjectStore {
    projects: RwLock<Vec<Project>>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<Project> {
        self.projects.read().await.clone()
    }

    pub async fn create(
        &self,
        title: String,
        description: String,
        owner: Uuid,
    ) -> Project {
        let now = Utc::now();
        let project = Project {
            id: Uuid::new_v4(),
            title,
            description,
            owner,
            status: ProjectStatus::Planned,
            created_at: now,
            updated_at: now,
        };
        self.projects.write().await.push(project.clone());
        project
    }

    pub async fn update(
        &self,
        id: Uuid,
        title: Option<String>,
        description: Option<String>,
        status: Option<ProjectStatus>,
    ) -> Option<Project> {
        let mut projects = self.projects.write().await;
        let project = projects.iter_mut().find(|p| p.id == id)?;
        if let Some(title) = title {
            project.title = title;
        }
        if let Some(description) = description {
            project.description = description;
        }
        if let Some(status) = status {
            project.status = status;
        }
        project.updated_at = Utc::now();
        Some(project.clone())
    }

    pub async fn delete(&self, id: Uuid) -> bool {
        let mut projects = self.projects.write().await;
        let before = projects.len();
        projects.retain(|p| p.id != id);
        projects.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_update_delete() {
        let store = ProjectStore::new();
        let owner = Uuid::new_v4();

        let project = store
            .create("Robotics".into(), "Line-follower robot".into(), owner)
            .await;
        assert_eq!(project.status, ProjectStatus::Planned);
        assert_eq!(store.list().await.len(), 1);

        let updated = store
            .update(project.id, None, None, Some(ProjectStatus::Active))
            .await
            .unwrap();
        assert_eq!(updated.status, ProjectStatus::Active);
        assert_eq!(updated.title, "Robotics");

        assert!(store.delete(project.id).await);
        assert!(!store.delete(project.id).await);
        assert!(store.list().await.is_empty());
    }
}
