use serde::{Deserialize, Serialize};

use super::claims::Tier;

/// The unit permissions are granted over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Create => write!(f, "create"),
            Action::Read => write!(f, "read"),
            Action::Update => write!(f, "update"),
            Action::Delete => write!(f, "delete"),
        }
    }
}

/// Static permission table: admins do everything, editors cannot delete,
/// viewers are read-only. Total over both enumerations.
pub fn allows(tier: Tier, action: Action) -> bool {
    match (tier, action) {
        (Tier::Admin, _) => true,
        (Tier::Editor, Action::Create | Action::Read | Action::Update) => true,
        (Tier::Editor, Action::Delete) => false,
        (Tier::Viewer, Action::Read) => true,
        (Tier::Viewer, Action::Create | Action::Update | Action::Delete) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIERS: [Tier; 3] = [Tier::Admin, Tier::Editor, Tier::Viewer];
    const ACTIONS: [Action; 4] =
        [Action::Create, Action::Read, Action::Update, Action::Delete];

    #[test]
    fn test_lookup_is_total() {
        for tier in TIERS {
            for action in ACTIONS {
                // Every pair answers; no pair panics
                let _ = allows(tier, action);
            }
        }
    }

    #[test]
    fn test_admin_allows_everything() {
        for action in ACTIONS {
            assert!(allows(Tier::Admin, action));
        }
    }

    #[test]
    fn test_editor_cannot_delete() {
        assert!(allows(Tier::Editor, Action::Create));
        assert!(allows(Tier::Editor, Action::Read));
        assert!(allows(Tier::Editor, Action::Update));
        assert!(!allows(Tier::Editor, Action::Delete));
    }

    #[test]
    fn test_viewer_is_read_only() {
        assert!(allows(Tier::Viewer, Action::Read));
        assert!(!allows(Tier::Viewer, Action::Create));
        assert!(!allows(Tier::Viewer, Action::Update));
        assert!(!allows(Tier::Viewer, Action::Delete));
    }
}
