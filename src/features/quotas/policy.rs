use crate::features::users::models::Tier;

/// Per-tier entity caps. `None` means unlimited.
///
/// Single source of truth for quota policy; both creation paths consult this
/// table instead of hard-coding caps in handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierPolicy {
    pub max_projects: Option<i64>,
    pub max_components_per_project: Option<i64>,
}

impl TierPolicy {
    pub fn for_tier(tier: Tier) -> Self {
        match tier {
            Tier::Demo => Self {
                max_projects: Some(1),
                max_components_per_project: Some(3),
            },
            Tier::Free => Self {
                max_projects: Some(1),
                max_components_per_project: Some(5),
            },
            Tier::Pro | Tier::Team => Self {
                max_projects: None,
                max_components_per_project: None,
            },
        }
    }

    /// Whether a user at `current` owned projects may create another
    pub fn allows_project(&self, current: i64) -> bool {
        match self.max_projects {
            Some(max) => current < max,
            None => true,
        }
    }

    /// Whether a project at `current` components may take another
    pub fn allows_component(&self, current: i64) -> bool {
        match self.max_components_per_project {
            Some(max) => current < max,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_caps() {
        let policy = TierPolicy::for_tier(Tier::Demo);
        assert!(policy.allows_project(0));
        assert!(!policy.allows_project(1));
        assert!(policy.allows_component(2));
        assert!(!policy.allows_component(3));
    }

    #[test]
    fn test_free_caps() {
        let policy = TierPolicy::for_tier(Tier::Free);
        assert!(policy.allows_project(0));
        assert!(!policy.allows_project(1));
        assert!(policy.allows_component(4));
        assert!(!policy.allows_component(5));
    }

    #[test]
    fn test_paid_tiers_unlimited() {
        for tier in [Tier::Pro, Tier::Team] {
            let policy = TierPolicy::for_tier(tier);
            assert!(policy.allows_project(10_000));
            assert!(policy.allows_component(10_000));
        }
    }
}
