use super::requirement::Requirement;

/// Source of optional upgrade suggestions attached to a recommendation.
pub trait UpgradeAdvisor: Send + Sync {
    fn suggest(&self, total_cost: f64, requirement: &Requirement) -> Vec<String>;
}

/// Suggests nothing. No upgrade rule set has been defined yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoUpgrades;

impl UpgradeAdvisor for NoUpgrades {
    fn suggest(&self, _total_cost: f64, _requirement: &Requirement) -> Vec<String> {
        Vec::new()
    }
}
