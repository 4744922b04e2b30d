//! Decision engine turning an application requirement into a recommended AWS
//! architecture, a monthly cost estimate, and preset alternatives.
//!
//! Flow: [`RequirementNormalizer`] → [`ScoringEngine`] → [`SelectionEngine`] →
//! [`CostEstimator`] → [`AlternativeSynthesizer`], assembled by
//! [`RecommendationEngine`].

pub mod advisor;
pub mod alternatives;
pub mod cost;
pub mod engine;
pub mod requirement;
pub mod router;
pub mod scoring;
pub mod selection;
pub mod upgrades;

#[cfg(test)]
mod tests;

pub use advisor::{suggest_application_type, WorkloadAnswers};
pub use alternatives::{AlternativeArchitecture, AlternativeSynthesizer};
pub use cost::{round_cents, CostBreakdown, CostEstimator, RecommendedService};
pub use engine::{
    application_types, ApplicationTypeView, EngineError, Explanation, Recommendation,
    RecommendationEngine,
};
pub use requirement::{
    RawRequirement, Requirement, RequirementNormalizer, StorageTier, ValidationError,
};
pub use router::planner_router;
pub use scoring::{BudgetTier, ComponentScores, Exclusion, ScoringEngine, ServiceScore};
pub use selection::{Selection, SelectionEngine};
pub use upgrades::{NoUpgrades, UpgradeAdvisor};
