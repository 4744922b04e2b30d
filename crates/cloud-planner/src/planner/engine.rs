use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error};

use super::alternatives::{AlternativeArchitecture, AlternativeSynthesizer};
use super::cost::{round_cents, CostBreakdown, CostEstimator, RecommendedService};
use super::requirement::{RawRequirement, Requirement, RequirementNormalizer, ValidationError};
use super::scoring::{Exclusion, ScoringEngine, ServiceScore};
use super::selection::{Selection, SelectionEngine};
use super::upgrades::{NoUpgrades, UpgradeAdvisor};
use crate::catalog::{
    ApplicationType, KnowledgeBase, PricingModel, ServiceCatalog, ServiceDescriptor,
};

const WITHIN_BUDGET_MESSAGE: &str = "Architecture fits within your budget!";

/// Final answer for one requirement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub architecture: Vec<RecommendedService>,
    pub total_cost: f64,
    pub budget: f64,
    pub within_budget: bool,
    pub alternatives: Vec<AlternativeArchitecture>,
    pub optional_upgrades: Vec<String>,
    pub message: String,
}

/// Tag and display label for one supported application type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApplicationTypeView {
    pub tag: &'static str,
    pub label: &'static str,
}

/// Intermediate results behind a recommendation, for operator-facing output.
#[derive(Debug, Clone)]
pub struct Explanation<'a> {
    pub ranked: Vec<ServiceScore<'a>>,
    pub excluded: Vec<(&'a ServiceDescriptor, Exclusion)>,
    pub costs: Vec<(&'a ServiceDescriptor, CostBreakdown)>,
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Details are logged, never returned to the caller.
    #[error("internal error while computing recommendation")]
    Internal,
}

/// Assembles normalization, scoring, selection, costing, and alternatives.
///
/// Holds only read-only shared state, so one instance can serve any number of
/// concurrent requests.
pub struct RecommendationEngine<U = NoUpgrades> {
    catalog: Arc<ServiceCatalog>,
    normalizer: RequirementNormalizer,
    scoring: ScoringEngine,
    selection: SelectionEngine,
    costs: CostEstimator,
    alternatives: AlternativeSynthesizer,
    upgrades: U,
}

impl RecommendationEngine<NoUpgrades> {
    pub fn new(knowledge: &KnowledgeBase) -> Self {
        Self::with_upgrades(knowledge, NoUpgrades)
    }
}

impl<U> RecommendationEngine<U>
where
    U: UpgradeAdvisor,
{
    pub fn with_upgrades(knowledge: &KnowledgeBase, upgrades: U) -> Self {
        Self::from_parts(
            knowledge.catalog.clone(),
            knowledge.pricing.clone(),
            RequirementNormalizer::new(),
            upgrades,
        )
    }

    pub fn from_parts(
        catalog: Arc<ServiceCatalog>,
        pricing: Arc<PricingModel>,
        normalizer: RequirementNormalizer,
        upgrades: U,
    ) -> Self {
        Self {
            scoring: ScoringEngine::new(catalog.clone()),
            selection: SelectionEngine::new(),
            costs: CostEstimator::new(pricing),
            alternatives: AlternativeSynthesizer::new(),
            catalog,
            normalizer,
            upgrades,
        }
    }

    pub fn normalize(&self, raw: &RawRequirement) -> Result<Requirement, ValidationError> {
        self.normalizer.normalize(raw).map_err(|err| {
            debug!(field = err.field(), error = %err, "requirement rejected");
            err
        })
    }

    pub fn compute_recommendation(
        &self,
        raw: &RawRequirement,
    ) -> Result<Recommendation, EngineError> {
        let requirement = self.normalize(raw)?;
        self.recommend(&requirement)
    }

    pub fn recommend(&self, requirement: &Requirement) -> Result<Recommendation, EngineError> {
        let scored = self.scoring.score(requirement);
        let selection = self.selection.select(scored, &self.catalog);

        let architecture = self
            .costs
            .recommended_services(selection.services(), requirement);
        let total_cost = self.costs.total_cost(selection.services(), requirement);

        if let Err(detail) = check_consistency(&selection, &architecture, total_cost) {
            error!(
                application_type = requirement.application_type().tag(),
                %detail,
                "recommendation computation failed"
            );
            return Err(EngineError::Internal);
        }

        let budget = requirement.monthly_budget();
        let within_budget = CostEstimator::validate_budget(total_cost, budget);
        let alternatives = self.alternatives.synthesize(requirement);
        let optional_upgrades = self.upgrades.suggest(total_cost, requirement);

        debug!(
            application_type = requirement.application_type().tag(),
            selected = architecture.len(),
            total_cost,
            within_budget,
            "recommendation computed"
        );

        Ok(Recommendation {
            architecture,
            total_cost,
            budget: round_cents(budget),
            within_budget,
            alternatives,
            optional_upgrades,
            message: budget_message(total_cost, budget, within_budget),
        })
    }

    /// Eligible services ordered by rank, highest composite first.
    pub fn score_candidates(&self, requirement: &Requirement) -> Vec<ServiceScore<'_>> {
        self.selection.rank(self.scoring.score(requirement))
    }

    pub fn explain(&self, requirement: &Requirement) -> Explanation<'_> {
        let ranked = self.score_candidates(requirement);
        let selection = self.selection.select(ranked.clone(), &self.catalog);
        let costs = selection
            .services()
            .map(|service| (service, self.costs.breakdown(service, requirement)))
            .collect();

        Explanation {
            ranked,
            excluded: self.scoring.excluded(requirement),
            costs,
        }
    }

    pub fn list_services(&self) -> &[ServiceDescriptor] {
        self.catalog.all()
    }

    pub fn list_application_types(&self) -> Vec<ApplicationTypeView> {
        application_types()
    }
}

pub fn application_types() -> Vec<ApplicationTypeView> {
    ApplicationType::ordered()
        .into_iter()
        .map(|application_type| ApplicationTypeView {
            tag: application_type.tag(),
            label: application_type.label(),
        })
        .collect()
}

fn budget_message(total_cost: f64, budget: f64, within_budget: bool) -> String {
    if within_budget {
        WITHIN_BUDGET_MESSAGE.to_string()
    } else {
        format!(
            "Warning: Recommended architecture exceeds budget by ${:.2}. Consider the budget-optimized alternative.",
            round_cents(total_cost - budget)
        )
    }
}

fn check_consistency(
    selection: &Selection<'_>,
    architecture: &[RecommendedService],
    total_cost: f64,
) -> Result<(), String> {
    for winner in &selection.winners {
        let components = winner.components;
        let in_range = [
            components.cost,
            components.scalability,
            components.operational,
            components.use_case,
        ]
        .iter()
        .all(|score| *score <= 100);

        if !in_range || !(0.0..=100.0).contains(&winner.composite) {
            return Err(format!(
                "service '{}' scored outside 0..=100 (composite {})",
                winner.service.id, winner.composite
            ));
        }
    }

    if let Some(service) = architecture
        .iter()
        .find(|service| !service.estimated_cost.is_finite() || service.estimated_cost < 0.0)
    {
        return Err(format!(
            "service '{}' produced cost {}",
            service.service, service.estimated_cost
        ));
    }

    if !total_cost.is_finite() {
        return Err(format!("total cost {total_cost} is not finite"));
    }

    Ok(())
}
