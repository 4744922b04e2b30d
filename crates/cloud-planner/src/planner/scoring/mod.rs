mod eligibility;
mod tables;

pub use eligibility::Exclusion;
pub use tables::BudgetTier;

use std::sync::Arc;

use serde::Serialize;

use super::requirement::Requirement;
use crate::catalog::{ServiceCatalog, ServiceDescriptor};

/// Composite weights in tenths: 0.4 cost, 0.3 scalability, 0.2 operational, 0.1 use case.
const COST_WEIGHT: u32 = 4;
const SCALABILITY_WEIGHT: u32 = 3;
const OPERATIONAL_WEIGHT: u32 = 2;
const USE_CASE_WEIGHT: u32 = 1;
const WEIGHT_TOTAL: u32 = COST_WEIGHT + SCALABILITY_WEIGHT + OPERATIONAL_WEIGHT + USE_CASE_WEIGHT;

/// Per-criterion match values, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentScores {
    pub cost: u8,
    pub scalability: u8,
    pub operational: u8,
    pub use_case: u8,
}

impl ComponentScores {
    pub fn composite(&self) -> f64 {
        let weighted = COST_WEIGHT * u32::from(self.cost)
            + SCALABILITY_WEIGHT * u32::from(self.scalability)
            + OPERATIONAL_WEIGHT * u32::from(self.operational)
            + USE_CASE_WEIGHT * u32::from(self.use_case);
        f64::from(weighted) / f64::from(WEIGHT_TOTAL)
    }

    /// Short phrases for every component scoring at least 80.
    pub fn reason(&self) -> String {
        let phrases: Vec<&str> = [
            (self.cost, "cost-effective"),
            (self.scalability, "scales well"),
            (self.operational, "matches operational preference"),
            (self.use_case, "optimized for use case"),
        ]
        .into_iter()
        .filter(|(score, _)| *score >= 80)
        .map(|(_, phrase)| phrase)
        .collect();

        if phrases.is_empty() {
            "Suitable for requirements".to_string()
        } else {
            phrases.join(", ")
        }
    }
}

/// Scored candidate for one eligible service.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceScore<'a> {
    pub service: &'a ServiceDescriptor,
    pub components: ComponentScores,
    pub composite: f64,
    pub reason: String,
}

/// Applies the eligibility filter and weighted scoring to the catalog.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    catalog: Arc<ServiceCatalog>,
}

impl ScoringEngine {
    pub fn new(catalog: Arc<ServiceCatalog>) -> Self {
        Self { catalog }
    }

    /// Services removed by the eligibility filter, with the first rule that fired.
    pub fn excluded(&self, requirement: &Requirement) -> Vec<(&ServiceDescriptor, Exclusion)> {
        self.catalog
            .all()
            .iter()
            .filter_map(|service| {
                eligibility::check(service, requirement)
                    .err()
                    .map(|exclusion| (service, exclusion))
            })
            .collect()
    }

    /// Scores every eligible service, in catalog order.
    pub fn score(&self, requirement: &Requirement) -> Vec<ServiceScore<'_>> {
        self.catalog
            .all()
            .iter()
            .filter(|service| eligibility::check(service, requirement).is_ok())
            .map(|service| score_service(service, requirement))
            .collect()
    }
}

pub fn score_service<'a>(
    service: &'a ServiceDescriptor,
    requirement: &Requirement,
) -> ServiceScore<'a> {
    let components = ComponentScores {
        cost: tables::cost_match(
            BudgetTier::classify(requirement.monthly_budget()),
            service.cost_level,
        ),
        scalability: tables::scalability_match(requirement.traffic(), service.scalability),
        operational: tables::operational_match(
            requirement.operational_effort(),
            service.operational_effort,
        ),
        use_case: tables::use_case_match(service, requirement.application_type()),
    };

    ServiceScore {
        service,
        composite: components.composite(),
        reason: components.reason(),
        components,
    }
}
