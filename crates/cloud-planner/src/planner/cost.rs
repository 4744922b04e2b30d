use std::sync::Arc;

use serde::Serialize;

use super::requirement::Requirement;
use crate::catalog::{Level, PricingModel, ServiceCategory, ServiceDescriptor};

/// Requests covered by one `perTrafficUnit` charge.
pub const TRAFFIC_UNIT_REQUESTS: u64 = 10_000;

pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Unrounded monthly cost split by pricing component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub base: f64,
    pub traffic: f64,
    pub requests: f64,
    pub storage: f64,
}

impl CostBreakdown {
    pub fn total(&self) -> f64 {
        self.base + self.traffic + self.requests + self.storage
    }
}

/// Service entry in a recommendation, with its rounded monthly estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedService {
    pub service: String,
    pub category: ServiceCategory,
    pub reason: String,
    pub estimated_cost: f64,
}

/// Prices selected services against the static pricing model.
#[derive(Debug, Clone)]
pub struct CostEstimator {
    pricing: Arc<PricingModel>,
}

impl CostEstimator {
    pub fn new(pricing: Arc<PricingModel>) -> Self {
        Self { pricing }
    }

    /// Services without a pricing entry cost nothing.
    pub fn breakdown(
        &self,
        service: &ServiceDescriptor,
        requirement: &Requirement,
    ) -> CostBreakdown {
        let Some(entry) = self.pricing.entry(&service.id) else {
            return CostBreakdown::default();
        };

        let volume = requirement.request_volume();
        let storage_gb = requirement.storage_gb() as f64;
        let traffic_units = (volume / TRAFFIC_UNIT_REQUESTS) as f64;
        let million_requests = volume as f64 / 1_000_000.0;

        let generic_storage = entry.generic_storage_rate().unwrap_or(0.0) * storage_gb;
        let dedicated_storage = entry.per_gb_storage.unwrap_or(0.0) * storage_gb;

        CostBreakdown {
            base: entry.base_cost.unwrap_or(0.0),
            traffic: entry.per_traffic_unit.unwrap_or(0.0) * traffic_units,
            requests: entry.per_million_requests.unwrap_or(0.0) * million_requests,
            storage: generic_storage + dedicated_storage,
        }
    }

    pub fn service_cost(&self, service: &ServiceDescriptor, requirement: &Requirement) -> f64 {
        round_cents(self.breakdown(service, requirement).total())
    }

    /// Sum of the individually rounded service costs, rounded again.
    pub fn total_cost<'a, I>(&self, services: I, requirement: &Requirement) -> f64
    where
        I: IntoIterator<Item = &'a ServiceDescriptor>,
    {
        let sum: f64 = services
            .into_iter()
            .map(|service| self.service_cost(service, requirement))
            .sum();
        round_cents(sum)
    }

    pub fn validate_budget(total_cost: f64, monthly_budget: f64) -> bool {
        total_cost <= monthly_budget
    }

    pub fn recommended_services<'a, I>(
        &self,
        services: I,
        requirement: &Requirement,
    ) -> Vec<RecommendedService>
    where
        I: IntoIterator<Item = &'a ServiceDescriptor>,
    {
        services
            .into_iter()
            .map(|service| RecommendedService {
                service: service.name.clone(),
                category: service.category,
                reason: service_reason(service, requirement),
                estimated_cost: self.service_cost(service, requirement),
            })
            .collect()
    }
}

/// Customer-facing explanation for including a service.
pub fn service_reason(service: &ServiceDescriptor, requirement: &Requirement) -> String {
    let mut reasons = Vec::new();

    if service.operational_effort == Level::Low && requirement.operational_effort() == Level::Low {
        reasons.push("Fully managed, minimal maintenance".to_string());
    }
    if service.cost_level == Level::Low {
        reasons.push("Cost-effective".to_string());
    }
    if service.scalability == Level::High && requirement.traffic() == Level::High {
        reasons.push("Scales automatically to handle high traffic".to_string());
    }
    if service.supports(requirement.application_type()) {
        reasons.push(format!(
            "Optimized for {}",
            requirement.application_type().tag().replace('-', " ")
        ));
    }

    if reasons.is_empty() {
        service.description.clone()
    } else {
        reasons.join(", ")
    }
}
