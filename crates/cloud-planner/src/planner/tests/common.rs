use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::catalog::{
    ApplicationType, Level, PricingEntry, PricingModel, ServiceCatalog, ServiceCategory,
    ServiceDescriptor,
};
use crate::planner::{RawRequirement, RecommendationEngine, Requirement, RequirementNormalizer};

pub(super) fn service(id: &str, category: ServiceCategory) -> ServiceDescriptor {
    ServiceDescriptor {
        id: id.to_string(),
        name: format!("Service {id}"),
        category,
        cost_level: Level::Low,
        scalability: Level::High,
        operational_effort: Level::Low,
        use_cases: BTreeSet::from([ApplicationType::StaticWebsite]),
        description: format!("{id} test service"),
        mandatory: false,
    }
}

/// Single storage service with base 1.0 and 0.02 per stored GB.
pub(super) fn storage_service() -> ServiceDescriptor {
    service("storage-1", ServiceCategory::Storage)
}

pub(super) fn storage_pricing() -> PricingEntry {
    PricingEntry {
        base_cost: Some(1.0),
        per_gb_storage: Some(0.02),
        ..PricingEntry::default()
    }
}

pub(super) fn security_service() -> ServiceDescriptor {
    ServiceDescriptor {
        mandatory: true,
        use_cases: BTreeSet::new(),
        ..service("guard", ServiceCategory::Security)
    }
}

pub(super) fn raw_requirement() -> RawRequirement {
    RawRequirement {
        application_type: "static-website".to_string(),
        traffic: "low".to_string(),
        storage_gb: 50,
        database_needed: false,
        operational_effort: "low".to_string(),
        monthly_budget: 20.0,
    }
}

pub(super) fn requirement(raw: RawRequirement) -> Requirement {
    RequirementNormalizer::new()
        .normalize(&raw)
        .expect("fixture requirement is valid")
}

pub(super) fn catalog(services: Vec<ServiceDescriptor>) -> Arc<ServiceCatalog> {
    Arc::new(ServiceCatalog::new(services).expect("fixture catalog is valid"))
}

pub(super) fn pricing(entries: Vec<(&str, PricingEntry)>) -> Arc<PricingModel> {
    let entries: BTreeMap<String, PricingEntry> = entries
        .into_iter()
        .map(|(id, entry)| (id.to_string(), entry))
        .collect();
    Arc::new(PricingModel::new(entries).expect("fixture pricing is valid"))
}

pub(super) fn engine(
    services: Vec<ServiceDescriptor>,
    entries: Vec<(&str, PricingEntry)>,
) -> RecommendationEngine {
    RecommendationEngine::from_parts(
        catalog(services),
        pricing(entries),
        RequirementNormalizer::new(),
        crate::planner::NoUpgrades,
    )
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body is readable");
    serde_json::from_slice(&bytes).expect("body is JSON")
}
