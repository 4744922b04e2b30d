use crate::infra::{load_knowledge, CatalogArgs};
use clap::Args;
use cloud_planner::catalog::{ServiceCatalog, ServiceCategory};
use cloud_planner::config::{AppConfig, CatalogConfig};
use cloud_planner::error::AppError;
use cloud_planner::planner::{
    application_types, EngineError, Explanation, RawRequirement, Recommendation,
    RecommendationEngine, Requirement,
};

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// static-website, backend-api, full-stack, file-storage, or event-driven
    #[arg(long)]
    pub(crate) application_type: String,
    /// Expected traffic: low, medium, or high
    #[arg(long, default_value = "low")]
    pub(crate) traffic: String,
    /// Stored data in GB
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub(crate) storage_gb: i64,
    /// Include a database in the architecture
    #[arg(long)]
    pub(crate) database: bool,
    /// Operational effort the team accepts: low, medium, or high
    #[arg(long, default_value = "low")]
    pub(crate) operational_effort: String,
    /// Monthly budget in USD
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) budget: f64,
    /// Print candidate scores, exclusions, and cost components
    #[arg(long)]
    pub(crate) explain: bool,
    #[command(flatten)]
    pub(crate) catalog: CatalogArgs,
}

impl RecommendArgs {
    pub(crate) fn raw_requirement(&self) -> RawRequirement {
        RawRequirement {
            application_type: self.application_type.clone(),
            traffic: self.traffic.clone(),
            storage_gb: self.storage_gb,
            database_needed: self.database,
            operational_effort: self.operational_effort.clone(),
            monthly_budget: self.budget,
        }
    }
}

/// Environment-configured document paths with CLI flags layered on top.
fn catalog_config(mut config: CatalogConfig, args: CatalogArgs) -> CatalogConfig {
    args.apply(&mut config);
    config
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let raw = args.raw_requirement();
    let explain = args.explain;
    let knowledge = load_knowledge(&catalog_config(AppConfig::load()?.catalog, args.catalog))?;
    let engine = RecommendationEngine::new(&knowledge);

    let requirement = engine.normalize(&raw).map_err(EngineError::from)?;
    let recommendation = engine.recommend(&requirement)?;

    render_requirement(&requirement);
    render_recommendation(&recommendation);
    if explain {
        render_explanation(&engine.explain(&requirement));
    }

    Ok(())
}

pub(crate) fn run_services(args: CatalogArgs) -> Result<(), AppError> {
    let knowledge = load_knowledge(&catalog_config(AppConfig::load()?.catalog, args))?;
    render_catalog(&knowledge.catalog);
    Ok(())
}

pub(crate) fn run_use_cases() {
    println!("Supported application types");
    for view in application_types() {
        println!("- {:<15} {}", view.tag, view.label);
    }
}

fn render_requirement(requirement: &Requirement) {
    println!("Requirement");
    println!(
        "- {} | {} traffic (~{} requests/month)",
        requirement.application_type().label(),
        requirement.traffic().as_str(),
        requirement.request_volume()
    );
    println!(
        "- Storage {} GB ({}) | database {}",
        requirement.storage_gb(),
        requirement.storage_tier().label(),
        if requirement.database_needed() {
            "required"
        } else {
            "not required"
        }
    );
    println!(
        "- Operational effort {} | budget ${:.2}/month",
        requirement.operational_effort().as_str(),
        requirement.monthly_budget()
    );
}

fn render_recommendation(recommendation: &Recommendation) {
    println!("\nRecommended architecture");
    for service in &recommendation.architecture {
        println!(
            "- [{}] {} ${:.2}/month",
            service.category.label(),
            service.service,
            service.estimated_cost
        );
        println!("    {}", service.reason);
    }
    println!(
        "Total ${:.2}/month against budget ${:.2}",
        recommendation.total_cost, recommendation.budget
    );
    println!("{}", recommendation.message);

    if !recommendation.alternatives.is_empty() {
        println!("\nAlternatives");
        for alternative in &recommendation.alternatives {
            println!(
                "- {} (~${:.2}/month): {}",
                alternative.name, alternative.total_cost, alternative.description
            );
            println!("    {}", alternative.services.join(", "));
        }
    }

    if !recommendation.optional_upgrades.is_empty() {
        println!("\nOptional upgrades");
        for upgrade in &recommendation.optional_upgrades {
            println!("- {upgrade}");
        }
    }
}

fn render_explanation(explanation: &Explanation<'_>) {
    println!("\nCandidate scores (cost/scalability/operational/use case)");
    for score in &explanation.ranked {
        let components = score.components;
        println!(
            "- {:<18} {:>5.1}  {:>3}/{:>3}/{:>3}/{:>3}  {}",
            score.service.id,
            score.composite,
            components.cost,
            components.scalability,
            components.operational,
            components.use_case,
            score.reason
        );
    }

    if !explanation.excluded.is_empty() {
        println!("\nExcluded before scoring");
        for (service, exclusion) in &explanation.excluded {
            println!("- {:<18} {}", service.id, exclusion.summary());
        }
    }

    println!("\nCost components (base/traffic/requests/storage)");
    for (service, breakdown) in &explanation.costs {
        println!(
            "- {:<18} {:.2}/{:.2}/{:.2}/{:.2}",
            service.id, breakdown.base, breakdown.traffic, breakdown.requests, breakdown.storage
        );
    }
}

fn render_catalog(catalog: &ServiceCatalog) {
    println!("Service catalog ({} services)", catalog.len());
    for category in ServiceCategory::ordered() {
        let services = catalog.by_category(category);
        if services.is_empty() {
            continue;
        }

        println!("\n{}", category.label());
        for service in services {
            let mandatory = if service.mandatory { " (always included)" } else { "" };
            println!(
                "- {:<18} {}{} | cost {} | scalability {} | effort {}",
                service.id,
                service.name,
                mandatory,
                service.cost_level.as_str(),
                service.scalability.as_str(),
                service.operational_effort.as_str()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn configured() -> CatalogConfig {
        CatalogConfig {
            services_path: Some(PathBuf::from("/env/services.json")),
            pricing_path: Some(PathBuf::from("/env/pricing.json")),
        }
    }

    #[test]
    fn environment_paths_survive_without_flags() {
        let config = catalog_config(configured(), CatalogArgs::default());

        assert_eq!(config.services_path, Some(PathBuf::from("/env/services.json")));
        assert_eq!(config.pricing_path, Some(PathBuf::from("/env/pricing.json")));
    }

    #[test]
    fn flags_replace_environment_paths() {
        let args = CatalogArgs {
            catalog: None,
            pricing: Some(PathBuf::from("/cli/pricing.json")),
        };

        let config = catalog_config(configured(), args);

        assert_eq!(config.services_path, Some(PathBuf::from("/env/services.json")));
        assert_eq!(config.pricing_path, Some(PathBuf::from("/cli/pricing.json")));
    }
}
