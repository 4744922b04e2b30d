use super::common::*;
use crate::planner::alternatives::{BUDGET_OPTIMIZED, PERFORMANCE_OPTIMIZED};
use crate::planner::{AlternativeSynthesizer, RawRequirement};

fn names(application_type: &str, budget: f64) -> Vec<String> {
    let requirement = requirement(RawRequirement {
        application_type: application_type.to_string(),
        monthly_budget: budget,
        ..raw_requirement()
    });

    AlternativeSynthesizer::new()
        .synthesize(&requirement)
        .into_iter()
        .map(|alternative| alternative.name)
        .collect()
}

#[test]
fn full_stack_at_fifty_only_gets_budget_option() {
    assert_eq!(names("full-stack", 50.0), vec![BUDGET_OPTIMIZED]);
}

#[test]
fn performance_option_requires_budget_above_one_hundred() {
    assert_eq!(names("backend-api", 100.0), vec![BUDGET_OPTIMIZED]);
    assert_eq!(
        names("backend-api", 100.01),
        vec![BUDGET_OPTIMIZED, PERFORMANCE_OPTIMIZED]
    );
    assert_eq!(
        names("full-stack", 500.0),
        vec![BUDGET_OPTIMIZED, PERFORMANCE_OPTIMIZED]
    );
}

#[test]
fn workloads_without_performance_preset_skip_it_at_any_budget() {
    for application_type in ["static-website", "file-storage", "event-driven"] {
        assert_eq!(names(application_type, 10_000.0), vec![BUDGET_OPTIMIZED]);
    }
}

#[test]
fn budget_preset_depends_on_database_need() {
    let synthesizer = AlternativeSynthesizer::new();
    let with_database = requirement(RawRequirement {
        application_type: "backend-api".to_string(),
        database_needed: true,
        ..raw_requirement()
    });
    let without_database = requirement(RawRequirement {
        application_type: "backend-api".to_string(),
        ..raw_requirement()
    });

    let stateful = synthesizer.budget_optimized(&with_database);
    assert_eq!(stateful.total_cost, 15.0);
    assert!(stateful.services.iter().any(|name| name == "Amazon DynamoDB"));

    let stateless = synthesizer.budget_optimized(&without_database);
    assert_eq!(stateless.total_cost, 8.0);
    assert!(!stateless.services.iter().any(|name| name == "Amazon DynamoDB"));
}

#[test]
fn every_preset_includes_iam() {
    let synthesizer = AlternativeSynthesizer::new();

    for application_type in crate::catalog::ApplicationType::ordered() {
        let requirement = requirement(RawRequirement {
            application_type: application_type.tag().to_string(),
            monthly_budget: 1_000.0,
            ..raw_requirement()
        });
        for alternative in synthesizer.synthesize(&requirement) {
            assert!(
                alternative.services.iter().any(|name| name == "AWS IAM"),
                "{} for {}",
                alternative.name,
                application_type.tag()
            );
        }
    }
}
