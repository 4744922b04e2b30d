use std::collections::BTreeSet;

use super::common::*;
use crate::catalog::{ApplicationType, Level, ServiceCategory, ServiceDescriptor};
use crate::planner::scoring::score_service;
use crate::planner::{ComponentScores, Exclusion, RawRequirement, ScoringEngine};

#[test]
fn single_storage_service_scores_ninety_four() {
    let requirement = requirement(raw_requirement());
    let service = storage_service();

    let score = score_service(&service, &requirement);

    assert_eq!(
        score.components,
        ComponentScores {
            cost: 100,
            scalability: 80,
            operational: 100,
            use_case: 100,
        }
    );
    assert_eq!(score.composite, 94.0);
    assert_eq!(
        score.reason,
        "cost-effective, scales well, matches operational preference, optimized for use case"
    );
}

#[test]
fn unsupported_use_case_scores_fifty_when_scored_directly() {
    let requirement = requirement(RawRequirement {
        application_type: "backend-api".to_string(),
        ..raw_requirement()
    });

    let service = storage_service();
    let score = score_service(&service, &requirement);
    assert_eq!(score.components.use_case, 50);
}

#[test]
fn broad_use_case_sets_score_lower() {
    let requirement = requirement(raw_requirement());
    let mut service = storage_service();

    service.use_cases = BTreeSet::from([
        ApplicationType::StaticWebsite,
        ApplicationType::FullStack,
        ApplicationType::FileStorage,
    ]);
    assert_eq!(score_service(&service, &requirement).components.use_case, 80);

    service.use_cases = ApplicationType::ordered().into_iter().collect();
    assert_eq!(score_service(&service, &requirement).components.use_case, 60);
}

#[test]
fn low_scores_fall_back_to_generic_reason() {
    let components = ComponentScores {
        cost: 20,
        scalability: 30,
        operational: 50,
        use_case: 50,
    };

    assert_eq!(components.reason(), "Suitable for requirements");
    assert_eq!(components.composite(), 32.0);
}

#[test]
fn database_services_are_excluded_without_database_need() {
    let database = ServiceDescriptor {
        cost_level: Level::Medium,
        ..service("db-1", ServiceCategory::Database)
    };
    let scoring = ScoringEngine::new(catalog(vec![storage_service(), database]));
    let requirement = requirement(raw_requirement());

    let scored: Vec<_> = scoring
        .score(&requirement)
        .into_iter()
        .map(|score| score.service.id.as_str())
        .collect();
    assert_eq!(scored, vec!["storage-1"]);

    let excluded: Vec<_> = scoring
        .excluded(&requirement)
        .into_iter()
        .map(|(service, exclusion)| (service.id.as_str(), exclusion))
        .collect();
    assert_eq!(excluded, vec![("db-1", Exclusion::DatabaseNotNeeded)]);
}

#[test]
fn high_effort_services_need_high_effort_preference() {
    let managed_servers = ServiceDescriptor {
        operational_effort: Level::High,
        ..service("servers", ServiceCategory::Compute)
    };
    let scoring = ScoringEngine::new(catalog(vec![managed_servers]));

    for effort in ["low", "medium"] {
        let requirement = requirement(RawRequirement {
            operational_effort: effort.to_string(),
            ..raw_requirement()
        });
        assert!(scoring.score(&requirement).is_empty(), "effort {effort}");
        assert_eq!(
            scoring.excluded(&requirement)[0].1,
            Exclusion::OperationalEffortTooHigh
        );
    }

    let requirement = requirement(RawRequirement {
        operational_effort: "high".to_string(),
        ..raw_requirement()
    });
    assert_eq!(scoring.score(&requirement).len(), 1);
}

#[test]
fn mandatory_and_unsupported_services_are_never_scored() {
    let mut other_workload = service("queue", ServiceCategory::Messaging);
    other_workload.use_cases = BTreeSet::from([ApplicationType::EventDriven]);
    let scoring = ScoringEngine::new(catalog(vec![security_service(), other_workload]));
    let requirement = requirement(raw_requirement());

    assert!(scoring.score(&requirement).is_empty());
    let exclusions: Vec<_> = scoring
        .excluded(&requirement)
        .into_iter()
        .map(|(_, exclusion)| exclusion)
        .collect();
    assert_eq!(
        exclusions,
        vec![Exclusion::Mandatory, Exclusion::UnsupportedUseCase]
    );
}

#[test]
fn composites_stay_within_percentage_range() {
    let scoring = ScoringEngine::new(catalog(vec![storage_service()]));

    for traffic in ["low", "medium", "high"] {
        for budget in [10.0, 120.0, 900.0] {
            let requirement = requirement(RawRequirement {
                traffic: traffic.to_string(),
                monthly_budget: budget,
                ..raw_requirement()
            });
            for score in scoring.score(&requirement) {
                assert!((0.0..=100.0).contains(&score.composite));
            }
        }
    }
}
