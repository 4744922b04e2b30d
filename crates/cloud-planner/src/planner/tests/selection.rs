use super::common::*;
use crate::catalog::{Level, ServiceCategory, ServiceDescriptor};
use crate::planner::{ScoringEngine, SelectionEngine};

#[test]
fn higher_composite_wins_the_category() {
    let premium = ServiceDescriptor {
        cost_level: Level::High,
        ..service("storage-2", ServiceCategory::Storage)
    };
    let services = vec![premium, storage_service()];
    let catalog = catalog(services);
    let requirement = requirement(raw_requirement());

    let scoring = ScoringEngine::new(catalog.clone());
    let scored = scoring.score(&requirement);
    let selection = SelectionEngine::new().select(scored, &catalog);

    assert_eq!(selection.winners.len(), 1);
    assert_eq!(selection.winners[0].service.id, "storage-1");
}

#[test]
fn equal_composites_break_ties_by_service_id() {
    let services = vec![
        service("zeta-store", ServiceCategory::Storage),
        service("alpha-store", ServiceCategory::Storage),
    ];
    let catalog = catalog(services);
    let requirement = requirement(raw_requirement());

    let scoring = ScoringEngine::new(catalog.clone());
    let scored = scoring.score(&requirement);
    assert_eq!(scored[0].composite, scored[1].composite);

    let engine = SelectionEngine::new();
    let ranked: Vec<_> = engine
        .rank(scored.clone())
        .into_iter()
        .map(|score| score.service.id.as_str())
        .collect();
    assert_eq!(ranked, vec!["alpha-store", "zeta-store"]);

    let selection = engine.select(scored, &catalog);
    assert_eq!(selection.winners[0].service.id, "alpha-store");
}

#[test]
fn winners_follow_category_order_and_mandatory_comes_last() {
    let services = vec![
        security_service(),
        service("monitor", ServiceCategory::Monitoring),
        storage_service(),
        service("compute", ServiceCategory::Compute),
    ];
    let catalog = catalog(services);
    let requirement = requirement(raw_requirement());

    let scoring = ScoringEngine::new(catalog.clone());
    let scored = scoring.score(&requirement);
    let selection = SelectionEngine::new().select(scored, &catalog);

    let ids: Vec<_> = selection
        .services()
        .map(|service| service.id.as_str())
        .collect();
    assert_eq!(ids, vec!["compute", "storage-1", "monitor", "guard"]);
    assert_eq!(selection.len(), 4);
}

#[test]
fn mandatory_services_survive_an_empty_candidate_list() {
    let catalog = catalog(vec![security_service()]);
    let requirement = requirement(raw_requirement());

    let scoring = ScoringEngine::new(catalog.clone());
    let scored = scoring.score(&requirement);
    assert!(scored.is_empty());

    let selection = SelectionEngine::new().select(scored, &catalog);
    assert!(selection.winners.is_empty());
    assert_eq!(selection.mandatory.len(), 1);
    assert!(!selection.is_empty());
}
