use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::scoring::ServiceScore;
use crate::catalog::{ServiceCatalog, ServiceCategory, ServiceDescriptor};

/// Outcome of selection: one scored winner per category plus the mandatory set.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    /// Category winners in category enumeration order.
    pub winners: Vec<ServiceScore<'a>>,
    /// Mandatory services in catalog order; never scored.
    pub mandatory: Vec<&'a ServiceDescriptor>,
}

impl<'a> Selection<'a> {
    pub fn services(&self) -> impl Iterator<Item = &'a ServiceDescriptor> + '_ {
        self.winners
            .iter()
            .map(|score| score.service)
            .chain(self.mandatory.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.winners.len() + self.mandatory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.winners.is_empty() && self.mandatory.is_empty()
    }
}

/// Highest composite first; equal composites fall back to ascending service id.
pub fn rank_order(left: &ServiceScore<'_>, right: &ServiceScore<'_>) -> Ordering {
    right
        .composite
        .total_cmp(&left.composite)
        .then_with(|| left.service.id.cmp(&right.service.id))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionEngine;

impl SelectionEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn rank<'a>(&self, mut scored: Vec<ServiceScore<'a>>) -> Vec<ServiceScore<'a>> {
        scored.sort_by(rank_order);
        scored
    }

    pub fn select<'a>(
        &self,
        scored: Vec<ServiceScore<'a>>,
        catalog: &'a ServiceCatalog,
    ) -> Selection<'a> {
        let mut by_category: BTreeMap<ServiceCategory, ServiceScore<'a>> = BTreeMap::new();

        for score in self.rank(scored) {
            by_category.entry(score.service.category).or_insert(score);
        }

        Selection {
            winners: by_category.into_values().collect(),
            mandatory: catalog.mandatory().collect(),
        }
    }
}
