use crate::catalog::{ApplicationType, Level, ServiceDescriptor};

/// Monthly budget bands selecting the cost-match row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetTier {
    UnderFifty,
    UnderTwoHundred,
    TwoHundredPlus,
}

impl BudgetTier {
    pub fn classify(monthly_budget: f64) -> Self {
        if monthly_budget < 50.0 {
            Self::UnderFifty
        } else if monthly_budget < 200.0 {
            Self::UnderTwoHundred
        } else {
            Self::TwoHundredPlus
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::UnderFifty => 0,
            Self::UnderTwoHundred => 1,
            Self::TwoHundredPlus => 2,
        }
    }
}

/// Rows: budget tier. Columns: service cost level (low, medium, high).
const COST_MATCH: [[u8; 3]; 3] = [[100, 50, 20], [80, 100, 60], [70, 90, 100]];

/// Rows: traffic level. Columns: service scalability.
const SCALABILITY_MATCH: [[u8; 3]; 3] = [[100, 90, 80], [50, 100, 90], [30, 60, 100]];

/// Rows: preferred operational effort. Columns: service operational effort.
const OPERATIONAL_MATCH: [[u8; 3]; 3] = [[100, 60, 30], [80, 100, 60], [50, 80, 100]];

pub fn cost_match(tier: BudgetTier, cost_level: Level) -> u8 {
    COST_MATCH[tier.index()][cost_level.index()]
}

pub fn scalability_match(traffic: Level, scalability: Level) -> u8 {
    SCALABILITY_MATCH[traffic.index()][scalability.index()]
}

pub fn operational_match(preference: Level, effort: Level) -> u8 {
    if preference == effort {
        return 100;
    }
    OPERATIONAL_MATCH[preference.index()][effort.index()]
}

/// Narrower use-case sets indicate a service specialized for the workload.
pub fn use_case_match(service: &ServiceDescriptor, application_type: ApplicationType) -> u8 {
    if !service.supports(application_type) {
        return 50;
    }

    match service.use_cases.len() {
        0..=2 => 100,
        3..=4 => 80,
        _ => 60,
    }
}
