use serde::Serialize;

use crate::catalog::{Level, ServiceCategory, ServiceDescriptor};
use crate::planner::requirement::Requirement;

/// Hard rule that removed a service before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Exclusion {
    /// Added unconditionally after selection instead.
    Mandatory,
    UnsupportedUseCase,
    OperationalEffortTooHigh,
    DatabaseNotNeeded,
}

impl Exclusion {
    pub const fn summary(self) -> &'static str {
        match self {
            Exclusion::Mandatory => "always included",
            Exclusion::UnsupportedUseCase => "does not support the application type",
            Exclusion::OperationalEffortTooHigh => "needs more operational effort than preferred",
            Exclusion::DatabaseNotNeeded => "database not requested",
        }
    }
}

pub fn check(service: &ServiceDescriptor, requirement: &Requirement) -> Result<(), Exclusion> {
    if service.mandatory {
        return Err(Exclusion::Mandatory);
    }

    if !service.supports(requirement.application_type()) {
        return Err(Exclusion::UnsupportedUseCase);
    }

    if requirement.operational_effort() != Level::High && service.operational_effort == Level::High
    {
        return Err(Exclusion::OperationalEffortTooHigh);
    }

    if !requirement.database_needed() && service.category == ServiceCategory::Database {
        return Err(Exclusion::DatabaseNotNeeded);
    }

    Ok(())
}
