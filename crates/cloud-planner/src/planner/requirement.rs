use serde::{Deserialize, Serialize};

use crate::catalog::{ApplicationType, Level};

/// Requests per month assumed for each traffic level.
pub const LOW_TRAFFIC_REQUESTS: u64 = 10_000;
pub const MEDIUM_TRAFFIC_REQUESTS: u64 = 50_000;
pub const HIGH_TRAFFIC_REQUESTS: u64 = 200_000;

/// Requirement exactly as submitted, before any enumeration checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRequirement {
    pub application_type: String,
    pub traffic: String,
    #[serde(rename = "storageGB")]
    pub storage_gb: i64,
    pub database_needed: bool,
    pub operational_effort: String,
    pub monthly_budget: f64,
}

/// Field-specific rejection of a raw requirement.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error(
        "Invalid application type '{0}'. Must be one of: static-website, backend-api, full-stack, file-storage, event-driven"
    )]
    ApplicationType(String),
    #[error("Invalid traffic level '{0}'. Must be one of: low, medium, high")]
    Traffic(String),
    #[error("Invalid operational effort '{0}'. Must be one of: low, medium, high")]
    OperationalEffort(String),
    #[error("Storage must be non-negative (got {0} GB)")]
    Storage(i64),
    #[error("Monthly budget must be a positive amount (got {0})")]
    Budget(f64),
}

impl ValidationError {
    /// Wire name of the offending field.
    pub const fn field(&self) -> &'static str {
        match self {
            ValidationError::ApplicationType(_) => "applicationType",
            ValidationError::Traffic(_) => "traffic",
            ValidationError::OperationalEffort(_) => "operationalEffort",
            ValidationError::Storage(_) => "storageGB",
            ValidationError::Budget(_) => "monthlyBudget",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageTier {
    Small,
    Medium,
    Large,
}

impl StorageTier {
    pub const fn classify(storage_gb: u64) -> Self {
        if storage_gb < 100 {
            Self::Small
        } else if storage_gb < 1000 {
            Self::Medium
        } else {
            Self::Large
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "Small (< 100 GB)",
            Self::Medium => "Medium (100-999 GB)",
            Self::Large => "Large (1 TB+)",
        }
    }
}

/// Validated requirement. Only constructed by [`RequirementNormalizer`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    application_type: ApplicationType,
    traffic: Level,
    request_volume: u64,
    #[serde(rename = "storageGB")]
    storage_gb: u64,
    storage_tier: StorageTier,
    database_needed: bool,
    operational_effort: Level,
    monthly_budget: f64,
}

impl Requirement {
    pub fn application_type(&self) -> ApplicationType {
        self.application_type
    }

    pub fn traffic(&self) -> Level {
        self.traffic
    }

    /// Monthly request volume derived from the traffic level.
    pub fn request_volume(&self) -> u64 {
        self.request_volume
    }

    pub fn storage_gb(&self) -> u64 {
        self.storage_gb
    }

    pub fn storage_tier(&self) -> StorageTier {
        self.storage_tier
    }

    pub fn database_needed(&self) -> bool {
        self.database_needed
    }

    pub fn operational_effort(&self) -> Level {
        self.operational_effort
    }

    pub fn monthly_budget(&self) -> f64 {
        self.monthly_budget
    }
}

/// Checks enumerated fields and translates traffic into a request volume.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequirementNormalizer;

impl RequirementNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub const fn request_volume(traffic: Level) -> u64 {
        match traffic {
            Level::Low => LOW_TRAFFIC_REQUESTS,
            Level::Medium => MEDIUM_TRAFFIC_REQUESTS,
            Level::High => HIGH_TRAFFIC_REQUESTS,
        }
    }

    pub fn normalize(&self, raw: &RawRequirement) -> Result<Requirement, ValidationError> {
        let application_type = ApplicationType::parse(&raw.application_type)
            .ok_or_else(|| ValidationError::ApplicationType(raw.application_type.clone()))?;
        let traffic =
            Level::parse(&raw.traffic).ok_or_else(|| ValidationError::Traffic(raw.traffic.clone()))?;
        let operational_effort = Level::parse(&raw.operational_effort)
            .ok_or_else(|| ValidationError::OperationalEffort(raw.operational_effort.clone()))?;

        let storage_gb =
            u64::try_from(raw.storage_gb).map_err(|_| ValidationError::Storage(raw.storage_gb))?;

        if !raw.monthly_budget.is_finite() || raw.monthly_budget <= 0.0 {
            return Err(ValidationError::Budget(raw.monthly_budget));
        }

        Ok(Requirement {
            application_type,
            traffic,
            request_volume: Self::request_volume(traffic),
            storage_gb,
            storage_tier: StorageTier::classify(storage_gb),
            database_needed: raw.database_needed,
            operational_effort,
            monthly_budget: raw.monthly_budget,
        })
    }
}
