use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Fixed partition of the catalog; selection keeps one winner per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    Compute,
    Storage,
    Database,
    Networking,
    Messaging,
    Monitoring,
    Security,
}

impl ServiceCategory {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Compute,
            Self::Storage,
            Self::Database,
            Self::Networking,
            Self::Messaging,
            Self::Monitoring,
            Self::Security,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compute => "compute",
            Self::Storage => "storage",
            Self::Database => "database",
            Self::Networking => "networking",
            Self::Messaging => "messaging",
            Self::Monitoring => "monitoring",
            Self::Security => "security",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Compute => "Compute",
            Self::Storage => "Storage",
            Self::Database => "Database",
            Self::Networking => "Networking",
            Self::Messaging => "Messaging",
            Self::Monitoring => "Monitoring",
            Self::Security => "Security",
        }
    }
}

/// Three-step qualitative scale shared by cost level, scalability, operational
/// effort, and traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    /// Column/row position in the score tables.
    pub const fn index(self) -> usize {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Exact lowercase match; "High" or " high" are rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Workload shapes the planner knows how to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicationType {
    StaticWebsite,
    BackendApi,
    FullStack,
    FileStorage,
    EventDriven,
}

impl ApplicationType {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::StaticWebsite,
            Self::BackendApi,
            Self::FullStack,
            Self::FileStorage,
            Self::EventDriven,
        ]
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::StaticWebsite => "static-website",
            Self::BackendApi => "backend-api",
            Self::FullStack => "full-stack",
            Self::FileStorage => "file-storage",
            Self::EventDriven => "event-driven",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::StaticWebsite => "Static Website",
            Self::BackendApi => "Backend API",
            Self::FullStack => "Full-Stack Web Application",
            Self::FileStorage => "File Storage System",
            Self::EventDriven => "Event-Driven Application",
        }
    }

    /// Exact tag match, case-sensitive.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|candidate| candidate.tag() == raw)
    }
}

/// Catalog entry describing one AWS service and how it fits workloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescriptor {
    pub id: String,
    pub name: String,
    pub category: ServiceCategory,
    pub cost_level: Level,
    pub scalability: Level,
    pub operational_effort: Level,
    pub use_cases: BTreeSet<ApplicationType>,
    pub description: String,
    #[serde(default)]
    pub mandatory: bool,
}

impl ServiceDescriptor {
    pub fn supports(&self, application_type: ApplicationType) -> bool {
        self.use_cases.contains(&application_type)
    }
}

/// Monthly rates for one service. Absent components contribute nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_cost: Option<f64>,
    /// Charged per 10,000 requests, counting whole units only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_traffic_unit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_million_requests: Option<f64>,
    #[serde(rename = "perGB", default, skip_serializing_if = "Option::is_none")]
    pub per_gb: Option<f64>,
    #[serde(rename = "perStorageGB", default, skip_serializing_if = "Option::is_none")]
    pub per_storage_gb: Option<f64>,
    #[serde(rename = "perGBStorage", default, skip_serializing_if = "Option::is_none")]
    pub per_gb_storage: Option<f64>,
}

impl PricingEntry {
    /// Generic per-GB storage rate; `perGB` wins over `perStorageGB`.
    pub fn generic_storage_rate(&self) -> Option<f64> {
        self.per_gb.or(self.per_storage_gb)
    }

    /// True when both a generic per-GB rate and `perGBStorage` are defined, so
    /// storage is charged twice.
    pub fn double_counts_storage(&self) -> bool {
        self.generic_storage_rate().is_some() && self.per_gb_storage.is_some()
    }

    pub(crate) fn components(&self) -> [(&'static str, Option<f64>); 6] {
        [
            ("baseCost", self.base_cost),
            ("perTrafficUnit", self.per_traffic_unit),
            ("perMillionRequests", self.per_million_requests),
            ("perGB", self.per_gb),
            ("perStorageGB", self.per_storage_gb),
            ("perGBStorage", self.per_gb_storage),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_type_parses_exact_tags_only() {
        assert_eq!(
            ApplicationType::parse("backend-api"),
            Some(ApplicationType::BackendApi)
        );
        assert_eq!(ApplicationType::parse("Backend-API"), None);
        assert_eq!(ApplicationType::parse(" backend-api "), None);
        assert_eq!(ApplicationType::parse("mobile-app"), None);
    }

    #[test]
    fn level_parses_lowercase_names_only() {
        assert_eq!(Level::parse("high"), Some(Level::High));
        assert_eq!(Level::parse("High"), None);
        assert_eq!(Level::parse(" low"), None);
    }

    #[test]
    fn pricing_entry_reads_legacy_component_names() {
        let entry: PricingEntry = serde_json::from_str(
            r#"{"baseCost": 1.0, "perStorageGB": 0.1, "perGBStorage": 0.02, "notes": "ignored"}"#,
        )
        .expect("pricing entry parses");

        assert_eq!(entry.base_cost, Some(1.0));
        assert_eq!(entry.generic_storage_rate(), Some(0.1));
        assert!(entry.double_counts_storage());
    }

    #[test]
    fn per_gb_takes_precedence_over_per_storage_gb() {
        let entry = PricingEntry {
            per_gb: Some(0.08),
            per_storage_gb: Some(0.5),
            ..PricingEntry::default()
        };
        assert_eq!(entry.generic_storage_rate(), Some(0.08));
        assert!(!entry.double_counts_storage());
    }
}
