//! Immutable service catalog and pricing model shared by every request.

mod document;
pub mod domain;

pub use document::{CatalogDocument, JsonCatalogSource};
pub use domain::{ApplicationType, Level, PricingEntry, ServiceCategory, ServiceDescriptor};

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use tracing::{info, warn};

/// Provider of the ordered service descriptor list.
pub trait CatalogSource {
    fn load_service_descriptors(&self) -> Result<Vec<ServiceDescriptor>, CatalogError>;
}

/// Provider of the service identifier to pricing entry mapping.
pub trait PricingSource {
    fn load_pricing_model(&self) -> Result<BTreeMap<String, PricingEntry>, CatalogError>;
}

/// Failures while loading or validating catalog documents.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {document}: {source}")]
    Io {
        document: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {document}: {source}")]
    Json {
        document: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("service id '{0}' appears more than once in the catalog")]
    DuplicateService(String),
    #[error("pricing for '{service}' has invalid {component} rate {value}")]
    InvalidRate {
        service: String,
        component: &'static str,
        value: f64,
    },
}

/// Ordered, read-only collection of service descriptors.
#[derive(Debug, Clone, Default)]
pub struct ServiceCatalog {
    services: Vec<ServiceDescriptor>,
}

impl ServiceCatalog {
    pub fn new(services: Vec<ServiceDescriptor>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for service in &services {
            if !seen.insert(service.id.as_str()) {
                return Err(CatalogError::DuplicateService(service.id.clone()));
            }
        }

        Ok(Self { services })
    }

    pub fn all(&self) -> &[ServiceDescriptor] {
        &self.services
    }

    pub fn get(&self, id: &str) -> Option<&ServiceDescriptor> {
        self.services.iter().find(|service| service.id == id)
    }

    pub fn by_category(&self, category: ServiceCategory) -> Vec<&ServiceDescriptor> {
        self.services
            .iter()
            .filter(|service| service.category == category)
            .collect()
    }

    pub fn mandatory(&self) -> impl Iterator<Item = &ServiceDescriptor> {
        self.services.iter().filter(|service| service.mandatory)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

/// Read-only mapping of service id to pricing rates.
#[derive(Debug, Clone, Default)]
pub struct PricingModel {
    entries: BTreeMap<String, PricingEntry>,
}

impl PricingModel {
    pub fn new(entries: BTreeMap<String, PricingEntry>) -> Result<Self, CatalogError> {
        for (service, entry) in &entries {
            for (component, rate) in entry.components() {
                if let Some(value) = rate {
                    if !value.is_finite() || value < 0.0 {
                        return Err(CatalogError::InvalidRate {
                            service: service.clone(),
                            component,
                            value,
                        });
                    }
                }
            }

            if entry.double_counts_storage() {
                warn!(
                    service = %service,
                    "pricing entry defines both a per-GB rate and perGBStorage; storage is charged twice"
                );
            }
        }

        Ok(Self { entries })
    }

    pub fn entry(&self, service_id: &str) -> Option<&PricingEntry> {
        self.entries.get(service_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Catalog and pricing loaded once at startup and shared by reference.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    pub catalog: Arc<ServiceCatalog>,
    pub pricing: Arc<PricingModel>,
}

impl KnowledgeBase {
    pub fn load<C, P>(catalog_source: &C, pricing_source: &P) -> Result<Self, CatalogError>
    where
        C: CatalogSource + ?Sized,
        P: PricingSource + ?Sized,
    {
        let catalog = ServiceCatalog::new(catalog_source.load_service_descriptors()?)?;
        let pricing = PricingModel::new(pricing_source.load_pricing_model()?)?;

        info!(
            services = catalog.len(),
            priced = pricing.len(),
            "service catalog loaded"
        );

        Ok(Self {
            catalog: Arc::new(catalog),
            pricing: Arc::new(pricing),
        })
    }

    /// Knowledge base built from the documents compiled into the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        let source = JsonCatalogSource::bundled();
        Self::load(&source, &source)
    }
}
