use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;

use super::domain::{PricingEntry, ServiceDescriptor};
use super::{CatalogError, CatalogSource, PricingSource};

const BUNDLED_SERVICES: &str = include_str!("data/services.json");
const BUNDLED_PRICING: &str = include_str!("data/pricing.json");

/// Where a catalog document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogDocument {
    Bundled,
    File(PathBuf),
}

impl CatalogDocument {
    fn read<T: DeserializeOwned>(
        &self,
        bundled: &'static str,
        name: &str,
    ) -> Result<T, CatalogError> {
        let (document, raw) = match self {
            CatalogDocument::Bundled => (format!("bundled {name}"), bundled.to_string()),
            CatalogDocument::File(path) => {
                let document = path.display().to_string();
                let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
                    document: document.clone(),
                    source,
                })?;
                (document, raw)
            }
        };

        serde_json::from_str(&raw).map_err(|source| CatalogError::Json { document, source })
    }
}

/// JSON-backed catalog and pricing provider.
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    services: CatalogDocument,
    pricing: CatalogDocument,
}

impl JsonCatalogSource {
    pub fn new(services: CatalogDocument, pricing: CatalogDocument) -> Self {
        Self { services, pricing }
    }

    pub fn bundled() -> Self {
        Self::new(CatalogDocument::Bundled, CatalogDocument::Bundled)
    }

    pub fn services(&self) -> &CatalogDocument {
        &self.services
    }

    pub fn pricing(&self) -> &CatalogDocument {
        &self.pricing
    }
}

impl CatalogSource for JsonCatalogSource {
    fn load_service_descriptors(&self) -> Result<Vec<ServiceDescriptor>, CatalogError> {
        self.services.read(BUNDLED_SERVICES, "service catalog")
    }
}

impl PricingSource for JsonCatalogSource {
    fn load_pricing_model(&self) -> Result<BTreeMap<String, PricingEntry>, CatalogError> {
        self.pricing.read(BUNDLED_PRICING, "pricing table")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_document_path() {
        let source = JsonCatalogSource::new(
            CatalogDocument::File(PathBuf::from("/nonexistent/services.json")),
            CatalogDocument::Bundled,
        );

        match source.load_service_descriptors() {
            Err(CatalogError::Io { document, .. }) => {
                assert_eq!(document, "/nonexistent/services.json")
            }
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn bundled_pricing_parses() {
        let pricing = JsonCatalogSource::bundled()
            .load_pricing_model()
            .expect("bundled pricing parses");
        assert_eq!(pricing.get("s3").and_then(|entry| entry.per_gb_storage), Some(0.023));
        assert!(pricing.values().all(|entry| !entry.double_counts_storage()));
    }
}
