use clap::Args;
use cloud_planner::catalog::KnowledgeBase;
use cloud_planner::config::CatalogConfig;
use cloud_planner::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Args, Debug, Default, Clone)]
pub(crate) struct CatalogArgs {
    /// Service catalog JSON document (defaults to the bundled catalog)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Pricing JSON document (defaults to the bundled pricing model)
    #[arg(long)]
    pub(crate) pricing: Option<PathBuf>,
}

impl CatalogArgs {
    pub(crate) fn apply(self, config: &mut CatalogConfig) {
        if let Some(path) = self.catalog {
            config.services_path = Some(path);
        }
        if let Some(path) = self.pricing {
            config.pricing_path = Some(path);
        }
    }
}

pub(crate) fn load_knowledge(config: &CatalogConfig) -> Result<KnowledgeBase, AppError> {
    let source = config.source();
    Ok(KnowledgeBase::load(&source, &source)?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FeedbackKind {
    MissingUseCase,
    WrongRecommendation,
    FeatureRequest,
}

impl FeedbackKind {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "missing-use-case" => Some(Self::MissingUseCase),
            "wrong-recommendation" => Some(Self::WrongRecommendation),
            "feature-request" => Some(Self::FeatureRequest),
            _ => None,
        }
    }

    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::MissingUseCase => "missing-use-case",
            Self::WrongRecommendation => "wrong-recommendation",
            Self::FeatureRequest => "feature-request",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct FeedbackSubmission {
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) email: Option<String>,
    #[serde(default)]
    pub(crate) message: String,
    #[serde(rename = "type", default)]
    pub(crate) kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FeedbackError {
    MissingType,
    UnknownType(String),
    MissingMessage,
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackError::MissingType => write!(f, "Feedback type is required"),
            FeedbackError::UnknownType(kind) => write!(
                f,
                "Unknown feedback type '{kind}'. Must be one of: missing-use-case, wrong-recommendation, feature-request"
            ),
            FeedbackError::MissingMessage => write!(f, "Message is required"),
        }
    }
}

impl std::error::Error for FeedbackError {}

impl FeedbackSubmission {
    pub(crate) fn validate(&self) -> Result<FeedbackKind, FeedbackError> {
        if self.kind.trim().is_empty() {
            return Err(FeedbackError::MissingType);
        }
        let kind = FeedbackKind::parse(&self.kind)
            .ok_or_else(|| FeedbackError::UnknownType(self.kind.clone()))?;

        if self.message.trim().is_empty() {
            return Err(FeedbackError::MissingMessage);
        }

        Ok(kind)
    }
}
