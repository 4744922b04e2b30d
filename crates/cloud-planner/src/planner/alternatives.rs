use serde::Serialize;

use super::requirement::Requirement;
use crate::catalog::ApplicationType;

pub const BUDGET_OPTIMIZED: &str = "Budget-Optimized";
pub const PERFORMANCE_OPTIMIZED: &str = "Performance-Optimized";

/// Budget above which a performance-optimized preset is offered.
pub const PERFORMANCE_BUDGET_THRESHOLD: f64 = 100.0;

/// Preset architecture offered next to the scored recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeArchitecture {
    pub name: String,
    pub services: Vec<String>,
    pub total_cost: f64,
    pub description: String,
}

impl AlternativeArchitecture {
    fn preset(name: &str, services: &[&str], total_cost: f64, description: &str) -> Self {
        Self {
            name: name.to_string(),
            services: services.iter().map(|service| service.to_string()).collect(),
            total_cost,
            description: description.to_string(),
        }
    }
}

/// Canned alternatives keyed by application type. Costs are flat estimates and
/// do not come from the pricing model.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlternativeSynthesizer;

impl AlternativeSynthesizer {
    pub fn new() -> Self {
        Self
    }

    pub fn synthesize(&self, requirement: &Requirement) -> Vec<AlternativeArchitecture> {
        let mut alternatives = vec![self.budget_optimized(requirement)];

        if requirement.monthly_budget() > PERFORMANCE_BUDGET_THRESHOLD {
            alternatives.extend(self.performance_optimized(requirement));
        }

        alternatives
    }

    pub fn budget_optimized(&self, requirement: &Requirement) -> AlternativeArchitecture {
        let database = requirement.database_needed();

        match requirement.application_type() {
            ApplicationType::StaticWebsite => {
                budget_preset(&["Amazon S3", "Amazon CloudFront", "AWS IAM"], 5.0)
            }
            ApplicationType::BackendApi if database => budget_preset(
                &[
                    "AWS Lambda",
                    "Amazon API Gateway",
                    "Amazon DynamoDB",
                    "Amazon CloudWatch",
                    "AWS IAM",
                ],
                15.0,
            ),
            ApplicationType::BackendApi => budget_preset(
                &[
                    "AWS Lambda",
                    "Amazon API Gateway",
                    "Amazon CloudWatch",
                    "AWS IAM",
                ],
                8.0,
            ),
            ApplicationType::FullStack if database => budget_preset(
                &[
                    "AWS Lambda",
                    "Amazon S3",
                    "Amazon CloudFront",
                    "Amazon DynamoDB",
                    "Amazon CloudWatch",
                    "AWS IAM",
                ],
                25.0,
            ),
            ApplicationType::FullStack => budget_preset(
                &[
                    "AWS Lambda",
                    "Amazon S3",
                    "Amazon CloudFront",
                    "Amazon CloudWatch",
                    "AWS IAM",
                ],
                15.0,
            ),
            ApplicationType::FileStorage => budget_preset(&["Amazon S3", "AWS IAM"], 10.0),
            ApplicationType::EventDriven => budget_preset(
                &[
                    "AWS Lambda",
                    "Amazon SQS",
                    "Amazon SNS",
                    "Amazon CloudWatch",
                    "AWS IAM",
                ],
                12.0,
            ),
        }
    }

    /// Only API-serving workloads have a performance preset.
    pub fn performance_optimized(
        &self,
        requirement: &Requirement,
    ) -> Option<AlternativeArchitecture> {
        match requirement.application_type() {
            ApplicationType::BackendApi => Some(performance_preset(
                &[
                    "Amazon ECS",
                    "Amazon Aurora",
                    "Amazon CloudFront",
                    "Amazon CloudWatch",
                    "AWS IAM",
                ],
                120.0,
            )),
            ApplicationType::FullStack => Some(performance_preset(
                &[
                    "Amazon ECS",
                    "Amazon Aurora",
                    "Amazon S3",
                    "Amazon CloudFront",
                    "Amazon CloudWatch",
                    "AWS IAM",
                ],
                150.0,
            )),
            ApplicationType::StaticWebsite
            | ApplicationType::FileStorage
            | ApplicationType::EventDriven => None,
        }
    }
}

fn budget_preset(services: &[&str], total_cost: f64) -> AlternativeArchitecture {
    AlternativeArchitecture::preset(
        BUDGET_OPTIMIZED,
        services,
        total_cost,
        "Serverless and managed services for minimal cost",
    )
}

fn performance_preset(services: &[&str], total_cost: f64) -> AlternativeArchitecture {
    AlternativeArchitecture::preset(
        PERFORMANCE_OPTIMIZED,
        services,
        total_cost,
        "High-performance managed services for demanding workloads",
    )
}
