use serde::{Deserialize, Serialize};

use crate::catalog::ApplicationType;

/// Three yes/no questions used to pick an application type for undecided users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadAnswers {
    pub user_facing: bool,
    pub real_time: bool,
    pub stores_data: bool,
}

pub fn suggest_application_type(answers: &WorkloadAnswers) -> ApplicationType {
    let WorkloadAnswers {
        user_facing,
        real_time,
        stores_data,
    } = *answers;

    match (user_facing, real_time, stores_data) {
        (true, true, true) => ApplicationType::FullStack,
        (true, true, false) => ApplicationType::StaticWebsite,
        (false, true, _) => ApplicationType::BackendApi,
        (_, false, true) => ApplicationType::FileStorage,
        _ => ApplicationType::EventDriven,
    }
}
