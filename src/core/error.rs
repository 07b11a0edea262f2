use thiserror::Error;

use super::types::Plan;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("Invalid assumption {field}{}: {reason}", plan_suffix(.plan))]
    InvalidAssumption {
        plan: Option<Plan>,
        field: &'static str,
        reason: String,
    },

    #[error("Missing data for plan '{plan}' in year {year}")]
    MissingPlanData { plan: Plan, year: u32 },
}

pub type ProjectionResult<T> = Result<T, ProjectionError>;

fn plan_suffix(plan: &Option<Plan>) -> String {
    match plan {
        Some(plan) => format!(" for plan '{plan}'"),
        None => String::new(),
    }
}

impl ProjectionError {
    pub(crate) fn invalid(plan: Option<&Plan>, field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidAssumption {
            plan: plan.cloned(),
            field,
            reason: reason.into(),
        }
    }
}
