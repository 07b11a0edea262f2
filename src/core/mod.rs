mod engine;
mod error;
mod report;
mod types;

pub use engine::project;
pub use error::{ProjectionError, ProjectionResult};
pub use report::{
    Metric, ReportRow, ReportTable, YearParity, format_count, format_currency,
    format_currency_cents, format_report,
};
pub use types::{GlobalAssumptions, Plan, PlanAssumptions, PlanYear, Projection, YearRecord};
