use std::fmt;

use serde::Serialize;

/// Subscription tier identifier. The set of plans is chosen by the caller.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(transparent)]
pub struct Plan(String);

impl Plan {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-plan inputs for one projection run. Rates and ratios are fractions,
/// not percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanAssumptions {
    pub initial_customers: u64,
    pub avg_employees_per_customer: f64,
    pub user_adoption_ratio: f64,
    pub price_per_user: f64,
    pub monthly_growth_rate: f64,
    pub monthly_churn_rate: f64,
    pub workspace_ratio: f64,
}

impl PlanAssumptions {
    /// Multiplier applied to the customer base once per month.
    pub fn net_monthly_factor(&self) -> f64 {
        1.0 + self.monthly_growth_rate - self.monthly_churn_rate
    }

    pub(crate) fn users_for(&self, customers: f64) -> f64 {
        customers * self.avg_employees_per_customer * self.user_adoption_ratio
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalAssumptions {
    pub base_price_per_customer: f64,
    pub workspace_cost_per_user: f64,
    pub horizon_months: u32,
}

/// One plan's figures for one projected year.
///
/// `customers` and `users` are start-of-year values, `workspaces` is the
/// last month's snapshot and the revenue fields are sums over the year.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanYear {
    pub plan: Plan,
    pub customers: i64,
    pub users: i64,
    pub subscription_revenue: f64,
    pub workspaces: i64,
    pub workspace_revenue: f64,
    pub total_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRecord {
    pub year: u32,
    pub months: u32,
    pub plans: Vec<PlanYear>,
}

impl YearRecord {
    pub fn plan(&self, plan: &Plan) -> Option<&PlanYear> {
        self.plans.iter().find(|entry| &entry.plan == plan)
    }

    pub fn total_revenue(&self) -> f64 {
        self.plans.iter().map(|entry| entry.total_revenue).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub total_revenue: f64,
    pub years: Vec<YearRecord>,
}

impl Projection {
    /// Sum of one plan's yearly totals, or `None` if the plan was not projected.
    pub fn plan_total(&self, plan: &Plan) -> Option<f64> {
        let mut seen = false;
        let mut total = 0.0;
        for record in &self.years {
            if let Some(entry) = record.plan(plan) {
                seen = true;
                total += entry.total_revenue;
            }
        }
        seen.then_some(total)
    }
}
