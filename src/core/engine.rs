use std::collections::HashSet;

use super::error::{ProjectionError, ProjectionResult};
use super::types::{GlobalAssumptions, Plan, PlanAssumptions, PlanYear, Projection, YearRecord};

const MONTHS_PER_YEAR: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct YearSpan {
    year: u32,
    start_month: u32,
    months: u32,
}

/// Running state of one plan while stepping through the months of a year.
#[derive(Debug, Clone, Copy)]
struct YearAccumulator {
    customers: f64,
    users: f64,
    subscription_revenue: f64,
    workspace_revenue: f64,
    last_workspaces: f64,
}

impl YearAccumulator {
    fn starting_at(customers: f64, users: f64) -> Self {
        Self {
            customers,
            users,
            subscription_revenue: 0.0,
            workspace_revenue: 0.0,
            last_workspaces: 0.0,
        }
    }

    fn step(self, assumptions: &PlanAssumptions, globals: &GlobalAssumptions, factor: f64) -> Self {
        let subscription = self.customers * globals.base_price_per_customer
            + self.users * assumptions.price_per_user;
        let workspaces = (self.users * assumptions.workspace_ratio).ceil();
        let workspace = workspaces * globals.workspace_cost_per_user;

        let customers = self.customers * factor;
        Self {
            customers,
            users: assumptions.users_for(customers),
            subscription_revenue: self.subscription_revenue + subscription,
            workspace_revenue: self.workspace_revenue + workspace,
            last_workspaces: workspaces,
        }
    }
}

/// Projects every plan over the horizon and aggregates the results per year.
///
/// Plans are independent of each other. The order of `plans` is kept in each
/// `YearRecord`. Rates are not range-checked here, but non-finite inputs and
/// non-finite intermediate values are rejected.
pub fn project(
    plans: &[(Plan, PlanAssumptions)],
    globals: &GlobalAssumptions,
) -> ProjectionResult<Projection> {
    check_globals(globals)?;

    let mut seen = HashSet::with_capacity(plans.len());
    for (plan, _) in plans {
        if !seen.insert(plan) {
            return Err(ProjectionError::invalid(
                Some(plan),
                "plan",
                "plan appears more than once",
            ));
        }
    }

    let per_plan = plans
        .iter()
        .map(|(plan, assumptions)| project_plan(plan, assumptions, globals))
        .collect::<ProjectionResult<Vec<_>>>()?;

    let years: Vec<YearRecord> = year_spans(globals.horizon_months)
        .enumerate()
        .map(|(idx, span)| YearRecord {
            year: span.year,
            months: span.months,
            plans: per_plan.iter().map(|plan_years| plan_years[idx].clone()).collect(),
        })
        .collect();

    let total_revenue = years.iter().map(YearRecord::total_revenue).sum();

    Ok(Projection {
        total_revenue,
        years,
    })
}

fn project_plan(
    plan: &Plan,
    assumptions: &PlanAssumptions,
    globals: &GlobalAssumptions,
) -> ProjectionResult<Vec<PlanYear>> {
    check_plan(plan, assumptions)?;
    let factor = assumptions.net_monthly_factor();
    year_spans(globals.horizon_months)
        .map(|span| project_plan_year(plan, assumptions, globals, factor, span))
        .collect()
}

fn project_plan_year(
    plan: &Plan,
    assumptions: &PlanAssumptions,
    globals: &GlobalAssumptions,
    factor: f64,
    span: YearSpan,
) -> ProjectionResult<PlanYear> {
    let start_customers = if assumptions.initial_customers == 0 {
        0.0
    } else {
        assumptions.initial_customers as f64 * factor.powf(span.start_month as f64)
    };
    let start_users = assumptions.users_for(start_customers);

    let end = (0..span.months).fold(
        YearAccumulator::starting_at(start_customers, start_users),
        |acc, _| acc.step(assumptions, globals, factor),
    );

    let figures = [
        ("customers", start_customers),
        ("users", start_users),
        ("subscription_revenue", end.subscription_revenue),
        ("workspace_revenue", end.workspace_revenue),
        ("workspaces", end.last_workspaces),
    ];
    if let Some((figure, _)) = figures.iter().find(|(_, value)| !value.is_finite()) {
        return Err(ProjectionError::invalid(
            Some(plan),
            "projection",
            format!("projected {figure} are not finite in year {}", span.year),
        ));
    }

    Ok(PlanYear {
        plan: plan.clone(),
        customers: round_count(plan, "customers", start_customers, span)?,
        users: round_count(plan, "users", start_users, span)?,
        subscription_revenue: round_cents(end.subscription_revenue),
        workspaces: round_count(plan, "workspaces", end.last_workspaces, span)?,
        workspace_revenue: round_cents(end.workspace_revenue),
        total_revenue: round_cents(end.subscription_revenue + end.workspace_revenue),
    })
}

fn year_spans(horizon_months: u32) -> impl Iterator<Item = YearSpan> {
    (0..horizon_months.div_ceil(MONTHS_PER_YEAR)).map(move |idx| {
        let start_month = idx * MONTHS_PER_YEAR;
        YearSpan {
            year: idx + 1,
            start_month,
            months: (horizon_months - start_month).min(MONTHS_PER_YEAR),
        }
    })
}

fn check_globals(globals: &GlobalAssumptions) -> ProjectionResult<()> {
    ensure_finite(None, "base_price_per_customer", globals.base_price_per_customer)?;
    ensure_finite(None, "workspace_cost_per_user", globals.workspace_cost_per_user)
}

fn check_plan(plan: &Plan, assumptions: &PlanAssumptions) -> ProjectionResult<()> {
    let fields = [
        ("avg_employees_per_customer", assumptions.avg_employees_per_customer),
        ("user_adoption_ratio", assumptions.user_adoption_ratio),
        ("price_per_user", assumptions.price_per_user),
        ("monthly_growth_rate", assumptions.monthly_growth_rate),
        ("monthly_churn_rate", assumptions.monthly_churn_rate),
        ("workspace_ratio", assumptions.workspace_ratio),
    ];
    for (field, value) in fields {
        ensure_finite(Some(plan), field, value)?;
    }
    Ok(())
}

fn ensure_finite(plan: Option<&Plan>, field: &'static str, value: f64) -> ProjectionResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ProjectionError::invalid(
            plan,
            field,
            format!("expected a finite number, got {value}"),
        ))
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Counts are reported as `i64`; a rounded value outside that range is an error.
fn round_count(plan: &Plan, figure: &str, value: f64, span: YearSpan) -> ProjectionResult<i64> {
    let rounded = value.round();
    if (i64::MIN as f64..i64::MAX as f64).contains(&rounded) {
        Ok(rounded as i64)
    } else {
        Err(ProjectionError::invalid(
            Some(plan),
            "projection",
            format!(
                "projected {figure} ({rounded:e}) exceed the integer range in year {}",
                span.year
            ),
        ))
    }
}
