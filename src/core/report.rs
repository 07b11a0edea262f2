use std::fmt;

use serde::Serialize;

use super::error::{ProjectionError, ProjectionResult};
use super::types::{Plan, PlanYear, YearRecord};

const TOTAL_LABEL: &str = "Total";
const CURRENCY_MARKER: &str = "$";

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Customers,
    Users,
    SubscriptionRevenue,
    Workspaces,
    WorkspaceRevenue,
    TotalRevenue,
}

impl Metric {
    /// Row order within one year of the report.
    pub const ALL: [Metric; 6] = [
        Metric::Customers,
        Metric::Users,
        Metric::SubscriptionRevenue,
        Metric::Workspaces,
        Metric::WorkspaceRevenue,
        Metric::TotalRevenue,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Customers => "Customers",
            Metric::Users => "Users",
            Metric::SubscriptionRevenue => "Subscription Revenue",
            Metric::Workspaces => "Number of Workspaces",
            Metric::WorkspaceRevenue => "Workspace Revenue",
            Metric::TotalRevenue => "Total Revenue",
        }
    }

    pub fn is_currency(self) -> bool {
        matches!(
            self,
            Metric::SubscriptionRevenue | Metric::WorkspaceRevenue | Metric::TotalRevenue
        )
    }

    fn render(self, entry: &PlanYear) -> String {
        match self {
            Metric::Customers => format_count(entry.customers),
            Metric::Users => format_count(entry.users),
            Metric::SubscriptionRevenue => format_currency(entry.subscription_revenue),
            Metric::Workspaces => format_count(entry.workspaces),
            Metric::WorkspaceRevenue => format_currency(entry.workspace_revenue),
            Metric::TotalRevenue => format_currency(entry.total_revenue),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum YearParity {
    Odd,
    Even,
}

impl YearParity {
    pub fn of(year: u32) -> Self {
        if year % 2 == 1 {
            YearParity::Odd
        } else {
            YearParity::Even
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub label: String,
    pub year: Option<u32>,
    pub metric: Option<Metric>,
    pub values: Vec<String>,
    pub year_parity: Option<YearParity>,
    pub is_total: bool,
}

/// Display-ready breakdown: six rows per year and one trailing total row.
/// `values` in every row line up with `plans`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTable {
    pub plans: Vec<Plan>,
    pub rows: Vec<ReportRow>,
}

impl ReportTable {
    pub fn total_row(&self) -> Option<&ReportRow> {
        self.rows.iter().find(|row| row.is_total)
    }
}

pub fn format_report(years: &[YearRecord], plans: &[Plan]) -> ProjectionResult<ReportTable> {
    let mut rows = Vec::with_capacity(years.len() * Metric::ALL.len() + 1);
    let mut totals = vec![0.0; plans.len()];

    for record in years {
        if let Some(extra) = record
            .plans
            .iter()
            .find(|entry| !plans.contains(&entry.plan))
        {
            return Err(ProjectionError::MissingPlanData {
                plan: extra.plan.clone(),
                year: record.year,
            });
        }

        let entries = plans
            .iter()
            .map(|plan| {
                record
                    .plan(plan)
                    .ok_or_else(|| ProjectionError::MissingPlanData {
                        plan: plan.clone(),
                        year: record.year,
                    })
            })
            .collect::<ProjectionResult<Vec<_>>>()?;

        for (total, entry) in totals.iter_mut().zip(&entries) {
            *total += entry.total_revenue;
        }

        let parity = YearParity::of(record.year);
        rows.extend(Metric::ALL.iter().map(|&metric| ReportRow {
            label: format!("Year {} - {}", record.year, metric.label()),
            year: Some(record.year),
            metric: Some(metric),
            values: entries.iter().map(|entry| metric.render(entry)).collect(),
            year_parity: Some(parity),
            is_total: false,
        }));
    }

    rows.push(ReportRow {
        label: TOTAL_LABEL.to_string(),
        year: None,
        metric: None,
        values: totals.iter().map(|&total| format_currency(total)).collect(),
        year_parity: None,
        is_total: true,
    });

    Ok(ReportTable {
        plans: plans.to_vec(),
        rows,
    })
}

/// Integer with `,` thousands separators.
pub fn format_count(value: i64) -> String {
    let digits = group_thousands(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Whole currency units, cents truncated toward zero. Formats from the
/// float's own digits so amounts beyond the integer range keep their value.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("{CURRENCY_MARKER}{value}");
    }
    let whole = value.trunc();
    let sign = if whole < 0.0 { "-" } else { "" };
    format!(
        "{CURRENCY_MARKER}{sign}{}",
        group_thousands(&format!("{:.0}", whole.abs()))
    )
}

/// Currency with two decimals, used for the headline grand total.
pub fn format_currency_cents(value: f64) -> String {
    if !value.is_finite() {
        return format!("{CURRENCY_MARKER}{value}");
    }
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    format!("{CURRENCY_MARKER}{sign}{}.{cents}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl fmt::Display for ReportTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self
            .rows
            .iter()
            .map(|row| row.label.len())
            .chain(std::iter::once("Item".len()))
            .max()
            .unwrap_or(0);
        let column_widths: Vec<usize> = self
            .plans
            .iter()
            .enumerate()
            .map(|(idx, plan)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.values.get(idx))
                    .map(String::len)
                    .chain(std::iter::once(plan.name().len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:<label_width$}", "Item")?;
        for (plan, width) in self.plans.iter().zip(column_widths.iter().copied()) {
            write!(f, "  {:>width$}", plan.name())?;
        }
        writeln!(f)?;

        let rule_width = label_width + column_widths.iter().map(|w| w + 2).sum::<usize>();
        for row in &self.rows {
            if row.is_total {
                writeln!(f, "{}", "-".repeat(rule_width))?;
            }
            write!(f, "{:<label_width$}", row.label)?;
            for (value, width) in row.values.iter().zip(column_widths.iter().copied()) {
                write!(f, "  {value:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
