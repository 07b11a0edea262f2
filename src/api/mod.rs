use anyhow::Context;
use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;

use crate::core::{
    GlobalAssumptions, Plan, PlanAssumptions, ProjectionError, ReportTable, YearRecord,
    format_currency_cents, format_report, project,
};

const MONTHS_PER_YEAR: u32 = 12;
const DEFAULT_PLAN_PRICES: [(&str, f64); 3] = [("Basic", 10.0), ("Pro", 20.0), ("Enterprise", 30.0)];

/// Plan inputs as entered by a user: rates and ratios in percent.
#[derive(Debug, Clone, PartialEq)]
struct PlanConfig {
    name: String,
    customers: u64,
    avg_employees: f64,
    user_percentage: f64,
    price_per_user: f64,
    growth_rate: f64,
    churn_rate: f64,
    workspace_percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct Settings {
    base_price: f64,
    workspace_cost: f64,
    years: u32,
    months: u32,
    plans: Vec<PlanConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PlanPayload {
    name: Option<String>,
    customers: Option<u64>,
    avg_employees: Option<f64>,
    user_percentage: Option<f64>,
    price_per_user: Option<f64>,
    growth_rate: Option<f64>,
    churn_rate: Option<f64>,
    workspace_percentage: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProjectPayload {
    base_price: Option<f64>,
    workspace_cost: Option<f64>,
    years: Option<u32>,
    months: Option<u32>,
    plans: Option<Vec<PlanPayload>>,
}

#[derive(Parser, Debug)]
#[command(
    name = "revenue-projector",
    about = "Recurring revenue projection for multi-plan subscription pricing",
    after_help = "Run `revenue-projector serve [port]` to start the HTTP API instead."
)]
struct Cli {
    #[arg(
        long,
        default_value_t = 100.0,
        help = "Monthly base price charged per customer company"
    )]
    base_price: f64,
    #[arg(
        long,
        default_value_t = 5.0,
        help = "Monthly cost charged per workspace user"
    )]
    workspace_cost: f64,
    #[arg(long, default_value_t = 1, help = "Whole years to project")]
    years: u32,
    #[arg(long, default_value_t = 0, help = "Additional months (0-11)")]
    months: u32,
    #[arg(
        long,
        help = "JSON file with an array of plans; defaults to Basic, Pro and Enterprise"
    )]
    plans_file: Option<PathBuf>,
    #[arg(long, help = "Print the JSON response instead of a text table")]
    json: bool,
}

#[derive(Debug)]
struct ProjectionRequest {
    plans: Vec<(Plan, PlanAssumptions)>,
    globals: GlobalAssumptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectResponse {
    horizon_months: u32,
    total_revenue: f64,
    total_revenue_display: String,
    plans: Vec<Plan>,
    years: Vec<YearRecord>,
    table: ReportTable,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn default_plan(name: &str, price_per_user: f64) -> PlanConfig {
    PlanConfig {
        name: name.to_string(),
        customers: 10,
        avg_employees: 10_000.0,
        user_percentage: 10.0,
        price_per_user,
        growth_rate: 5.0,
        churn_rate: 1.0,
        workspace_percentage: 50.0,
    }
}

fn default_plans() -> Vec<PlanConfig> {
    DEFAULT_PLAN_PRICES
        .iter()
        .map(|&(name, price)| default_plan(name, price))
        .collect()
}

fn default_settings() -> Settings {
    Settings {
        base_price: 100.0,
        workspace_cost: 5.0,
        years: 1,
        months: 0,
        plans: default_plans(),
    }
}

fn plan_template(name: &str) -> PlanConfig {
    let mut template = default_plans()
        .into_iter()
        .find(|plan| plan.name == name)
        .unwrap_or_else(|| default_plan(DEFAULT_PLAN_PRICES[0].0, DEFAULT_PLAN_PRICES[0].1));
    template.name = name.to_string();
    template
}

fn plans_from_payload(payload: Vec<PlanPayload>) -> Result<Vec<PlanConfig>, String> {
    payload
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| -> Result<PlanConfig, String> {
            let name = entry
                .name
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .ok_or_else(|| format!("plans[{idx}].name is required"))?;
            let mut plan = plan_template(&name);

            if let Some(v) = entry.customers {
                plan.customers = v;
            }
            if let Some(v) = entry.avg_employees {
                plan.avg_employees = v;
            }
            if let Some(v) = entry.user_percentage {
                plan.user_percentage = v;
            }
            if let Some(v) = entry.price_per_user {
                plan.price_per_user = v;
            }
            if let Some(v) = entry.growth_rate {
                plan.growth_rate = v;
            }
            if let Some(v) = entry.churn_rate {
                plan.churn_rate = v;
            }
            if let Some(v) = entry.workspace_percentage {
                plan.workspace_percentage = v;
            }
            Ok(plan)
        })
        .collect()
}

fn settings_from_payload(payload: ProjectPayload) -> Result<Settings, String> {
    let mut settings = default_settings();

    if let Some(v) = payload.base_price {
        settings.base_price = v;
    }
    if let Some(v) = payload.workspace_cost {
        settings.workspace_cost = v;
    }
    if let Some(v) = payload.years {
        settings.years = v;
    }
    if let Some(v) = payload.months {
        settings.months = v;
    }
    if let Some(plans) = payload.plans {
        settings.plans = plans_from_payload(plans)?;
    }

    Ok(settings)
}

fn settings_from_cli(cli: &Cli, plans: Option<Vec<PlanPayload>>) -> Result<Settings, String> {
    Ok(Settings {
        base_price: cli.base_price,
        workspace_cost: cli.workspace_cost,
        years: cli.years,
        months: cli.months,
        plans: match plans {
            Some(plans) => plans_from_payload(plans)?,
            None => default_plans(),
        },
    })
}

fn check_non_negative(value: f64, what: &str) -> Result<(), String> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(format!("{what} must be a non-negative number"))
    }
}

fn check_percentage(value: f64, what: &str) -> Result<(), String> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(format!("{what} must be between 0 and 100"))
    }
}

fn build_request(settings: Settings) -> Result<ProjectionRequest, String> {
    check_non_negative(settings.base_price, "--base-price")?;
    check_non_negative(settings.workspace_cost, "--workspace-cost")?;

    if settings.months >= MONTHS_PER_YEAR {
        return Err("--months must be between 0 and 11".to_string());
    }
    let horizon_months = settings
        .years
        .checked_mul(MONTHS_PER_YEAR)
        .and_then(|months| months.checked_add(settings.months))
        .ok_or_else(|| "--years is too large".to_string())?;
    if horizon_months == 0 {
        return Err("--years and --months must cover at least one month".to_string());
    }

    if settings.plans.is_empty() {
        return Err("at least one plan is required".to_string());
    }

    let mut seen = HashSet::new();
    let mut plans = Vec::with_capacity(settings.plans.len());
    for config in settings.plans {
        if config.name.trim().is_empty() {
            return Err("plan names must not be empty".to_string());
        }
        if !seen.insert(config.name.clone()) {
            return Err(format!("plan '{}' is listed more than once", config.name));
        }

        let name = &config.name;
        check_non_negative(config.avg_employees, &format!("plan '{name}': avgEmployees"))?;
        check_non_negative(config.price_per_user, &format!("plan '{name}': pricePerUser"))?;
        check_percentage(config.user_percentage, &format!("plan '{name}': userPercentage"))?;
        check_percentage(config.growth_rate, &format!("plan '{name}': growthRate"))?;
        check_percentage(config.churn_rate, &format!("plan '{name}': churnRate"))?;
        check_percentage(
            config.workspace_percentage,
            &format!("plan '{name}': workspacePercentage"),
        )?;

        plans.push((
            Plan::new(config.name.as_str()),
            PlanAssumptions {
                initial_customers: config.customers,
                avg_employees_per_customer: config.avg_employees,
                user_adoption_ratio: config.user_percentage / 100.0,
                price_per_user: config.price_per_user,
                monthly_growth_rate: config.growth_rate / 100.0,
                monthly_churn_rate: config.churn_rate / 100.0,
                workspace_ratio: config.workspace_percentage / 100.0,
            },
        ));
    }

    Ok(ProjectionRequest {
        plans,
        globals: GlobalAssumptions {
            base_price_per_customer: settings.base_price,
            workspace_cost_per_user: settings.workspace_cost,
            horizon_months,
        },
    })
}

fn run_projection(request: &ProjectionRequest) -> Result<ProjectResponse, ProjectionError> {
    let projection = project(&request.plans, &request.globals)?;
    let plans: Vec<Plan> = request.plans.iter().map(|(plan, _)| plan.clone()).collect();
    let table = format_report(&projection.years, &plans)?;

    log::info!(
        "projected {} plan(s) over {} month(s): total {}",
        plans.len(),
        request.globals.horizon_months,
        format_currency_cents(projection.total_revenue)
    );

    Ok(ProjectResponse {
        horizon_months: request.globals.horizon_months,
        total_revenue: projection.total_revenue,
        total_revenue_display: format_currency_cents(projection.total_revenue),
        plans,
        years: projection.years,
        table,
    })
}

fn load_plans_file(path: &Path) -> anyhow::Result<Vec<PlanPayload>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read plans file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid plans file {}", path.display()))
}

/// One-shot projection driven by command-line flags.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let plans = cli.plans_file.as_deref().map(load_plans_file).transpose()?;
    let settings = settings_from_cli(&cli, plans).map_err(anyhow::Error::msg)?;
    let request = build_request(settings).map_err(anyhow::Error::msg)?;
    log::debug!("cli request: {request:?}");

    let response = run_projection(&request)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("Projected Total Revenue: {}", response.total_revenue_display);
        println!();
        print!("{}", response.table);
    }
    Ok(())
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route(
            "/api/project",
            get(project_get_handler).post(project_post_handler),
        )
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    log::info!("revenue projection API listening on http://{addr}");
    log::info!("local access: http://127.0.0.1:{port}/api/project");

    axum::serve(listener, app).await
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn project_get_handler(Query(payload): Query<ProjectPayload>) -> Response {
    project_handler_impl(payload).await
}

async fn project_post_handler(Json(payload): Json<ProjectPayload>) -> Response {
    project_handler_impl(payload).await
}

async fn project_handler_impl(payload: ProjectPayload) -> Response {
    log::debug!("project payload: {payload:?}");
    let request = match settings_from_payload(payload).and_then(build_request) {
        Ok(request) => request,
        Err(msg) => {
            log::warn!("rejected projection request: {msg}");
            return error_response(StatusCode::BAD_REQUEST, &msg);
        }
    };

    match run_projection(&request) {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(err) => {
            log::warn!("projection failed: {err}");
            error_response(StatusCode::UNPROCESSABLE_ENTITY, &err.to_string())
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn request_from_json(json: &str) -> Result<ProjectionRequest, String> {
    let payload = serde_json::from_str::<ProjectPayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    settings_from_payload(payload).and_then(build_request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Uri;

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn sample_cli() -> Cli {
        Cli::parse_from(["revenue-projector"])
    }

    fn assert_golden_snapshot(path: &str, actual: &str) {
        let update = matches!(
            std::env::var("UPDATE_GOLDEN").as_deref(),
            Ok("1") | Ok("true") | Ok("TRUE")
        );
        let snapshot_path = Path::new(path);

        if update {
            if let Some(parent) = snapshot_path.parent() {
                fs::create_dir_all(parent).expect("failed to create snapshot directory");
            }
            fs::write(snapshot_path, actual).expect("failed to write golden snapshot");
            return;
        }

        let expected = fs::read_to_string(snapshot_path).unwrap_or_else(|_| {
            panic!("missing golden snapshot at {path}; run with UPDATE_GOLDEN=1 to generate")
        });
        assert_eq!(
            actual, expected,
            "snapshot mismatch for {path}; run with UPDATE_GOLDEN=1 to refresh if expected"
        );
    }

    fn doubling_settings(years: u32) -> Settings {
        let mut settings = default_settings();
        settings.years = years;
        settings.plans.truncate(1);
        settings.plans[0].growth_rate = 100.0;
        settings.plans[0].churn_rate = 0.0;
        settings
    }

    #[test]
    fn defaults_project_three_plans_for_one_year() {
        let request = build_request(default_settings()).expect("defaults are valid");

        let names: Vec<&str> = request.plans.iter().map(|(plan, _)| plan.name()).collect();
        assert_eq!(names, vec!["Basic", "Pro", "Enterprise"]);
        assert_eq!(request.globals.horizon_months, 12);
        assert_approx(request.globals.base_price_per_customer, 100.0);
        assert_approx(request.globals.workspace_cost_per_user, 5.0);

        let (_, enterprise) = &request.plans[2];
        assert_eq!(enterprise.initial_customers, 10);
        assert_approx(enterprise.price_per_user, 30.0);
        assert_approx(enterprise.user_adoption_ratio, 0.10);
        assert_approx(enterprise.monthly_growth_rate, 0.05);
        assert_approx(enterprise.monthly_churn_rate, 0.01);
        assert_approx(enterprise.workspace_ratio, 0.5);
    }

    #[test]
    fn cli_defaults_match_api_defaults() {
        let settings = settings_from_cli(&sample_cli(), None).expect("valid cli");
        assert_eq!(settings, default_settings());
    }

    #[test]
    fn cli_flags_override_globals() {
        let cli = Cli::parse_from([
            "revenue-projector",
            "--base-price",
            "250",
            "--years",
            "2",
            "--months",
            "6",
            "--json",
        ]);
        assert!(cli.json);
        let request = build_request(settings_from_cli(&cli, None).expect("valid cli"))
            .expect("valid settings");
        assert_eq!(request.globals.horizon_months, 30);
        assert_approx(request.globals.base_price_per_customer, 250.0);
    }

    #[test]
    fn request_from_json_parses_plans_and_converts_percentages() {
        let json = r#"{
          "basePrice": 80,
          "workspaceCost": 4.5,
          "years": 3,
          "months": 2,
          "plans": [
            {
              "name": "Starter",
              "customers": 40,
              "avgEmployees": 120,
              "userPercentage": 25,
              "pricePerUser": 7.5,
              "growthRate": 3,
              "churnRate": 2,
              "workspacePercentage": 40
            },
            { "name": "Pro", "customers": 5 }
          ]
        }"#;
        let request = request_from_json(json).expect("json should parse");

        assert_eq!(request.globals.horizon_months, 38);
        assert_approx(request.globals.base_price_per_customer, 80.0);
        assert_approx(request.globals.workspace_cost_per_user, 4.5);

        let (starter_plan, starter) = &request.plans[0];
        assert_eq!(starter_plan, &Plan::new("Starter"));
        assert_eq!(starter.initial_customers, 40);
        assert_approx(starter.avg_employees_per_customer, 120.0);
        assert_approx(starter.user_adoption_ratio, 0.25);
        assert_approx(starter.price_per_user, 7.5);
        assert_approx(starter.monthly_growth_rate, 0.03);
        assert_approx(starter.monthly_churn_rate, 0.02);
        assert_approx(starter.workspace_ratio, 0.40);

        let (pro_plan, pro) = &request.plans[1];
        assert_eq!(pro_plan.name(), "Pro");
        assert_eq!(pro.initial_customers, 5);
        assert_approx(pro.price_per_user, 20.0);
    }

    #[test]
    fn query_string_overrides_globals_with_default_plans() {
        let uri: Uri = "/api/project?years=2&months=3&basePrice=50"
            .parse()
            .expect("valid uri");
        let Query(payload) = Query::<ProjectPayload>::try_from_uri(&uri).expect("query parses");
        let request = build_request(settings_from_payload(payload).expect("valid payload"))
            .expect("valid settings");

        assert_eq!(request.globals.horizon_months, 27);
        assert_approx(request.globals.base_price_per_customer, 50.0);
        assert_eq!(request.plans.len(), 3);
    }

    #[test]
    fn build_request_rejects_out_of_range_months() {
        let mut settings = default_settings();
        settings.months = 12;
        let err = build_request(settings).expect_err("must reject 12 extra months");
        assert!(err.contains("--months"));
    }

    #[test]
    fn build_request_rejects_empty_horizon() {
        let mut settings = default_settings();
        settings.years = 0;
        settings.months = 0;
        let err = build_request(settings).expect_err("must reject zero horizon");
        assert!(err.contains("at least one month"));
    }

    #[test]
    fn build_request_accepts_sub_year_horizon() {
        let mut settings = default_settings();
        settings.years = 0;
        settings.months = 5;
        let request = build_request(settings).expect("five months is valid");
        assert_eq!(request.globals.horizon_months, 5);
    }

    #[test]
    fn build_request_rejects_negative_prices() {
        let mut settings = default_settings();
        settings.workspace_cost = -1.0;
        let err = build_request(settings).expect_err("must reject negative cost");
        assert!(err.contains("--workspace-cost"));

        let mut settings = default_settings();
        settings.plans[1].price_per_user = -5.0;
        let err = build_request(settings).expect_err("must reject negative price");
        assert!(err.contains("plan 'Pro': pricePerUser"));
    }

    #[test]
    fn build_request_rejects_percentages_above_hundred() {
        let mut settings = default_settings();
        settings.plans[0].churn_rate = 150.0;
        let err = build_request(settings).expect_err("must reject churn > 100%");
        assert!(err.contains("plan 'Basic': churnRate"));
    }

    #[test]
    fn build_request_rejects_duplicate_and_missing_plans() {
        let mut settings = default_settings();
        settings.plans[2].name = "Basic".to_string();
        let err = build_request(settings).expect_err("must reject duplicate names");
        assert!(err.contains("more than once"));

        let mut settings = default_settings();
        settings.plans.clear();
        let err = build_request(settings).expect_err("must reject empty plan list");
        assert!(err.contains("at least one plan"));
    }

    #[test]
    fn plan_payload_requires_name() {
        let err = request_from_json(r#"{ "plans": [{ "customers": 3 }] }"#)
            .expect_err("must require plan name");
        assert!(err.contains("plans[0].name"));
    }

    #[test]
    fn response_serialization_contains_expected_fields() {
        let mut settings = default_settings();
        settings.years = 1;
        settings.months = 6;
        let request = build_request(settings).expect("valid settings");
        let response = run_projection(&request).expect("projection succeeds");

        assert_eq!(response.years.len(), 2);
        assert_eq!(response.table.rows.len(), 13);
        let year_sum: f64 = response.years.iter().map(YearRecord::total_revenue).sum();
        assert_approx(response.total_revenue, year_sum);
        assert!(response.total_revenue_display.starts_with('$'));

        let json = serde_json::to_string(&response).expect("response should serialize");
        assert!(json.contains("\"horizonMonths\":18"));
        assert!(json.contains("\"totalRevenue\""));
        assert!(json.contains("\"totalRevenueDisplay\""));
        assert!(json.contains("\"subscriptionRevenue\""));
        assert!(json.contains("\"workspaceRevenue\""));
        assert!(json.contains("\"yearParity\":\"odd\""));
        assert!(json.contains("\"isTotal\":true"));
        assert!(json.contains("\"plans\":[\"Basic\",\"Pro\",\"Enterprise\"]"));
    }

    #[test]
    fn golden_snapshot_default_projection_json() {
        let request = build_request(default_settings()).expect("defaults are valid");
        let response = run_projection(&request).expect("projection succeeds");
        let json = format!(
            "{}\n",
            serde_json::to_string(&response).expect("response should serialize")
        );

        assert_golden_snapshot("tests/golden/default_projection.json", &json);
    }

    #[test]
    fn oversized_counts_fail_instead_of_saturating() {
        let request = build_request(doubling_settings(7)).expect("inputs are in range");
        let err = run_projection(&request).expect_err("users exceed the integer range");
        assert!(err.to_string().contains("integer range"));

        let request = build_request(doubling_settings(2)).expect("inputs are in range");
        let response = run_projection(&request).expect("two years of doubling fit");
        assert!(response.years.iter().all(|record| record.plans[0].users < i64::MAX));
    }

    #[tokio::test]
    async fn handler_maps_oversized_projection_to_unprocessable_entity() {
        let payload = ProjectPayload {
            years: Some(7),
            plans: Some(vec![PlanPayload {
                name: Some("Basic".to_string()),
                growth_rate: Some(100.0),
                churn_rate: Some(0.0),
                ..PlanPayload::default()
            }]),
            ..ProjectPayload::default()
        };
        let response = project_handler_impl(payload).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn load_plans_file_reads_json_array() {
        let path = std::env::temp_dir().join(format!(
            "revenue-projector-plans-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"[{ "name": "Team", "pricePerUser": 12 }]"#)
            .expect("write temp plans file");

        let plans = load_plans_file(&path).expect("plans file parses");
        fs::remove_file(&path).ok();

        let settings = settings_from_cli(&sample_cli(), Some(plans)).expect("valid plans");
        assert_eq!(settings.plans.len(), 1);
        assert_eq!(settings.plans[0].name, "Team");
        assert_approx(settings.plans[0].price_per_user, 12.0);
        assert_eq!(settings.plans[0].customers, 10);
    }

    #[test]
    fn load_plans_file_reports_missing_file() {
        let err = load_plans_file(Path::new("/definitely/not/here.json"))
            .expect_err("missing file must fail");
        assert!(err.to_string().contains("failed to read plans file"));
    }

    #[tokio::test]
    async fn handler_maps_validation_errors_to_bad_request() {
        let payload = ProjectPayload {
            months: Some(20),
            ..ProjectPayload::default()
        };
        let response = project_handler_impl(payload).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL),
            Some(&header::HeaderValue::from_static("no-store"))
        );
    }

    #[tokio::test]
    async fn handler_returns_ok_for_default_payload() {
        let response = project_handler_impl(ProjectPayload::default()).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_routes_return_not_found() {
        let response = not_found_handler().await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
