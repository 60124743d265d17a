//! Performance benchmarks for the Coverage Engine.
//!
//! Measures end-to-end request handling through the router:
//! - Single crew over one week
//! - Every crew over a month
//! - Overtime summaries for a full crew
//! - Scaling with the evaluated date range
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Days, NaiveDate};
use serde_json::Value;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use coverage_engine::api::{AppState, CoverageRequest, OvertimeRequest, create_router};
use coverage_engine::config::ConfigLoader;

use axum::{Router, body::Body, http::Request};
use tower::ServiceExt;

const CREWS: [&str; 4] = ["A", "B", "C", "D"];

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/plant").expect("Failed to load config");
    AppState::new(config)
}

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

/// Builds a ledger of 20 employees per crew, each working every other day
/// with one approved leave day a week.
fn ledger_json(days: u64) -> (Vec<Value>, Vec<Value>, Vec<Value>) {
    let mut employees = Vec::new();
    let mut leaves = Vec::new();
    let mut shifts = Vec::new();

    for crew in CREWS {
        for i in 0..20 {
            let id = format!("{}_{:03}", crew, i);
            employees.push(serde_json::json!({
                "id": id,
                "crew": crew,
                "position": "operator"
            }));

            for day in 0..days {
                let date = base_date() + Days::new(day);
                if (day + i) % 2 == 0 {
                    shifts.push(serde_json::json!({
                        "id": format!("shift_{}_{}", id, day),
                        "employee_id": id,
                        "date": date,
                        "crew": crew,
                        "hours": "12"
                    }));
                }
                if (day + i) % 7 == 0 {
                    leaves.push(serde_json::json!({
                        "id": format!("lv_{}_{}", id, day),
                        "employee_id": id,
                        "date": date,
                        "status": "approved"
                    }));
                }
            }
        }
    }

    (employees, leaves, shifts)
}

fn coverage_body(days: u64, crew: Option<&str>) -> String {
    let (employees, leaves, shifts) = ledger_json(days);
    let request_json = serde_json::json!({
        "start_date": base_date(),
        "end_date": base_date() + Days::new(days - 1),
        "crew": crew,
        "employees": employees,
        "leaves": leaves,
        "shifts": shifts
    });

    let request: CoverageRequest =
        serde_json::from_value(request_json).expect("Failed to create request");
    serde_json::to_string(&request).unwrap()
}

fn overtime_body() -> String {
    let (employees, _, shifts) = ledger_json(91);
    let request = OvertimeRequest {
        employee_ids: employees
            .iter()
            .filter_map(|e| e["id"].as_str().map(str::to_string))
            .collect(),
        reference_date: base_date() + Days::new(90),
        shifts: serde_json::from_value(Value::Array(shifts))
            .expect("Failed to create shifts"),
    };
    serde_json::to_string(&request).unwrap()
}

async fn post(router: Router, uri: &str, body: String) -> axum::response::Response {
    router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Benchmark: One crew over one week.
fn bench_single_crew_week(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = coverage_body(7, Some("A"));

    c.bench_function("single_crew_week", |b| {
        b.to_async(&rt).iter(|| async {
            black_box(post(router.clone(), "/coverage-gaps", body.clone()).await)
        })
    });
}

/// Benchmark: Every crew over a month.
fn bench_all_crews_month(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = coverage_body(31, None);

    c.bench_function("all_crews_month", |b| {
        b.to_async(&rt).iter(|| async {
            black_box(post(router.clone(), "/coverage-gaps", body.clone()).await)
        })
    });
}

/// Benchmark: 13-week overtime summary for every employee.
fn bench_overtime_summary(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = overtime_body();

    let mut group = c.benchmark_group("overtime");
    group.throughput(Throughput::Elements(80));
    group.sample_size(20);

    group.bench_function("summary_80_employees", |b| {
        b.to_async(&rt).iter(|| async {
            black_box(post(router.clone(), "/overtime-summary", body.clone()).await)
        })
    });

    group.finish();
}

/// Benchmark: Various range lengths to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let mut group = c.benchmark_group("scaling");

    for days in [1u64, 7, 14, 28, 91].iter() {
        let router = create_router(state.clone());
        let body = coverage_body(*days, None);

        group.throughput(Throughput::Elements(*days * CREWS.len() as u64));
        group.bench_with_input(BenchmarkId::new("days", days), days, |b, _| {
            b.to_async(&rt).iter(|| async {
                black_box(post(router.clone(), "/coverage-gaps", body.clone()).await)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_crew_week,
    bench_all_crews_month,
    bench_overtime_summary,
    bench_scaling,
);
criterion_main!(benches);
