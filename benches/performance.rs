use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use student_finance::core::services::{BudgetService, InsightService, SeriesService};
use student_finance::domain::{
    CategoryKind, PeriodSelector, Transaction, EXPENSE_CATEGORIES, INCOME_CATEGORIES,
};
use student_finance::storage::{json_backend::JsonStorage, StorageBackend};
use tempfile::tempdir;

fn build_transactions(count: usize) -> Vec<Transaction> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..count)
        .map(|idx| {
            let date = start + Duration::days((idx % 540) as i64);
            if idx % 10 == 0 {
                Transaction::new(
                    CategoryKind::Income,
                    2000.0,
                    INCOME_CATEGORIES[idx % INCOME_CATEGORIES.len()],
                    "income",
                    date,
                )
            } else {
                Transaction::new(
                    CategoryKind::Expense,
                    50.0 + (idx % 100) as f64,
                    EXPENSE_CATEGORIES[idx % EXPENSE_CATEGORIES.len()],
                    "expense",
                    date,
                )
            }
        })
        .collect()
}

fn bench_aggregations(c: &mut Criterion) {
    let transactions = build_transactions(black_box(10_000));
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();

    for selector in [PeriodSelector::CurrentMonth, PeriodSelector::CurrentYear] {
        c.bench_function(&format!("insights_{}_10k", selector), |b| {
            b.iter(|| black_box(InsightService::compute(&transactions, selector, now)))
        });
    }

    c.bench_function("budget_recompute_10k", |b| {
        b.iter(|| black_box(BudgetService::recompute(&transactions, &[], now.date_naive())))
    });

    c.bench_function("monthly_series_10k", |b| {
        b.iter(|| black_box(SeriesService::monthly(&transactions)))
    });
}

fn bench_storage(c: &mut Criterion) {
    let transactions = build_transactions(black_box(10_000));
    let dir = tempdir().expect("tempdir");
    let storage = JsonStorage::new(Some(dir.path().to_path_buf())).expect("storage");
    let now = Utc::now();

    c.bench_function("save_transactions_10k", |b| {
        b.iter(|| storage.save_transactions(&transactions, now).expect("save"))
    });

    c.bench_function("load_transactions_10k", |b| {
        b.iter(|| black_box(storage.load_transactions().expect("load")))
    });
}

criterion_group!(benches, bench_aggregations, bench_storage);
criterion_main!(benches);
