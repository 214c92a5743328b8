use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fotoconnect_core::{
    dashboard::aggregate,
    domain::{Period, Transaction, TransactionKind},
};

fn sample_transactions(count: usize, today: NaiveDate) -> Vec<Transaction> {
    (0..count)
        .map(|idx| {
            let kind = if idx % 3 == 0 {
                TransactionKind::Expense
            } else {
                TransactionKind::Income
            };
            let date = today - Duration::days((idx % 45) as i64);
            Transaction::new(idx as i64, 7, (idx as i64 + 1) * 125, kind, date)
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let transactions = sample_transactions(2000, today);

    for period in [
        Period::LastSevenDays,
        Period::LastThirtyDays,
        Period::CurrentMonth,
    ] {
        c.bench_function(&format!("aggregate_{}", period.tag()), |b| {
            b.iter(|| aggregate(black_box(&transactions), period, today))
        });
    }
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
