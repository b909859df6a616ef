use chrono::{TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use invoicekit::core::*;

fn build_invoice(lines: usize) -> Invoice {
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap());
    let mut builder = InvoiceBuilder::new(
        Party::new("Benchmark Ltd", "1 Main St", "billing@bench.example"),
        Party::new("Customer Inc", "42 High St", "ap@customer.example"),
    )
    .clock(clock);

    for i in 1..=lines {
        builder = builder
            .add_item(format!("Service item {i}"), dec!(120.50), dec!(0.19))
            .comment(format!("Line {i} delivered"));
    }

    builder.build()
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_10_lines", |b| b.iter(|| build_invoice(black_box(10))));
    c.bench_function("build_1000_lines", |b| {
        b.iter(|| build_invoice(black_box(1000)))
    });
}

fn bench_totals(c: &mut Criterion) {
    let small = build_invoice(10);
    let large = build_invoice(1000);

    c.bench_function("calculate_total_10_lines", |b| {
        b.iter(|| small.calculate_total(black_box(dec!(20))).unwrap())
    });
    c.bench_function("calculate_total_1000_lines", |b| {
        b.iter(|| large.calculate_total(black_box(dec!(20))).unwrap())
    });
}

fn bench_comments(c: &mut Criterion) {
    let large = build_invoice(1000);
    c.bench_function("get_comments_1000", |b| b.iter(|| large.get_comments()));
}

criterion_group!(benches, bench_build, bench_totals, bench_comments);
criterion_main!(benches);
