use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use bijak::core::*;
use bijak::render::{render_html, RenderOptions};

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn build_invoice(line_count: usize) -> Invoice {
    let mut builder = InvoiceBuilder::new("INV/24-25/0001", test_date())
        .seller(
            PartyBuilder::new(
                "Chennai Traders Pvt Ltd",
                AddressBuilder::new("Chennai", "600001", "Tamil Nadu")
                    .street("12 Mount Road")
                    .build(),
            )
            .gstin("33AAACC4563F1Z1")
            .build(),
        )
        .buyer(
            PartyBuilder::new(
                "Madurai Mills",
                AddressBuilder::new("Madurai", "625001", "Tamil Nadu").build(),
            )
            .build(),
        );

    for i in 1..=line_count {
        builder = builder.add_line(
            LineItemBuilder::new(
                i.to_string(),
                format!("Item {i}"),
                dec!(5),
                "NOS",
                dec!(120),
            )
            .hsn_code("5205")
            .gst_rate(dec!(18))
            .build(),
        );
    }

    builder.build().unwrap()
}

fn bench_totals(c: &mut Criterion) {
    let invoice_10 = build_invoice(10);
    let invoice_1000 = build_invoice(1000);

    c.bench_function("tax_breakdown_10_lines", |b| {
        b.iter(|| tax_breakdown(black_box(&invoice_10.lines), SupplyType::IntraState))
    });

    c.bench_function("tax_breakdown_1000_lines", |b| {
        b.iter(|| tax_breakdown(black_box(&invoice_1000.lines), SupplyType::InterState))
    });
}

fn bench_validation(c: &mut Criterion) {
    let invoice = build_invoice(100);

    c.bench_function("validate_invoice_100_lines", |b| {
        b.iter(|| validate_invoice(black_box(&invoice)))
    });
}

fn bench_words(c: &mut Criterion) {
    c.bench_function("amount_in_words", |b| {
        b.iter(|| amount_in_words(black_box(dec!(12345678.90))))
    });
}

fn bench_render(c: &mut Criterion) {
    let invoice = build_invoice(50);
    let options = RenderOptions::default();

    c.bench_function("render_html_50_lines", |b| {
        b.iter(|| render_html(black_box(&invoice), &options).unwrap())
    });
}

criterion_group!(benches, bench_totals, bench_validation, bench_words, bench_render);
criterion_main!(benches);
