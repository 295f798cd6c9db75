use chrono::NaiveDate;
use bijak::core::*;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seller() -> Party {
    PartyBuilder::new(
        "Chennai Traders Pvt Ltd",
        AddressBuilder::new("Chennai", "600001", "Tamil Nadu")
            .street("12 Mount Road")
            .build(),
    )
    .gstin("33AAACC4563F1Z1")
    .contact(
        Some("R. Kumar".into()),
        Some("+91 44 2434 1234".into()),
        Some("billing@chennaitraders.in".into()),
    )
    .build()
}

fn buyer(state: &str) -> Party {
    PartyBuilder::new(
        "Madurai Mills",
        AddressBuilder::new("Madurai", "625001", state)
            .street("4 West Masi Street")
            .build(),
    )
    .build()
}

// --- Intra-state invoice ---

#[test]
fn intra_state_invoice_full() {
    let inv = InvoiceBuilder::new("INV/24-25/0001", date(2024, 6, 15))
        .due_date(date(2024, 7, 15))
        .seller(seller())
        .buyer(buyer("Tamil Nadu"))
        .add_line(
            LineItemBuilder::new("1", "Cotton Yarn 40s", dec!(2), "KGS", dec!(100))
                .hsn_code("5205")
                .gst_rate(dec!(18))
                .build(),
        )
        .note("Payment within 30 days")
        .build()
        .unwrap();

    assert_eq!(inv.supply_type(), SupplyType::IntraState);

    let totals = inv.totals.as_ref().unwrap();
    assert_eq!(totals.taxable_total, dec!(200));
    assert_eq!(totals.cgst, dec!(18.00));
    assert_eq!(totals.sgst, dec!(18.00));
    assert_eq!(totals.igst, dec!(0));
    assert_eq!(totals.tax_total, dec!(36.00));
    assert_eq!(totals.grand_total, dec!(236.00));

    let line = &inv.lines[0];
    assert_eq!(line.taxable_amount, Some(dec!(200)));
    assert_eq!(line.tax_amount, Some(dec!(36.00)));
    assert_eq!(line.line_total, Some(dec!(236.00)));
}

// --- Inter-state invoice ---

#[test]
fn inter_state_invoice_is_igst() {
    let inv = InvoiceBuilder::new("INV/24-25/0002", date(2024, 6, 15))
        .seller(seller())
        .buyer(buyer("Kerala"))
        .add_line(
            LineItemBuilder::new("1", "Cotton Yarn 40s", dec!(2), "KGS", dec!(100))
                .gst_rate(dec!(18))
                .build(),
        )
        .build()
        .unwrap();

    assert_eq!(inv.supply_type(), SupplyType::InterState);

    let totals = inv.totals.as_ref().unwrap();
    assert_eq!(totals.cgst, dec!(0));
    assert_eq!(totals.sgst, dec!(0));
    assert_eq!(totals.igst, dec!(36.00));
    assert_eq!(totals.grand_total, dec!(236.00));
}

#[test]
fn state_match_is_case_insensitive() {
    let inv = InvoiceBuilder::new("INV/24-25/0003", date(2024, 6, 15))
        .seller(seller())
        .buyer(buyer("TAMIL NADU"))
        .add_line(
            LineItemBuilder::new("1", "Yarn", dec!(1), "KGS", dec!(100))
                .gst_rate(dec!(5))
                .build(),
        )
        .build()
        .unwrap();

    assert_eq!(inv.supply_type(), SupplyType::IntraState);
}

#[test]
fn place_of_supply_overrides_buyer_state() {
    // Buyer registered in Tamil Nadu, goods shipped to Kerala
    let inv = InvoiceBuilder::new("INV/24-25/0004", date(2024, 6, 15))
        .seller(seller())
        .buyer(buyer("Tamil Nadu"))
        .place_of_supply("Kerala")
        .add_line(
            LineItemBuilder::new("1", "Yarn", dec!(1), "KGS", dec!(100))
                .gst_rate(dec!(18))
                .build(),
        )
        .build()
        .unwrap();

    assert_eq!(inv.supply_type(), SupplyType::InterState);
    assert_eq!(inv.totals.as_ref().unwrap().igst, dec!(18.00));
}

// --- Builder errors ---

#[test]
fn seller_is_required() {
    let result = InvoiceBuilder::new("INV/24-25/0005", date(2024, 6, 15))
        .buyer(buyer("Tamil Nadu"))
        .add_line(
            LineItemBuilder::new("1", "Yarn", dec!(1), "KGS", dec!(100))
                .gst_rate(dec!(18))
                .build(),
        )
        .build();

    assert!(matches!(result, Err(BijakError::Builder(_))));
}

#[test]
fn empty_invoice_rejected_by_validation() {
    let result = InvoiceBuilder::new("INV/24-25/0006", date(2024, 6, 15))
        .seller(seller())
        .buyer(buyer("Tamil Nadu"))
        .build();

    let err = result.unwrap_err().to_string();
    assert!(err.contains("at least one line item"));
}

#[test]
fn build_unchecked_skips_validation_but_computes() {
    // GSTIN missing and no lines: invalid, but unchecked build succeeds
    let inv = InvoiceBuilder::new("INV/24-25/0007", date(2024, 6, 15))
        .seller(buyer("Tamil Nadu"))
        .buyer(buyer("Kerala"))
        .build_unchecked()
        .unwrap();

    let totals = inv.totals.as_ref().unwrap();
    assert_eq!(totals.taxable_total, dec!(0));
    assert_eq!(totals.grand_total, dec!(0));
    assert!(!validate_invoice(&inv).is_empty());
}

// --- Multi-line, multi-rate ---

#[test]
fn mixed_rate_invoice_breakdown() {
    let inv = InvoiceBuilder::new("INV/24-25/0008", date(2024, 6, 15))
        .seller(seller())
        .buyer(buyer("Tamil Nadu"))
        .add_line(
            LineItemBuilder::new("1", "Cotton Yarn", dec!(10), "KGS", dec!(250))
                .hsn_code("5205")
                .gst_rate(dec!(5))
                .build(),
        )
        .add_line(
            LineItemBuilder::new("2", "Dyeing Service", dec!(1), "NOS", dec!(1500))
                .gst_rate(dec!(18))
                .build(),
        )
        .add_line(
            LineItemBuilder::new("3", "Sewing Thread", dec!(20), "NOS", dec!(45))
                .discount(dec!(50))
                .gst_rate(dec!(5))
                .build(),
        )
        .build()
        .unwrap();

    let totals = inv.totals.as_ref().unwrap();
    // 2500 + 1500 + (900 - 50)
    assert_eq!(totals.taxable_total, dec!(4850));
    // 5%: (2500 + 850) * 5% = 167.50; 18%: 270
    assert_eq!(totals.tax_total, dec!(437.50));
    assert_eq!(totals.cgst, dec!(218.75));
    assert_eq!(totals.sgst, dec!(218.75));
    assert_eq!(totals.grand_total, dec!(5287.50));

    assert_eq!(totals.rate_breakdown.len(), 2);
    assert_eq!(totals.rate_breakdown[0].rate, dec!(5));
    assert_eq!(totals.rate_breakdown[0].taxable_amount, dec!(3350));
    assert_eq!(totals.rate_breakdown[1].rate, dec!(18));
    assert_eq!(totals.rate_breakdown[1].igst, dec!(0));
}

#[test]
fn sum_of_line_totals_equals_grand_total() {
    let inv = InvoiceBuilder::new("INV/24-25/0009", date(2024, 6, 15))
        .seller(seller())
        .buyer(buyer("Kerala"))
        .add_line(
            LineItemBuilder::new("1", "A", dec!(3), "NOS", dec!(33.33))
                .gst_rate(dec!(18))
                .build(),
        )
        .add_line(
            LineItemBuilder::new("2", "B", dec!(7), "NOS", dec!(19.99))
                .gst_rate(dec!(12))
                .build(),
        )
        .build()
        .unwrap();

    let sum: rust_decimal::Decimal = inv.lines.iter().filter_map(|l| l.line_total).sum();
    assert_eq!(sum, inv.totals.as_ref().unwrap().grand_total);
}

// --- Serde round trip ---

#[test]
fn invoice_serde_round_trip() {
    let inv = InvoiceBuilder::new("INV/24-25/0010", date(2024, 6, 15))
        .seller(seller())
        .buyer(buyer("Kerala"))
        .add_line(
            LineItemBuilder::new("1", "Yarn", dec!(2), "KGS", dec!(100))
                .gst_rate(dec!(18))
                .build(),
        )
        .build()
        .unwrap();

    let json = serde_json::to_string(&inv).unwrap();
    let back: Invoice = serde_json::from_str(&json).unwrap();
    assert_eq!(back.number, inv.number);
    assert_eq!(
        back.totals.as_ref().unwrap().grand_total,
        inv.totals.as_ref().unwrap().grand_total
    );
    assert!(validate_invoice(&back).is_empty());
}
