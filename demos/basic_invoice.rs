use chrono::NaiveDate;
use bijak::core::*;
use rust_decimal_macros::dec;

fn main() {
    let mut numbers = InvoiceNumberSequence::new("INV", FiscalYear::starting(2024));

    // A standard intra-state tax invoice
    let invoice = InvoiceBuilder::new(
        numbers.next_number(),
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
    )
    .due_date(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap())
    .seller(
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
        .build(),
    )
    .buyer(
        PartyBuilder::new(
            "Madurai Mills",
            AddressBuilder::new("Madurai", "625001", "Tamil Nadu")
                .street("4 West Masi Street")
                .build(),
        )
        .build(),
    )
    .add_line(
        LineItemBuilder::new("1", "Cotton Yarn 40s", dec!(10), "KGS", dec!(250))
            .hsn_code("5205")
            .gst_rate(dec!(5))
            .build(),
    )
    .add_line(
        LineItemBuilder::new("2", "Dyeing Service", dec!(1), "NOS", dec!(1500))
            .gst_rate(dec!(18))
            .build(),
    )
    .note("Payment within 30 days")
    .build()
    .expect("invoice should validate");

    let totals = invoice.totals.as_ref().unwrap();
    println!("Invoice {}", invoice.number);
    println!("  Supply type: {:?}", invoice.supply_type());
    println!("  Subtotal:    {}", totals.taxable_total);
    println!("  CGST:        {}", totals.cgst);
    println!("  SGST:        {}", totals.sgst);
    println!("  IGST:        {}", totals.igst);
    println!("  Grand total: {}", totals.grand_total);
    println!("  In words:    {}", amount_in_words(totals.grand_total));
}
