use chrono::NaiveDate;
use bijak::client::{submit_invoice, ApiConfig};
use bijak::core::*;
use rust_decimal_macros::dec;

#[tokio::main]
async fn main() {
    let invoice = InvoiceBuilder::new(
        "INV/24-25/0001",
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
    )
    .seller(
        PartyBuilder::new(
            "Chennai Traders Pvt Ltd",
            AddressBuilder::new("Chennai", "600001", "Tamil Nadu").build(),
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
    )
    .add_line(
        LineItemBuilder::new("1", "Cotton Yarn", dec!(2), "KGS", dec!(100))
            .gst_rate(dec!(18))
            .build(),
    )
    .build()
    .expect("invoice should validate");

    let base_url = std::env::var("BIJAK_API_URL").unwrap_or_else(|_| "http://localhost:8080".into());
    let token = std::env::var("BIJAK_API_TOKEN").unwrap_or_default();
    let config = ApiConfig::new(base_url, token);

    match submit_invoice(&config, &invoice).await {
        Ok(receipt) => println!(
            "Persisted as {} (record id {})",
            receipt.invoice_number, receipt.id
        ),
        Err(e) => eprintln!("Submission failed: {e}"),
    }
}
