use chrono::NaiveDate;
use bijak::core::*;
use bijak::render::{render_html, RenderOptions};
use rust_decimal_macros::dec;

fn main() {
    let invoice = InvoiceBuilder::new(
        "INV/24-25/0042",
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
    )
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
            "Kochi Textiles",
            AddressBuilder::new("Kochi", "682001", "Kerala").build(),
        )
        .gstin("32AABCK7654G1ZM")
        .build(),
    )
    .add_line(
        LineItemBuilder::new("1", "Cotton Yarn 40s", dec!(10), "KGS", dec!(250))
            .hsn_code("5205")
            .gst_rate(dec!(5))
            .build(),
    )
    .note("Goods once sold will not be taken back")
    .build()
    .expect("invoice should validate");

    let options = RenderOptions {
        logo_url: None,
        title: None,
        auto_print: true,
    };

    // Inter-state supply: the document shows a single IGST row
    let html = render_html(&invoice, &options).expect("render should succeed");
    println!("{html}");
}
