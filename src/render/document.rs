use rust_decimal::Decimal;
use std::fmt::Write;

use crate::core::words::amount_in_words;
use crate::core::{BijakError, Invoice, Party, SupplyType, Totals};

/// Presentation options for the rendered document.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Organization logo URL, shown in the header when set.
    pub logo_url: Option<String>,
    /// Document heading (default: "TAX INVOICE").
    pub title: Option<String>,
    /// Trigger the browser print dialog when the page loads.
    pub auto_print: bool,
}

/// Render an invoice as a complete, self-contained HTML document.
///
/// The invoice must have computed totals. All interpolated text is
/// HTML-escaped.
pub fn render_html(invoice: &Invoice, options: &RenderOptions) -> Result<String, BijakError> {
    let totals = invoice.totals.as_ref().ok_or_else(|| {
        BijakError::Render("totals must be computed before rendering (call compute_totals)".into())
    })?;

    let title = options.title.as_deref().unwrap_or("TAX INVOICE");
    let mut out = String::with_capacity(8 * 1024);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = write!(out, "<title>{} {}</title>\n", esc(title), esc(&invoice.number));
    out.push_str("<style>\n");
    out.push_str(STYLESHEET);
    out.push_str("</style>\n</head>\n");

    if options.auto_print {
        out.push_str("<body onload=\"window.print()\">\n");
    } else {
        out.push_str("<body>\n");
    }

    out.push_str("<div class=\"invoice\">\n");
    header_block(&mut out, invoice, options, title);
    parties_block(&mut out, invoice);
    lines_table(&mut out, invoice);
    totals_block(&mut out, totals);
    words_block(&mut out, totals.grand_total);
    notes_block(&mut out, invoice);
    out.push_str("</div>\n</body>\n</html>\n");

    Ok(out)
}

const STYLESHEET: &str = "\
body { font-family: 'Helvetica Neue', Arial, sans-serif; font-size: 13px; color: #222; margin: 0; }
.invoice { max-width: 800px; margin: 0 auto; padding: 24px; }
.header { display: flex; justify-content: space-between; border-bottom: 2px solid #222; padding-bottom: 12px; }
.header h1 { font-size: 20px; letter-spacing: 2px; margin: 0 0 8px; }
.header img { max-height: 64px; }
.meta td { padding: 2px 8px 2px 0; }
.parties { display: flex; gap: 32px; margin: 16px 0; }
.party { flex: 1; }
.party h2 { font-size: 12px; text-transform: uppercase; color: #666; margin: 0 0 4px; }
table.lines { width: 100%; border-collapse: collapse; margin: 16px 0; }
table.lines th, table.lines td { border: 1px solid #999; padding: 6px 8px; }
table.lines th { background: #f0f0f0; text-align: left; }
td.num, th.num { text-align: right; }
table.totals { margin-left: auto; border-collapse: collapse; }
table.totals td { padding: 4px 12px; }
table.totals tr.grand td { font-weight: bold; border-top: 2px solid #222; }
.words { margin: 12px 0; font-style: italic; }
.notes { margin-top: 16px; color: #444; }
@media print { .invoice { padding: 0; } }
";

fn header_block(out: &mut String, invoice: &Invoice, options: &RenderOptions, title: &str) {
    out.push_str("<div class=\"header\">\n<div>\n");
    let _ = write!(out, "<h1>{}</h1>\n", esc(title));
    out.push_str("<table class=\"meta\">\n");
    meta_row(out, "Invoice No.", &invoice.number);
    meta_row(out, "Date", &invoice.issue_date.format("%d-%m-%Y").to_string());
    if let Some(due) = &invoice.due_date {
        meta_row(out, "Due Date", &due.format("%d-%m-%Y").to_string());
    }
    if let Some(po) = &invoice.order_reference {
        meta_row(out, "Order Ref.", po);
    }
    let pos = invoice
        .place_of_supply
        .as_deref()
        .unwrap_or(&invoice.buyer.address.state);
    if !pos.trim().is_empty() {
        meta_row(out, "Place of Supply", pos);
    }
    out.push_str("</table>\n</div>\n");

    if let Some(logo) = &options.logo_url {
        let _ = write!(out, "<img src=\"{}\" alt=\"logo\">\n", esc(logo));
    }
    out.push_str("</div>\n");
}

fn meta_row(out: &mut String, label: &str, value: &str) {
    let _ = write!(
        out,
        "<tr><td><strong>{}</strong></td><td>{}</td></tr>\n",
        esc(label),
        esc(value)
    );
}

fn parties_block(out: &mut String, invoice: &Invoice) {
    out.push_str("<div class=\"parties\">\n");
    party_block(out, "Sold By", &invoice.seller);
    party_block(out, "Billed To", &invoice.buyer);
    out.push_str("</div>\n");
}

fn party_block(out: &mut String, heading: &str, party: &Party) {
    out.push_str("<div class=\"party\">\n");
    let _ = write!(out, "<h2>{}</h2>\n", esc(heading));
    let _ = write!(out, "<strong>{}</strong><br>\n", esc(&party.name));
    let addr = &party.address;
    if let Some(street) = &addr.street {
        let _ = write!(out, "{}<br>\n", esc(street));
    }
    let _ = write!(
        out,
        "{} {}<br>\n{}<br>\n",
        esc(&addr.city),
        esc(&addr.postal_code),
        esc(&addr.state)
    );
    if let Some(gstin) = &party.gstin {
        let _ = write!(out, "GSTIN: {}<br>\n", esc(gstin));
    }
    if let Some(contact) = &party.contact {
        if let Some(phone) = &contact.phone {
            let _ = write!(out, "{}<br>\n", esc(phone));
        }
        if let Some(email) = &contact.email {
            let _ = write!(out, "{}<br>\n", esc(email));
        }
    }
    out.push_str("</div>\n");
}

fn lines_table(out: &mut String, invoice: &Invoice) {
    out.push_str("<table class=\"lines\">\n<thead><tr>");
    for th in ["#", "Item", "HSN/SAC"] {
        let _ = write!(out, "<th>{th}</th>");
    }
    for th in ["Qty", "Rate", "Discount", "Taxable Value", "GST %", "Amount"] {
        let _ = write!(out, "<th class=\"num\">{th}</th>");
    }
    out.push_str("</tr></thead>\n<tbody>\n");

    for line in &invoice.lines {
        out.push_str("<tr>");
        let _ = write!(out, "<td>{}</td>", esc(&line.id));
        if let Some(desc) = &line.description {
            let _ = write!(
                out,
                "<td>{}<br><small>{}</small></td>",
                esc(&line.item_name),
                esc(desc)
            );
        } else {
            let _ = write!(out, "<td>{}</td>", esc(&line.item_name));
        }
        let _ = write!(out, "<td>{}</td>", esc(line.hsn_code.as_deref().unwrap_or("")));
        let _ = write!(out, "<td class=\"num\">{} {}</td>", line.quantity, esc(&line.unit));
        num_cell(out, line.unit_price);
        num_cell(out, line.discount);
        num_cell(out, line.taxable_amount.unwrap_or(Decimal::ZERO));
        let _ = write!(out, "<td class=\"num\">{}%</td>", line.gst_rate);
        num_cell(out, line.line_total.unwrap_or(Decimal::ZERO));
        out.push_str("</tr>\n");
    }

    out.push_str("</tbody>\n</table>\n");
}

fn num_cell(out: &mut String, value: Decimal) {
    let _ = write!(out, "<td class=\"num\">{}</td>", money(value));
}

fn totals_block(out: &mut String, totals: &Totals) {
    out.push_str("<table class=\"totals\">\n");
    totals_row(out, "Subtotal", totals.taxable_total, false);
    match totals.supply_type {
        SupplyType::IntraState => {
            totals_row(out, "CGST", totals.cgst, false);
            totals_row(out, "SGST", totals.sgst, false);
        }
        SupplyType::InterState => {
            totals_row(out, "IGST", totals.igst, false);
        }
    }
    totals_row(out, "Grand Total", totals.grand_total, true);
    out.push_str("</table>\n");
}

fn totals_row(out: &mut String, label: &str, value: Decimal, grand: bool) {
    let class = if grand { " class=\"grand\"" } else { "" };
    let _ = write!(
        out,
        "<tr{}><td>{}</td><td class=\"num\">\u{20b9} {}</td></tr>\n",
        class,
        esc(label),
        money(value)
    );
}

fn words_block(out: &mut String, grand_total: Decimal) {
    let _ = write!(
        out,
        "<p class=\"words\">{}</p>\n",
        esc(&amount_in_words(grand_total))
    );
}

fn notes_block(out: &mut String, invoice: &Invoice) {
    if invoice.notes.is_empty() {
        return;
    }
    out.push_str("<div class=\"notes\">\n");
    for note in &invoice.notes {
        let _ = write!(out, "<p>{}</p>\n", esc(note));
    }
    out.push_str("</div>\n");
}

/// Format a monetary value with two decimal places.
fn money(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Minimal HTML escaping for text and attribute values.
fn esc(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
