//! GST tax computation.
//!
//! The calculator is a pure function over line items and a supply
//! classification. It is total: any well-formed line list produces a result,
//! including the empty list (all-zero totals).

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::*;

/// Parse a user-entered amount, coercing anything unparseable to zero.
///
/// Form fields arrive as free text; a blank or malformed entry counts as
/// zero rather than failing the whole computation.
pub fn parse_amount(input: &str) -> Decimal {
    input.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

/// Round a Decimal to `dp` decimal places using half-up (commercial rounding).
pub(crate) fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Taxable value of a line: quantity × unit price − discount.
pub fn line_taxable(line: &LineItem) -> Decimal {
    line.quantity * line.unit_price - line.discount
}

/// Tax on a line, rounded half-up to paise.
pub fn line_tax(line: &LineItem) -> Decimal {
    round_half_up(line_taxable(line) * line.gst_rate / dec!(100), 2)
}

/// Compute the tax breakdown for a list of lines under the given supply
/// classification. Does not mutate the lines.
///
/// Intra-state: each line's tax splits evenly into CGST and SGST.
/// Inter-state: the whole tax is IGST. Exactly one of the two sides of the
/// split is non-zero in the result whenever any tax is due.
pub fn tax_breakdown(lines: &[LineItem], supply_type: SupplyType) -> Totals {
    let mut taxable_total = Decimal::ZERO;
    let mut tax_total = Decimal::ZERO;
    let mut grand_total = Decimal::ZERO;

    // Group taxable value and tax by rate for the breakdown table.
    // BTreeMap keeps the rates sorted for deterministic output.
    let mut by_rate: BTreeMap<Decimal, (Decimal, Decimal)> = BTreeMap::new();

    for line in lines {
        let taxable = line_taxable(line);
        let tax = line_tax(line);

        taxable_total += taxable;
        tax_total += tax;
        grand_total += taxable + tax;

        let entry = by_rate.entry(line.gst_rate).or_insert((Decimal::ZERO, Decimal::ZERO));
        entry.0 += taxable;
        entry.1 += tax;
    }

    let (cgst, sgst, igst) = split_tax(tax_total, supply_type);

    let rate_breakdown = by_rate
        .into_iter()
        .map(|(rate, (taxable_amount, tax))| {
            let (cgst, sgst, igst) = split_tax(tax, supply_type);
            RateBreakdown {
                rate,
                taxable_amount,
                cgst,
                sgst,
                igst,
            }
        })
        .collect();

    Totals {
        supply_type,
        taxable_total,
        cgst,
        sgst,
        igst,
        tax_total,
        grand_total,
        rate_breakdown,
    }
}

/// Split a tax amount per the supply classification:
/// (cgst, sgst, igst).
fn split_tax(tax: Decimal, supply_type: SupplyType) -> (Decimal, Decimal, Decimal) {
    match supply_type {
        SupplyType::IntraState => {
            let half = tax / dec!(2);
            (half, half, Decimal::ZERO)
        }
        SupplyType::InterState => (Decimal::ZERO, Decimal::ZERO, tax),
    }
}

/// Compute per-line amounts and invoice totals (mutates in place).
///
/// Sets `taxable_amount`, `tax_amount`, and `line_total` on every line and
/// `totals` on the invoice, using the invoice's own supply classification.
pub fn compute_totals(invoice: &mut Invoice) {
    let supply_type = invoice.supply_type();

    for line in &mut invoice.lines {
        let taxable = line_taxable(line);
        let tax = line_tax(line);
        line.taxable_amount = Some(taxable);
        line.tax_amount = Some(tax);
        line.line_total = Some(taxable + tax);
    }

    invoice.totals = Some(tax_breakdown(&invoice.lines, supply_type));
}
