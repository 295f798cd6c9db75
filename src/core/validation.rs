use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::ValidationError;
use super::gstin::validate_gstin;
use super::states;
use super::tax;
use super::types::*;

/// GST rate slabs notified under the CGST Act (percentages).
pub static GST_RATE_SLABS: &[Decimal] = &[
    dec!(0),
    dec!(0.1),
    dec!(0.25),
    dec!(1),
    dec!(1.5),
    dec!(3),
    dec!(5),
    dec!(6),
    dec!(7.5),
    dec!(12),
    dec!(18),
    dec!(28),
];

/// Check whether `rate` is a notified GST rate slab.
pub fn is_notified_rate(rate: Decimal) -> bool {
    GST_RATE_SLABS.contains(&rate)
}

/// Validate an invoice against the rule 46 particulars (CGST Rules, 2017).
/// Returns all validation errors found (not just the first).
pub fn validate_invoice(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Rule 46(b): consecutive serial number, max 16 characters, alphanumeric
    // with "-" and "/" only, unique for a financial year.
    let number = invoice.number.trim();
    if number.is_empty() {
        errors.push(ValidationError::with_rule(
            "number",
            "invoice number must not be empty",
            "46(b)",
        ));
    } else {
        if number.len() > 16 {
            errors.push(ValidationError::with_rule(
                "number",
                "invoice number must not exceed 16 characters",
                "46(b)",
            ));
        }
        if !number
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '/')
        {
            errors.push(ValidationError::with_rule(
                "number",
                "invoice number may contain only alphanumerics, '-' and '/'",
                "46(b)",
            ));
        }
    }

    if invoice.currency_code.len() != 3
        || !invoice.currency_code.chars().all(|c| c.is_ascii_uppercase())
    {
        errors.push(ValidationError::new(
            "currency_code",
            "currency code must be 3 uppercase letters (ISO 4217)",
        ));
    }

    // Rule 46(a): name, address and GSTIN of the supplier.
    validate_party(&invoice.seller, "seller", &mut errors);
    if invoice.seller.gstin.is_none() {
        errors.push(ValidationError::with_rule(
            "seller.gstin",
            "supplier GSTIN is required",
            "46(a)",
        ));
    }

    // Rule 46(e): name of the recipient.
    if invoice.buyer.name.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            "buyer.name",
            "recipient name must not be empty",
            "46(e)",
        ));
    }

    // GSTIN format and state-code consistency for both parties.
    validate_party_gstin(&invoice.seller, "seller", &mut errors);
    validate_party_gstin(&invoice.buyer, "buyer", &mut errors);

    if invoice.lines.is_empty() {
        errors.push(ValidationError::new(
            "lines",
            "invoice must have at least one line item",
        ));
    }

    for (i, line) in invoice.lines.iter().enumerate() {
        validate_line(line, i, &mut errors);
    }

    errors.extend(validate_arithmetic(invoice));

    errors
}

/// Validate stored totals against recomputation and the CGST/SGST vs IGST
/// exclusivity invariant.
pub fn validate_arithmetic(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let Some(totals) = &invoice.totals else {
        errors.push(ValidationError::new(
            "totals",
            "totals must be calculated before validation (call compute_totals first)",
        ));
        return errors;
    };

    let expected = tax::tax_breakdown(&invoice.lines, invoice.supply_type());

    if totals.taxable_total != expected.taxable_total {
        errors.push(ValidationError::new(
            "totals.taxable_total",
            format!(
                "taxable total {} does not match sum of line taxable values {}",
                totals.taxable_total, expected.taxable_total
            ),
        ));
    }

    if totals.tax_total != expected.tax_total {
        errors.push(ValidationError::new(
            "totals.tax_total",
            format!(
                "tax total {} does not match recomputed tax {}",
                totals.tax_total, expected.tax_total
            ),
        ));
    }

    let expected_grand = totals.taxable_total + totals.tax_total;
    if totals.grand_total != expected_grand {
        errors.push(ValidationError::new(
            "totals.grand_total",
            format!(
                "grand total {} does not match taxable {} + tax {}",
                totals.grand_total, totals.taxable_total, totals.tax_total
            ),
        ));
    }

    if totals.cgst + totals.sgst + totals.igst != totals.tax_total {
        errors.push(ValidationError::new(
            "totals.tax_total",
            format!(
                "tax total {} does not match cgst {} + sgst {} + igst {}",
                totals.tax_total, totals.cgst, totals.sgst, totals.igst
            ),
        ));
    }

    // Exactly one side of the split may be non-zero.
    let has_split = !totals.cgst.is_zero() || !totals.sgst.is_zero();
    if has_split && !totals.igst.is_zero() {
        errors.push(ValidationError::new(
            "totals",
            "invoice cannot carry both CGST/SGST and IGST",
        ));
    }

    if totals.cgst != totals.sgst {
        errors.push(ValidationError::new(
            "totals.sgst",
            format!("CGST {} and SGST {} must be equal", totals.cgst, totals.sgst),
        ));
    }

    match totals.supply_type {
        SupplyType::IntraState => {
            if !totals.igst.is_zero() {
                errors.push(ValidationError::new(
                    "totals.igst",
                    "intra-state supply must not carry IGST",
                ));
            }
        }
        SupplyType::InterState => {
            if has_split {
                errors.push(ValidationError::new(
                    "totals.cgst",
                    "inter-state supply must not carry CGST/SGST",
                ));
            }
        }
    }

    errors
}

fn validate_party(party: &Party, prefix: &str, errors: &mut Vec<ValidationError>) {
    if party.name.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.name"),
            "name must not be empty",
            "46(a)",
        ));
    }

    let address = &party.address;
    if address.city.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.address.city"),
            "city must not be empty",
            "46(a)",
        ));
    }
    if address.state.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.address.state"),
            "state must not be empty",
            "46(a)",
        ));
    }
    if address.country_code.len() != 2 {
        errors.push(ValidationError::new(
            format!("{prefix}.address.country_code"),
            "country code must be 2 characters (ISO 3166-1 alpha-2)",
        ));
    }
}

fn validate_party_gstin(party: &Party, prefix: &str, errors: &mut Vec<ValidationError>) {
    let Some(gstin) = &party.gstin else {
        return;
    };

    match validate_gstin(gstin) {
        Err(e) => {
            errors.push(ValidationError::new(format!("{prefix}.gstin"), e.reason));
        }
        Ok((state_code, _pan)) => {
            // Only cross-check when the address state is a recognized name;
            // free-form state strings stay unchecked.
            if let Some(expected) = states::state_code_for(&party.address.state) {
                if expected != state_code {
                    errors.push(ValidationError::new(
                        format!("{prefix}.gstin"),
                        format!(
                            "GSTIN state code {} does not match address state '{}' (code {})",
                            state_code, party.address.state, expected
                        ),
                    ));
                }
            }
        }
    }
}

fn validate_line(line: &LineItem, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("lines[{index}]");

    if line.id.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.id"),
            "line identifier must not be empty",
        ));
    }

    if line.item_name.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.item_name"),
            "item description must not be empty",
            "46(f)",
        ));
    }

    // Zero quantity is allowed and contributes nothing.
    if line.quantity.is_sign_negative() {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.quantity"),
            "quantity must not be negative",
            "46(h)",
        ));
    }

    if line.unit_price.is_sign_negative() {
        errors.push(ValidationError::new(
            format!("{prefix}.unit_price"),
            "unit price must not be negative",
        ));
    }

    if line.discount.is_sign_negative() {
        errors.push(ValidationError::new(
            format!("{prefix}.discount"),
            "discount must not be negative",
        ));
    } else if line.discount > line.quantity * line.unit_price {
        errors.push(ValidationError::new(
            format!("{prefix}.discount"),
            format!(
                "discount {} exceeds line value {}",
                line.discount,
                line.quantity * line.unit_price
            ),
        ));
    }

    if line.gst_rate.is_sign_negative() {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.gst_rate"),
            "GST rate must not be negative",
            "46(j)",
        ));
    } else if !is_notified_rate(line.gst_rate) {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.gst_rate"),
            format!("{}% is not a notified GST rate slab", line.gst_rate),
            "46(j)",
        ));
    }

    if let Some(hsn) = &line.hsn_code {
        let len = hsn.len();
        if !(4..=8).contains(&len) || !hsn.chars().all(|c| c.is_ascii_digit()) {
            errors.push(ValidationError::with_rule(
                format!("{prefix}.hsn_code"),
                "HSN/SAC code must be 4 to 8 digits",
                "46(g)",
            ));
        }
    }
}
