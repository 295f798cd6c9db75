use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A GST tax invoice — the top-level document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Rule 46(b): consecutive serial number, unique within a financial year.
    pub number: String,
    /// Rule 46(c): date of issue.
    pub issue_date: NaiveDate,
    /// Payment due date.
    pub due_date: Option<NaiveDate>,
    /// ISO 4217 currency code (e.g. "INR").
    pub currency_code: String,
    /// Free-text notes printed on the invoice.
    pub notes: Vec<String>,
    /// Purchase order reference.
    pub order_reference: Option<String>,
    /// Rule 46(a): supplier of the goods or services.
    pub seller: Party,
    /// Rule 46(e): recipient.
    pub buyer: Party,
    /// Rule 46(m): place of supply. When unset, the buyer's address state
    /// is used for the inter/intra-state decision.
    pub place_of_supply: Option<String>,
    /// Invoice lines, in presentation order.
    pub lines: Vec<LineItem>,
    /// Calculated totals (set by `compute_totals()`). Always derivable from
    /// the lines — recomputed, never trusted from outside.
    pub totals: Option<Totals>,
}

impl Invoice {
    /// Supply classification for this invoice: place of supply (or the
    /// buyer's state) compared against the seller's state.
    pub fn supply_type(&self) -> SupplyType {
        let buyer_state = self
            .place_of_supply
            .as_deref()
            .unwrap_or(&self.buyer.address.state);
        SupplyType::classify(&self.seller.address.state, buyer_state)
    }
}

/// A party on the invoice (supplier or recipient).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    /// Legal name.
    pub name: String,
    /// 15-character GST identification number, if registered.
    pub gstin: Option<String>,
    /// Postal address.
    pub address: Address,
    /// Contact information.
    pub contact: Option<Contact>,
}

/// Postal address. The `state` string drives the inter/intra-state decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    /// Street / building line.
    pub street: Option<String>,
    /// City or town.
    pub city: String,
    /// PIN code.
    pub postal_code: String,
    /// State or union territory name (e.g. "Tamil Nadu").
    pub state: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country_code: String,
}

/// Contact information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// An invoice line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Line identifier (serial within the invoice).
    pub id: String,
    /// Rule 46(f): description of goods or services.
    pub item_name: String,
    /// Additional description.
    pub description: Option<String>,
    /// Rule 46(g): HSN/SAC classification code.
    pub hsn_code: Option<String>,
    /// Rule 46(h): quantity. Zero is allowed and contributes nothing.
    pub quantity: Decimal,
    /// Unit of measure (e.g. "NOS", "KGS", "MTR").
    pub unit: String,
    /// Unit price before tax.
    pub unit_price: Decimal,
    /// Flat discount on the line, deducted before tax.
    pub discount: Decimal,
    /// Rule 46(j): GST rate percentage for this line.
    pub gst_rate: Decimal,
    /// Calculated taxable value = quantity × unit_price − discount.
    /// Set by `compute_totals()`.
    pub taxable_amount: Option<Decimal>,
    /// Calculated tax on the line. Set by `compute_totals()`.
    pub tax_amount: Option<Decimal>,
    /// Calculated line total = taxable value + tax. Set by `compute_totals()`.
    pub line_total: Option<Decimal>,
}

/// GST supply classification — decides how the tax splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupplyType {
    /// Buyer and seller in the same state: tax splits evenly into CGST + SGST.
    IntraState,
    /// Different states (or unknown): the full rate applies as IGST.
    InterState,
}

impl SupplyType {
    /// Classify by comparing the two state strings case-insensitively.
    ///
    /// No canonicalization is applied — "TN" and "Tamil Nadu" do not match.
    /// A blank state on either side classifies as inter-state, so IGST
    /// applies when the jurisdiction is unknown.
    pub fn classify(seller_state: &str, buyer_state: &str) -> Self {
        let seller = seller_state.trim();
        let buyer = buyer_state.trim();
        if !seller.is_empty() && !buyer.is_empty() && seller.eq_ignore_ascii_case(buyer) {
            Self::IntraState
        } else {
            Self::InterState
        }
    }
}

/// Calculated invoice totals with the GST breakdown.
///
/// Exactly one of (CGST + SGST) or IGST is non-zero for an invoice with any
/// tax at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Totals {
    /// How the tax was split.
    pub supply_type: SupplyType,
    /// Sum of line taxable values (subtotal before tax).
    pub taxable_total: Decimal,
    /// Central GST (intra-state only, half the tax).
    pub cgst: Decimal,
    /// State GST (intra-state only, half the tax).
    pub sgst: Decimal,
    /// Integrated GST (inter-state only, the full tax).
    pub igst: Decimal,
    /// Total tax = cgst + sgst + igst.
    pub tax_total: Decimal,
    /// Grand total = taxable_total + tax_total.
    pub grand_total: Decimal,
    /// Per-rate breakdown, sorted by rate.
    pub rate_breakdown: Vec<RateBreakdown>,
}

/// Tax breakdown for one GST rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateBreakdown {
    /// GST rate percentage.
    pub rate: Decimal,
    /// Taxable value attracting this rate.
    pub taxable_amount: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
}
