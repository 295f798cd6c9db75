use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::BijakError;
use super::tax;
use super::types::*;
use super::validation;

/// Builder for constructing valid tax invoices.
///
/// ```
/// use bijak::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let invoice = InvoiceBuilder::new("INV/24-25/0001", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
///     .seller(PartyBuilder::new("Chennai Traders", AddressBuilder::new("Chennai", "600001", "Tamil Nadu").build())
///         .gstin("33AAACC4563F1Z1")
///         .build())
///     .buyer(PartyBuilder::new("Madurai Mills", AddressBuilder::new("Madurai", "625001", "Tamil Nadu").build())
///         .build())
///     .add_line(LineItemBuilder::new("1", "Cotton Yarn", dec!(2), "KGS", dec!(100))
///         .gst_rate(dec!(18))
///         .build())
///     .build();
/// ```
pub struct InvoiceBuilder {
    number: String,
    issue_date: NaiveDate,
    due_date: Option<NaiveDate>,
    currency_code: String,
    notes: Vec<String>,
    order_reference: Option<String>,
    seller: Option<Party>,
    buyer: Option<Party>,
    place_of_supply: Option<String>,
    lines: Vec<LineItem>,
}

impl InvoiceBuilder {
    pub fn new(number: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self {
            number: number.into(),
            issue_date,
            due_date: None,
            currency_code: "INR".to_string(),
            notes: Vec::new(),
            order_reference: None,
            seller: None,
            buyer: None,
            place_of_supply: None,
            lines: Vec::new(),
        }
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency_code = code.into();
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn order_reference(mut self, reference: impl Into<String>) -> Self {
        self.order_reference = Some(reference.into());
        self
    }

    pub fn seller(mut self, party: Party) -> Self {
        self.seller = Some(party);
        self
    }

    pub fn buyer(mut self, party: Party) -> Self {
        self.buyer = Some(party);
        self
    }

    /// Override the place of supply (defaults to the buyer's address state).
    pub fn place_of_supply(mut self, state: impl Into<String>) -> Self {
        self.place_of_supply = Some(state.into());
        self
    }

    pub fn add_line(mut self, line: LineItem) -> Self {
        self.lines.push(line);
        self
    }

    fn assemble(self) -> Result<Invoice, BijakError> {
        let seller = self
            .seller
            .ok_or_else(|| BijakError::Builder("seller is required".into()))?;
        let buyer = self
            .buyer
            .ok_or_else(|| BijakError::Builder("buyer is required".into()))?;

        // Input limits to prevent abuse
        if self.lines.len() > 10_000 {
            return Err(BijakError::Builder(
                "invoice cannot have more than 10,000 line items".into(),
            ));
        }
        if self.notes.len() > 100 {
            return Err(BijakError::Builder(
                "invoice cannot have more than 100 notes".into(),
            ));
        }

        let mut invoice = Invoice {
            number: self.number,
            issue_date: self.issue_date,
            due_date: self.due_date,
            currency_code: self.currency_code,
            notes: self.notes,
            order_reference: self.order_reference,
            seller,
            buyer,
            place_of_supply: self.place_of_supply,
            lines: self.lines,
            totals: None,
        };

        tax::compute_totals(&mut invoice);
        Ok(invoice)
    }

    /// Build the invoice, computing totals and running rule 46 validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<Invoice, BijakError> {
        let invoice = self.assemble()?;

        let errors = validation::validate_invoice(&invoice);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(BijakError::Validation(msg));
        }

        Ok(invoice)
    }

    /// Build without validation — useful for testing or importing external
    /// data. Totals are still computed.
    pub fn build_unchecked(self) -> Result<Invoice, BijakError> {
        self.assemble()
    }
}

/// Builder for Party (seller/buyer).
pub struct PartyBuilder {
    name: String,
    gstin: Option<String>,
    address: Address,
    contact: Option<Contact>,
}

impl PartyBuilder {
    pub fn new(name: impl Into<String>, address: Address) -> Self {
        Self {
            name: name.into(),
            gstin: None,
            address,
            contact: None,
        }
    }

    pub fn gstin(mut self, gstin: impl Into<String>) -> Self {
        self.gstin = Some(gstin.into());
        self
    }

    pub fn contact(
        mut self,
        name: Option<String>,
        phone: Option<String>,
        email: Option<String>,
    ) -> Self {
        self.contact = Some(Contact { name, phone, email });
        self
    }

    pub fn build(self) -> Party {
        Party {
            name: self.name,
            gstin: self.gstin,
            address: self.address,
            contact: self.contact,
        }
    }
}

/// Builder for Address.
pub struct AddressBuilder {
    street: Option<String>,
    city: String,
    postal_code: String,
    state: String,
    country_code: String,
}

impl AddressBuilder {
    pub fn new(
        city: impl Into<String>,
        postal_code: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            street: None,
            city: city.into(),
            postal_code: postal_code.into(),
            state: state.into(),
            country_code: "IN".to_string(),
        }
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    pub fn country_code(mut self, code: impl Into<String>) -> Self {
        self.country_code = code.into();
        self
    }

    pub fn build(self) -> Address {
        Address {
            street: self.street,
            city: self.city,
            postal_code: self.postal_code,
            state: self.state,
            country_code: self.country_code,
        }
    }
}

/// Builder for LineItem.
pub struct LineItemBuilder {
    id: String,
    item_name: String,
    description: Option<String>,
    hsn_code: Option<String>,
    quantity: Decimal,
    unit: String,
    unit_price: Decimal,
    discount: Decimal,
    gst_rate: Decimal,
}

impl LineItemBuilder {
    pub fn new(
        id: impl Into<String>,
        item_name: impl Into<String>,
        quantity: Decimal,
        unit: impl Into<String>,
        unit_price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            item_name: item_name.into(),
            description: None,
            hsn_code: None,
            quantity,
            unit: unit.into(),
            unit_price,
            discount: Decimal::ZERO,
            gst_rate: Decimal::new(18, 0),
        }
    }

    pub fn gst_rate(mut self, rate: Decimal) -> Self {
        self.gst_rate = rate;
        self
    }

    pub fn discount(mut self, amount: Decimal) -> Self {
        self.discount = amount;
        self
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn hsn_code(mut self, code: impl Into<String>) -> Self {
        self.hsn_code = Some(code.into());
        self
    }

    pub fn build(self) -> LineItem {
        LineItem {
            id: self.id,
            item_name: self.item_name,
            description: self.description,
            hsn_code: self.hsn_code,
            quantity: self.quantity,
            unit: self.unit,
            unit_price: self.unit_price,
            discount: self.discount,
            gst_rate: self.gst_rate,
            taxable_amount: None,
            tax_amount: None,
            line_total: None,
        }
    }
}
