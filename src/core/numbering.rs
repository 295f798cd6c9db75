use chrono::{Datelike, NaiveDate};

use super::error::BijakError;

/// Indian financial year (1 April – 31 March), e.g. FY 2024-25.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FiscalYear {
    /// Calendar year the fiscal year starts in.
    start_year: i32,
}

impl FiscalYear {
    /// Fiscal year starting 1 April of `start_year`.
    pub fn starting(start_year: i32) -> Self {
        Self { start_year }
    }

    /// Fiscal year containing the given date.
    pub fn containing(date: NaiveDate) -> Self {
        let start_year = if date.month() >= 4 {
            date.year()
        } else {
            date.year() - 1
        };
        Self { start_year }
    }

    /// Calendar year this fiscal year starts in.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Short label used in invoice numbers, e.g. "24-25".
    pub fn label(&self) -> String {
        format!("{:02}-{:02}", self.start_year % 100, (self.start_year + 1) % 100)
    }
}

/// Consecutive invoice number sequence, unique within a financial year.
///
/// Generates numbers in the format `{prefix}/{fy}/{sequential}`, e.g.
/// "INV/24-25/0001", "INV/24-25/0002". Rule 46(b) requires a consecutive
/// serial number not exceeding 16 characters, unique for a financial year.
#[derive(Debug, Clone)]
pub struct InvoiceNumberSequence {
    prefix: String,
    fiscal_year: FiscalYear,
    next_number: u64,
    zero_pad: usize,
}

impl InvoiceNumberSequence {
    /// Create a new sequence starting at 1.
    pub fn new(prefix: impl Into<String>, fiscal_year: FiscalYear) -> Self {
        Self {
            prefix: prefix.into(),
            fiscal_year,
            next_number: 1,
            zero_pad: 4,
        }
    }

    /// Create a sequence continuing from a given number.
    pub fn starting_at(
        prefix: impl Into<String>,
        fiscal_year: FiscalYear,
        next_number: u64,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            fiscal_year,
            next_number,
            zero_pad: 4,
        }
    }

    /// Set zero-padding width (default: 4, so "0001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    fn format(&self, num: u64) -> String {
        format!(
            "{}/{}/{:0>width$}",
            self.prefix,
            self.fiscal_year.label(),
            num,
            width = self.zero_pad
        )
    }

    /// Generate the next invoice number.
    pub fn next_number(&mut self) -> String {
        let num = self.next_number;
        self.next_number += 1;
        self.format(num)
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        self.format(self.next_number)
    }

    /// Fiscal year of the sequence.
    pub fn fiscal_year(&self) -> FiscalYear {
        self.fiscal_year
    }

    /// The next number that will be issued (without prefix/formatting).
    pub fn next_raw(&self) -> u64 {
        self.next_number
    }

    /// Advance to a new fiscal year, resetting the counter to 1.
    pub fn advance_fiscal_year(&mut self, fy: FiscalYear) -> Result<(), BijakError> {
        if fy <= self.fiscal_year {
            return Err(BijakError::Numbering(format!(
                "fiscal year {} must be after current fiscal year {}",
                fy.label(),
                self.fiscal_year.label()
            )));
        }
        self.fiscal_year = fy;
        self.next_number = 1;
        Ok(())
    }

    /// Auto-advance if the given date falls in a later fiscal year.
    /// Returns true if the sequence rolled over.
    pub fn auto_advance(&mut self, date: NaiveDate) -> bool {
        let fy = FiscalYear::containing(date);
        if fy > self.fiscal_year {
            self.fiscal_year = fy;
            self.next_number = 1;
            true
        } else {
            false
        }
    }
}
