use rust_decimal::Decimal;

use super::clock::{Clock, SystemClock};
use super::types::*;

/// Builder for constructing invoices fluently.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use invoicekit::core::*;
/// use rust_decimal_macros::dec;
///
/// let issued = Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap();
/// let invoice = InvoiceBuilder::new(
///     Party::new("Larry Jinkles", "34 Windsor Ln.", "lejank@billing.com"),
///     Party::new("Tod Hooper", "14 Manslow road", "tod@hooper.example"),
/// )
/// .clock(FixedClock(issued))
/// .add_item("Equipment Rental", dec!(1000), dec!(0.1))
/// .comment("Discount applied for early payment.")
/// .build();
///
/// assert_eq!(invoice.created_at(), issued);
/// assert_eq!(invoice.calculate_total(dec!(20)).unwrap(), dec!(900));
/// ```
pub struct InvoiceBuilder {
    sender: Party,
    recipient: Party,
    clock: Box<dyn Clock>,
    items: Vec<LineItem>,
    comments: Vec<String>,
}

impl InvoiceBuilder {
    pub fn new(sender: Party, recipient: Party) -> Self {
        Self {
            sender,
            recipient,
            clock: Box::new(SystemClock),
            items: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Clock used to stamp `created_at` when [`build`](Self::build) runs.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn add_item(mut self, name: impl Into<String>, price: Decimal, tax_rate: Decimal) -> Self {
        self.items.push(LineItem::new(name, price, tax_rate));
        self
    }

    pub fn add_line(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comments.push(comment.into());
        self
    }

    /// Build the invoice. Nothing is validated, so this cannot fail.
    pub fn build(self) -> Invoice {
        let mut invoice = Invoice::with_clock(self.sender, self.recipient, &self.clock);
        for item in self.items {
            invoice.push_item(item);
        }
        for comment in self.comments {
            invoice.add_comment(comment);
        }
        invoice
    }
}
