use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::clock::{Clock, SystemClock};

/// An invoice issued by a sender to a recipient.
///
/// Items and comments are append-only and `created_at` is fixed when the
/// invoice is constructed, so all fields are private behind accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    sender: Party,
    recipient: Party,
    created_at: DateTime<Utc>,
    items: Vec<LineItem>,
    comments: Vec<String>,
}

/// Issuing or billed party.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Party {
    /// Display name.
    pub name: String,
    /// Postal address, free text.
    pub address: String,
    /// Contact email.
    pub email: String,
}

impl Party {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            email: email.into(),
        }
    }
}

/// One billable entry on an invoice.
///
/// `tax_rate` is a fraction (`0.1` is 10%), unlike the discount passed to
/// [`Invoice::calculate_total`], which is a whole-number percentage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// Item description.
    pub name: String,
    /// Price before tax and discount.
    pub price: Decimal,
    /// Tax rate as a fraction of `price`.
    pub tax_rate: Decimal,
}

impl LineItem {
    pub fn new(name: impl Into<String>, price: Decimal, tax_rate: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
            tax_rate,
        }
    }
}

impl Invoice {
    /// Create an invoice stamped with the system wall clock.
    ///
    /// No field is validated; empty strings are accepted.
    pub fn new(
        sender_name: impl Into<String>,
        recipient_name: impl Into<String>,
        sender_address: impl Into<String>,
        recipient_address: impl Into<String>,
        sender_email: impl Into<String>,
        recipient_email: impl Into<String>,
    ) -> Self {
        Self::with_clock(
            Party::new(sender_name, sender_address, sender_email),
            Party::new(recipient_name, recipient_address, recipient_email),
            &SystemClock,
        )
    }

    /// Create an invoice whose `created_at` is taken from `clock`.
    pub fn with_clock(sender: Party, recipient: Party, clock: &impl Clock) -> Self {
        let created_at = clock.now();
        tracing::debug!(%created_at, sender = %sender.name, recipient = %recipient.name, "invoice created");
        Self {
            sender,
            recipient,
            created_at,
            items: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Append a line item. Sign and range of `price` and `tax_rate` are not checked.
    pub fn add_item(&mut self, name: impl Into<String>, price: Decimal, tax_rate: Decimal) {
        self.push_item(LineItem::new(name, price, tax_rate));
    }

    pub(crate) fn push_item(&mut self, item: LineItem) {
        tracing::debug!(
            name = %item.name,
            price = %item.price,
            tax_rate = %item.tax_rate,
            count = self.items.len() + 1,
            "item added"
        );
        self.items.push(item);
    }

    /// Append a free-text comment.
    pub fn add_comment(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
        tracing::debug!(count = self.comments.len(), "comment added");
    }

    /// All comments joined by newlines, in the order they were added.
    pub fn get_comments(&self) -> String {
        self.comments.join("\n")
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn sender(&self) -> &Party {
        &self.sender
    }

    pub fn recipient(&self) -> &Party {
        &self.recipient
    }

    pub fn sender_name(&self) -> &str {
        &self.sender.name
    }

    pub fn recipient_name(&self) -> &str {
        &self.recipient.name
    }

    pub fn sender_address(&self) -> &str {
        &self.sender.address
    }

    pub fn recipient_address(&self) -> &str {
        &self.recipient.address
    }

    pub fn sender_email(&self) -> &str {
        &self.sender.email
    }

    pub fn recipient_email(&self) -> &str {
        &self.recipient.email
    }
}
