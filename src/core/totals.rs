use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::InvoiceError;
use super::types::{Invoice, LineItem};

/// Breakdown of an invoice total for a given discount.
///
/// No figure is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Sum of all item prices, before discount and tax.
    pub subtotal: Decimal,
    /// Discount as a whole-number percentage (20 means 20%).
    pub discount: Decimal,
    /// `subtotal × (1 − discount / 100)`.
    pub discounted_subtotal: Decimal,
    /// Sum of `price × tax_rate`, on undiscounted prices.
    pub total_tax: Decimal,
    /// `discounted_subtotal + total_tax`.
    pub total: Decimal,
}

impl Invoice {
    /// Payable total after applying `discount` percent to the pre-tax subtotal.
    ///
    /// Tax is charged on the full item prices: the discount does not reduce
    /// the tax base. `discount` is not bounds-checked, so values above 100 or
    /// below 0 produce a negative or inflated discounted subtotal.
    ///
    /// ```
    /// use invoicekit::core::*;
    /// use rust_decimal_macros::dec;
    ///
    /// let mut inv = Invoice::new("A", "B", "", "", "", "");
    /// inv.add_item("Consulting", dec!(100), dec!(0.19));
    /// // 100 × 0.9 + 100 × 0.19
    /// assert_eq!(inv.calculate_total(dec!(10)).unwrap(), dec!(109));
    /// ```
    pub fn calculate_total(&self, discount: Decimal) -> Result<Decimal, InvoiceError> {
        Ok(self.calculate_totals(discount)?.total)
    }

    /// Full breakdown behind [`Invoice::calculate_total`].
    pub fn calculate_totals(&self, discount: Decimal) -> Result<Totals, InvoiceError> {
        let totals = compute(self.items(), discount).inspect_err(|err| {
            tracing::warn!(%discount, items = self.items().len(), %err, "totals calculation failed");
        })?;
        tracing::trace!(
            subtotal = %totals.subtotal,
            discounted_subtotal = %totals.discounted_subtotal,
            total_tax = %totals.total_tax,
            total = %totals.total,
            "totals calculated"
        );
        Ok(totals)
    }
}

fn compute(items: &[LineItem], discount: Decimal) -> Result<Totals, InvoiceError> {
    let subtotal = checked_sum(items.iter().map(|i| Ok(i.price)), "subtotal")?;

    let factor = discount
        .checked_div(dec!(100))
        .and_then(|d| Decimal::ONE.checked_sub(d))
        .ok_or_else(|| InvoiceError::overflow("discount factor"))?;
    let discounted_subtotal = subtotal
        .checked_mul(factor)
        .ok_or_else(|| InvoiceError::overflow("discounted subtotal"))?;

    let total_tax = checked_sum(
        items.iter().map(|i| {
            i.price
                .checked_mul(i.tax_rate)
                .ok_or_else(|| InvoiceError::overflow("item tax"))
        }),
        "total tax",
    )?;

    let total = discounted_subtotal
        .checked_add(total_tax)
        .ok_or_else(|| InvoiceError::overflow("total"))?;

    Ok(Totals {
        subtotal,
        discount,
        discounted_subtotal,
        total_tax,
        total,
    })
}

fn checked_sum(
    mut values: impl Iterator<Item = Result<Decimal, InvoiceError>>,
    step: &str,
) -> Result<Decimal, InvoiceError> {
    values.try_fold(Decimal::ZERO, |acc, v| {
        acc.checked_add(v?)
            .ok_or_else(|| InvoiceError::overflow(step))
    })
}
