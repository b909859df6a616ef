use thiserror::Error;

/// Errors that can occur while working with an invoice.
///
/// Inputs are never validated, so the only failure is arithmetic: a decimal
/// operation that leaves the representable range.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    /// Decimal overflow or division failure while computing totals.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),
}

impl InvoiceError {
    pub(crate) fn overflow(step: &str) -> Self {
        Self::Arithmetic(format!("{step} overflowed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_message_names_step() {
        let err = InvoiceError::overflow("subtotal");
        assert_eq!(err.to_string(), "arithmetic error: subtotal overflowed");
    }
}
