use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::ValidationError;
use super::types::*;

/// Tolerance for monetary reconciliation: amounts are stored to the cent,
/// so anything below one cent counts as equal.
const TOLERANCE: Decimal = dec!(0.01);

/// Half-up rounding to `dp` decimal places (kaufmännisches Runden).
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Compute `subtotal`, `tax_amount`, and `total` from the line items and
/// the document's tax rate.
///
/// The renderer itself never calls this; it trusts the amounts on the
/// document. It exists for builders and for reconciliation in tests.
pub fn calculate_totals(document: &mut Document) {
    let line_sum: Decimal = document.items.iter().map(LineItem::total).sum();
    document.subtotal = round_half_up(line_sum, 2);
    document.tax_amount = round_half_up(document.subtotal * document.tax_rate / dec!(100), 2);
    document.total = document.subtotal + document.tax_amount;
}

/// Reconcile the precomputed amounts against the line items.
/// Returns all failures found (not just the first).
pub fn validate_amounts(document: &Document) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let line_sum: Decimal = document.items.iter().map(LineItem::total).sum();
    if (document.subtotal - line_sum).abs() >= TOLERANCE {
        errors.push(ValidationError::with_rule(
            "subtotal",
            format!(
                "subtotal {} does not match sum of line totals {}",
                document.subtotal, line_sum
            ),
            "monetary-identity",
        ));
    }

    let expected_total = document.subtotal + document.tax_amount;
    if (document.total - expected_total).abs() >= TOLERANCE {
        errors.push(ValidationError::with_rule(
            "total",
            format!(
                "total {} does not match subtotal + tax {}",
                document.total, expected_total
            ),
            "monetary-identity",
        ));
    }

    for (i, item) in document.items.iter().enumerate() {
        if item.quantity <= Decimal::ZERO {
            errors.push(ValidationError::new(
                format!("items[{i}].quantity"),
                "quantity must be positive",
            ));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DocumentBuilder;
    use chrono::NaiveDate;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn document_with(items: Vec<LineItem>) -> Document {
        let mut builder = DocumentBuilder::new(DocumentKind::Invoice, "RE-2024-001", test_date());
        for item in items {
            builder = builder.add_item(item.description, item.quantity, item.unit_price);
        }
        builder.build_unchecked()
    }

    #[test]
    fn totals_for_single_line() {
        let doc = document_with(vec![LineItem::new("Beratung", dec!(1), dec!(100))]);
        assert_eq!(doc.subtotal, dec!(100.00));
        assert_eq!(doc.tax_amount, dec!(19.00));
        assert_eq!(doc.total, dec!(119.00));
    }

    #[test]
    fn tax_rounds_half_up() {
        // 999999.99 * 19% = 189999.9981 → 190000.00
        let doc = document_with(vec![LineItem::new("Lizenz", dec!(1), dec!(999999.99))]);
        assert_eq!(doc.tax_amount, dec!(190000.00));
        assert_eq!(doc.total, dec!(1189999.99));
    }

    #[test]
    fn totals_for_empty_items() {
        let doc = document_with(vec![]);
        assert_eq!(doc.subtotal, dec!(0.00));
        assert_eq!(doc.tax_amount, dec!(0.00));
        assert_eq!(doc.total, dec!(0.00));
    }

    #[test]
    fn calculated_totals_reconcile() {
        let doc = document_with(vec![
            LineItem::new("Beratung", dec!(2), dec!(19.99)),
            LineItem::new("Fahrtkosten", dec!(1), dec!(45.50)),
        ]);
        let errors = validate_amounts(&doc);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn mismatched_subtotal_is_reported() {
        let mut doc = document_with(vec![LineItem::new("Beratung", dec!(1), dec!(100))]);
        doc.subtotal = dec!(90);
        let errors = validate_amounts(&doc);
        assert!(errors.iter().any(|e| e.field == "subtotal"));
    }

    #[test]
    fn mismatched_total_is_reported() {
        let mut doc = document_with(vec![LineItem::new("Beratung", dec!(1), dec!(100))]);
        doc.total = dec!(100);
        let errors = validate_amounts(&doc);
        assert!(errors.iter().any(|e| e.field == "total"));
    }

    #[test]
    fn zero_quantity_is_reported() {
        let mut doc = document_with(vec![LineItem::new("Beratung", dec!(1), dec!(100))]);
        doc.items[0].quantity = dec!(0);
        let errors = validate_amounts(&doc);
        assert!(errors.iter().any(|e| e.field == "items[0].quantity"));
    }

    #[test]
    fn sub_cent_drift_is_tolerated() {
        let mut doc = document_with(vec![LineItem::new("Beratung", dec!(1), dec!(100))]);
        doc.total += dec!(0.009);
        assert!(validate_amounts(&doc).is_empty());
    }

    #[test]
    fn round_half_up_midpoint() {
        assert_eq!(round_half_up(dec!(2.005), 2), dec!(2.01));
        assert_eq!(round_half_up(dec!(2.004), 2), dec!(2.00));
        assert_eq!(round_half_up(dec!(-2.005), 2), dec!(-2.01));
    }
}
