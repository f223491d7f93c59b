use serde::{Deserialize, Serialize};

use parabellum_core::{ValueObject, round2};

/// A priced line on a quote or invoice.
///
/// Amounts are plain `f64` as received from the caller. Nothing here is
/// validated: negative or non-finite inputs flow straight into the totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub quantity: f64,
    pub unit_price_ht: f64,
    /// Percentage, 0–100.
    #[serde(default)]
    pub discount_rate: f64,
    /// Percentage, 0–100.
    pub vat_rate: f64,
}

impl LineItem {
    pub fn new(quantity: f64, unit_price_ht: f64, vat_rate: f64) -> Self {
        Self {
            quantity,
            unit_price_ht,
            discount_rate: 0.0,
            vat_rate,
        }
    }

    pub fn with_discount(mut self, discount_rate: f64) -> Self {
        self.discount_rate = discount_rate;
        self
    }

    /// Unrounded amount excluding tax, after discount.
    pub fn line_total_ht(&self) -> f64 {
        line_total(self.quantity, self.unit_price_ht, self.discount_rate)
    }

    /// Unrounded VAT for this line.
    pub fn line_vat(&self) -> f64 {
        vat(self.line_total_ht(), self.vat_rate)
    }

    /// Unrounded amount including tax.
    pub fn line_total_ttc(&self) -> f64 {
        let ht = self.line_total_ht();
        total_ttc(ht, vat(ht, self.vat_rate))
    }
}

/// `quantity * unit_price * (1 - discount_rate / 100)`
pub fn line_total(quantity: f64, unit_price: f64, discount_rate: f64) -> f64 {
    quantity * unit_price * (1.0 - discount_rate / 100.0)
}

/// VAT owed on an amount excluding tax.
pub fn vat(amount_ht: f64, vat_rate: f64) -> f64 {
    amount_ht * (vat_rate / 100.0)
}

pub fn total_ttc(amount_ht: f64, vat_amount: f64) -> f64 {
    amount_ht + vat_amount
}

/// Aggregate figures of a document, each rounded to 2 decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTotals {
    pub subtotal_ht: f64,
    pub total_vat: f64,
    pub total_ttc: f64,
}

impl ValueObject for DocumentTotals {}

/// Sum lines in input order and round only the aggregates.
///
/// Lines are never rounded individually; `total_ttc` is derived from the
/// unrounded sums before its own rounding.
pub fn document_totals(items: &[LineItem]) -> DocumentTotals {
    let (subtotal, vat_sum) = items.iter().fold((0.0, 0.0), |(subtotal, vat_sum), item| {
        let ht = item.line_total_ht();
        (subtotal + ht, vat_sum + vat(ht, item.vat_rate))
    });

    DocumentTotals {
        subtotal_ht: round2(subtotal),
        total_vat: round2(vat_sum),
        total_ttc: round2(total_ttc(subtotal, vat_sum)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_document_has_zero_totals() {
        assert_eq!(document_totals(&[]), DocumentTotals::default());
        let t = document_totals(&[]);
        assert_eq!((t.subtotal_ht, t.total_vat, t.total_ttc), (0.0, 0.0, 0.0));
    }

    #[test]
    fn line_helpers() {
        assert_eq!(line_total(2.0, 100.0, 10.0), 180.0);
        assert_eq!(line_total(3.0, 20.0, 0.0), 60.0);
        assert_eq!(vat(200.0, 20.0), 40.0);
        assert_eq!(total_ttc(200.0, 40.0), 240.0);
    }

    #[test]
    fn mixed_rates_and_discounts() {
        let items = [
            LineItem::new(2.0, 100.0, 20.0).with_discount(10.0),
            LineItem::new(1.0, 50.5, 5.5),
        ];
        let totals = document_totals(&items);
        assert_eq!(totals.subtotal_ht, 230.5);
        assert_eq!(totals.total_vat, 38.78);
        assert_eq!(totals.total_ttc, 269.28);
    }

    #[test]
    fn rounding_applies_to_aggregate_not_lines() {
        // Each line rounds to 0.00 on its own; together they reach 0.01.
        let items = [LineItem::new(1.0, 0.004, 0.0), LineItem::new(1.0, 0.004, 0.0)];
        let totals = document_totals(&items);
        assert_eq!(totals.subtotal_ht, 0.01);

        let per_line: f64 = items.iter().map(|i| round2(i.line_total_ht())).sum();
        assert_eq!(per_line, 0.0);
    }

    #[test]
    fn half_cent_subtotal_rounds_away_from_zero() {
        // 3 * 10.005 lands on 30.015 exactly; the half cent rounds up.
        let totals = document_totals(&[LineItem::new(3.0, 10.005, 0.0)]);
        assert_eq!(totals.subtotal_ht, 30.02);
        assert_eq!(totals.total_ttc, 30.02);

        let credit = document_totals(&[LineItem::new(-3.0, 10.005, 0.0)]);
        assert_eq!(credit.subtotal_ht, -30.02);
    }

    #[test]
    fn negative_and_non_finite_inputs_propagate() {
        let credit = document_totals(&[LineItem::new(-1.0, 100.0, 20.0)]);
        assert_eq!(credit.subtotal_ht, -100.0);
        assert_eq!(credit.total_vat, -20.0);
        assert_eq!(credit.total_ttc, -120.0);

        let broken = document_totals(&[LineItem::new(f64::NAN, 1.0, 20.0)]);
        assert!(broken.subtotal_ht.is_nan());
        assert!(broken.total_ttc.is_nan());
    }

    #[test]
    fn line_item_deserializes_with_default_discount() {
        let item: LineItem =
            serde_json::from_str(r#"{"quantity":2,"unitPriceHt":12.5,"vatRate":20}"#).unwrap();
        assert_eq!(item.discount_rate, 0.0);
        assert_eq!(item.line_total_ttc(), 30.0);

        let json = serde_json::to_value(document_totals(&[item])).unwrap();
        assert_eq!(json["subtotalHt"], 25.0);
        assert_eq!(json["totalTtc"], 30.0);
    }

    fn arb_item() -> impl Strategy<Value = LineItem> {
        (1u32..100, 0u32..100_000, 0u32..=100, prop::sample::select(vec![0.0, 5.5, 10.0, 20.0]))
            .prop_map(|(q, cents, discount, rate)| {
                LineItem::new(q as f64, cents as f64 / 100.0, rate).with_discount(discount as f64)
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: aggregates are the rounded sums of the unrounded line figures.
        #[test]
        fn totals_are_rounded_sums_of_lines(items in prop::collection::vec(arb_item(), 0..20)) {
            let totals = document_totals(&items);

            let mut subtotal = 0.0;
            let mut vat_sum = 0.0;
            for item in &items {
                let ht = line_total(item.quantity, item.unit_price_ht, item.discount_rate);
                subtotal += ht;
                vat_sum += vat(ht, item.vat_rate);
            }

            prop_assert_eq!(totals.subtotal_ht, round2(subtotal));
            prop_assert_eq!(totals.total_vat, round2(vat_sum));
            prop_assert_eq!(totals.total_ttc, round2(subtotal + vat_sum));
        }
    }
}
