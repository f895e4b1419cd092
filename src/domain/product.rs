//! Product entity materialized from one listing element and its detail page.

/// Distinguishes plain products from food products. A product is food if
/// and only if a non-blank calorie value was extracted from its detail page.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductKind {
    Plain,
    Food {
        /// Calories per 100g, digits only, no unit suffix.
        calories: String,
    },
}

/// A product scraped from the catalogue.
///
/// VAT is derived from the unit price at construction time and never
/// recomputed; instances are immutable for the rest of the run.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    description: Option<String>,
    unit_price: f64,
    vat: f64,
    kind: ProductKind,
}

/// VAT rate applied to the unit price.
const VAT_RATE: f64 = 0.20;

impl Product {
    /// Create a plain product. VAT is derived from the unit price.
    pub fn new(name: String, description: Option<String>, unit_price: f64) -> Self {
        Self::with_kind(name, description, unit_price, ProductKind::Plain)
    }

    /// Create a food product carrying the extracted calorie value.
    pub fn food(
        name: String,
        description: Option<String>,
        unit_price: f64,
        calories: String,
    ) -> Self {
        Self::with_kind(name, description, unit_price, ProductKind::Food { calories })
    }

    fn with_kind(
        name: String,
        description: Option<String>,
        unit_price: f64,
        kind: ProductKind,
    ) -> Self {
        Self {
            name,
            description,
            unit_price,
            vat: round2(unit_price * VAT_RATE),
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn vat(&self) -> f64 {
        self.vat
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    /// The calorie value for food products, `None` for plain ones.
    pub fn calories(&self) -> Option<&str> {
        match &self.kind {
            ProductKind::Food { calories } => Some(calories),
            ProductKind::Plain => None,
        }
    }
}

/// Round to two decimal places via the string representation, the same
/// formatting used when prices are serialized. Keeps the VAT invariant
/// consistent with the printed figures.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(10.00, 2.00)]
    #[case(5.00, 1.00)]
    #[case(0.99, 0.20)]
    #[case(0.00, 0.00)]
    fn vat_is_one_fifth_of_unit_price_rounded(#[case] price: f64, #[case] expected_vat: f64) {
        let product = Product::new("Berries".to_string(), None, price);
        assert_eq!(product.vat(), expected_vat);
    }

    #[test]
    fn food_product_carries_calories() {
        let product = Product::food(
            "Strawberries".to_string(),
            Some("Ripe and red".to_string()),
            3.50,
            "33".to_string(),
        );
        assert_eq!(product.calories(), Some("33"));
        assert_eq!(
            product.kind(),
            &ProductKind::Food {
                calories: "33".to_string()
            }
        );
    }

    #[test]
    fn plain_product_has_no_calories() {
        let product = Product::new("Kitchen roll".to_string(), None, 1.00);
        assert_eq!(product.calories(), None);
        assert_eq!(product.kind(), &ProductKind::Plain);
    }

    #[test]
    fn round2_uses_the_formatted_representation() {
        assert_eq!(round2(0.1 * 2.0), 0.2);
        assert_eq!(round2(1.005 * 2.0), 2.01);
        assert_eq!(round2(3.0), 3.0);
    }
}
