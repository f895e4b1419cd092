//! Conversion of scraped products into the JSON pricing summary.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::product::Product;

/// Output record for a single product. Field order here is the order in the
/// emitted JSON; `kcal_per_100g` appears only for food products.
#[derive(Serialize)]
struct ProductRecord<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    kcal_per_100g: Option<&'a str>,
    unit_price: String,
    description: &'a str,
}

#[derive(Serialize)]
struct TotalsRecord {
    gross: String,
    vat: String,
}

/// Builds the result document, accumulating gross and VAT totals over
/// exactly the products whose records serialized successfully.
#[derive(Debug, Default)]
pub struct JsonTransformer {
    total_price: f64,
    total_vat: f64,
}

impl JsonTransformer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform the product list into the `{"result": [...], "total": ...}`
    /// document. Per-item faults skip the item; a totals fault degrades to
    /// an empty totals object. The document itself is always returned.
    pub fn transform(mut self, products: &[Product]) -> Value {
        let mut items = Vec::new();
        for product in products {
            if let Some(record) = self.product_record(product) {
                items.push(record);
            }
        }

        let totals = self.totals_record();

        let mut document = Map::new();
        document.insert("result".to_string(), Value::Array(items));
        document.insert("total".to_string(), totals);
        Value::Object(document)
    }

    /// The record for one product. The running totals only move once the
    /// record has serialized, so a skipped item never distorts them.
    fn product_record(&mut self, product: &Product) -> Option<Value> {
        let record = ProductRecord {
            title: product.name(),
            kcal_per_100g: product.calories(),
            unit_price: format!("{:.2}", product.unit_price()),
            description: product.description().unwrap_or(""),
        };

        match serde_json::to_value(&record) {
            Ok(value) => {
                self.total_price += product.unit_price();
                self.total_vat += product.vat();
                Some(value)
            }
            Err(e) => {
                warn!("Omitting '{}' from results: {}", product.name(), e);
                None
            }
        }
    }

    fn totals_record(&self) -> Value {
        let totals = TotalsRecord {
            gross: format!("{:.2}", self.total_price),
            vat: format!("{:.2}", self.total_vat),
        };

        match serde_json::to_value(&totals) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to build the totals record, emitting an empty one: {}", e);
                Value::Object(Map::new())
            }
        }
    }
}
