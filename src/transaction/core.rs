//! Defines the core data model for transactions.

use serde::{Deserialize, Serialize};

/// Alias for the integer type used for transaction IDs.
pub type TransactionId = i64;

/// A product listing and whether it sold.
///
/// Field names are serialized in camelCase to match the transaction data
/// file, e.g. `date_of_sale` is `dateOfSale`.
///
/// To create a new `Transaction` in code, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction, unique within a store.
    pub id: TransactionId,
    /// The display name of the product.
    pub title: String,
    /// The price of the product in dollars.
    pub price: f64,
    /// Whether the product was sold.
    pub sold: bool,
    /// When the product was sold, exactly as it appears in the data.
    ///
    /// This is either an RFC 3339 timestamp, a date and time without an
    /// offset, or a plain calendar date.
    pub date_of_sale: String,
    /// A longer description of the product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The product category, e.g. "electronics".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// A URL to an image of the product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(
        id: TransactionId,
        title: &str,
        price: f64,
        date_of_sale: &str,
    ) -> TransactionBuilder {
        TransactionBuilder {
            id,
            title: title.to_owned(),
            price,
            sold: false,
            date_of_sale: date_of_sale.to_owned(),
            description: None,
            category: None,
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// Transactions start out unsold and without a description or category.
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    id: TransactionId,
    title: String,
    price: f64,
    sold: bool,
    date_of_sale: String,
    description: Option<String>,
    category: Option<String>,
}

impl TransactionBuilder {
    /// Set whether the product was sold.
    pub fn sold(mut self, sold: bool) -> Self {
        self.sold = sold;
        self
    }

    /// Set the product description.
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }

    /// Set the product category.
    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_owned());
        self
    }

    /// Build the [Transaction].
    pub fn finalize(self) -> Transaction {
        Transaction {
            id: self.id,
            title: self.title,
            price: self.price,
            sold: self.sold,
            date_of_sale: self.date_of_sale,
            description: self.description,
            category: self.category,
            image: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Transaction;

    #[test]
    fn deserializes_camel_case_fields() {
        let value = json!({
            "id": 7,
            "title": "Mens Casual Slim Fit",
            "price": 15.99,
            "description": "The color could be slightly different in practice.",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/71YXzeOuslL._AC_UY879_.jpg",
            "sold": true,
            "dateOfSale": "2021-12-27T20:29:54+05:30"
        });

        let transaction: Transaction = serde_json::from_value(value).unwrap();

        assert_eq!(transaction.id, 7);
        assert_eq!(transaction.title, "Mens Casual Slim Fit");
        assert_eq!(transaction.price, 15.99);
        assert!(transaction.sold);
        assert_eq!(transaction.date_of_sale, "2021-12-27T20:29:54+05:30");
        assert_eq!(transaction.category.as_deref(), Some("men's clothing"));
        assert!(transaction.image.is_some());
    }

    #[test]
    fn optional_fields_may_be_missing() {
        let value = json!({
            "id": 1,
            "title": "Backpack",
            "price": 109.95,
            "sold": false,
            "dateOfSale": "2022-01-05"
        });

        let transaction: Transaction = serde_json::from_value(value).unwrap();

        assert_eq!(transaction.description, None);
        assert_eq!(transaction.category, None);
        assert_eq!(transaction.image, None);
    }

    #[test]
    fn missing_price_is_rejected() {
        let value = json!({
            "id": 1,
            "title": "Backpack",
            "sold": false,
            "dateOfSale": "2022-01-05"
        });

        assert!(serde_json::from_value::<Transaction>(value).is_err());
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let transaction = Transaction::build(3, "Cotton Jacket", 55.99, "2022-03-05")
            .sold(true)
            .finalize();

        let value = serde_json::to_value(&transaction).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 3,
                "title": "Cotton Jacket",
                "price": 55.99,
                "sold": true,
                "dateOfSale": "2022-03-05"
            })
        );
    }

    #[test]
    fn builder_sets_optional_fields() {
        let transaction = Transaction::build(5, "Solid Gold Petite Micropave", 168.0, "2022-01-01")
            .description("Satisfaction Guaranteed.")
            .category("jewelery")
            .finalize();

        assert!(!transaction.sold);
        assert_eq!(transaction.description.as_deref(), Some("Satisfaction Guaranteed."));
        assert_eq!(transaction.category.as_deref(), Some("jewelery"));
        assert_eq!(transaction.image, None);
    }
}
