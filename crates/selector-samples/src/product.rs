//! Product records and the in-memory catalog.

use selector_macros::Selectable;
use serde::Serialize;

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Selectable)]
pub struct Product {
    #[select(Number)]
    pub id: i64,
    #[select(String)]
    pub name: String,
    #[select(String)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[select(Number)]
    pub list_price: f64,
    #[select(String)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl Product {
    /// A placeholder product carrying only an id and a name, used as the
    /// fallback for the or-default samples.
    pub fn placeholder(id: i64, name: &str) -> Self {
        Product {
            id,
            name: name.to_string(),
            color: None,
            list_price: 0.0,
            size: None,
        }
    }

    fn new(id: i64, name: &str, color: Option<&str>, list_price: f64, size: Option<&str>) -> Self {
        Product {
            id,
            name: name.to_string(),
            color: color.map(str::to_string),
            list_price,
            size: size.map(str::to_string),
        }
    }
}

/// Returns a freshly built copy of the catalog.
///
/// Several products are `Red`, none is `Brown`, and exactly one has id `706`.
pub fn get_products() -> Vec<Product> {
    vec![
        Product::new(680, "HL Road Frame - Black, 58", Some("Black"), 1431.50, Some("58")),
        Product::new(706, "HL Road Frame - Red, 58", Some("Red"), 1431.50, Some("58")),
        Product::new(707, "Sport-100 Helmet, Red", Some("Red"), 34.99, None),
        Product::new(708, "Sport-100 Helmet, Black", Some("Black"), 34.99, None),
        Product::new(709, "Mountain Bike Socks, M", Some("White"), 9.50, Some("M")),
        Product::new(710, "Mountain Bike Socks, L", Some("White"), 9.50, Some("L")),
        Product::new(711, "Sport-100 Helmet, Blue", Some("Blue"), 34.99, None),
        Product::new(712, "AWC Logo Cap", Some("Multi"), 8.99, None),
        Product::new(713, "Long-Sleeve Logo Jersey, S", Some("Multi"), 49.99, Some("S")),
        Product::new(714, "Long-Sleeve Logo Jersey, M", Some("Multi"), 49.99, Some("M")),
        Product::new(717, "HL Road Frame - Red, 62", Some("Red"), 1431.50, Some("62")),
        Product::new(718, "HL Road Frame - Red, 44", Some("Red"), 1431.50, Some("44")),
        Product::new(722, "LL Road Frame - Black, 58", Some("Black"), 337.22, Some("58")),
        Product::new(739, "HL Mountain Frame - Silver, 42", Some("Silver"), 1364.50, Some("42")),
        Product::new(870, "Water Bottle - 30 oz.", None, 4.99, None),
    ]
}
