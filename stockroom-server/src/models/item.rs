//! Inventory item input validation
//!
//! Rules are checked per field and every violation is collected.
//! Unknown fields are stripped.

use serde_json::{Map, Value};

use super::{ValidationError, Violation};

/// Minimum length of an item name, in characters
pub const MIN_NAME_LEN: usize = 3;

const FIELD_NAME: &str = "name";
const FIELD_DESCRIPTION: &str = "description";
const FIELD_PRICE: &str = "price";
const FIELD_STOCK: &str = "stockQuantity";

/// Validated item fields (everything but the store-assigned id)
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    name: String,
    description: Option<String>,
    price: f64,
    stock_quantity: i32,
}

impl NewItem {
    /// Build from already typed values.
    ///
    /// # Rules
    /// - name at least 3 characters
    /// - price finite and > 0
    /// - stock quantity >= 0
    ///
    /// # Example
    /// ```
    /// use stockroom_server::models::NewItem;
    ///
    /// assert!(NewItem::new("Widget", None, 9.99, 5).is_ok());
    /// assert!(NewItem::new("ab", None, 9.99, 5).is_err());
    /// assert!(NewItem::new("Widget", None, 0.0, 5).is_err());
    /// ```
    pub fn new(
        name: &str,
        description: Option<&str>,
        price: f64,
        stock_quantity: i32,
    ) -> Result<Self, ValidationError> {
        let mut violations = Vec::new();

        if name.chars().count() < MIN_NAME_LEN {
            violations.push(Violation::min_length(FIELD_NAME, MIN_NAME_LEN));
        }
        if !(price.is_finite() && price > 0.0) {
            violations.push(Violation::positive(FIELD_PRICE));
        }
        if stock_quantity < 0 {
            violations.push(Violation::minimum(FIELD_STOCK, 0));
        }

        if !violations.is_empty() {
            return Err(ValidationError::new(violations));
        }

        Ok(Self {
            name: name.to_owned(),
            description: description.map(str::to_owned),
            price,
            stock_quantity,
        })
    }

    /// Validate an untyped JSON request body.
    ///
    /// The body must be an object. `description` may be absent, null or
    /// empty. Numbers are never coerced from strings: `"9.99"` is a type
    /// violation here, where a lenient schema validator would convert it.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let Some(fields) = value.as_object() else {
            return Err(ValidationError::single(Violation::wrong_type(
                "body",
                "a JSON object",
            )));
        };

        let mut violations = Vec::new();
        let name = check_name(fields, &mut violations);
        let description = check_description(fields, &mut violations);
        let price = check_price(fields, &mut violations);
        let stock_quantity = check_stock_quantity(fields, &mut violations);

        match (name, description, price, stock_quantity) {
            (Some(name), Some(description), Some(price), Some(stock_quantity)) => Ok(Self {
                name,
                description,
                price,
                stock_quantity,
            }),
            _ => Err(ValidationError::new(violations)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stock_quantity(&self) -> i32 {
        self.stock_quantity
    }
}

fn check_name(fields: &Map<String, Value>, violations: &mut Vec<Violation>) -> Option<String> {
    match fields.get(FIELD_NAME) {
        None | Some(Value::Null) => {
            violations.push(Violation::required(FIELD_NAME));
            None
        }
        Some(Value::String(s)) if s.chars().count() < MIN_NAME_LEN => {
            violations.push(Violation::min_length(FIELD_NAME, MIN_NAME_LEN));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            violations.push(Violation::wrong_type(FIELD_NAME, "a string"));
            None
        }
    }
}

/// Outer `None` means the field was invalid.
fn check_description(
    fields: &Map<String, Value>,
    violations: &mut Vec<Violation>,
) -> Option<Option<String>> {
    match fields.get(FIELD_DESCRIPTION) {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(s)) => Some(Some(s.clone())),
        Some(_) => {
            violations.push(Violation::wrong_type(FIELD_DESCRIPTION, "a string"));
            None
        }
    }
}

fn check_price(fields: &Map<String, Value>, violations: &mut Vec<Violation>) -> Option<f64> {
    match fields.get(FIELD_PRICE) {
        None | Some(Value::Null) => {
            violations.push(Violation::required(FIELD_PRICE));
            None
        }
        Some(Value::Number(n)) => match n.as_f64() {
            Some(price) if price.is_finite() && price > 0.0 => Some(price),
            _ => {
                violations.push(Violation::positive(FIELD_PRICE));
                None
            }
        },
        Some(_) => {
            violations.push(Violation::wrong_type(FIELD_PRICE, "a number"));
            None
        }
    }
}

fn check_stock_quantity(
    fields: &Map<String, Value>,
    violations: &mut Vec<Violation>,
) -> Option<i32> {
    let n = match fields.get(FIELD_STOCK) {
        None | Some(Value::Null) => {
            violations.push(Violation::required(FIELD_STOCK));
            return None;
        }
        Some(Value::Number(n)) => n,
        Some(_) => {
            violations.push(Violation::wrong_type(FIELD_STOCK, "a number"));
            return None;
        }
    };

    // Whole floats such as 5.0 are integers; 5.5 is not.
    let whole = if let Some(i) = n.as_i64() {
        i
    } else if n.is_u64() {
        i64::MAX
    } else {
        match n.as_f64() {
            Some(f) if f.fract() == 0.0 => f as i64,
            _ => {
                violations.push(Violation::integer(FIELD_STOCK));
                return None;
            }
        }
    };

    if whole < 0 {
        violations.push(Violation::minimum(FIELD_STOCK, 0));
        return None;
    }

    match i32::try_from(whole) {
        Ok(quantity) => Some(quantity),
        Err(_) => {
            violations.push(Violation::maximum(FIELD_STOCK, i64::from(i32::MAX)));
            None
        }
    }
}
