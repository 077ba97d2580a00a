//! Shoe record and its line format
//!
//! A shoe is stored as one comma-separated record:
//! `country,code,product,cost,quantity`. There is no quoting, so a comma
//! inside a text field splits the record into too many fields.

/// Header line written at the top of every inventory file
pub const HEADER: &str = "country,code,product,cost,quantity";

/// Number of comma-separated fields in a data line
pub const FIELD_COUNT: usize = 5;

/// One inventory line item
#[derive(Debug, Clone, PartialEq)]
pub struct Shoe {
    /// Origin or supplier region
    pub country: String,

    /// Product code, the search key (not unique)
    pub code: String,

    /// Product name
    pub product: String,

    /// Unit cost
    pub cost: f64,

    /// Units in stock
    pub quantity: u32,
}

impl Shoe {
    pub fn new(
        country: impl Into<String>,
        code: impl Into<String>,
        product: impl Into<String>,
        cost: f64,
        quantity: u32,
    ) -> Self {
        Self {
            country: country.into(),
            code: code.into(),
            product: product.into(),
            cost,
            quantity,
        }
    }

    /// Stock value of this line: cost times quantity
    pub fn value(&self) -> f64 {
        self.cost * f64::from(self.quantity)
    }

    /// The five fields of a data record, in file order.
    ///
    /// Cost uses the shortest literal that parses back to the same f64 and
    /// always carries a fractional part (`150.0`, not `150`).
    pub fn to_record(&self) -> [String; FIELD_COUNT] {
        [
            self.country.clone(),
            self.code.clone(),
            self.product.clone(),
            format!("{:?}", self.cost),
            self.quantity.to_string(),
        ]
    }

    /// Build a shoe from the five fields of a data record.
    ///
    /// Text fields are taken verbatim. Numeric fields tolerate surrounding
    /// whitespace but must otherwise parse.
    pub fn from_fields(fields: &[&str]) -> Result<Self, String> {
        let [country, code, product, cost, quantity] = fields else {
            return Err(format!("expected {} fields, found {}", FIELD_COUNT, fields.len()));
        };

        let cost: f64 = cost
            .trim()
            .parse()
            .map_err(|_| format!("invalid cost '{}'", cost))?;
        let quantity: u32 = quantity
            .trim()
            .parse()
            .map_err(|_| format!("invalid quantity '{}'", quantity))?;

        Ok(Self::new(*country, *code, *product, cost, quantity))
    }

    /// True when a text field holds a comma and so cannot be stored faithfully
    pub fn has_unstorable_text(&self) -> bool {
        [&self.country, &self.code, &self.product]
            .iter()
            .any(|field| field.contains(','))
    }
}
