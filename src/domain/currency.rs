//! Currency formatting for money amounts

/// Display currency, rendered as a symbol prefix with two fraction digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    pub symbol: String,
}

impl Currency {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self { symbol: symbol.into() }
    }

    /// Format an amount, e.g. `R150.00`
    pub fn format(&self, amount: f64) -> String {
        format!("{}{:.2}", self.symbol, amount)
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::new("R")
    }
}
