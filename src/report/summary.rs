//! Aggregations over the inventory. All read-only.

use crate::domain::Shoe;

/// Stock value of one inventory line
#[derive(Debug, Clone, PartialEq)]
pub struct ItemValue {
    pub product: String,
    pub code: String,
    pub total_value: f64,
}

/// Totals for every shoe sharing a country
#[derive(Debug, Clone, PartialEq)]
pub struct CountryTotal {
    pub country: String,
    pub products: usize,
    pub total_quantity: u64,
    pub total_value: f64,
}

/// Value of each line, in inventory order.
pub fn item_values(shoes: &[Shoe]) -> Vec<ItemValue> {
    shoes
        .iter()
        .map(|shoe| ItemValue {
            product: shoe.product.clone(),
            code: shoe.code.clone(),
            total_value: shoe.value(),
        })
        .collect()
}

/// Group by exact country name and sort by total value, highest first.
///
/// Values are compared as shown, to two decimals. Groups start in order of
/// first appearance and the sort is stable, so countries whose totals
/// display alike keep that order.
pub fn country_totals(shoes: &[Shoe]) -> Vec<CountryTotal> {
    let mut totals: Vec<CountryTotal> = Vec::new();
    for shoe in shoes {
        let position = totals.iter().position(|t| t.country == shoe.country);
        let entry = match position {
            Some(index) => &mut totals[index],
            None => {
                totals.push(CountryTotal {
                    country: shoe.country.clone(),
                    products: 0,
                    total_quantity: 0,
                    total_value: 0.0,
                });
                let last = totals.len() - 1;
                &mut totals[last]
            }
        };
        entry.products += 1;
        entry.total_quantity += u64::from(shoe.quantity);
        entry.total_value += shoe.value();
    }

    totals.sort_by(|a, b| displayed(b.total_value).total_cmp(&displayed(a.total_value)));
    totals
}

/// A money value rounded the way it is printed
fn displayed(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Sum of cost times quantity over every line.
pub fn total_value(shoes: &[Shoe]) -> f64 {
    shoes.iter().map(Shoe::value).sum()
}
