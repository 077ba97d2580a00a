//! Text rendering of inventory listings and reports.

use super::summary::{CountryTotal, ItemValue};
use super::table::{Align, Table};
use crate::domain::{Currency, Shoe};

/// Full inventory grid: Country, Code, Product, Cost, Quantity.
pub fn inventory_table(shoes: &[Shoe], currency: &Currency) -> String {
    let mut table = Table::new(&[
        ("Country", Align::Left),
        ("Code", Align::Left),
        ("Product", Align::Left),
        ("Cost", Align::Left),
        ("Quantity", Align::Right),
    ]);
    for shoe in shoes {
        table.add_row(vec![
            shoe.country.clone(),
            shoe.code.clone(),
            shoe.product.clone(),
            currency.format(shoe.cost),
            shoe.quantity.to_string(),
        ]);
    }
    table.render()
}

/// Per-line value grid: Product, Code, Total Value.
pub fn item_value_table(values: &[ItemValue], currency: &Currency) -> String {
    let mut table = Table::new(&[
        ("Product", Align::Left),
        ("Code", Align::Left),
        ("Total Value", Align::Left),
    ]);
    for value in values {
        table.add_row(vec![
            value.product.clone(),
            value.code.clone(),
            currency.format(value.total_value),
        ]);
    }
    table.render()
}

/// Per-country grid: Country, Products, Total Quantity, Total Value.
pub fn country_table(totals: &[CountryTotal], currency: &Currency) -> String {
    let mut table = Table::new(&[
        ("Country", Align::Left),
        ("Products", Align::Right),
        ("Total Quantity", Align::Right),
        ("Total Value", Align::Left),
    ]);
    for total in totals {
        table.add_row(vec![
            total.country.clone(),
            total.products.to_string(),
            total.total_quantity.to_string(),
            currency.format(total.total_value),
        ]);
    }
    table.render()
}

/// Field-per-line description of a shoe, used by search.
pub fn shoe_details(shoe: &Shoe, currency: &Currency) -> String {
    [
        format!("Country: {}", shoe.country),
        format!("Code: {}", shoe.code),
        format!("Product: {}", shoe.product),
        format!("Cost: {}", currency.format(shoe.cost)),
        format!("Quantity: {}", shoe.quantity),
    ]
    .join("\n")
}

/// Description of the shoe picked for restocking.
pub fn restock_details(shoe: &Shoe, currency: &Currency) -> String {
    [
        format!("Country: {}", shoe.country),
        format!("Code: {}", shoe.code),
        format!("Product: {}", shoe.product),
        format!("Cost: {}", currency.format(shoe.cost)),
        format!("Current Quantity: {}", shoe.quantity),
    ]
    .join("\n")
}

/// Description of the shoe with the most stock.
pub fn for_sale_details(shoe: &Shoe, currency: &Currency) -> String {
    [
        format!("Product: {}", shoe.product),
        format!("Code: {}", shoe.code),
        format!("Quantity: {}", shoe.quantity),
        format!("Cost: {}", currency.format(shoe.cost)),
    ]
    .join("\n")
}
