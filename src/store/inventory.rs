//! Ordered inventory of shoes with lookup and restock operations.

use crate::domain::Shoe;
use crate::error::{InventoryError, Result};

/// Ordered, in-memory list of shoes.
///
/// Order is insertion order (or file order for loaded records) and is the
/// tie-break for every selection below: the first match wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    shoes: Vec<Shoe>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_shoes(shoes: Vec<Shoe>) -> Self {
        Self { shoes }
    }

    /// Add a shoe at the end. Codes are not required to be unique.
    pub fn add(&mut self, shoe: Shoe) {
        self.shoes.push(shoe);
    }

    pub fn shoes(&self) -> &[Shoe] {
        &self.shoes
    }

    pub fn len(&self) -> usize {
        self.shoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shoes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Shoe> {
        self.shoes.get(index)
    }

    /// Position of the first shoe with the smallest quantity.
    pub fn lowest_stock(&self) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (index, shoe) in self.shoes.iter().enumerate() {
            match best {
                Some((_, quantity)) if shoe.quantity >= quantity => {}
                _ => best = Some((index, shoe.quantity)),
            }
        }
        best.map(|(index, _)| index)
    }

    /// Position of the first shoe with the largest quantity.
    pub fn highest_stock(&self) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (index, shoe) in self.shoes.iter().enumerate() {
            match best {
                Some((_, quantity)) if shoe.quantity <= quantity => {}
                _ => best = Some((index, shoe.quantity)),
            }
        }
        best.map(|(index, _)| index)
    }

    /// First shoe whose code equals `code` exactly.
    ///
    /// Callers normalize user input to uppercase before searching.
    pub fn find_by_code(&self, code: &str) -> Option<&Shoe> {
        self.shoes.iter().find(|shoe| shoe.code == code)
    }

    /// Add `amount` units to the shoe at `index` and return its new quantity.
    ///
    /// No other shoe is touched. On error nothing changes.
    pub fn restock(&mut self, index: usize, amount: u32) -> Result<u32> {
        let shoe = self
            .shoes
            .get_mut(index)
            .ok_or(InventoryError::NotFound(index))?;

        let updated = shoe
            .quantity
            .checked_add(amount)
            .ok_or_else(|| InventoryError::StockOverflow {
                code: shoe.code.clone(),
                current: shoe.quantity,
                added: amount,
            })?;

        shoe.quantity = updated;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_quantities(quantities: &[u32]) -> Inventory {
        let shoes = quantities
            .iter()
            .enumerate()
            .map(|(i, &q)| Shoe::new("ZA", format!("SKU{}", i), format!("Shoe {}", i), 10.0, q))
            .collect();
        Inventory::from_shoes(shoes)
    }

    #[test]
    fn test_add_preserves_order_and_duplicates() {
        let mut inventory = Inventory::new();
        inventory.add(Shoe::new("ZA", "AIR001", "Air Max", 150.0, 10));
        inventory.add(Shoe::new("US", "AIR001", "Air Max 90", 160.0, 4));

        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.shoes()[1].product, "Air Max 90");
    }

    #[test]
    fn test_lowest_stock_first_minimum_wins() {
        let inventory = with_quantities(&[5, 2, 2, 9]);
        assert_eq!(inventory.lowest_stock(), Some(1));
    }

    #[test]
    fn test_highest_stock_first_maximum_wins() {
        let inventory = with_quantities(&[5, 2, 2, 9]);
        assert_eq!(inventory.highest_stock(), Some(3));

        let tied = with_quantities(&[7, 3, 7]);
        assert_eq!(tied.highest_stock(), Some(0));
    }

    #[test]
    fn test_selection_on_empty() {
        let inventory = Inventory::new();
        assert_eq!(inventory.lowest_stock(), None);
        assert_eq!(inventory.highest_stock(), None);
    }

    #[test]
    fn test_find_by_code_returns_first_match() {
        let mut inventory = Inventory::new();
        inventory.add(Shoe::new("ZA", "AIR001", "Air Max", 150.0, 10));
        inventory.add(Shoe::new("US", "AIR001", "Air Max 90", 160.0, 4));

        assert_eq!(inventory.find_by_code("AIR001").unwrap().country, "ZA");
        assert!(inventory.find_by_code("air001").is_none());
        assert!(inventory.find_by_code("NOPE").is_none());
    }

    #[test]
    fn test_restock_only_touches_target() {
        let mut inventory = with_quantities(&[5, 2, 2, 9]);

        assert_eq!(inventory.restock(1, 8).unwrap(), 10);

        let quantities: Vec<u32> = inventory.shoes().iter().map(|s| s.quantity).collect();
        assert_eq!(quantities, vec![5, 10, 2, 9]);
    }

    #[test]
    fn test_restock_out_of_range() {
        let mut inventory = with_quantities(&[1]);
        assert!(matches!(inventory.restock(4, 1), Err(InventoryError::NotFound(4))));
    }

    #[test]
    fn test_restock_overflow_leaves_quantity() {
        let mut inventory = with_quantities(&[u32::MAX - 1]);

        let err = inventory.restock(0, 2).unwrap_err();
        assert!(matches!(err, InventoryError::StockOverflow { .. }));
        assert_eq!(inventory.shoes()[0].quantity, u32::MAX - 1);
    }
}
