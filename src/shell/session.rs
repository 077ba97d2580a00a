//! Interactive session: the menu loop and the eight inventory operations.
//!
//! The session owns the [`Inventory`] for the run and writes every change
//! through its [`InventoryStorage`]. Save failures are reported to the user
//! and leave the in-memory change in place.

use std::io::{BufRead, Write};

use colored::*;
use log::{debug, error, info, warn};

use super::console::Console;
use super::menu::{MenuChoice, menu_text};
use crate::config::DisplayConfig;
use crate::domain::{Currency, Shoe};
use crate::error::{InventoryError, Result};
use crate::report::{self, views};
use crate::storage::{InventoryStorage, LoadOutcome};
use crate::store::Inventory;
use crate::validation::{
    is_confirmation, normalize_code, parse_cost, parse_quantity, parse_restock_amount,
};

const EMPTY_MESSAGE: &str = "No shoes in inventory";

/// One run of the inventory shell
pub struct Session<S, R, W> {
    inventory: Inventory,
    storage: S,
    console: Console<R, W>,
    warehouse_name: String,
    currency: Currency,
}

impl<S, R, W> Session<S, R, W>
where
    S: InventoryStorage,
    R: BufRead,
    W: Write,
{
    pub fn new(storage: S, console: Console<R, W>, display: &DisplayConfig) -> Self {
        Self {
            inventory: Inventory::new(),
            storage,
            console,
            warehouse_name: display.warehouse_name.clone(),
            currency: display.currency(),
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Populate the inventory from storage.
    ///
    /// A missing file is created and the session starts empty. A file that
    /// fails to parse is reported and the session also starts empty, with
    /// none of its records. Only a failure to check the file at all is
    /// returned as an error.
    pub fn load(&mut self) -> Result<()> {
        let outcome = match self.storage.load() {
            Ok(outcome) => outcome,
            Err(e @ InventoryError::Unavailable { .. }) => return Err(e),
            Err(e) => {
                error!("Failed to load inventory: {}", e);
                self.console.say(format!("Error loading inventory: {}", e).red())?;
                self.inventory = Inventory::new();
                self.console.say("\nStarting with empty inventory")?;
                return Ok(());
            }
        };

        match outcome {
            LoadOutcome::Created => {
                self.console.say("Created new inventory file")?;
                self.inventory = Inventory::new();
                self.console.say("\nStarting with empty inventory")?;
            }
            LoadOutcome::Loaded(shoes) => {
                info!("Loaded {} shoes", shoes.len());
                self.inventory = Inventory::from_shoes(shoes);
                self.console
                    .say(format!("\nLoaded {} shoes from inventory", self.inventory.len()))?;
            }
        }
        Ok(())
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        match self.menu_loop() {
            Err(InventoryError::InputClosed) => {
                info!("Input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn menu_loop(&mut self) -> Result<()> {
        loop {
            self.console.say(menu_text(&self.warehouse_name).bold())?;
            let raw = self.console.prompt("\nEnter choice (1-9): ")?;

            let Some(choice) = MenuChoice::parse(&raw) else {
                debug!("Invalid menu choice {:?}", raw);
                self.console.say("Invalid choice, please try again".yellow())?;
                continue;
            };

            debug!("Menu choice: {:?}", choice);
            match choice {
                MenuChoice::AddShoe => self.add_shoe()?,
                MenuChoice::ViewAll => self.view_all()?,
                MenuChoice::Restock => self.restock()?,
                MenuChoice::Search => self.search()?,
                MenuChoice::ProductValues => self.product_values()?,
                MenuChoice::HighestQuantity => self.highest_quantity()?,
                MenuChoice::StockByCountry => self.stock_by_country()?,
                MenuChoice::TotalValue => self.total_value()?,
                MenuChoice::Exit => {
                    self.console
                        .say(format!("\nThank you for using {}!", self.warehouse_name).green())?;
                    return Ok(());
                }
            }
        }
    }

    /// Capture a new shoe from the user, add it and append it to storage.
    pub fn add_shoe(&mut self) -> Result<()> {
        self.console.say("\n=== Add New Shoe ===".cyan())?;

        let country = self.console.prompt("Country: ")?;
        let code = normalize_code(&self.console.prompt("Code: ")?);
        let product = self.console.prompt("Product: ")?;
        let cost_label = format!("Cost ({}): ", self.currency.symbol);
        let cost = self.console.prompt_until(&cost_label, parse_cost)?;
        let quantity = self.console.prompt_until("Quantity: ", parse_quantity)?;

        let shoe = Shoe::new(country, code, product, cost, quantity);
        if shoe.has_unstorable_text() {
            warn!("Shoe {} has a comma in a text field and will not reload cleanly", shoe.code);
        }

        self.inventory.add(shoe.clone());
        match self.storage.append(&shoe) {
            Ok(()) => {
                info!("Added shoe {} ({} units)", shoe.code, shoe.quantity);
                self.console.say("Shoe added successfully!".green())?;
            }
            Err(e) => {
                warn!("Failed to save shoe {}: {}", shoe.code, e);
                self.console.say(format!("Error saving shoe: {}", e).red())?;
            }
        }
        Ok(())
    }

    /// Show every shoe as a grid.
    pub fn view_all(&mut self) -> Result<()> {
        if self.inventory.is_empty() {
            return self.console.say(EMPTY_MESSAGE);
        }
        let table = views::inventory_table(self.inventory.shoes(), &self.currency);
        self.console.say("\n=== Current Inventory ===".cyan())?;
        self.console.say(table)
    }

    /// Offer to restock the shoe with the lowest quantity.
    pub fn restock(&mut self) -> Result<()> {
        let Some(index) = self.inventory.lowest_stock() else {
            return self.console.say(EMPTY_MESSAGE);
        };
        let details = match self.inventory.get(index) {
            Some(shoe) => views::restock_details(shoe, &self.currency),
            None => return Err(InventoryError::NotFound(index)),
        };

        self.console.say("\nShoe needing restock:".cyan())?;
        self.console.say(details)?;

        let answer = self.console.prompt("Restock? (yes/no): ")?;
        if !is_confirmation(&answer) {
            debug!("Restock declined");
            return Ok(());
        }

        let raw = self.console.prompt("Quantity to add: ")?;
        let amount = match parse_restock_amount(&raw) {
            Ok(amount) => amount,
            Err(e) => return self.console.say(e.to_string().yellow()),
        };

        let updated = match self.inventory.restock(index, amount) {
            Ok(updated) => updated,
            Err(e) => {
                warn!("Restock rejected: {}", e);
                return self.console.say(e.to_string().red());
            }
        };
        info!("Restocked position {} by {} to {}", index, amount, updated);

        match self.storage.rewrite(self.inventory.shoes()) {
            Ok(()) => self.console.say("Restock successful!".green()),
            Err(e) => {
                warn!("Failed to rewrite inventory after restock: {}", e);
                self.console.say(format!("Error saving inventory: {}", e).red())
            }
        }
    }

    /// Look up a shoe by code, case-insensitively.
    pub fn search(&mut self) -> Result<()> {
        if self.inventory.is_empty() {
            return self.console.say(EMPTY_MESSAGE);
        }
        let code = normalize_code(&self.console.prompt("Enter shoe code: ")?);

        let details = self
            .inventory
            .find_by_code(&code)
            .map(|shoe| views::shoe_details(shoe, &self.currency));
        match details {
            Some(details) => {
                self.console.say("\n=== Shoe Found ===".cyan())?;
                self.console.say(details)
            }
            None => {
                debug!("No shoe with code {}", code);
                self.console.say("Shoe not found")
            }
        }
    }

    /// Cost times quantity for every shoe.
    pub fn product_values(&mut self) -> Result<()> {
        if self.inventory.is_empty() {
            return self.console.say(EMPTY_MESSAGE);
        }
        let values = report::item_values(self.inventory.shoes());
        let table = views::item_value_table(&values, &self.currency);
        self.console.say("\n=== Product Values ===".cyan())?;
        self.console.say(table)
    }

    /// Recommend the shoe with the most stock for sale.
    pub fn highest_quantity(&mut self) -> Result<()> {
        let details = self
            .inventory
            .highest_stock()
            .and_then(|index| self.inventory.get(index))
            .map(|shoe| views::for_sale_details(shoe, &self.currency));
        let Some(details) = details else {
            return self.console.say(EMPTY_MESSAGE);
        };

        self.console.say("\n=== Shoe For Sale ===".cyan())?;
        self.console.say(details)?;
        self.console.say("\nThis shoe should be marked for sale!".green())
    }

    /// Totals per country, most valuable first.
    pub fn stock_by_country(&mut self) -> Result<()> {
        if self.inventory.is_empty() {
            return self.console.say(EMPTY_MESSAGE);
        }
        let totals = report::country_totals(self.inventory.shoes());
        let table = views::country_table(&totals, &self.currency);
        self.console.say("\n=== STOCK BY COUNTRY ===".cyan())?;
        self.console.say(table)
    }

    /// Value of the whole warehouse.
    pub fn total_value(&mut self) -> Result<()> {
        if self.inventory.is_empty() {
            return self.console.say(EMPTY_MESSAGE);
        }
        let total = report::total_value(self.inventory.shoes());
        self.console.say("\n=== TOTAL WAREHOUSE VALUE ===".cyan())?;
        self.console.say(self.currency.format(total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::TextFileStorage;
    use std::cell::RefCell;
    use tempfile::TempDir;

    /// Storage double that keeps records in memory and can be told to fail writes
    #[derive(Default)]
    struct MemoryStorage {
        initial: Option<Vec<Shoe>>,
        fail_writes: bool,
        appended: RefCell<Vec<Shoe>>,
        rewrites: RefCell<Vec<Vec<Shoe>>>,
    }

    impl InventoryStorage for MemoryStorage {
        fn load(&self) -> Result<LoadOutcome> {
            Ok(match &self.initial {
                Some(shoes) => LoadOutcome::Loaded(shoes.clone()),
                None => LoadOutcome::Created,
            })
        }

        fn append(&self, shoe: &Shoe) -> Result<()> {
            if self.fail_writes {
                return Err(std::io::Error::other("disk full").into());
            }
            self.appended.borrow_mut().push(shoe.clone());
            Ok(())
        }

        fn rewrite(&self, shoes: &[Shoe]) -> Result<()> {
            if self.fail_writes {
                return Err(std::io::Error::other("disk full").into());
            }
            self.rewrites.borrow_mut().push(shoes.to_vec());
            Ok(())
        }
    }

    type TestSession<'a> = Session<&'a MemoryStorage, &'a [u8], &'a mut Vec<u8>>;

    fn stocked(quantities: &[u32]) -> MemoryStorage {
        MemoryStorage {
            initial: Some(
                quantities
                    .iter()
                    .enumerate()
                    .map(|(i, &q)| Shoe::new("ZA", format!("SKU{}", i), format!("Shoe {}", i), 10.0, q))
                    .collect(),
            ),
            ..Default::default()
        }
    }

    /// Run `action` against a loaded session fed with `input`, returning the
    /// session's storage, inventory and everything printed after loading.
    fn drive(
        storage: MemoryStorage,
        input: &str,
        action: impl FnOnce(&mut TestSession<'_>) -> Result<()>,
    ) -> (Inventory, String, MemoryStorage) {
        let mut output = Vec::new();
        let inventory = {
            let console = Console::new(input.as_bytes(), &mut output);
            let mut session = Session::new(&storage, console, &DisplayConfig::default());
            session.load().unwrap();
            action(&mut session).unwrap();
            session.inventory().clone()
        };
        (inventory, String::from_utf8(output).unwrap(), storage)
    }

    #[test]
    fn test_load_fresh_start_message() {
        let (inventory, output, _) = drive(MemoryStorage::default(), "", |_| Ok(()));
        assert!(inventory.is_empty());
        assert!(output.contains("Created new inventory file"));
        assert!(output.contains("Starting with empty inventory"));
    }

    #[test]
    fn test_load_propagates_unavailable_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let storage = TextFileStorage::new(blocker.join("inventory.txt"));

        let mut output = Vec::new();
        let result = {
            let console = Console::new(&b""[..], &mut output);
            let mut session = Session::new(storage, console, &DisplayConfig::default());
            session.load()
        };
        assert!(matches!(result, Err(InventoryError::Unavailable { .. })));
        assert!(output.is_empty());
    }

    #[test]
    fn test_load_create_failure_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let storage = TextFileStorage::new(temp_dir.path().join("missing").join("inventory.txt"));

        let mut output = Vec::new();
        let inventory = {
            let console = Console::new(&b""[..], &mut output);
            let mut session = Session::new(storage, console, &DisplayConfig::default());
            session.load().unwrap();
            session.inventory().clone()
        };
        let output = String::from_utf8(output).unwrap();

        assert!(inventory.is_empty());
        let error_at = output.find("Error loading inventory").unwrap();
        let empty_at = output.find("Starting with empty inventory").unwrap();
        assert!(error_at < empty_at);
        assert!(!output.contains("Created new inventory file"));
    }

    #[test]
    fn test_load_reports_count() {
        let (inventory, output, _) = drive(stocked(&[1, 2]), "", |_| Ok(()));
        assert_eq!(inventory.len(), 2);
        assert!(output.contains("Loaded 2 shoes from inventory"));
    }

    #[test]
    fn test_add_shoe_validates_and_appends() {
        let input = "ZA\nair001\nAir Max\nfree\n0\n150.00\n-1\n2.5\n10\n";
        let (inventory, output, storage) =
            drive(MemoryStorage::default(), input, |s| s.add_shoe());

        let expected = Shoe::new("ZA", "AIR001", "Air Max", 150.0, 10);
        assert_eq!(inventory.shoes(), &[expected.clone()]);
        assert_eq!(storage.appended.borrow().as_slice(), &[expected]);
        assert!(output.contains("Please enter a valid number"));
        assert!(output.contains("Cost must be positive"));
        assert!(output.contains("Quantity can't be negative"));
        assert!(output.contains("Please enter a whole number"));
        assert!(output.contains("Shoe added successfully!"));
    }

    #[test]
    fn test_add_shoe_save_failure_keeps_record_in_memory() {
        let storage = MemoryStorage {
            fail_writes: true,
            ..Default::default()
        };
        let (inventory, output, _) = drive(storage, "ZA\nX1\nAir\n10\n1\n", |s| s.add_shoe());

        assert_eq!(inventory.len(), 1);
        assert!(output.contains("Error saving shoe: disk full"));
        assert!(!output.contains("Shoe added successfully!"));
    }

    #[test]
    fn test_restock_lowest_first_occurrence() {
        let (inventory, output, storage) = drive(stocked(&[5, 2, 2, 9]), "YES\n4\n", |s| s.restock());

        let quantities: Vec<u32> = inventory.shoes().iter().map(|s| s.quantity).collect();
        assert_eq!(quantities, vec![5, 6, 2, 9]);
        assert!(output.contains("Code: SKU1"));
        assert!(output.contains("Current Quantity: 2"));
        assert!(output.contains("Restock successful!"));
        assert_eq!(storage.rewrites.borrow().len(), 1);
        assert_eq!(storage.rewrites.borrow()[0][1].quantity, 6);
    }

    #[test]
    fn test_restock_rejects_zero() {
        let (inventory, output, storage) = drive(stocked(&[3]), "yes\n0\n", |s| s.restock());

        assert_eq!(inventory.shoes()[0].quantity, 3);
        assert!(output.contains("Quantity must be positive"));
        assert!(storage.rewrites.borrow().is_empty());
    }

    #[test]
    fn test_restock_rejects_non_numeric() {
        let (inventory, output, _) = drive(stocked(&[3]), "yes\nsome\n", |s| s.restock());

        assert_eq!(inventory.shoes()[0].quantity, 3);
        assert!(output.contains("Invalid quantity"));
    }

    #[test]
    fn test_restock_declined() {
        let (inventory, output, storage) = drive(stocked(&[3]), "no\n", |s| s.restock());

        assert_eq!(inventory.shoes()[0].quantity, 3);
        assert!(!output.contains("Quantity to add"));
        assert!(storage.rewrites.borrow().is_empty());
    }

    #[test]
    fn test_restock_save_failure_keeps_increment() {
        let mut storage = stocked(&[3]);
        storage.fail_writes = true;
        let (inventory, output, _) = drive(storage, "yes\n2\n", |s| s.restock());

        assert_eq!(inventory.shoes()[0].quantity, 5);
        assert!(output.contains("Error saving inventory: disk full"));
    }

    #[test]
    fn test_empty_inventory_messages() {
        let (_, output, _) = drive(MemoryStorage::default(), "", |s| {
            s.view_all()?;
            s.restock()?;
            s.search()?;
            s.product_values()?;
            s.highest_quantity()?;
            s.stock_by_country()?;
            s.total_value()
        });
        assert_eq!(output.matches(EMPTY_MESSAGE).count(), 7);
    }

    #[test]
    fn test_search_uppercases_input() {
        let (_, output, _) = drive(stocked(&[4, 8]), "sku1\n", |s| s.search());
        assert!(output.contains("=== Shoe Found ==="));
        assert!(output.contains("Quantity: 8"));
    }

    #[test]
    fn test_search_not_found() {
        let (_, output, _) = drive(stocked(&[4]), "missing\n", |s| s.search());
        assert!(output.contains("Shoe not found"));
    }

    #[test]
    fn test_highest_quantity() {
        let (_, output, _) = drive(stocked(&[5, 2, 2, 9]), "", |s| s.highest_quantity());
        assert!(output.contains("Code: SKU3"));
        assert!(output.contains("This shoe should be marked for sale!"));
    }

    #[test]
    fn test_total_value() {
        let (_, output, _) = drive(stocked(&[1, 2]), "", |s| s.total_value());
        assert!(output.contains("R30.00"));
    }

    #[test]
    fn test_run_invalid_then_exit() {
        let (_, output, _) = drive(MemoryStorage::default(), "0\n 9 \n", |s| s.run());
        assert!(output.contains("Invalid choice, please try again"));
        assert!(output.contains("Thank you for using Nike Warehouse Management!"));
        assert_eq!(output.matches("1. Add new shoe").count(), 2);
    }

    #[test]
    fn test_run_ends_quietly_at_eof() {
        let (_, output, _) = drive(MemoryStorage::default(), "2\n", |s| s.run());
        assert!(output.contains(EMPTY_MESSAGE));
        assert!(!output.contains("Thank you"));
    }
}
