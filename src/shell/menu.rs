//! Main menu choices

/// One entry of the numbered main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddShoe,
    ViewAll,
    Restock,
    Search,
    ProductValues,
    HighestQuantity,
    StockByCountry,
    TotalValue,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order; position + 1 is the number typed
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::AddShoe,
        MenuChoice::ViewAll,
        MenuChoice::Restock,
        MenuChoice::Search,
        MenuChoice::ProductValues,
        MenuChoice::HighestQuantity,
        MenuChoice::StockByCountry,
        MenuChoice::TotalValue,
        MenuChoice::Exit,
    ];

    /// Parse a typed choice, ignoring surrounding whitespace
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(MenuChoice::AddShoe),
            "2" => Some(MenuChoice::ViewAll),
            "3" => Some(MenuChoice::Restock),
            "4" => Some(MenuChoice::Search),
            "5" => Some(MenuChoice::ProductValues),
            "6" => Some(MenuChoice::HighestQuantity),
            "7" => Some(MenuChoice::StockByCountry),
            "8" => Some(MenuChoice::TotalValue),
            "9" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddShoe => "Add new shoe",
            MenuChoice::ViewAll => "View all shoes",
            MenuChoice::Restock => "Restock shoes",
            MenuChoice::Search => "Search shoe",
            MenuChoice::ProductValues => "Product values",
            MenuChoice::HighestQuantity => "Highest quantity (mark for sale)",
            MenuChoice::StockByCountry => "Stock by country",
            MenuChoice::TotalValue => "Total warehouse value",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// The menu as printed before each choice
pub fn menu_text(title: &str) -> String {
    let mut lines = vec![format!("\n===== {} =====", title)];
    for (index, choice) in MenuChoice::ALL.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, choice.label()));
    }
    lines.join("\n")
}
