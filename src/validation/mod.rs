// Input validation for values typed at the shell.
// Every parser is pure; the session decides whether to reprompt or abort.

pub mod input;

pub use input::{
    InputError, is_confirmation, normalize_code, parse_cost, parse_quantity, parse_restock_amount,
};
