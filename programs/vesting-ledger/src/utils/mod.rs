pub mod account_space;
pub mod release;
pub mod token_checks;
