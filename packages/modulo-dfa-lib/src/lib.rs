pub mod automaton;
pub mod config;
pub mod remainder;
pub mod utils;
pub mod validation;
