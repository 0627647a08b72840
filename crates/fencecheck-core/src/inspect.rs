pub mod command;
pub mod count;
