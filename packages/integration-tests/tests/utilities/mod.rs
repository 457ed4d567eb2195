pub mod helper;
pub mod strategies;
