pub mod bed;
pub mod symbols;
