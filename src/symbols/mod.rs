pub use symbol::Symbol;
pub use table::{Intern, SymbolTable};

mod symbol;
mod table;
