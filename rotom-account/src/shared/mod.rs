pub mod de;
pub mod decimal;
pub mod symbols;
pub mod utils;
