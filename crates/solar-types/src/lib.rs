pub mod campus;
pub mod card;
pub use card::*;
