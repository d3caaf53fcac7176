pub mod card_number_generator;
pub mod catalog;
pub mod registry;

pub use card_number_generator::*;
pub use catalog::*;
pub use registry::*;
