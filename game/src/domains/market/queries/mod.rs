pub use contracts::*;
pub use price::*;

mod contracts;
mod price;
