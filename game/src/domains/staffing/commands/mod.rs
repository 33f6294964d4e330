pub use energy::*;
pub use hire::*;

mod energy;
mod hire;
