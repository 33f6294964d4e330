pub use bills::*;
pub use cash::*;
pub use contracts::*;
pub use stock::*;

mod bills;
mod cash;
mod contracts;
mod stock;
