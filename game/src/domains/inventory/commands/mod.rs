pub use cart::*;
pub use consumables::*;
pub use items::*;
pub use seeds::*;

mod cart;
mod consumables;
mod items;
mod seeds;
