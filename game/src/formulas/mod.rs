pub use curves::*;
pub use modifiers::*;

mod curves;
mod modifiers;
