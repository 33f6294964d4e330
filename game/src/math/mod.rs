pub use gauge::*;
pub use random::*;

mod gauge;
mod random;
