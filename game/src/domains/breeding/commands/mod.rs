pub use breed::*;
pub use parents::*;

mod breed;
mod parents;
