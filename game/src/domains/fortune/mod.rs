pub use domain::*;
pub use update::*;

mod domain;
mod update;
