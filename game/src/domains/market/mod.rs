pub use commands::*;
pub use domain::*;
pub use queries::*;
pub use update::*;

mod commands;
mod domain;
mod loading;
mod queries;
mod update;
