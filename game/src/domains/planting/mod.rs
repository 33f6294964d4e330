pub use commands::*;
pub use domain::*;
pub use queries::*;
pub use update::*;
pub use yields::*;

mod commands;
mod domain;
mod loading;
mod queries;
mod update;
mod yields;
