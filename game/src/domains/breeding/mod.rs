pub use commands::*;
pub use domain::*;
pub use genetics::*;

mod commands;
mod domain;
mod genetics;
mod loading;
