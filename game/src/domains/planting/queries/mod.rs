pub use get_plant::*;
pub use needy_plants::*;

mod get_plant;
mod needy_plants;
