pub use care_plant::*;
pub use create_plant::*;
pub use harvest_plant::*;
pub use remove_plant::*;
pub use settings::*;
pub use slots::*;
pub use upgrade_plant::*;

mod care_plant;
mod create_plant;
mod harvest_plant;
mod remove_plant;
mod settings;
mod slots;
mod upgrade_plant;
