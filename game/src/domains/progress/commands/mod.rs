pub use achievements::*;
pub use experience::*;
pub use maintenance::*;
pub use quests::*;
pub use research::*;
pub use upgrades::*;

mod achievements;
mod experience;
mod maintenance;
mod quests;
mod research;
mod upgrades;
