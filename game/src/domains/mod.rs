pub mod breeding;
pub mod economy;
pub mod fortune;
pub mod inventory;
pub mod market;
pub mod planting;
pub mod processing;
pub mod progress;
pub mod staffing;
pub mod timing;
