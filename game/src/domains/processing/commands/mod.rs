pub use collect::*;
pub use create_batch::*;
pub use start_curing::*;
pub use start_drying::*;
pub use upgrade_station::*;

mod collect;
mod create_batch;
mod start_curing;
mod start_drying;
mod upgrade_station;
