pub mod config;
pub mod preference;
pub mod task;

pub use config::*;
pub use preference::*;
pub use task::*;
