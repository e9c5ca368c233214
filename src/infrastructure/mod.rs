pub mod preview;
pub mod scheduler;
pub mod utils;
