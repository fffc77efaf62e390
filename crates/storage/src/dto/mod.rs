pub mod common;
pub mod lifter;
pub mod results;
