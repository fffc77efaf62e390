pub mod lifter;
pub mod results;
