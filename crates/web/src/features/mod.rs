pub mod lifters;
pub mod results;
