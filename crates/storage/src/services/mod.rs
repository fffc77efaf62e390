pub mod name_resolver;
pub mod results_aggregator;

pub use name_resolver::resolve;
pub use results_aggregator::aggregate;
