pub mod attempt;
pub mod decimal;
pub mod iwf_name;
pub mod lifter;
pub mod result;

pub use attempt::{AttemptOutcome, made_count};
pub use decimal::SqliteDecimal;
pub use iwf_name::{IwfName, to_iwf_name};
pub use lifter::Lifter;
pub use result::CompetitionResult;
