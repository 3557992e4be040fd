//! Calendar partitioning of a month into Monday-first weeks.

pub mod error;
pub mod partition;
pub mod types;

#[cfg(test)]
mod props;

pub use error::CalendarError;
pub use partition::{days_in_month, partition_month};
pub use types::{DAYS_PER_WEEK, Month, Week};
