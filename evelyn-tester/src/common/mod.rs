pub mod scenario;
pub mod util;

pub use util::{csv_field, report_timestamp, split_csv};
