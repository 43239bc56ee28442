pub mod console;
pub mod csv_log;
pub mod units;
