//! 12-month payment schedule and CSV export

mod generator;
pub mod export;

pub use generator::{generate, SchedulePeriod, SCHEDULE_PERIODS};
pub use export::{export_schedule, schedule_file_name, write_schedule, ScheduleRow};
