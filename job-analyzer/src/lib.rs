pub mod report;
pub mod stats;

pub use report::{table_data, AsciiTable};
pub use stats::{analyze, average_salary, LanguageStats, SalaryAverage};
