/*! Export writers. !*/
mod csvwriter;
mod taskwriter;

pub use csvwriter::CsvWriter;
pub use taskwriter::tasks_for;
pub use taskwriter::Task;
pub use taskwriter::TaskWriter;
