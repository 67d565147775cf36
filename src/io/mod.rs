/*! Dataset exports.

The final selection is written twice: a flat CSV for spreadsheets/backup and
a Label Studio task file for annotation. Both contain the same items in the
same order.
!*/
pub mod writer;

pub use writer::CsvWriter;
pub use writer::TaskWriter;
