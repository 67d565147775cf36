//! Flat CSV export.
use std::path::Path;

use crate::error::Error;
use crate::sampling::SampledItem;

/// Writes the selection as a two-column CSV, one row per item in selection
/// order, with a `text,predicted_label` header.
pub struct CsvWriter;

impl CsvWriter {
    pub fn write(dst: &Path, items: &[SampledItem]) -> Result<(), Error> {
        let mut writer = csv::Writer::from_path(dst)?;

        writer.write_record(["text", "predicted_label"])?;
        for item in items {
            writer.write_record([item.text(), item.category().label()])?;
        }
        writer.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::CsvWriter;
    use crate::labels::Category;
    use crate::sampling::SampledItem;
    use crate::sources::ClassifiedPost;

    fn items() -> Vec<SampledItem> {
        vec![
            SampledItem::from(&ClassifiedPost::new(
                0,
                "Wildfire spreads in hills".to_string(),
                Category::Fire,
            )),
            SampledItem::from(&ClassifiedPost::new(
                1,
                "storm, hail, chaos".to_string(),
                Category::SevereStorm,
            )),
        ]
    }

    #[test]
    fn rows_in_selection_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        CsvWriter::write(&path, &items()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("text,predicted_label"));
        assert_eq!(lines.next(), Some("Wildfire spreads in hills,fire"));
        // commas in text get quoted by the csv writer
        assert_eq!(lines.next(), Some("\"storm, hail, chaos\",severe_storm"));
        assert_eq!(lines.next(), None);
    }
}
