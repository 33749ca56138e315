//! Delimited text to header plus rows.

use serde::Serialize;

use cloudbox_core::AppResult;

/// A parsed spreadsheet preview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    /// Cells of the first record.
    pub headers: Vec<String>,
    /// Remaining records. Rows may be shorter or longer than the header.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse comma-separated text.
    pub fn parse(content: &str) -> AppResult<Self> {
        Self::parse_with_delimiter(content, b',')
    }

    /// Parse delimited text.
    ///
    /// Quoted fields may contain the delimiter, newlines, and doubled
    /// quotes. Cells are trimmed and records whose cells are all blank are
    /// skipped. The first remaining record is the header.
    pub fn parse_with_delimiter(content: &str, delimiter: u8) -> AppResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        let mut records = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            records.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }

        let mut records = records.into_iter();
        let headers = records.next().unwrap_or_default();
        Ok(Self {
            headers,
            rows: records.collect(),
        })
    }

    /// Whether nothing was parsed.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Widest record, header included.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }
}
