//! CSV output format.

use std::borrow::Cow;
use std::io::Write;

use crate::{FormatError, Formatter, NamedSeries};

/// CSV formatter.
///
/// Writes one `field,date,value` row per point, series after series.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Quotes a value that contains the delimiter, a quote or a line break.
    fn escape<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if value.contains([self.delimiter, '"', '\n', '\r']) {
            Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
        } else {
            Cow::Borrowed(value)
        }
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for CsvFormatter {
    fn write_series<W: Write + Send>(
        &self,
        series: &[NamedSeries<'_>],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "field{d}date{d}value")?;
        }

        for named in series {
            let field = self.escape(named.field);
            for point in named.points {
                writeln!(
                    writer,
                    "{field}{d}{}{d}{}",
                    point.date.format("%Y-%m-%dT%H:%M:%SZ"),
                    point.value
                )?;
            }
        }

        Ok(())
    }
}
