//! Delimited-text record sink writing into a capability-scoped directory.

use crate::report::domain::{REPORT_HEADER, StageRow};
use crate::report::ports::{RecordSink, RecordSinkError, RecordSinkResult, ReportArtifact};
use async_trait::async_trait;
use cap_std::fs_utf8::Dir;

/// Record sink producing plain delimited text, one record per row.
///
/// The directory handle scopes all writes: the sink can never touch a path
/// outside it. The output is plain delimited text, not quoted CSV; cell
/// values are sanitized so the delimiter and line breaks cannot corrupt the
/// record structure.
pub struct DelimitedFileSink {
    dir: Dir,
    delimiter: char,
}

impl DelimitedFileSink {
    /// Creates a sink writing into the given directory with the given field
    /// delimiter.
    #[must_use]
    pub const fn new(dir: Dir, delimiter: char) -> Self {
        Self { dir, delimiter }
    }

    fn render(&self, rows: &[StageRow]) -> String {
        let mut out = String::new();
        self.push_record(&mut out, REPORT_HEADER.map(str::to_owned));
        for row in rows {
            self.push_record(&mut out, row.cells());
        }
        out
    }

    fn push_record(&self, out: &mut String, cells: [String; 8]) {
        let mut first = true;
        for cell in cells {
            if !first {
                out.push(self.delimiter);
            }
            first = false;
            out.push_str(&sanitize(&cell, self.delimiter));
        }
        out.push('\n');
    }
}

fn sanitize(cell: &str, delimiter: char) -> String {
    cell.chars()
        .map(|ch| {
            if ch == delimiter || ch == '\n' || ch == '\r' {
                ' '
            } else {
                ch
            }
        })
        .collect()
}

#[async_trait]
impl RecordSink for DelimitedFileSink {
    async fn write_rows(
        &self,
        artifact_name: &str,
        rows: &[StageRow],
    ) -> RecordSinkResult<ReportArtifact> {
        let content = self.render(rows);
        self.dir
            .write(artifact_name, content)
            .map_err(RecordSinkError::write)?;
        Ok(ReportArtifact::new(artifact_name, artifact_name, rows.len()))
    }
}
