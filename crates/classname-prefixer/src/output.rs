//! Report formatting.

use crate::cli::OutputFormat;
use camino::Utf8PathBuf;
use classname_transformer::{RewriteEvent, SkippedShape};
use serde::Serialize;

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Rewritten,
    Unchanged,
    Failed,
}

/// The outcome of one file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// The input path.
    pub path: Utf8PathBuf,
    pub status: FileStatus,
    /// Rewritten literals, in source order.
    pub rewrites: Vec<RewriteEvent>,
    /// Values left alone because their shape is not interpreted.
    pub skipped: Vec<SkippedShape>,
    /// Why the file failed, if it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    pub fn failed(path: Utf8PathBuf, error: impl ToString) -> Self {
        Self {
            path,
            status: FileStatus::Failed,
            rewrites: Vec::new(),
            skipped: Vec::new(),
            error: Some(error.to_string()),
        }
    }
}

/// Totals across a run.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of files processed.
    pub file_count: usize,
    /// Number of files whose output differs from the input.
    pub changed_count: usize,
    /// Number of rewritten literals.
    pub rewrite_count: usize,
    /// Number of values left alone.
    pub skipped_count: usize,
    /// Number of files that could not be transformed.
    pub failed_count: usize,
}

impl RunSummary {
    pub fn from_reports(reports: &[FileReport]) -> Self {
        reports.iter().fold(Self::default(), |mut summary, report| {
            summary.file_count += 1;
            summary.rewrite_count += report.rewrites.len();
            summary.skipped_count += report.skipped.len();
            match report.status {
                FileStatus::Rewritten => summary.changed_count += 1,
                FileStatus::Failed => summary.failed_count += 1,
                FileStatus::Unchanged => {}
            }
            summary
        })
    }

    /// Formats the summary line.
    pub fn format(&self) -> String {
        format!(
            "classname-prefixer rewrote {} {} in {} of {} {} ({} skipped, {} failed)",
            self.rewrite_count,
            plural(self.rewrite_count, "literal", "literals"),
            self.changed_count,
            self.file_count,
            plural(self.file_count, "file", "files"),
            self.skipped_count,
            self.failed_count
        )
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    files: &'a [FileReport],
    summary: &'a RunSummary,
}

/// Formats run reports for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats every file report followed by the summary.
    pub fn format(&self, reports: &[FileReport], summary: &RunSummary) -> String {
        match self.format {
            OutputFormat::Human => Self::format_human(reports, summary),
            OutputFormat::Json => {
                serde_json::to_string_pretty(&JsonReport {
                    files: reports,
                    summary,
                })
                .unwrap_or_default()
            }
        }
    }

    fn format_human(reports: &[FileReport], summary: &RunSummary) -> String {
        let mut output = String::new();

        for report in reports {
            match report.status {
                FileStatus::Failed => {
                    output.push_str(&format!(
                        "{}\nError: {}\n\n",
                        report.path,
                        report.error.as_deref().unwrap_or("unknown error")
                    ));
                }
                FileStatus::Rewritten => {
                    output.push_str(&format!("{}\n", report.path));
                    for event in &report.rewrites {
                        output.push_str(&format!("  {}: {}\n", event.line, event));
                    }
                    for shape in &report.skipped {
                        output.push_str(&format!("  {}: skipped {}\n", shape.line, shape.kind));
                    }
                    output.push('\n');
                }
                FileStatus::Unchanged => {}
            }
        }

        output.push_str(&summary.format());
        output
    }
}
