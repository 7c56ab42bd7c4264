//! Deidentify command implementation

use crate::cli::{read_input, write_output};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the deidentify command
#[derive(Args, Debug)]
pub struct DeidentifyArgs {
    /// Input file (defaults to stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Treat every line as a separate record and process them concurrently
    #[arg(long)]
    pub per_line: bool,

    /// Print a scan report to stderr
    #[arg(long)]
    pub report: bool,

    /// Write the scan report as JSON to this file
    #[arg(long, value_name = "FILE")]
    pub report_json: Option<PathBuf>,
}

impl DeidentifyArgs {
    /// Execute the deidentify command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let engine = match super::build_engine(config_path) {
            Ok(engine) => engine,
            Err(code) => return Ok(code),
        };

        let text = read_input(self.input.as_ref())?;
        let records = split_records(&text, self.per_line);
        tracing::info!(records = records.len(), "De-identifying input");

        let (results, report) = engine.deidentify_batch_with_report(records).await?;

        let scrubbed: Vec<&str> = results.iter().map(|r| r.text.as_str()).collect();
        write_output(self.output.as_ref(), &scrubbed.join("\n"))?;

        if self.report {
            eprint!("{}", report.format_console());
        }

        if let Some(ref path) = self.report_json {
            std::fs::write(path, report.format_json()?)?;
            tracing::info!(path = %path.display(), "Scan report written");
        }

        Ok(0)
    }
}

fn split_records(text: &str, per_line: bool) -> Vec<String> {
    if per_line {
        text.split('\n').map(str::to_string).collect()
    } else {
        vec![text.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_records_whole_text() {
        assert_eq!(split_records("a\nb\n", false), vec!["a\nb\n".to_string()]);
    }

    #[test]
    fn test_split_records_per_line_round_trips_newlines() {
        let text = "a\nb\n";
        let records = split_records(text, true);
        assert_eq!(records, vec!["a", "b", ""]);
        assert_eq!(records.join("\n"), text);
    }
}
