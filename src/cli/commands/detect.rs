//! Detect command implementation

use crate::cli::{read_input, write_output};
use crate::deidentification::DetectedSpan;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the detect command
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Input file (defaults to stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Emit spans as a JSON array
    #[arg(long)]
    pub json: bool,
}

impl DetectArgs {
    /// Execute the detect command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let engine = match super::build_engine(config_path) {
            Ok(engine) => engine,
            Err(code) => return Ok(code),
        };

        let text = read_input(self.input.as_ref())?;
        let spans = engine.detect(&text);
        tracing::info!(detections = spans.len(), "Detection finished");

        let rendered = if self.json {
            let mut json = serde_json::to_string_pretty(&spans)?;
            json.push('\n');
            json
        } else {
            format_table(&spans)
        };

        write_output(None, &rendered)?;
        Ok(0)
    }
}

fn format_table(spans: &[DetectedSpan]) -> String {
    if spans.is_empty() {
        return "No PHI detected\n".to_string();
    }

    let mut output = format!(
        "{:<8} {:>7} {:>7} {:>6}  {}\n",
        "CATEGORY", "START", "END", "CONF", "VALUE"
    );
    for span in spans {
        output.push_str(&format!(
            "{:<8} {:>7} {:>7} {:>6.2}  {}\n",
            span.category.label(),
            span.start,
            span.end,
            span.confidence,
            span.value.escape_debug()
        ));
    }
    output
}
