//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use oxientropy_arith::{ArithmeticCodec, DecodeConfig};
use oxientropy_core::format::Format;
use oxientropy_core::traits::Codec;
use oxientropy_huffman::HuffmanCodec;
use serde::Serialize;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;

/// Create a spinner with standard styling.
///
/// Returns a hidden spinner when `enable` is false so callers need not
/// branch on it.
pub fn create_spinner(message: impl Into<String>, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg} [{elapsed_precise}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// The codec that reads containers of `format`, if any.
pub fn codec_for_format(format: Format, strict: bool) -> Option<Box<dyn Codec>> {
    match format {
        Format::Arithmetic => Some(Box::new(ArithmeticCodec::with_config(
            DecodeConfig::new(strict),
        ))),
        Format::Huffman => Some(Box::new(HuffmanCodec::new())),
        Format::Unknown => None,
    }
}

/// Outcome of a compress or decompress run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// "compress" or "decompress".
    pub operation: &'static str,
    /// Codec name.
    pub codec: &'static str,
    /// Input path.
    pub input: String,
    /// Output path.
    pub output: String,
    /// Bytes read.
    pub input_bytes: u64,
    /// Bytes written.
    pub output_bytes: u64,
    /// Space saving of the container relative to the raw data.
    pub ratio_percent: f64,
    /// Wall-clock time of the coding step.
    pub elapsed_ms: f64,
}

impl Report {
    /// Start a report for `input` -> `output`.
    pub fn new(operation: &'static str, codec: &'static str, input: &Path, output: &Path) -> Self {
        Self {
            operation,
            codec,
            input: input.display().to_string(),
            output: output.display().to_string(),
            input_bytes: 0,
            output_bytes: 0,
            ratio_percent: 0.0,
            elapsed_ms: 0.0,
        }
    }

    /// Record elapsed time since `start`.
    pub fn finish(mut self, start: Instant) -> Self {
        self.elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        self
    }

    /// Emit the report as a log event and on stdout.
    pub fn print(&self, json: bool) -> Result<(), serde_json::Error> {
        info!(
            operation = self.operation,
            codec = self.codec,
            input_bytes = self.input_bytes,
            output_bytes = self.output_bytes,
            ratio_percent = self.ratio_percent,
            elapsed_ms = self.elapsed_ms,
            "{} complete",
            self.operation
        );

        if json {
            println!("{}", serde_json::to_string_pretty(self)?);
            return Ok(());
        }

        match self.operation {
            "compress" => println!("Encoded OK ({})", self.codec),
            _ => println!("Decoded OK ({})", self.codec),
        }
        println!("Input:  {} bytes", self.input_bytes);
        println!("Output: {} bytes", self.output_bytes);
        println!("Compression: {:.2}%", self.ratio_percent);
        println!("Time: {:.3} ms", self.elapsed_ms);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_for_format() {
        assert_eq!(
            codec_for_format(Format::Arithmetic, false).map(|c| c.name()),
            Some("arithmetic")
        );
        assert_eq!(
            codec_for_format(Format::Huffman, true).map(|c| c.name()),
            Some("huffman")
        );
        assert!(codec_for_format(Format::Unknown, false).is_none());
    }

    #[test]
    fn test_report_json_fields() {
        let mut report = Report::new(
            "compress",
            "huffman",
            Path::new("in.txt"),
            Path::new("out.huf"),
        );
        report.input_bytes = 100;
        report.output_bytes = 40;
        report.ratio_percent = 60.0;

        let value: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["operation"], "compress");
        assert_eq!(value["codec"], "huffman");
        assert_eq!(value["input"], "in.txt");
        assert_eq!(value["input_bytes"], 100);
        assert_eq!(value["output_bytes"], 40);
        assert_eq!(value["ratio_percent"], 60.0);
    }

    #[test]
    fn test_hidden_spinner() {
        let pb = create_spinner("working", false);
        assert!(pb.is_hidden());
        pb.finish_and_clear();
    }
}
