//! Compress command implementation.

use crate::CodecKind;
use crate::utils::{Report, create_spinner};
use oxientropy_arith::ArithmeticCodec;
use oxientropy_core::traits::Codec;
use oxientropy_huffman::HuffmanCodec;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::debug;

impl CodecKind {
    /// Instantiate the selected codec.
    pub fn codec(self) -> Box<dyn Codec> {
        match self {
            Self::Arith => Box::new(ArithmeticCodec::new()),
            Self::Huffman => Box::new(HuffmanCodec::new()),
        }
    }
}

pub fn cmd_compress(
    input: &Path,
    output: &Path,
    codec: CodecKind,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let codec = codec.codec();
    debug!(input = %input.display(), bytes = data.len(), codec = codec.name(), "read input");

    let spinner = create_spinner(format!("Compressing with {}", codec.name()), !json);
    let start = Instant::now();

    let mut writer = BufWriter::new(File::create(output)?);
    let result = codec.compress_to(&data, &mut writer).and_then(|stats| {
        writer.flush()?;
        Ok(stats)
    });
    drop(writer);
    spinner.finish_and_clear();

    let stats = match result {
        Ok(stats) => stats,
        Err(e) => {
            // Leave no partial container behind
            if let Err(remove_err) = fs::remove_file(output) {
                debug!(error = %remove_err, "could not remove partial output");
            }
            return Err(e.into());
        }
    };

    let mut report = Report::new("compress", codec.name(), input, output);
    report.input_bytes = stats.original_size;
    report.output_bytes = stats.compressed_size;
    report.ratio_percent = stats.ratio_percent();
    report.finish(start).print(json)?;

    Ok(())
}
