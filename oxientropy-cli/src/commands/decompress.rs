//! Decompress command implementation.

use crate::utils::{Report, codec_for_format, create_spinner};
use oxientropy_core::format::Format;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Seek, SeekFrom};
use std::path::Path;
use std::time::Instant;
use tracing::debug;

pub fn cmd_decompress(
    input: &Path,
    output: &Path,
    strict: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut reader = BufReader::new(File::open(input)?);
    let input_bytes = fs::metadata(input)?.len();

    // Detect format
    let (format, magic) = Format::detect(&mut reader)?;
    reader.seek(SeekFrom::Start(0))?;
    let codec = codec_for_format(format, strict)
        .ok_or_else(|| format!("Unrecognized container format (magic {:02X?})", magic))?;
    debug!(input = %input.display(), %format, strict, "detected container");

    let spinner = create_spinner(format!("Decompressing {}", format), !json);
    let start = Instant::now();

    // Partial output is kept on failure so a truncated payload still
    // yields everything decoded before the cut
    let mut writer = BufWriter::new(File::create(output)?);
    let result = codec.decompress_to(&mut reader, &mut writer);
    spinner.finish_and_clear();
    let stats = result?;

    let mut report = Report::new("decompress", codec.name(), input, output);
    report.input_bytes = input_bytes;
    report.output_bytes = stats.original_size;
    report.ratio_percent = stats.ratio_percent();
    report.finish(start).print(json)?;

    Ok(())
}
