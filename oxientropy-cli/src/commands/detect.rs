//! Detect command implementation.

use oxientropy_core::format::Format;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn cmd_detect(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let f = File::open(file)?;
    let mut reader = BufReader::new(f);

    let (format, magic) = Format::detect(&mut reader)?;

    println!("File: {}", file.display());
    println!("Format: {}", format);
    if format != Format::Unknown {
        println!("Extension: .{}", format.extension());
    }
    println!("Magic bytes: {:02X?}", magic);

    Ok(())
}
