//! Info command implementation.

use oxientropy_arith::ArithHeader;
use oxientropy_core::format::Format;
use oxientropy_huffman::{HuffmanHeader, HuffmanTree};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, Seek, SeekFrom};
use std::path::Path;

/// Header summary of a container.
#[derive(Debug, Serialize)]
struct ContainerInfo {
    file: String,
    format: String,
    file_bytes: u64,
    original_size: u64,
    distinct_symbols: u32,
    header_bytes: u64,
    payload_bytes: u64,
    /// Declared by the range coder container only.
    #[serde(skip_serializing_if = "Option::is_none")]
    encoded_bits: Option<u64>,
    /// Longest Huffman code.
    #[serde(skip_serializing_if = "Option::is_none")]
    max_code_len: Option<usize>,
}

impl ContainerInfo {
    fn bits_per_symbol(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        self.payload_bytes as f64 * 8.0 / self.original_size as f64
    }
}

pub fn cmd_info(file: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut reader = BufReader::new(File::open(file)?);
    let file_bytes = fs::metadata(file)?.len();

    let (format, _) = Format::detect(&mut reader)?;
    reader.seek(SeekFrom::Start(0))?;

    let info = match format {
        Format::Arithmetic => {
            let header = ArithHeader::read(&mut reader)?;
            ContainerInfo {
                file: file.display().to_string(),
                format: format.to_string(),
                file_bytes,
                original_size: header.original_size as u64,
                distinct_symbols: header.frequencies.distinct_symbols() as u32,
                header_bytes: oxientropy_arith::HEADER_SIZE,
                payload_bytes: header.payload_len(),
                encoded_bits: Some(header.encoded_bits),
                max_code_len: None,
            }
        }
        Format::Huffman => {
            let header = HuffmanHeader::read(&mut reader)?;
            let tree = HuffmanTree::from_frequencies(&header.frequencies)?;
            ContainerInfo {
                file: file.display().to_string(),
                format: format.to_string(),
                file_bytes,
                original_size: header.original_size,
                distinct_symbols: header.unique_count() as u32,
                header_bytes: header.encoded_len(),
                payload_bytes: file_bytes.saturating_sub(header.encoded_len()),
                encoded_bits: None,
                max_code_len: Some(tree.codes().max_len()),
            }
        }
        Format::Unknown => return Err("Unrecognized container format".into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Container Information");
    println!("=====================");
    println!("File: {}", info.file);
    println!("Format: {}", info.format);
    println!("Size: {} bytes", info.file_bytes);
    println!();
    println!("Header:");
    println!("  Original size: {} bytes", info.original_size);
    println!("  Distinct symbols: {}", info.distinct_symbols);
    println!("  Header size: {} bytes", info.header_bytes);
    println!("  Payload size: {} bytes", info.payload_bytes);
    if let Some(bits) = info.encoded_bits {
        println!("  Encoded bits: {}", bits);
    }
    if let Some(len) = info.max_code_len {
        println!("  Longest code: {} bits", len);
    }
    println!("  Bits per symbol: {:.3}", info.bits_per_symbol());

    Ok(())
}
