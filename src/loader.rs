//! Program loading: one 8-bit binary literal per line, `#` starts a
//! comment, blank and comment-only lines are skipped. Bytes land at
//! consecutive addresses starting from 0.

use std::fs;
use std::path::Path;

use crate::{Result, VmError};

/// Parse program text into a byte image.
pub fn parse_program(source: &str) -> Result<Vec<u8>> {
    let mut image = Vec::new();
    for (index, line) in source.lines().enumerate() {
        let text = line.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }
        let byte = u8::from_str_radix(text, 2).map_err(|_| VmError::InvalidProgramLine {
            line: index + 1,
            text: text.to_string(),
        })?;
        image.push(byte);
    }
    Ok(image)
}

/// Read and parse a program file.
pub fn read_program(path: &Path) -> Result<Vec<u8>> {
    let source = fs::read_to_string(path)?;
    parse_program(&source)
}
