use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Parse a program listing into bytes.
///
/// One byte per line: eight binary digits (`10000010`) or a hex literal
/// (`0x82`). `#` starts a comment; blank lines are skipped. Anything after
/// the byte on the same line is ignored.
pub fn parse_listing(source: &str) -> Result<Vec<u8>> {
    let mut program = Vec::new();
    for (num, line) in source.lines().enumerate() {
        let text = match line.find('#') {
            Some(i) => &line[..i],
            None => line,
        };
        let Some(token) = text.split_whitespace().next() else {
            continue;
        };
        let byte = if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X"))
        {
            u8::from_str_radix(hex, 16)
        } else {
            u8::from_str_radix(token, 2)
        }
        .with_context(|| format!("line {}: invalid byte literal {token:?}", num + 1))?;
        program.push(byte);
    }
    if program.is_empty() {
        bail!("program contains no instructions");
    }
    Ok(program)
}

/// Read and parse a listing file.
pub fn load_file(path: &Path) -> Result<Vec<u8>> {
    let source =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_listing(&source).with_context(|| format!("parsing {}", path.display()))
}
