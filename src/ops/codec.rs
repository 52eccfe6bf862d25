use std::fs::File;
use std::io;
use std::path::Path;

use crate::command::CommandError;
use crate::ops::fs::ensure_exists;

const STREAM_BUF: usize = 4096;

// Standard Brotli stream, no custom framing; output stays readable by any
// conforming decoder.
const QUALITY: u32 = 11;
const LG_WINDOW: u32 = 22;

/// Streams the source file through a Brotli encoder into the destination.
pub fn compress(src: &Path, dst: &Path) -> Result<(), CommandError> {
    ensure_exists(src)?;
    let input = File::open(src)?;
    let mut output = File::create(dst)?;
    let mut encoder = brotli::CompressorReader::new(input, STREAM_BUF, QUALITY, LG_WINDOW);
    io::copy(&mut encoder, &mut output)?;
    Ok(())
}

/// Streams the source file through a Brotli decoder into the destination.
pub fn decompress(src: &Path, dst: &Path) -> Result<(), CommandError> {
    ensure_exists(src)?;
    let input = File::open(src)?;
    let mut output = File::create(dst)?;
    let mut decoder = brotli::Decompressor::new(input, STREAM_BUF);
    io::copy(&mut decoder, &mut output)?;
    Ok(())
}
