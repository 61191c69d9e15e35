//! Image metadata probe
//!
//! Extracts structural metadata (dimensions, format, byte size) from a blob.
//! Opaque or non-image blobs degrade to the default metadata record rather
//! than failing the pipeline.

use std::io::Cursor;

use image::io::Reader as ImageReader;

use crate::error::{AnalysisError, Result};
use crate::types::ObjectMetadata;

/// Probe a blob for image metadata
///
/// Guesses the format from the leading bytes and reads dimensions from the
/// header without decoding pixel data. Fails when the blob is not a
/// recognizable image.
pub fn probe(blob: &[u8]) -> Result<ObjectMetadata> {
    let reader = ImageReader::new(Cursor::new(blob)).with_guessed_format()?;

    let format = reader
        .format()
        .ok_or_else(|| AnalysisError::UnreadableImage("unrecognized format".into()))?;

    let (width, height) = reader.into_dimensions()?;

    let format_name = format
        .extensions_str()
        .first()
        .map(|ext| ext.to_string())
        .unwrap_or_default();

    Ok(ObjectMetadata {
        width,
        height,
        format: format_name,
        byte_size: blob.len(),
    })
}

/// Probe a blob, degrading to the unknown record on any failure
///
/// This is the pipeline entry point: scoring must keep going on synthetic or
/// corrupt blobs, so probe failures are absorbed here.
pub fn probe_or_default(blob: &[u8]) -> ObjectMetadata {
    probe(blob).unwrap_or_else(|_| ObjectMetadata::unknown())
}
