//! Import operations for the WASM API
//!
//! Rebuild-direction entry points: `.puz` bytes in, host puzzle object or
//! editable paragraphs out.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{conversion_error, serialize};
use crate::converters::{AcrossLiteCodec, PuzzleCodec, PuzzleData};
use crate::renderers::puzzle_to_paragraphs;
use crate::{wasm_info, wasm_log};

/// Decode `.puz` bytes into the host puzzle object
#[wasm_bindgen(js_name = getPuz)]
pub fn get_puz(bytes: &[u8]) -> Result<JsValue, JsValue> {
    wasm_info!("getPuz called with {} bytes", bytes.len());

    let puzzle = AcrossLiteCodec
        .decode(bytes)
        .map_err(|e| conversion_error("Could not read .puz file", e))?;
    wasm_log!("  Decoded {:?}: {} clues", puzzle.title, puzzle.clues.len());

    serialize(&PuzzleData::from(&puzzle), "Failed to serialize puzzle")
}

/// Rebuild an editable transcription from `.puz` bytes
///
/// # Returns
/// Array of `{ text, emphasis: [{ start, end }] }` paragraphs, offsets in
/// UTF-16 code units
#[wasm_bindgen(js_name = rebuildDocument)]
pub fn rebuild_document(bytes: &[u8]) -> Result<js_sys::Array, JsValue> {
    wasm_info!("rebuildDocument called with {} bytes", bytes.len());

    let puzzle = AcrossLiteCodec
        .decode(bytes)
        .map_err(|e| conversion_error("Could not read .puz file", e))?;

    let result = js_sys::Array::new();
    for paragraph in puzzle_to_paragraphs(&puzzle) {
        result.push(&serialize(&paragraph.char_spans_to_utf16(), "Failed to serialize paragraph")?);
    }

    wasm_info!("  Rebuilt {} paragraphs", result.length());
    Ok(result)
}
