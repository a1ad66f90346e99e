//! Export operations for the WASM API
//!
//! Build-direction entry points: transcription paragraphs in, `.puz` bytes,
//! XML or inspection JSON out. Also `makePuz`, the raw codec over the host
//! puzzle object.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{conversion_error, deserialize, settings_from_js};
use crate::api::types::HostParagraph;
use crate::converters::{build_puzzle, AcrossLiteCodec, PuzzleCodec, PuzzleData};
use crate::models::Puzzle;
use crate::settings::ConversionSettings;
use crate::text::Paragraph;
use crate::{wasm_error, wasm_info, wasm_log};

fn paragraphs_from_js(value: JsValue) -> Result<Vec<Paragraph>, JsValue> {
    let paragraphs: Vec<HostParagraph> = deserialize(value, "Invalid paragraphs")?;
    Ok(paragraphs.into_iter().map(Paragraph::from).collect())
}

fn build(paragraphs: JsValue, settings: JsValue) -> Result<(Puzzle, ConversionSettings), JsValue> {
    let paragraphs = paragraphs_from_js(paragraphs)?;
    let settings = settings_from_js(settings)?;
    wasm_log!("  {} paragraphs, strict={}", paragraphs.len(), settings.strict);

    let puzzle = build_puzzle(&paragraphs, &settings)
        .map_err(|e| conversion_error("Puzzle validation failed", e))?;
    wasm_log!(
        "  Built {}x{} grid with {} clues",
        puzzle.width(),
        puzzle.height(),
        puzzle.clues.len()
    );
    Ok((puzzle, settings))
}

// ============================================================================
// .puz Export
// ============================================================================

/// Build a `.puz` file from transcription paragraphs
///
/// # Parameters
/// - `paragraphs`: array of strings or `{ text, emphasis }` objects; emphasis
///   offsets count UTF-16 code units
/// - `settings`: conversion settings, or null for defaults
///
/// # Returns
/// Across Lite file bytes as Uint8Array
#[wasm_bindgen(js_name = buildPuz)]
pub fn build_puz(paragraphs: JsValue, settings: JsValue) -> Result<js_sys::Uint8Array, JsValue> {
    wasm_info!("buildPuz called");

    let (puzzle, _) = build(paragraphs, settings)?;
    let bytes = AcrossLiteCodec
        .encode(&puzzle)
        .map_err(|e| conversion_error(".puz export error", e))?;

    wasm_info!("  .puz generated: {} bytes", bytes.len());
    Ok(js_sys::Uint8Array::from(bytes.as_slice()))
}

/// Encode a host puzzle object as `.puz` bytes
///
/// The object is validated exactly like a transcription before encoding.
#[wasm_bindgen(js_name = makePuz)]
pub fn make_puz(puzzle: JsValue) -> Result<js_sys::Uint8Array, JsValue> {
    wasm_info!("makePuz called");

    let data: PuzzleData = deserialize(puzzle, "Invalid puzzle object")?;
    let puzzle = Puzzle::try_from(data).map_err(|e| conversion_error("Puzzle validation failed", e))?;
    let bytes = AcrossLiteCodec
        .encode(&puzzle)
        .map_err(|e| conversion_error(".puz export error", e))?;

    wasm_info!("  .puz generated: {} bytes", bytes.len());
    Ok(js_sys::Uint8Array::from(bytes.as_slice()))
}

// ============================================================================
// XML Export
// ============================================================================

/// Build the crossword XML document from transcription paragraphs
#[wasm_bindgen(js_name = buildXml)]
pub fn build_xml(paragraphs: JsValue, settings: JsValue) -> Result<String, JsValue> {
    wasm_info!("buildXml called");

    let (puzzle, settings) = build(paragraphs, settings)?;
    let xml = crate::renderers::to_puzzle_xml(&puzzle, &settings)
        .map_err(|e| conversion_error("XML export error", e))?;

    wasm_info!("  XML generated: {} bytes", xml.len());
    Ok(xml)
}

// ============================================================================
// Inspection
// ============================================================================

/// Validated puzzle as pretty-printed JSON, for debugging transcriptions
#[wasm_bindgen(js_name = generatePuzzleJson)]
pub fn generate_puzzle_json(paragraphs: JsValue, settings: JsValue) -> Result<String, JsValue> {
    wasm_info!("generatePuzzleJson called");

    let (puzzle, _) = build(paragraphs, settings)?;
    let json = serde_json::to_string_pretty(&puzzle).map_err(|e| {
        wasm_error!("JSON serialization error: {}", e);
        JsValue::from_str(&format!("JSON serialization error: {}", e))
    })?;

    wasm_info!("  Puzzle JSON generated: {} bytes", json.len());
    Ok(json)
}
