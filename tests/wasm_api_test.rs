//! JavaScript-facing API tests
//!
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use crossword_wasm::api::{build_puz, build_xml, generate_puzzle_json, get_puz, make_puz, rebuild_document};
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn paragraphs() -> JsValue {
    let lines = [
        "Tiny",
        "Someone",
        "A B",
        "C .",
        "1A\tABX\tTop row",
        "3A\tCXX\tBottom left",
        "1D\tACX\tLeft column",
        "2D\tBXX\tRight column",
    ];
    let array = js_sys::Array::new();
    for line in lines {
        array.push(&JsValue::from_str(line));
    }
    array.into()
}

#[wasm_bindgen_test]
fn test_build_puz_then_rebuild() {
    let bytes = build_puz(paragraphs(), JsValue::NULL).unwrap().to_vec();
    let rebuilt = rebuild_document(&bytes).unwrap();

    assert_eq!(rebuilt.length(), 10);
    let first = js_sys::Reflect::get(&rebuilt.get(0), &JsValue::from_str("text")).unwrap();
    assert_eq!(first.as_string().as_deref(), Some("Tiny"));
}

#[wasm_bindgen_test]
fn test_get_puz_then_make_puz() {
    let bytes = build_puz(paragraphs(), JsValue::UNDEFINED).unwrap().to_vec();
    let puzzle = get_puz(&bytes).unwrap();

    let clues = js_sys::Reflect::get(&puzzle, &JsValue::from_str("clues")).unwrap();
    let across = js_sys::Reflect::get(&clues, &JsValue::from_str("across")).unwrap();
    let top = js_sys::Reflect::get(&across, &JsValue::from_str("1")).unwrap();
    assert_eq!(top.as_string().as_deref(), Some("Top row"));

    let again = make_puz(puzzle).unwrap().to_vec();
    assert_eq!(again, bytes);
}

#[wasm_bindgen_test]
fn test_build_xml_with_settings() {
    let settings = js_sys::Object::new();
    js_sys::Reflect::set(&settings, &JsValue::from_str("acrossHeading"), &JsValue::from_str("Horizontal")).unwrap();

    let xml = build_xml(paragraphs(), settings.into()).unwrap();
    assert!(xml.contains("<b>Horizontal</b>"));
}

#[wasm_bindgen_test]
fn test_validation_error_reaches_javascript() {
    let array: js_sys::Array = paragraphs().unchecked_into();
    array.pop();

    let err = generate_puzzle_json(array.into(), JsValue::NULL).unwrap_err();
    let message = err.as_string().unwrap();
    assert!(message.contains("Too few Down clues"));
}
