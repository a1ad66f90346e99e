//! Crossword converter WASM API
//!
//! JavaScript-facing functions. Every call is a pure conversion: values come
//! in, a complete result or an error string goes out.
//!
//! # Module Structure
//!
//! - `helpers`: Console logging, serialization and error mapping
//! - `types`: Host-side value shapes
//! - `export`: `buildPuz`, `buildXml`, `makePuz`, `generatePuzzleJson`
//! - `import`: `getPuz`, `rebuildDocument`

pub mod helpers;
pub mod types;
pub mod export;
pub mod import;

pub use export::{build_puz, build_xml, generate_puzzle_json, make_puz};
pub use import::{get_puz, rebuild_document};
