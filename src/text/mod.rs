//! Rich text handling
//!
//! Host paragraphs and the emphasis placeholder codec. Nothing here knows
//! about grids or clues.
//!
//! ## Modules
//!
//! - `paragraph`: Paragraph text plus italic runs, as handed over by the host
//! - `emphasis`: Placeholder tokens for italic runs and their XML substitution

pub mod emphasis;
pub mod paragraph;

// Re-exports for convenience
pub use emphasis::{
    clue_markup_to_emphasis, decode_emphasis, emphasis_to_clue_markup, emphasis_to_markup,
    encode_emphasis, strip_emphasis, CharacterStyleProvider, NoEmphasis, EMPHASIS_END,
    EMPHASIS_START,
};
pub use paragraph::{EmphasisSpan, Paragraph, StyledParagraph};
