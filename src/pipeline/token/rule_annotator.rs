use icu::segmenter::WordSegmenter;

use crate::config::pipeline::{AnnotatorConfig, DEFAULT_MAX_LENGTH};
use crate::error::{PipelineError, Result};
use crate::pipeline::token::annotator::{Annotator, Token, TokenStream};
use crate::utils::{is_numeric, is_punctuation, is_stop_word, lemmatize_in_sentence};

// Contraction endings split off after an apostrophe: it's -> it + 's
const CLITICS: &[&str] = &["s", "re", "m", "ve", "ll", "d"];

const SENTENCE_END: &[&str] = &[".", "!", "?", "\u{2026}"];

/// Splits a contraction into stem and clitic. `don't` becomes `do` + `n't`;
/// both ASCII and typographic apostrophes are recognised.
fn split_clitic(segment: &str) -> (&str, Option<&str>) {
    let Some(pos) = segment.rfind(['\'', '\u{2019}']) else {
        return (segment, None);
    };
    let suffix = segment[pos..].chars().skip(1).collect::<String>().to_ascii_lowercase();

    if suffix == "t" && pos >= 2 && segment[..pos].ends_with(['n', 'N']) {
        return (&segment[..pos - 1], Some(&segment[pos - 1..]));
    }
    if pos > 0 && CLITICS.contains(&suffix.as_str()) {
        return (&segment[..pos], Some(&segment[pos..]));
    }
    (segment, None)
}

/// English annotator built on UAX #29 word segmentation, a stop-word list and
/// a rule based lemmatizer.
pub struct RuleAnnotator {
    segmenter: WordSegmenter,
    max_length: usize,
}

impl RuleAnnotator {
    pub fn new(max_length: usize) -> Self {
        RuleAnnotator {
            segmenter: WordSegmenter::new_auto(),
            max_length,
        }
    }

    pub fn from_config(config: &AnnotatorConfig) -> Self {
        RuleAnnotator::new(config.max_length)
    }

    fn annotate_piece(piece: &str, sentence_initial: bool) -> Result<Token> {
        if let Some(ch) = piece.chars().find(|c| matches!(c, '\u{0}' | '\u{FFFD}')) {
            return Err(PipelineError::AnnotationError(format!(
                "Unsupported character U+{:04X} in token {:?}",
                ch as u32, piece
            )));
        }
        Ok(Token {
            text: piece.to_string(),
            lemma: lemmatize_in_sentence(piece, sentence_initial),
            is_stop: is_stop_word(piece),
            is_punct: is_punctuation(piece),
            is_digit: is_numeric(piece),
        })
    }
}

impl Default for RuleAnnotator {
    fn default() -> Self {
        RuleAnnotator::new(DEFAULT_MAX_LENGTH)
    }
}

impl Annotator for RuleAnnotator {
    type Token = Token;

    fn name(&self) -> &'static str {
        "RuleAnnotator"
    }

    fn annotate<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a, Token>> {
        let length = text.chars().count();
        if length > self.max_length {
            return Err(PipelineError::AnnotationError(format!(
                "Text of length {} exceeds maximum of {}",
                length, self.max_length
            )));
        }

        // segment_str() yields break offsets; a segment lies between two consecutive breaks.
        let mut prev_break = 0;
        let segments = self
            .segmenter
            .segment_str(text)
            .filter_map(move |current_break| {
                let segment = text[prev_break..current_break].trim();
                prev_break = current_break;
                (!segment.is_empty()).then_some(segment)
            });

        let mut sentence_initial = true;
        let tokens = segments
            .flat_map(|segment| {
                let (stem, clitic) = split_clitic(segment);
                std::iter::once(stem).chain(clitic)
            })
            .map(move |piece| {
                let token = RuleAnnotator::annotate_piece(piece, sentence_initial);
                // Opening quotes and commas keep the current position.
                sentence_initial = if is_punctuation(piece) {
                    sentence_initial || SENTENCE_END.contains(&piece)
                } else {
                    false
                };
                token
            });

        Ok(Box::new(tokens))
    }
}
