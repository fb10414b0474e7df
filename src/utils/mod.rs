// Utils

pub mod lemma;
pub mod logging;
pub mod text;

pub use lemma::{lemmatize, lemmatize_in_sentence};
pub use text::{
    is_numeric, is_punctuation, is_stop_word, normalize_word, ENGLISH_STOP_WORDS, PUNCTUATION,
};
