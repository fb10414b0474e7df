use crate::error::Result;

/// What the record processor needs to know about a single token.
pub trait TokenAttributes {
    /// Surface text as it appeared in the record.
    fn text(&self) -> &str;
    /// Dictionary base form.
    fn lemma(&self) -> &str;
    fn is_stop(&self) -> bool;
    fn is_punct(&self) -> bool;
    /// True when the token is purely numeric.
    fn is_digit(&self) -> bool;
}

/// Lazily produced tokens of one record. Any item may be an error.
pub type TokenStream<'a, T> = Box<dyn Iterator<Item = Result<T>> + 'a>;

/// A natural-language backend that tokenizes and classifies text.
///
/// Every call re-tokenizes its input, so the returned stream can be obtained
/// again for the same text. Errors may be returned up front or mid-stream.
pub trait Annotator {
    type Token: TokenAttributes;

    fn name(&self) -> &'static str; // For logging/error reporting

    fn annotate<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a, Self::Token>>;
}

/// Plain owned token, produced by the default annotator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub is_stop: bool,
    pub is_punct: bool,
    pub is_digit: bool,
}

impl Token {
    /// A token with no class flags set.
    pub fn new(text: impl Into<String>, lemma: impl Into<String>) -> Self {
        Token {
            text: text.into(),
            lemma: lemma.into(),
            is_stop: false,
            is_punct: false,
            is_digit: false,
        }
    }

    pub fn stop(mut self, is_stop: bool) -> Self {
        self.is_stop = is_stop;
        self
    }

    pub fn punct(mut self, is_punct: bool) -> Self {
        self.is_punct = is_punct;
        self
    }

    pub fn digit(mut self, is_digit: bool) -> Self {
        self.is_digit = is_digit;
        self
    }
}

impl TokenAttributes for Token {
    fn text(&self) -> &str {
        &self.text
    }

    fn lemma(&self) -> &str {
        &self.lemma
    }

    fn is_stop(&self) -> bool {
        self.is_stop
    }

    fn is_punct(&self) -> bool {
        self.is_punct
    }

    fn is_digit(&self) -> bool {
        self.is_digit
    }
}
