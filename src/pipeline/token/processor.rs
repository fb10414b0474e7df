use itertools::Itertools;

use crate::config::pipeline::FilterConfig;
use crate::error::Result;
use crate::pipeline::token::annotator::{Annotator, TokenAttributes};

/// Turns one text record into one cleaned string under a fixed [`FilterConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordProcessor {
    config: FilterConfig,
}

impl RecordProcessor {
    pub fn new(config: FilterConfig) -> Self {
        RecordProcessor { config }
    }

    /// A token is kept only if its membership in each of the three classes
    /// equals the configured flag for that class.
    pub fn keeps<T: TokenAttributes + ?Sized>(&self, token: &T) -> bool {
        token.is_stop() == self.config.stopwords
            && token.is_punct() == self.config.punctuation
            && token.is_digit() == self.config.numbers
    }

    /// Text emitted for a kept token.
    pub fn render<T: TokenAttributes + ?Sized>(&self, token: &T) -> String {
        match (self.config.lemmatize, self.config.lowercase) {
            (true, true) => token.lemma().to_lowercase(),
            (true, false) => token.lemma().to_string(),
            (false, true) => token.text().to_lowercase(),
            (false, false) => token.text().to_string(),
        }
    }

    /// Cleans `text`. The first token error aborts the record; no partial
    /// output is returned.
    pub fn clean<A: Annotator + ?Sized>(&self, annotator: &A, text: &str) -> Result<String> {
        let tokens = annotator.annotate(text)?;
        itertools::process_results(tokens, |tokens| {
            tokens
                .filter(|token| self.keeps(token))
                .map(|token| self.render(&token))
                .join(" ")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use crate::pipeline::token::annotator::{Token, TokenStream};

    /// Returns the same fixed tokens for any text; fails on text "boom".
    struct FixedAnnotator(Vec<Token>);

    impl Annotator for FixedAnnotator {
        type Token = Token;

        fn name(&self) -> &'static str {
            "FixedAnnotator"
        }

        fn annotate<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a, Token>> {
            if text == "boom" {
                return Err(PipelineError::AnnotationError("boom".to_string()));
            }
            Ok(Box::new(self.0.iter().cloned().map(Ok::<Token, PipelineError>)))
        }
    }

    fn running() -> Token {
        Token::new("Running", "run")
    }

    fn config(lemmatize: bool, lowercase: bool) -> FilterConfig {
        FilterConfig {
            lemmatize,
            lowercase,
            stopwords: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_stop_word_kept_under_default_config() {
        let processor = RecordProcessor::default();
        let the = Token::new("the", "the").stop(true);
        assert!(processor.keeps(&the));
    }

    #[test]
    fn test_stop_word_dropped_when_stopwords_disabled() {
        let processor = RecordProcessor::new(FilterConfig {
            stopwords: false,
            ..Default::default()
        });
        let the = Token::new("the", "the").stop(true);
        assert!(!processor.keeps(&the));
    }

    #[test]
    fn test_every_class_must_match() {
        let processor = RecordProcessor::default();
        // stop word that is also numeric fails the numeric check
        assert!(!processor.keeps(&Token::new("one", "one").stop(true).digit(true)));
        // non stop word fails the stop-word check under the default config
        assert!(!processor.keeps(&Token::new("cat", "cat")));

        let content_only = RecordProcessor::new(config(true, true));
        assert!(content_only.keeps(&Token::new("cat", "cat")));
        assert!(!content_only.keeps(&Token::new("!", "!").punct(true)));
        assert!(!content_only.keeps(&Token::new("2024", "2024").digit(true)));

        let punct_only = RecordProcessor::new(FilterConfig {
            stopwords: false,
            punctuation: true,
            ..Default::default()
        });
        assert!(punct_only.keeps(&Token::new("!", "!").punct(true)));
        assert!(!punct_only.keeps(&Token::new("cat", "cat")));
    }

    #[test]
    fn test_representation_selection() {
        let token = running();
        assert_eq!(RecordProcessor::new(config(true, true)).render(&token), "run");
        assert_eq!(RecordProcessor::new(config(true, false)).render(&token), "run");
        assert_eq!(RecordProcessor::new(config(false, true)).render(&token), "running");
        assert_eq!(RecordProcessor::new(config(false, false)).render(&token), "Running");

        let proper = Token::new("Paris", "Paris");
        assert_eq!(RecordProcessor::new(config(true, false)).render(&proper), "Paris");
        assert_eq!(RecordProcessor::new(config(true, true)).render(&proper), "paris");
    }

    #[test]
    fn test_clean_joins_kept_tokens_in_order() {
        let annotator = FixedAnnotator(vec![
            Token::new("Cats", "cat"),
            Token::new("are", "be").stop(true),
            Token::new("great", "great"),
            Token::new("!", "!").punct(true),
        ]);
        let processor = RecordProcessor::new(config(true, true));
        assert_eq!(processor.clean(&annotator, "x").unwrap(), "cat great");

        let default = RecordProcessor::default();
        assert_eq!(default.clean(&annotator, "x").unwrap(), "be");
    }

    #[test]
    fn test_clean_is_repeatable() {
        let annotator = FixedAnnotator(vec![running(), Token::new("Fast", "fast")]);
        let processor = RecordProcessor::new(config(false, true));
        let first = processor.clean(&annotator, "x").unwrap();
        let second = processor.clean(&annotator, "x").unwrap();
        assert_eq!(first, "running fast");
        assert_eq!(first, second);
    }

    #[test]
    fn test_clean_with_no_surviving_tokens_is_empty() {
        let annotator = FixedAnnotator(vec![Token::new(".", ".").punct(true)]);
        assert_eq!(RecordProcessor::default().clean(&annotator, "x").unwrap(), "");
    }

    #[test]
    fn test_clean_propagates_annotator_error() {
        let annotator = FixedAnnotator(vec![running()]);
        let result = RecordProcessor::default().clean(&annotator, "boom");
        assert!(matches!(result, Err(PipelineError::AnnotationError(_))));
    }

    #[test]
    fn test_mid_stream_error_discards_partial_output() {
        struct FailsAfterFirst;
        impl Annotator for FailsAfterFirst {
            type Token = Token;
            fn name(&self) -> &'static str {
                "FailsAfterFirst"
            }
            fn annotate<'a>(&'a self, _text: &'a str) -> Result<TokenStream<'a, Token>> {
                Ok(Box::new(
                    vec![
                        Ok(Token::new("good", "good")),
                        Err(PipelineError::AnnotationError("bad token".to_string())),
                        Ok(Token::new("book", "book")),
                    ]
                    .into_iter(),
                ))
            }
        }
        let processor = RecordProcessor::new(config(true, true));
        assert!(processor.clean(&FailsAfterFirst, "x").is_err());
    }
}
