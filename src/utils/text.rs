// Text utils

use once_cell::sync::Lazy;
use std::collections::HashSet;

// English stop words
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "'d", "'ll", "'m", "'re", "'s", "'ve", "a", "about", "above", "after", "again", "against",
    "all", "almost", "also", "am", "among", "an", "and", "any", "are", "around", "as", "at",
    "be", "became", "because", "become", "been", "before", "being", "below", "between", "both",
    "but", "by", "ca", "can", "cannot", "could", "did", "do", "does", "doing", "done", "down",
    "during", "each", "either", "else", "enough", "even", "ever", "every", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "however", "i", "if", "in", "into", "is", "it", "its", "itself",
    "just", "least", "less", "made", "make", "many", "may", "me", "might", "mine", "more",
    "most", "much", "must", "my", "myself", "neither", "never", "no", "nor", "not", "n't",
    "nothing", "now", "of", "off", "often", "on", "once", "one", "only", "or", "other",
    "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "per", "perhaps",
    "quite", "rather", "really", "same", "say", "see", "seem", "seemed", "several", "she",
    "should", "since", "so", "some", "something", "still", "such", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those",
    "though", "through", "thus", "to", "together", "too", "toward", "under", "until", "up",
    "upon", "us", "used", "using", "very", "via", "was", "we", "well", "were", "what",
    "whatever", "when", "where", "whether", "which", "while", "who", "whole", "whom", "whose",
    "why", "will", "with", "within", "without", "wo", "would", "yet", "you", "your", "yours",
    "yourself", "yourselves",
];

static STOP_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

/// Literal punctuation characters, including typographic quotes and dashes.
const PUNCTUATION_LIT: &str =
    "!/—”:％１〈&(、━\\【#%「」，】；+^]~“《„';’{|∶´[=-`*．（–？！：$～«〉,><》)?）。…@_.\"}►»";

/// Ranges of codepoints to include (0..9, 11..13, 13..32, 127..160)
const PUNCTUATION_RANGES: &[(u32, u32)] = &[
    (0, 9),     // 0–8
    (11, 13),   // 11–12
    (13, 32),   // 13–31
    (127, 160), // 127–159
];

/// A lazily-initialized, global set of all punctuation chars
pub static PUNCTUATION: Lazy<HashSet<char>> = Lazy::new(|| {
    let mut set = HashSet::new();

    set.extend(PUNCTUATION_LIT.chars());

    for &(start, end) in PUNCTUATION_RANGES {
        for cp in start..end {
            if let Some(ch) = std::char::from_u32(cp) {
                set.insert(ch);
            }
        }
    }

    set
});

/// Lowercases `word` and folds the typographic apostrophe to `'`.
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase().replace('\u{2019}', "'")
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(normalize_word(word).as_str())
}

fn is_punctuation_char(ch: char) -> bool {
    PUNCTUATION.contains(&ch) || ch.is_ascii_punctuation()
}

/// True when the token is non-empty and consists only of punctuation.
pub fn is_punctuation(token: &str) -> bool {
    !token.is_empty() && token.chars().all(is_punctuation_char)
}

/// True when the token is non-empty and every char is numeric ("2024", "٣").
pub fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_numeric)
}
