//! Rule based English lemmatizer used by the default annotator.
//!
//! Irregular forms come from a lookup table; everything else goes through a
//! handful of suffix rules for plurals, `-ing` and `-ed`. Words that no rule
//! changes keep their surface form, and capitalized words inside a sentence
//! are treated as proper nouns and left alone.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

use crate::utils::text::{is_stop_word, normalize_word};

static IRREGULAR: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("am", "be"),
        ("are", "be"),
        ("is", "be"),
        ("was", "be"),
        ("were", "be"),
        ("been", "be"),
        ("being", "be"),
        ("'s", "be"),
        ("'re", "be"),
        ("'m", "be"),
        ("has", "have"),
        ("had", "have"),
        ("having", "have"),
        ("'ve", "have"),
        ("does", "do"),
        ("did", "do"),
        ("done", "do"),
        ("doing", "do"),
        ("went", "go"),
        ("gone", "go"),
        ("goes", "go"),
        ("made", "make"),
        ("said", "say"),
        ("says", "say"),
        ("got", "get"),
        ("gotten", "get"),
        ("took", "take"),
        ("taken", "take"),
        ("came", "come"),
        ("saw", "see"),
        ("seen", "see"),
        ("knew", "know"),
        ("known", "know"),
        ("thought", "think"),
        ("felt", "feel"),
        ("found", "find"),
        ("gave", "give"),
        ("given", "give"),
        ("told", "tell"),
        ("wrote", "write"),
        ("written", "write"),
        ("read", "read"),
        ("left", "leave"),
        ("kept", "keep"),
        ("began", "begin"),
        ("begun", "begin"),
        ("brought", "bring"),
        ("bought", "buy"),
        ("ran", "run"),
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("people", "person"),
        ("lives", "life"),
        ("wives", "wife"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("mice", "mouse"),
        ("n't", "not"),
        ("'ll", "will"),
        ("ca", "can"),
        ("wo", "will"),
        ("dying", "die"),
        ("lying", "lie"),
        ("tying", "tie"),
        ("died", "die"),
        ("lied", "lie"),
        ("tied", "tie"),
    ]
    .into_iter()
    .collect()
});

// Words the suffix rules would mangle.
static PROTECTED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "always", "analysis", "anything", "atlas", "basis", "bed", "bonus", "bring", "business",
        "campus", "canvas", "ceiling", "chaos", "crisis", "during", "economics", "ethics",
        "evening", "everything", "famous", "feed", "focus", "gas", "hundred", "indeed", "king",
        "lens", "mathematics", "morning", "naked", "need", "news", "nothing", "physics",
        "politics", "pudding", "red", "ring", "sacred", "seed", "series", "sibling", "sing",
        "something", "species",
        "speed", "spring", "status", "string", "thesis", "thing", "various", "virus", "wedding",
        "wicked", "yes",
    ]
    .into_iter()
    .collect()
});

// Stems of -e verbs whose final "e" the measure rule below cannot recover.
static E_STEMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "accus", "achiev", "acquir", "admir", "advis", "amaz", "amus", "arrang", "assum",
        "attribut", "believ", "caus", "chang", "charg", "combin", "compar", "compet", "complet",
        "compris", "comput", "conclud", "confus", "consum", "contribut", "damag", "decid",
        "declin", "defin", "delet", "describ", "desir", "determin", "distribut", "divid",
        "encourag", "endur", "engag", "ensur", "examin", "exchang", "exclud", "excit", "execut",
        "explor", "featur", "guid", "ignor", "imagin", "includ", "induc", "inspir", "introduc",
        "invit", "manag", "measur", "notic", "pictur", "pleas", "practic", "prais", "prepar",
        "produc", "promis", "promot", "provid", "provok", "purchas", "quot", "rais", "receiv",
        "recit", "reduc", "refus", "releas", "replac", "requir", "restor", "retir", "revis",
        "sacrific", "serv", "solv", "surpris", "unit", "ventur",
    ]
    .into_iter()
    .collect()
});

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Consonant test at position `i`; `y` counts as a vowel after a consonant.
fn is_consonant(chars: &[char], i: usize) -> bool {
    match chars[i] {
        c if is_vowel(c) => false,
        'y' => i == 0 || !is_consonant(chars, i - 1),
        _ => true,
    }
}

/// Number of vowel-consonant sequences, the `m` in `[C](VC)^m[V]`.
fn measure(chars: &[char]) -> usize {
    let mut m = 0;
    let mut prev_vowel = false;
    for i in 0..chars.len() {
        let consonant = is_consonant(chars, i);
        if consonant && prev_vowel {
            m += 1;
        }
        prev_vowel = !consonant;
    }
    m
}

/// Ends consonant-vowel-consonant, the last consonant not `w`, `x` or `y`.
fn ends_cvc(chars: &[char]) -> bool {
    let n = chars.len();
    n >= 3
        && is_consonant(chars, n - 3)
        && !is_consonant(chars, n - 2)
        && is_consonant(chars, n - 1)
        && !matches!(chars[n - 1], 'w' | 'x' | 'y')
}

fn has_vowel(stem: &str) -> bool {
    stem.chars().any(|c| is_vowel(c) || c == 'y')
}

/// Repairs a stem left behind by stripping `-ing` / `-ed`.
fn restore_stem(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();

    if n >= 4 && chars[n - 1] == chars[n - 2] && is_consonant(&chars, n - 1) {
        return match chars[n - 1] {
            // compell -> compel, but fall and spell stay
            'l' if measure(&chars[..n - 1]) > 1 => chars[..n - 1].iter().collect(),
            'l' | 's' | 'z' | 'f' => stem.to_string(),
            // runn -> run, stopp -> stop
            _ => chars[..n - 1].iter().collect(),
        };
    }

    if E_STEMS.contains(stem) {
        return format!("{}e", stem);
    }

    // one-syllable cvc stems: mak -> make, writ -> write, shin -> shine
    if measure(&chars) == 1 && ends_cvc(&chars) {
        return format!("{}e", stem);
    }

    for suffix in ["at", "bl", "iz", "v", "nc", "rc", "rg", "dg"] {
        if stem.ends_with(suffix) {
            return format!("{}e", stem);
        }
    }

    stem.to_string()
}

fn apply_suffix_rules(word: &str) -> Option<String> {
    if PROTECTED.contains(word) {
        return None;
    }
    let len = word.chars().count();

    if word.ends_with("ies") && len > 4 {
        return Some(format!("{}y", &word[..word.len() - 3]));
    }
    for suffix in ["sses", "shes", "ches", "xes", "zzes"] {
        if word.ends_with(suffix) {
            return Some(word[..word.len() - 2].to_string());
        }
    }
    if word.ends_with('s')
        && len > 3
        && !["ss", "us", "is", "ous"].iter().any(|s| word.ends_with(s))
    {
        return Some(word[..word.len() - 1].to_string());
    }
    if word.ends_with("ing") && len >= 5 {
        let stem = &word[..word.len() - 3];
        if has_vowel(stem) {
            return Some(restore_stem(stem));
        }
    }
    if word.ends_with("ied") && len > 4 {
        return Some(format!("{}y", &word[..word.len() - 3]));
    }
    if word.ends_with("ed") && !word.ends_with("eed") && len >= 4 {
        let stem = &word[..word.len() - 2];
        if has_vowel(stem) {
            return Some(restore_stem(stem));
        }
    }
    None
}

/// Title case such as "Dickens"; all-caps words do not count.
fn is_capitalized(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().map_or(false, char::is_uppercase) && chars.any(char::is_lowercase)
}

/// Returns the dictionary base form of `word`.
pub fn lemmatize(word: &str) -> String {
    lemmatize_in_sentence(word, true)
}

/// Like [`lemmatize`], but a capitalized word that does not open a sentence
/// is taken as a proper noun and keeps its surface form.
pub fn lemmatize_in_sentence(word: &str, sentence_initial: bool) -> String {
    let lower = normalize_word(word);
    if let Some(base) = IRREGULAR.get(lower.as_str()) {
        return (*base).to_string();
    }
    if is_stop_word(&lower) {
        return lower;
    }
    if !sentence_initial && is_capitalized(word) {
        return word.to_string();
    }
    if !lower.chars().all(|c| c.is_ascii_alphabetic()) {
        return word.to_string();
    }
    match apply_suffix_rules(&lower) {
        Some(base) if base != lower => base,
        _ => word.to_string(),
    }
}
