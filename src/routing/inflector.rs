//! Word inflection used to classify resource names.
//!
//! The translator only needs three operations: pluralize, singularize and
//! the class-name form of a segment. They sit behind [`Inflector`] so a
//! deployment can plug in a richer dictionary than the built-in English
//! rules.

use std::fmt;

use heck::{ToKebabCase, ToUpperCamelCase};

/// Linguistic operations on resource names.
pub trait Inflector: Send + Sync + fmt::Debug {
    fn pluralize(&self, word: &str) -> String;

    fn singularize(&self, word: &str) -> String;

    /// `registered-businesses` → `RegisteredBusinesses`, `get` → `Get`.
    fn classify(&self, word: &str) -> String {
        word.to_upper_camel_case()
    }

    /// `TrackInfo` → `track-info`.
    fn urlize(&self, word: &str) -> String {
        word.to_kebab_case()
    }
}

const UNCOUNTABLE: &[&str] = &[
    "advice", "audio", "data", "deer", "equipment", "evidence", "feedback", "fish", "furniture",
    "hardware", "homework", "information", "knowledge", "luggage", "metadata", "money", "moose",
    "music", "news", "police", "research", "rice", "series", "sheep", "software", "species",
    "staff", "traffic", "weather",
];

const IRREGULAR: &[(&str, &str)] = &[
    ("alias", "aliases"),
    ("analysis", "analyses"),
    ("appendix", "appendices"),
    ("axis", "axes"),
    ("basis", "bases"),
    ("bus", "buses"),
    ("cactus", "cacti"),
    ("child", "children"),
    ("criterion", "criteria"),
    ("crisis", "crises"),
    ("diagnosis", "diagnoses"),
    ("echo", "echoes"),
    ("elf", "elves"),
    ("focus", "foci"),
    ("foot", "feet"),
    ("fungus", "fungi"),
    ("gas", "gases"),
    ("goose", "geese"),
    ("half", "halves"),
    ("hero", "heroes"),
    ("index", "indices"),
    ("knife", "knives"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("loaf", "loaves"),
    ("man", "men"),
    ("matrix", "matrices"),
    ("mouse", "mice"),
    ("nucleus", "nuclei"),
    ("ox", "oxen"),
    ("person", "people"),
    ("phenomenon", "phenomena"),
    ("potato", "potatoes"),
    ("quiz", "quizzes"),
    ("radius", "radii"),
    ("self", "selves"),
    ("status", "statuses"),
    ("stimulus", "stimuli"),
    ("syllabus", "syllabi"),
    ("thesis", "theses"),
    ("tomato", "tomatoes"),
    ("tooth", "teeth"),
    ("vertex", "vertices"),
    ("virus", "viruses"),
    ("wife", "wives"),
    ("woman", "women"),
];

/// Suffix-rule English inflector with irregular and uncountable tables.
///
/// Hyphenated words are inflected on their last part, so
/// `registered-business` pluralizes to `registered-businesses`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishInflector;

impl EnglishInflector {
    pub fn new() -> Self {
        Self
    }
}

impl Inflector for EnglishInflector {
    fn pluralize(&self, word: &str) -> String {
        inflect_last_part(word, |last| {
            if is_uncountable(last) || IRREGULAR.iter().any(|(_, plural)| *plural == last) {
                return last.to_string();
            }
            if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == last) {
                return plural.to_string();
            }
            let singular = singularize_regular(last);
            if singular != last && pluralize_regular(&singular) == last {
                return last.to_string();
            }
            pluralize_regular(last)
        })
    }

    fn singularize(&self, word: &str) -> String {
        inflect_last_part(word, |last| {
            if is_uncountable(last) || IRREGULAR.iter().any(|(singular, _)| *singular == last) {
                return last.to_string();
            }
            if let Some((singular, _)) = IRREGULAR.iter().find(|(_, plural)| *plural == last) {
                return singular.to_string();
            }
            singularize_regular(last)
        })
    }
}

fn inflect_last_part(word: &str, inflect: impl Fn(&str) -> String) -> String {
    if word.is_empty() {
        return String::new();
    }
    match word.rsplit_once('-') {
        Some((head, last)) if !last.is_empty() => format!("{}-{}", head, inflect(last)),
        _ => inflect(word),
    }
}

fn is_uncountable(word: &str) -> bool {
    UNCOUNTABLE.contains(&word.to_ascii_lowercase().as_str())
}

fn pluralize_regular(word: &str) -> String {
    if ["s", "x", "z", "ch", "sh"].iter().any(|suffix| word.ends_with(suffix)) {
        return format!("{}es", word);
    }
    if let Some(stem) = word.strip_suffix('y') {
        if stem.chars().last().is_some_and(|c| !is_vowel(c)) {
            return format!("{}ies", stem);
        }
    }
    format!("{}s", word)
}

fn singularize_regular(word: &str) -> String {
    if word.len() > 3 {
        if let Some(stem) = word.strip_suffix("ies") {
            return format!("{}y", stem);
        }
    }
    for suffix in ["sses", "xes", "zes", "ches", "shes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    match word.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => word.to_string(),
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}
