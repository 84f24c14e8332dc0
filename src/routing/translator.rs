//! Request-handler naming.
//!
//! Turns an HTTP method plus the resource segments around the cursor into
//! the short name of the handler that should serve them:
//!
//! ```text
//! GET /users/123/profile
//!     translate("get", "users", "profile", false) == "GetOneAction"
//! ```

use crate::routing::config::RouterConfig;

/// Which handler variant a resource maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Indicator {
    None,
    Singular,
    Plural,
}

#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    config: &'a RouterConfig,
}

impl<'a> Translator<'a> {
    pub fn new(config: &'a RouterConfig) -> Self {
        Self { config }
    }

    /// Build the handler name for `current`, given the last matched
    /// resource `parent` (empty when none) and whether more path follows.
    pub fn translate(&self, method: &str, parent: &str, current: &str, has_next: bool) -> String {
        let indicator = self.indicator(parent, current, has_next);
        self.handler_name(method, indicator)
    }

    /// `track-info` → `TrackInfo`.
    pub fn url_segment_to_namespace_segment(&self, segment: &str) -> String {
        self.config.inflector().classify(segment)
    }

    /// `TrackInfo` → `track-info`.
    pub fn namespace_segment_to_url_segment(&self, segment: &str) -> String {
        self.config.inflector().urlize(segment)
    }

    pub fn is_singular(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        if self.is_excluded_singular(word) {
            return true;
        }
        let inflector = self.config.inflector();
        inflector.singularize(word) == word && inflector.pluralize(word) != word
    }

    pub fn is_plural(&self, word: &str) -> bool {
        if word.is_empty() || self.is_excluded_singular(word) {
            return false;
        }
        let inflector = self.config.inflector();
        inflector.pluralize(word) == word && inflector.singularize(word) != word
    }

    fn indicator(&self, parent: &str, current: &str, has_next: bool) -> Indicator {
        if self.is_excluded_plural(current) {
            return Indicator::Plural;
        }

        if !parent.is_empty() && !has_next {
            if self.is_plural(parent) && self.is_singular(current) {
                return Indicator::Singular;
            }
            if self.is_plural(parent) && self.is_plural(current) {
                return Indicator::Plural;
            }
            if self.is_plural(current) {
                return Indicator::Plural;
            }
        }

        // a collection nested under a single parent item, more path to come
        if !parent.is_empty() && has_next && self.is_singular(parent) && self.is_plural(current) {
            return Indicator::None;
        }

        if self.is_plural(current) {
            return if has_next {
                Indicator::Singular
            } else {
                Indicator::Plural
            };
        }

        Indicator::None
    }

    fn handler_name(&self, method: &str, indicator: Indicator) -> String {
        let indicator = match indicator {
            Indicator::None => "",
            Indicator::Singular => self.config.singular_indicator(),
            Indicator::Plural => self.config.plural_indicator(),
        };
        format!(
            "{}{}{}{}",
            self.config.prefix(),
            self.config.inflector().classify(method),
            indicator,
            self.config.suffix()
        )
    }

    fn is_excluded_plural(&self, word: &str) -> bool {
        self.config.excluded_plural_words().iter().any(|w| w == word)
    }

    fn is_excluded_singular(&self, word: &str) -> bool {
        self.config.excluded_singular_words().iter().any(|w| w == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RouterConfig {
        RouterConfig::new("Project::Http").unwrap()
    }

    #[test]
    fn test_no_parent_and_no_next_segment() {
        let config = config();
        let translator = Translator::new(&config);

        assert_eq!(translator.translate("get", "", "", false), "GetAction");
        assert_eq!(translator.translate("get", "", "account", false), "GetAction");
        assert_eq!(translator.translate("get", "", "contacts", false), "GetAllAction");
    }

    #[test]
    fn test_parent_and_no_next_segment() {
        let config = config();
        let translator = Translator::new(&config);

        assert_eq!(translator.translate("get", "users", "profile", false), "GetOneAction");
        assert_eq!(translator.translate("get", "users", "friends", false), "GetAllAction");
        assert_eq!(
            translator.translate("get", "suburbs", "registered-businesses", false),
            "GetAllAction"
        );
        assert_eq!(translator.translate("post", "ping", "users", false), "PostAllAction");
        assert_eq!(translator.translate("post", "ping", "user", false), "PostAction");
    }

    #[test]
    fn test_no_parent_and_next_segment() {
        let config = config();
        let translator = Translator::new(&config);

        assert_eq!(translator.translate("get", "", "", true), "GetAction");
        assert_eq!(translator.translate("get", "", "archives", true), "GetOneAction");
    }

    #[test]
    fn test_parent_and_next_segment() {
        let config = config();
        let translator = Translator::new(&config);

        assert_eq!(
            translator.translate("get", "suburbs", "registered-businesses", true),
            "GetOneAction"
        );
        assert_eq!(translator.translate("get", "contact", "emails", true), "GetAction");
    }

    #[test]
    fn test_excluded_plural_words_always_use_plural_indicator() {
        let config = config().exclude_plural_words(["archives", "music"]);
        let translator = Translator::new(&config);

        assert_eq!(translator.translate("get", "", "archives", true), "GetAllAction");
        assert_eq!(translator.translate("get", "", "music", false), "GetAllAction");
    }

    #[test]
    fn test_excluded_singular_words_are_never_plural() {
        let config = config().exclude_singular_words(["news"]);
        let translator = Translator::new(&config);

        assert!(translator.is_singular("news"));
        assert!(!translator.is_plural("news"));
        assert_eq!(translator.translate("get", "", "news", true), "GetAction");
    }

    #[test]
    fn test_classification() {
        let config = config();
        let translator = Translator::new(&config);

        assert!(translator.is_plural("contacts"));
        assert!(translator.is_singular("contact"));
        // no separate singular or plural form
        assert!(!translator.is_plural("music"));
        assert!(!translator.is_singular("music"));
        assert!(!translator.is_plural(""));
        assert!(!translator.is_singular(""));
    }

    #[test]
    fn test_custom_naming() {
        let config = config()
            .with_prefix("Handle")
            .with_suffix("")
            .with_plural_indicator("Many")
            .with_singular_indicator("Single");
        let translator = Translator::new(&config);

        assert_eq!(translator.translate("delete", "", "users", false), "HandleDeleteMany");
        assert_eq!(translator.translate("delete", "", "users", true), "HandleDeleteSingle");
    }

    #[test]
    fn test_segment_conversion() {
        let config = config();
        let translator = Translator::new(&config);

        assert_eq!(translator.url_segment_to_namespace_segment("track-info"), "TrackInfo");
        assert_eq!(translator.namespace_segment_to_url_segment("TrackInfo"), "track-info");
    }
}
