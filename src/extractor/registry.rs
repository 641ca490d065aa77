use log::debug;

/// Descriptor for one shipped source-language extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorDescriptor {
    pub language: &'static str,
    /// Extractor location relative to the resolved Sparrow home.
    pub tool: &'static str,
}

/// The extractors shipped with the platform. Adding a language means
/// adding a row here; the CLI choice list follows automatically.
const BUILTIN_EXTRACTORS: &[ExtractorDescriptor] = &[
    ExtractorDescriptor { language: "java", tool: "language/java/extractor" },
    ExtractorDescriptor { language: "xml", tool: "language/xml/extractor" },
    ExtractorDescriptor { language: "javascript", tool: "language/javascript/extractor" },
    ExtractorDescriptor { language: "python", tool: "language/python/extractor" },
    ExtractorDescriptor { language: "go", tool: "language/go/extractor" },
    ExtractorDescriptor { language: "sql", tool: "language/sql/extractor" },
    ExtractorDescriptor { language: "properties", tool: "language/properties/extractor" },
    ExtractorDescriptor { language: "cfamily", tool: "language/cfamily/extractor" },
    ExtractorDescriptor { language: "arkts", tool: "language/arkts/extractor" },
];

/// Registry of available source-language extractors.
///
/// Enumerated once per invocation; its language list is the
/// authoritative choice set for `database create --data-language-type`.
pub struct ExtractorRegistry {
    extractors: Vec<ExtractorDescriptor>,
}

impl ExtractorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Registry holding the built-in extractor table
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for descriptor in BUILTIN_EXTRACTORS {
            registry.register(descriptor.clone());
        }
        registry
    }

    /// Register an extractor in the registry
    pub fn register(&mut self, descriptor: ExtractorDescriptor) {
        debug!("Registering extractor: {}", descriptor.language);
        self.extractors.push(descriptor);
    }

    /// Get an extractor by language identifier
    pub fn get(&self, language: &str) -> Option<&ExtractorDescriptor> {
        self.extractors.iter().find(|e| e.language == language)
    }

    /// Distinct language identifiers in registration order
    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = Vec::new();
        for extractor in &self.extractors {
            if !languages.iter().any(|l| l == extractor.language) {
                languages.push(extractor.language.to_string());
            }
        }
        languages
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_languages_are_distinct_and_ordered() {
        let registry = ExtractorRegistry::builtin();
        let languages = registry.languages();

        assert_eq!(languages.first().map(String::as_str), Some("java"));
        let mut deduped = languages.clone();
        deduped.dedup();
        assert_eq!(languages, deduped);
    }

    #[test]
    fn test_builtin_contains_expected_languages() {
        let registry = ExtractorRegistry::builtin();
        for language in ["java", "xml", "javascript", "go", "python"] {
            assert!(registry.get(language).is_some(), "missing {}", language);
        }
    }

    #[test]
    fn test_unknown_language_lookup() {
        let registry = ExtractorRegistry::builtin();
        assert!(registry.get("cobol").is_none());
    }

    #[test]
    fn test_empty_registry_has_no_choices() {
        let registry = ExtractorRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.languages().is_empty());
    }

    #[test]
    fn test_duplicate_registration_keeps_one_choice() {
        let mut registry = ExtractorRegistry::new();
        registry.register(ExtractorDescriptor { language: "java", tool: "a" });
        registry.register(ExtractorDescriptor { language: "java", tool: "b" });
        assert_eq!(registry.languages(), vec!["java".to_string()]);
    }
}
