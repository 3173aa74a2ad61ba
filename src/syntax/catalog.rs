//! Rule catalog
//!
//! Maps language identifiers (and their aliases) to rule sets. The
//! catalog is built once and only read while highlighting.

use std::collections::HashMap;
use std::path::Path;

use super::builtin;
use super::language::LanguageDefinition;

/// Language identifier → rule set
pub struct Catalog {
    /// Loaded language definitions, keyed by canonical id
    languages: HashMap<String, LanguageDefinition>,
    /// Alias to canonical id
    alias_map: HashMap<String, String>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            languages: HashMap::new(),
            alias_map: HashMap::new(),
        }
    }

    /// Create a catalog with the built-in languages
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for lang in builtin::all_languages() {
            catalog.add_language(lang);
        }
        catalog
    }

    /// Add a language definition
    ///
    /// If the id is already registered, the new rules are merged into the
    /// existing set.
    pub fn add_language(&mut self, lang: LanguageDefinition) {
        for alias in &lang.aliases {
            self.alias_map.insert(alias.clone(), lang.name.clone());
        }
        match self.languages.get_mut(&lang.name) {
            Some(existing) => existing.merge(lang),
            None => {
                self.languages.insert(lang.name.clone(), lang);
            }
        }
    }

    /// Register an alias for a language id
    pub fn add_alias(&mut self, alias: &str, target: &str) {
        self.alias_map.insert(alias.to_lowercase(), target.to_lowercase());
    }

    /// Canonical id for a name or alias (case-insensitive)
    ///
    /// Names without an alias resolve to themselves, lowercased, whether or
    /// not a language is registered under them.
    pub fn resolve(&self, name: &str) -> String {
        let name = name.trim().to_lowercase();
        match self.alias_map.get(&name) {
            Some(target) => target.clone(),
            None => name,
        }
    }

    /// Get a language definition by id or alias
    pub fn get(&self, name: &str) -> Option<&LanguageDefinition> {
        if let Some(lang) = self.languages.get(name) {
            return Some(lang);
        }
        self.languages.get(&self.resolve(name))
    }

    /// Mutable access to a language definition by id or alias
    pub fn get_mut(&mut self, name: &str) -> Option<&mut LanguageDefinition> {
        let id = self.resolve(name);
        self.languages.get_mut(&id)
    }

    /// Whether a language is registered under this id or alias
    pub fn supports(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Detect language from a file name's extension
    pub fn detect_language(&self, filename: &Path) -> Option<&str> {
        let ext = filename.extension()?.to_str()?;
        self.get(ext).map(|lang| lang.name.as_str())
    }

    /// List available languages
    pub fn list_languages(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.languages.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Aliases resolving to a language id, sorted
    pub fn aliases_of(&self, name: &str) -> Vec<&str> {
        let mut aliases: Vec<_> = self
            .alias_map
            .iter()
            .filter(|(_, target)| target.as_str() == name)
            .map(|(alias, _)| alias.as_str())
            .collect();
        aliases.sort();
        aliases
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::language::Strategy;
    use crate::syntax::rules::PatternRule;
    use crate::syntax::tokens::Category;

    #[test]
    fn test_builtin_languages() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.list_languages(),
            vec!["al", "csharp", "css", "json", "md", "powershell", "python", "sql", "xml"]
        );
        assert_eq!(catalog.get("json").unwrap().strategy, Strategy::Structured);
        assert_eq!(catalog.get("python").unwrap().strategy, Strategy::Generic);
    }

    #[test]
    fn test_resolve_aliases() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.resolve("ps1"), "powershell");
        assert_eq!(catalog.resolve("PY"), "python");
        assert_eq!(catalog.resolve("cs"), "csharp");
        assert_eq!(catalog.resolve("Markdown"), "md");
        assert_eq!(catalog.resolve("scss"), "css");
        assert_eq!(catalog.resolve("sass"), "css");
        assert_eq!(catalog.resolve("Rust"), "rust");
        assert!(catalog.supports("PowerShell"));
        assert!(!catalog.supports("rust"));
    }

    #[test]
    fn test_detect_language() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.detect_language(Path::new("deploy.ps1")), Some("powershell"));
        assert_eq!(catalog.detect_language(Path::new("main.py")), Some("python"));
        assert_eq!(catalog.detect_language(Path::new("Program.cs")), Some("csharp"));
        assert_eq!(catalog.detect_language(Path::new("README.MD")), Some("md"));
        assert_eq!(catalog.detect_language(Path::new("settings.json")), Some("json"));
        assert_eq!(catalog.detect_language(Path::new("main.rs")), None);
        assert_eq!(catalog.detect_language(Path::new("no_extension")), None);
    }

    #[test]
    fn test_add_language_merges() {
        let mut catalog = Catalog::builtin();
        let before = catalog.get("sql").unwrap().rule_count();

        let mut extra = crate::syntax::LanguageDefinition::new("sql");
        extra.add_alias("tsql");
        extra.add_pattern(PatternRule::new(Category::Variables, r"@\w+").unwrap());
        catalog.add_language(extra);

        let sql = catalog.get("tsql").unwrap();
        assert_eq!(sql.rule_count(), before + 1);
        assert!(sql.rule(Category::Keywords).is_some());
    }

    #[test]
    fn test_aliases_of() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.aliases_of("css"), vec!["sass", "scss"]);
        assert!(catalog.aliases_of("sql").is_empty());
    }
}
