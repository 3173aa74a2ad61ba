//! Configuration file support
//!
//! Loads settings from ~/.docglow.toml (or %USERPROFILE%\.docglow.toml on
//! Windows), or from a path given on the command line.
//!
//! Example:
//! ```toml
//! class-prefix = "hl-"
//!
//! [aliases]
//! pwsh = "powershell"
//!
//! # Extend a built-in language
//! [languages.sql]
//! variables = '@\w+'
//!
//! # Define a new one
//! [languages.ini]
//! aliases = ["cfg"]
//! comments = { pattern = '[;#].*$', multiline = true }
//! properties = { pattern = '^\s*([\w.-]+)\s*=', multiline = true, group = 1 }
//! strings = '"[^"\n]*"'
//!
//! [languages.jsonc]
//! structured = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use toml::{Table, Value};

use crate::error::{GlowError, Result};
use crate::syntax::{
    Catalog, Category, Highlighter, LanguageDefinition, PatternFlags, PatternRule, Strategy,
    TokenClass, DEFAULT_CLASS_PREFIX,
};

/// Configuration settings
#[derive(Debug, Clone)]
pub struct Config {
    /// Prefix for class names in the rendered markup
    pub class_prefix: String,
    /// Extra alias → language id mappings
    pub aliases: Vec<(String, String)>,
    /// User-defined or extended languages
    pub languages: Vec<LanguageConfig>,
}

/// A `[languages.<id>]` table
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Language id
    pub name: String,
    /// Tokenizer override, if given
    pub structured: Option<bool>,
    /// Alternate identifiers
    pub aliases: Vec<String>,
    /// Rules, one per category
    pub rules: Vec<RuleConfig>,
}

/// One rule entry inside a language table
#[derive(Debug, Clone)]
pub struct RuleConfig {
    pub category: Category,
    pub pattern: String,
    pub class: Option<TokenClass>,
    pub flags: PatternFlags,
    pub group: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            aliases: Vec::new(),
            languages: Vec::new(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".docglow.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".docglow.toml"))
        }
    }

    /// Load configuration
    ///
    /// An explicit path must exist. Without one, the default path is used
    /// if present, and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            let contents = fs::read_to_string(path)?;
            return Self::parse(&contents);
        }

        match Self::config_path() {
            Some(path) if path.is_file() => Self::parse(&fs::read_to_string(&path)?),
            _ => Ok(Self::default()),
        }
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let table: Table = contents.parse()?;
        let mut config = Config::default();

        for (key, value) in &table {
            match key.as_str() {
                "class-prefix" => config.class_prefix = parse_prefix(value)?,
                "aliases" => config.aliases = parse_aliases(value)?,
                "languages" => {
                    let languages = expect_table(value, "languages")?;
                    for (name, lang) in languages {
                        config.languages.push(LanguageConfig::parse(name, lang)?);
                    }
                }
                other => return Err(GlowError::Message(format!("unknown config key: {other}"))),
            }
        }

        Ok(config)
    }

    /// Built-in catalog extended with the configured languages and aliases
    pub fn build_catalog(&self) -> Result<Catalog> {
        let mut catalog = Catalog::builtin();

        for lang in &self.languages {
            catalog.add_language(lang.build()?);
            if let Some(structured) = lang.structured {
                if let Some(def) = catalog.get_mut(&lang.name) {
                    def.strategy = if structured {
                        Strategy::Structured
                    } else {
                        Strategy::Generic
                    };
                }
            }
            // The key/value tokenizer never consults pattern rules
            if let Some(def) = catalog.get(&lang.name) {
                if def.strategy == Strategy::Structured && def.rule_count() > 0 {
                    let rule = def.rules().next().map_or("", |r| r.category.name());
                    return Err(invalid(&def.name, rule, "structured languages take no pattern rules"));
                }
            }
        }

        for (alias, target) in &self.aliases {
            catalog.add_alias(alias, target);
        }

        Ok(catalog)
    }

    /// Highlighter for this configuration
    pub fn highlighter(&self) -> Result<Highlighter> {
        Ok(Highlighter::with_catalog(self.build_catalog()?).with_class_prefix(&self.class_prefix))
    }
}

impl LanguageConfig {
    fn parse(name: &str, value: &Value) -> Result<Self> {
        let table = expect_table(value, name)?;
        let mut lang = LanguageConfig {
            name: name.to_lowercase(),
            structured: None,
            aliases: Vec::new(),
            rules: Vec::new(),
        };

        for (key, value) in table {
            match key.as_str() {
                "structured" => {
                    lang.structured = Some(value.as_bool().ok_or_else(|| invalid(name, key, "expected a boolean"))?);
                }
                "aliases" => {
                    let items = value.as_array().ok_or_else(|| invalid(name, key, "expected an array"))?;
                    for item in items {
                        let alias = item.as_str().ok_or_else(|| invalid(name, key, "expected strings"))?;
                        lang.aliases.push(alias.to_string());
                    }
                }
                _ => {
                    let category = Category::from_name(key)
                        .ok_or_else(|| GlowError::UnknownCategory(key.clone()))?;
                    lang.rules.push(RuleConfig::parse(name, category, value)?);
                }
            }
        }

        Ok(lang)
    }

    /// Compile the rules into a language definition
    pub fn build(&self) -> Result<LanguageDefinition> {
        let mut lang = LanguageDefinition::new(&self.name);
        for alias in &self.aliases {
            lang.add_alias(alias);
        }
        if self.structured == Some(true) {
            lang.strategy = Strategy::Structured;
        }

        for rule in &self.rules {
            let mut compiled = PatternRule::with_flags(rule.category, &rule.pattern, rule.flags)
                .map_err(|source| GlowError::Pattern {
                    language: self.name.clone(),
                    rule: rule.category.name().to_string(),
                    source,
                })?;

            if rule.group >= compiled.pattern.captures_len() {
                return Err(invalid(
                    &self.name,
                    rule.category.name(),
                    &format!("pattern has no capture group {}", rule.group),
                ));
            }
            compiled = compiled.with_group(rule.group);
            if let Some(class) = rule.class {
                compiled = compiled.with_class(class);
            }
            lang.add_pattern(compiled);
        }

        Ok(lang)
    }
}

impl RuleConfig {
    fn parse(language: &str, category: Category, value: &Value) -> Result<Self> {
        let rule_name = category.name();
        let mut rule = RuleConfig {
            category,
            pattern: String::new(),
            class: None,
            flags: PatternFlags::default(),
            group: 0,
        };

        if let Some(pattern) = value.as_str() {
            rule.pattern = pattern.to_string();
            return Ok(rule);
        }

        let table = value
            .as_table()
            .ok_or_else(|| invalid(language, rule_name, "expected a pattern string or table"))?;

        for (key, value) in table {
            match key.as_str() {
                "pattern" => {
                    rule.pattern = value
                        .as_str()
                        .ok_or_else(|| invalid(language, rule_name, "pattern must be a string"))?
                        .to_string();
                }
                "class" => {
                    let name = value
                        .as_str()
                        .ok_or_else(|| invalid(language, rule_name, "class must be a string"))?;
                    rule.class = Some(
                        TokenClass::from_name(name).ok_or_else(|| GlowError::UnknownClass(name.to_string()))?,
                    );
                }
                "case-insensitive" => {
                    rule.flags.case_insensitive = value
                        .as_bool()
                        .ok_or_else(|| invalid(language, rule_name, "case-insensitive must be a boolean"))?;
                }
                "multiline" => {
                    rule.flags.multi_line = value
                        .as_bool()
                        .ok_or_else(|| invalid(language, rule_name, "multiline must be a boolean"))?;
                }
                "group" => {
                    let group = value
                        .as_integer()
                        .and_then(|n| usize::try_from(n).ok())
                        .ok_or_else(|| invalid(language, rule_name, "group must be a non-negative integer"))?;
                    rule.group = group;
                }
                other => {
                    return Err(invalid(language, rule_name, &format!("unknown key: {other}")));
                }
            }
        }

        if rule.pattern.is_empty() {
            return Err(invalid(language, rule_name, "missing pattern"));
        }
        Ok(rule)
    }
}

fn invalid(language: &str, rule: &str, reason: &str) -> GlowError {
    GlowError::InvalidRule {
        language: language.to_string(),
        rule: rule.to_string(),
        reason: reason.to_string(),
    }
}

fn expect_table<'a>(value: &'a Value, what: &str) -> Result<&'a Table> {
    value
        .as_table()
        .ok_or_else(|| GlowError::Message(format!("{what}: expected a table")))
}

fn parse_prefix(value: &Value) -> Result<String> {
    let prefix = value
        .as_str()
        .ok_or_else(|| GlowError::Message("class-prefix: expected a string".to_string()))?;
    // Must be usable verbatim inside a class attribute
    if !prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(GlowError::Message(format!("class-prefix: invalid characters in {prefix:?}")));
    }
    Ok(prefix.to_string())
}

fn parse_aliases(value: &Value) -> Result<Vec<(String, String)>> {
    let table = expect_table(value, "aliases")?;
    table
        .iter()
        .map(|(alias, target)| {
            target
                .as_str()
                .map(|target| (alias.to_lowercase(), target.to_lowercase()))
                .ok_or_else(|| GlowError::Message(format!("aliases.{alias}: expected a string")))
        })
        .collect()
}
