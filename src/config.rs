//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (the meal question and rule)
//! 2. Global config: `$XDG_CONFIG_HOME/booltree/booltree.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `BOOLTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::{meal_rule, Node, MEAL_QUESTION};

/// Unified configuration for booltree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Question printed once at the start of a session
    pub question: String,
    /// Prompt printed before each answer is read
    pub prompt: String,
    /// Printed when an answer matches the rule
    pub correct: String,
    /// Printed when an answer does not match the rule
    pub wrong: String,
    /// Rule tree answers are checked against
    pub rule: Node,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            question: MEAL_QUESTION.into(),
            prompt: ">> ".into(),
            correct: "Correct answer".into(),
            wrong: "Wrong answer".into(),
            rule: meal_rule(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub question: Option<String>,
    pub prompt: Option<String>,
    pub correct: Option<String>,
    pub wrong: Option<String>,
    pub rule: Option<Node>,
}

/// Get the XDG config directory for booltree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "booltree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("booltree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    parse_raw_settings(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn parse_raw_settings(content: &str) -> Result<RawSettings, toml::de::Error> {
    toml::from_str(content)
}

impl Settings {
    /// Merge overlay config onto self (base). Overlay wins where specified.
    ///
    /// The rule is replaced as a whole, never merged node by node.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            question: overlay
                .question
                .clone()
                .unwrap_or_else(|| self.question.clone()),
            prompt: overlay.prompt.clone().unwrap_or_else(|| self.prompt.clone()),
            correct: overlay
                .correct
                .clone()
                .unwrap_or_else(|| self.correct.clone()),
            wrong: overlay.wrong.clone().unwrap_or_else(|| self.wrong.clone()),
            rule: overlay.rule.clone().unwrap_or_else(|| self.rule.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file given on the command line; unlike the
    ///   global file it must exist
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!("load: explicit config {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        Self::apply_env_overrides(current)
    }

    /// Apply BOOLTREE_* environment variables as explicit overrides.
    ///
    /// Only the message strings can be overridden; the rule comes from files.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("BOOLTREE"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("question") {
            settings.question = val;
        }
        if let Ok(val) = config.get_string("prompt") {
            settings.prompt = val;
        }
        if let Ok(val) = config.get_string("correct") {
            settings.correct = val;
        }
        if let Ok(val) = config.get_string("wrong") {
            settings.wrong = val;
        }

        Ok(settings)
    }

    /// Render settings as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize: {}", e),
        })
    }

    /// Commented example config file.
    pub fn template() -> String {
        r#"# booltree configuration
# Global: ~/.config/booltree/booltree.toml (XDG)
# Explicit: booltree --config <file>
# Env overrides: BOOLTREE_QUESTION, BOOLTREE_PROMPT, BOOLTREE_CORRECT, BOOLTREE_WRONG

question = "What are the things you can’t eat in the afternoon?"
prompt = ">> "
correct = "Correct answer"
wrong = "Wrong answer"

# Rule nodes: { keyword = "w" }, { and = [...] }, { or = [...] }, { not = {...} }
# (breakfast || dinner || supper) && !(lunch || brunch)
[rule]
and = [
    { or = [{ keyword = "breakfast" }, { keyword = "dinner" }, { keyword = "supper" }] },
    { not = { or = [{ keyword = "lunch" }, { keyword = "brunch" }] } },
]
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_when_created_then_matches_meal_question() {
        let settings = Settings::default();
        assert_eq!(settings.question, MEAL_QUESTION);
        assert_eq!(settings.prompt, ">> ");
        assert_eq!(settings.correct, "Correct answer");
        assert_eq!(settings.wrong, "Wrong answer");
        assert_eq!(settings.rule, meal_rule());
    }

    #[test]
    fn given_template_when_parsing_then_yields_default_settings() {
        let raw = parse_raw_settings(&Settings::template()).expect("template parses");
        let merged = Settings::default().merge_with(&raw);
        assert_eq!(merged, Settings::default());
        assert_eq!(raw.rule, Some(meal_rule()));
    }

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified_fields() {
        let raw = parse_raw_settings(r#"wrong = "Nope""#).unwrap();
        let merged = Settings::default().merge_with(&raw);
        assert_eq!(merged.wrong, "Nope");
        assert_eq!(merged.correct, "Correct answer");
        assert_eq!(merged.rule, meal_rule());
    }

    #[test]
    fn given_rule_overlay_when_merging_then_replaces_whole_rule() {
        let raw = parse_raw_settings(r#"rule = { not = { keyword = "tea" } }"#).unwrap();
        let merged = Settings::default().merge_with(&raw);
        assert_eq!(merged.rule, Node::not(Node::keyword("tea")));
    }

    #[test]
    fn given_empty_and_in_toml_when_parsing_then_builds_empty_conjunction() {
        let raw = parse_raw_settings("rule = { and = [] }").unwrap();
        assert_eq!(raw.rule, Some(Node::and(Vec::<Node>::new())));
    }

    #[test]
    fn given_unknown_node_kind_when_parsing_then_fails() {
        assert!(parse_raw_settings(r#"rule = { xor = [] }"#).is_err());
    }

    #[test]
    fn given_default_settings_when_rendering_toml_then_contains_messages() {
        let rendered = Settings::default().to_toml().unwrap();
        assert!(rendered.contains("prompt"));
        assert!(rendered.contains(">> "));
        assert!(rendered.contains("breakfast"));
    }
}
