//! Named terminal styles with aliases.
//!
//! Panels refer to styles by role (`heading`, `path`, `value`). Roles can
//! alias other roles, so a theme reads in layers:
//!
//! ```text
//! visual:    dim, accent, strong, warn
//! semantic:  heading -> strong, path -> accent, muted -> dim
//! ```
//!
//! [`Theme::validate`] rejects dangling aliases and cycles before any
//! rendering happens.

use std::collections::HashMap;

use console::Style;

/// A panel role that does not lead to a concrete style.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("panel role '{role}' points at undefined role '{target}'")]
    DanglingRole { role: String, target: String },
    #[error("panel roles loop: {}", .roles.join(" -> "))]
    RoleLoop { roles: Vec<String> },
}

#[derive(Debug, Clone)]
enum StyleEntry {
    Concrete(Style),
    Alias(String),
}

/// A set of named styles.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    entries: HashMap<String, StyleEntry>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a concrete style.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.entries
            .insert(name.to_string(), StyleEntry::Concrete(style));
        self
    }

    /// Adds `name` as an alias of `target`.
    pub fn alias(mut self, name: &str, target: &str) -> Self {
        self.entries
            .insert(name.to_string(), StyleEntry::Alias(target.to_string()));
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Follows aliases to a concrete style.
    ///
    /// Returns `None` for unknown names, dangling aliases and cycles.
    pub fn resolve(&self, name: &str) -> Option<&Style> {
        let mut current = name;
        for _ in 0..=self.entries.len() {
            match self.entries.get(current)? {
                StyleEntry::Concrete(style) => return Some(style),
                StyleEntry::Alias(target) => current = target.as_str(),
            }
        }
        None
    }

    /// Applies a named style to `text`.
    ///
    /// Unknown styles leave the text unchanged. With `use_color` off the
    /// text is returned plain.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.resolve(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            _ => text.to_string(),
        }
    }

    /// Checks every alias resolves to a concrete style.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let mut names: Vec<&String> = self.entries.keys().collect();
        names.sort();

        for name in names {
            let mut path = vec![name.clone()];
            let mut current = name.as_str();

            while let Some(StyleEntry::Alias(target)) = self.entries.get(current) {
                if !self.entries.contains_key(target) {
                    return Err(ThemeError::DanglingRole {
                        role: current.to_string(),
                        target: target.clone(),
                    });
                }
                if path.contains(target) {
                    path.push(target.clone());
                    return Err(ThemeError::RoleLoop { roles: path });
                }
                path.push(target.clone());
                current = target.as_str();
            }
        }

        Ok(())
    }
}

/// The theme panels are rendered with.
pub fn default_theme() -> Theme {
    Theme::new()
        .add("dim", Style::new().dim())
        .add("accent", Style::new().cyan())
        .add("strong", Style::new().bold())
        .add("warn", Style::new().yellow())
        .add("error", Style::new().red().bold())
        .add("mark", Style::new().black().on_yellow())
        .alias("heading", "strong")
        .alias("path", "accent")
        .alias("variable", "accent")
        .alias("muted", "dim")
        .alias("value", "strong")
        .alias("score", "dim")
        .alias("category", "warn")
        .alias("unresolved", "error")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_valid() {
        assert!(default_theme().validate().is_ok());
    }

    #[test]
    fn test_resolve_through_aliases() {
        let theme = Theme::new()
            .add("visual", Style::new().cyan())
            .alias("presentation", "visual")
            .alias("semantic", "presentation");
        assert!(theme.resolve("semantic").is_some());
        assert!(theme.resolve("missing").is_none());
    }

    #[test]
    fn test_dangling_role() {
        let theme = Theme::new().alias("orphan", "missing");
        assert_eq!(
            theme.validate(),
            Err(ThemeError::DanglingRole {
                role: "orphan".to_string(),
                target: "missing".to_string(),
            })
        );
    }

    #[test]
    fn test_role_loop() {
        let theme = Theme::new().alias("a", "b").alias("b", "a");
        let err = theme.validate().unwrap_err();
        assert_eq!(err.to_string(), "panel roles loop: a -> b -> a");
        assert!(theme.resolve("a").is_none());
    }

    #[test]
    fn test_dangling_role_message() {
        let err = Theme::new().alias("heading", "bold").validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "panel role 'heading' points at undefined role 'bold'"
        );
    }

    #[test]
    fn test_apply_plain_and_styled() {
        let theme = Theme::new().add("red", Style::new().red());
        assert_eq!(theme.apply("red", "hi", false), "hi");
        assert!(theme.apply("red", "hi", true).contains("\x1b[31m"));
        assert_eq!(theme.apply("nope", "hi", true), "hi");
    }
}
