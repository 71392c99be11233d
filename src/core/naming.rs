//! core::naming
//!
//! Identifier casing rules and validation.
//!
//! # Casing Forms
//!
//! A single user-supplied name is turned into the three spellings the
//! generated JavaScript needs:
//!
//! - `pascal` - component, type and function suffixes (`TodoItem`)
//! - `lower` - reducer keys and REST resource names (`todoItem`)
//! - `upper` - action type constants (`TODO_ITEM`)
//!
//! For single-word names `lower` and `upper` are plain lowercase and
//! uppercase (`widget`, `WIDGET`).
//!
//! Only ASCII letters and digits survive into the forms. Apostrophes are
//! dropped (`todo's` -> `Todos`) and any other character separates words
//! (`widget/evil` -> `WidgetEvil`), so every form is safe both as a JS
//! symbol and as a single path component.

use convert_case::{Case, Casing};
use serde::Serialize;
use thiserror::Error;

/// Errors from identifier validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("a name is required")]
    Blank,

    #[error("invalid name '{0}': must start with a letter")]
    InvalidStart(String),

    #[error("invalid name '{0}': contains no letters or digits")]
    NoWordCharacters(String),
}

/// A validated container identifier with its derived casing forms.
///
/// # Example
///
/// ```
/// use crudgen::core::naming::Identifier;
///
/// let id = Identifier::new("todo item").unwrap();
/// assert_eq!(id.pascal(), "TodoItem");
/// assert_eq!(id.lower(), "todoItem");
/// assert_eq!(id.upper(), "TODO_ITEM");
///
/// assert!(Identifier::new("   ").is_err());
/// assert!(Identifier::new("9lives").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifier {
    raw: String,
    pascal: String,
    lower: String,
    upper: String,
}

impl Identifier {
    /// Derive all casing forms from a raw name.
    ///
    /// # Errors
    ///
    /// Returns `IdentifierError::Blank` for empty or whitespace-only input and
    /// `IdentifierError::InvalidStart` when the name cannot become a JS symbol,
    /// and `IdentifierError::NoWordCharacters` when nothing usable is left
    /// after punctuation is removed.
    pub fn new(raw: impl Into<String>) -> Result<Self, IdentifierError> {
        let raw = raw.into();
        if is_blank(&raw) {
            return Err(IdentifierError::Blank);
        }

        let words = symbol_words(&raw);
        if is_blank(&words) {
            return Err(IdentifierError::NoWordCharacters(raw));
        }

        let pascal = words.to_case(Case::Pascal);
        if !pascal.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(IdentifierError::InvalidStart(raw));
        }

        let lower = words.to_case(Case::Camel);
        let upper = words.to_case(Case::Constant);

        Ok(Self {
            raw,
            pascal,
            lower,
            upper,
        })
    }

    /// The name exactly as the user typed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn pascal(&self) -> &str {
        &self.pascal
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    pub fn upper(&self) -> &str {
        &self.upper
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pascal)
    }
}

/// True for empty or whitespace-only input.
pub fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

/// Reduce a raw name to space-separated ASCII words.
fn symbol_words(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '\'' | '\u{2019}'))
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
