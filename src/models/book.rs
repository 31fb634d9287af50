//! Book record and request payload validation
//!
//! `BookDraft` is the raw payload as deserialized from a request body.
//! Each operation parses it into its own typed value: `NewBook` for
//! create, `BookUpdate` for full replace, `BookPatch` for partial update.
//! Invalid input returns a `ValidationError` listing every violated field.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::ValidationError;

/// Maximum length for title, author, and publisher.
const MAX_TEXT_LEN: usize = 255;

/// ISBN length bounds (covers ISBN-10 and ISBN-13 with separators).
const MIN_ISBN_LEN: usize = 10;
const MAX_ISBN_LEN: usize = 20;

const MAX_LANGUAGE_LEN: usize = 50;

/// Earliest accepted publication year.
const MIN_PUBLISHED_YEAR: i32 = 1000;

/// Language assigned when a create payload omits it.
pub const DEFAULT_LANGUAGE: &str = "English";

/// Book row as stored.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    pub published_year: Option<i32>,
    pub publisher: Option<String>,
    pub language: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw book payload, before validation. Every field is optional here;
/// the per-operation validators decide what is required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookDraft {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub published_year: Option<i32>,
    pub publisher: Option<String>,
    pub language: Option<String>,
}

/// Validated create payload.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    pub published_year: Option<i32>,
    pub publisher: Option<String>,
    pub language: String,
}

/// Validated full-update payload. Absent optional fields are written as
/// NULLs (full-replace semantics); `language` keeps its create default.
#[derive(Debug, Clone)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub published_year: Option<i32>,
    pub publisher: Option<String>,
    pub language: String,
}

/// Validated partial-update payload. Only present fields are written.
#[derive(Debug, Clone, Default)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub published_year: Option<i32>,
    pub publisher: Option<String>,
    pub language: Option<String>,
}

impl BookPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.isbn.is_none()
            && self.published_year.is_none()
            && self.publisher.is_none()
            && self.language.is_none()
    }
}

impl BookDraft {
    /// Parse a create payload: `title` and `author` are required,
    /// `language` defaults to [`DEFAULT_LANGUAGE`] when absent.
    pub fn validate_create(mut self) -> Result<NewBook, ValidationError> {
        let mut errors = ValidationError::new();

        let title = required_text(self.title.take(), TITLE, &mut errors);
        let author = required_text(self.author.take(), AUTHOR, &mut errors);
        self.check_optional_fields(&mut errors);

        match (title, author) {
            (Some(title), Some(author)) if errors.is_empty() => Ok(NewBook {
                title,
                author,
                isbn: self.isbn,
                published_year: self.published_year,
                publisher: self.publisher,
                language: self
                    .language
                    .unwrap_or_else(|| DEFAULT_LANGUAGE.to_owned()),
            }),
            _ => Err(errors),
        }
    }

    /// Parse a full-update payload: same rules as create with every field
    /// optional. `language` still defaults, matching the create schema.
    pub fn validate_update(self) -> Result<BookUpdate, ValidationError> {
        let mut errors = ValidationError::new();

        self.check_present_text(&mut errors);
        self.check_optional_fields(&mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(BookUpdate {
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            published_year: self.published_year,
            publisher: self.publisher,
            language: self
                .language
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_owned()),
        })
    }

    /// Parse a partial-update payload: per-field rules, no defaulting.
    pub fn validate_patch(self) -> Result<BookPatch, ValidationError> {
        let mut errors = ValidationError::new();

        self.check_present_text(&mut errors);
        self.check_optional_fields(&mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(BookPatch {
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            published_year: self.published_year,
            publisher: self.publisher,
            language: self.language,
        })
    }

    /// Rules for title/author when they are supplied but not required.
    fn check_present_text(&self, errors: &mut ValidationError) {
        if let Some(title) = &self.title {
            check_text(title, TITLE, errors);
        }
        if let Some(author) = &self.author {
            check_text(author, AUTHOR, errors);
        }
    }

    /// Rules shared by every operation for the always-optional fields.
    fn check_optional_fields(&self, errors: &mut ValidationError) {
        if let Some(isbn) = &self.isbn {
            let len = isbn.chars().count();
            if len < MIN_ISBN_LEN {
                errors.push("isbn", "ISBN must be at least 10 characters");
            } else if len > MAX_ISBN_LEN {
                errors.push("isbn", "ISBN too long");
            }
        }

        if let Some(year) = self.published_year {
            if year < MIN_PUBLISHED_YEAR {
                errors.push("published_year", "Invalid year");
            } else if year > current_year() {
                errors.push("published_year", "Year cannot be in future");
            }
        }

        if let Some(publisher) = &self.publisher {
            if publisher.chars().count() > MAX_TEXT_LEN {
                errors.push("publisher", "Publisher name too long");
            }
        }

        if let Some(language) = &self.language {
            if language.chars().count() > MAX_LANGUAGE_LEN {
                errors.push("language", "Language too long");
            }
        }
    }
}

/// Field name plus its validation messages.
struct TextRules {
    field: &'static str,
    required: &'static str,
    too_long: &'static str,
}

const TITLE: TextRules = TextRules {
    field: "title",
    required: "Title is required",
    too_long: "Title too long",
};

const AUTHOR: TextRules = TextRules {
    field: "author",
    required: "Author is required",
    too_long: "Author name too long",
};

fn required_text(
    value: Option<String>,
    rules: TextRules,
    errors: &mut ValidationError,
) -> Option<String> {
    match value {
        Some(text) if !text.is_empty() => {
            check_text(&text, rules, errors);
            Some(text)
        }
        _ => {
            errors.push(rules.field, rules.required);
            None
        }
    }
}

fn check_text(text: &str, rules: TextRules, errors: &mut ValidationError) {
    if text.is_empty() {
        errors.push(rules.field, rules.required);
    } else if text.chars().count() > MAX_TEXT_LEN {
        errors.push(rules.field, rules.too_long);
    }
}

fn current_year() -> i32 {
    Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: Option<&str>, author: Option<&str>) -> BookDraft {
        BookDraft {
            title: title.map(str::to_owned),
            author: author.map(str::to_owned),
            ..BookDraft::default()
        }
    }

    #[test]
    fn create_requires_title_and_author() {
        let err = BookDraft::default().validate_create().unwrap_err();
        let fields: Vec<_> = err.errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["title", "author"]);
    }

    #[test]
    fn create_defaults_language() {
        let book = draft(Some("Dune"), Some("Herbert"))
            .validate_create()
            .unwrap();
        assert_eq!(book.language, "English");
    }

    #[test]
    fn create_keeps_explicit_language() {
        let mut d = draft(Some("Dune"), Some("Herbert"));
        d.language = Some("French".into());
        assert_eq!(d.validate_create().unwrap().language, "French");
    }

    #[test]
    fn rejects_long_title() {
        let long = "x".repeat(256);
        let err = draft(Some(&long), Some("Herbert"))
            .validate_create()
            .unwrap_err();
        assert_eq!(err.errors()[0].message, "Title too long");

        let ok = "x".repeat(255);
        assert!(draft(Some(&ok), Some("Herbert")).validate_create().is_ok());
    }

    #[test]
    fn rejects_isbn_out_of_bounds() {
        let mut d = draft(Some("Dune"), Some("Herbert"));
        d.isbn = Some("123".into());
        let err = d.validate_create().unwrap_err();
        assert_eq!(err.errors()[0].message, "ISBN must be at least 10 characters");

        let mut d = draft(Some("Dune"), Some("Herbert"));
        d.isbn = Some("1".repeat(21));
        let err = d.validate_create().unwrap_err();
        assert_eq!(err.errors()[0].message, "ISBN too long");
    }

    #[test]
    fn rejects_year_out_of_range() {
        let mut d = draft(Some("Dune"), Some("Herbert"));
        d.published_year = Some(999);
        let err = d.validate_create().unwrap_err();
        assert_eq!(err.errors()[0].message, "Invalid year");

        let mut d = draft(Some("Dune"), Some("Herbert"));
        d.published_year = Some(current_year() + 1);
        let err = d.validate_create().unwrap_err();
        assert_eq!(err.errors()[0].message, "Year cannot be in future");

        let mut d = draft(Some("Dune"), Some("Herbert"));
        d.published_year = Some(current_year());
        assert!(d.validate_create().is_ok());
    }

    #[test]
    fn update_allows_missing_title_but_defaults_language() {
        let upd = BookDraft::default().validate_update().unwrap();
        assert!(upd.title.is_none());
        assert_eq!(upd.language, "English");
    }

    #[test]
    fn update_rejects_empty_title() {
        let err = draft(Some(""), None).validate_update().unwrap_err();
        assert_eq!(err.errors()[0].message, "Title is required");
    }

    #[test]
    fn patch_does_not_default_language() {
        let patch = BookDraft::default().validate_patch().unwrap();
        assert!(patch.language.is_none());
        assert!(patch.is_empty());
    }

    #[test]
    fn patch_with_one_field_is_not_empty() {
        let patch = draft(None, Some("Frank Herbert"))
            .validate_patch()
            .unwrap();
        assert!(!patch.is_empty());
        assert_eq!(patch.author.as_deref(), Some("Frank Herbert"));
    }
}
