//! Pagination and search query parsing
//!
//! `page` and `limit` arrive as numeric strings and default to "1" and
//! "10". Parsing accepts digits only; zero values pass the parse and are
//! rejected by handlers with a 400, so `Pagination` itself makes no
//! positivity promise.

use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

const DEFAULT_PAGE: &str = "1";
const DEFAULT_LIMIT: &str = "10";

/// Raw `page`/`limit` query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Raw search query parameters: required term plus pagination.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Parsed pagination window.
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Pagination {
    /// SQL OFFSET for this window.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.limit)
    }

    pub fn is_positive(&self) -> bool {
        self.page >= 1 && self.limit >= 1
    }
}

impl PageQuery {
    pub fn validate(self) -> Result<Pagination, ValidationError> {
        parse_pagination(self.page, self.limit)
    }
}

impl SearchQuery {
    /// Parse into the search term and pagination window.
    pub fn validate(self) -> Result<(String, Pagination), ValidationError> {
        let mut errors = ValidationError::new();

        let term = match self.q {
            Some(q) if !q.is_empty() => Some(q),
            _ => {
                errors.push("q", "Search term is required");
                None
            }
        };

        let page = match parse_pagination(self.page, self.limit) {
            Ok(page) => Some(page),
            Err(page_errors) => {
                for err in page_errors.into_errors() {
                    errors.push(err.field, err.message);
                }
                None
            }
        };

        match (term, page) {
            (Some(term), Some(page)) if errors.is_empty() => Ok((term, page)),
            _ => Err(errors),
        }
    }
}

fn parse_pagination(
    page: Option<String>,
    limit: Option<String>,
) -> Result<Pagination, ValidationError> {
    let mut errors = ValidationError::new();

    let page = parse_count("page", page.as_deref().unwrap_or(DEFAULT_PAGE), &mut errors);
    let limit = parse_count(
        "limit",
        limit.as_deref().unwrap_or(DEFAULT_LIMIT),
        &mut errors,
    );

    match (page, limit) {
        (Some(page), Some(limit)) => Ok(Pagination { page, limit }),
        _ => Err(errors),
    }
}

/// All-digits parse; signs, whitespace, and overflow are rejected.
fn parse_count(field: &'static str, raw: &str, errors: &mut ValidationError) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        errors.push(field, "must be a number");
        return None;
    }
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(field, "must be a number");
            None
        }
    }
}

/// Pagination metadata reported with every windowed response.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PageMeta {
    pub page: u32,
    pub limit: u32,
    pub total: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

impl PageMeta {
    /// Compute `totalPages = ceil(total / limit)`. `limit` must be
    /// positive, which handlers enforce before any query runs.
    pub fn new(page: &Pagination, total: i64) -> Self {
        let limit = i64::from(page.limit);
        Self {
            page: page.page,
            limit: page.limit,
            total,
            total_pages: (total + limit - 1) / limit,
        }
    }
}

/// One page of results plus its metadata.
#[derive(Debug, Clone)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page_of_ten() {
        let page = PageQuery::default().validate().unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 10);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn offset_calculation() {
        let page = Pagination { page: 3, limit: 25 };
        assert_eq!(page.offset(), 50);
    }

    #[test]
    fn rejects_non_numeric_strings() {
        let query = PageQuery {
            page: Some("abc".into()),
            limit: Some("-1".into()),
        };
        let err = query.validate().unwrap_err();
        let fields: Vec<_> = err.errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["page", "limit"]);
    }

    #[test]
    fn zero_parses_but_is_not_positive() {
        let query = PageQuery {
            page: Some("0".into()),
            limit: None,
        };
        let page = query.validate().unwrap();
        assert_eq!(page.page, 0);
        assert!(!page.is_positive());
    }

    #[test]
    fn search_requires_term() {
        let err = SearchQuery::default().validate().unwrap_err();
        assert_eq!(err.errors()[0].field, "q");
        assert_eq!(err.errors()[0].message, "Search term is required");
    }

    #[test]
    fn search_parses_term_and_pagination() {
        let query = SearchQuery {
            q: Some("dune".into()),
            page: Some("2".into()),
            limit: None,
        };
        let (term, page) = query.validate().unwrap();
        assert_eq!(term, "dune");
        assert_eq!(page.page, 2);
        assert_eq!(page.limit, 10);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = Pagination { page: 1, limit: 10 };
        assert_eq!(PageMeta::new(&page, 0).total_pages, 0);
        assert_eq!(PageMeta::new(&page, 10).total_pages, 1);
        assert_eq!(PageMeta::new(&page, 25).total_pages, 3);
    }
}
