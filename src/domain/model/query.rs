use std::fmt;

use super::book::{parse_year, Book};
use crate::domain::error::DomainError;

/// 検索条件の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCriterion {
    Title,
    Author,
    Year,
}

impl SearchCriterion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Year => "year",
        }
    }

    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "year" => Ok(Self::Year),
            _ => Err(DomainError::UnknownCriterion(s.trim().to_string())),
        }
    }
}

impl fmt::Display for SearchCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 検索クエリ。title/authorは小文字化済みの部分文字列、yearは完全一致。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    Title(String),
    Author(String),
    Year(i64),
}

impl SearchQuery {
    pub fn new(criterion: SearchCriterion, value: &str) -> Result<Self, DomainError> {
        let value = value.trim();
        Ok(match criterion {
            SearchCriterion::Title => Self::Title(value.to_lowercase()),
            SearchCriterion::Author => Self::Author(value.to_lowercase()),
            SearchCriterion::Year => Self::Year(parse_year(value)?),
        })
    }

    pub fn parse(criterion: &str, value: &str) -> Result<Self, DomainError> {
        Self::new(SearchCriterion::parse(criterion)?, value)
    }

    pub fn matches(&self, book: &Book) -> bool {
        match self {
            Self::Title(needle) => book.title().to_lowercase().contains(needle.as_str()),
            Self::Author(needle) => book.author().to_lowercase().contains(needle.as_str()),
            Self::Year(year) => book.year() == *year,
        }
    }
}
