use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::BookId;
use super::status::BookStatus;
use crate::domain::error::DomainError;

/// 蔵書追加リクエスト。境界で検証済みの値だけを保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i64,
}

impl NewBook {
    /// 入力テキストから生成する。発行年が整数でなければエラー。
    pub fn parse(title: &str, author: &str, year: &str) -> Result<Self, DomainError> {
        Ok(Self {
            title: title.to_string(),
            author: author.to_string(),
            year: parse_year(year)?,
        })
    }
}

/// 発行年を解析する（範囲の検証はしない）。
pub fn parse_year(s: &str) -> Result<i64, DomainError> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| DomainError::NotAnInteger {
            field: "year",
            value: s.to_string(),
        })
}

/// 蔵書レコード。Catalogが所有し、変更はCatalog経由でのみ行う。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    year: i64,
    status: BookStatus,
    /// 未知のフィールド。読み込んだまま書き戻す。
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Book {
    pub(crate) fn new(id: BookId, req: NewBook) -> Self {
        Self {
            id,
            title: req.title,
            author: req.author,
            year: req.year,
            status: BookStatus::default(),
            extra: Map::new(),
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn status(&self) -> BookStatus {
        self.status
    }

    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    pub(crate) fn set_status(&mut self, status: BookStatus) {
        self.status = status;
    }
}
