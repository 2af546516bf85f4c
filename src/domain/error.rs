use super::model::id::BookId;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("book not found: {0}")]
    BookNotFound(BookId),

    /// 整数だがIDとして表せない値（負数など）。どのレコードにも一致しない。
    #[error("book not found: {0}")]
    IdOutOfRange(String),

    #[error("{field} must be an integer, got '{value}'")]
    NotAnInteger { field: &'static str, value: String },

    #[error("incorrect status: '{0}'. Use: available, checked_out")]
    UnknownStatus(String),

    #[error("incorrect choice: '{0}'. Use: title, author, year")]
    UnknownCriterion(String),

    #[error("no id left to allocate: the catalog already holds id {0}")]
    IdSpaceExhausted(BookId),
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::BookNotFound(_) | Self::IdOutOfRange(_))
    }

    /// 入力値の解析・検証エラーか（状態は変更されていない）
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::NotAnInteger { .. } | Self::UnknownStatus(_) | Self::UnknownCriterion(_)
        )
    }
}
