use crate::domain::error::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// 呼び出し側が回復方法を選ぶための分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 入力値の解析・検証に失敗（状態は変更なし）
    InvalidInput,
    /// IDに一致するレコードがない（状態は変更なし）
    NotFound,
    /// 保存先の読み書きに失敗、または保存内容がこれ以上の追加を受け付けない
    Storage,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(e) if e.is_not_found() => ErrorKind::NotFound,
            Self::Domain(e) if e.is_invalid_input() => ErrorKind::InvalidInput,
            Self::Domain(_) | Self::Storage(_) => ErrorKind::Storage,
        }
    }
}
