use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::DomainError;

/// 蔵書の貸出状態。値は2つに閉じている。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    /// 在庫あり（新規登録時の既定値）
    #[default]
    Available,
    /// 貸出中
    CheckedOut,
}

impl BookStatus {
    pub const ALL: [BookStatus; 2] = [BookStatus::Available, BookStatus::CheckedOut];

    /// 永続化・入力で使う正規名
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::CheckedOut => "checked_out",
        }
    }

    /// 入力テキストを解析する。前後の空白を除き大文字小文字を無視して、
    /// 正規名と完全一致するものだけを受け付ける。
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| DomainError::UnknownStatus(s.trim().to_string()))
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
