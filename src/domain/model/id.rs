use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::DomainError;

/// 蔵書ID。カタログ内で一意な正の整数で、割り当て後は変更されない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u64);

impl BookId {
    pub const FIRST: BookId = BookId(1);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// 次の連番ID。`u64::MAX`の次はない。
    pub fn checked_successor(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// 入力テキストからIDを解析する（前後の空白は無視）。
    ///
    /// 整数として読めるがIDの範囲外（負数・桁あふれ）の値は、
    /// どのレコードにも一致しないためBookNotFound扱いになる。
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<u64>() {
            return Ok(Self(value));
        }
        if is_integer_literal(trimmed) {
            return Err(DomainError::IdOutOfRange(trimmed.to_string()));
        }
        Err(DomainError::NotAnInteger {
            field: "id",
            value: s.to_string(),
        })
    }
}

/// 符号付きの10進整数表記か
fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(BookId::parse(" 42\n").unwrap(), BookId::new(42));
    }

    #[test]
    fn parse_rejects_non_integer() {
        let err = BookId::parse("forty-two").unwrap_err();
        assert!(err.is_invalid_input());
        assert!(BookId::parse("").unwrap_err().is_invalid_input());
        assert!(BookId::parse("4.2").unwrap_err().is_invalid_input());
        assert!(BookId::parse("-").unwrap_err().is_invalid_input());
    }

    #[test]
    fn out_of_range_integers_are_not_found() {
        for input in ["-1", "-0", "18446744073709551616", "-99999999999999999999999"] {
            let err = BookId::parse(input).unwrap_err();
            assert!(err.is_not_found(), "{input} should be not found");
            assert_eq!(err.to_string(), format!("book not found: {input}"));
        }
    }

    #[test]
    fn largest_id_parses() {
        assert_eq!(
            BookId::parse("18446744073709551615").unwrap(),
            BookId::new(u64::MAX)
        );
    }

    #[test]
    fn successor_stops_at_max() {
        assert_eq!(BookId::new(7).checked_successor(), Some(BookId::new(8)));
        assert_eq!(BookId::new(u64::MAX).checked_successor(), None);
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&BookId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
