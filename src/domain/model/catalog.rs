use serde::{Deserialize, Serialize};

use super::book::{Book, NewBook};
use super::id::BookId;
use super::query::SearchQuery;
use super::status::BookStatus;
use crate::domain::error::DomainError;

/// 蔵書カタログ — 集約ルート。全レコード操作はここを経由する。
/// 挿入順を保持し、ファイルにはJSON配列としてそのまま保存される。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id() == id)
    }

    /// 次に割り当てるID。空なら1、それ以外は現在の最大ID + 1。
    /// 毎回現データから算出するため、最大IDの削除後はそのIDが再利用される。
    /// 最大IDが`u64::MAX`ならIdSpaceExhausted。
    pub fn next_id(&self) -> Result<BookId, DomainError> {
        match self.books.iter().map(Book::id).max() {
            None => Ok(BookId::FIRST),
            Some(max) => max
                .checked_successor()
                .ok_or(DomainError::IdSpaceExhausted(max)),
        }
    }

    /// 蔵書を末尾に追加する。状態は既定値（available）。
    /// IDを割り当てられない場合はカタログを変更しない。
    pub fn add(&mut self, req: NewBook) -> Result<&Book, DomainError> {
        let id = self.next_id()?;
        self.books.push(Book::new(id, req));
        Ok(&self.books[self.books.len() - 1])
    }

    /// 指定IDのレコードを除外する。一致がなければBookNotFound。
    pub fn remove(&mut self, id: BookId) -> Result<(), DomainError> {
        let before = self.books.len();
        self.books.retain(|b| b.id() != id);
        if self.books.len() == before {
            return Err(DomainError::BookNotFound(id));
        }
        Ok(())
    }

    pub fn set_status(&mut self, id: BookId, status: BookStatus) -> Result<&Book, DomainError> {
        let book = self
            .books
            .iter_mut()
            .find(|b| b.id() == id)
            .ok_or(DomainError::BookNotFound(id))?;
        book.set_status(status);
        Ok(book)
    }

    /// 条件に一致するレコードを保存順で返す。
    pub fn search(&self, query: &SearchQuery) -> Vec<&Book> {
        self.books.iter().filter(|b| query.matches(b)).collect()
    }
}
