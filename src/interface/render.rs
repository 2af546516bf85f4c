//! Human-readable rendering shared by the shell, the one-shot CLI and the MCP tools.
//!
//! Status display text lives here only; the domain knows canonical names.

use crate::domain::model::book::Book;
use crate::domain::model::status::BookStatus;

pub fn status_label(status: BookStatus) -> &'static str {
    match status {
        BookStatus::Available => "available",
        BookStatus::CheckedOut => "checked out",
    }
}

/// 1冊を1行で表示する。
pub fn book_line(book: &Book) -> String {
    format!(
        "ID: {}, Title: {}, Author: {}, Year: {}, Status: {}",
        book.id(),
        book.title(),
        book.author(),
        book.year(),
        status_label(book.status())
    )
}

/// 見出し付きの一覧。空なら`empty_message`だけを返す。
pub fn book_list<'a>(
    heading: &str,
    empty_message: &str,
    books: impl IntoIterator<Item = &'a Book>,
) -> String {
    let lines: Vec<String> = books.into_iter().map(book_line).collect();
    if lines.is_empty() {
        return empty_message.to_string();
    }
    format!("{heading}\n{}", lines.join("\n"))
}
