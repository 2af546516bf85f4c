//! Interactive shell for library-catalog
//!
//! Menu prompts <-> application::CatalogService
//!
//! 6 choices: add, delete, search, list, status, exit

use std::io::{self, BufRead, Write};

use crate::application::error::AppError;
use crate::application::service::CatalogService;
use crate::domain::model::book::NewBook;
use crate::domain::model::id::BookId;
use crate::domain::model::query::SearchQuery;
use crate::domain::repository::CatalogRepository;

use super::render::{book_list, status_label};

const MENU: &str = "\
Library catalog
1. Add book
2. Delete book
3. Search books
4. List all books
5. Change book status
0. Exit";

const SEARCH_MENU: &str = "\
Search by:
1. Title
2. Author
3. Year";

/// 1操作の後にループを続けるかどうか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// 対話シェル。入出力を差し替えられるようにジェネリックにしている。
pub struct Shell<R: CatalogRepository, I: BufRead, O: Write> {
    service: CatalogService<R>,
    input: I,
    output: O,
}

impl<R: CatalogRepository, I: BufRead, O: Write> Shell<R, I, O> {
    pub fn new(service: CatalogService<R>, input: I, output: O) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// 終了が選ばれるか入力が尽きるまでメニューを繰り返す。
    /// 操作の失敗はメッセージを表示してメニューに戻る。
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(choice) = self.prompt("\nChoose an action: ")? else {
                break;
            };
            let flow = match choice.trim() {
                "1" => self.add_book()?,
                "2" => self.delete_book()?,
                "3" => self.search_books()?,
                "4" => self.list_books()?,
                "5" => self.change_status()?,
                "0" => {
                    writeln!(self.output, "Goodbye.")?;
                    Flow::Quit
                }
                _ => {
                    writeln!(self.output, "Incorrect choice, try again.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }
        self.output.flush()
    }

    pub fn into_output(self) -> O {
        self.output
    }

    // --- actions ---

    fn add_book(&mut self) -> io::Result<Flow> {
        let Some(title) = self.prompt("Title: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(author) = self.prompt("Author: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(year) = self.prompt("Year: ")? else {
            return Ok(Flow::Quit);
        };

        let result = NewBook::parse(&title, &author, &year)
            .map_err(AppError::from)
            .and_then(|req| self.service.add_book(req));
        match result {
            Ok(book) => writeln!(
                self.output,
                "Book '{}' added with ID {}.",
                book.title(),
                book.id()
            )?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn delete_book(&mut self) -> io::Result<Flow> {
        let Some(raw_id) = self.prompt("Book ID to delete: ")? else {
            return Ok(Flow::Quit);
        };
        let result = BookId::parse(&raw_id)
            .map_err(AppError::from)
            .and_then(|id| self.service.delete_book(id).map(|_| id));
        match result {
            Ok(id) => writeln!(self.output, "Book {id} deleted.")?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn search_books(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n{SEARCH_MENU}")?;
        let Some(choice) = self.prompt("Criterion: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(value) = self.prompt("Query: ")? else {
            return Ok(Flow::Quit);
        };

        let result = SearchQuery::parse(criterion_from_menu(&choice), &value)
            .map_err(AppError::from)
            .and_then(|query| self.service.search(&query));
        match result {
            Ok(books) => writeln!(
                self.output,
                "{}",
                book_list("\nBooks found:", "No books found.", &books)
            )?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn list_books(&mut self) -> io::Result<Flow> {
        match self.service.list_books() {
            Ok(catalog) => writeln!(
                self.output,
                "{}",
                book_list("\nAll books:", "Library is empty.", catalog.books())
            )?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    /// 現在の状態を見せてから新しい状態を尋ねる。
    fn change_status(&mut self) -> io::Result<Flow> {
        let Some(raw_id) = self.prompt("Book ID: ")? else {
            return Ok(Flow::Quit);
        };
        let current = BookId::parse(&raw_id)
            .map_err(AppError::from)
            .and_then(|id| self.service.find_book(id));
        let book = match current {
            Ok(book) => book,
            Err(e) => {
                self.report(&e)?;
                return Ok(Flow::Continue);
            }
        };

        writeln!(
            self.output,
            "Current status: {}",
            status_label(book.status())
        )?;
        let Some(status) = self.prompt("New status (available/checked_out): ")? else {
            return Ok(Flow::Quit);
        };
        match self.service.change_status(book.id(), &status) {
            Ok(updated) => writeln!(
                self.output,
                "Status of '{}' changed to {}.",
                updated.title(),
                status_label(updated.status())
            )?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    // --- helpers ---

    /// プロンプトを出して1行読む。入力終端ならNone。
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn report(&mut self, e: &AppError) -> io::Result<()> {
        writeln!(self.output, "Error: {e}")
    }
}

/// サブメニューの番号を検索条件名に変換する。番号以外はそのまま名前として扱う。
fn criterion_from_menu(choice: &str) -> &str {
    match choice.trim() {
        "1" => "title",
        "2" => "author",
        "3" => "year",
        other => other,
    }
}
