//! Command-line surface for library-catalog
//!
//! Without a subcommand the interactive shell starts. `serve` runs the MCP
//! server; the remaining subcommands run exactly one catalog operation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::error::AppError;
use crate::application::service::CatalogService;
use crate::config::{Config, DATA_FILE_ENV};
use crate::domain::model::book::NewBook;
use crate::domain::model::id::BookId;
use crate::domain::model::query::SearchQuery;
use crate::domain::repository::CatalogRepository;

use super::render::{book_list, status_label};

#[derive(Debug, Parser)]
#[command(name = "library-catalog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Single-user library catalog backed by a JSON file")]
pub struct Cli {
    /// Catalog file
    #[arg(short, long, global = true, env = DATA_FILE_ENV)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::new(self.file.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Interactive menu (default)
    Shell,
    /// MCP server on stdio
    Serve,
    #[command(flatten)]
    Op(Operation),
}

/// カタログ操作を1回だけ行うサブコマンド。
/// 年・ID・検索語は負数（`-375`など）もそのまま値として受け付ける。
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Operation {
    /// Add a book
    Add {
        title: String,
        author: String,
        #[arg(allow_negative_numbers = true)]
        year: String,
    },
    /// Delete a book by ID
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: String,
    },
    /// Search by title, author or year
    Search {
        criterion: String,
        #[arg(allow_negative_numbers = true)]
        query: String,
    },
    /// List all books
    List,
    /// Set a book's status (available, checked_out)
    Status {
        #[arg(allow_negative_numbers = true)]
        id: String,
        status: String,
    },
}

/// 単発の操作を実行し、表示用テキストを返す。
pub fn execute<R: CatalogRepository>(
    service: &CatalogService<R>,
    operation: &Operation,
) -> Result<String, AppError> {
    match operation {
        Operation::Add {
            title,
            author,
            year,
        } => {
            let book = service.add_book(NewBook::parse(title, author, year)?)?;
            Ok(format!(
                "Book '{}' added with ID {}.",
                book.title(),
                book.id()
            ))
        }
        Operation::Delete { id } => {
            let id = BookId::parse(id)?;
            service.delete_book(id)?;
            Ok(format!("Book {id} deleted."))
        }
        Operation::Search { criterion, query } => {
            let query = SearchQuery::parse(criterion, query)?;
            let books = service.search(&query)?;
            Ok(book_list("Books found:", "No books found.", &books))
        }
        Operation::List => {
            let catalog = service.list_books()?;
            Ok(book_list("All books:", "Library is empty.", catalog.books()))
        }
        Operation::Status { id, status } => {
            let book = service.change_status(BookId::parse(id)?, status)?;
            Ok(format!(
                "Status of '{}' changed to {}.",
                book.title(),
                status_label(book.status())
            ))
        }
    }
}
