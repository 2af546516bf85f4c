//! Snapshot tests — persisted JSON layout and rendered listings.

mod common;

use common::{new_book, standard_service};
use insta::{assert_json_snapshot, assert_snapshot};

use library_catalog::application::service::CatalogService;
use library_catalog::domain::model::id::BookId;
use library_catalog::domain::model::query::SearchQuery;
use library_catalog::infra::json_store::JsonCatalogRepository;
use library_catalog::interface::render::book_list;

// =============================================================================
// Persisted layout
// =============================================================================

#[test]
fn snapshot_catalog_json() {
    let svc = standard_service();
    svc.change_status(BookId::new(2), "checked_out").unwrap();
    svc.delete_book(BookId::new(4)).unwrap();

    assert_json_snapshot!(svc.list_books().unwrap(), @r#"
    [
      {
        "id": 1,
        "title": "Dune",
        "author": "Frank Herbert",
        "year": 1965,
        "status": "available"
      },
      {
        "id": 2,
        "title": "Solaris",
        "author": "Stanisław Lem",
        "year": 1961,
        "status": "checked_out"
      },
      {
        "id": 3,
        "title": "Dune Messiah",
        "author": "Frank Herbert",
        "year": 1969,
        "status": "available"
      }
    ]
    "#);
}

#[test]
fn snapshot_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    let svc = CatalogService::new(JsonCatalogRepository::new(&path));
    svc.add_book(new_book("Мастер и Маргарита", "Михаил Булгаков", 1967))
        .unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert_snapshot!(raw, @r#"
    [
      {
        "id": 1,
        "title": "Мастер и Маргарита",
        "author": "Михаил Булгаков",
        "year": 1967,
        "status": "available"
      }
    ]
    "#);
}

// =============================================================================
// Rendered listings
// =============================================================================

#[test]
fn snapshot_full_listing() {
    let svc = standard_service();
    svc.change_status(BookId::new(3), "checked_out").unwrap();
    let catalog = svc.list_books().unwrap();

    assert_snapshot!(book_list("All books:", "Library is empty.", catalog.books()), @r"
    All books:
    ID: 1, Title: Dune, Author: Frank Herbert, Year: 1965, Status: available
    ID: 2, Title: Solaris, Author: Stanisław Lem, Year: 1961, Status: available
    ID: 3, Title: Dune Messiah, Author: Frank Herbert, Year: 1969, Status: checked out
    ID: 4, Title: Roadside Picnic, Author: Arkady and Boris Strugatsky, Year: 1972, Status: available
    ");
}

#[test]
fn snapshot_author_search() {
    let svc = standard_service();
    let found = svc
        .search(&SearchQuery::parse("author", "HERBERT").unwrap())
        .unwrap();

    assert_snapshot!(book_list("Books found:", "No books found.", &found), @r"
    Books found:
    ID: 1, Title: Dune, Author: Frank Herbert, Year: 1965, Status: available
    ID: 3, Title: Dune Messiah, Author: Frank Herbert, Year: 1969, Status: available
    ");
}

#[test]
fn snapshot_no_results() {
    let svc = standard_service();
    let found = svc
        .search(&SearchQuery::parse("year", "2024").unwrap())
        .unwrap();

    assert_snapshot!(book_list("Books found:", "No books found.", &found), @"No books found.");
}
