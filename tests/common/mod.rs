//! Shared test harness for integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use library_catalog::application::service::CatalogService;
use library_catalog::domain::model::book::NewBook;
use library_catalog::domain::model::catalog::Catalog;
use library_catalog::domain::repository::{CatalogRepository, StoreError};

// =============================================================================
// InMemoryRepo — テスト用リポジトリ
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum InMemoryError {
    #[error("in-memory store holds unparseable content")]
    Unreadable(#[source] serde_json::Error),
}

impl StoreError for InMemoryError {
    fn is_unreadable(&self) -> bool {
        matches!(self, Self::Unreadable(_))
    }
}

/// ファイルI/O不要のインメモリリポジトリ。load/saveの回数を数える。
pub struct InMemoryRepo {
    content: RefCell<Option<String>>,
    loads: Cell<usize>,
    saves: Cell<usize>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self {
            content: RefCell::new(None),
            loads: Cell::new(0),
            saves: Cell::new(0),
        }
    }

    /// 任意の生テキストを保存済み内容として置く。
    pub fn with_raw(raw: &str) -> Self {
        let repo = Self::new();
        *repo.content.borrow_mut() = Some(raw.to_string());
        repo
    }

    pub fn raw(&self) -> Option<String> {
        self.content.borrow().clone()
    }

    pub fn loads(&self) -> usize {
        self.loads.get()
    }

    pub fn saves(&self) -> usize {
        self.saves.get()
    }
}

impl CatalogRepository for InMemoryRepo {
    type Error = InMemoryError;

    fn load(&self) -> Result<Option<Catalog>, Self::Error> {
        self.loads.set(self.loads.get() + 1);
        match self.content.borrow().as_deref() {
            Some(json) => serde_json::from_str(json)
                .map(Some)
                .map_err(InMemoryError::Unreadable),
            None => Ok(None),
        }
    }

    fn save(&self, catalog: &Catalog) -> Result<(), Self::Error> {
        self.saves.set(self.saves.get() + 1);
        let json = serde_json::to_string_pretty(catalog).unwrap();
        *self.content.borrow_mut() = Some(json);
        Ok(())
    }
}

// =============================================================================
// Fixtures
// =============================================================================

pub fn new_book(title: &str, author: &str, year: i64) -> NewBook {
    NewBook {
        title: title.into(),
        author: author.into(),
        year,
    }
}

/// 標準的なテスト用カタログ:
/// ```text
/// 1. Dune — Frank Herbert (1965)
/// 2. Solaris — Stanisław Lem (1961)
/// 3. Dune Messiah — Frank Herbert (1969)
/// 4. Roadside Picnic — Arkady and Boris Strugatsky (1972)
/// ```
pub fn standard_service() -> CatalogService<InMemoryRepo> {
    let svc = CatalogService::new(InMemoryRepo::new());
    for req in [
        new_book("Dune", "Frank Herbert", 1965),
        new_book("Solaris", "Stanisław Lem", 1961),
        new_book("Dune Messiah", "Frank Herbert", 1969),
        new_book("Roadside Picnic", "Arkady and Boris Strugatsky", 1972),
    ] {
        svc.add_book(req).unwrap();
    }
    svc
}

pub fn ids(catalog: &Catalog) -> Vec<u64> {
    catalog.books().iter().map(|b| b.id().value()).collect()
}

// =============================================================================
// Assertion helpers
// =============================================================================

/// 結果がErrで、メッセージに指定文字列を含むことをassert。
pub fn assert_error_contains<T: std::fmt::Debug>(
    result: Result<T, impl std::fmt::Display>,
    expected: &str,
) {
    match result {
        Err(e) => {
            let msg = e.to_string();
            assert!(
                msg.contains(expected),
                "Expected error containing '{expected}', got: '{msg}'"
            );
        }
        Ok(v) => panic!("Expected error containing '{expected}', got Ok({v:?})"),
    }
}
