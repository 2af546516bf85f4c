use log::{debug, warn};

use crate::domain::error::DomainError;
use crate::domain::model::book::{Book, NewBook};
use crate::domain::model::catalog::Catalog;
use crate::domain::model::id::BookId;
use crate::domain::model::query::SearchQuery;
use crate::domain::model::status::BookStatus;
use crate::domain::repository::{CatalogRepository, StoreError};

use super::error::AppError;

/// カタログに対するユースケース。
/// load → mutate → save のパターンで操作し、呼び出しをまたいでキャッシュしない。
pub struct CatalogService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> CatalogService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// 蔵書を追加する。新しいIDを割り当て、状態はavailable。
    pub fn add_book(&self, req: NewBook) -> Result<Book, AppError> {
        let mut catalog = self.load_catalog()?;
        let book = catalog.add(req)?.clone();
        self.persist(&catalog)?;
        debug!("added book {} '{}'", book.id(), book.title());
        Ok(book)
    }

    /// 蔵書を削除する。一致しなければ保存せずNotFound。
    pub fn delete_book(&self, id: BookId) -> Result<(), AppError> {
        let mut catalog = self.load_catalog()?;
        catalog.remove(id)?;
        self.persist(&catalog)?;
        debug!("deleted book {id}");
        Ok(())
    }

    /// 条件に一致する蔵書を保存順で返す。
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<Book>, AppError> {
        let catalog = self.load_catalog()?;
        Ok(catalog.search(query).into_iter().cloned().collect())
    }

    /// 全蔵書を保存順で返す。
    pub fn list_books(&self) -> Result<Catalog, AppError> {
        self.load_catalog()
    }

    pub fn find_book(&self, id: BookId) -> Result<Book, AppError> {
        let catalog = self.load_catalog()?;
        catalog
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::BookNotFound(id).into())
    }

    /// 状態を変更する。IDの存在を先に確認し、その後に状態値を検証する。
    pub fn change_status(&self, id: BookId, status: &str) -> Result<Book, AppError> {
        let mut catalog = self.load_catalog()?;
        if catalog.get(id).is_none() {
            return Err(DomainError::BookNotFound(id).into());
        }
        let status = BookStatus::parse(status)?;
        let book = catalog.set_status(id, status)?.clone();
        self.persist(&catalog)?;
        debug!("book {id} is now {status}");
        Ok(book)
    }

    // --- private ---

    /// 保存先がなければ空、内容が読めなければ警告を出して空として扱う。
    /// 読めないファイルはここでは書き換えない。
    fn load_catalog(&self) -> Result<Catalog, AppError> {
        match self.repo.load() {
            Ok(Some(catalog)) => Ok(catalog),
            Ok(None) => Ok(Catalog::new()),
            Err(e) if e.is_unreadable() => {
                warn!("catalog storage is unreadable, treating it as empty: {e}");
                Ok(Catalog::new())
            }
            Err(e) => Err(AppError::Storage(Box::new(e))),
        }
    }

    fn persist(&self, catalog: &Catalog) -> Result<(), AppError> {
        self.repo
            .save(catalog)
            .map_err(|e| AppError::Storage(Box::new(e)))
    }
}
