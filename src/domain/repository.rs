use super::model::catalog::Catalog;

/// 永続化層のエラー。読み込んだ内容が解析できない場合を区別できること。
pub trait StoreError: std::error::Error + Send + Sync + 'static {
    /// 保存先は存在するが内容がカタログとして読めない
    fn is_unreadable(&self) -> bool;
}

/// 永続化の抽象。Infra層が実装する。
/// カタログ全体を単位として読み書きする。
pub trait CatalogRepository {
    type Error: StoreError;

    /// 保存先が存在しなければ`Ok(None)`。
    fn load(&self) -> Result<Option<Catalog>, Self::Error>;
    fn save(&self, catalog: &Catalog) -> Result<(), Self::Error>;
}
