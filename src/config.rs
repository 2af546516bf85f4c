use std::path::{Path, PathBuf};

/// 保存先を指定する環境変数
pub const DATA_FILE_ENV: &str = "LIBRARY_CATALOG_FILE";
/// 指定がない場合の保存先（カレントディレクトリ）
pub const DEFAULT_DATA_FILE: &str = "library.json";
/// `RUST_LOG`未指定時のログフィルタ
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// 実行時設定。`--file` > `LIBRARY_CATALOG_FILE` > `library.json` の順で解決する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    data_file: PathBuf,
}

impl Config {
    pub fn new(data_file: Option<PathBuf>) -> Self {
        Self {
            data_file: data_file.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE)),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

/// ログ出力を初期化する。出力先は常にstderr（stdoutは画面とMCPが使う）。
pub fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER),
    )
    .target(env_logger::Target::Stderr)
    .format_timestamp(None)
    .init();
}
