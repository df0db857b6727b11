use thiserror::Error;

/// 環境変数が未設定の場合のバインド先ホスト
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// 環境変数が未設定の場合のポート
pub const DEFAULT_PORT: u16 = 8080;
/// RUST_LOG が未設定の場合のログフィルタ
pub const DEFAULT_LOG_FILTER: &str = "rusty_catalog=debug,tower_http=debug,axum=trace";

/// 設定読み込みのエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// PORTが数値として解釈できない
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}

/// サーバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// 環境変数（HOST, PORT）から読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意の参照関数から読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
