//! # Student Service 設定
//!
//! 環境変数からアプリケーション設定を読み込む。
//!
//! 読み込みは値をそのまま保持するだけで、検証もデフォルト補完も行わない。
//! 失敗するのは `.env` が存在するのに解釈できない場合だけで、
//! 未設定の変数はエラーにならない。
//! 値の解釈（ポート番号のパースなど）は利用側のメソッド
//! （[`AppConfig::bind_addr`]、[`AppConfig::require_database_url`]）が担う。
//!
//! ## 環境変数
//!
//! | 変数名 | 利用箇所 |
//! |--------|----------|
//! | `HOST` | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORT` | ポート番号（デフォルト: `5000`） |
//! | `DATABASE_URL` | PostgreSQL 接続 URL（起動時に必須） |
//! | `NODE_ENV` ほか | 読み込みのみ（現在のエンドポイントでは未使用） |

use std::{
    env,
    fmt,
    net::{IpAddr, SocketAddr},
    path::Path,
};

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

/// 設定値の解釈で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    #[error("PORT は有効なポート番号である必要があります: {0}")]
    InvalidPort(String),

    #[error("HOST は有効な IP アドレスである必要があります: {0}")]
    InvalidHost(String),

    #[error(".env の読み込みに失敗しました: {0}")]
    EnvFile(String),
}

/// アプリケーション設定
///
/// 各フィールドは環境変数の生の値、未設定なら `None`。
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub node_env: Option<String>,
    pub host: Option<String>,
    pub port: Option<String>,
    pub database_url: Option<String>,
    pub bcrypt_salt_rounds: Option<String>,
    pub default_password: Option<String>,
    pub jwt_access_secret: Option<String>,
    pub jwt_access_secret_expires_in: Option<String>,
    pub jwt_refresh_secret: Option<String>,
    pub jwt_refresh_secret_expires_in: Option<String>,
    pub reset_password_ui_link: Option<String>,
    pub auth_user_email: Option<String>,
    pub auth_user_email_password: Option<String>,
}

impl AppConfig {
    /// カレントディレクトリの `.env` と環境変数から読み取る
    pub fn load() -> Result<Self, ConfigError> {
        let cwd = env::current_dir().map_err(|e| ConfigError::EnvFile(e.to_string()))?;
        Self::load_from(&cwd.join(".env"))
    }

    /// 指定した `.env` をプロセスの環境変数に読み込んでから読み取る
    ///
    /// 既に設定されている環境変数は上書きしない。ファイルが存在しない場合は
    /// 環境変数のみを使い、存在するのに解釈できない場合は [`ConfigError::EnvFile`] を返す。
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match dotenvy::from_path(path) {
            Ok(()) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::EnvFile(e.to_string())),
        }
        Ok(Self::from_env())
    }

    /// プロセスの環境変数から読み取る
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のルックアップ関数から読み取る
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            node_env: lookup("NODE_ENV"),
            host: lookup("HOST"),
            port: lookup("PORT"),
            database_url: lookup("DATABASE_URL"),
            bcrypt_salt_rounds: lookup("BCRYPT_SALT_ROUNDS"),
            default_password: lookup("DEFAULT_PASSWORD"),
            jwt_access_secret: lookup("JWT_ACCESS_SECRET"),
            jwt_access_secret_expires_in: lookup("JWT_ACCESS_SECRET_EXPIRES_IN"),
            jwt_refresh_secret: lookup("JWT_REFRESH_SECRET"),
            jwt_refresh_secret_expires_in: lookup("JWT_REFRESH_SECRET_EXPIRES_IN"),
            reset_password_ui_link: lookup("RESET_PASSWORD_UI_LINK"),
            auth_user_email: lookup("AUTH_USER_EMAIL"),
            auth_user_email_password: lookup("AUTH_USER_EMAIL_PASSWORD"),
        }
    }

    /// バインドするソケットアドレスを返す
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let host: IpAddr = match self.host.as_deref() {
            Some(host) => host
                .parse()
                .map_err(|_| ConfigError::InvalidHost(host.to_string()))?,
            None => DEFAULT_HOST
                .parse()
                .map_err(|_| ConfigError::InvalidHost(DEFAULT_HOST.to_string()))?,
        };
        let port = match self.port.as_deref() {
            Some(port) => port
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.to_string()))?,
            None => DEFAULT_PORT,
        };
        Ok(SocketAddr::new(host, port))
    }

    /// データベース接続 URL を返す（未設定ならエラー）
    pub fn require_database_url(&self) -> Result<&str, ConfigError> {
        self.database_url
            .as_deref()
            .ok_or(ConfigError::Missing("DATABASE_URL"))
    }
}

fn redacted(value: &Option<String>) -> Option<&'static str> {
    value.as_ref().map(|_| "[REDACTED]")
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("node_env", &self.node_env)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database_url", &redacted(&self.database_url))
            .field("bcrypt_salt_rounds", &self.bcrypt_salt_rounds)
            .field("default_password", &redacted(&self.default_password))
            .field("jwt_access_secret", &redacted(&self.jwt_access_secret))
            .field(
                "jwt_access_secret_expires_in",
                &self.jwt_access_secret_expires_in,
            )
            .field("jwt_refresh_secret", &redacted(&self.jwt_refresh_secret))
            .field(
                "jwt_refresh_secret_expires_in",
                &self.jwt_refresh_secret_expires_in,
            )
            .field("reset_password_ui_link", &self.reset_password_ui_link)
            .field("auth_user_email", &self.auth_user_email)
            .field(
                "auth_user_email_password",
                &redacted(&self.auth_user_email_password),
            )
            .finish()
    }
}
