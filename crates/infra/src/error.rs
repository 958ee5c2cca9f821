//! # インフラ層エラー
//!
//! 学生リポジトリの操作で起きる失敗を [`InfraError`] 一つにまとめる。
//!
//! [`InfraError`] は種別（[`InfraErrorKind`]）と、生成時点のスパン経路
//! （[`SpanTrace`]）を持つ。API 層は種別でレスポンスを選び、スパン経路は
//! ログにだけ出す。

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// リポジトリ操作の失敗
///
/// ```ignore
/// if let Some((entity, id)) = error.as_conflict() {
///     // 同じ ID の学生が登録済み
/// }
/// ```
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// [`InfraError`] の種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// 接続・クエリ実行の失敗
    #[error("データベースエラー: {0}")]
    Database(#[source] sqlx::Error),

    /// 格納済みの `document` が学生レコードとして読めない
    #[error("学生データの変換に失敗しました: {0}")]
    Serialization(#[source] serde_json::Error),

    /// 主キー重複
    #[error("競合が発生しました: {entity}(id={id})")]
    Conflict {
        /// 例: "Student"
        entity: String,
        id:     String,
    },

    /// 上記に当てはまらない失敗
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

impl InfraError {
    fn new(kind: InfraErrorKind) -> Self {
        Self {
            kind,
            span_trace: SpanTrace::capture(),
        }
    }

    pub fn conflict(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::new(InfraErrorKind::Conflict {
            entity: entity.into(),
            id:     id.into(),
        })
    }

    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::new(InfraErrorKind::Unexpected(msg.into()))
    }

    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// 主キー重複なら `(entity, id)` を返す
    pub fn as_conflict(&self) -> Option<(&str, &str)> {
        match &self.kind {
            InfraErrorKind::Conflict { entity, id } => Some((entity, id)),
            _ => None,
        }
    }

    /// ログ・エラーレスポンスに載せる種別名
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            InfraErrorKind::Database(_) => "database",
            InfraErrorKind::Serialization(_) => "serialization",
            InfraErrorKind::Conflict { .. } => "conflict",
            InfraErrorKind::Unexpected(_) => "unexpected",
        }
    }
}

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}

impl From<sqlx::Error> for InfraError {
    fn from(source: sqlx::Error) -> Self {
        Self::new(InfraErrorKind::Database(source))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(source: serde_json::Error) -> Self {
        Self::new(InfraErrorKind::Serialization(source))
    }
}
