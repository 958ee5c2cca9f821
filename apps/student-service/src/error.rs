//! # Student Service エラー定義
//!
//! Student Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! 学生 API の失敗はすべて `500` と統一メッセージ
//! （`"Something is went wrong"`）で返す。失敗の種類は `error.kind` で区別する。
//! `404` は未定義ルートのフォールバックでのみ使用する。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pathshala_domain::validation::ValidationErrors;
use pathshala_infra::InfraError;
use pathshala_shared::{ErrorIssue, ErrorResponse};
use thiserror::Error;

/// Student Service で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// 入力がバリデーションに失敗した
    #[error("バリデーションエラー: {0}")]
    Validation(#[from] ValidationErrors),

    /// ルートが見つからない
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// 同じ ID の学生が既に存在する
    #[error("競合が発生しました: {0}")]
    Conflict(String),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),
}

impl ApiError {
    /// レスポンスの `error.kind` に載せる種別名
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::NotFound(_) => "not_found",
            ApiError::Conflict(_) => "conflict",
            ApiError::Database(_) => "database_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let (status, body) = match self {
            ApiError::Validation(errors) => {
                tracing::debug!(issues = errors.len(), "バリデーションエラー: {}", errors);
                let detail = errors.to_string();
                let issues = errors
                    .into_issues()
                    .into_iter()
                    .map(|issue| ErrorIssue {
                        path:    issue.path,
                        message: issue.message,
                    })
                    .collect();
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::failure(kind, detail).with_issues(issues),
                )
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg)),
            ApiError::Conflict(msg) => {
                tracing::warn!("競合が発生しました: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::failure(kind, msg),
                )
            }
            ApiError::Database(e) => {
                tracing::error!(
                    error.kind = e.kind_name(),
                    span_trace = %e.span_trace(),
                    "データベースエラー: {}",
                    e
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::failure(kind, e.to_string()),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
