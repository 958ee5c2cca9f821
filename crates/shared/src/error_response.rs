//! # エラーレスポンス
//!
//! 失敗時の統一レスポンス形式 `{ "success": false, "message": "...", "error": {...} }` を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換とステータスコードの決定は各サービスの責務
//! - `error.kind` で失敗の種類を識別し、バリデーション失敗は `error.issues` に
//!   フィールド単位の違反を載せる

use serde::{Deserialize, Serialize};

/// 失敗時の既定メッセージ
pub const FAILURE_MESSAGE: &str = "Something is went wrong";

/// 未定義ルートへのアクセス時のメッセージ
pub const NOT_FOUND_MESSAGE: &str = "API Not Found";

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub error:   ErrorDetail,
}

/// `error` フィールドの中身
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// 失敗の種類（例: `"validation_error"`）
    pub kind:   String,
    /// 人間可読な詳細
    pub detail: String,
    /// フィールド単位の違反（バリデーション失敗時のみ）
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<ErrorIssue>,
}

/// フィールド単位の違反
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorIssue {
    pub path:    String,
    pub message: String,
}

impl ErrorResponse {
    /// 汎用コンストラクタ
    pub fn new(message: impl Into<String>, kind: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error:   ErrorDetail {
                kind:   kind.into(),
                detail: detail.into(),
                issues: Vec::new(),
            },
        }
    }

    /// 既定メッセージ（[`FAILURE_MESSAGE`]）でエラーレスポンスを作成する
    pub fn failure(kind: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(FAILURE_MESSAGE, kind, detail)
    }

    /// 未定義ルート用のエラーレスポンスを作成する
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(NOT_FOUND_MESSAGE, "not_found", detail)
    }

    /// フィールド単位の違反を付与する
    pub fn with_issues(mut self, issues: Vec<ErrorIssue>) -> Self {
        self.error.issues = issues;
        self
    }
}
