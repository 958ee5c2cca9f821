//! # フォールバックハンドラ
//!
//! どのルートにも一致しないリクエストに `404 API Not Found` を返す。

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// 未定義ルートのハンドラ
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound(format!("{method} {uri}"))
}
