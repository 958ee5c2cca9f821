//! # Pathshala 共有ユーティリティ
//!
//! ワークスペース全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum には依存しない（HTTP への変換は各サービスの責務）
//! - トレーシング初期化は `observability` feature で有効化する

pub mod api_response;
pub mod error_response;
pub mod health;
pub mod observability;

pub use api_response::ApiResponse;
pub use error_response::{ErrorDetail, ErrorIssue, ErrorResponse};
pub use health::HealthResponse;
