//! # Student Service ライブラリ
//!
//! 設定・ユースケース・ハンドラと、それらを束ねるルーターを公開する。
//! バイナリ（`main.rs`）と統合テストの両方から利用する。

pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;

use std::sync::Arc;

use axum::{Router, routing::get};
use handler::{
    StudentState,
    find_all_students,
    find_one_student,
    health_check,
    insert_student,
    not_found,
};
use tower_http::trace::TraceLayer;

/// アプリケーションのルーターを構築する
///
/// | メソッド | パス | ハンドラ |
/// |----------|------|----------|
/// | GET | `/health` | [`health_check`] |
/// | GET | `/students` | [`find_all_students`] |
/// | POST | `/students` | [`insert_student`] |
/// | GET | `/students/{id}` | [`find_one_student`] |
///
/// 上記以外のパス、および既知のパスへの未対応メソッドは [`not_found`] が
/// `404` を返す。
pub fn build_app(state: Arc<StudentState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/students", get(find_all_students).post(insert_student))
        .route("/students/{id}", get(find_one_student))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
