//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、検証と永続化はユースケースに委譲

pub mod fallback;
pub mod health;
pub mod student;

pub use fallback::not_found;
pub use health::health_check;
pub use student::{
    InsertStudentRequest,
    StudentState,
    find_all_students,
    find_one_student,
    insert_student,
};
