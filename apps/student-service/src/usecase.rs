//! # ユースケース層
//!
//! Student Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: 入力の検証はハンドラではなくユースケースで行う

pub mod student;

pub use student::StudentUseCaseImpl;
