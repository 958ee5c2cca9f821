//! # Pathshala ドメイン層
//!
//! 学生レコードのドメインモデルと、その入力検証を定義する。
//!
//! ## 設計方針
//!
//! - **値オブジェクト**: 形式に制約のある値（電話番号、メールアドレス）は
//!   専用の型で表現し、生成時に検証する
//! - **純粋な検証関数**: JSON 入力を受け取り、検証済みエンティティか違反一覧を返す
//! - **ドメインエラー**: 単一の値に対するルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! student-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`student`] - 学生・保護者モデルと検証関数
//! - [`validation`] - フィールド単位の検証基盤と違反一覧

pub mod error;
pub mod student;
pub mod validation;

pub use error::DomainError;
