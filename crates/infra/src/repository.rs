//! # リポジトリ
//!
//! 永続化操作をトレイトとして定義し、PostgreSQL 実装を提供する。
//!
//! ユースケース層はトレイト経由で依存するため、テストではスタブや
//! [`mock`](crate::mock) のインメモリ実装に差し替えられる。

pub mod student_repository;

pub use student_repository::{PostgresStudentRepository, StudentRepository};
