//! # ドメイン層エラー定義
//!
//! 値オブジェクトの生成時に検出されるルール違反を表現する。
//!
//! 学生レコード全体の検証結果は [`ValidationErrors`](crate::validation::ValidationErrors)
//! で表現する（フィールド単位の違反を複数件まとめて返すため）。
//! `DomainError` は単一の値に対する違反に使う。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値がフォーマット規則に違反している場合に使用する。
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
