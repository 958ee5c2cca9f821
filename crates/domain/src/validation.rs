//! # バリデーション基盤
//!
//! JSON 入力をフィールド単位で検証するための共通部品。
//!
//! ## 設計方針
//!
//! - **純粋関数**: 各バリデータは入力と違反リストのみを受け取り、副作用を持たない
//! - **全件収集**: 最初の違反で止めず、すべての違反を [`ValidationErrors`] に集める
//! - **JSON 起点**: `serde_json::Value` を直接検証するため、型不一致や欠落も
//!   デシリアライズエラーではなくフィールド単位の違反として報告できる
//!
//! ## メッセージ
//!
//! | 状況 | メッセージ |
//! |------|-----------|
//! | 必須フィールドの欠落 | `Required` |
//! | 型不一致 | `Expected string, received number` |
//! | 最小長未満 | `String must contain at least 1 character(s)` |
//! | 最大長超過 | `String must contain at most 20 character(s)` |
//! | 列挙値以外 | `Invalid enum value. Expected 'a' \| 'b', received 'c'` |

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

/// JSON オブジェクトの型エイリアス
pub(crate) type JsonObject = Map<String, JsonValue>;

// =========================================================================
// FieldPath（フィールドパス）
// =========================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Key(String),
    Index(usize),
}

/// 違反箇所を指すフィールドパス
///
/// ルートは空パス。表示時はドット区切りになる（`guardian.0.contact_number`）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<Segment>);

impl FieldPath {
    /// ルートパスを返す
    pub fn root() -> Self {
        Self::default()
    }

    /// キーを連結した子パスを返す
    pub fn key(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Key(key.to_string()));
        Self(segments)
    }

    /// 配列インデックスを連結した子パスを返す
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Index(index));
        Self(segments)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            match segment {
                Segment::Key(key) => f.write_str(key)?,
                Segment::Index(index) => write!(f, "{index}")?,
            }
        }
        Ok(())
    }
}

// =========================================================================
// ValidationIssue / ValidationErrors
// =========================================================================

/// フィールド単位の違反
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// ドット区切りのフィールドパス
    pub path:    String,
    /// 人間可読なメッセージ
    pub message: String,
}

/// 検証失敗時に返す違反の一覧
///
/// 入力順（フィールドの検証順）を保持する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationIssue>);

impl ValidationErrors {
    /// 単一の違反から作成する
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![ValidationIssue {
            path:    path.into(),
            message: message.into(),
        }])
    }

    /// 違反の一覧を参照する
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.0
    }

    /// 違反を取り出す
    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 指定パスの違反メッセージを取得する
    pub fn messages_at(&self, path: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|issue| issue.path == path)
            .map(|issue| issue.message.as_str())
            .collect()
    }

    pub(crate) fn push(&mut self, path: &FieldPath, message: impl Into<String>) {
        self.0.push(ValidationIssue {
            path:    path.to_string(),
            message: message.into(),
        });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            if issue.path.is_empty() {
                f.write_str(&issue.message)?;
            } else {
                write!(f, "{}: {}", issue.path, issue.message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// =========================================================================
// JSON 型チェック
// =========================================================================

/// JSON 値の型名を返す
pub(crate) fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

fn type_mismatch(expected: &str, actual: &JsonValue) -> String {
    format!("Expected {expected}, received {}", json_type_name(actual))
}

/// 値がオブジェクトであることを要求する
pub(crate) fn expect_object<'a>(
    value: &'a JsonValue,
    path: &FieldPath,
    errors: &mut ValidationErrors,
) -> Option<&'a JsonObject> {
    match value {
        JsonValue::Object(object) => Some(object),
        other => {
            errors.push(path, type_mismatch("object", other));
            None
        }
    }
}

/// 必須フィールドを取得する（欠落時は `Required`）
pub(crate) fn required<'a>(
    object: &'a JsonObject,
    key: &str,
    path: &FieldPath,
    errors: &mut ValidationErrors,
) -> Option<&'a JsonValue> {
    let value = object.get(key);
    if value.is_none() {
        errors.push(&path.key(key), "Required");
    }
    value
}

/// 値が文字列であることを要求する
pub(crate) fn expect_string<'a>(
    value: &'a JsonValue,
    path: &FieldPath,
    errors: &mut ValidationErrors,
) -> Option<&'a str> {
    match value {
        JsonValue::String(s) => Some(s),
        other => {
            errors.push(path, type_mismatch("string", other));
            None
        }
    }
}

/// 必須の文字列フィールドを取得する
pub(crate) fn required_string<'a>(
    object: &'a JsonObject,
    key: &str,
    path: &FieldPath,
    errors: &mut ValidationErrors,
) -> Option<&'a str> {
    let value = required(object, key, path, errors)?;
    expect_string(value, &path.key(key), errors)
}

/// 任意の文字列フィールドを取得する
///
/// 欠落時は違反なしで `None`。`null` は型不一致として扱う。
pub(crate) fn optional_string<'a>(
    object: &'a JsonObject,
    key: &str,
    path: &FieldPath,
    errors: &mut ValidationErrors,
) -> Option<&'a str> {
    let value = object.get(key)?;
    expect_string(value, &path.key(key), errors)
}

/// 値が真偽値であることを要求する
pub(crate) fn expect_bool(
    value: &JsonValue,
    path: &FieldPath,
    errors: &mut ValidationErrors,
) -> Option<bool> {
    match value {
        JsonValue::Bool(b) => Some(*b),
        other => {
            errors.push(path, type_mismatch("boolean", other));
            None
        }
    }
}

/// 値が配列であることを要求する
pub(crate) fn expect_array<'a>(
    value: &'a JsonValue,
    path: &FieldPath,
    errors: &mut ValidationErrors,
) -> Option<&'a [JsonValue]> {
    match value {
        JsonValue::Array(items) => Some(items),
        other => {
            errors.push(path, type_mismatch("array", other));
            None
        }
    }
}

// =========================================================================
// 文字列ルール
// =========================================================================

/// 文字数の下限・上限を検証する
///
/// 文字数は UTF-16 コードユニット単位で数える。BMP 外の文字は 2 文字と数える。
pub(crate) fn check_length(
    value: &str,
    min: Option<usize>,
    max: Option<usize>,
    path: &FieldPath,
    errors: &mut ValidationErrors,
) {
    let count = value.encode_utf16().count();
    if let Some(min) = min
        && count < min
    {
        errors.push(
            path,
            format!("String must contain at least {min} character(s)"),
        );
    }
    if let Some(max) = max
        && count > max
    {
        errors.push(
            path,
            format!("String must contain at most {max} character(s)"),
        );
    }
}

/// 列挙値のいずれかであることを検証する
pub(crate) fn check_enum<T: std::str::FromStr>(
    value: &str,
    variants: &[&str],
    path: &FieldPath,
    errors: &mut ValidationErrors,
) -> Option<T> {
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            let expected = variants
                .iter()
                .map(|v| format!("'{v}'"))
                .collect::<Vec<_>>()
                .join(" | ");
            errors.push(
                path,
                format!("Invalid enum value. Expected {expected}, received '{value}'"),
            );
            None
        }
    }
}
