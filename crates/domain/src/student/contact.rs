//! 連絡先の値オブジェクト（メールアドレス、電話番号、URL）

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// バングラデシュの電話番号パターン
///
/// 任意のプレフィックス（`+88` または `01`）に続いて 11 桁または 13 桁の数字。
/// プレフィックスと桁数は連動しない（`+88` + 11 桁、プレフィックスなし 13 桁も一致する）。
static CONTACT_NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\+88|01)?(?:[0-9]{11}|[0-9]{13})$").expect("電話番号パターンは有効な正規表現")
});

/// メールアドレスパターン（先頭ドットと連続ドットは別途検査する）
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("メールアドレスパターンは有効な正規表現")
});

/// 連絡先電話番号（値オブジェクト）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactNumber(String);

impl ContactNumber {
    /// 電話番号を作成する
    ///
    /// # エラー
    ///
    /// 形式に一致しない場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(DomainError::Validation(format!(
                "電話番号の形式が不正です: {value}"
            )));
        }
        Ok(Self(value))
    }

    /// 形式に一致するかを判定する
    pub fn is_valid(value: &str) -> bool {
        CONTACT_NUMBER_PATTERN.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// メールアドレス（値オブジェクト）
///
/// PII のため `Debug` 出力はマスクされる。
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// メールアドレスを作成する
    ///
    /// # バリデーション
    ///
    /// - `local@domain.tld` の形式
    /// - ローカル部は先頭がドットでなく、連続ドットを含まない
    /// - TLD は 2 文字以上の英字
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(DomainError::Validation(
                "メールアドレスの形式が不正です".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// 形式に一致するかを判定する
    pub fn is_valid(value: &str) -> bool {
        !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Email").field(&"[REDACTED]").finish()
    }
}

/// 絶対 URL として解釈できるかを判定する
pub fn is_valid_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}
