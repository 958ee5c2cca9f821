//! # 学生
//!
//! 学生レコードとそれに関連する型を定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 備考 |
//! |---|------------|------|
//! | [`Student`] | 学生 | ID は外部で採番される不透明な文字列 |
//! | [`Guardian`] | 保護者 | `guardian` は入力順を保持するリスト、`local_guardian` は単一 |
//! | [`StudentName`] | 氏名 | 各部分は先頭のみ大文字の形式であること |
//! | [`ContactNumber`] | 連絡先電話番号 | バングラデシュの電話番号形式 |
//!
//! ## 設計方針
//!
//! - **JSON 起点の検証**: [`validate_student`] が JSON を検証して [`Student`] を生成する。
//!   検証済みの値だけが永続化される
//! - **修正しない**: 大文字小文字の正規化は行わず、形式に合わない入力は拒否する
//! - **未指定フィールドは出力しない**: 任意項目が `None` の場合は JSON から省略する
//!
//! ## 使用例
//!
//! ```rust
//! use pathshala_domain::student::validate_student;
//! use serde_json::json;
//!
//! let guardian = json!({
//!     "name": "Karim",
//!     "relation": "father",
//!     "occupation": "farmer",
//!     "contact_number": "01712345678"
//! });
//! let student = validate_student(&json!({
//!     "id": "S-001",
//!     "name": { "first_name": "Rahim" },
//!     "email": "rahim@example.com",
//!     "contact_number": "01712345678",
//!     "emergency_contact_number": "+8801712345678",
//!     "address": { "present": "Dhaka", "permanent": "Sylhet" },
//!     "guardian": [guardian.clone()],
//!     "local_guardian": guardian
//! }))
//! .unwrap();
//!
//! assert!(student.is_active);
//! ```

mod contact;
mod validation;

pub use contact::{ContactNumber, Email, is_valid_url};
use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr, VariantNames};
pub use validation::{
    is_capitalized,
    validate_address,
    validate_guardian,
    validate_name,
    validate_student,
};

/// 氏名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentName {
    pub first_name:  String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name:   Option<String>,
}

/// 住所（現住所・本籍）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub present:   String,
    pub permanent: String,
}

/// 保護者
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guardian {
    pub name:           String,
    pub relation:       String,
    pub occupation:     String,
    pub contact_number: ContactNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address:        Option<Address>,
}

/// 性別
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr, VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Others,
}

/// 血液型
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr, VariantNames,
)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    #[strum(serialize = "A+")]
    APositive,
    #[serde(rename = "A-")]
    #[strum(serialize = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    #[strum(serialize = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    #[strum(serialize = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    #[strum(serialize = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    #[strum(serialize = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    #[strum(serialize = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    #[strum(serialize = "O-")]
    ONegative,
}

/// 学生レコード
///
/// # 不変条件
///
/// - `id` は一意（永続化層の主キー）
/// - 氏名の各部分は [`is_capitalized`] を満たす
/// - 電話番号はすべて [`ContactNumber`] の形式を満たす
/// - `is_active` は入力で省略された場合 `true`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: StudentName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    pub email: Email,
    pub contact_number: ContactNumber,
    pub emergency_contact_number: ContactNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<BloodGroup>,
    pub address: Address,
    pub guardian: Vec<Guardian>,
    pub local_guardian: Guardian,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}
