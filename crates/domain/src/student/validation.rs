//! # 学生レコードのバリデーション
//!
//! JSON 入力を検証し、[`Student`] / [`Guardian`] を生成する純粋関数群。
//!
//! エンティティ単位の関数（学生・保護者・氏名・住所）を、フィールド単位の
//! 小さなバリデータの組み合わせで構成する。

use serde_json::Value as JsonValue;
use strum::VariantNames;

use super::{Address, BloodGroup, ContactNumber, Email, Gender, Guardian, Student, StudentName};
use crate::validation::{
    FieldPath,
    JsonObject,
    ValidationErrors,
    check_enum,
    check_length,
    expect_array,
    expect_bool,
    expect_object,
    expect_string,
    optional_string,
    required,
    required_string,
};

/// 氏名の各部分の最大文字数
const NAME_MAX_LENGTH: usize = 20;

/// 先頭のみ大文字・残りは小文字の形式であるかを判定する
///
/// 値をその「先頭大文字化」変換と比較する。空文字列は変換しても空なので一致する。
/// 先頭の判定は UTF-16 の 1 コードユニット単位で行うため、BMP 外の先頭文字は
/// 大文字化されずそのまま残り、残りの部分だけが小文字であることを要求する。
///
/// ```rust
/// use pathshala_domain::student::is_capitalized;
///
/// assert!(is_capitalized("Rahim"));
/// assert!(!is_capitalized("rahim"));
/// assert!(!is_capitalized("RAHIM"));
/// assert!(!is_capitalized("raHim"));
/// ```
pub fn is_capitalized(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return true;
    };
    let mut expected: String = if first.len_utf16() == 1 {
        first.to_uppercase().collect()
    } else {
        first.to_string()
    };
    expected.push_str(&chars.as_str().to_lowercase());
    expected == value
}

/// 学生レコードを検証する
///
/// 成功時は `is_active` を補完した [`Student`] を返す。未知のキーは捨てられる。
/// 失敗時はすべての違反を検証順に収集した [`ValidationErrors`] を返す。
pub fn validate_student(input: &JsonValue) -> Result<Student, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let root = FieldPath::root();

    let Some(object) = expect_object(input, &root, &mut errors) else {
        return Err(errors);
    };

    let id = required_string(object, "id", &root, &mut errors).map(str::to_string);
    let name = required(object, "name", &root, &mut errors)
        .and_then(|value| name_at(value, &root.key("name"), &mut errors));
    let profile_image = optional_url(object, "profile_image", &root, &mut errors);
    let avatar = optional_url(object, "avatar", &root, &mut errors);
    let gender = optional_enum::<Gender>(object, "gender", Gender::VARIANTS, &root, &mut errors);
    let date_of_birth =
        optional_string(object, "date_of_birth", &root, &mut errors).map(str::to_string);
    let email = email_at(object, &root, &mut errors);
    let contact_number = contact_number_at(
        object,
        "contact_number",
        "Contact number is not valid",
        &root,
        &mut errors,
    );
    let emergency_contact_number = contact_number_at(
        object,
        "emergency_contact_number",
        "Emergency contact number is not valid",
        &root,
        &mut errors,
    );
    let blood_group = optional_enum::<BloodGroup>(
        object,
        "blood_group",
        BloodGroup::VARIANTS,
        &root,
        &mut errors,
    );
    let address = required(object, "address", &root, &mut errors)
        .and_then(|value| address_at(value, &root.key("address"), &mut errors));
    let guardian = required(object, "guardian", &root, &mut errors)
        .and_then(|value| guardians_at(value, &root.key("guardian"), &mut errors));
    let local_guardian = required(object, "local_guardian", &root, &mut errors)
        .and_then(|value| guardian_at(value, &root.key("local_guardian"), &mut errors));
    let is_active = match object.get("is_active") {
        Some(value) => expect_bool(value, &root.key("is_active"), &mut errors),
        None => Some(true),
    };

    match (
        id,
        name,
        email,
        contact_number,
        emergency_contact_number,
        address,
        guardian,
        local_guardian,
        is_active,
    ) {
        (
            Some(id),
            Some(name),
            Some(email),
            Some(contact_number),
            Some(emergency_contact_number),
            Some(address),
            Some(guardian),
            Some(local_guardian),
            Some(is_active),
        ) if errors.is_empty() => Ok(Student {
            id,
            name,
            profile_image,
            avatar,
            gender,
            date_of_birth,
            email,
            contact_number,
            emergency_contact_number,
            blood_group,
            address,
            guardian,
            local_guardian,
            is_active,
        }),
        _ => Err(errors),
    }
}

/// 保護者レコードを単体で検証する
pub fn validate_guardian(input: &JsonValue) -> Result<Guardian, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    match guardian_at(input, &FieldPath::root(), &mut errors) {
        Some(guardian) if errors.is_empty() => Ok(guardian),
        _ => Err(errors),
    }
}

/// 氏名を単体で検証する
pub fn validate_name(input: &JsonValue) -> Result<StudentName, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    match name_at(input, &FieldPath::root(), &mut errors) {
        Some(name) if errors.is_empty() => Ok(name),
        _ => Err(errors),
    }
}

/// 住所を単体で検証する
pub fn validate_address(input: &JsonValue) -> Result<Address, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    match address_at(input, &FieldPath::root(), &mut errors) {
        Some(address) if errors.is_empty() => Ok(address),
        _ => Err(errors),
    }
}

// --- エンティティ単位 ---

fn name_at(value: &JsonValue, path: &FieldPath, errors: &mut ValidationErrors) -> Option<StudentName> {
    let object = expect_object(value, path, errors)?;

    let first_name = required_string(object, "first_name", path, errors).map(|first_name| {
        name_part(
            first_name,
            Some(1),
            "First name is not in capitalize format",
            &path.key("first_name"),
            errors,
        )
    });
    let middle_name = optional_string(object, "middle_name", path, errors).map(|middle_name| {
        name_part(
            middle_name,
            None,
            "Middle name is not in capitalize format",
            &path.key("middle_name"),
            errors,
        )
    });
    let last_name = optional_string(object, "last_name", path, errors).map(|last_name| {
        name_part(
            last_name,
            None,
            "Last name is not in capitalize format",
            &path.key("last_name"),
            errors,
        )
    });

    Some(StudentName {
        first_name: first_name?,
        middle_name,
        last_name,
    })
}

fn address_at(value: &JsonValue, path: &FieldPath, errors: &mut ValidationErrors) -> Option<Address> {
    let object = expect_object(value, path, errors)?;
    let present = required_string(object, "present", path, errors);
    let permanent = required_string(object, "permanent", path, errors);

    Some(Address {
        present:   present?.to_string(),
        permanent: permanent?.to_string(),
    })
}

fn guardian_at(
    value: &JsonValue,
    path: &FieldPath,
    errors: &mut ValidationErrors,
) -> Option<Guardian> {
    let object = expect_object(value, path, errors)?;

    let name = required_string(object, "name", path, errors);
    let relation = required_string(object, "relation", path, errors);
    let occupation = required_string(object, "occupation", path, errors);
    let contact_number = contact_number_at(
        object,
        "contact_number",
        "Contact number is not valid",
        path,
        errors,
    );
    let address = object
        .get("address")
        .and_then(|value| address_at(value, &path.key("address"), errors));

    Some(Guardian {
        name: name?.to_string(),
        relation: relation?.to_string(),
        occupation: occupation?.to_string(),
        contact_number: contact_number?,
        address,
    })
}

fn guardians_at(
    value: &JsonValue,
    path: &FieldPath,
    errors: &mut ValidationErrors,
) -> Option<Vec<Guardian>> {
    let items = expect_array(value, path, errors)?;
    // 全要素を検証してから結果をまとめる（途中で打ち切らない）
    let guardians: Vec<Option<Guardian>> = items
        .iter()
        .enumerate()
        .map(|(index, item)| guardian_at(item, &path.index(index), errors))
        .collect();
    guardians.into_iter().collect()
}

// --- フィールド単位 ---

/// 氏名の一部を検証する（文字数と大文字化の両方を報告する）
fn name_part(
    value: &str,
    min: Option<usize>,
    capitalize_message: &str,
    path: &FieldPath,
    errors: &mut ValidationErrors,
) -> String {
    check_length(value, min, Some(NAME_MAX_LENGTH), path, errors);
    if !is_capitalized(value) {
        errors.push(path, capitalize_message);
    }
    value.to_string()
}

fn email_at(object: &JsonObject, path: &FieldPath, errors: &mut ValidationErrors) -> Option<Email> {
    let value = required_string(object, "email", path, errors)?;
    match Email::new(value) {
        Ok(email) => Some(email),
        Err(_) => {
            errors.push(&path.key("email"), "Invalid email");
            None
        }
    }
}

fn contact_number_at(
    object: &JsonObject,
    key: &str,
    message: &str,
    path: &FieldPath,
    errors: &mut ValidationErrors,
) -> Option<ContactNumber> {
    let value = required_string(object, key, path, errors)?;
    match ContactNumber::new(value) {
        Ok(number) => Some(number),
        Err(_) => {
            errors.push(&path.key(key), message);
            None
        }
    }
}

fn optional_url(
    object: &JsonObject,
    key: &str,
    path: &FieldPath,
    errors: &mut ValidationErrors,
) -> Option<String> {
    let value = optional_string(object, key, path, errors)?;
    if !super::is_valid_url(value) {
        errors.push(&path.key(key), "Invalid url");
        return None;
    }
    Some(value.to_string())
}

fn optional_enum<T: std::str::FromStr>(
    object: &JsonObject,
    key: &str,
    variants: &[&str],
    path: &FieldPath,
    errors: &mut ValidationErrors,
) -> Option<T> {
    let value = object.get(key)?;
    let value = expect_string(value, &path.key(key), errors)?;
    check_enum(value, variants, &path.key(key), errors)
}
