//! # テスト用モックリポジトリ
//!
//! ユースケース・ハンドラのテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! pathshala-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pathshala_domain::student::Student;

use crate::{error::InfraError, repository::StudentRepository};

// ===== MockStudentRepository =====

/// インメモリの学生リポジトリ
///
/// 挿入順を保持し、同じ ID の二重登録は Conflict として扱う。
/// [`failing`](MockStudentRepository::failing) で全操作を失敗させられる。
#[derive(Clone, Default)]
pub struct MockStudentRepository {
    students: Arc<Mutex<Vec<Student>>>,
    failure:  Option<String>,
}

impl MockStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 全操作が `InfraError::unexpected` を返すリポジトリを作成する
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            students: Arc::new(Mutex::new(Vec::new())),
            failure:  Some(message.into()),
        }
    }

    pub fn add_student(&self, student: Student) {
        self.students.lock().unwrap().push(student);
    }

    /// 格納済みの学生を挿入順で返す
    pub fn students(&self) -> Vec<Student> {
        self.students.lock().unwrap().clone()
    }

    fn check_failure(&self) -> Result<(), InfraError> {
        match &self.failure {
            Some(message) => Err(InfraError::unexpected(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl StudentRepository for MockStudentRepository {
    async fn find_all(&self) -> Result<Vec<Student>, InfraError> {
        self.check_failure()?;
        Ok(self.students())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Student>, InfraError> {
        self.check_failure()?;
        Ok(self
            .students
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn insert(&self, student: &Student) -> Result<Student, InfraError> {
        self.check_failure()?;
        let mut students = self.students.lock().unwrap();
        if students.iter().any(|s| s.id == student.id) {
            return Err(InfraError::conflict("Student", &student.id));
        }
        students.push(student.clone());
        Ok(student.clone())
    }
}

#[cfg(test)]
mod tests {
    use pathshala_domain::student::validate_student;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::error::InfraErrorKind;

    fn student(id: &str) -> Student {
        let guardian = json!({
            "name": "Karim",
            "relation": "father",
            "occupation": "farmer",
            "contact_number": "01712345678"
        });
        validate_student(&json!({
            "id": id,
            "name": { "first_name": "Rahim" },
            "email": "rahim@example.com",
            "contact_number": "01712345678",
            "emergency_contact_number": "01812345678",
            "address": { "present": "Dhaka", "permanent": "Sylhet" },
            "guardian": [guardian.clone()],
            "local_guardian": guardian
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_挿入した学生を挿入順で取得できる() {
        let sut = MockStudentRepository::new();

        sut.insert(&student("S-2")).await.unwrap();
        sut.insert(&student("S-1")).await.unwrap();

        let ids: Vec<String> = sut.find_all().await.unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["S-2".to_string(), "S-1".to_string()]);
        assert_eq!(sut.find_by_id("S-1").await.unwrap(), Some(student("S-1")));
        assert_eq!(sut.find_by_id("S-9").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_同じidの二重登録はconflictになる() {
        let sut = MockStudentRepository::new();
        sut.add_student(student("S-1"));

        let err = sut.insert(&student("S-1")).await.unwrap_err();

        assert!(matches!(err.kind(), InfraErrorKind::Conflict { .. }));
        assert_eq!(sut.students().len(), 1);
    }

    #[tokio::test]
    async fn test_failingは全操作でエラーを返す() {
        let sut = MockStudentRepository::failing("接続断");

        assert!(sut.find_all().await.is_err());
        assert!(sut.find_by_id("S-1").await.is_err());
        assert!(sut.insert(&student("S-1")).await.is_err());
    }
}
