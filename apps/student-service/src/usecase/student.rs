//! 学生管理ユースケース

use std::sync::Arc;

use pathshala_domain::student::{Student, validate_student};
use pathshala_infra::repository::StudentRepository;
use serde_json::Value as JsonValue;

use crate::error::ApiError;

/// 学生管理ユースケース
pub struct StudentUseCaseImpl {
    student_repository: Arc<dyn StudentRepository>,
}

impl StudentUseCaseImpl {
    pub fn new(student_repository: Arc<dyn StudentRepository>) -> Self {
        Self { student_repository }
    }

    /// 全学生を登録順で取得する
    pub async fn find_all_students(&self) -> Result<Vec<Student>, ApiError> {
        let students = self.student_repository.find_all().await?;
        Ok(students)
    }

    /// ID で学生を取得する（存在しなければ `None`）
    pub async fn find_one_student(&self, id: &str) -> Result<Option<Student>, ApiError> {
        let student = self.student_repository.find_by_id(id).await?;
        Ok(student)
    }

    /// 学生を登録する
    ///
    /// 1. 入力 JSON をバリデーション（`is_active` の補完を含む）
    /// 2. 検証済みの学生を挿入
    /// 3. 一意制約違反は Conflict にマッピング
    pub async fn insert_student(&self, input: &JsonValue) -> Result<Student, ApiError> {
        let student = validate_student(input)?;

        self.student_repository
            .insert(&student)
            .await
            .map_err(|e| {
                if let Some((entity, id)) = e.as_conflict() {
                    return ApiError::Conflict(format!("{entity}(id={id}) は既に登録されています"));
                }
                ApiError::Database(e)
            })
    }
}
