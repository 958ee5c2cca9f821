//! # StudentRepository
//!
//! 学生レコードの永続化を担当するリポジトリ。
//!
//! 検証済みの [`Student`] を `students.document`（JSONB）にそのまま格納する。
//! 一覧は登録順（`seq`）で返す。
//!
//! 読み出した `document` は JSON 値として受け取り、ここで [`Student`] に変換する。
//! 形の合わない行は [`InfraErrorKind::Serialization`](crate::InfraErrorKind::Serialization)
//! として報告され、接続やクエリの失敗（`Database`）と区別される。

use async_trait::async_trait;
use pathshala_domain::student::Student;
use serde_json::Value as JsonValue;
use sqlx::{PgPool, types::Json};

use crate::error::InfraError;

/// 学生リポジトリトレイト
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// 全学生を登録順で取得する
    async fn find_all(&self) -> Result<Vec<Student>, InfraError>;

    /// ID で学生を検索する
    async fn find_by_id(&self, id: &str) -> Result<Option<Student>, InfraError>;

    /// 学生を挿入し、格納された値を返す
    ///
    /// 同じ ID が既に存在する場合は [`InfraError::conflict`] を返す。
    async fn insert(&self, student: &Student) -> Result<Student, InfraError>;
}

/// PostgreSQL 実装の StudentRepository
#[derive(Debug, Clone)]
pub struct PostgresStudentRepository {
    pool: PgPool,
}

impl PostgresStudentRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PostgresStudentRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Student>, InfraError> {
        let rows: Vec<JsonValue> = sqlx::query_scalar(
            r#"
            SELECT document
            FROM students
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(decode_document).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &str) -> Result<Option<Student>, InfraError> {
        let row: Option<JsonValue> = sqlx::query_scalar(
            r#"
            SELECT document
            FROM students
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(decode_document).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %student.id))]
    async fn insert(&self, student: &Student) -> Result<Student, InfraError> {
        let result: Result<JsonValue, sqlx::Error> = sqlx::query_scalar(
            r#"
            INSERT INTO students (id, document)
            VALUES ($1, $2)
            RETURNING document
            "#,
        )
        .bind(&student.id)
        .bind(Json(student))
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(document) => decode_document(document),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(InfraError::conflict("Student", &student.id))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// `document` 列の値を [`Student`] に変換する
fn decode_document(document: JsonValue) -> Result<Student, InfraError> {
    Ok(serde_json::from_value(document)?)
}
