//! # 学生ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /students` - 学生一覧
//! - `GET /students/{id}` - 学生詳細（存在しなければ `data: null`）
//! - `POST /students` - 学生登録（body: `{ "student": {...} }`）
//!
//! 失敗時はいずれも `500` と統一エラーレスポンスを返す（[`ApiError`] 参照）。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use pathshala_domain::validation::ValidationErrors;
use pathshala_shared::ApiResponse;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::{error::ApiError, usecase::StudentUseCaseImpl};

const RETRIEVED_MESSAGE: &str = "Student are retrieved successfully";
const INSERTED_MESSAGE: &str = "Student is inserted successfully";

/// 学生 API の共有状態
pub struct StudentState {
    pub usecase: StudentUseCaseImpl,
}

/// 学生登録リクエスト
///
/// `student` は未検証の JSON のままユースケースに渡す。
/// キーが欠落している場合は `null` として扱い、検証で拒否される。
#[derive(Debug, Deserialize)]
pub struct InsertStudentRequest {
    #[serde(default)]
    pub student: JsonValue,
}

/// GET /students
#[tracing::instrument(skip_all)]
pub async fn find_all_students(
    State(state): State<Arc<StudentState>>,
) -> Result<impl IntoResponse, ApiError> {
    let students = state.usecase.find_all_students().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(RETRIEVED_MESSAGE, students)),
    ))
}

/// GET /students/{id}
#[tracing::instrument(skip_all, fields(%id))]
pub async fn find_one_student(
    State(state): State<Arc<StudentState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let student = state.usecase.find_one_student(&id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(RETRIEVED_MESSAGE, student)),
    ))
}

/// POST /students
///
/// ボディが JSON として解釈できない場合もバリデーションエラーとして扱う。
#[tracing::instrument(skip_all)]
pub async fn insert_student(
    State(state): State<Arc<StudentState>>,
    payload: Result<Json<InsertStudentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        ApiError::Validation(ValidationErrors::single("", rejection.body_text()))
    })?;

    let student = state.usecase.insert_student(&req.student).await?;
    tracing::info!(student_id = %student.id, "学生を登録しました");

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(INSERTED_MESSAGE, student)),
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        Router,
        body::Body,
        http::{Method, Request},
        routing::get,
    };
    use pathshala_domain::student::{Student, validate_student};
    use pathshala_infra::{InfraError, repository::StudentRepository};
    use pathshala_shared::ErrorResponse;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tower::ServiceExt;

    use super::*;

    // --- スタブ ---

    /// 保持している学生を返し、挿入された学生をそのまま返すスタブ
    struct StubStudentRepository {
        students: Vec<Student>,
    }

    impl StubStudentRepository {
        fn empty() -> Self {
            Self {
                students: Vec::new(),
            }
        }

        fn with_students(students: Vec<Student>) -> Self {
            Self { students }
        }
    }

    #[async_trait]
    impl StudentRepository for StubStudentRepository {
        async fn find_all(&self) -> Result<Vec<Student>, InfraError> {
            Ok(self.students.clone())
        }

        async fn find_by_id(&self, id: &str) -> Result<Option<Student>, InfraError> {
            Ok(self.students.iter().find(|s| s.id == id).cloned())
        }

        async fn insert(&self, student: &Student) -> Result<Student, InfraError> {
            Ok(student.clone())
        }
    }

    /// 全操作が失敗するスタブ
    struct FailingStudentRepository;

    #[async_trait]
    impl StudentRepository for FailingStudentRepository {
        async fn find_all(&self) -> Result<Vec<Student>, InfraError> {
            Err(InfraError::unexpected("接続断"))
        }

        async fn find_by_id(&self, _id: &str) -> Result<Option<Student>, InfraError> {
            Err(InfraError::unexpected("接続断"))
        }

        async fn insert(&self, _student: &Student) -> Result<Student, InfraError> {
            Err(InfraError::unexpected("接続断"))
        }
    }

    // --- ヘルパー ---

    fn create_test_app(repo: impl StudentRepository + 'static) -> Router {
        let repo_arc = Arc::new(repo) as Arc<dyn StudentRepository>;
        let state = Arc::new(StudentState {
            usecase: StudentUseCaseImpl::new(repo_arc),
        });

        Router::new()
            .route("/students", get(find_all_students).post(insert_student))
            .route("/students/{id}", get(find_one_student))
            .with_state(state)
    }

    fn student_json(id: &str) -> JsonValue {
        let guardian = json!({
            "name": "Karim Uddin",
            "relation": "father",
            "occupation": "farmer",
            "contact_number": "01712345678"
        });
        json!({
            "id": id,
            "name": { "first_name": "Rahim", "last_name": "Chowdhury" },
            "gender": "male",
            "email": "rahim@example.com",
            "contact_number": "01712345678",
            "emergency_contact_number": "+8801812345678",
            "blood_group": "B+",
            "address": { "present": "Mirpur, Dhaka", "permanent": "Sylhet" },
            "guardian": [guardian.clone()],
            "local_guardian": guardian
        })
    }

    fn student(id: &str) -> Student {
        validate_student(&student_json(id)).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn post_request(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/students")
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn response_body<T: serde::de::DeserializeOwned>(
        response: axum::http::Response<Body>,
    ) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    // --- GET /students ---

    #[tokio::test]
    async fn test_get_students_空のリポジトリでは空配列を返す() {
        // Given
        let sut = create_test_app(StubStudentRepository::empty());

        // When
        let response = sut.oneshot(get_request("/students")).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        let body: ApiResponse<Vec<Student>> = response_body(response).await;
        assert!(body.success);
        assert_eq!(body.message, "Student are retrieved successfully");
        assert!(body.data.is_empty());
    }

    #[tokio::test]
    async fn test_get_students_保持している学生を返す() {
        // Given
        let sut = create_test_app(StubStudentRepository::with_students(vec![
            student("S-001"),
            student("S-002"),
        ]));

        // When
        let response = sut.oneshot(get_request("/students")).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        let body: ApiResponse<Vec<Student>> = response_body(response).await;
        let ids: Vec<&str> = body.data.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["S-001", "S-002"]);
    }

    #[tokio::test]
    async fn test_get_students_リポジトリ失敗時は500を返す() {
        // Given
        let sut = create_test_app(FailingStudentRepository);

        // When
        let response = sut.oneshot(get_request("/students")).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = response_body(response).await;
        assert!(!body.success);
        assert_eq!(body.message, "Something is went wrong");
    }

    // --- GET /students/{id} ---

    #[tokio::test]
    async fn test_get_student_idに一致する学生を返す() {
        // Given
        let sut = create_test_app(StubStudentRepository::with_students(vec![student("S-001")]));

        // When
        let response = sut.oneshot(get_request("/students/S-001")).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        let body: ApiResponse<Option<Student>> = response_body(response).await;
        assert_eq!(body.data, Some(student("S-001")));
    }

    #[tokio::test]
    async fn test_get_student_存在しないidではdataがnullになる() {
        // Given
        let sut = create_test_app(StubStudentRepository::empty());

        // When
        let response = sut.oneshot(get_request("/students/S-404")).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        let body: JsonValue = response_body(response).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"], JsonValue::Null);
    }

    #[tokio::test]
    async fn test_get_student_リポジトリ失敗時は500を返す() {
        // Given
        let sut = create_test_app(FailingStudentRepository);

        // When
        let response = sut.oneshot(get_request("/students/S-001")).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = response_body(response).await;
        assert!(!body.success);
        assert_eq!(body.error.kind, "database_error");
    }

    // --- POST /students ---

    #[tokio::test]
    async fn test_post_students_検証済みの学生を登録して返す() {
        // Given
        let sut = create_test_app(StubStudentRepository::empty());
        let body = json!({ "student": student_json("S-001") }).to_string();

        // When
        let response = sut.oneshot(post_request(body)).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        let body: ApiResponse<Student> = response_body(response).await;
        assert!(body.success);
        assert_eq!(body.message, "Student is inserted successfully");
        assert_eq!(body.data, student("S-001"));
        assert!(body.data.is_active);
    }

    #[tokio::test]
    async fn test_post_students_バリデーション失敗時は500と違反一覧を返す() {
        // Given
        let sut = create_test_app(StubStudentRepository::empty());
        let mut student = student_json("S-001");
        student["name"]["first_name"] = json!("JOHN");
        student["contact_number"] = json!("12345");
        let body = json!({ "student": student }).to_string();

        // When
        let response = sut.oneshot(post_request(body)).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = response_body(response).await;
        assert_eq!(body.message, "Something is went wrong");
        assert_eq!(body.error.kind, "validation_error");
        let issues: Vec<(&str, &str)> = body
            .error
            .issues
            .iter()
            .map(|i| (i.path.as_str(), i.message.as_str()))
            .collect();
        assert_eq!(
            issues,
            vec![
                ("name.first_name", "First name is not in capitalize format"),
                ("contact_number", "Contact number is not valid"),
            ]
        );
    }

    #[tokio::test]
    async fn test_post_students_studentキーがない場合は500を返す() {
        // Given
        let sut = create_test_app(StubStudentRepository::empty());

        // When
        let response = sut.oneshot(post_request("{}")).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = response_body(response).await;
        assert_eq!(body.error.kind, "validation_error");
        assert_eq!(body.error.issues[0].path, "");
        assert_eq!(
            body.error.issues[0].message,
            "Expected object, received null"
        );
    }

    #[tokio::test]
    async fn test_post_students_不正なjsonは500を返す() {
        // Given
        let sut = create_test_app(StubStudentRepository::empty());

        // When
        let response = sut.oneshot(post_request("{not json")).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = response_body(response).await;
        assert!(!body.success);
        assert_eq!(body.error.kind, "validation_error");
        assert_eq!(body.error.issues.len(), 1);
    }

    #[tokio::test]
    async fn test_post_students_リポジトリ失敗時は500を返す() {
        // Given
        let sut = create_test_app(FailingStudentRepository);
        let body = json!({ "student": student_json("S-001") }).to_string();

        // When
        let response = sut.oneshot(post_request(body)).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = response_body(response).await;
        assert_eq!(body.error.kind, "database_error");
    }
}
