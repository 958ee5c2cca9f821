//! # API レスポンスエンベロープ
//!
//! 成功時の統一レスポンス形式 `{ "success": true, "message": "...", "data": T }` を提供する。

use serde::{Deserialize, Serialize};

/// 成功レスポンスの統一型
///
/// すべてのエンドポイントは成功時にこの形式でレスポンスを返す。
/// `success` は常に `true`（失敗時は [`ErrorResponse`](crate::ErrorResponse) を使う）。
///
/// ## 使用例
///
/// ```
/// use pathshala_shared::ApiResponse;
///
/// let response = ApiResponse::new("Student is inserted successfully", "hello");
/// assert!(response.success);
/// assert_eq!(response.data, "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data:    T,
}

impl<T> ApiResponse<T> {
    /// 新しい `ApiResponse` を作成する
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_serializeを正しいjson形状にする() {
        let response = ApiResponse::new("ok", "hello");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "success": true, "message": "ok", "data": "hello" })
        );
    }

    #[test]
    fn test_deserializeでjsonからオブジェクトに変換する() {
        let json = r#"{"success": true, "message": "ok", "data": "world"}"#;
        let response: ApiResponse<String> = serde_json::from_str(json).unwrap();

        assert!(response.success);
        assert_eq!(response.data, "world");
    }

    #[test]
    fn test_空のvecペイロードは空配列になる() {
        let response = ApiResponse::new("ok", Vec::<String>::new());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["data"], serde_json::json!([]));
    }

    #[test]
    fn test_noneペイロードはnullになる() {
        let response = ApiResponse::new("ok", None::<String>);
        let json = serde_json::to_value(&response).unwrap();

        assert!(json["data"].is_null());
        assert!(json.as_object().unwrap().contains_key("data"));
    }
}
