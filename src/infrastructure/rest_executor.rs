//! REST 执行器 - 基础设施层
//!
//! 持有唯一的 HTTP 客户端资源，只暴露"发请求"的能力

use crate::config::Config;
use crate::error::{AppError, AppResult};
use serde_json::Value as JsonValue;
use std::time::Duration;

/// 一次 API 调用的原始结果
///
/// body 在响应体为空或不是 JSON 时为 Null
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: JsonValue,
}

impl ApiResponse {
    /// 是否为 2xx 成功响应
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 取出响应体里的 `error` 字段
    pub fn error_message(&self) -> Option<String> {
        self.body
            .get("error")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    }
}

/// REST 执行器
///
/// 职责：
/// - 持有唯一的 reqwest::Client
/// - 暴露 get / post / delete 能力，按需携带 Bearer 令牌
/// - 不认识 User / Product
/// - 不处理业务流程
#[derive(Clone)]
pub struct RestExecutor {
    client: reqwest::Client,
    base_url: String,
}

impl RestExecutor {
    /// 创建新的 REST 执行器
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// API 根路径
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET 请求
    ///
    /// # 参数
    /// - `path`: 端点路径（以 / 开头）
    /// - `query`: 查询参数键值对
    /// - `token`: 可选的 Bearer 令牌
    pub async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
        token: Option<&str>,
    ) -> AppResult<ApiResponse> {
        let mut builder = self.client.get(format!("{}{}", self.base_url, path));

        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(path, e))?;

        Self::read_response(response).await
    }

    /// POST JSON 请求
    pub async fn post_json(
        &self,
        path: &str,
        body: &JsonValue,
        token: Option<&str>,
    ) -> AppResult<ApiResponse> {
        let mut builder = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body);

        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(path, e))?;

        Self::read_response(response).await
    }

    /// DELETE JSON 请求（批量删除的请求体放在 body 里）
    pub async fn delete_json(
        &self,
        path: &str,
        body: &JsonValue,
        token: Option<&str>,
    ) -> AppResult<ApiResponse> {
        let mut builder = self
            .client
            .delete(format!("{}{}", self.base_url, path))
            .json(body);

        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(path, e))?;

        Self::read_response(response).await
    }

    /// 读取响应体
    ///
    /// 204 之类的空响应体和非 JSON 响应体都归一化成 Null
    async fn read_response(response: reqwest::Response) -> AppResult<ApiResponse> {
        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();

        let body = if text.trim().is_empty() {
            JsonValue::Null
        } else {
            serde_json::from_str(&text).unwrap_or(JsonValue::Null)
        };

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = Config {
            api_base_url: "http://localhost:8000/api/".to_string(),
            ..Default::default()
        };
        let executor = RestExecutor::new(&config).unwrap();
        assert_eq!(executor.base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn test_api_response_error_extraction() {
        let resp = ApiResponse {
            status: 400,
            body: json!({ "error": "No IDs provided" }),
        };
        assert!(!resp.is_success());
        assert_eq!(resp.error_message().as_deref(), Some("No IDs provided"));

        // 字段校验类错误没有 error 字段
        let resp = ApiResponse {
            status: 400,
            body: json!({ "email": ["This field is required."] }),
        };
        assert!(resp.error_message().is_none());
    }
}
