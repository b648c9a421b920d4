use crate::error::{AppError, AppResult};

/// 程序配置文件
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// 后端 API 根路径（含 /api 前缀）
    pub api_base_url: String,
    /// 访问令牌的本地存储文件
    pub token_file: String,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000/api".to_string(),
            token_file: "session_token.txt".to_string(),
            request_timeout_secs: 10,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("SHOP_API_BASE_URL").unwrap_or(default.api_base_url),
            token_file: std::env::var("SHOP_TOKEN_FILE").unwrap_or(default.token_file),
            request_timeout_secs: std::env::var("SHOP_REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }

    /// 从 TOML 配置文件加载
    ///
    /// # 参数
    /// - `path`: 配置文件路径
    ///
    /// # 返回
    /// 返回解析后的配置
    pub async fn from_file(path: &str) -> AppResult<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::file_read_failed(path, e))?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            AppError::File(crate::error::FileError::TomlParseFailed {
                path: path.to_string(),
                source: Box::new(e),
            })
        })?;

        Ok(config)
    }
}
