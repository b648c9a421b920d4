//! 会话令牌存储 - 业务能力层
//!
//! 只负责"保存/读取访问令牌"能力，不关心流程。
//! 令牌落在一个固定键名的本地文件里，进程重启后仍然有效

use crate::error::{AppError, AppResult};
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

/// 令牌在存储文件里的固定键名
pub const TOKEN_KEY: &str = "access_token";

/// 会话令牌存储
pub struct SessionStore {
    token_file: String,
    token: Option<String>,
}

impl SessionStore {
    /// 从令牌文件加载
    ///
    /// 文件不存在或没有令牌行时得到未登录状态，不报错
    pub fn load(path: impl Into<String>) -> Self {
        let token_file = path.into();

        let token = std::fs::read_to_string(&token_file)
            .ok()
            .and_then(|content| {
                content
                    .lines()
                    .find_map(|line| line.strip_prefix(&format!("{}=", TOKEN_KEY)))
                    .map(|t| t.trim().to_string())
            })
            .filter(|t| !t.is_empty());

        if token.is_some() {
            debug!("从 {} 恢复了已有会话", token_file);
        }

        Self { token_file, token }
    }

    /// 当前令牌
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// 是否已登录
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// 保存新令牌并落盘
    pub fn save(&mut self, token: impl Into<String>) -> AppResult<()> {
        let token = token.into();

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.token_file)
            .map_err(|e| AppError::file_write_failed(&self.token_file, e))?;

        writeln!(file, "{}={}", TOKEN_KEY, token)
            .map_err(|e| AppError::file_write_failed(&self.token_file, e))?;

        self.token = Some(token);
        Ok(())
    }

    /// 清除令牌（注销时调用）
    pub fn clear(&mut self) -> AppResult<()> {
        self.token = None;

        if std::path::Path::new(&self.token_file).exists() {
            std::fs::remove_file(&self.token_file).map_err(|e| {
                AppError::File(crate::error::FileError::DeleteFailed {
                    path: self.token_file.clone(),
                    source: Box::new(e),
                })
            })?;
        }
        Ok(())
    }
}
