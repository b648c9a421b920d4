//! 用户目录服务 - 业务能力层
//!
//! 负责用户列表的读取和管理端建号

use crate::clients::ShopClient;
use crate::error::AppResult;
use crate::models::{CreatedUser, NewUserRequest, Role, UserRecord};
use tracing::info;

/// 用户目录服务
pub struct DirectoryService {
    client: ShopClient,
}

impl DirectoryService {
    /// 创建新的用户目录服务
    pub fn new(client: ShopClient) -> Self {
        Self { client }
    }

    /// 获取全部用户
    pub async fn fetch_users(&self, token: &str) -> AppResult<Vec<UserRecord>> {
        let users = self.client.fetch_users(token).await?;
        info!("✓ 获取到 {} 个用户", users.len());
        Ok(users)
    }

    /// 新建单个用户（不设密码，由管理端直接建号）
    pub async fn create_user(
        &self,
        token: &str,
        name: &str,
        email: &str,
        role: Role,
    ) -> AppResult<CreatedUser> {
        let request = NewUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            role,
        };

        let created = self.client.create_user(token, &request).await?;
        info!("✓ 用户已创建: {} ({})", created.name, created.email);
        Ok(created)
    }
}
