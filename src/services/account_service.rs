//! 账号服务 - 业务能力层
//!
//! 只负责注册和登录能力，不关心面板状态

use crate::clients::ShopClient;
use crate::error::AppResult;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, Role};
use tracing::{info, warn};

/// 账号服务
pub struct AccountService {
    client: ShopClient,
}

impl AccountService {
    /// 创建新的账号服务
    pub fn new(client: ShopClient) -> Self {
        Self { client }
    }

    /// 注册新用户
    ///
    /// # 参数
    /// - `name`: 用户名
    /// - `email`: 邮箱
    /// - `role`: 角色
    /// - `password`: 密码
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        role: Role,
        password: &str,
    ) -> AppResult<()> {
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            role,
            password: password.to_string(),
        };

        match self.client.register(&request).await {
            Ok(_) => {
                info!("✓ 注册成功: {} ({})", name, email);
                Ok(())
            }
            Err(e) => {
                warn!("⚠️ 注册失败 ({}): {}", email, e);
                Err(e)
            }
        }
    }

    /// 登录
    ///
    /// # 返回
    /// 返回服务端下发的令牌响应，持久化交给调用方
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        match self.client.login(&request).await {
            Ok(login) => {
                info!("✓ 登录成功: {}", email);
                Ok(login)
            }
            Err(e) => {
                warn!("⚠️ 登录失败 ({}): {}", email, e);
                Err(e)
            }
        }
    }
}
