//! 用户相关的数据模型
//!
//! 与后端 `/register/`、`/login/`、`/users/` 接口收发的结构

use serde::{Deserialize, Serialize};

/// 用户角色枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 管理员
    Admin,
    /// 店主
    Shopkeeper,
    /// 顾客
    Customer,
}

impl Role {
    /// 获取角色的接口取值
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Shopkeeper => "shopkeeper",
            Role::Customer => "customer",
        }
    }

    /// 尝试从字符串解析角色（精确匹配，不区分大小写）
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "shopkeeper" => Some(Role::Shopkeeper),
            "customer" => Some(Role::Customer),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 注册请求体
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password: String,
}

/// 登录请求体
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// 登录成功的响应体
///
/// 后端同时下发 refresh 令牌，本面板只使用 access
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// 服务端返回的用户记录
///
/// role 在后端允许为空
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// 单个新建用户的请求体（管理端直接建号，不设密码）
#[derive(Debug, Clone, Serialize)]
pub struct NewUserRequest {
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// 新建用户成功的响应体
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedUser {
    pub name: String,
    pub email: String,
}
