//! 用户动作标识
//!
//! 面板上每一种会触发网络请求的用户动作对应一个变体，
//! 供最新请求守卫按动作类型区分在途请求

use std::fmt::Display;

/// 用户动作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// 注册
    SignUp,
    /// 登录
    Login,
    /// 新建单个用户
    CreateUser,
    /// 获取全部用户
    FetchUsers,
    /// 获取全部商品
    FetchProducts,
    /// 按条件搜索商品
    FilterProducts,
    /// 批量创建商品
    BulkCreate,
    /// 批量删除商品
    BulkDelete,
}

/// 动作类型总数（守卫按下标存放各动作的代数）
pub const ACTION_KIND_COUNT: usize = 8;

impl ActionKind {
    /// 获取动作的数组下标
    pub fn index(self) -> usize {
        match self {
            ActionKind::SignUp => 0,
            ActionKind::Login => 1,
            ActionKind::CreateUser => 2,
            ActionKind::FetchUsers => 3,
            ActionKind::FetchProducts => 4,
            ActionKind::FilterProducts => 5,
            ActionKind::BulkCreate => 6,
            ActionKind::BulkDelete => 7,
        }
    }

    /// 获取动作名称
    pub fn name(self) -> &'static str {
        match self {
            ActionKind::SignUp => "sign-up",
            ActionKind::Login => "login",
            ActionKind::CreateUser => "create-user",
            ActionKind::FetchUsers => "fetch-users",
            ActionKind::FetchProducts => "fetch-products",
            ActionKind::FilterProducts => "filter-products",
            ActionKind::BulkCreate => "bulk-create",
            ActionKind::BulkDelete => "bulk-delete",
        }
    }
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
