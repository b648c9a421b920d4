//! # Shop Admin Panel
//!
//! 一个驱动商店后端 REST API 的管理面板客户端
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（HTTP 客户端），只暴露能力
//! - `RestExecutor` - 唯一的 client owner，提供 get/post/delete 能力
//!
//! ### ② 端点层（Clients）
//! - `clients/` - 封装后端的八个端点，统一非 2xx 的 error 解析
//! - `ShopClient` - 注册 / 登录 / 用户 / 商品 / 批量增删
//!
//! ### ③ 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单次调用
//! - `AccountService` - 注册登录能力
//! - `DirectoryService` - 用户目录能力
//! - `CatalogService` - 商品目录与批量操作能力
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/admin_panel` - 面板编排器，持有全部可变状态
//! - `orchestrator/panel_view` - 视图状态（提示槽 / 列表 / 可见性）
//! - `workflow/latest_guard` - 同类动作的过期响应直接丢弃
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod store;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::ShopClient;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::RestExecutor;
pub use models::{FormField, ProductEntryForm, ProductFilter, Role};
pub use orchestrator::{AdminPanel, PanelView};
pub use store::{ProductCache, SessionStore};
pub use workflow::{ActionKind, LatestGuard};
