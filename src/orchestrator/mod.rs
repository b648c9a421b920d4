//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层把用户动作调度到各业务服务，并维护面板的全部可变状态。
//!
//! ## 模块划分
//!
//! ### `admin_panel` - 管理面板编排器
//! - 持有表单、会话、缓存、视图和最新请求守卫
//! - 每个用户动作一个方法（提交注册、登录、批量创建……）
//! - 保证每个动作结束时视图里有且只有一条结果
//!
//! ### `panel_view` - 面板视图状态
//! - 各动作的提示槽和两个结果列表
//! - 登录前后的控件可见性
//! - `name || email || role` 风格的展示行渲染
//!
//! ## 层次关系
//!
//! ```text
//! admin_panel (调度一次用户动作)
//!     ↓
//! services (能力层：account / directory / catalog)
//!     ↓
//! clients (端点封装：ShopClient)
//!     ↓
//! infrastructure (基础设施：RestExecutor)
//! ```

pub mod admin_panel;
pub mod panel_view;

pub use admin_panel::AdminPanel;
pub use panel_view::{render_product_line, render_user_line, PanelView};
