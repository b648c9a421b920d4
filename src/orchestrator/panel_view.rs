//! 面板视图状态
//!
//! 面板上所有会被动作改写的展示内容集中在这里：
//! 每个动作各自的提示槽、两个结果列表、登录前后的控件可见性。
//! 提示文案沿用后端管理页的英文原文

use crate::models::{ProductRecord, UserRecord};

/// 面板视图
#[derive(Debug, Clone)]
pub struct PanelView {
    /// 注册提示
    pub sign_up_response: String,
    /// 登录提示
    pub login_response: String,
    /// 新建用户提示
    pub create_user_response: String,
    /// 批量创建提示
    pub bulk_create_response: String,
    /// 批量删除提示
    pub bulk_delete_response: String,
    /// 用户列表提示
    pub users_response: String,
    /// 商品列表提示（获取全部和搜索共用）
    pub products_response: String,
    /// 用户列表的展示行
    pub users_list: Vec<String>,
    /// 商品列表的展示行
    pub products_list: Vec<String>,
    /// 登录表单是否可见
    pub login_form_visible: bool,
    /// 商品浏览控件（列表/搜索/筛选按钮）是否可见
    pub browse_controls_visible: bool,
}

impl Default for PanelView {
    fn default() -> Self {
        Self {
            sign_up_response: String::new(),
            login_response: String::new(),
            create_user_response: String::new(),
            bulk_create_response: String::new(),
            bulk_delete_response: String::new(),
            users_response: String::new(),
            products_response: String::new(),
            users_list: Vec::new(),
            products_list: Vec::new(),
            // 初始只显示登录表单，浏览控件在登录成功后才出现
            login_form_visible: true,
            browse_controls_visible: false,
        }
    }
}

impl PanelView {
    /// 创建初始视图
    pub fn new() -> Self {
        Self::default()
    }

    /// 登录成功后的可见性切换：隐藏登录表单，显示浏览控件
    pub fn show_browse_controls(&mut self) {
        self.login_form_visible = false;
        self.browse_controls_visible = true;
    }

    /// 注销后恢复初始可见性
    pub fn show_login_form(&mut self) {
        self.login_form_visible = true;
        self.browse_controls_visible = false;
    }

    /// 用展示行整体替换用户列表
    pub fn set_users(&mut self, users: &[UserRecord]) {
        self.users_list = users.iter().map(render_user_line).collect();
    }

    /// 用展示行整体替换商品列表
    pub fn set_products(&mut self, products: &[ProductRecord]) {
        self.products_list = products.iter().map(render_product_line).collect();
    }
}

/// 一个用户的展示行
pub fn render_user_line(user: &UserRecord) -> String {
    format!(
        "{} || {} || {}",
        user.name,
        user.email,
        user.role.as_deref().unwrap_or("-")
    )
}

/// 一个商品的展示行
pub fn render_product_line(product: &ProductRecord) -> String {
    format!(
        "{} || {} || {} || {} || {}",
        product.name,
        product.description,
        product.price,
        product.stock_quantity,
        product.shop_name
    )
}
