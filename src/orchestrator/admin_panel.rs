//! 管理面板编排器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个面板的"指挥中心"，把每一个用户动作翻译成
//! 一次后端调用，并把结果写回视图。
//!
//! ## 核心约定
//!
//! 1. **资源所有者**：唯一持有表单、会话、缓存和视图的模块
//! 2. **每个动作一个方法**：方法对应页面上的一次提交或点击
//! 3. **结果必达**：每个动作结束时视图里一定有一条结果，
//!    成功提示、服务端错误或通用失败提示，三者必居其一
//! 4. **最新请求优先**：同类动作的过期响应不允许写视图
//! 5. **向下委托**：具体调用交给 services，自己不碰 HTTP

use crate::clients::ShopClient;
use crate::config::Config;
use crate::error::{ApiError, AppError, AppResult};
use crate::infrastructure::RestExecutor;
use crate::models::{
    parse_id_list, EntryGroup, FormField, ProductEntryForm, ProductFilter, ProductRecord, Role,
};
use crate::orchestrator::panel_view::PanelView;
use crate::services::{AccountService, CatalogService, DirectoryService};
use crate::store::{ProductCache, SessionStore};
use crate::workflow::{ActionKind, LatestGuard};
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// 管理面板编排器
pub struct AdminPanel {
    account: AccountService,
    directory: DirectoryService,
    catalog: CatalogService,
    form: Mutex<ProductEntryForm>,
    session: Mutex<SessionStore>,
    cache: Mutex<ProductCache>,
    guard: LatestGuard,
    view: Mutex<PanelView>,
}

impl AdminPanel {
    /// 初始化面板
    ///
    /// 构建 HTTP 执行器和各业务服务，并从令牌文件恢复已有会话。
    /// 恢复的会话只影响后续请求能否带令牌，控件可见性仍从初始状态开始
    pub fn initialize(config: Config) -> AppResult<Self> {
        let executor = RestExecutor::new(&config)?;
        let client = ShopClient::new(executor);

        let session = SessionStore::load(&config.token_file);
        if session.is_logged_in() {
            debug!("检测到已保存的访问令牌");
        }

        Ok(Self {
            account: AccountService::new(client.clone()),
            directory: DirectoryService::new(client.clone()),
            catalog: CatalogService::new(client),
            form: Mutex::new(ProductEntryForm::new()),
            session: Mutex::new(session),
            cache: Mutex::new(ProductCache::new()),
            guard: LatestGuard::new(),
            view: Mutex::new(PanelView::new()),
        })
    }

    /// 当前视图的快照
    pub async fn view(&self) -> PanelView {
        self.view.lock().await.clone()
    }

    /// 当前缓存的商品全量快照
    pub async fn cached_products(&self) -> Vec<ProductRecord> {
        self.cache.lock().await.all().to_vec()
    }

    // ========== 账号动作 ==========

    /// 注册（对应注册表单提交）
    pub async fn register(&self, name: &str, email: &str, role: Role, password: &str) {
        let ticket = self.guard.begin(ActionKind::SignUp);
        let result = self.account.register(name, email, role, password).await;

        let mut view = self.view.lock().await;
        if !self.guard.is_current(&ticket) {
            debug!("丢弃过期的 {} 结果", ticket.kind());
            return;
        }

        view.sign_up_response = match result {
            Ok(()) => "Sign Up successful!".to_string(),
            Err(e) => failure_text(&e, "Failed to sign up", "An error occurred while signing up."),
        };
    }

    /// 登录（对应登录表单提交）
    ///
    /// 成功时持久化访问令牌，隐藏登录表单并显示商品浏览控件；
    /// 失败时可见性和已有令牌都保持不变
    pub async fn login(&self, email: &str, password: &str) {
        let ticket = self.guard.begin(ActionKind::Login);
        let result = self.account.login(email, password).await;

        let mut view = self.view.lock().await;
        if !self.guard.is_current(&ticket) {
            debug!("丢弃过期的 {} 结果", ticket.kind());
            return;
        }

        match result {
            Ok(login) => {
                // 令牌落盘失败不影响本次会话，降级为日志告警
                if let Err(e) = self.session.lock().await.save(login.access) {
                    warn!("⚠️ 令牌落盘失败，本次会话仍然有效: {}", e);
                }

                view.login_response = "Login successful!".to_string();
                view.show_browse_controls();
            }
            Err(e) => {
                view.login_response =
                    failure_text(&e, "Failed to log in", "An error occurred while logging in.");
            }
        }
    }

    /// 注销：清掉本地令牌并恢复初始可见性
    pub async fn logout(&self) {
        if let Err(e) = self.session.lock().await.clear() {
            warn!("⚠️ 清除本地令牌失败: {}", e);
        }

        let mut view = self.view.lock().await;
        view.login_response.clear();
        view.show_login_form();
    }

    // ========== 商品录入表单动作（本地操作，不发请求） ==========

    /// 新增一组商品输入框
    ///
    /// # 返回
    /// 返回新组的 ID
    pub async fn add_product_group(&self) -> u64 {
        self.form.lock().await.add_group()
    }

    /// 删除指定的一组商品输入框，其余组不受影响
    pub async fn remove_product_group(&self, id: u64) -> AppResult<()> {
        self.form.lock().await.remove_group(id)?;
        Ok(())
    }

    /// 写入某一组的某个字段
    pub async fn set_group_field(&self, id: u64, field: FormField, value: &str) -> AppResult<()> {
        self.form.lock().await.set_field(id, field, value)?;
        Ok(())
    }

    /// 当前表单所有组的快照
    pub async fn form_groups(&self) -> Vec<EntryGroup> {
        self.form.lock().await.groups().to_vec()
    }

    // ========== 批量动作 ==========

    /// 批量创建商品（对应批量创建表单提交）
    ///
    /// 收集当前存在且填写完整的组作为载荷，成功后清空整个表单
    pub async fn submit_bulk_create(&self) {
        let ticket = self.guard.begin(ActionKind::BulkCreate);

        // 发请求前收集载荷，与页面在 fetch 前读取输入框一致
        let products = self.form.lock().await.collect_complete();

        let result = match self.bearer().await {
            Ok(token) => self.catalog.bulk_create(&token, &products).await,
            Err(e) => Err(e),
        };

        let mut view = self.view.lock().await;
        if !self.guard.is_current(&ticket) {
            debug!("丢弃过期的 {} 结果", ticket.kind());
            return;
        }

        match result {
            Ok(()) => {
                self.form.lock().await.clear();
                view.bulk_create_response = "Products created successfully!".to_string();
            }
            Err(e) => {
                view.bulk_create_response = failure_text(
                    &e,
                    "Failed to create products",
                    "An error occurred while creating products.",
                );
            }
        }
    }

    /// 批量删除商品（对应批量删除表单提交）
    ///
    /// # 参数
    /// - `ids_csv`: 逗号分隔的商品 ID 列表
    pub async fn submit_bulk_delete(&self, ids_csv: &str) {
        let ticket = self.guard.begin(ActionKind::BulkDelete);
        let ids = parse_id_list(ids_csv);

        let result = match self.bearer().await {
            Ok(token) => self.catalog.bulk_delete(&token, &ids).await,
            Err(e) => Err(e),
        };

        let mut view = self.view.lock().await;
        if !self.guard.is_current(&ticket) {
            debug!("丢弃过期的 {} 结果", ticket.kind());
            return;
        }

        view.bulk_delete_response = match result {
            Ok(()) => "Products deleted successfully!".to_string(),
            Err(e) => failure_text(
                &e,
                "Failed to delete products",
                "An error occurred while deleting products.",
            ),
        };
    }

    // ========== 列表动作 ==========

    /// 获取全部用户（对应"Get All Users"按钮）
    pub async fn fetch_all_users(&self) {
        let ticket = self.guard.begin(ActionKind::FetchUsers);

        // 页面在发请求前就清空旧列表
        self.view.lock().await.users_list.clear();

        let result = match self.bearer().await {
            Ok(token) => self.directory.fetch_users(&token).await,
            Err(e) => Err(e),
        };

        let mut view = self.view.lock().await;
        if !self.guard.is_current(&ticket) {
            debug!("丢弃过期的 {} 结果", ticket.kind());
            return;
        }

        match result {
            Ok(users) => {
                view.users_response.clear();
                view.set_users(&users);
            }
            Err(e) => {
                view.users_response = failure_text(
                    &e,
                    "Failed to fetch users",
                    "An error occurred while fetching users.",
                );
            }
        }
    }

    /// 新建单个用户（对应管理端建号表单提交）
    pub async fn create_user(&self, name: &str, email: &str, role: Role) {
        let ticket = self.guard.begin(ActionKind::CreateUser);

        let result = match self.bearer().await {
            Ok(token) => self.directory.create_user(&token, name, email, role).await,
            Err(e) => Err(e),
        };

        let mut view = self.view.lock().await;
        if !self.guard.is_current(&ticket) {
            debug!("丢弃过期的 {} 结果", ticket.kind());
            return;
        }

        view.create_user_response = match result {
            Ok(created) => format!("User created: {} ({})", created.name, created.email),
            Err(e) => failure_text(
                &e,
                "Failed to create user",
                "An error occurred while creating the user.",
            ),
        };
    }

    /// 获取全部商品（对应"Get All Products"按钮）
    ///
    /// 成功后整体覆盖商品缓存并刷新展示列表
    pub async fn fetch_all_products(&self) {
        let ticket = self.guard.begin(ActionKind::FetchProducts);

        let result = match self.bearer().await {
            Ok(token) => self.catalog.fetch_all(&token).await,
            Err(e) => Err(e),
        };

        let mut view = self.view.lock().await;
        if !self.guard.is_current(&ticket) {
            debug!("丢弃过期的 {} 结果", ticket.kind());
            return;
        }

        match result {
            Ok(products) => {
                self.cache.lock().await.replace_all(products.clone());
                view.products_response.clear();
                view.set_products(&products);
            }
            Err(e) => {
                view.products_response = failure_text(
                    &e,
                    "Failed to fetch products",
                    "An error occurred while fetching products.",
                );
            }
        }
    }

    /// 按条件搜索商品（对应"Filter"按钮）
    ///
    /// 展示搜索结果，但不动商品全量缓存
    pub async fn filter_products(&self, filter: ProductFilter) {
        let ticket = self.guard.begin(ActionKind::FilterProducts);

        let result = match self.bearer().await {
            Ok(token) => self.catalog.search(&token, &filter).await,
            Err(e) => Err(e),
        };

        let mut view = self.view.lock().await;
        if !self.guard.is_current(&ticket) {
            debug!("丢弃过期的 {} 结果", ticket.kind());
            return;
        }

        match result {
            Ok(products) => {
                view.products_response.clear();
                view.set_products(&products);
            }
            Err(e) => {
                view.products_response = failure_text(
                    &e,
                    "Failed to fetch products",
                    "An error occurred while filtering products.",
                );
            }
        }
    }

    // ========== 辅助方法 ==========

    /// 读取当前令牌，未登录时直接报会话错误，不发请求
    async fn bearer(&self) -> AppResult<String> {
        self.session
            .lock()
            .await
            .token()
            .map(str::to_string)
            .ok_or_else(|| crate::error::SessionError::NotLoggedIn.into())
    }
}

/// 把一次失败翻译成面板提示
///
/// 服务端返回了非 2xx 响应时优先用响应体里的 error 字段，
/// 没有该字段就用各动作自己的兜底文案；尚未登录单独提示；
/// 网络异常等其余情况统一用通用失败文案
fn failure_text(err: &AppError, fallback: &str, generic: &str) -> String {
    match err {
        AppError::Api(ApiError::BadResponse { message, .. }) => {
            format!("Error: {}", message.as_deref().unwrap_or(fallback))
        }
        AppError::Session(_) => "Error: Not logged in".to_string(),
        AppError::Form(e) => format!("Error: {}", e),
        _ => generic.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_text_prefers_server_message() {
        let err = AppError::api_bad_response("/register/", 400, Some("email taken".to_string()));
        assert_eq!(
            failure_text(&err, "Failed to sign up", "generic"),
            "Error: email taken"
        );
    }

    #[test]
    fn test_failure_text_falls_back_without_server_message() {
        let err = AppError::api_bad_response("/register/", 400, None);
        assert_eq!(
            failure_text(&err, "Failed to sign up", "generic"),
            "Error: Failed to sign up"
        );
    }

    #[test]
    fn test_failure_text_generic_for_transport_errors() {
        let err = AppError::Other("connection refused".to_string());
        assert_eq!(
            failure_text(&err, "Failed to sign up", "An error occurred while signing up."),
            "An error occurred while signing up."
        );
    }

    #[test]
    fn test_failure_text_not_logged_in() {
        let err: AppError = crate::error::SessionError::NotLoggedIn.into();
        assert_eq!(
            failure_text(&err, "Failed to fetch users", "generic"),
            "Error: Not logged in"
        );
    }
}
