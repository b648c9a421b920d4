/// 商店 API 客户端
///
/// 封装所有与商店后端 API 相关的调用逻辑
use crate::error::{AppError, AppResult};
use crate::infrastructure::{ApiResponse, RestExecutor};
use crate::models::{
    BulkDeleteRequest, CreatedUser, LoginRequest, LoginResponse, NewProduct, NewUserRequest,
    ProductFilter, ProductRecord, RegisterRequest, UserRecord,
};
use serde_json::Value;
use tracing::debug;

/// 商店 API 客户端
#[derive(Clone)]
pub struct ShopClient {
    executor: RestExecutor,
}

impl ShopClient {
    /// 创建新的商店客户端
    pub fn new(executor: RestExecutor) -> Self {
        Self { executor }
    }

    /// 注册新用户
    ///
    /// # 参数
    /// - `request`: 注册请求体
    ///
    /// # 返回
    /// 成功时返回服务端回显的用户数据
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<Value> {
        let body = serde_json::to_value(request)?;

        debug!("注册请求: {}", request.email);

        let response = self.executor.post_json("/register/", &body, None).await?;
        Self::ensure_success("/register/", &response)?;

        Ok(response.body)
    }

    /// 登录
    ///
    /// # 返回
    /// 返回包含访问令牌的响应
    pub async fn login(&self, request: &LoginRequest) -> AppResult<LoginResponse> {
        let body = serde_json::to_value(request)?;

        debug!("登录请求: {}", request.email);

        let response = self.executor.post_json("/login/", &body, None).await?;
        Self::ensure_success("/login/", &response)?;

        let login: LoginResponse = serde_json::from_value(response.body)?;
        Ok(login)
    }

    /// 获取全部用户
    pub async fn fetch_users(&self, token: &str) -> AppResult<Vec<UserRecord>> {
        let response = self.executor.get("/users/", &[], Some(token)).await?;
        Self::ensure_success("/users/", &response)?;

        let users: Vec<UserRecord> = serde_json::from_value(response.body)?;
        Ok(users)
    }

    /// 新建单个用户
    pub async fn create_user(
        &self,
        token: &str,
        request: &NewUserRequest,
    ) -> AppResult<CreatedUser> {
        let body = serde_json::to_value(request)?;

        let response = self.executor.post_json("/users/", &body, Some(token)).await?;
        Self::ensure_success("/users/", &response)?;

        let created: CreatedUser = serde_json::from_value(response.body)?;
        Ok(created)
    }

    /// 获取全部商品
    pub async fn fetch_products(&self, token: &str) -> AppResult<Vec<ProductRecord>> {
        let response = self.executor.get("/products/", &[], Some(token)).await?;
        Self::ensure_success("/products/", &response)?;

        let products: Vec<ProductRecord> = serde_json::from_value(response.body)?;
        Ok(products)
    }

    /// 按条件搜索商品
    ///
    /// 查询参数由筛选条件构建，空字段不发送
    pub async fn search_products(
        &self,
        token: &str,
        filter: &ProductFilter,
    ) -> AppResult<Vec<ProductRecord>> {
        let query = filter.to_query_pairs();

        debug!("搜索商品，条件数: {}", query.len());

        let response = self
            .executor
            .get("/products/search/", &query, Some(token))
            .await?;
        Self::ensure_success("/products/search/", &response)?;

        let products: Vec<ProductRecord> = serde_json::from_value(response.body)?;
        Ok(products)
    }

    /// 批量创建商品
    ///
    /// 请求体是商品对象数组
    pub async fn bulk_create_products(
        &self,
        token: &str,
        products: &[NewProduct],
    ) -> AppResult<()> {
        let body = serde_json::to_value(products)?;

        debug!("批量创建商品，数量: {}", products.len());

        let response = self
            .executor
            .post_json("/bulk-products/", &body, Some(token))
            .await?;
        Self::ensure_success("/bulk-products/", &response)?;

        Ok(())
    }

    /// 批量删除商品
    pub async fn bulk_delete_products(&self, token: &str, ids: &[String]) -> AppResult<()> {
        let request = BulkDeleteRequest { ids: ids.to_vec() };
        let body = serde_json::to_value(&request)?;

        debug!("批量删除商品，数量: {}", ids.len());

        let response = self
            .executor
            .delete_json("/bulk-products/", &body, Some(token))
            .await?;
        Self::ensure_success("/bulk-products/", &response)?;

        Ok(())
    }

    /// 检查响应状态，非 2xx 时带上服务端的 error 字段
    fn ensure_success(endpoint: &str, response: &ApiResponse) -> AppResult<()> {
        if response.is_success() {
            return Ok(());
        }

        Err(AppError::api_bad_response(
            endpoint,
            response.status,
            response.error_message(),
        ))
    }
}
