//! 商品目录服务 - 业务能力层
//!
//! 负责商品的读取、搜索和批量增删。
//! 只处理单次调用，缓存和表单状态由编排层持有

use crate::clients::ShopClient;
use crate::error::AppResult;
use crate::models::{NewProduct, ProductFilter, ProductRecord};
use tracing::{info, warn};

/// 商品目录服务
pub struct CatalogService {
    client: ShopClient,
}

impl CatalogService {
    /// 创建新的商品目录服务
    pub fn new(client: ShopClient) -> Self {
        Self { client }
    }

    /// 获取全部商品
    pub async fn fetch_all(&self, token: &str) -> AppResult<Vec<ProductRecord>> {
        let products = self.client.fetch_products(token).await?;
        info!("✓ 获取到 {} 个商品", products.len());
        Ok(products)
    }

    /// 按条件搜索商品
    ///
    /// 先做价格区间校验，再发请求
    pub async fn search(&self, token: &str, filter: &ProductFilter) -> AppResult<Vec<ProductRecord>> {
        filter.validate()?;

        let products = self.client.search_products(token, filter).await?;
        info!("✓ 搜索到 {} 个商品", products.len());
        Ok(products)
    }

    /// 批量创建商品
    pub async fn bulk_create(&self, token: &str, products: &[NewProduct]) -> AppResult<()> {
        if products.is_empty() {
            warn!("⚠️ 批量创建的载荷为空");
        }

        self.client.bulk_create_products(token, products).await?;
        info!("✓ 批量创建成功，共 {} 个商品", products.len());
        Ok(())
    }

    /// 批量删除商品
    pub async fn bulk_delete(&self, token: &str, ids: &[String]) -> AppResult<()> {
        self.client.bulk_delete_products(token, ids).await?;
        info!("✓ 批量删除成功，共 {} 个 ID", ids.len());
        Ok(())
    }
}
