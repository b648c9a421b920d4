//! 商品相关的数据模型
//!
//! 与后端 `/products/`、`/products/search/`、`/bulk-products/` 接口收发的结构

use crate::error::FormError;
use serde::{Deserialize, Serialize};

/// 服务端返回的商品记录
///
/// price 是后端序列化成字符串的十进制数（例如 "12.50"），
/// 面板只做展示，不参与计算，保持字符串原样
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock_quantity: i64,
    pub shop_name: String,
}

/// 批量创建时的单个商品载荷
///
/// 五个字段都是用户输入的原始字符串，数值校验交给后端
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock_quantity: String,
    pub shop: String,
}

/// 批量删除请求体
#[derive(Debug, Clone, Serialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<String>,
}

/// 商品筛选条件
///
/// 四个字段都是用户输入的原始字符串，空字段不会进入查询参数
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub name: String,
    pub min_price: String,
    pub max_price: String,
    pub shop_name: String,
}

impl ProductFilter {
    /// 校验价格区间
    ///
    /// 两个价格都填了且 min > max 时拒绝，提示语与服务端一致
    pub fn validate(&self) -> Result<(), FormError> {
        let min = self.min_price.parse::<f64>().ok();
        let max = self.max_price.parse::<f64>().ok();

        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(FormError::PriceRangeInvalid { min, max });
            }
        }

        Ok(())
    }

    /// 构建查询参数
    ///
    /// # 返回
    /// 只包含有效字段的键值对：
    /// - name / shop_name 非空时加入（统一转小写）
    /// - min_price / max_price 能解析成数字时加入
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        if !self.name.is_empty() {
            pairs.push(("name".to_string(), self.name.to_lowercase()));
        }

        if let Ok(min) = self.min_price.parse::<f64>() {
            pairs.push(("min_price".to_string(), format!("{}", min)));
        }

        if let Ok(max) = self.max_price.parse::<f64>() {
            pairs.push(("max_price".to_string(), format!("{}", max)));
        }

        if !self.shop_name.is_empty() {
            pairs.push(("shop_name".to_string(), self.shop_name.to_lowercase()));
        }

        pairs
    }
}

/// 解析逗号分隔的商品 ID 列表
///
/// 每段去掉首尾空白，空段丢弃。ID 保持字符串，与请求体格式一致
pub fn parse_id_list(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .map(|id| id.to_string())
        .collect()
}
