//! 商品录入表单模型
//!
//! 对应面板上可以反复"新增一组/删除一组"的商品输入区。
//!
//! 关键约定：
//! - 组 ID 从 1 开始单调递增，整个表单生命周期内不回收、不重排
//! - 删除中间一组不影响其余组的 ID 和内容
//! - 收集载荷时只看当前实际存在的组，按组自身的字段取值，
//!   任何一个字段为空的组会被静默跳过

use crate::error::FormError;
use crate::models::product::NewProduct;

/// 表单字段名
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    Price,
    StockQuantity,
    Shop,
}

impl FormField {
    /// 尝试从字符串解析字段名
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "name" => Some(FormField::Name),
            "description" | "desc" => Some(FormField::Description),
            "price" => Some(FormField::Price),
            "stock" | "stock_quantity" => Some(FormField::StockQuantity),
            "shop" => Some(FormField::Shop),
            _ => None,
        }
    }
}

/// 一组商品输入框
///
/// 五个字段保持用户输入的原始字符串
#[derive(Debug, Clone, Default)]
pub struct EntryGroup {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock_quantity: String,
    pub shop: String,
}

impl EntryGroup {
    /// 五个字段是否都已填写
    ///
    /// 按原始值判断是否为空，纯空格算已填写
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.description.is_empty()
            && !self.price.is_empty()
            && !self.stock_quantity.is_empty()
            && !self.shop.is_empty()
    }

    /// 转换成批量创建的载荷
    pub fn to_new_product(&self) -> NewProduct {
        NewProduct {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
            stock_quantity: self.stock_quantity.clone(),
            shop: self.shop.clone(),
        }
    }
}

/// 商品录入表单
#[derive(Debug, Default)]
pub struct ProductEntryForm {
    groups: Vec<EntryGroup>,
    next_id: u64,
}

impl ProductEntryForm {
    /// 创建空表单
    pub fn new() -> Self {
        Self::default()
    }

    /// 新增一组输入框
    ///
    /// # 返回
    /// 返回新组的 ID
    pub fn add_group(&mut self) -> u64 {
        self.next_id += 1;
        self.groups.push(EntryGroup {
            id: self.next_id,
            ..Default::default()
        });
        self.next_id
    }

    /// 删除指定的一组
    ///
    /// 只移除这一组，其余组的 ID 不变
    pub fn remove_group(&mut self, id: u64) -> Result<(), FormError> {
        let before = self.groups.len();
        self.groups.retain(|g| g.id != id);

        if self.groups.len() == before {
            return Err(FormError::GroupNotFound { id });
        }
        Ok(())
    }

    /// 写入某一组的某个字段
    pub fn set_field(&mut self, id: u64, field: FormField, value: &str) -> Result<(), FormError> {
        let group = self
            .groups
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(FormError::GroupNotFound { id })?;

        match field {
            FormField::Name => group.name = value.to_string(),
            FormField::Description => group.description = value.to_string(),
            FormField::Price => group.price = value.to_string(),
            FormField::StockQuantity => group.stock_quantity = value.to_string(),
            FormField::Shop => group.shop = value.to_string(),
        }
        Ok(())
    }

    /// 当前存在的所有组
    pub fn groups(&self) -> &[EntryGroup] {
        &self.groups
    }

    /// 当前组数
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// 表单是否为空
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// 收集所有填写完整的组作为批量创建载荷
    ///
    /// 不完整的组静默跳过，不计入载荷
    pub fn collect_complete(&self) -> Vec<NewProduct> {
        self.groups
            .iter()
            .filter(|g| g.is_complete())
            .map(|g| g.to_new_product())
            .collect()
    }

    /// 清空所有组（提交成功后调用）
    ///
    /// ID 计数器不回退，后续新增的组继续递增
    pub fn clear(&mut self) {
        self.groups.clear();
    }
}
