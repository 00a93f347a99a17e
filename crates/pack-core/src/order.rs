//! 訂單模型

use serde::{Deserialize, Serialize};

use crate::{PackError, Result};

/// 訂單數量（客戶要求的單位數）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderAmount(u64);

impl OrderAmount {
    pub fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// 零數量訂單，空出貨即可滿足
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<i64> for OrderAmount {
    type Error = PackError;

    fn try_from(amount: i64) -> Result<Self> {
        u64::try_from(amount)
            .map(OrderAmount)
            .map_err(|_| PackError::InvalidOrderAmount(amount))
    }
}

/// 出貨請求
///
/// 欄位名稱沿用對外 JSON 格式：`{"orderAmount": 501, "packageSizes": [250, 500]}`。
/// 未提供 `packageSizes` 時由優化器套用配置中的預設規格。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// 訂單數量（尚未驗證，可能為負）
    pub order_amount: i64,

    /// 包裝規格（選填）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_sizes: Option<Vec<i64>>,
}

impl OrderRequest {
    /// 創建使用預設規格的請求
    pub fn new(order_amount: i64) -> Self {
        Self {
            order_amount,
            package_sizes: None,
        }
    }

    /// 建構器模式：指定包裝規格
    pub fn with_package_sizes(mut self, sizes: Vec<i64>) -> Self {
        self.package_sizes = Some(sizes);
        self
    }

    /// 從 JSON 解析請求
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 驗證訂單數量
    pub fn amount(&self) -> Result<OrderAmount> {
        OrderAmount::try_from(self.order_amount)
    }
}
