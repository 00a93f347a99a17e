//! 出貨模型

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 出貨（優化計算結果）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    /// 原訂單數量
    pub order_amount: u64,

    /// 出貨包裝（升冪排序，每包一筆）
    pub shipped_sizes: Vec<u64>,

    /// 出貨總量
    pub total: u64,

    /// 包數
    pub count: usize,
}

impl Shipment {
    /// 由包裝清單創建出貨，總量與包數由清單推導
    pub fn new(order_amount: u64, mut shipped_sizes: Vec<u64>) -> Self {
        shipped_sizes.sort_unstable();
        let total = shipped_sizes.iter().sum();
        let count = shipped_sizes.len();

        Self {
            order_amount,
            shipped_sizes,
            total,
            count,
        }
    }

    /// 零數量訂單的空出貨
    pub fn empty() -> Self {
        Self::new(0, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// 超量（出貨總量 - 訂單數量）
    pub fn overage(&self) -> u64 {
        self.total.saturating_sub(self.order_amount)
    }

    /// 各規格包數，例如 `{250: 1, 2000: 1, 5000: 2}`
    pub fn breakdown(&self) -> BTreeMap<u64, usize> {
        let mut packs = BTreeMap::new();
        for &size in &self.shipped_sizes {
            *packs.entry(size).or_insert(0) += 1;
        }
        packs
    }
}
