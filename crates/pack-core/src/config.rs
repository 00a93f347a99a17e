//! 優化器配置模型

use serde::{Deserialize, Serialize};

use crate::{PackError, PackageSizeSet, Result};

/// 預設包裝規格（請求未指定時使用）
pub const DEFAULT_PACKAGE_SIZES: [u64; 3] = [1, 5, 10];

/// 預設訂單數量上限
pub const DEFAULT_MAX_ORDER_AMOUNT: u64 = 10_000_000;

/// 預設 DP 表格長度上限
pub const DEFAULT_MAX_TABLE_LEN: usize = 1 << 24;

/// 優化器參數配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// 預設包裝規格
    pub default_package_sizes: Vec<u64>,

    /// 訂單數量上限
    pub max_order_amount: u64,

    /// 單次計算 DP 表格的長度上限
    /// - 搜尋上界為 `訂單數量 + 最大規格 - 1`，表格長度為上界 + 1
    /// - 超過時拒絕計算，而不是配置無上限的記憶體
    pub max_table_len: usize,
}

impl OptimizerConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            default_package_sizes: DEFAULT_PACKAGE_SIZES.to_vec(),
            max_order_amount: DEFAULT_MAX_ORDER_AMOUNT,
            max_table_len: DEFAULT_MAX_TABLE_LEN,
        }
    }

    /// 建構器模式：設置預設包裝規格
    pub fn with_default_package_sizes(mut self, sizes: Vec<u64>) -> Self {
        self.default_package_sizes = sizes;
        self
    }

    /// 建構器模式：設置訂單數量上限
    pub fn with_max_order_amount(mut self, max: u64) -> Self {
        self.max_order_amount = max;
        self
    }

    /// 建構器模式：設置 DP 表格長度上限
    pub fn with_max_table_len(mut self, max: usize) -> Self {
        self.max_table_len = max;
        self
    }

    /// 從 JSON 載入配置，未列出的欄位使用預設值
    ///
    /// # 範例
    /// ```
    /// # use pack_core::OptimizerConfig;
    /// let config = OptimizerConfig::from_json_str(
    ///     r#"{"default_package_sizes": [250, 500, 1000, 2000, 5000]}"#,
    /// ).unwrap();
    /// assert_eq!(config.max_order_amount, 10_000_000);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 驗證配置
    pub fn validate(&self) -> Result<()> {
        if self.max_table_len == 0 {
            return Err(PackError::InvalidConfig(
                "max_table_len 必須大於 0".to_string(),
            ));
        }

        self.default_sizes().map_err(|err| {
            PackError::InvalidConfig(format!("default_package_sizes: {}", err))
        })?;

        Ok(())
    }

    /// 預設包裝規格集合
    pub fn default_sizes(&self) -> Result<PackageSizeSet> {
        PackageSizeSet::from_unsigned(&self.default_package_sizes)
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self::new()
    }
}
