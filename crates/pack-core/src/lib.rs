//! # Pack Core
//!
//! 出貨優化的核心資料模型與類型定義

pub mod config;
pub mod order;
pub mod package;
pub mod shipment;

// Re-export 主要類型
pub use config::OptimizerConfig;
pub use order::{OrderAmount, OrderRequest};
pub use package::PackageSizeSet;
pub use shipment::Shipment;

/// 出貨優化錯誤類型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PackError {
    #[error("無效的訂單數量: {0}（不可為負數）")]
    InvalidOrderAmount(i64),

    #[error("無效的包裝規格: {0}")]
    InvalidPackageSizes(String),

    #[error("求解器未取得任何有效包裝規格")]
    NoPackageSizes,

    #[error("超出資源上限: 需要 {required}，上限 {limit}")]
    ResourceLimitExceeded { required: u64, limit: u64 },

    #[error("無法以現有包裝湊出總量: {0}")]
    UnreachableTotal(u64),

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("序列化錯誤: {0}")]
    Serialization(String),
}

impl PackError {
    /// 是否值得以相同輸入重試
    ///
    /// 優化器是確定性的純函數，任何錯誤以相同輸入重試都會得到相同結果。
    pub fn is_retryable(&self) -> bool {
        false
    }
}

impl From<serde_json::Error> for PackError {
    fn from(err: serde_json::Error) -> Self {
        PackError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PackError>;
