//! # Pack Calculation Engine
//!
//! 出貨優化計算引擎
//!
//! 計算分兩步：
//! 1. [`reachability`] 求出不小於訂單數量的最小可達總量
//! 2. [`decomposition`] 以最少包數湊出該總量
//!
//! [`ShipmentOptimizer`] 負責驗證輸入、檢查資源上限並串接兩步。

pub mod decomposition;
pub mod optimizer;
pub mod reachability;

// Re-export 主要類型
pub use decomposition::minimum_count_decomposition;
pub use optimizer::{compute_shipment, ShipmentOptimizer};
pub use reachability::{minimum_reachable_total, search_bound};
