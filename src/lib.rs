//! # Pack
//!
//! 出貨包裝優化：給定訂單數量與可用包裝規格，
//! 求出總量最小、其次包數最少的出貨組合（不拆包）。
//!
//! ```
//! use pack::{OptimizerConfig, ShipmentOptimizer};
//!
//! let optimizer = ShipmentOptimizer::new(OptimizerConfig::default());
//! let shipment = optimizer
//!     .compute_shipment(501, &[250, 500, 1000, 2000, 5000])
//!     .unwrap();
//!
//! assert_eq!(shipment.total, 750);
//! assert_eq!(shipment.count, 2);
//! ```

pub use pack_calc::{
    compute_shipment, decomposition, minimum_count_decomposition, minimum_reachable_total,
    optimizer, reachability, search_bound, ShipmentOptimizer,
};
pub use pack_core::{
    config, OptimizerConfig, OrderAmount, OrderRequest, PackError, PackageSizeSet, Result,
    Shipment,
};
