//! 出貨優化主計算器

use pack_core::{
    OptimizerConfig, OrderAmount, OrderRequest, PackError, PackageSizeSet, Result, Shipment,
};
use rayon::prelude::*;

use crate::{decomposition, reachability};

/// 出貨優化器
///
/// 只持有不可變配置，可在多執行緒間共用；每次計算配置自己的 DP 表格。
#[derive(Debug, Clone, Default)]
pub struct ShipmentOptimizer {
    config: OptimizerConfig,
}

impl ShipmentOptimizer {
    /// 創建新的出貨優化器
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// 主計算入口
    ///
    /// # 錯誤
    /// * `InvalidOrderAmount` - 訂單數量為負
    /// * `InvalidPackageSizes` - 規格為空或含非正數
    /// * `ResourceLimitExceeded` - 訂單數量或 DP 表格超過配置上限
    pub fn compute_shipment(&self, order: i64, sizes: &[i64]) -> Result<Shipment> {
        let order = OrderAmount::try_from(order)?;
        let sizes = PackageSizeSet::new(sizes.iter().copied())?;
        self.compute(order, &sizes)
    }

    /// 以已驗證的輸入計算
    pub fn compute(&self, order: OrderAmount, sizes: &PackageSizeSet) -> Result<Shipment> {
        let amount = order.value();

        tracing::debug!("開始出貨優化：訂單 {}，規格 {:?}", amount, sizes.as_slice());

        if order.is_zero() {
            return Ok(Shipment::empty());
        }

        // Step 1: 資源上限檢查（配置表格之前）
        self.check_limits(amount, sizes)?;

        // Step 2: 最小可達總量
        let total = reachability::minimum_reachable_total(amount, sizes.as_slice())?;

        // Step 3: 最少包數拆解
        let packs = decomposition::minimum_count_decomposition(total, sizes.as_slice())?;

        let shipment = Shipment::new(amount, packs);
        tracing::debug!(
            "出貨優化完成：總量 {}，{} 包，超量 {}",
            shipment.total,
            shipment.count,
            shipment.overage()
        );

        Ok(shipment)
    }

    /// 處理出貨請求，未指定規格時使用配置的預設規格
    pub fn compute_for_request(&self, request: &OrderRequest) -> Result<Shipment> {
        let order = request.amount()?;

        let sizes = match &request.package_sizes {
            Some(sizes) => PackageSizeSet::new(sizes.iter().copied())?,
            None => self.config.default_sizes()?,
        };

        self.compute(order, &sizes)
    }

    /// 以預設規格計算
    pub fn compute_with_defaults(&self, order: i64) -> Result<Shipment> {
        self.compute_for_request(&OrderRequest::new(order))
    }

    /// 批次計算
    ///
    /// 各請求互相獨立、並行計算；結果順序與請求順序一致，單筆失敗不影響其他請求。
    pub fn compute_batch(&self, requests: &[OrderRequest]) -> Vec<Result<Shipment>> {
        let start_time = std::time::Instant::now();

        let results: Vec<Result<Shipment>> = requests
            .par_iter()
            .map(|request| {
                let result = self.compute_for_request(request);
                if let Err(err) = &result {
                    tracing::warn!("出貨請求 {} 被拒絕: {}", request.order_amount, err);
                }
                result
            })
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        tracing::info!(
            "批次出貨優化完成：{} 筆請求，{} 筆失敗，耗時 {:?}",
            requests.len(),
            failed,
            start_time.elapsed()
        );

        results
    }

    /// 檢查訂單數量與 DP 表格大小是否在配置上限內
    fn check_limits(&self, amount: u64, sizes: &PackageSizeSet) -> Result<()> {
        if amount > self.config.max_order_amount {
            return Err(PackError::ResourceLimitExceeded {
                required: amount,
                limit: self.config.max_order_amount,
            });
        }

        let bound = reachability::search_bound(amount, sizes.as_slice())?;
        let table_len = bound.saturating_add(1);
        let limit = self.config.max_table_len as u64;
        if table_len > limit {
            return Err(PackError::ResourceLimitExceeded {
                required: table_len,
                limit,
            });
        }

        Ok(())
    }
}

/// 單次出貨優化（不需保留優化器時使用）
pub fn compute_shipment(order: i64, sizes: &[i64], config: &OptimizerConfig) -> Result<Shipment> {
    ShipmentOptimizer::new(config.clone()).compute_shipment(order, sizes)
}
