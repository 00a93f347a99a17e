//! 可達總量計算

use pack_core::{PackError, Result};

/// 搜尋上界：`訂單數量 + 最大規格 - 1`
///
/// 小於訂單數量的最大可達值 r 加上一包最大規格即落在 `[order, bound]` 內，
/// 因此上界內必定存在可達總量。
pub fn search_bound(order: u64, sizes: &[u64]) -> Result<u64> {
    let sizes = normalize_sizes(sizes)?;
    let largest = sizes[sizes.len() - 1];

    if order == 0 {
        return Ok(0);
    }

    order
        .checked_add(largest - 1)
        .ok_or(PackError::ResourceLimitExceeded {
            required: order,
            limit: u64::MAX - (largest - 1),
        })
}

/// 最小可達總量
///
/// 回傳不小於 `order`、且可由 `sizes` 重複相加得到的最小值。
/// 零數量訂單直接回傳 0。
///
/// `sizes` 不需排序，重複規格視為一種。
///
/// 時間 `O(B · |sizes|)`，空間 `O(B)`，其中 B 為 [`search_bound`]。
/// 呼叫端應先以 [`search_bound`] 確認表格大小在資源上限內。
pub fn minimum_reachable_total(order: u64, sizes: &[u64]) -> Result<u64> {
    let bound = search_bound(order, sizes)?;
    let sizes = normalize_sizes(sizes)?;

    if order == 0 {
        return Ok(0);
    }

    let bound = table_index(bound)?;
    let start = table_index(order)?;

    let mut reachable = vec![false; bound + 1];
    reachable[0] = true;

    for sum in 1..=bound {
        reachable[sum] = sizes.iter().any(|&size| {
            let size = size as usize;
            size <= sum && reachable[sum - size]
        });
    }

    let total = (start..=bound)
        .find(|&sum| reachable[sum])
        .ok_or_else(|| PackError::UnreachableTotal(order))?;

    tracing::debug!(
        "可達總量: 訂單 {} → {}（上界 {}）",
        order,
        total,
        bound
    );

    Ok(total as u64)
}

/// 檢查規格切片，回傳升冪、不重複的副本（保證非空）
pub(crate) fn normalize_sizes(sizes: &[u64]) -> Result<Vec<u64>> {
    if sizes.is_empty() || sizes.contains(&0) {
        return Err(PackError::NoPackageSizes);
    }

    let mut normalized = sizes.to_vec();
    normalized.sort_unstable();
    normalized.dedup();
    Ok(normalized)
}

pub(crate) fn table_index(value: u64) -> Result<usize> {
    usize::try_from(value).map_err(|_| PackError::ResourceLimitExceeded {
        required: value,
        limit: usize::MAX as u64,
    })
}
