//! 最少包數拆解

use pack_core::{PackError, Result};

use crate::reachability::{normalize_sizes, table_index};

/// 未知（尚不可達）的包數標記
const UNKNOWN: u32 = u32::MAX;

/// 最少包數拆解
///
/// 回傳總和恰為 `target`、且包數最少的規格多重集合（升冪排序）。
///
/// `sizes` 不需排序，重複規格視為一種。多種拆解包數相同時，
/// 保留升冪遍歷中最先找到的更新；呼叫端不應依賴平手時回傳哪一組。
pub fn minimum_count_decomposition(target: u64, sizes: &[u64]) -> Result<Vec<u64>> {
    let sizes = normalize_sizes(sizes)?;
    if u32::try_from(sizes.len()).is_err() {
        return Err(PackError::ResourceLimitExceeded {
            required: sizes.len() as u64,
            limit: u32::MAX as u64,
        });
    }

    if target == 0 {
        return Ok(Vec::new());
    }

    let target_index = table_index(target)?;

    // best[t]: 湊出 t 的最少包數；choice[t]: 最佳解中最後一包的規格索引
    let mut best = vec![UNKNOWN; target_index + 1];
    let mut choice = vec![0u32; target_index + 1];
    best[0] = 0;

    for t in 1..=target_index {
        for (idx, &size) in sizes.iter().enumerate() {
            let size = size as usize;
            if size > t {
                break;
            }

            let previous = best[t - size];
            if previous == UNKNOWN {
                continue;
            }

            if previous + 1 < best[t] {
                best[t] = previous + 1;
                choice[t] = idx as u32;
            }
        }
    }

    if best[target_index] == UNKNOWN {
        return Err(PackError::UnreachableTotal(target));
    }

    // 從 target 反向追溯
    let mut packs = Vec::with_capacity(best[target_index] as usize);
    let mut remaining = target_index;
    while remaining > 0 {
        let size = sizes[choice[remaining] as usize];
        packs.push(size);
        remaining -= size as usize;
    }
    packs.sort_unstable();

    tracing::debug!("拆解總量 {}: {} 包", target, packs.len());

    Ok(packs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SIZES: [u64; 5] = [250, 500, 1000, 2000, 5000];

    #[rstest]
    #[case(500, vec![500])]
    #[case(750, vec![250, 500])]
    #[case(1250, vec![250, 1000])]
    #[case(12250, vec![250, 2000, 5000, 5000])]
    fn test_unique_decompositions(#[case] target: u64, #[case] expected: Vec<u64>) {
        assert_eq!(minimum_count_decomposition(target, &SIZES).unwrap(), expected);
    }

    #[test]
    fn test_zero_target() {
        assert!(minimum_count_decomposition(0, &SIZES).unwrap().is_empty());
    }

    #[test]
    fn test_beats_greedy() {
        // 貪婪法會取 4 + 1 + 1，最佳解為 3 + 3
        let packs = minimum_count_decomposition(6, &[1, 3, 4]).unwrap();
        assert_eq!(packs, vec![3, 3]);
    }

    #[test]
    fn test_tie_keeps_first_found() {
        // 10 = 2 + 8 = 4 + 6，兩者皆為 2 包；升冪遍歷先找到 2
        let packs = minimum_count_decomposition(10, &[2, 4, 6, 8]).unwrap();
        assert_eq!(packs.len(), 2);
        assert_eq!(packs.iter().sum::<u64>(), 10);
        assert_eq!(packs, vec![2, 8]);
    }

    #[test]
    fn test_unsorted_sizes() {
        assert_eq!(minimum_count_decomposition(3, &[5, 1]).unwrap(), vec![1, 1, 1]);
        assert_eq!(
            minimum_count_decomposition(12250, &[5000, 250, 2000, 1000, 500]).unwrap(),
            vec![250, 2000, 5000, 5000]
        );
    }

    #[test]
    fn test_duplicate_sizes() {
        assert_eq!(minimum_count_decomposition(2, &[1, 1]).unwrap(), vec![1, 1]);
        assert_eq!(minimum_count_decomposition(10, &[5, 5, 1]).unwrap(), vec![5, 5]);
    }

    #[test]
    fn test_chained_with_reachability() {
        // 未排序的規格直接串接兩個求解器
        let sizes = [6, 4];
        let total = crate::reachability::minimum_reachable_total(7, &sizes).unwrap();
        assert_eq!(total, 8);
        assert_eq!(minimum_count_decomposition(total, &sizes).unwrap(), vec![4, 4]);
    }

    #[test]
    fn test_unreachable_target() {
        assert_eq!(
            minimum_count_decomposition(7, &[4, 6]),
            Err(PackError::UnreachableTotal(7))
        );
    }

    #[test]
    fn test_invalid_sizes() {
        assert_eq!(minimum_count_decomposition(5, &[]), Err(PackError::NoPackageSizes));
        assert_eq!(minimum_count_decomposition(5, &[0]), Err(PackError::NoPackageSizes));
    }
}
