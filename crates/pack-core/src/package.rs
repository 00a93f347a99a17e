//! 包裝規格集合

use serde::{Deserialize, Serialize};

use crate::{PackError, Result};

/// 包裝規格集合
///
/// 每個規格都是正整數，且可無限量供應。建構時會去除重複並升冪排序，
/// 因此輸入順序不影響計算結果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<u64>")]
pub struct PackageSizeSet {
    sizes: Vec<u64>,
}

impl PackageSizeSet {
    /// 創建新的包裝規格集合
    ///
    /// # 錯誤
    /// * 空集合或包含非正數 → `PackError::InvalidPackageSizes`
    ///
    /// # 範例
    /// ```
    /// # use pack_core::PackageSizeSet;
    /// let sizes = PackageSizeSet::new([500, 250, 500, 1000]).unwrap();
    /// assert_eq!(sizes.as_slice(), &[250, 500, 1000]);
    /// ```
    pub fn new<I>(sizes: I) -> Result<Self>
    where
        I: IntoIterator<Item = i64>,
    {
        let mut normalized = Vec::new();

        for size in sizes {
            if size <= 0 {
                return Err(PackError::InvalidPackageSizes(format!(
                    "包裝規格必須為正整數，收到 {}",
                    size
                )));
            }
            normalized.push(size as u64);
        }

        if normalized.is_empty() {
            return Err(PackError::InvalidPackageSizes(
                "至少需要一種包裝規格".to_string(),
            ));
        }

        normalized.sort_unstable();
        normalized.dedup();

        Ok(Self { sizes: normalized })
    }

    /// 以無號整數建立（配置檔中的預設規格）
    pub fn from_unsigned(sizes: &[u64]) -> Result<Self> {
        let mut signed = Vec::with_capacity(sizes.len());
        for &size in sizes {
            let value = i64::try_from(size).map_err(|_| {
                PackError::InvalidPackageSizes(format!("包裝規格過大: {}", size))
            })?;
            signed.push(value);
        }
        Self::new(signed)
    }

    /// 升冪排序的規格切片
    pub fn as_slice(&self) -> &[u64] {
        &self.sizes
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// 由建構保證非空，僅為配合 `len` 提供
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl TryFrom<Vec<i64>> for PackageSizeSet {
    type Error = PackError;

    fn try_from(sizes: Vec<i64>) -> Result<Self> {
        Self::new(sizes)
    }
}

impl From<PackageSizeSet> for Vec<u64> {
    fn from(set: PackageSizeSet) -> Self {
        set.sizes
    }
}
