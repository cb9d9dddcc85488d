//! ABC 分類（營收柏拉圖）
//!
//! 依銷售金額由大到小排序，沿累積占比切出 A/B/C 三層。

use restock_core::AbcClass;
use serde::{Deserialize, Serialize};

/// ABC 切分點（占總額的百分比）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbcCuts {
    /// A 層的累積占比（%）
    pub a_pct: f64,
    /// B 層追加的占比（%）；B 的累積切點 = a_pct + b_pct
    pub b_pct: f64,
}

impl Default for AbcCuts {
    fn default() -> Self {
        Self {
            a_pct: 80.0,
            b_pct: 15.0,
        }
    }
}

/// 待分類的品項（SKU × 銷售總額）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbcItem {
    /// SKU 編號
    pub sku_id: String,
    /// 期間銷售總額
    pub total_value: f64,
}

impl AbcItem {
    /// 創建新的待分類品項
    pub fn new(sku_id: impl Into<String>, total_value: f64) -> Self {
        Self {
            sku_id: sku_id.into(),
            total_value,
        }
    }
}

/// ABC 分類器
pub struct AbcClassifier;

impl AbcClassifier {
    /// 對整批品項做柏拉圖分類
    ///
    /// 空輸入或總額為 0 時全部退化為 C（長尾），不視為錯誤。
    /// 回傳順序為金額由大到小。
    pub fn classify(items: &[AbcItem], cuts: AbcCuts) -> Vec<(AbcItem, AbcClass)> {
        let mut sorted: Vec<AbcItem> = items.to_vec();
        sorted.sort_by(|a, b| {
            b.total_value
                .partial_cmp(&a.total_value)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let grand_total: f64 = sorted.iter().map(|item| item.total_value).sum();
        if grand_total <= 0.0 || !grand_total.is_finite() {
            tracing::warn!(
                total = grand_total,
                "銷售總額無法定義柏拉圖基準，全部退化為 C"
            );
            return sorted.into_iter().map(|item| (item, AbcClass::C)).collect();
        }

        let cut_a = cuts.a_pct / 100.0;
        let cut_b = (cuts.a_pct + cuts.b_pct) / 100.0;

        let mut cumulative = 0.0;
        sorted
            .into_iter()
            .map(|item| {
                cumulative += item.total_value;
                let share = cumulative / grand_total;
                let class = if share <= cut_a {
                    AbcClass::A
                } else if share <= cut_b {
                    AbcClass::B
                } else {
                    AbcClass::C
                };
                (item, class)
            })
            .collect()
    }
}
