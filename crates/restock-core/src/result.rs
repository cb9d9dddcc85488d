//! 補貨計算結果模型
//!
//! 結果一經產出即不再修改；每個階段的中間值都保留在記錄上，供稽核追查
//! （例如 boost 前的需求、封鎖前的建議量）。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 銷售趨勢標籤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandTrend {
    /// 近 90 天相對前期成長 >= 20%
    Rising,
    /// 變動在 ±20% 以內
    Stable,
    /// 近 90 天相對前期衰退 >= 20%
    Falling,
}

impl std::fmt::Display for DemandTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DemandTrend::Rising => write!(f, "RISING"),
            DemandTrend::Stable => write!(f, "STABLE"),
            DemandTrend::Falling => write!(f, "FALLING"),
        }
    }
}

/// 客戶數趨勢標籤（帶增減數）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerTrend {
    /// 客戶數增加
    Gained(i64),
    /// 客戶數持平
    Held,
    /// 客戶數減少（內含負數差額）
    Lost(i64),
}

impl std::fmt::Display for CustomerTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CustomerTrend::Gained(delta) => write!(f, "GAINED +{delta}"),
            CustomerTrend::Held => write!(f, "HELD"),
            CustomerTrend::Lost(delta) => write!(f, "LOST {delta}"),
        }
    }
}

/// 客戶集中度輪廓（近 12 個月不重複客戶數）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerProfile {
    /// 0 個客戶
    NoSales,
    /// 1~2 個客戶
    Dedicated,
    /// 3~9 個客戶
    Concentrated,
    /// 10 個以上客戶
    Dispersed,
}

impl std::fmt::Display for CustomerProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CustomerProfile::NoSales => write!(f, "No Sales"),
            CustomerProfile::Dedicated => write!(f, "Dedicated"),
            CustomerProfile::Concentrated => write!(f, "Concentrated"),
            CustomerProfile::Dispersed => write!(f, "Dispersed"),
        }
    }
}

/// 品項健康診斷（階梯規則，先命中先贏）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Diagnosis {
    /// 新品尚無動銷（導入期）
    NewItemNoMovement,
    /// 老品長期無動銷
    StaleInactive,
    /// 虛擬覆蓋超過門檻（內含觸發當下的門檻月數）
    Excess { threshold_months: f64 },
    /// 近期無銷售卻產生建議量
    NoRecentSales,
    /// 一致，無異常
    Coherent,
}

impl Diagnosis {
    /// 是否為警報型診斷（會觸發封鎖）
    pub fn is_alert(&self) -> bool {
        matches!(self, Diagnosis::Excess { .. } | Diagnosis::NoRecentSales)
    }
}

impl std::fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnosis::NewItemNoMovement => write!(f, "NEW ITEM - NO MOVEMENT (onboarding)"),
            Diagnosis::StaleInactive => write!(f, "STALE ITEM - INACTIVE"),
            Diagnosis::Excess { threshold_months } => {
                write!(f, "ALERT: Excess (>{threshold_months}m)")
            }
            Diagnosis::NoRecentSales => write!(f, "ALERT: No Recent Sales"),
            Diagnosis::Coherent => write!(f, "COHERENT"),
        }
    }
}

/// 最終狀態標籤（依優先序判定）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkuStatus {
    /// 品項已停用
    Inactive,
    /// 警報封鎖
    Blocked,
    /// 新品導入（試市採購）
    Onboarding,
    /// 缺貨
    Stockout,
    /// 建議補貨
    Buy,
    /// 庫存超量
    Excess,
    /// 正常
    Ok,
}

impl std::fmt::Display for SkuStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkuStatus::Inactive => write!(f, "INACTIVE"),
            SkuStatus::Blocked => write!(f, "BLOCKED"),
            SkuStatus::Onboarding => write!(f, "ONBOARDING"),
            SkuStatus::Stockout => write!(f, "STOCKOUT"),
            SkuStatus::Buy => write!(f, "BUY"),
            SkuStatus::Excess => write!(f, "EXCESS"),
            SkuStatus::Ok => write!(f, "OK"),
        }
    }
}

/// 單一 SKU 的補貨計算結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplenishmentResult {
    /// SKU 編號
    pub sku_id: String,

    /// 投射季節因子（[0.5, 2.5]，無指數時為 1.0）
    pub seasonal_factor: f64,

    /// 季節性調整後的日均需求
    pub adjusted_demand: f64,

    /// 反缺貨 boost 乘數（未觸發時為 1.0）
    pub boost_multiplier: f64,

    /// 進入目標計算的最終需求（adjusted_demand × boost）
    pub demand_calc: f64,

    /// 套用的 Z 因子
    pub z_factor: f64,

    /// 安全庫存
    pub safety_stock: f64,

    /// 再訂購點
    pub reorder_point: i64,

    /// 目標庫存
    pub target_stock: i64,

    /// 是否被殭屍規則壓制（毛需求直接歸 0）
    pub zombie_suppressed: bool,

    /// 毛需求（目標庫存 − 現有 − 在途，可為負）
    pub raw_requirement: i64,

    /// 淨需求（毛需求下限 0）
    pub net_requirement: i64,

    /// 整批數
    pub lot_count: i64,

    /// 封鎖前建議量（批數 × 經濟批量）
    pub precalc_suggestion: i64,

    /// 封鎖前金額小計
    pub precalc_subtotal: Decimal,

    /// 封鎖前優先分數
    pub precalc_score: i64,

    /// 虛擬覆蓋月數（除零/非有限時為哨兵值 99.0）
    pub virtual_coverage_months: f64,

    /// 診斷標籤
    pub diagnosis: Diagnosis,

    /// 是否被封鎖
    pub blocked: bool,

    /// 封鎖原因（未封鎖時為 None）
    pub block_reason: Option<String>,

    /// 稽核旗標：算得出建議量、卻被規則壓掉
    pub computed_but_blocked: bool,

    /// 封鎖/覆寫後的最終建議量
    pub final_suggestion: i64,

    /// 最終優先分數（導入覆寫 9999；封鎖歸零後為 0）
    pub final_score: i64,

    /// 最終金額小計（以最終建議量重算）
    pub subtotal: Decimal,

    /// 最終狀態標籤
    pub status: SkuStatus,

    /// 銷售趨勢
    pub demand_trend: DemandTrend,

    /// 客戶數趨勢
    pub customer_trend: CustomerTrend,

    /// 客戶集中度輪廓
    pub customer_profile: CustomerProfile,
}

/// 被拒絕的快照（違反邊界契約，不中斷批次）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedSku {
    /// 原始輸入中的索引
    pub index: usize,
    /// SKU 編號
    pub sku_id: String,
    /// 拒絕原因
    pub reason: String,
}

/// 批次計算結果封套
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplenishmentRun {
    /// 批次 ID
    pub run_id: Uuid,

    /// 合法快照的結果（保持輸入相對順序）
    pub results: Vec<ReplenishmentResult>,

    /// 被逐筆隔離的違約快照
    pub rejected: Vec<RejectedSku>,

    /// 計算耗時（毫秒）
    pub elapsed_ms: Option<u128>,
}

impl ReplenishmentRun {
    /// 創建空的批次結果
    pub fn empty() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            results: Vec::new(),
            rejected: Vec::new(),
            elapsed_ms: None,
        }
    }

    /// 最終建議總金額
    pub fn total_value(&self) -> Decimal {
        self.results.iter().map(|r| r.subtotal).sum()
    }

    /// 有最終建議量的品項數
    pub fn buy_count(&self) -> usize {
        self.results.iter().filter(|r| r.final_suggestion > 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_labels() {
        assert_eq!(DemandTrend::Rising.to_string(), "RISING");
        assert_eq!(CustomerTrend::Gained(3).to_string(), "GAINED +3");
        assert_eq!(CustomerTrend::Lost(-2).to_string(), "LOST -2");
        assert_eq!(CustomerTrend::Held.to_string(), "HELD");
        assert_eq!(CustomerProfile::Dispersed.to_string(), "Dispersed");
    }

    #[test]
    fn test_diagnosis_labels() {
        let excess = Diagnosis::Excess {
            threshold_months: 6.0,
        };
        assert_eq!(excess.to_string(), "ALERT: Excess (>6m)");
        assert!(excess.is_alert());
        assert!(Diagnosis::NoRecentSales.is_alert());
        assert!(!Diagnosis::NewItemNoMovement.is_alert());
        assert!(!Diagnosis::Coherent.is_alert());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(SkuStatus::Onboarding.to_string(), "ONBOARDING");
        assert_eq!(SkuStatus::Stockout.to_string(), "STOCKOUT");
    }

    #[test]
    fn test_run_envelope_serializes_for_exporter() {
        let mut run = ReplenishmentRun::empty();
        run.rejected.push(RejectedSku {
            index: 3,
            sku_id: "SKU-BAD".to_string(),
            reason: "經濟批量必須 >= 1".to_string(),
        });
        run.elapsed_ms = Some(12);

        let json = serde_json::to_string(&run).unwrap();
        let parsed: ReplenishmentRun = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.run_id, run.run_id);
        assert_eq!(parsed.rejected, run.rejected);
        assert_eq!(parsed.elapsed_ms, Some(12));
    }
}
