//! SKU 快照模型（引擎的唯一輸入記錄）

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{RestockError, Result};

/// 前置期的合理上限（天）。超過視為上游彙總錯誤而非真實供應鏈
pub const MAX_LEAD_TIME_DAYS: f64 = 3650.0;

/// 日需求統計（均值與標準差）的合理上限（件/日）
///
/// 量級失控的數值會把目標庫存推到整數上限，後續算術失去意義
pub const MAX_DAILY_DEMAND: f64 = 1e9;

/// ABC 分類（營收柏拉圖層級）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbcClass {
    /// 主力品項（累積營收前段）
    A,
    /// 中間品項
    B,
    /// 長尾品項
    C,
}

/// XYZ 分類（需求變異層級）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum XyzClass {
    /// 穩定需求
    X,
    /// 波動需求
    Y,
    /// 不規則需求
    Z,
}

/// SKU 快照
///
/// 每次批次計算，每個 SKU 讀取一筆。上游資料引擎負責 join 庫存/銷售/
/// 分類表並以文件化的預設值補齊空值（需求 0、分類 C/Z、批量 1、active=true）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuSnapshot {
    /// SKU 編號
    pub sku_id: String,

    /// 現有庫存
    pub on_hand: i64,

    /// 在途採購量（未到貨的 OC）
    pub on_order: i64,

    /// 單位成本
    pub unit_cost: Decimal,

    /// 建檔日期（年齡以 RunConfig::reference_date 為基準推算）
    pub registered_on: NaiveDate,

    /// 是否為有效品項
    pub active: bool,

    /// 經濟批量（前置條件：> 0）
    pub lot_size: i64,

    /// 前置期（天）。None 表示未知，由需要的階段以配置預設值替代
    pub lead_time_days: Option<f64>,

    /// 日均需求估計
    pub daily_demand: f64,

    /// 日需求標準差
    pub daily_demand_std_dev: f64,

    /// 距離最後一次銷售的天數。None 表示從未售出
    pub days_since_last_sale: Option<u32>,

    /// ABC 分類
    pub abc: AbcClass,

    /// XYZ 分類
    pub xyz: XyzClass,

    /// 近 90 天銷量
    pub qty_last_90d: f64,

    /// 前一個 90 天銷量
    pub qty_prev_90d: f64,

    /// 近 90 天不重複客戶數
    pub customers_last_90d: i64,

    /// 前一個 90 天不重複客戶數
    pub customers_prev_90d: i64,

    /// 近 12 個月不重複客戶數
    pub customers_12m: i64,
}

impl SkuSnapshot {
    /// 創建新的快照（其餘欄位取上游文件化的預設值）
    pub fn new(sku_id: impl Into<String>, registered_on: NaiveDate) -> Self {
        Self {
            sku_id: sku_id.into(),
            on_hand: 0,
            on_order: 0,
            unit_cost: Decimal::ZERO,
            registered_on,
            active: true,
            lot_size: 1,
            lead_time_days: None,
            daily_demand: 0.0,
            daily_demand_std_dev: 0.0,
            days_since_last_sale: None,
            abc: AbcClass::C,
            xyz: XyzClass::Z,
            qty_last_90d: 0.0,
            qty_prev_90d: 0.0,
            customers_last_90d: 0,
            customers_prev_90d: 0,
            customers_12m: 0,
        }
    }

    /// 建構器模式：設置庫存狀態
    pub fn with_stock(mut self, on_hand: i64, on_order: i64) -> Self {
        self.on_hand = on_hand;
        self.on_order = on_order;
        self
    }

    /// 建構器模式：設置單位成本
    pub fn with_unit_cost(mut self, unit_cost: Decimal) -> Self {
        self.unit_cost = unit_cost;
        self
    }

    /// 建構器模式：設置經濟批量
    pub fn with_lot_size(mut self, lot_size: i64) -> Self {
        self.lot_size = lot_size;
        self
    }

    /// 建構器模式：設置前置期
    pub fn with_lead_time_days(mut self, days: f64) -> Self {
        self.lead_time_days = Some(days);
        self
    }

    /// 建構器模式：設置需求統計
    pub fn with_demand(mut self, daily_demand: f64, std_dev: f64) -> Self {
        self.daily_demand = daily_demand;
        self.daily_demand_std_dev = std_dev;
        self
    }

    /// 建構器模式：設置距離最後銷售的天數
    pub fn with_days_since_last_sale(mut self, days: u32) -> Self {
        self.days_since_last_sale = Some(days);
        self
    }

    /// 建構器模式：設置 ABC / XYZ 分類
    pub fn with_classes(mut self, abc: AbcClass, xyz: XyzClass) -> Self {
        self.abc = abc;
        self.xyz = xyz;
        self
    }

    /// 建構器模式：設置趨勢統計（兩個 90 天窗口）
    pub fn with_trend_stats(
        mut self,
        qty_last_90d: f64,
        qty_prev_90d: f64,
        customers_last_90d: i64,
        customers_prev_90d: i64,
    ) -> Self {
        self.qty_last_90d = qty_last_90d;
        self.qty_prev_90d = qty_prev_90d;
        self.customers_last_90d = customers_last_90d;
        self.customers_prev_90d = customers_prev_90d;
        self
    }

    /// 建構器模式：設置近 12 個月客戶數
    pub fn with_customers_12m(mut self, customers: i64) -> Self {
        self.customers_12m = customers;
        self
    }

    /// 建構器模式：設置是否有效
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// 邊界契約檢查（引擎公開入口呼叫）
    ///
    /// 批量 ≤ 0 會造成除零，前置期為負會讓開根號產生 NaN，
    /// 需求或前置期量級失控會讓整數目標庫存飽和、算術回繞。
    /// 這些是上游清洗的前置條件，違反時立即拒絕該筆記錄。
    pub fn validate(&self) -> Result<()> {
        if self.lot_size < 1 {
            return Err(self.invalid(format!("經濟批量必須 >= 1（目前為 {}）", self.lot_size)));
        }
        if let Some(lead) = self.lead_time_days {
            if !(lead.is_finite() && (0.0..=MAX_LEAD_TIME_DAYS).contains(&lead)) {
                return Err(self.invalid(format!(
                    "前置期必須在 0~{MAX_LEAD_TIME_DAYS} 天內（目前為 {lead}）"
                )));
            }
        }
        if !(self.daily_demand.is_finite()
            && (0.0..=MAX_DAILY_DEMAND).contains(&self.daily_demand))
        {
            return Err(self.invalid(format!(
                "日均需求必須在 0~{MAX_DAILY_DEMAND} 內（目前為 {}）",
                self.daily_demand
            )));
        }
        if !(self.daily_demand_std_dev.is_finite()
            && (0.0..=MAX_DAILY_DEMAND).contains(&self.daily_demand_std_dev))
        {
            return Err(self.invalid(format!(
                "需求標準差必須在 0~{MAX_DAILY_DEMAND} 內（目前為 {}）",
                self.daily_demand_std_dev
            )));
        }
        Ok(())
    }

    /// 上游替代規則（資料血統：sanitizer）
    ///
    /// 供直接餵入原始彙總的呼叫端使用：負前置期歸 0、非有限的需求統計歸 0、
    /// 量級失控的數值截到上限。引擎本身不呼叫此方法，仍以 `validate`
    /// 拒絕違約的快照。
    pub fn sanitized(mut self) -> Self {
        if let Some(lead) = self.lead_time_days {
            if !lead.is_finite() {
                tracing::warn!(sku_id = %self.sku_id, "前置期非有限數值，強制歸 0");
                self.lead_time_days = Some(0.0);
            } else if !(0.0..=MAX_LEAD_TIME_DAYS).contains(&lead) {
                tracing::warn!(sku_id = %self.sku_id, lead_time = lead, "前置期越界，截到合理範圍");
                self.lead_time_days = Some(lead.clamp(0.0, MAX_LEAD_TIME_DAYS));
            }
        }
        if !self.daily_demand.is_finite() {
            tracing::warn!(sku_id = %self.sku_id, "日均需求非有限數值，強制歸 0");
            self.daily_demand = 0.0;
        } else if self.daily_demand > MAX_DAILY_DEMAND {
            tracing::warn!(sku_id = %self.sku_id, demand = self.daily_demand, "日均需求越界，截到上限");
            self.daily_demand = MAX_DAILY_DEMAND;
        }
        if !self.daily_demand_std_dev.is_finite() {
            tracing::warn!(sku_id = %self.sku_id, "需求標準差非有限數值，強制歸 0");
            self.daily_demand_std_dev = 0.0;
        } else if self.daily_demand_std_dev > MAX_DAILY_DEMAND {
            tracing::warn!(sku_id = %self.sku_id, "需求標準差越界，截到上限");
            self.daily_demand_std_dev = MAX_DAILY_DEMAND;
        }
        self
    }

    /// 以基準日計算建檔年齡（天）
    pub fn age_days(&self, reference_date: NaiveDate) -> i64 {
        (reference_date - self.registered_on).num_days()
    }

    fn invalid(&self, reason: String) -> RestockError {
        RestockError::InvalidSnapshot {
            sku_id: self.sku_id.clone(),
            reason,
        }
    }
}
