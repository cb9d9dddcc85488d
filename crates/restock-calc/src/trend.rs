//! 趨勢分類
//!
//! 把 90 天窗口的原始統計換成定性標籤：銷售趨勢、客戶數趨勢、
//! 客戶集中度輪廓。

use restock_core::{CustomerProfile, CustomerTrend, DemandTrend, SkuSnapshot};

/// 判定上升/下降的變動比例門檻（±20%）
const TREND_THRESHOLD: f64 = 0.20;

/// 趨勢分類器
pub struct TrendCalculator;

impl TrendCalculator {
    /// 一次產出快照的三個趨勢標籤
    pub fn classify(snapshot: &SkuSnapshot) -> (DemandTrend, CustomerTrend, CustomerProfile) {
        (
            Self::demand_trend(snapshot.qty_last_90d, snapshot.qty_prev_90d),
            Self::customer_trend(snapshot.customers_last_90d, snapshot.customers_prev_90d),
            Self::customer_profile(snapshot.customers_12m),
        )
    }

    /// 銷售趨勢：近 90 天相對前一個 90 天的變動比例
    pub fn demand_trend(qty_last_90d: f64, qty_prev_90d: f64) -> DemandTrend {
        let variation = if qty_prev_90d == 0.0 {
            0.0
        } else {
            (qty_last_90d - qty_prev_90d) / qty_prev_90d
        };

        if variation >= TREND_THRESHOLD {
            DemandTrend::Rising
        } else if variation <= -TREND_THRESHOLD {
            DemandTrend::Falling
        } else {
            DemandTrend::Stable
        }
    }

    /// 客戶數趨勢：兩個 90 天窗口的不重複客戶數差額
    pub fn customer_trend(customers_last_90d: i64, customers_prev_90d: i64) -> CustomerTrend {
        let delta = customers_last_90d - customers_prev_90d;
        match delta.cmp(&0) {
            std::cmp::Ordering::Greater => CustomerTrend::Gained(delta),
            std::cmp::Ordering::Less => CustomerTrend::Lost(delta),
            std::cmp::Ordering::Equal => CustomerTrend::Held,
        }
    }

    /// 客戶集中度輪廓：近 12 個月不重複客戶數分桶
    pub fn customer_profile(customers_12m: i64) -> CustomerProfile {
        if customers_12m <= 0 {
            CustomerProfile::NoSales
        } else if customers_12m <= 2 {
            CustomerProfile::Dedicated
        } else if customers_12m <= 9 {
            CustomerProfile::Concentrated
        } else {
            CustomerProfile::Dispersed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demand_trend_rising() {
        assert_eq!(TrendCalculator::demand_trend(130.0, 100.0), DemandTrend::Rising);
        // 門檻含等號：剛好 +20% 就算上升
        assert_eq!(TrendCalculator::demand_trend(120.0, 100.0), DemandTrend::Rising);
    }

    #[test]
    fn test_demand_trend_falling() {
        assert_eq!(TrendCalculator::demand_trend(70.0, 100.0), DemandTrend::Falling);
        assert_eq!(TrendCalculator::demand_trend(80.0, 100.0), DemandTrend::Falling);
    }

    #[test]
    fn test_demand_trend_stable() {
        assert_eq!(TrendCalculator::demand_trend(110.0, 100.0), DemandTrend::Stable);
        assert_eq!(TrendCalculator::demand_trend(95.0, 100.0), DemandTrend::Stable);
    }

    #[test]
    fn test_demand_trend_zero_denominator() {
        // 前期無銷量時變動視為 0，避免除零
        assert_eq!(TrendCalculator::demand_trend(50.0, 0.0), DemandTrend::Stable);
    }

    #[test]
    fn test_customer_trend_labels() {
        assert_eq!(TrendCalculator::customer_trend(8, 5), CustomerTrend::Gained(3));
        assert_eq!(TrendCalculator::customer_trend(3, 5), CustomerTrend::Lost(-2));
        assert_eq!(TrendCalculator::customer_trend(5, 5), CustomerTrend::Held);
    }

    #[test]
    fn test_customer_profile_buckets() {
        assert_eq!(TrendCalculator::customer_profile(0), CustomerProfile::NoSales);
        assert_eq!(TrendCalculator::customer_profile(1), CustomerProfile::Dedicated);
        assert_eq!(TrendCalculator::customer_profile(2), CustomerProfile::Dedicated);
        assert_eq!(TrendCalculator::customer_profile(3), CustomerProfile::Concentrated);
        assert_eq!(TrendCalculator::customer_profile(9), CustomerProfile::Concentrated);
        assert_eq!(TrendCalculator::customer_profile(10), CustomerProfile::Dispersed);
    }
}
