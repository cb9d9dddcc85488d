//! 集成測試

use chrono::NaiveDate;
use restock::*;
use rust_decimal::Decimal;

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn old_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()
}

#[test]
fn test_small_catalog_end_to_end() {
    // 測試一個小型目錄：缺貨主力品、健康品、殭屍品、新品、停用品
    let config = RunConfig::new(reference_date()).with_coverage_months(1.0);
    let calculator = ReplenishmentCalculator::new(config);

    let snapshots = vec![
        // 缺貨的 A 類主力品項：應產生建議並拿到最高一級的分數
        SkuSnapshot::new("SKU-RUPTURE", old_date())
            .with_stock(0, 0)
            .with_demand(10.0, 2.0)
            .with_lead_time_days(7.0)
            .with_lot_size(10)
            .with_unit_cost(Decimal::from(20))
            .with_classes(AbcClass::A, XyzClass::X)
            .with_days_since_last_sale(5)
            .with_trend_stats(900.0, 700.0, 12, 10)
            .with_customers_12m(25),
        // 庫存健康的 C 類品項
        SkuSnapshot::new("SKU-HEALTHY", old_date())
            .with_stock(90, 0)
            .with_demand(2.0, 0.5)
            .with_lead_time_days(5.0)
            .with_lot_size(6)
            .with_unit_cost(Decimal::from(8))
            .with_classes(AbcClass::C, XyzClass::Y)
            .with_days_since_last_sale(1)
            .with_customers_12m(6),
        // 殭屍品項：200 天沒動銷，即使歷史均量高也不得補貨
        SkuSnapshot::new("SKU-ZOMBIE", old_date())
            .with_stock(0, 0)
            .with_demand(8.0, 1.0)
            .with_lead_time_days(7.0)
            .with_lot_size(10)
            .with_classes(AbcClass::B, XyzClass::Z)
            .with_days_since_last_sale(200),
        // 建檔 10 天的新品：試市採購一個批量
        SkuSnapshot::new("SKU-ONBOARD", NaiveDate::from_ymd_opt(2024, 6, 5).unwrap())
            .with_lot_size(24)
            .with_unit_cost(Decimal::from(3)),
        // 停用品項：永遠不補
        SkuSnapshot::new("SKU-INACTIVE", old_date())
            .with_active(false)
            .with_stock(0, 0)
            .with_demand(5.0, 1.0)
            .with_lead_time_days(7.0)
            .with_days_since_last_sale(10),
    ];

    let run = calculator.compute_all(&snapshots);
    assert_eq!(run.results.len(), 5);
    assert!(run.rejected.is_empty());

    let by_id = |id: &str| run.results.iter().find(|r| r.sku_id == id).unwrap();

    let rupture = by_id("SKU-RUPTURE");
    assert_eq!(rupture.status, SkuStatus::Buy);
    assert!(rupture.final_suggestion > 0);
    assert!(rupture.final_score > 5000);
    assert_eq!(rupture.demand_trend, DemandTrend::Rising);
    // 斷貨 5 天內的主力品項吃最強 boost
    assert_eq!(rupture.boost_multiplier, 2.0);

    let healthy = by_id("SKU-HEALTHY");
    assert!(!healthy.blocked);
    assert_eq!(healthy.diagnosis, Diagnosis::Coherent);

    let zombie = by_id("SKU-ZOMBIE");
    assert!(zombie.zombie_suppressed);
    assert_eq!(zombie.raw_requirement, 0);
    assert_eq!(zombie.final_suggestion, 0);

    let onboard = by_id("SKU-ONBOARD");
    assert_eq!(onboard.status, SkuStatus::Onboarding);
    assert_eq!(onboard.final_suggestion, 24);
    assert_eq!(onboard.final_score, 9999);
    assert_eq!(onboard.subtotal, Decimal::from(72));

    let inactive = by_id("SKU-INACTIVE");
    assert_eq!(inactive.status, SkuStatus::Inactive);
    assert!(inactive.blocked);
    assert_eq!(inactive.final_suggestion, 0);

    // 批次層級的彙總
    assert_eq!(run.buy_count(), 2); // RUPTURE + ONBOARD
    assert!(run.total_value() > Decimal::ZERO);
}

#[test]
fn test_seasonal_run_changes_targets() {
    // 同一快照，加上旺季指數後目標庫存應上調
    let snapshot = SkuSnapshot::new("SKU-SEASON", old_date())
        .with_stock(10, 0)
        .with_demand(5.0, 1.0)
        .with_lead_time_days(0.0)
        .with_lot_size(1)
        .with_days_since_last_sale(1);

    let flat = ReplenishmentCalculator::new(RunConfig::new(reference_date()));
    let flat_result = flat.compute(&snapshot).unwrap();
    assert_eq!(flat_result.seasonal_factor, 1.0);

    // 6~8 月（計算當下的窗口）吃 1.6 的高指數
    let mut indices = vec![1.0; 12];
    indices[5] = 1.6;
    indices[6] = 1.6;
    indices[7] = 1.6;
    let seasonal = ReplenishmentCalculator::new(
        RunConfig::new(reference_date()).with_seasonal_indices(indices),
    );
    let seasonal_result = seasonal.compute(&snapshot).unwrap();

    assert!(seasonal_result.seasonal_factor > 1.0);
    assert!(seasonal_result.target_stock > flat_result.target_stock);
}

#[test]
fn test_classifiers_feed_engine() {
    // 分類器 → 引擎的端到端串接
    let items = vec![
        AbcItem::new("SKU-TOP", 800.0),
        AbcItem::new("SKU-MID", 150.0),
        AbcItem::new("SKU-TAIL", 50.0),
    ];
    let classified = AbcClassifier::classify(&items, AbcCuts::default());
    let abc_top = classified
        .iter()
        .find(|(item, _)| item.sku_id == "SKU-TOP")
        .map(|(_, class)| *class)
        .unwrap();
    assert_eq!(abc_top, AbcClass::A);

    let xyz = XyzClassifier::classify(10.0, 3.0, XyzCuts::default());
    assert_eq!(xyz, XyzClass::X);

    let snapshot = SkuSnapshot::new("SKU-TOP", old_date())
        .with_stock(0, 0)
        .with_demand(10.0, 3.0)
        .with_lead_time_days(7.0)
        .with_days_since_last_sale(40)
        .with_classes(abc_top, xyz);

    let calculator = ReplenishmentCalculator::new(RunConfig::new(reference_date()));
    let result = calculator.compute(&snapshot).unwrap();

    // A 類 + 35~90 天斷貨 → 中檔 boost
    assert_eq!(result.boost_multiplier, 1.20);
    assert_eq!(result.z_factor, 1.65);
}

#[test]
fn test_idempotence_across_batch_and_single() {
    let snapshot = SkuSnapshot::new("SKU-IDEM", old_date())
        .with_stock(7, 2)
        .with_demand(3.3, 0.9)
        .with_lead_time_days(12.0)
        .with_lot_size(5)
        .with_unit_cost(Decimal::new(1999, 2))
        .with_days_since_last_sale(4)
        .with_classes(AbcClass::B, XyzClass::Y);

    let calculator = ReplenishmentCalculator::new(RunConfig::new(reference_date()));

    let single = calculator.compute(&snapshot).unwrap();
    let batch = calculator.compute_all(std::slice::from_ref(&snapshot));

    assert_eq!(batch.results.len(), 1);
    assert_eq!(batch.results[0], single);
}
