//! XYZ 分類（需求變異）
//!
//! 以變異係數（σ/μ）分層：穩定（X）、波動（Y）、不規則（Z）。
//! 均值為 0 的品項沒有可信的變異基準，直接視為 Z。

use restock_core::XyzClass;
use serde::{Deserialize, Serialize};

/// XYZ 變異係數切分點
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XyzCuts {
    /// cv ≤ x_max → X
    pub x_max: f64,
    /// cv ≤ y_max → Y，超過則 Z
    pub y_max: f64,
}

impl Default for XyzCuts {
    fn default() -> Self {
        Self {
            x_max: 0.5,
            y_max: 1.0,
        }
    }
}

/// XYZ 分類器
pub struct XyzClassifier;

impl XyzClassifier {
    /// 由日需求均值與標準差判定變異層級
    pub fn classify(mean_daily: f64, std_dev_daily: f64, cuts: XyzCuts) -> XyzClass {
        if mean_daily <= 0.0 || !mean_daily.is_finite() {
            return XyzClass::Z;
        }

        let cv = std_dev_daily / mean_daily;
        if cv <= cuts.x_max {
            XyzClass::X
        } else if cv <= cuts.y_max {
            XyzClass::Y
        } else {
            XyzClass::Z
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(10.0, 3.0, XyzClass::X)] // cv 0.3
    #[case(10.0, 5.0, XyzClass::X)] // cv 0.5 剛好在界上
    #[case(10.0, 8.0, XyzClass::Y)] // cv 0.8
    #[case(10.0, 10.0, XyzClass::Y)] // cv 1.0 剛好在界上
    #[case(10.0, 15.0, XyzClass::Z)] // cv 1.5
    fn test_cv_buckets(#[case] mean: f64, #[case] std_dev: f64, #[case] expected: XyzClass) {
        assert_eq!(XyzClassifier::classify(mean, std_dev, XyzCuts::default()), expected);
    }

    #[test]
    fn test_zero_mean_is_z() {
        assert_eq!(
            XyzClassifier::classify(0.0, 5.0, XyzCuts::default()),
            XyzClass::Z
        );
    }

    #[test]
    fn test_custom_cuts() {
        let cuts = XyzCuts {
            x_max: 0.2,
            y_max: 0.6,
        };
        assert_eq!(XyzClassifier::classify(10.0, 3.0, cuts), XyzClass::Y);
        assert_eq!(XyzClassifier::classify(10.0, 7.0, cuts), XyzClass::Z);
    }
}
