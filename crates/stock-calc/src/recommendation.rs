//! 建議分類

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stock_core::ResolvedInputs;
use stock_optimizer::OptimalSolution;

/// 建議類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    /// 需求超過倉儲容量：增加容量和/或調整訂購量
    CapacityShortfall { shortfall: Decimal },

    /// 將庫存與訂購量調整為最優值
    AdjustTo { stock: Decimal, order: Decimal },
}

impl Recommendation {
    pub fn is_capacity_warning(&self) -> bool {
        matches!(self, Recommendation::CapacityShortfall { .. })
    }
}

/// 建議分類器
pub struct RecommendationClassifier;

impl RecommendationClassifier {
    /// 需求超過容量時一律給出容量警告，與最優解數值無關
    pub fn classify(inputs: &ResolvedInputs, optimal: &OptimalSolution) -> Recommendation {
        if inputs.demand_exceeds_capacity() {
            Recommendation::CapacityShortfall {
                shortfall: inputs.capacity_shortfall(),
            }
        } else {
            Recommendation::AdjustTo {
                stock: optimal.stock,
                order: optimal.order,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stock_core::InventoryInputs;

    fn optimal(stock: i64, order: i64, cost: i64) -> OptimalSolution {
        OptimalSolution {
            stock: Decimal::from(stock),
            order: Decimal::from(order),
            total_cost: Decimal::from(cost),
        }
    }

    #[test]
    fn test_adjust_recommendation() {
        let inputs = InventoryInputs::new(2.0, 5.0, 100.0, 150.0)
            .resolve()
            .unwrap();
        let recommendation = RecommendationClassifier::classify(&inputs, &optimal(100, 0, 200));

        assert_eq!(
            recommendation,
            Recommendation::AdjustTo {
                stock: Decimal::from(100),
                order: Decimal::ZERO,
            }
        );
        assert!(!recommendation.is_capacity_warning());
    }

    #[test]
    fn test_shortfall_recommendation() {
        let inputs = InventoryInputs::new(1.0, 3.0, 200.0, 150.0)
            .resolve()
            .unwrap();
        let recommendation = RecommendationClassifier::classify(&inputs, &optimal(150, 50, 300));

        assert_eq!(
            recommendation,
            Recommendation::CapacityShortfall {
                shortfall: Decimal::from(50),
            }
        );
        assert!(recommendation.is_capacity_warning());
    }

    #[test]
    fn test_demand_equal_to_capacity_is_not_shortfall() {
        let inputs = InventoryInputs::new(1.0, 3.0, 150.0, 150.0)
            .resolve()
            .unwrap();
        let recommendation = RecommendationClassifier::classify(&inputs, &optimal(150, 0, 150));

        assert!(!recommendation.is_capacity_warning());
    }
}
