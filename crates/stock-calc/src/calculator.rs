//! 庫存最佳化主計算器

use stock_core::{InventoryInputs, ReportConfig};
use stock_optimizer::{LpSolver, VertexEnumerationSolver};

use crate::report::ReportRenderer;
use crate::{ComparisonReport, MetricsCalculator, RecommendationClassifier, SolutionSummary};

/// 庫存最佳化計算器
///
/// 不保留任何請求間狀態，每次呼叫都重新建模求解。
#[derive(Debug, Clone)]
pub struct StockOptimizer<S: LpSolver = VertexEnumerationSolver> {
    /// 線性規劃求解器
    solver: S,

    /// 報表配置
    config: ReportConfig,
}

impl StockOptimizer<VertexEnumerationSolver> {
    /// 使用頂點枚舉求解器創建計算器
    pub fn new(config: ReportConfig) -> Self {
        Self::with_solver(VertexEnumerationSolver::new(), config)
    }
}

impl Default for StockOptimizer<VertexEnumerationSolver> {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

impl<S: LpSolver> StockOptimizer<S> {
    /// 使用指定求解器創建計算器
    pub fn with_solver(solver: S, config: ReportConfig) -> Self {
        Self { solver, config }
    }

    /// 計算比較報表
    pub fn analyze(&self, inputs: &InventoryInputs) -> stock_core::Result<ComparisonReport> {
        tracing::info!(
            "開始庫存最佳化：需求 {}，容量 {}",
            inputs.demand,
            inputs.capacity
        );

        let resolved = inputs.resolve()?;

        // Step 1: 求解線性規劃
        tracing::debug!("Step 1: 求解線性規劃");
        let optimal = stock_optimizer::optimize(&self.solver, &resolved)?;
        tracing::debug!(
            "最優解: 庫存 {}, 訂購 {}, 成本 {}",
            optimal.stock,
            optimal.order,
            optimal.total_cost
        );

        // Step 2: 成本與利潤
        tracing::debug!("Step 2: 成本與利潤");
        let user_total_cost =
            MetricsCalculator::total_cost(&resolved, resolved.user_stock, resolved.user_order);
        let optimal_summary = SolutionSummary::evaluate(
            optimal.stock,
            optimal.order,
            optimal.total_cost,
            resolved.profit_per_unit,
        );
        let user_summary = SolutionSummary::evaluate(
            resolved.user_stock,
            resolved.user_order,
            user_total_cost,
            resolved.profit_per_unit,
        );

        // Step 3: 利潤差距
        tracing::debug!("Step 3: 利潤差距");
        let profit_gap_percentage = MetricsCalculator::profit_gap_percentage(
            optimal_summary.profit.weekly,
            user_summary.profit.weekly,
        );

        // Step 4: 建議分類
        tracing::debug!("Step 4: 建議分類");
        let recommendation = RecommendationClassifier::classify(&resolved, &optimal);
        if recommendation.is_capacity_warning() {
            tracing::warn!(
                "需求 {} 超過容量 {}",
                resolved.demand,
                resolved.capacity
            );
        }

        tracing::info!(
            "庫存最佳化完成，利潤差距 {}%",
            profit_gap_percentage.round_dp(2)
        );

        Ok(ComparisonReport {
            optimal: optimal_summary,
            user: user_summary,
            profit_gap_percentage,
            recommendation,
        })
    }

    /// 計算並輸出報表文字
    pub fn solve_and_report(&self, inputs: &InventoryInputs) -> stock_core::Result<String> {
        let report = self.analyze(inputs)?;
        Ok(self.renderer().render(&report))
    }

    /// 依目前配置建立報表輸出器
    pub fn renderer(&self) -> ReportRenderer {
        ReportRenderer::new(&self.config)
    }

    /// 獲取報表配置引用
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// 獲取求解器引用
    pub fn solver(&self) -> &S {
        &self.solver
    }
}

/// 以預設配置計算並輸出報表
pub fn solve_and_report(inputs: &InventoryInputs) -> stock_core::Result<String> {
    StockOptimizer::new(ReportConfig::default()).solve_and_report(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Recommendation;
    use rust_decimal::Decimal;
    use stock_core::{Locale, StockError};
    use stock_optimizer::{LinearProgram, LpSolution};

    /// 固定回傳指定解的求解器
    #[derive(Debug)]
    struct FixedSolver(stock_core::Result<LpSolution>);

    impl LpSolver for FixedSolver {
        fn solve(&self, _program: &LinearProgram) -> stock_core::Result<LpSolution> {
            self.0.clone()
        }
    }

    fn scenario_a() -> InventoryInputs {
        InventoryInputs::new(2.0, 5.0, 100.0, 150.0)
            .with_user_choice(100.0, 0.0)
            .with_profit_per_unit(10.0)
    }

    #[test]
    fn test_analyze_scenario_a() {
        let report = StockOptimizer::new(ReportConfig::default())
            .analyze(&scenario_a())
            .unwrap();

        assert_eq!(report.optimal.stock, Decimal::from(100));
        assert_eq!(report.optimal.order, Decimal::ZERO);
        assert_eq!(report.optimal.total_cost, Decimal::from(200));
        assert_eq!(report.user.total_cost, Decimal::from(200));
        assert_eq!(report.optimal.profit.weekly, Decimal::from(800));
        assert_eq!(report.profit_gap_percentage, Decimal::ZERO);
    }

    #[test]
    fn test_analyze_user_worse_than_optimal() {
        let inputs = scenario_a().with_user_choice(50.0, 50.0);
        let report = StockOptimizer::new(ReportConfig::default())
            .analyze(&inputs)
            .unwrap();

        // 使用者成本 50×2 + 50×5 = 350，週利潤 1000 - 350 = 650
        assert_eq!(report.user.total_cost, Decimal::from(350));
        assert_eq!(report.user.profit.weekly, Decimal::from(650));
        // |800 - 650| / 800 × 100 = 18.75
        assert_eq!(report.profit_gap_percentage, Decimal::new(1875, 2));
    }

    #[test]
    fn test_custom_solver_is_used() {
        let solver = FixedSolver(Ok(LpSolution {
            values: vec![Decimal::from(40), Decimal::from(60)],
            objective_value: Decimal::from(380),
        }));
        let optimizer = StockOptimizer::with_solver(solver, ReportConfig::default());
        let report = optimizer.analyze(&scenario_a()).unwrap();

        assert_eq!(report.optimal.stock, Decimal::from(40));
        assert_eq!(report.optimal.order, Decimal::from(60));
        assert_eq!(report.optimal.total_cost, Decimal::from(380));
        assert_eq!(
            report.recommendation,
            Recommendation::AdjustTo {
                stock: Decimal::from(40),
                order: Decimal::from(60),
            }
        );
    }

    #[test]
    fn test_infeasible_is_propagated() {
        let solver = FixedSolver(Err(StockError::Infeasible("測試".to_string())));
        let optimizer = StockOptimizer::with_solver(solver, ReportConfig::default());

        let result = optimizer.solve_and_report(&scenario_a());
        assert!(matches!(result, Err(StockError::Infeasible(_))));
    }

    #[test]
    fn test_validation_failure_skips_solver() {
        let inputs = scenario_a().with_profit_per_unit(f64::INFINITY);
        let result = solve_and_report(&inputs);

        assert!(matches!(result, Err(StockError::Validation { .. })));
    }

    #[test]
    fn test_solve_and_report_english() {
        let optimizer = StockOptimizer::new(ReportConfig::new(Locale::English));
        let text = optimizer.solve_and_report(&scenario_a()).unwrap();

        assert!(text.starts_with("Optimal Solution:\n"));
        assert!(text.ends_with(
            "set your stock quantity to 100.00 and your order quantity to 0.00."
        ));
        assert_eq!(optimizer.config().locale, Locale::English);
    }

    #[test]
    fn test_tiny_optimal_profit_with_huge_user_cost() {
        // 最優週利潤 1e-10，使用者成本 1e24：差距百分比飽和而非溢位
        let inputs = InventoryInputs::new(1.0, 1e12, 1.0, 1.0)
            .with_user_choice(0.0, 1e12)
            .with_profit_per_unit(1.0000000001);
        let report = StockOptimizer::new(ReportConfig::default())
            .analyze(&inputs)
            .unwrap();

        assert!(report.optimal.profit.weekly > Decimal::ZERO);
        assert!(report.user.profit.weekly < Decimal::ZERO);
        assert_eq!(report.profit_gap_percentage, Decimal::MAX);

        let text = StockOptimizer::new(ReportConfig::default())
            .solve_and_report(&inputs)
            .unwrap();
        assert!(text.contains("Optimal kazanca uzaklık: "));
    }

    #[test]
    fn test_solver_accessor() {
        let solver = VertexEnumerationSolver::new().with_tolerance(Decimal::new(1, 6));
        let optimizer = StockOptimizer::with_solver(solver, ReportConfig::default());

        assert_eq!(optimizer.solver().tolerance(), Decimal::new(1, 6));
        assert_eq!(
            optimizer.analyze(&scenario_a()).unwrap().optimal.total_cost,
            Decimal::from(200)
        );
    }

    #[test]
    fn test_idempotent() {
        let optimizer = StockOptimizer::new(ReportConfig::default());
        let first = optimizer.solve_and_report(&scenario_a()).unwrap();
        let second = optimizer.solve_and_report(&scenario_a()).unwrap();

        assert_eq!(first, second);
    }
}
