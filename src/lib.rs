//! # stockopt
//!
//! 庫存/訂購量最佳化計算器
//!
//! ```
//! use stockopt::{solve_and_report, InventoryInputs};
//!
//! let inputs = InventoryInputs::new(2.0, 5.0, 100.0, 150.0)
//!     .with_user_choice(100.0, 0.0)
//!     .with_profit_per_unit(10.0);
//! let report = solve_and_report(&inputs).unwrap();
//! assert!(report.starts_with("Optimal Çözüm:"));
//! ```

pub mod logging;

pub use stock_calc::{
    solve_and_report, ComparisonReport, MetricsCalculator, ProfitProjection, Recommendation,
    ReportLabels, ReportRenderer, SolutionSummary, StockOptimizer,
};
pub use stock_core::{
    InventoryInputs, Locale, ReportConfig, ResolvedInputs, Result, StockError, FIELD_NAMES,
    MAX_MAGNITUDE,
};
pub use stock_optimizer::{
    optimize, LinearConstraint, LinearProgram, LpSolution, LpSolver, ModelBuilder,
    OptimalSolution, Relation, VertexEnumerationSolver,
};
