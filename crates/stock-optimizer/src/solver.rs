//! 求解能力抽象

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::program::LinearProgram;

/// 線性規劃最優解
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LpSolution {
    /// 各變數最優值（順序同 [`LinearProgram::variables`]）
    pub values: Vec<Decimal>,

    /// 最優目標函數值
    pub objective_value: Decimal,
}

/// 線性規劃求解器
///
/// 無可行解時回傳 [`stock_core::StockError::Infeasible`]；
/// 無法處理的模型形狀回傳 [`stock_core::StockError::UnsupportedProgram`]。
/// 實作不得保留跨請求狀態。
pub trait LpSolver: std::fmt::Debug + Send + Sync {
    /// 求解最小化問題
    fn solve(&self, program: &LinearProgram) -> stock_core::Result<LpSolution>;
}
