//! # Stock Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod inputs;

// Re-export 主要類型
pub use config::{Locale, ReportConfig, WEEKS_PER_MONTH, WEEKS_PER_YEAR};
pub use inputs::{InventoryInputs, ResolvedInputs, FIELD_NAMES, MAX_MAGNITUDE};

/// 庫存最佳化錯誤類型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StockError {
    #[error("輸入驗證失敗 ({field}): {reason}")]
    Validation { field: String, reason: String },

    #[error("線性規劃無可行解: {0}")]
    Infeasible(String),

    #[error("不支援的線性規劃形狀: {0}")]
    UnsupportedProgram(String),

    #[error("配置錯誤: {0}")]
    Config(String),
}

impl StockError {
    /// 建立輸入驗證錯誤
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// 呼叫端顯示給使用者的通用訊息（不區分錯誤子類型）
    pub fn user_message(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Turkish => "Lütfen tüm alanları doğru doldurduğunuzdan emin olun!",
            Locale::English => "Please make sure all fields are filled in correctly!",
        }
    }
}

pub type Result<T> = std::result::Result<T, StockError>;
