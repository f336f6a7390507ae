//! 報表配置模型

use serde::{Deserialize, Serialize};

use crate::{Result, StockError};

/// 每月週數（固定近似值，非日曆精確）
pub const WEEKS_PER_MONTH: u32 = 4;

/// 每年週數
pub const WEEKS_PER_YEAR: u32 = 52;

/// 報表語系
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// 土耳其語（與既有報表格式相容）
    #[default]
    Turkish,
    /// 英語
    English,
}

impl Locale {
    /// 由語系代碼解析（"tr" / "en"）
    pub fn from_code(code: &str) -> Result<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "tr" | "turkish" => Ok(Locale::Turkish),
            "en" | "english" => Ok(Locale::English),
            other => Err(StockError::Config(format!("未知的語系代碼: {}", other))),
        }
    }

    /// 預設數量單位標籤
    pub fn default_unit_label(&self) -> &'static str {
        match self {
            Locale::Turkish => "birim",
            Locale::English => "units",
        }
    }
}

/// 報表輸出配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// 語系
    pub locale: Locale,

    /// 貨幣標籤
    pub currency: String,

    /// 數量單位標籤（未設置時依語系預設）
    pub unit_label: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            currency: "TL".to_string(),
            unit_label: None,
        }
    }
}

impl ReportConfig {
    /// 創建新的報表配置
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    /// 從 JSON 載入配置，缺少的欄位使用預設值
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| StockError::Config(e.to_string()))
    }

    /// 建構器模式：設置語系
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// 建構器模式：設置貨幣標籤
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// 建構器模式：設置數量單位標籤
    pub fn with_unit_label(mut self, unit_label: impl Into<String>) -> Self {
        self.unit_label = Some(unit_label.into());
        self
    }

    /// 實際使用的數量單位標籤
    pub fn unit_label(&self) -> &str {
        self.unit_label
            .as_deref()
            .unwrap_or_else(|| self.locale.default_unit_label())
    }
}
