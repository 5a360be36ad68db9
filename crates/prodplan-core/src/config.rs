//! 生產計劃配置模型

use serde::{Deserialize, Serialize};

/// 同價值產品的排序規則
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    /// 保持輸入順序（穩定排序）
    #[default]
    InputOrder,

    /// 依產品代碼升冪
    ByCode,
}

/// 生產計劃參數配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// 同價值產品的排序規則
    pub tie_break: TieBreak,

    /// 單次計算的產品數上限（None 表示不限制）
    pub max_products: Option<usize>,

    /// 是否在分配前驗證輸入
    /// - true: 負數價值/用量/庫存、重複產品ID 直接回傳錯誤（預設）
    /// - false: 交由分配器寬鬆處理（負庫存視為 0）
    pub validate_input: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::InputOrder,
            max_products: None,
            validate_input: true,
        }
    }
}

impl PlannerConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 從 JSON 載入配置，缺少的欄位使用預設值
    ///
    /// # 範例
    /// ```
    /// # use prodplan_core::{PlannerConfig, TieBreak};
    /// let config = PlannerConfig::from_json_str(r#"{"tie_break": "ByCode"}"#).unwrap();
    /// assert_eq!(config.tie_break, TieBreak::ByCode);
    /// assert!(config.validate_input);
    /// ```
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 建構器模式：設置排序規則
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// 建構器模式：設置產品數上限
    pub fn with_max_products(mut self, max_products: usize) -> Self {
        self.max_products = Some(max_products);
        self
    }

    /// 建構器模式：設置是否驗證輸入
    pub fn with_validate_input(mut self, validate: bool) -> Self {
        self.validate_input = validate;
        self
    }

    /// 檢查產品數是否超過上限
    pub fn exceeds_limit(&self, product_count: usize) -> bool {
        self.max_products
            .map(|max| product_count > max)
            .unwrap_or(false)
    }
}
