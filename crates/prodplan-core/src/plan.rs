//! 生產計劃模型

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::{MaterialId, Product, ProductId};

/// 生產計劃明細（分配結果）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionPlanLine {
    /// 產品ID
    pub product_id: ProductId,

    /// 產品代碼
    pub product_code: String,

    /// 產品名稱
    pub product_name: String,

    /// 單位價值
    pub unit_value: Decimal,

    /// 建議生產數量（至少 1）
    pub quantity: u64,

    /// 小計 = 數量 × 單位價值
    pub subtotal: Decimal,
}

impl ProductionPlanLine {
    /// 依產品與數量創建計劃明細
    pub fn new(product: &Product, quantity: u64) -> Self {
        Self {
            product_id: product.id,
            product_code: product.code.clone(),
            product_name: product.name.clone(),
            unit_value: product.value,
            quantity,
            subtotal: product.value.saturating_mul(Decimal::from(quantity)),
        }
    }
}

/// 生產計劃（明細依處理順序排列）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductionPlan {
    /// 計劃明細
    pub lines: Vec<ProductionPlanLine>,

    /// 總價值
    pub total_value: Decimal,
}

impl ProductionPlan {
    /// 創建空的生產計劃
    pub fn empty() -> Self {
        Self::default()
    }

    /// 添加明細並累計總價值
    pub fn push_line(&mut self, line: ProductionPlanLine) {
        self.total_value = self.total_value.saturating_add(line.subtotal);
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// 查詢某產品的建議數量
    pub fn quantity_of(&self, product_id: ProductId) -> Option<u64> {
        self.lines
            .iter()
            .find(|line| line.product_id == product_id)
            .map(|line| line.quantity)
    }

    /// 計算計劃對各原料的總消耗量
    pub fn material_consumption(&self, products: &[Product]) -> HashMap<MaterialId, Decimal> {
        let mut consumption: HashMap<MaterialId, Decimal> = HashMap::new();

        for line in &self.lines {
            let Some(product) = products.iter().find(|p| p.id == line.product_id) else {
                continue;
            };

            for bom_line in product.required_lines() {
                *consumption.entry(bom_line.material_id).or_insert(Decimal::ZERO) +=
                    bom_line.quantity * Decimal::from(line.quantity);
            }
        }

        consumption
    }
}

/// 生產建議明細（對外呈現）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionItem {
    pub product_code: String,
    pub product_name: String,
    pub quantity: u64,
    pub subtotal: Decimal,
}

impl From<&ProductionPlanLine> for SuggestionItem {
    fn from(line: &ProductionPlanLine) -> Self {
        Self {
            product_code: line.product_code.clone(),
            product_name: line.product_name.clone(),
            quantity: line.quantity,
            subtotal: line.subtotal,
        }
    }
}

/// 生產建議（對外呈現的完整報表）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionSuggestion {
    /// 建議ID
    pub id: Uuid,

    /// 產生時間
    pub generated_at: DateTime<Utc>,

    /// 建議生產明細
    pub items: Vec<SuggestionItem>,

    /// 預估總價值
    pub total_value: Decimal,
}

impl ProductionSuggestion {
    /// 由生產計劃產生建議報表
    pub fn from_plan(plan: &ProductionPlan) -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            items: plan.lines.iter().map(SuggestionItem::from).collect(),
            total_value: plan.total_value,
        }
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
