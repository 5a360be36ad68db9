//! 原料模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 原料ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(pub u64);

impl MaterialId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MAT#{}", self.0)
    }
}

/// 原料（含現有庫存）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterial {
    /// 原料ID
    pub id: MaterialId,

    /// 原料代碼（唯一）
    pub code: String,

    /// 原料名稱
    pub name: String,

    /// 現有庫存
    pub stock_quantity: Decimal,
}

impl RawMaterial {
    /// 創建新的原料記錄
    pub fn new(id: MaterialId, code: String, name: String, stock_quantity: Decimal) -> Self {
        Self {
            id,
            code,
            name,
            stock_quantity,
        }
    }

    /// 建構器模式：設置庫存
    pub fn with_stock_quantity(mut self, stock_quantity: Decimal) -> Self {
        self.stock_quantity = stock_quantity;
        self
    }

    /// 檢查庫存是否已耗盡
    pub fn is_depleted(&self) -> bool {
        self.stock_quantity <= Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_material() {
        let material = RawMaterial::new(
            MaterialId::new(1),
            "MP001".to_string(),
            "Madeira (m²)".to_string(),
            Decimal::from(500),
        );

        assert_eq!(material.id.value(), 1);
        assert_eq!(material.code, "MP001");
        assert_eq!(material.stock_quantity, Decimal::from(500));
        assert!(!material.is_depleted());
    }

    #[test]
    fn test_depleted_material() {
        let material = RawMaterial::new(
            MaterialId::new(2),
            "MP002".to_string(),
            "Ferro (kg)".to_string(),
            Decimal::from(10),
        )
        .with_stock_quantity(Decimal::ZERO);

        assert!(material.is_depleted());
    }

    #[test]
    fn test_material_id_display() {
        assert_eq!(MaterialId::new(42).to_string(), "MAT#42");
    }
}
