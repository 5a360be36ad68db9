//! 產能計算（依剩餘庫存推算可生產數量）

use prodplan_core::{MaterialId, Product, StockSnapshot};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 單一產品的可生產數量
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    /// BOM 中沒有任何正用量明細，不受原料限制（視為不可生產）
    Unconstrained,

    /// 受原料限制
    Limited {
        /// 可生產數量
        units: u64,
        /// 限制最嚴的原料
        limiting_material: MaterialId,
    },
}

impl Capacity {
    /// 可生產數量（Unconstrained 為 0）
    pub fn units(&self) -> u64 {
        match self {
            Capacity::Unconstrained => 0,
            Capacity::Limited { units, .. } => *units,
        }
    }
}

/// 產能計算器
pub struct CapacityCalculator;

impl CapacityCalculator {
    /// 單一原料可支撐的整數單位數：floor(available / per_unit)
    ///
    /// `per_unit` 必須為正；`available` 為負時視為 0。
    /// 結果以 `u64::MAX` 為上限，實際商更大時回傳 `u64::MAX`。
    pub fn units_supported(available: Decimal, per_unit: Decimal) -> u64 {
        if per_unit <= Decimal::ZERO || available <= Decimal::ZERO {
            return 0;
        }

        // 商超出 Decimal 範圍時必然大於 u64::MAX
        let mut units = match available.checked_div(per_unit) {
            Some(quotient) => quotient.floor().to_u64().unwrap_or(u64::MAX),
            None => u64::MAX,
        };

        // 除法在 28 位精度下可能進位，回退直到消耗量不超過可用量
        while units > 0 && !Self::fits(units, per_unit, available) {
            units -= 1;
        }

        units
    }

    /// 依剩餘庫存計算產品最多可生產數量
    pub fn max_producible(product: &Product, remaining: &StockSnapshot) -> Capacity {
        let mut capacity = Capacity::Unconstrained;

        for line in product.required_lines() {
            let units = Self::units_supported(remaining.available(line.material_id), line.quantity);

            let tighter = match capacity {
                Capacity::Unconstrained => true,
                Capacity::Limited { units: current, .. } => units < current,
            };

            if tighter {
                capacity = Capacity::Limited {
                    units,
                    limiting_material: line.material_id,
                };
            }
        }

        capacity
    }

    fn fits(units: u64, per_unit: Decimal, available: Decimal) -> bool {
        Decimal::from(units)
            .checked_mul(per_unit)
            .map(|used| used <= available)
            .unwrap_or(false)
    }
}
