//! 貪婪分配器
//!
//! 依單位價值由高到低逐一處理產品，每個產品取剩餘庫存能支撐的最大整數數量，
//! 並從工作副本中扣除消耗。不回溯，因此結果不一定是全域最佳解。

use prodplan_core::{Product, ProductionPlan, ProductionPlanLine, StockSnapshot, TieBreak};
use rust_decimal::Decimal;

use crate::capacity::{Capacity, CapacityCalculator};
use crate::ordering::ProductOrdering;
use crate::{AllocationResult, SkipReason, SkippedProduct};

/// 依產品目錄與庫存快照計算生產計劃（同價值保持輸入順序）
pub fn compute_plan(products: &[Product], stock: &StockSnapshot) -> ProductionPlan {
    GreedyAllocator::default().allocate(products, stock).plan
}

/// 貪婪分配器
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAllocator {
    tie_break: TieBreak,
}

impl GreedyAllocator {
    /// 創建新的分配器
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    /// 執行分配
    ///
    /// `stock` 只讀；計算使用內部工作副本，結果中的 `remaining_stock` 即該副本。
    pub fn allocate(&self, products: &[Product], stock: &StockSnapshot) -> AllocationResult {
        let mut result = AllocationResult::empty(stock.clone());

        for product in ProductOrdering::sort(products, self.tie_break) {
            if !product.has_bom() {
                tracing::debug!("產品 {} 沒有 BOM，跳過", product.code);
                result.add_skipped(SkippedProduct::new(
                    product.id,
                    product.code.clone(),
                    SkipReason::EmptyBom,
                ));
                continue;
            }

            let (quantity, limiting_material) =
                match CapacityCalculator::max_producible(product, &result.remaining_stock) {
                    Capacity::Unconstrained => {
                        tracing::debug!("產品 {} 的 BOM 用量皆為 0，跳過", product.code);
                        result.add_skipped(SkippedProduct::new(
                            product.id,
                            product.code.clone(),
                            SkipReason::NoPositiveRequirement,
                        ));
                        continue;
                    }
                    Capacity::Limited {
                        units,
                        limiting_material,
                    } => (units, limiting_material),
                };

            if quantity == 0 {
                tracing::debug!(
                    "產品 {} 庫存不足（限制原料: {}），跳過",
                    product.code,
                    limiting_material
                );
                result.add_skipped(SkippedProduct::new(
                    product.id,
                    product.code.clone(),
                    SkipReason::InsufficientStock { limiting_material },
                ));
                continue;
            }

            // 扣減工作庫存
            for line in product.required_lines() {
                let used = line.quantity * Decimal::from(quantity);
                let left = result.remaining_stock.consume(line.material_id, used);
                tracing::debug!(
                    "扣減原料 {}: {} (剩餘 {})",
                    line.material_id,
                    used,
                    left
                );
            }

            let line = ProductionPlanLine::new(product, quantity);
            tracing::debug!(
                "產品 {} 建議生產 {} 單位，小計 {}",
                product.code,
                quantity,
                line.subtotal
            );
            result.plan.push_line(line);
        }

        result
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }
}
