//! # Production Plan Calculation Engine
//!
//! 生產建議分配引擎（貪婪法）

pub mod allocator;
pub mod capacity;
pub mod ordering;
pub mod planner;
pub mod validation;

// Re-export 主要類型
pub use allocator::{compute_plan, GreedyAllocator};
pub use capacity::{Capacity, CapacityCalculator};
pub use planner::ProductionPlanner;

use prodplan_core::{MaterialId, ProductId, ProductionPlan, StockSnapshot};

/// 分配計算結果
#[derive(Debug, Clone)]
pub struct AllocationResult {
    /// 生產計劃
    pub plan: ProductionPlan,

    /// 未列入計劃的產品
    pub skipped: Vec<SkippedProduct>,

    /// 分配後的剩餘庫存（工作副本）
    pub remaining_stock: StockSnapshot,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl AllocationResult {
    /// 創建空的計算結果
    pub fn empty(remaining_stock: StockSnapshot) -> Self {
        Self {
            plan: ProductionPlan::empty(),
            skipped: Vec::new(),
            remaining_stock,
            calculation_time_ms: None,
        }
    }

    /// 記錄被略過的產品
    pub fn add_skipped(&mut self, skipped: SkippedProduct) {
        self.skipped.push(skipped);
    }

    /// 查詢某產品被略過的原因
    pub fn skip_reason(&self, product_id: ProductId) -> Option<SkipReason> {
        self.skipped
            .iter()
            .find(|s| s.product_id == product_id)
            .map(|s| s.reason)
    }
}

/// 被略過的產品
#[derive(Debug, Clone)]
pub struct SkippedProduct {
    pub product_id: ProductId,
    pub product_code: String,
    pub reason: SkipReason,
}

impl SkippedProduct {
    pub fn new(product_id: ProductId, product_code: String, reason: SkipReason) -> Self {
        Self {
            product_id,
            product_code,
            reason,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// 沒有 BOM
    EmptyBom,
    /// BOM 明細用量皆為 0
    NoPositiveRequirement,
    /// 庫存不足以生產一單位
    InsufficientStock { limiting_material: MaterialId },
}
