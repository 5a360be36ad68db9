//! 生產計劃主計算器

use prodplan_core::{PlannerConfig, Product, StockSnapshot};

use crate::allocator::GreedyAllocator;
use crate::validation::InputValidator;
use crate::AllocationResult;

/// 生產計劃計算器
#[derive(Debug, Clone, Default)]
pub struct ProductionPlanner {
    /// 計劃配置
    config: PlannerConfig,
}

impl ProductionPlanner {
    /// 創建新的計算器
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// 主計算入口
    pub fn plan(
        &self,
        products: &[Product],
        stock: &StockSnapshot,
    ) -> prodplan_core::Result<AllocationResult> {
        tracing::info!(
            "開始生產建議計算：產品 {} 筆，原料 {} 筆",
            products.len(),
            stock.len()
        );

        let start_time = std::time::Instant::now();

        // Step 1: 輸入檢查
        tracing::debug!("Step 1: 輸入檢查");
        InputValidator::check_size(products, &self.config)?;
        if self.config.validate_input {
            InputValidator::validate(products, stock)?;
        }

        // Step 2: 貪婪分配
        let allocator = GreedyAllocator::new(self.config.tie_break);
        tracing::debug!("Step 2: 貪婪分配（排序規則: {:?}）", allocator.tie_break());
        let mut result = allocator.allocate(products, stock);
        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!("生產建議計算完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "建議生產 {} 項產品，略過 {} 項，總價值 {}",
            result.plan.len(),
            result.skipped.len(),
            result.plan.total_value
        );

        Ok(result)
    }

    /// 獲取配置引用
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }
}
