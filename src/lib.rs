//! # Production Plan
//!
//! 生產建議服務：整合產品目錄、原料庫存與貪婪分配引擎

pub use prodplan_calc::{
    compute_plan, AllocationResult, GreedyAllocator, ProductionPlanner, SkipReason, SkippedProduct,
};
pub use prodplan_core::{
    BomLine, MaterialId, PlanError, PlannerConfig, Product, ProductId, ProductionPlan,
    ProductionPlanLine, ProductionSuggestion, RawMaterial, Result, StockSnapshot, SuggestionItem,
    TieBreak,
};
pub use prodplan_store::{MaterialInventory, ProductCatalog};

use rust_decimal::Decimal;

/// 生產建議服務
#[derive(Debug, Clone, Default)]
pub struct ProductionService {
    catalog: ProductCatalog,
    inventory: MaterialInventory,
    planner: ProductionPlanner,
}

impl ProductionService {
    /// 創建新的服務
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            catalog: ProductCatalog::new(),
            inventory: MaterialInventory::new(),
            planner: ProductionPlanner::new(config),
        }
    }

    /// 由既有的目錄與庫存建立服務
    pub fn with_store(
        catalog: ProductCatalog,
        inventory: MaterialInventory,
        config: PlannerConfig,
    ) -> Self {
        Self {
            catalog,
            inventory,
            planner: ProductionPlanner::new(config),
        }
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut ProductCatalog {
        &mut self.catalog
    }

    pub fn inventory(&self) -> &MaterialInventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut MaterialInventory {
        &mut self.inventory
    }

    /// 設置產品的原料用量（已關聯則更新用量）
    ///
    /// 新增關聯前確認原料存在；更新既有關聯不重新檢查。
    pub fn add_raw_material(
        &mut self,
        product_id: ProductId,
        material_id: MaterialId,
        quantity: Decimal,
    ) -> Result<()> {
        let already_linked = self.catalog.get(product_id)?.uses_material(material_id);
        if !already_linked {
            self.inventory.get(material_id)?;
        }

        self.catalog.add_raw_material(product_id, material_id, quantity)?;
        Ok(())
    }

    /// 移除產品的原料關聯
    pub fn remove_raw_material(
        &mut self,
        product_id: ProductId,
        material_id: MaterialId,
    ) -> Result<bool> {
        self.catalog.remove_raw_material(product_id, material_id)
    }

    /// 刪除原料；仍被 BOM 引用時拒絕
    pub fn delete_material(&mut self, material_id: MaterialId) -> Result<RawMaterial> {
        let product_count = self.catalog.products_using(material_id).len();
        if product_count > 0 {
            return Err(PlanError::MaterialInUse {
                material_id,
                product_count,
            });
        }

        let removed = self.inventory.delete(material_id)?;
        tracing::info!("刪除原料 {} ({})", removed.code, material_id);
        Ok(removed)
    }

    /// 依目前庫存計算生產計劃
    ///
    /// 每次呼叫都重新產生產品清單與庫存快照，計算期間不持有對庫存的可變引用。
    pub fn calculate_plan(&self) -> Result<AllocationResult> {
        let products = self.catalog.to_vec();
        let stock = self.inventory.snapshot();

        self.planner.plan(&products, &stock)
    }

    /// 計算生產建議報表
    pub fn calculate_suggestion(&self) -> Result<ProductionSuggestion> {
        let result = self.calculate_plan()?;
        let suggestion = ProductionSuggestion::from_plan(&result.plan);

        tracing::info!(
            "生產建議 {}：{} 項，總價值 {}",
            suggestion.id,
            suggestion.items.len(),
            suggestion.total_value
        );

        Ok(suggestion)
    }
}
