//! # Production Plan Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod material;
pub mod plan;
pub mod product;
pub mod stock;

// Re-export 主要類型
pub use config::{PlannerConfig, TieBreak};
pub use material::{MaterialId, RawMaterial};
pub use plan::{ProductionPlan, ProductionPlanLine, ProductionSuggestion, SuggestionItem};
pub use product::{BomLine, Product, ProductId};
pub use stock::StockSnapshot;

/// 生產計劃錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("找不到產品: {0}")]
    ProductNotFound(ProductId),

    #[error("找不到原料: {0}")]
    MaterialNotFound(MaterialId),

    #[error("代碼重複: {0}")]
    DuplicateCode(String),

    #[error("原料 {material_id} 仍被 {product_count} 個產品的 BOM 使用")]
    MaterialInUse {
        material_id: MaterialId,
        product_count: usize,
    },

    #[error("無效的輸入: {0}")]
    InvalidInput(String),

    #[error("產品目錄過大：{size} 筆，上限 {max} 筆")]
    CatalogTooLarge { size: usize, max: usize },

    #[error("JSON 處理錯誤: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
