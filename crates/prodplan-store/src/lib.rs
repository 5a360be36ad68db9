//! # Production Plan Store
//!
//! 產品目錄與原料庫存（記憶體實作）

pub mod catalog;
pub mod inventory;

// Re-export 主要類型
pub use catalog::ProductCatalog;
pub use inventory::MaterialInventory;

use prodplan_core::PlanError;
use rust_decimal::Decimal;

/// 檢查數值不可為負
pub(crate) fn ensure_non_negative(
    field: &str,
    owner: &str,
    value: Decimal,
) -> prodplan_core::Result<()> {
    if value < Decimal::ZERO {
        return Err(PlanError::InvalidInput(format!(
            "{} 的{}不可為負: {}",
            owner, field, value
        )));
    }
    Ok(())
}
