//! 輸入驗證

use prodplan_core::{PlanError, PlannerConfig, Product, StockSnapshot};
use rust_decimal::Decimal;
use std::collections::HashSet;

/// 輸入驗證器
pub struct InputValidator;

impl InputValidator {
    /// 驗證產品目錄與庫存快照
    pub fn validate(products: &[Product], stock: &StockSnapshot) -> prodplan_core::Result<()> {
        Self::validate_products(products)?;
        Self::validate_stock(stock)
    }

    /// 檢查產品數上限
    pub fn check_size(products: &[Product], config: &PlannerConfig) -> prodplan_core::Result<()> {
        match config.max_products {
            Some(max) if config.exceeds_limit(products.len()) => Err(PlanError::CatalogTooLarge {
                size: products.len(),
                max,
            }),
            _ => Ok(()),
        }
    }

    /// 驗證產品：價值與用量不可為負，產品ID不可重複
    pub fn validate_products(products: &[Product]) -> prodplan_core::Result<()> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in products {
            if !seen.insert(product.id) {
                return Err(PlanError::InvalidInput(format!(
                    "產品ID重複: {}",
                    product.id
                )));
            }

            if product.value < Decimal::ZERO {
                return Err(PlanError::InvalidInput(format!(
                    "產品 {} 的價值為負: {}",
                    product.code, product.value
                )));
            }

            if let Some(line) = product.bom_lines().find(|l| l.quantity < Decimal::ZERO) {
                return Err(PlanError::InvalidInput(format!(
                    "產品 {} 的原料 {} 用量為負: {}",
                    product.code, line.material_id, line.quantity
                )));
            }
        }

        Ok(())
    }

    /// 驗證庫存：數量不可為負
    pub fn validate_stock(stock: &StockSnapshot) -> prodplan_core::Result<()> {
        // 依原料ID排序，確保錯誤訊息穩定
        let mut negatives: Vec<_> = stock.iter().filter(|(_, qty)| *qty < Decimal::ZERO).collect();
        negatives.sort_by_key(|(id, _)| *id);

        match negatives.first() {
            Some((material_id, qty)) => Err(PlanError::InvalidInput(format!(
                "原料 {} 的庫存為負: {}",
                material_id, qty
            ))),
            None => Ok(()),
        }
    }
}
