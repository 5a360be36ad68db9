//! 原料庫存

use prodplan_core::{MaterialId, PlanError, RawMaterial, StockSnapshot};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::ensure_non_negative;

/// 原料庫存（記憶體）
#[derive(Debug, Clone, Default)]
pub struct MaterialInventory {
    materials: BTreeMap<MaterialId, RawMaterial>,
    next_id: u64,
}

impl MaterialInventory {
    /// 創建空的原料庫存
    pub fn new() -> Self {
        Self::default()
    }

    /// 新增原料，代碼必須唯一、庫存不可為負
    pub fn create(
        &mut self,
        code: &str,
        name: &str,
        stock_quantity: Decimal,
    ) -> prodplan_core::Result<MaterialId> {
        ensure_non_negative("庫存", code, stock_quantity)?;
        self.ensure_unique_code(code, None)?;

        self.next_id += 1;
        let id = MaterialId::new(self.next_id);
        self.materials.insert(
            id,
            RawMaterial::new(id, code.to_string(), name.to_string(), stock_quantity),
        );

        tracing::debug!("新增原料 {} ({})，庫存 {}", code, id, stock_quantity);
        Ok(id)
    }

    /// 更新原料基本資料與庫存
    pub fn update(
        &mut self,
        id: MaterialId,
        code: &str,
        name: &str,
        stock_quantity: Decimal,
    ) -> prodplan_core::Result<&RawMaterial> {
        ensure_non_negative("庫存", code, stock_quantity)?;
        self.ensure_unique_code(code, Some(id))?;

        let material = self
            .materials
            .get_mut(&id)
            .ok_or(PlanError::MaterialNotFound(id))?;
        material.code = code.to_string();
        material.name = name.to_string();
        material.stock_quantity = stock_quantity;

        Ok(&*material)
    }

    /// 設置庫存
    pub fn set_stock(
        &mut self,
        id: MaterialId,
        stock_quantity: Decimal,
    ) -> prodplan_core::Result<()> {
        let material = self
            .materials
            .get_mut(&id)
            .ok_or(PlanError::MaterialNotFound(id))?;
        ensure_non_negative("庫存", &material.code, stock_quantity)?;
        material.stock_quantity = stock_quantity;
        Ok(())
    }

    /// 查詢原料
    pub fn get(&self, id: MaterialId) -> prodplan_core::Result<&RawMaterial> {
        self.materials.get(&id).ok_or(PlanError::MaterialNotFound(id))
    }

    pub fn contains(&self, id: MaterialId) -> bool {
        self.materials.contains_key(&id)
    }

    /// 所有原料（依ID排序）
    pub fn find_all(&self) -> Vec<&RawMaterial> {
        self.materials.values().collect()
    }

    /// 刪除原料，返回被刪除的記錄
    pub fn delete(&mut self, id: MaterialId) -> prodplan_core::Result<RawMaterial> {
        self.materials
            .remove(&id)
            .ok_or(PlanError::MaterialNotFound(id))
    }

    /// 產生庫存快照（獨立副本，之後的修改不影響快照）
    pub fn snapshot(&self) -> StockSnapshot {
        StockSnapshot::from_materials(self.materials.values())
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    fn ensure_unique_code(
        &self,
        code: &str,
        except: Option<MaterialId>,
    ) -> prodplan_core::Result<()> {
        let taken = self
            .materials
            .values()
            .any(|m| m.code == code && Some(m.id) != except);

        if taken {
            return Err(PlanError::DuplicateCode(code.to_string()));
        }
        Ok(())
    }
}
