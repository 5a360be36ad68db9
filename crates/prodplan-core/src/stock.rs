//! 庫存快照

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{MaterialId, RawMaterial};

/// 庫存快照（某一時點原料數量的獨立副本）
///
/// 查詢不存在的原料或負數庫存時一律視為 0。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockSnapshot {
    quantities: HashMap<MaterialId, Decimal>,
}

impl StockSnapshot {
    /// 創建空的庫存快照
    pub fn new() -> Self {
        Self::default()
    }

    /// 從原料清單建立快照
    pub fn from_materials<'a, I>(materials: I) -> Self
    where
        I: IntoIterator<Item = &'a RawMaterial>,
    {
        materials
            .into_iter()
            .map(|material| (material.id, material.stock_quantity))
            .collect()
    }

    /// 建構器模式：設置原料數量
    pub fn with_quantity(mut self, material_id: MaterialId, quantity: Decimal) -> Self {
        self.set(material_id, quantity);
        self
    }

    /// 設置原料數量
    pub fn set(&mut self, material_id: MaterialId, quantity: Decimal) {
        self.quantities.insert(material_id, quantity);
    }

    /// 可用數量（不存在或為負時為 0）
    pub fn available(&self, material_id: MaterialId) -> Decimal {
        self.quantities
            .get(&material_id)
            .copied()
            .filter(|qty| *qty > Decimal::ZERO)
            .unwrap_or(Decimal::ZERO)
    }

    /// 原始記錄值（可能為負，不存在時為 None）
    pub fn recorded(&self, material_id: MaterialId) -> Option<Decimal> {
        self.quantities.get(&material_id).copied()
    }

    /// 扣減庫存，返回扣減後的可用數量（最低為 0）
    pub fn consume(&mut self, material_id: MaterialId, quantity: Decimal) -> Decimal {
        let remaining = (self.available(material_id) - quantity).max(Decimal::ZERO);
        self.quantities.insert(material_id, remaining);
        remaining
    }

    pub fn contains(&self, material_id: MaterialId) -> bool {
        self.quantities.contains_key(&material_id)
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// 遍歷所有記錄
    pub fn iter(&self) -> impl Iterator<Item = (MaterialId, Decimal)> + '_ {
        self.quantities.iter().map(|(id, qty)| (*id, *qty))
    }
}

impl FromIterator<(MaterialId, Decimal)> for StockSnapshot {
    fn from_iter<T: IntoIterator<Item = (MaterialId, Decimal)>>(iter: T) -> Self {
        Self {
            quantities: iter.into_iter().collect(),
        }
    }
}
