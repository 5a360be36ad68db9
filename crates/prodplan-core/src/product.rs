//! 產品與 BOM 模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::MaterialId;

/// 產品ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PROD#{}", self.0)
    }
}

/// BOM 明細（生產一單位產品所需的某項原料）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomLine {
    /// 原料ID（以鍵值引用，不持有原料物件）
    #[serde(rename = "rawMaterialId")]
    pub material_id: MaterialId,

    /// 單位用量
    pub quantity: Decimal,
}

impl BomLine {
    /// 創建新的 BOM 明細
    pub fn new(material_id: MaterialId, quantity: Decimal) -> Self {
        Self {
            material_id,
            quantity,
        }
    }

    /// 用量為正才算真正需要此原料
    pub fn is_required(&self) -> bool {
        self.quantity > Decimal::ZERO
    }
}

/// 產品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// 產品ID
    pub id: ProductId,

    /// 產品代碼（唯一）
    pub code: String,

    /// 產品名稱
    pub name: String,

    /// 單位價值（每生產一單位計入的營收）
    pub value: Decimal,

    /// BOM 明細，以原料ID為鍵（每種原料最多一行）
    #[serde(rename = "rawMaterials", with = "bom_lines", default)]
    bom: BTreeMap<MaterialId, BomLine>,
}

impl Product {
    /// 創建新的產品（BOM 為空）
    pub fn new(id: ProductId, code: String, name: String, value: Decimal) -> Self {
        Self {
            id,
            code,
            name,
            value,
            bom: BTreeMap::new(),
        }
    }

    /// 建構器模式：設置 BOM 明細（已存在則覆寫用量）
    pub fn with_bom_line(mut self, material_id: MaterialId, quantity: Decimal) -> Self {
        self.upsert_bom_line(material_id, quantity);
        self
    }

    /// 新增或更新 BOM 明細，返回原本的用量
    pub fn upsert_bom_line(
        &mut self,
        material_id: MaterialId,
        quantity: Decimal,
    ) -> Option<Decimal> {
        self.bom
            .insert(material_id, BomLine::new(material_id, quantity))
            .map(|previous| previous.quantity)
    }

    /// 移除 BOM 明細
    pub fn remove_bom_line(&mut self, material_id: MaterialId) -> Option<BomLine> {
        self.bom.remove(&material_id)
    }

    /// 查詢某原料的 BOM 明細
    pub fn bom_line(&self, material_id: MaterialId) -> Option<&BomLine> {
        self.bom.get(&material_id)
    }

    /// 所有 BOM 明細（依原料ID排序）
    pub fn bom_lines(&self) -> impl Iterator<Item = &BomLine> {
        self.bom.values()
    }

    /// 用量為正的 BOM 明細
    pub fn required_lines(&self) -> impl Iterator<Item = &BomLine> {
        self.bom.values().filter(|line| line.is_required())
    }

    pub fn bom_len(&self) -> usize {
        self.bom.len()
    }

    /// 檢查是否有 BOM
    pub fn has_bom(&self) -> bool {
        !self.bom.is_empty()
    }

    /// 檢查是否至少消耗一種原料
    pub fn has_positive_requirement(&self) -> bool {
        self.required_lines().next().is_some()
    }

    /// 檢查 BOM 是否引用某原料
    pub fn uses_material(&self, material_id: MaterialId) -> bool {
        self.bom.contains_key(&material_id)
    }
}

/// BOM 以陣列形式序列化，反序列化時重複的原料以後者為準
mod bom_lines {
    use super::{BomLine, MaterialId};
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S>(
        bom: &BTreeMap<MaterialId, BomLine>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(bom.values())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<MaterialId, BomLine>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let lines = Vec::<BomLine>::deserialize(deserializer)?;
        Ok(lines
            .into_iter()
            .map(|line| (line.material_id, line))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chair() -> Product {
        Product::new(
            ProductId::new(1),
            "PROD001".to_string(),
            "Cadeira de Madeira".to_string(),
            Decimal::from(150),
        )
    }

    #[test]
    fn test_create_product() {
        let product = chair();

        assert_eq!(product.code, "PROD001");
        assert_eq!(product.value, Decimal::from(150));
        assert!(!product.has_bom());
        assert!(!product.has_positive_requirement());
    }

    #[test]
    fn test_bom_upsert_overwrites_quantity() {
        let mut product = chair()
            .with_bom_line(MaterialId::new(1), Decimal::from(2))
            .with_bom_line(MaterialId::new(4), Decimal::from(4));

        assert_eq!(product.bom_len(), 2);

        // 同一原料再次加入，只更新用量
        let previous = product.upsert_bom_line(MaterialId::new(1), Decimal::from(3));
        assert_eq!(previous, Some(Decimal::from(2)));
        assert_eq!(product.bom_len(), 2);
        assert_eq!(
            product.bom_line(MaterialId::new(1)).map(|l| l.quantity),
            Some(Decimal::from(3))
        );

        // 新原料則新增
        assert_eq!(product.upsert_bom_line(MaterialId::new(5), Decimal::new(5, 1)), None);
        assert_eq!(product.bom_len(), 3);
    }

    #[test]
    fn test_remove_bom_line() {
        let mut product = chair().with_bom_line(MaterialId::new(1), Decimal::from(2));

        assert!(product.remove_bom_line(MaterialId::new(1)).is_some());
        assert!(product.remove_bom_line(MaterialId::new(1)).is_none());
        assert!(!product.has_bom());
    }

    #[test]
    fn test_zero_quantity_is_not_required() {
        let product = chair().with_bom_line(MaterialId::new(2), Decimal::ZERO);

        assert!(product.has_bom());
        assert!(product.uses_material(MaterialId::new(2)));
        assert!(!product.has_positive_requirement());
        assert_eq!(product.required_lines().count(), 0);
    }

    #[test]
    fn test_bom_serialized_as_list() {
        let product = chair()
            .with_bom_line(MaterialId::new(4), Decimal::from(4))
            .with_bom_line(MaterialId::new(1), Decimal::from(2));

        let json = serde_json::to_value(&product).unwrap();
        let lines = json["rawMaterials"].as_array().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["rawMaterialId"], 1);
        assert_eq!(lines[1]["rawMaterialId"], 4);

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, product);
    }
}
