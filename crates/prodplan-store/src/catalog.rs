//! 產品目錄

use prodplan_core::{MaterialId, PlanError, Product, ProductId};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::ensure_non_negative;

/// 產品目錄（記憶體）
///
/// 產品ID遞增配發，`find_all` 依ID排序，即建立順序。
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: BTreeMap<ProductId, Product>,
    next_id: u64,
}

impl ProductCatalog {
    /// 創建空的產品目錄
    pub fn new() -> Self {
        Self::default()
    }

    /// 新增產品（BOM 為空）
    pub fn create(
        &mut self,
        code: &str,
        name: &str,
        value: Decimal,
    ) -> prodplan_core::Result<ProductId> {
        ensure_non_negative("價值", code, value)?;
        self.ensure_unique_code(code, None)?;

        self.next_id += 1;
        let id = ProductId::new(self.next_id);
        self.products
            .insert(id, Product::new(id, code.to_string(), name.to_string(), value));

        tracing::debug!("新增產品 {} ({})，價值 {}", code, id, value);
        Ok(id)
    }

    /// 更新產品基本資料（不影響 BOM）
    pub fn update(
        &mut self,
        id: ProductId,
        code: &str,
        name: &str,
        value: Decimal,
    ) -> prodplan_core::Result<&Product> {
        ensure_non_negative("價值", code, value)?;
        self.ensure_unique_code(code, Some(id))?;

        let product = self.get_mut(id)?;
        product.code = code.to_string();
        product.name = name.to_string();
        product.value = value;

        Ok(&*product)
    }

    /// 查詢產品
    pub fn get(&self, id: ProductId) -> prodplan_core::Result<&Product> {
        self.products.get(&id).ok_or(PlanError::ProductNotFound(id))
    }

    /// 所有產品（依建立順序）
    pub fn find_all(&self) -> Vec<&Product> {
        self.products.values().collect()
    }

    /// 所有產品的獨立副本，供分配計算使用
    pub fn to_vec(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    /// 刪除產品（連同其 BOM）
    pub fn delete(&mut self, id: ProductId) -> prodplan_core::Result<Product> {
        self.products.remove(&id).ok_or(PlanError::ProductNotFound(id))
    }

    /// 設置產品的原料用量：已存在則更新，否則新增
    ///
    /// 返回原本的用量（新增時為 None）。原料是否存在由呼叫端確認。
    pub fn add_raw_material(
        &mut self,
        product_id: ProductId,
        material_id: MaterialId,
        quantity: Decimal,
    ) -> prodplan_core::Result<Option<Decimal>> {
        let product = self.get_mut(product_id)?;
        ensure_non_negative("用量", &product.code, quantity)?;

        let previous = product.upsert_bom_line(material_id, quantity);
        match previous {
            Some(old) => tracing::debug!(
                "更新 BOM: {} → {} 用量 {} → {}",
                product.code,
                material_id,
                old,
                quantity
            ),
            None => tracing::debug!("新增 BOM: {} → {} 用量 {}", product.code, material_id, quantity),
        }

        Ok(previous)
    }

    /// 移除產品的原料，返回是否確實移除
    pub fn remove_raw_material(
        &mut self,
        product_id: ProductId,
        material_id: MaterialId,
    ) -> prodplan_core::Result<bool> {
        let product = self.get_mut(product_id)?;
        Ok(product.remove_bom_line(material_id).is_some())
    }

    /// 使用某原料的產品
    pub fn products_using(&self, material_id: MaterialId) -> Vec<&Product> {
        self.products
            .values()
            .filter(|p| p.uses_material(material_id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn get_mut(&mut self, id: ProductId) -> prodplan_core::Result<&mut Product> {
        self.products
            .get_mut(&id)
            .ok_or(PlanError::ProductNotFound(id))
    }

    fn ensure_unique_code(
        &self,
        code: &str,
        except: Option<ProductId>,
    ) -> prodplan_core::Result<()> {
        let taken = self
            .products
            .values()
            .any(|p| p.code == code && Some(p.id) != except);

        if taken {
            return Err(PlanError::DuplicateCode(code.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_create_keeps_insertion_order() {
        let mut catalog = ProductCatalog::new();
        let chair = catalog
            .create("PROD001", "Cadeira de Madeira", Decimal::from(150))
            .unwrap();
        let table = catalog
            .create("PROD002", "Mesa de Jantar", Decimal::from(450))
            .unwrap();

        let all = catalog.find_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, chair);
        assert_eq!(all[1].id, table);
        assert!(!all[0].has_bom());
    }

    #[rstest]
    #[case("PROD001", Decimal::from(-1), true)]
    #[case("PROD001", Decimal::ZERO, false)]
    #[case("DUP", Decimal::from(10), true)]
    fn test_create_validation(
        #[case] code: &str,
        #[case] value: Decimal,
        #[case] should_fail: bool,
    ) {
        let mut catalog = ProductCatalog::new();
        catalog.create("DUP", "Existing", Decimal::from(1)).unwrap();

        assert_eq!(catalog.create(code, "New", value).is_err(), should_fail);
    }

    #[test]
    fn test_add_raw_material_upsert() {
        let mut catalog = ProductCatalog::new();
        let chair = catalog.create("PROD001", "Cadeira", Decimal::from(150)).unwrap();
        let wood = MaterialId::new(1);

        assert_eq!(catalog.add_raw_material(chair, wood, Decimal::from(2)).unwrap(), None);
        assert_eq!(
            catalog.add_raw_material(chair, wood, Decimal::from(3)).unwrap(),
            Some(Decimal::from(2))
        );

        let product = catalog.get(chair).unwrap();
        assert_eq!(product.bom_len(), 1);
        assert_eq!(product.bom_line(wood).map(|l| l.quantity), Some(Decimal::from(3)));
    }

    #[test]
    fn test_add_raw_material_rejects_negative_quantity() {
        let mut catalog = ProductCatalog::new();
        let chair = catalog.create("PROD001", "Cadeira", Decimal::from(150)).unwrap();

        assert!(catalog
            .add_raw_material(chair, MaterialId::new(1), Decimal::from(-2))
            .is_err());
        assert!(!catalog.get(chair).unwrap().has_bom());
    }

    #[test]
    fn test_remove_raw_material() {
        let mut catalog = ProductCatalog::new();
        let chair = catalog.create("PROD001", "Cadeira", Decimal::from(150)).unwrap();
        catalog
            .add_raw_material(chair, MaterialId::new(1), Decimal::from(2))
            .unwrap();

        assert!(catalog.remove_raw_material(chair, MaterialId::new(1)).unwrap());
        assert!(!catalog.remove_raw_material(chair, MaterialId::new(1)).unwrap());
        assert!(matches!(
            catalog.remove_raw_material(ProductId::new(99), MaterialId::new(1)),
            Err(PlanError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_update_keeps_bom() {
        let mut catalog = ProductCatalog::new();
        let chair = catalog.create("PROD001", "Cadeira", Decimal::from(150)).unwrap();
        catalog
            .add_raw_material(chair, MaterialId::new(1), Decimal::from(2))
            .unwrap();

        let updated = catalog
            .update(chair, "PROD001", "Cadeira Luxo", Decimal::from(180))
            .unwrap();

        assert_eq!(updated.value, Decimal::from(180));
        assert_eq!(updated.bom_len(), 1);
    }

    #[test]
    fn test_delete_and_products_using() {
        let mut catalog = ProductCatalog::new();
        let chair = catalog.create("PROD001", "Cadeira", Decimal::from(150)).unwrap();
        let table = catalog.create("PROD002", "Mesa", Decimal::from(450)).unwrap();
        let wood = MaterialId::new(1);
        catalog.add_raw_material(chair, wood, Decimal::from(2)).unwrap();
        catalog.add_raw_material(table, wood, Decimal::from(10)).unwrap();

        assert_eq!(catalog.products_using(wood).len(), 2);

        let removed = catalog.delete(chair).unwrap();
        assert_eq!(removed.code, "PROD001");
        assert_eq!(catalog.products_using(wood).len(), 1);
        assert!(catalog.get(chair).is_err());
    }
}
