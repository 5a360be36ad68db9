//! 產品處理順序

use prodplan_core::{Product, TieBreak};

/// 產品排序器
pub struct ProductOrdering;

impl ProductOrdering {
    /// 依單位價值降冪排序
    ///
    /// 使用穩定排序：同價值產品在 `TieBreak::InputOrder` 下保持輸入順序。
    pub fn sort(products: &[Product], tie_break: TieBreak) -> Vec<&Product> {
        let mut ordered: Vec<&Product> = products.iter().collect();

        ordered.sort_by(|a, b| {
            let by_value = b.value.cmp(&a.value);
            match tie_break {
                TieBreak::InputOrder => by_value,
                TieBreak::ByCode => by_value.then_with(|| a.code.cmp(&b.code)),
            }
        });

        ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodplan_core::ProductId;
    use rust_decimal::Decimal;

    fn product(id: u64, code: &str, value: i64) -> Product {
        Product::new(
            ProductId::new(id),
            code.to_string(),
            code.to_string(),
            Decimal::from(value),
        )
    }

    #[test]
    fn test_sort_by_value_desc() {
        let products = vec![product(1, "A", 85), product(2, "B", 450), product(3, "C", 150)];

        let ordered = ProductOrdering::sort(&products, TieBreak::InputOrder);
        let codes: Vec<_> = ordered.iter().map(|p| p.code.as_str()).collect();

        assert_eq!(codes, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_equal_values_keep_input_order() {
        let products = vec![
            product(1, "Z", 10),
            product(2, "X", 20),
            product(3, "A", 10),
            product(4, "M", 10),
        ];

        let ordered = ProductOrdering::sort(&products, TieBreak::InputOrder);
        let ids: Vec<_> = ordered.iter().map(|p| p.id.value()).collect();

        assert_eq!(ids, vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_equal_values_by_code() {
        let products = vec![product(1, "Z", 10), product(2, "A", 10), product(3, "M", 10)];

        let ordered = ProductOrdering::sort(&products, TieBreak::ByCode);
        let codes: Vec<_> = ordered.iter().map(|p| p.code.as_str()).collect();

        assert_eq!(codes, vec!["A", "M", "Z"]);
    }

    #[test]
    fn test_decimal_scale_does_not_affect_order() {
        // 10.0 與 10 數值相等，應視為同價值
        let products = vec![
            Product::new(ProductId::new(1), "A".into(), "A".into(), Decimal::new(100, 1)),
            Product::new(ProductId::new(2), "B".into(), "B".into(), Decimal::from(10)),
        ];

        let ordered = ProductOrdering::sort(&products, TieBreak::InputOrder);
        assert_eq!(ordered[0].id, ProductId::new(1));
        assert_eq!(ordered[1].id, ProductId::new(2));
    }
}
