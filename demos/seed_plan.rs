//! 生產建議計算示例

use prodplan::{PlannerConfig, ProductionService};
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== 生產建議計算示例 ===\n");

    // 可用 PRODPLAN_CONFIG 指定 JSON 配置
    let config = match std::env::var("PRODPLAN_CONFIG") {
        Ok(json) => PlannerConfig::from_json_str(&json)?,
        Err(_) => PlannerConfig::default(),
    };
    let mut service = ProductionService::new(config);

    // 原料
    let inventory = service.inventory_mut();
    let wood = inventory.create("MP001", "Madeira (m²)", Decimal::from(500))?;
    let iron = inventory.create("MP002", "Ferro (kg)", Decimal::from(200))?;
    let plastic = inventory.create("MP003", "Plástico (kg)", Decimal::from(300))?;
    let screw = inventory.create("MP004", "Parafuso (un)", Decimal::from(1000))?;
    let fabric = inventory.create("MP005", "Tecido (m²)", Decimal::from(150))?;

    // 產品
    let catalog = service.catalog_mut();
    let chair = catalog.create("PROD001", "Cadeira de Madeira", Decimal::from(150))?;
    let table = catalog.create("PROD002", "Mesa de Jantar", Decimal::from(450))?;
    let stool = catalog.create("PROD003", "Banco Industrial", Decimal::from(85))?;

    // BOM
    service.add_raw_material(chair, wood, Decimal::from(2))?;
    service.add_raw_material(chair, screw, Decimal::from(4))?;
    service.add_raw_material(chair, fabric, Decimal::new(5, 1))?;
    service.add_raw_material(table, wood, Decimal::from(10))?;
    service.add_raw_material(table, iron, Decimal::from(2))?;
    service.add_raw_material(table, screw, Decimal::from(8))?;
    service.add_raw_material(stool, plastic, Decimal::from(2))?;
    service.add_raw_material(stool, iron, Decimal::from(1))?;

    println!("原料庫存:");
    for material in service.inventory().find_all() {
        println!(
            "  - {} {}: {}",
            material.code, material.name, material.stock_quantity
        );
    }

    let result = service.calculate_plan()?;

    println!("\n建議生產:");
    for line in &result.plan.lines {
        println!(
            "  - {} {} × {} = {}",
            line.product_code, line.product_name, line.quantity, line.subtotal
        );
    }
    for skipped in &result.skipped {
        println!("  (略過 {}: {:?})", skipped.product_code, skipped.reason);
    }
    println!("總價值: {}", result.plan.total_value);

    println!("\nJSON:");
    println!("{}", service.calculate_suggestion()?.to_json()?);

    Ok(())
}
