//! 出貨優化示例
//!
//! 執行：`cargo run --example ship_order -- 12001 250 500 1000 2000 5000`
//! 未指定規格時使用預設規格 {1, 5, 10}。

use anyhow::Context;
use pack::{OptimizerConfig, OrderRequest, ShipmentOptimizer};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let order_amount: i64 = args
        .next()
        .unwrap_or_else(|| "12001".to_string())
        .parse()
        .context("訂單數量必須為整數")?;

    let sizes = args
        .map(|arg| arg.parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .context("包裝規格必須為整數")?;

    let mut request = OrderRequest::new(order_amount);
    if !sizes.is_empty() {
        request = request.with_package_sizes(sizes);
    }

    println!("=== 出貨優化示例 ===\n");

    let optimizer = ShipmentOptimizer::new(OptimizerConfig::default());
    let shipment = optimizer.compute_for_request(&request)?;

    match &request.package_sizes {
        Some(sizes) => println!("包裝規格: {:?}", sizes),
        None => println!(
            "包裝規格: {:?}（預設）",
            optimizer.config().default_package_sizes
        ),
    }
    println!("訂單數量: {}", order_amount);
    println!("出貨總量: {}（超量 {}）", shipment.total, shipment.overage());
    println!("包數: {}", shipment.count);
    for (size, quantity) in shipment.breakdown() {
        println!("  - 規格 {} x {}", size, quantity);
    }

    println!("\nJSON:\n{}", serde_json::to_string_pretty(&shipment)?);

    Ok(())
}
