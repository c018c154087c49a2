// ==========================================
// 打包工位负载均衡系统 - CLI 主入口
// ==========================================
// 依据: Balance_Engine_Spec_v1.0.md
// 用法: pack-station-balancer <订单CSV> [工位数] [输出JSON]
// ==========================================

use anyhow::{Context, Result};
use pack_station_balancer::api::BalanceApi;
use pack_station_balancer::config::BalanceConfig;
use pack_station_balancer::repository::{CsvOrderSource, JsonReportSink};

// 未指定时的默认工位数
const DEFAULT_STATION_COUNT: u32 = 4;
// 未指定时的默认输出路径
const DEFAULT_OUTPUT_PATH: &str = "balance-report.json";

fn main() -> Result<()> {
    // 初始化日志系统
    pack_station_balancer::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 订单分配决策引擎", pack_station_balancer::APP_NAME);
    tracing::info!("系统版本: {}", pack_station_balancer::VERSION);
    tracing::info!("==================================================");

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("用法: pack-station-balancer <订单CSV> [工位数] [输出JSON]");
        eprintln!();
        eprintln!("  订单CSV   扁平订单文件 (orderID,itemID,...,quantity)");
        eprintln!("  工位数    请求的打包工位数量 (默认 {})", DEFAULT_STATION_COUNT);
        eprintln!("  输出JSON  均衡报告输出路径 (默认 {})", DEFAULT_OUTPUT_PATH);
        anyhow::bail!("缺少订单文件参数");
    }

    let orders_path = &args[1];
    let station_count: u32 = match args.get(2) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("工位数必须为正整数, 实际 {:?}", raw))?,
        None => DEFAULT_STATION_COUNT,
    };
    let output_path = args
        .get(3)
        .cloned()
        .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());

    // 加载配置（缺省回落内置默认值）
    let config = BalanceConfig::load_default();
    let api = BalanceApi::new(config).context("配置校验失败")?;
    tracing::info!(
        overload_factor = api.config().overload_factor,
        rebalance_min_gap = api.config().rebalance_min_gap,
        max_rebalance_passes = api.config().max_rebalance_passes,
        "均衡参数"
    );

    // 协作流程: 来源加载 → 均衡 → 结果落盘
    let source = CsvOrderSource::new(orders_path);
    let sink = JsonReportSink::new(&output_path);

    let report = api
        .run(&source, &sink, station_count)
        .context("均衡运行失败")?;

    // 终端摘要
    tracing::info!("--------------------------------------------------");
    for station in &report.result.stations {
        tracing::info!(
            "{}: {} 项 / {} 分钟 / {} / 均衡度 {}% / 负载率 {}%",
            station.name,
            station.items.len(),
            station.total_time,
            station.status,
            station.load_balance,
            station.efficiency
        );
    }
    tracing::info!("--------------------------------------------------");
    tracing::info!(
        "订单 {} 个, 活跃工位 {}/{}, 平均 {} 分钟, 均衡效率 {}%",
        report.result.summary.total_orders,
        report.result.summary.active_stations,
        report.station_count,
        report.result.summary.avg_time,
        report.result.summary.time_balance_efficiency
    );
    tracing::info!("报告已写出: {}", output_path);

    Ok(())
}
