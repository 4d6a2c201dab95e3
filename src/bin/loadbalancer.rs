//! 负载均衡仿真
//!
//! 用法：`loadbalancer <num_servers> <run_time>`

use clap::{Parser, ValueEnum};
use lbsim_rs::error::ConfigError;
use lbsim_rs::lb::LoadBalancer;
use lbsim_rs::net::FirewallMode;
use lbsim_rs::sim::{SimConfig, SimTime, Simulator};
use lbsim_rs::viz::VizLogger;
use std::fs;
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    DestinationOnly,
    SourceOrDestination,
}

impl From<ModeArg> for FirewallMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::DestinationOnly => FirewallMode::DestinationOnly,
            ModeArg::SourceOrDestination => FirewallMode::SourceOrDestination,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "loadbalancer",
    about = "离散时间负载均衡仿真：弹性服务器池 + 防火墙过滤"
)]
struct Args {
    /// 目标（初始）服务器数量
    num_servers: usize,
    /// 运行多少个 tick
    run_time: u64,

    /// JSON 配置文件，命令行参数会覆盖其中的值
    #[arg(long)]
    config: Option<PathBuf>,
    /// 随机种子（缺省随机）
    #[arg(long)]
    seed: Option<u64>,
    /// 每 tick 到达概率的分子
    #[arg(long)]
    arrival_numerator: Option<u32>,
    /// 每 tick 到达概率的分母
    #[arg(long)]
    arrival_denominator: Option<u32>,
    #[arg(long, value_enum)]
    firewall_mode: Option<ModeArg>,
    /// 第三段 octet 达到该值即丢弃
    #[arg(long)]
    drop_threshold: Option<u8>,
    /// 每台服务器预填充的请求数
    #[arg(long)]
    prefill_per_server: Option<usize>,
    /// 输出事件 JSON 文件
    #[arg(long)]
    events_json: Option<PathBuf>,
    /// 不打印逐事件进度
    #[arg(long)]
    quiet: bool,
}

fn build_config(args: &Args) -> Result<SimConfig, ConfigError> {
    let mut cfg = match &args.config {
        Some(path) => SimConfig::from_json_file(path)?,
        None => SimConfig::default(),
    };
    cfg.num_servers = args.num_servers;
    cfg.run_time = args.run_time;
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    if let Some(n) = args.arrival_numerator {
        cfg.arrival.numerator = n;
    }
    if let Some(d) = args.arrival_denominator {
        cfg.arrival.denominator = d;
    }
    if let Some(mode) = args.firewall_mode {
        cfg.firewall.mode = mode.into();
    }
    if let Some(t) = args.drop_threshold {
        cfg.firewall.threshold = t;
    }
    if let Some(p) = args.prefill_per_server {
        cfg.prefill_per_server = p;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn run(args: &Args) -> Result<(), ConfigError> {
    let cfg = build_config(args)?;
    let mut lb = LoadBalancer::from_config(&cfg)?;
    let mut viz = args.events_json.as_ref().map(|_| VizLogger::default());
    if let Some(v) = viz.as_mut() {
        v.record_meta(&cfg, &lb);
    }

    let mut sim = Simulator::default();
    sim.run_until(SimTime(cfg.run_time), &mut lb, |lb, report| {
        if !args.quiet {
            for ev in &report.events {
                println!("[t={}] {}", report.at, ev);
            }
        }
        if let Some(v) = viz.as_mut() {
            v.record_tick(lb, report);
        }
        ControlFlow::Continue(())
    });

    if let (Some(path), Some(v)) = (&args.events_json, &viz) {
        let write_err = |source: std::io::Error| ConfigError::Write {
            path: path.clone(),
            source,
        };
        let raw = v.to_json().map_err(|e| write_err(e.into()))?;
        fs::write(path, raw).map_err(write_err)?;
    }

    let stats = lb.stats();
    println!("Simulation completed at time: {}", lb.now());
    println!("Ending queue size: {}", lb.queue().len());
    println!("Ending server count: {}", lb.servers().len());
    println!("Dropped requests: {}", lb.dropped_count());
    println!(
        "Processed requests: {}, finished requests: {}",
        stats.processed, stats.finished
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // 初始化 tracing（写 stderr，stdout 只留进度与汇总）
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}
