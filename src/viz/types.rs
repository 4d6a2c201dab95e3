use crate::lb::{LbEvent, LoadBalancer, TickReport};
use crate::net::Request;
use crate::sim::SimConfig;
use serde::{Deserialize, Serialize};

/// 请求摘要（地址以字符串形式输出，便于离线查看）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VizRequest {
    pub src: String,
    pub dst: String,
    pub ticks: u32,
}

impl From<&Request> for VizRequest {
    fn from(r: &Request) -> Self {
        Self {
            src: r.source().to_string(),
            dst: r.dest().to_string(),
            ticks: r.processing_ticks(),
        }
    }
}

/// 可回放事件类型
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VizEventKind {
    /// 运行元信息（作为 t=0 的第一条事件）
    Meta {
        target_size: usize,
        run_time: u64,
        queue_len: usize,
    },
    Dropped { server: String, request: VizRequest },
    Processed { server: String, request: VizRequest },
    Finished { server: String, request: VizRequest },
    Removed { server: String },
    Added { server: String },
    Arrived { request: VizRequest },
    /// tick 结束时的池/队列快照
    Tick {
        pool_size: usize,
        queue_len: usize,
        dropped_total: u64,
    },
}

impl From<&LbEvent> for VizEventKind {
    fn from(ev: &LbEvent) -> Self {
        match ev {
            LbEvent::Dropped { server, request } => VizEventKind::Dropped {
                server: server.clone(),
                request: request.into(),
            },
            LbEvent::Processed { server, request } => VizEventKind::Processed {
                server: server.clone(),
                request: request.into(),
            },
            LbEvent::Finished { server, request } => VizEventKind::Finished {
                server: server.clone(),
                request: request.into(),
            },
            LbEvent::Removed { server } => VizEventKind::Removed {
                server: server.clone(),
            },
            LbEvent::Added { server } => VizEventKind::Added {
                server: server.clone(),
            },
            LbEvent::Arrived { request } => VizEventKind::Arrived {
                request: request.into(),
            },
        }
    }
}

/// 一个可回放的事件（JSON）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VizEvent {
    /// 仿真时间（tick，和 `SimTime.0` 同口径）
    pub t: u64,
    #[serde(flatten)]
    pub kind: VizEventKind,
}

/// 一个简单的事件收集器（存内存，仿真结束写 JSON 文件）
#[derive(Debug, Default)]
pub struct VizLogger {
    pub events: Vec<VizEvent>,
}

impl VizLogger {
    pub fn push(&mut self, ev: VizEvent) {
        self.events.push(ev);
    }

    pub fn record_meta(&mut self, cfg: &SimConfig, lb: &LoadBalancer) {
        self.push(VizEvent {
            t: lb.now().0,
            kind: VizEventKind::Meta {
                target_size: cfg.num_servers,
                run_time: cfg.run_time,
                queue_len: lb.queue().len(),
            },
        });
    }

    /// 记录一个 tick 的全部事件，末尾附带快照
    pub fn record_tick(&mut self, lb: &LoadBalancer, report: &TickReport) {
        let t = report.at.0;
        for ev in &report.events {
            self.push(VizEvent { t, kind: ev.into() });
        }
        self.push(VizEvent {
            t,
            kind: VizEventKind::Tick {
                pool_size: lb.servers().len(),
                queue_len: lb.queue().len(),
                dropped_total: lb.dropped_count(),
            },
        });
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.events)
    }
}
