//! 负载均衡器
//!
//! 持有服务器池与全局队列，每个 tick 按固定顺序执行：
//! 过滤 → 空闲填充 → 完成检查（完成后可立即补充）→ 标记移除，
//! 扫描结束后一次性重建池、按积压扩容、注入新到达请求，最后时间 +1。

use super::event::{LbEvent, TickReport};
use super::source::{RandomSource, RequestSource};
use super::stats::LbStats;
use crate::error::ConfigError;
use crate::net::{Firewall, Request, Server};
use crate::queue::RequestQueue;
use crate::sim::{SimConfig, SimTime, World};
use tracing::{debug, info, trace};

pub struct LoadBalancer {
    now: SimTime,
    servers: Vec<Server>,
    queue: RequestQueue,
    target_size: usize,
    firewall: Firewall,
    source: Box<dyn RequestSource>,
    stats: LbStats,
}

impl std::fmt::Debug for LoadBalancer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadBalancer")
            .field("now", &self.now)
            .field("servers", &self.servers)
            .field("queue_len", &self.queue.len())
            .field("target_size", &self.target_size)
            .field("firewall", &self.firewall)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

fn server_name(ordinal: usize) -> String {
    format!("Server_{ordinal}")
}

/// 调用方已确认队列非空
fn take_next(queue: &mut RequestQueue) -> Request {
    queue
        .dequeue_front()
        .expect("request queue checked non-empty before dequeue")
}

impl LoadBalancer {
    /// 创建 `target_size` 台空闲服务器（`Server_0` ..）
    pub fn new(target_size: usize, firewall: Firewall, source: Box<dyn RequestSource>) -> Self {
        let servers = (0..target_size).map(|i| Server::new(server_name(i))).collect();
        Self {
            now: SimTime::ZERO,
            servers,
            queue: RequestQueue::new(),
            target_size,
            firewall,
            source,
            stats: LbStats::default(),
        }
    }

    /// 按配置构建随机来源并预填充队列
    pub fn from_config(cfg: &SimConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let seed = cfg.seed.unwrap_or_else(rand::random);
        info!(
            seed,
            num_servers = cfg.num_servers,
            run_time = cfg.run_time,
            "构建负载均衡器"
        );

        let firewall = Firewall::new(cfg.firewall.mode, cfg.firewall.threshold);
        let source = RandomSource::new(seed, cfg.arrival);
        let mut lb = Self::new(cfg.num_servers, firewall, Box::new(source));
        lb.prefill(cfg.prefill_count());
        Ok(lb)
    }

    /// 直接入队，不推进时间
    pub fn enqueue(&mut self, request: Request) {
        self.queue.enqueue(request);
    }

    /// 从来源生成 `count` 个请求入队，不推进时间
    pub fn prefill(&mut self, count: usize) {
        for _ in 0..count {
            let r = self.source.generate();
            self.queue.enqueue(r);
        }
        debug!(count, queue_len = self.queue.len(), "预填充队列");
    }

    pub fn now(&self) -> SimTime {
        self.now
    }

    pub fn servers(&self) -> &[Server] {
        &self.servers
    }

    pub fn queue(&self) -> &RequestQueue {
        &self.queue
    }

    pub fn target_size(&self) -> usize {
        self.target_size
    }

    pub fn firewall(&self) -> &Firewall {
        &self.firewall
    }

    pub fn dropped_count(&self) -> u64 {
        self.stats.dropped
    }

    pub fn stats(&self) -> &LbStats {
        &self.stats
    }

    /// 执行一个完整 tick
    #[tracing::instrument(skip(self), fields(now = self.now.0))]
    pub fn tick(&mut self) -> TickReport {
        let now = self.now;
        let mut events = Vec::new();
        let mut marked = Vec::with_capacity(self.servers.len());

        for server in self.servers.iter_mut() {
            if let Some(request) = self.firewall.apply(server) {
                self.stats.dropped += 1;
                debug!(server = server.name(), dest = %request.dest(), "丢弃请求");
                events.push(LbEvent::Dropped {
                    server: server.name().to_string(),
                    request,
                });
            }

            if server.is_idle() && !self.queue.is_empty() {
                let request = take_next(&mut self.queue);
                server.assign(request, now);
                self.stats.processed += 1;
                debug!(server = server.name(), "分配请求");
                events.push(LbEvent::Processed {
                    server: server.name().to_string(),
                    request,
                });
            }

            if server.is_request_done(now) {
                if let Some(request) = server.clear() {
                    self.stats.finished += 1;
                    debug!(server = server.name(), "请求完成");
                    events.push(LbEvent::Finished {
                        server: server.name().to_string(),
                        request,
                    });
                }
                if !self.queue.is_empty() {
                    let request = take_next(&mut self.queue);
                    server.assign(request, now);
                    self.stats.processed += 1;
                    debug!(server = server.name(), "完成后立即补充");
                    events.push(LbEvent::Processed {
                        server: server.name().to_string(),
                        request,
                    });
                }
            }

            let remove = server.is_idle() && self.queue.is_empty();
            trace!(
                server = server.name(),
                idle = server.is_idle(),
                remove,
                "扫描服务器"
            );
            marked.push(remove);
        }

        self.remove_marked(&marked, &mut events);
        self.grow_if_backlogged(&mut events);

        if let Some(request) = self.source.poll_arrival(now) {
            self.queue.enqueue(request);
            self.stats.arrivals += 1;
            events.push(LbEvent::Arrived { request });
        }

        self.now = now.next();
        debug!(
            pool = self.servers.len(),
            queue_len = self.queue.len(),
            events = events.len(),
            "tick 结束"
        );
        TickReport { at: now, events }
    }

    /// 按扫描时的标记一次性重建服务器池（保持剩余服务器的相对顺序）
    fn remove_marked(&mut self, marked: &[bool], events: &mut Vec<LbEvent>) {
        if !marked.contains(&true) {
            return;
        }
        let pool = std::mem::take(&mut self.servers);
        for (server, &remove) in pool.into_iter().zip(marked) {
            if remove {
                self.stats.removed += 1;
                debug!(server = server.name(), "移除空闲服务器");
                events.push(LbEvent::Removed {
                    server: server.name().to_string(),
                });
            } else {
                self.servers.push(server);
            }
        }
    }

    /// 池规模低于目标且仍有积压时，追加一台服务器
    fn grow_if_backlogged(&mut self, events: &mut Vec<LbEvent>) {
        if self.servers.len() >= self.target_size || self.queue.is_empty() {
            return;
        }
        let name = server_name(self.servers.len());
        debug!(server = %name, queue_len = self.queue.len(), "扩容");
        self.stats.added += 1;
        events.push(LbEvent::Added {
            server: name.clone(),
        });
        self.servers.push(Server::new(name));
    }
}

impl World for LoadBalancer {
    type Report = TickReport;

    fn now(&self) -> SimTime {
        self.now
    }

    fn step(&mut self) -> TickReport {
        self.tick()
    }
}
