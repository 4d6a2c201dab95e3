use crate::lb::LoadBalancer;
use crate::sim::{SimConfig, SimTime, Simulator};
use crate::viz::{VizEvent, VizEventKind, VizLogger};
use std::ops::ControlFlow;

#[test]
fn viz_log_starts_with_meta_and_ends_ticks_with_snapshot() {
    let cfg = SimConfig {
        num_servers: 2,
        run_time: 5,
        prefill_per_server: 3,
        seed: Some(11),
        ..SimConfig::default()
    };
    let mut lb = LoadBalancer::from_config(&cfg).expect("build lb");
    let mut viz = VizLogger::default();
    viz.record_meta(&cfg, &lb);

    let mut sim = Simulator::default();
    sim.run_until(SimTime(cfg.run_time), &mut lb, |lb, report| {
        viz.record_tick(lb, report);
        ControlFlow::Continue(())
    });

    assert_eq!(
        viz.events[0].kind,
        VizEventKind::Meta {
            target_size: 2,
            run_time: 5,
            queue_len: 6,
        }
    );
    let snapshots = viz
        .events
        .iter()
        .filter(|e| matches!(e.kind, VizEventKind::Tick { .. }))
        .count();
    assert_eq!(snapshots, 5);
    assert!(matches!(
        viz.events.last().map(|e| &e.kind),
        Some(VizEventKind::Tick { .. })
    ));
}

#[test]
fn viz_events_serialize_with_flat_kind_tag() {
    let mut viz = VizLogger::default();
    viz.push(VizEvent {
        t: 3,
        kind: VizEventKind::Removed {
            server: "Server_1".to_string(),
        },
    });
    let raw = viz.to_json().expect("serialize");
    let v: serde_json::Value = serde_json::from_str(&raw).expect("parse");
    assert_eq!(v[0]["t"], 3);
    assert_eq!(v[0]["kind"], "removed");
    assert_eq!(v[0]["server"], "Server_1");
}
