use crate::lb::LoadBalancer;
use crate::sim::{SimConfig, SimTime, Simulator};

fn run(seed: u64) -> LoadBalancer {
    let cfg = SimConfig {
        num_servers: 2,
        run_time: 50,
        seed: Some(seed),
        ..SimConfig::default()
    };
    let mut lb = LoadBalancer::from_config(&cfg).expect("build lb");
    assert_eq!(lb.queue().len(), 200);

    let mut sim = Simulator::default();
    sim.run(SimTime(cfg.run_time), &mut lb);
    lb
}

#[test]
fn two_servers_fifty_ticks() {
    let lb = run(5);
    assert_eq!(lb.now(), SimTime(50));

    // 200 个预填充请求远多于 50 tick 内能处理的数量
    assert!(!lb.queue().is_empty());
    assert_eq!(lb.servers().len(), 2);

    for s in lb.servers() {
        match s.current() {
            Some(_) => assert!(s.start_time() <= lb.now()),
            None => assert!(s.is_idle()),
        }
    }

    let stats = lb.stats();
    assert_eq!(stats.dropped, lb.dropped_count());
    assert!(stats.finished + stats.dropped <= stats.processed);
}

#[test]
fn same_seed_is_deterministic() {
    let a = run(99);
    let b = run(99);
    assert_eq!(a.stats(), b.stats());
    assert_eq!(a.queue().len(), b.queue().len());
    let names_a: Vec<_> = a.servers().iter().map(|s| s.name().to_string()).collect();
    let names_b: Vec<_> = b.servers().iter().map(|s| s.name().to_string()).collect();
    assert_eq!(names_a, names_b);
}
