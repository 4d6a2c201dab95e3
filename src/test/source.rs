use crate::lb::{RandomSource, RequestSource};
use crate::net::Zone;
use crate::sim::{ArrivalRate, SimTime};

#[test]
fn random_source_generates_requests_in_fixed_families() {
    let mut src = RandomSource::new(42, ArrivalRate::default());
    for _ in 0..500 {
        let r = src.generate();
        assert_eq!(r.source().zone, Zone::Internal);
        assert_eq!(r.dest().zone, Zone::External);
        assert!(r.source().to_string().starts_with("192.168."));
        assert!(r.dest().to_string().starts_with("10.0."));
        assert!((1..=RandomSource::MAX_PROCESSING_TICKS).contains(&r.processing_ticks()));
    }
}

#[test]
fn same_seed_replays_same_sequence() {
    let mut a = RandomSource::new(7, ArrivalRate::default());
    let mut b = RandomSource::new(7, ArrivalRate::default());
    for t in 0..100 {
        assert_eq!(a.generate(), b.generate());
        assert_eq!(a.poll_arrival(SimTime(t)), b.poll_arrival(SimTime(t)));
    }
}

#[test]
fn arrival_rate_extremes() {
    let never = ArrivalRate {
        numerator: 0,
        denominator: 5,
    };
    let always = ArrivalRate {
        numerator: 3,
        denominator: 3,
    };
    let mut n = RandomSource::new(1, never);
    let mut a = RandomSource::new(1, always);
    for t in 0..50 {
        assert!(n.poll_arrival(SimTime(t)).is_none());
        assert!(a.poll_arrival(SimTime(t)).is_some());
    }
}

#[test]
fn default_arrival_rate_is_roughly_one_in_five() {
    let mut src = RandomSource::new(2024, ArrivalRate::default());
    let hits = (0..10_000)
        .filter(|t| src.poll_arrival(SimTime(*t)).is_some())
        .count();
    assert!((1_700..2_300).contains(&hits), "hits={hits}");
}
