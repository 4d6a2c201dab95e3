use crate::net::{Address, Firewall, FirewallMode, Request, Server};
use crate::sim::SimTime;

fn req(src_third: u8, dst_third: u8) -> Request {
    Request::new(
        Address::internal(src_third, 1),
        Address::external(dst_third, 1),
        3,
    )
}

#[test]
fn destination_only_checks_destination_third_octet() {
    let fw = Firewall::default();
    assert_eq!(fw.mode(), FirewallMode::DestinationOnly);
    assert_eq!(fw.threshold(), 200);

    assert!(fw.should_drop(&req(0, 200)));
    assert!(fw.should_drop(&req(0, 255)));
    assert!(!fw.should_drop(&req(0, 199)));
    // 源地址不参与判断
    assert!(!fw.should_drop(&req(250, 10)));
}

#[test]
fn source_or_destination_checks_both() {
    let fw = Firewall::new(FirewallMode::SourceOrDestination, 200);
    assert!(fw.should_drop(&req(250, 10)));
    assert!(fw.should_drop(&req(10, 250)));
    assert!(!fw.should_drop(&req(199, 199)));
}

#[test]
fn apply_clears_matching_server() {
    let fw = Firewall::default();
    let mut s = Server::new("Server_0");
    s.assign(req(0, 220), SimTime(0));

    assert_eq!(fw.apply(&mut s), Some(req(0, 220)));
    assert!(s.is_idle());
}

#[test]
fn apply_keeps_allowed_request() {
    let fw = Firewall::default();
    let mut s = Server::new("Server_0");
    s.assign(req(0, 12), SimTime(0));

    assert_eq!(fw.apply(&mut s), None);
    assert_eq!(s.current(), Some(&req(0, 12)));
}

#[test]
fn apply_twice_is_noop_on_empty_server() {
    let fw = Firewall::default();
    let mut s = Server::new("Server_0");
    s.assign(req(0, 201), SimTime(0));

    assert!(fw.apply(&mut s).is_some());
    assert!(fw.apply(&mut s).is_none());
    assert!(fw.apply(&mut Server::new("Server_1")).is_none());
}
