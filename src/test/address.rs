use crate::error::AddressError;
use crate::net::{Address, Zone};

#[test]
fn display_uses_fixed_prefix_families() {
    assert_eq!(Address::internal(12, 34).to_string(), "192.168.12.34");
    assert_eq!(Address::external(200, 0).to_string(), "10.0.200.0");
}

#[test]
fn parse_recognises_both_families() {
    let a: Address = "192.168.7.9".parse().expect("internal");
    assert_eq!(a.zone, Zone::Internal);
    assert_eq!(a.third_octet(), 7);
    assert_eq!(a.fourth, 9);

    let b: Address = "10.0.255.1".parse().expect("external");
    assert_eq!(b, Address::external(255, 1));
}

#[test]
fn parse_rejects_other_families() {
    assert_eq!(
        "172.16.1.1".parse::<Address>(),
        Err(AddressError::UnknownFamily("172.16.1.1".to_string()))
    );
}

#[test]
fn parse_rejects_malformed_octets() {
    for bad in ["192.168.1", "10.0.x.1", "10.0.256.1", "192.168.1.2.3"] {
        assert_eq!(
            bad.parse::<Address>(),
            Err(AddressError::MalformedOctet(bad.to_string())),
            "{bad}"
        );
    }
}
