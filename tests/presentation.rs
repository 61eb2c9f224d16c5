//! Presentation format output across all implemented record types.

use std::net::{Ipv4Addr, Ipv6Addr};
use zonedata::base::{PresentError, RecordData, Rtype};
use zonedata::rdata::{
    Aaaa, Cname, Dnskey, Hip, Mx, Ns, Ptr, Soa, Srv, Sshfp, Txt,
    ZoneRecordData, A,
};

fn records() -> Vec<(ZoneRecordData, Rtype, &'static str)> {
    vec![
        (
            A::new(Ipv4Addr::new(203, 0, 113, 63)).into(),
            Rtype::A,
            "203.0.113.63",
        ),
        (
            Aaaa::new("2001:db8::63".parse::<Ipv6Addr>().unwrap()).into(),
            Rtype::AAAA,
            "2001:db8::63",
        ),
        (
            Cname::new("www.example.com.").unwrap().into(),
            Rtype::CNAME,
            "www.example.com.",
        ),
        (
            Ns::new("ns1.example.com.").unwrap().into(),
            Rtype::NS,
            "ns1.example.com.",
        ),
        (
            Ptr::new("host.example.com.").unwrap().into(),
            Rtype::PTR,
            "host.example.com.",
        ),
        (
            Mx::new(10, "mail.example.com.").unwrap().into(),
            Rtype::MX,
            "10 mail.example.com.",
        ),
        (
            Soa::new(
                "ns1.example.com.",
                "admin.example.com.",
                2018031900,
                1800,
                900,
                604800,
                86400,
            )
            .unwrap()
            .into(),
            Rtype::SOA,
            "ns1.example.com. admin.example.com. \
             2018031900 1800 900 604800 86400",
        ),
        (
            Txt::new("v=spf1 -all").into(),
            Rtype::TXT,
            "\"v=spf1 -all\"",
        ),
        (
            Srv::new(0, 5, 5060, "sip.example.com.").unwrap().into(),
            Rtype::SRV,
            "0 5 5060 sip.example.com.",
        ),
        (
            Dnskey::new(256, 5, "AQPSKmynfzW4kyBv015MUG2DeIQ3")
                .unwrap()
                .into(),
            Rtype::DNSKEY,
            "256 3 5 AQPSKmynfzW4kyBv015MUG2DeIQ3",
        ),
        (
            Sshfp::new(2, 1, "123456789abcdef67890123456789abcdef67890")
                .unwrap()
                .into(),
            Rtype::SSHFP,
            "2 1 123456789abcdef67890123456789abcdef67890",
        ),
    ]
}

#[test]
fn presents_every_implemented_type() {
    for (data, rtype, expected) in records() {
        assert_eq!(data.rtype(), rtype);
        assert_eq!(data.mnemonic(), rtype.to_mnemonic_str().unwrap());
        let text = data.present().unwrap();
        assert_eq!(text, expected);
        assert_eq!(text, text.trim(), "no surrounding white space");
        // Presentation is pure: repeating it yields identical text.
        assert_eq!(data.present().unwrap(), text);
    }
}

#[test]
fn not_ready_differs_from_misused() {
    let unimplemented = ZoneRecordData::from(Hip::new()).present().unwrap_err();
    assert_eq!(unimplemented, PresentError::Unimplemented(Rtype::HIP));

    let misused = ZoneRecordData::from(Sshfp::default()).present().unwrap_err();
    assert!(matches!(misused, PresentError::MissingField { .. }));
    assert_ne!(unimplemented, misused);
}

#[test]
fn heterogeneous_records_via_the_enum() {
    // The enum lets generic code hold records of differing types and
    // process them uniformly.
    let mut lines = Vec::new();
    for (data, rtype, _) in records() {
        lines.push(format!("{} {}", rtype, data.present().unwrap()));
    }
    assert!(lines.iter().any(|l| l == "MX 10 mail.example.com."));
    assert!(lines
        .iter()
        .any(|l| l == "SSHFP 2 1 123456789abcdef67890123456789abcdef67890"));
}
