//! The coupled pair end to end: records written through the wire protocol or
//! the update use case are visible to the resolution engine, because all
//! three share one store.
use driftdns_application::use_cases::{ResolveHostUseCase, UpdateAddressUseCase};
use driftdns_domain::config::StoreConfig;
use driftdns_domain::{DnsQuery, RecordType};
use driftdns_infrastructure::store::{StoreEngine, StoreServer};
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[tokio::test]
async fn test_update_then_resolve() {
    let engine = Arc::new(StoreEngine::new());
    let update = UpdateAddressUseCase::new(engine.clone());
    let resolve = ResolveHostUseCase::new(engine);

    update
        .execute("home.example.com", IpAddr::from_str("203.0.113.7").unwrap())
        .unwrap();

    let answers = resolve.execute(&DnsQuery::new("home.example.com.", RecordType::A));
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].address, Ipv4Addr::new(203, 0, 113, 7));
    assert_eq!(answers[0].ttl, 60);

    // Re-update moves the answer immediately.
    update
        .execute("home.example.com.", IpAddr::from_str("203.0.113.8").unwrap())
        .unwrap();
    let answers = resolve.execute(&DnsQuery::new("home.example.com", RecordType::A));
    assert_eq!(answers[0].address, Ipv4Addr::new(203, 0, 113, 8));
}

#[tokio::test]
async fn test_wire_written_record_is_resolvable() {
    let engine = Arc::new(StoreEngine::new());
    let resolve = ResolveHostUseCase::new(engine.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let server = StoreServer::new(listener, engine, &StoreConfig::default());
    let addr = server.local_addr().unwrap();
    tokio::spawn(server.run());

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"*3\r\n$3\r\nSET\r\n$11\r\nexample.com\r\n$13\r\n192.168.1.100\r\n")
        .await
        .unwrap();
    let mut reply = [0u8; 5];
    stream.read_exact(&mut reply).await.unwrap();
    assert_eq!(&reply, b"+OK\r\n");

    let answers = resolve.execute(&DnsQuery::new("example.com.", RecordType::A));
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].address, Ipv4Addr::new(192, 168, 1, 100));

    let none = resolve.execute(&DnsQuery::new("example.com.", RecordType::Other(28)));
    assert!(none.is_empty());

    let none = resolve.execute(&DnsQuery::new("missing.example.com.", RecordType::A));
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_ipv6_update_is_stored_but_not_answerable_as_a() {
    // The update endpoint accepts IPv6 (the original did); the A-record
    // engine then has nothing to answer with and degrades to zero answers.
    let engine = Arc::new(StoreEngine::new());
    let update = UpdateAddressUseCase::new(engine.clone());
    let resolve = ResolveHostUseCase::new(engine);

    update
        .execute("v6.example.com", IpAddr::from_str("2001:db8::1").unwrap())
        .unwrap();

    let answers = resolve.execute(&DnsQuery::new("v6.example.com.", RecordType::A));
    assert!(answers.is_empty());
}
