//! Wire-level tests: a real server on an ephemeral port, raw bytes in, raw
//! bytes out.
use driftdns_domain::config::StoreConfig;
use driftdns_infrastructure::store::{StoreEngine, StoreServer};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

async fn start_server() -> SocketAddr {
    let engine = Arc::new(StoreEngine::new());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let server = StoreServer::new(listener, engine, &StoreConfig::default());
    let addr = server.local_addr().unwrap();
    tokio::spawn(server.run());
    addr
}

async fn connect(addr: SocketAddr) -> TcpStream {
    TcpStream::connect(addr).await.unwrap()
}

/// Write one command, read exactly the expected reply bytes.
async fn roundtrip(stream: &mut TcpStream, command: &[u8], expected: &[u8]) {
    stream.write_all(command).await.unwrap();
    let mut buf = vec![0u8; expected.len()];
    stream.read_exact(&mut buf).await.unwrap();
    assert_eq!(
        buf,
        expected,
        "got {:?}, want {:?}",
        String::from_utf8_lossy(&buf),
        String::from_utf8_lossy(expected)
    );
}

fn encode(args: &[&str]) -> Vec<u8> {
    let mut out = format!("*{}\r\n", args.len()).into_bytes();
    for arg in args {
        out.extend_from_slice(format!("${}\r\n{}\r\n", arg.len(), arg).as_bytes());
    }
    out
}

#[tokio::test]
async fn test_get_on_empty_store_is_null_bulk() {
    let addr = start_server().await;
    let mut stream = connect(addr).await;

    roundtrip(&mut stream, b"*2\r\n$3\r\nGET\r\n$3\r\nfoo\r\n", b"$-1\r\n").await;
}

#[tokio::test]
async fn test_set_then_get() {
    let addr = start_server().await;
    let mut stream = connect(addr).await;

    roundtrip(
        &mut stream,
        b"*3\r\n$3\r\nSET\r\n$3\r\nfoo\r\n$3\r\nbar\r\n",
        b"+OK\r\n",
    )
    .await;
    roundtrip(&mut stream, b"*2\r\n$3\r\nGET\r\n$3\r\nfoo\r\n", b"$3\r\nbar\r\n").await;
}

#[tokio::test]
async fn test_del_exists_lifecycle() {
    let addr = start_server().await;
    let mut stream = connect(addr).await;

    roundtrip(&mut stream, &encode(&["SET", "foo", "bar"]), b"+OK\r\n").await;
    roundtrip(&mut stream, &encode(&["EXISTS", "foo", "foo", "nope"]), b":2\r\n").await;
    roundtrip(&mut stream, &encode(&["DEL", "foo", "nope"]), b":1\r\n").await;
    roundtrip(&mut stream, &encode(&["EXISTS", "foo"]), b":0\r\n").await;
    roundtrip(&mut stream, &encode(&["GET", "foo"]), b"$-1\r\n").await;
}

#[tokio::test]
async fn test_flushdb_and_flushall_clear() {
    let addr = start_server().await;
    let mut stream = connect(addr).await;

    roundtrip(&mut stream, &encode(&["SET", "a", "1"]), b"+OK\r\n").await;
    roundtrip(&mut stream, &encode(&["SET", "b", "2"]), b"+OK\r\n").await;
    roundtrip(&mut stream, &encode(&["FLUSHDB"]), b"+OK\r\n").await;
    roundtrip(&mut stream, &encode(&["GET", "a"]), b"$-1\r\n").await;

    roundtrip(&mut stream, &encode(&["SET", "a", "1"]), b"+OK\r\n").await;
    roundtrip(&mut stream, &encode(&["FLUSHALL"]), b"+OK\r\n").await;
    roundtrip(&mut stream, &encode(&["GET", "a"]), b"$-1\r\n").await;
}

#[tokio::test]
async fn test_keys_glob_over_the_wire() {
    let addr = start_server().await;
    let mut stream = connect(addr).await;

    roundtrip(&mut stream, &encode(&["SET", "foo", "1"]), b"+OK\r\n").await;
    roundtrip(&mut stream, &encode(&["SET", "bar", "2"]), b"+OK\r\n").await;
    roundtrip(&mut stream, &encode(&["KEYS", "f*"]), b"*1\r\n$3\r\nfoo\r\n").await;
    roundtrip(&mut stream, &encode(&["KEYS", "baz*"]), b"*0\r\n").await;
}

#[tokio::test]
async fn test_trailing_dot_addresses_same_record() {
    let addr = start_server().await;
    let mut stream = connect(addr).await;

    roundtrip(
        &mut stream,
        &encode(&["SET", "x.example.", "192.0.2.1"]),
        b"+OK\r\n",
    )
    .await;
    roundtrip(
        &mut stream,
        &encode(&["GET", "x.example"]),
        b"$9\r\n192.0.2.1\r\n",
    )
    .await;
}

#[tokio::test]
async fn test_unknown_command_keeps_connection_usable() {
    let addr = start_server().await;
    let mut stream = connect(addr).await;

    roundtrip(
        &mut stream,
        b"*1\r\n$4\r\nPING\r\n",
        b"-ERR unknown command 'PING'\r\n",
    )
    .await;
    // Connection survives and the next command works.
    roundtrip(&mut stream, &encode(&["SET", "foo", "bar"]), b"+OK\r\n").await;
}

#[tokio::test]
async fn test_wrong_arity_is_nonfatal() {
    let addr = start_server().await;
    let mut stream = connect(addr).await;

    roundtrip(
        &mut stream,
        &encode(&["SET", "foo"]),
        b"-ERR wrong number of arguments for 'set' command\r\n",
    )
    .await;
    roundtrip(&mut stream, &encode(&["GET", "foo"]), b"$-1\r\n").await;
}

#[tokio::test]
async fn test_malformed_frame_closes_only_that_connection() {
    let addr = start_server().await;
    let mut victim = connect(addr).await;
    let mut bystander = connect(addr).await;

    roundtrip(&mut bystander, &encode(&["SET", "foo", "bar"]), b"+OK\r\n").await;

    // Non-numeric bulk length: error reply, then close.
    roundtrip(
        &mut victim,
        b"*2\r\n$abc\r\n",
        b"-ERR Protocol error: invalid bulk length\r\n",
    )
    .await;
    let mut buf = [0u8; 1];
    assert_eq!(victim.read(&mut buf).await.unwrap(), 0, "expected EOF");

    // The other connection is untouched.
    roundtrip(&mut bystander, &encode(&["GET", "foo"]), b"$3\r\nbar\r\n").await;
}

#[tokio::test]
async fn test_non_array_top_level_token_is_fatal() {
    let addr = start_server().await;
    let mut stream = connect(addr).await;

    roundtrip(
        &mut stream,
        b"$3\r\nfoo\r\n",
        b"-ERR Protocol error: expected array\r\n",
    )
    .await;
    let mut buf = [0u8; 1];
    assert_eq!(stream.read(&mut buf).await.unwrap(), 0, "expected EOF");
}

#[tokio::test]
async fn test_pipelined_commands_replied_in_order() {
    let addr = start_server().await;
    let mut stream = connect(addr).await;

    let mut pipeline = Vec::new();
    pipeline.extend_from_slice(&encode(&["SET", "foo", "bar"]));
    pipeline.extend_from_slice(&encode(&["GET", "foo"]));
    pipeline.extend_from_slice(&encode(&["EXISTS", "foo"]));
    pipeline.extend_from_slice(&encode(&["DEL", "foo"]));
    stream.write_all(&pipeline).await.unwrap();

    let expected = b"+OK\r\n$3\r\nbar\r\n:1\r\n:1\r\n";
    let mut buf = vec![0u8; expected.len()];
    stream.read_exact(&mut buf).await.unwrap();
    assert_eq!(buf, expected);
}

#[tokio::test]
async fn test_concurrent_connections_share_the_store() {
    let addr = start_server().await;

    let mut writers = Vec::new();
    for i in 0..8 {
        writers.push(tokio::spawn(async move {
            let mut stream = connect(addr).await;
            let key = format!("host{}", i);
            let value = format!("10.0.0.{}", i);
            roundtrip(&mut stream, &encode(&["SET", &key, &value]), b"+OK\r\n").await;
        }));
    }
    for writer in writers {
        writer.await.unwrap();
    }

    let mut stream = connect(addr).await;
    for i in 0..8 {
        let key = format!("host{}", i);
        let value = format!("10.0.0.{}", i);
        let expected = format!("${}\r\n{}\r\n", value.len(), value).into_bytes();
        roundtrip(&mut stream, &encode(&["GET", &key]), &expected).await;
    }
}
