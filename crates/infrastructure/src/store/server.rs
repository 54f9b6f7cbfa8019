use super::command::Command;
use super::engine::StoreEngine;
use super::frame::{self, FrameError, FrameLimits};
use super::reply::Reply;
use driftdns_application::ports::RecordStore;
use driftdns_domain::config::StoreConfig;
use driftdns_domain::DomainError;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

/// TCP front-end for the store engine.
///
/// One task per connection; connections share nothing but the engine, whose
/// operations provide all the synchronization there is. Replies go out in
/// arrival order per connection, including for pipelined back-to-back
/// commands.
pub struct StoreServer {
    listener: TcpListener,
    engine: Arc<StoreEngine>,
    limits: FrameLimits,
    read_timeout: Option<Duration>,
}

impl StoreServer {
    pub fn new(listener: TcpListener, engine: Arc<StoreEngine>, config: &StoreConfig) -> Self {
        Self {
            listener,
            engine,
            limits: FrameLimits::from(config),
            read_timeout: (config.read_timeout_secs > 0)
                .then(|| Duration::from_secs(config.read_timeout_secs)),
        }
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub async fn run(self) -> io::Result<()> {
        info!(addr = %self.listener.local_addr()?, "Store server listening");
        loop {
            let (stream, peer) = self.listener.accept().await?;
            let engine = Arc::clone(&self.engine);
            let limits = self.limits;
            let read_timeout = self.read_timeout;
            tokio::spawn(async move {
                if let Err(e) = handle_connection(stream, peer, engine, limits, read_timeout).await
                {
                    debug!(peer = %peer, error = %e, "Connection closed on I/O error");
                }
            });
        }
    }
}

/// Read/parse/dispatch/write loop for one client, until EOF or a fatal
/// framing error. No state outlives an iteration except the buffered reader.
async fn handle_connection(
    stream: TcpStream,
    peer: SocketAddr,
    engine: Arc<StoreEngine>,
    limits: FrameLimits,
    read_timeout: Option<Duration>,
) -> io::Result<()> {
    debug!(peer = %peer, "Client connected");
    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);

    loop {
        let frame = match read_timeout {
            Some(limit) => {
                match tokio::time::timeout(limit, frame::read_command(&mut reader, &limits)).await
                {
                    Ok(result) => result,
                    Err(_) => {
                        warn!(peer = %peer, "Read timed out, dropping connection");
                        break;
                    }
                }
            }
            None => frame::read_command(&mut reader, &limits).await,
        };

        match frame {
            Ok(None) => break,
            Ok(Some(args)) => {
                let reply = dispatch(args, engine.as_ref());
                write_half.write_all(&reply.to_bytes()).await?;
            }
            Err(FrameError::Io(e)) => return Err(e),
            Err(e) => {
                // Fatal to this connection only: one error reply, then close.
                warn!(peer = %peer, error = %e, "Framing error");
                write_half
                    .write_all(&Reply::Error(e.to_string()).to_bytes())
                    .await?;
                break;
            }
        }
    }

    debug!(peer = %peer, "Client disconnected");
    Ok(())
}

fn dispatch(args: Vec<String>, engine: &StoreEngine) -> Reply {
    let command = match Command::parse(args) {
        Ok(command) => command,
        Err(e) => return Reply::Error(e.to_string()),
    };
    // The per-command boundary: a failing handler becomes an error reply,
    // never a dead server.
    match execute(command, engine) {
        Ok(reply) => reply,
        Err(e) => Reply::Error(e.to_string()),
    }
}

fn execute(command: Command, engine: &StoreEngine) -> Result<Reply, DomainError> {
    Ok(match command {
        Command::Set { key, value } => {
            engine.set(&key, &value)?;
            Reply::Ok
        }
        Command::Get { key } => match engine.get(&key)? {
            Some(value) => Reply::Bulk(value),
            None => Reply::NullBulk,
        },
        Command::Del { keys } => Reply::Integer(engine.delete(&keys)? as i64),
        Command::Exists { keys } => Reply::Integer(engine.exists(&keys)? as i64),
        Command::Keys { pattern } => Reply::Array(engine.keys(&pattern)?),
        Command::FlushDb | Command::FlushAll => {
            engine.clear()?;
            Reply::Ok
        }
    })
}
