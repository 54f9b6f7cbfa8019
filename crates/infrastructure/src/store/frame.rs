use driftdns_domain::config::StoreConfig;
use std::io;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

// Header lines carry only a sigil and a decimal count.
const MAX_HEADER_LINE_LEN: usize = 32;

/// Errors while reading one command frame. Every variant except `Io` is a
/// protocol violation, and all of them are fatal to the connection: the
/// server emits one error reply and closes.
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Protocol error: expected array")]
    ExpectedArray,

    #[error("Protocol error: invalid array header")]
    BadArrayHeader,

    #[error("Protocol error: expected bulk string")]
    ExpectedBulkString,

    #[error("Protocol error: invalid bulk length")]
    BadBulkLength,

    #[error("Protocol error: bulk string not terminated by CRLF")]
    MissingTerminator,

    #[error("Protocol error: unexpected end of stream")]
    UnexpectedEof,

    #[error("Protocol error: command exceeds {0} elements")]
    TooManyElements(usize),

    #[error("Protocol error: bulk string exceeds {0} bytes")]
    BulkTooLarge(usize),

    #[error("Protocol error: argument is not valid UTF-8")]
    InvalidUtf8,
}

/// Caps on a single frame, taken from [`StoreConfig`].
#[derive(Debug, Clone, Copy)]
pub struct FrameLimits {
    pub max_elements: usize,
    pub max_bulk_len: usize,
}

impl From<&StoreConfig> for FrameLimits {
    fn from(config: &StoreConfig) -> Self {
        Self {
            max_elements: config.max_command_elements,
            max_bulk_len: config.max_bulk_len,
        }
    }
}

/// Read one `*N` array-of-bulk-strings frame.
///
/// `Ok(None)` is a clean EOF at a frame boundary. EOF anywhere inside a
/// frame, or a declared length that does not match the bytes on the wire,
/// is a [`FrameError`].
pub async fn read_command<R>(
    reader: &mut R,
    limits: &FrameLimits,
) -> Result<Option<Vec<String>>, FrameError>
where
    R: AsyncBufRead + Unpin,
{
    let header = match read_line(reader).await? {
        Some(line) => line,
        None => return Ok(None),
    };

    let count = match header.strip_prefix('*') {
        Some(count) => count
            .parse::<usize>()
            .map_err(|_| FrameError::BadArrayHeader)?,
        None => return Err(FrameError::ExpectedArray),
    };
    if count > limits.max_elements {
        return Err(FrameError::TooManyElements(limits.max_elements));
    }

    let mut args = Vec::with_capacity(count);
    for _ in 0..count {
        args.push(read_bulk_string(reader, limits).await?);
    }
    Ok(Some(args))
}

async fn read_bulk_string<R>(reader: &mut R, limits: &FrameLimits) -> Result<String, FrameError>
where
    R: AsyncBufRead + Unpin,
{
    let header = read_line(reader).await?.ok_or(FrameError::UnexpectedEof)?;
    let len = header
        .strip_prefix('$')
        .ok_or(FrameError::ExpectedBulkString)?
        .parse::<usize>()
        .map_err(|_| FrameError::BadBulkLength)?;
    if len > limits.max_bulk_len {
        return Err(FrameError::BulkTooLarge(limits.max_bulk_len));
    }

    let mut buf = vec![0u8; len + 2];
    reader.read_exact(&mut buf).await.map_err(|e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            FrameError::UnexpectedEof
        } else {
            FrameError::Io(e)
        }
    })?;
    if &buf[len..] != b"\r\n" {
        return Err(FrameError::MissingTerminator);
    }
    buf.truncate(len);
    String::from_utf8(buf).map_err(|_| FrameError::InvalidUtf8)
}

/// One CRLF-terminated header line, without the terminator.
/// `Ok(None)` only when the stream ends before the first byte.
async fn read_line<R>(reader: &mut R) -> Result<Option<String>, FrameError>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    // The cap bounds how much a hostile client can make us buffer while
    // hunting for the LF.
    let mut limited = reader.take(MAX_HEADER_LINE_LEN as u64);
    let n = limited.read_until(b'\n', &mut buf).await?;
    if n == 0 {
        return Ok(None);
    }
    if !buf.ends_with(b"\r\n") {
        return Err(if n == MAX_HEADER_LINE_LEN {
            FrameError::BadArrayHeader
        } else if buf.ends_with(b"\n") {
            FrameError::MissingTerminator
        } else {
            FrameError::UnexpectedEof
        });
    }
    buf.truncate(buf.len() - 2);
    String::from_utf8(buf)
        .map(Some)
        .map_err(|_| FrameError::InvalidUtf8)
}
