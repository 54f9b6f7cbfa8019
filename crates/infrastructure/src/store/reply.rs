/// Reply tokens the server can emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// `+OK\r\n`
    Ok,
    /// `:<n>\r\n`
    Integer(i64),
    /// `$<len>\r\n<bytes>\r\n`
    Bulk(String),
    /// `$-1\r\n` — the sole "not found" signal.
    NullBulk,
    /// `*<n>\r\n` followed by n bulk strings.
    Array(Vec<String>),
    /// `-ERR <message>\r\n`
    Error(String),
}

impl Reply {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.write_to(&mut buf);
        buf
    }

    fn write_to(&self, buf: &mut Vec<u8>) {
        match self {
            Reply::Ok => buf.extend_from_slice(b"+OK\r\n"),
            Reply::Integer(n) => {
                buf.extend_from_slice(format!(":{}\r\n", n).as_bytes());
            }
            Reply::Bulk(value) => write_bulk(buf, value),
            Reply::NullBulk => buf.extend_from_slice(b"$-1\r\n"),
            Reply::Array(items) => {
                buf.extend_from_slice(format!("*{}\r\n", items.len()).as_bytes());
                for item in items {
                    write_bulk(buf, item);
                }
            }
            Reply::Error(message) => {
                buf.extend_from_slice(format!("-ERR {}\r\n", message).as_bytes());
            }
        }
    }
}

fn write_bulk(buf: &mut Vec<u8>, value: &str) {
    buf.extend_from_slice(format!("${}\r\n", value.len()).as_bytes());
    buf.extend_from_slice(value.as_bytes());
    buf.extend_from_slice(b"\r\n");
}
