use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Upper bound on elements in one command frame.
    #[serde(default = "default_max_command_elements")]
    pub max_command_elements: usize,

    /// Upper bound on a single bulk string, in bytes.
    #[serde(default = "default_max_bulk_len")]
    pub max_bulk_len: usize,

    /// Seconds a connection may sit idle mid-frame before it is dropped.
    /// 0 disables the read timeout.
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_command_elements: default_max_command_elements(),
            max_bulk_len: default_max_bulk_len(),
            read_timeout_secs: default_read_timeout_secs(),
        }
    }
}

fn default_max_command_elements() -> usize {
    128
}

fn default_max_bulk_len() -> usize {
    64 * 1024
}

fn default_read_timeout_secs() -> u64 {
    300
}
