mod query_observer;
mod record_store;

pub use query_observer::{NullQueryObserver, QueryObserver};
pub use record_store::RecordStore;
