use driftdns_application::ports::RecordStore;
use driftdns_application::use_cases::{ListRecordsUseCase, ResolveHostUseCase, UpdateAddressUseCase};
use driftdns_infrastructure::dns::TracingQueryObserver;
use driftdns_infrastructure::store::StoreEngine;
use std::sync::Arc;

/// Everything the servers share: one engine, the use cases around it.
pub struct Services {
    pub engine: Arc<StoreEngine>,
    pub resolve_host: Arc<ResolveHostUseCase>,
    pub update_address: Arc<UpdateAddressUseCase>,
    pub list_records: Arc<ListRecordsUseCase>,
}

impl Services {
    pub fn new() -> Self {
        let engine = Arc::new(StoreEngine::new());
        let store: Arc<dyn RecordStore> = engine.clone();

        let resolve_host = Arc::new(
            ResolveHostUseCase::new(store.clone()).with_observer(Arc::new(TracingQueryObserver)),
        );
        let update_address = Arc::new(UpdateAddressUseCase::new(store.clone()));
        let list_records = Arc::new(ListRecordsUseCase::new(store));

        Self {
            engine,
            resolve_host,
            update_address,
            list_records,
        }
    }
}
