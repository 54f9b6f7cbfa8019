use driftdns_application::use_cases::{ListRecordsUseCase, UpdateAddressUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub update_address: Arc<UpdateAddressUseCase>,
    pub list_records: Arc<ListRecordsUseCase>,
}
