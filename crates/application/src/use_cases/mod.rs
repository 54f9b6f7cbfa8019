mod list_records;
mod resolve_host;
mod update_address;

pub use list_records::ListRecordsUseCase;
pub use resolve_host::ResolveHostUseCase;
pub use update_address::UpdateAddressUseCase;
