use driftdns_application::use_cases::ResolveHostUseCase;
use driftdns_domain::{DnsQuery, RecordType};
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::{rdata::A, RData, Record};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::{debug, error};

/// Bridges hickory's parsed requests onto the resolution engine.
///
/// hickory owns the wire encode/decode; this handler only extracts
/// (qname, qtype), runs the use case, and ships the zero-or-one answers
/// back. A miss or an unsupported type is a normal NOERROR reply with an
/// empty answer section, never a transport-level error.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<ResolveHostUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<ResolveHostUseCase>) -> Self {
        Self { use_case }
    }
}

fn map_record_type(record_type: hickory_proto::rr::RecordType) -> RecordType {
    match record_type {
        hickory_proto::rr::RecordType::A => RecordType::A,
        other => RecordType::Other(u16::from(other)),
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        // The original (pre-lowercasing) query name: lookups are
        // case-sensitive, so the handler must not hand the engine the
        // folded form hickory uses for its own comparisons.
        let query = request_info.query.original();
        let qname = query.name().to_utf8();
        let record_type = map_record_type(query.query_type());

        debug!(
            name = %qname,
            record_type = %record_type,
            client = %request.src().ip(),
            "DNS query received"
        );

        let dns_query = DnsQuery::new(qname, record_type);
        let records = self.use_case.execute(&dns_query);

        let answers: Vec<Record> = records
            .iter()
            .map(|record| {
                Record::from_rdata(query.name().clone(), record.ttl, RData::A(A(record.address)))
            })
            .collect();

        let builder = MessageResponseBuilder::from_message_request(request);
        let mut header = *request.header();
        header.set_authoritative(true);
        header.set_recursion_available(true);
        let response = builder.build(header, answers.iter(), &[], &[], &[]);

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = *request.header();
    header.set_response_code(code);
    header.set_recursion_available(true);
    let response = builder.build(header, &[], &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
