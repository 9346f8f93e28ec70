pub mod metrics;
pub mod request_id;

pub use metrics::metrics_middleware;
pub use request_id::{is_valid_uuid_v4, request_id_middleware, RequestId, REQUEST_ID_HEADER};
