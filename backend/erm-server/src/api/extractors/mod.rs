pub mod api_json;
pub mod request_caller;
