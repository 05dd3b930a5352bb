pub mod request_timeout;

pub use request_timeout::RequestTimeout;
