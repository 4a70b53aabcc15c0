pub mod email_validator;
pub mod http;
