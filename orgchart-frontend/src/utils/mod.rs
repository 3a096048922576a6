pub mod json_body;
pub mod jwt;

pub use json_body::JsonBody;
