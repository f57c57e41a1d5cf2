//! Security Module
//!
//! - Request Validation
//! - Security headers and CORS

pub mod middleware;
pub mod validation;

pub use middleware::{cors_layer, security_headers_middleware};
pub use validation::{RequestValidator, ValidationError, ValidationResult};
