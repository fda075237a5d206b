//! Request sanitization and content negotiation in front of a data plane agent.
//!
//! Everything here is a pure function over its inputs and over configuration
//! compiled once at startup ([`config::GateConfig::compile`]); no IO happens
//! on the request path.

pub mod config;
pub mod logging;

pub mod agent;
pub mod binding;
pub mod error;
pub mod gate;
pub mod media_type;
pub mod negotiate;
pub mod sanitize;

pub use error::{GateError, MediaTypeError, RuleError};
pub use gate::Gate;
