#![doc = include_str!("../README.md")]

pub mod error;
pub mod response;
pub mod sink;

#[cfg(feature = "async")]
pub mod async_ext;

pub use error::{RespondError, Result};
pub use response::{ResponseBuilder, NO_PAYLOAD};
pub use sink::{RecordingSink, ResponseSink};
