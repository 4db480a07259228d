//! Adapter implementations for report ports.

mod delimited;
mod mailgateway;
pub mod memory;

pub use delimited::DelimitedFileSink;
pub use mailgateway::{MailGatewayNotifier, MailGatewaySettings};
