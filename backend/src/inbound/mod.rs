//! Inbound adapters translating external requests into domain service
//! calls. HTTP is the only transport.

pub mod http;
