//! quotix-mcp
//!
//! The data-access facade: one stateless operation per market-data category,
//! each registered as a named MCP tool. Every operation catches provider
//! faults at its own boundary and answers with an error-tagged JSON envelope;
//! nothing propagates to the transport.
#![warn(missing_docs)]

pub mod server;
pub mod tools;

pub use server::QuotixServer;
