//! # API Module
//!
//! HTTP handlers for the BaseQL server.
//!
//! ## Endpoints
//!
//! - `GET /` - Server identity and endpoint overview
//! - `GET /tools` - Static tool catalog
//! - `POST /call` - Dispatch a tool by name: `{tool, params}`
//! - `POST /rpc` - JSON-RPC forwarding to the MCP handler

pub mod tools;
