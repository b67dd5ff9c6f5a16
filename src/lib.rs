//! Minimal to-do list manager.
//!
//! Two parallel interfaces over one SQLite-backed `todos` table: a
//! server-rendered web page and an MCP tool-call endpoint speaking
//! JSON-RPC 2.0 over `POST /mcp`, usable by any MCP-aware AI agent.

pub mod config;
pub mod handlers;
pub mod protocol;
pub mod registry;
pub mod server;
pub mod store;
pub mod web;
