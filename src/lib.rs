//! Supafix - one-shot Supabase SQL admin dispatcher
//!
//! This crate applies a built-in SQL fix to a hosted Supabase project by
//! posting the statement to the PostgREST RPC endpoint:
//! - Credential/target configuration with validation
//! - Single authenticated POST to `/rest/v1/rpc/exec_sql`
//! - Raw status/body passthrough, no retries

pub mod config;
pub mod fixes;
pub mod rpc;
