//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain is independent of HTTP; the transport layer in
//! `core::transport` maps requests onto them.

pub mod blogs;
pub mod comments;
