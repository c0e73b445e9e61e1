//! Shared data model for the admin frontend and the HTTP backend.
//!
//! Everything in this crate is plain serde-derived data: the JSON envelope
//! every API endpoint answers with, the content models (news articles and
//! listing packages), and the request payloads the frontend posts.

pub mod model;
pub mod requests;
