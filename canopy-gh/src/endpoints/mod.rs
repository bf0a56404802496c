//! # Repository Access Operations
//!
//! The four operations the rest of the system consumes, organized by the
//! GitHub resource they touch: user/owner validation and repository
//! contents (directory listings and file retrieval).

pub mod contents;
pub mod users;
