//! LMS Core
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - dto: Remote API payloads and their conversion into domain types
//! - repository: Key-value storage abstractions and the leads store
//! - leads: Lead form mutations and the table view pipeline
//! - theme: Persisted shell settings

pub mod domain;
pub mod dto;
pub mod repository;
pub mod leads;
pub mod theme;
pub mod certificate;
