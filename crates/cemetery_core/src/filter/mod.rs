//! Catalog filtering pipeline.
//!
//! # Responsibility
//! - Narrow a burial-space collection by status, category, priority and text.
//! - Parse form-level filter values (`"all"` sentinel) into typed criteria.
//!
//! # Invariants
//! - Filtering is pure: input order kept, input never mutated.
//! - Criteria combine conjunctively; `None`/`All` means unconstrained.

pub mod spec;

pub use spec::{apply_filters, FilterParseError, FilterSpec, StatusFilter};
