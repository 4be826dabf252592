//! Domain Layer
//!
//! The core of orgcheck: hierarchy validation and organization analysis,
//! without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Employee records and the analysis report
//! - `policies/` - Thresholds that decide what counts as an issue
//! - `services/` - `HierarchyValidator` and `OrganizationAnalyzer`
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Identifiers, not pointers** - Manager links are ids resolved through an index

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
