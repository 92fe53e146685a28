//! Submission history: persistence and HTTP surface around the scoring engine.
//!
//! The engine stays pure; this module owns attribution, daily quotas, and the
//! repository seam the API binary plugs its storage into.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{OwnerId, QualitySubmission, SubmissionId};
pub use repository::{RepositoryError, SubmissionRecord, SubmissionRepository, SubmissionView};
pub use router::quality_router;
pub use service::{QualityService, QualityServiceError, QuotaPolicy};
