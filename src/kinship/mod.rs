//! Kinship Resolution
//!
//! Chain normalization, resolution to canonical roles, reciprocal lookup,
//! next-step validation and projection into dialect terms.

pub mod engine;
pub mod normalizer;
pub mod projector;
pub mod query;
pub mod resolver;
pub mod reverse;
pub mod step;
pub mod validator;

pub use engine::KinshipEngine;
pub use normalizer::{Normalizer, ReductionRule, RuleError};
pub use projector::{ResolutionResult, TermProjector};
pub use query::{KinshipQuery, StepRejected};
pub use resolver::{ChainResolver, Unresolved, DEFAULT_MAX_DEPTH};
pub use reverse::ReverseResolver;
pub use step::{describe_chain, format_chain, Chain, Gender, ParseGenderError, ParseStepError, RelationStep};
pub use validator::StepValidator;
