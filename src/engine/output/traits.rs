//! The shape every prompt synthesizer shares.

use crate::catalog::{Domain, Template};
use crate::preprocessing::{Request, StyleFlag};

/// Turns a validated request, and optionally the template chosen for it,
/// into the final prompt text. Deterministic and total: flags or models
/// without a rule contribute nothing.
pub trait Synthesizer: Send + Sync {
    type Style: StyleFlag;

    const DOMAIN: Domain;

    fn synthesize(&self, request: &Request<Self::Style>, template: Option<&Template>) -> String;
}
