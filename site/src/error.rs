//! Errors raised while turning content into a renderable homepage.
//!
//! Rendering itself never fails; everything that can go wrong is caught
//! when [`crate::Homepage::from_content`] checks the content it was given.

use thiserror::Error;

use crate::types::Section;

/// Problems found in homepage content or motion settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    /// A motion override sets the per-card stride to zero, which would
    /// start every card at the same moment.
    #[error("{section} motion stride must be greater than zero")]
    ZeroStride {
        /// Section the override belongs to
        section: Section,
    },

    /// A record is missing one of its required fields.
    #[error("{section} entry #{index} is missing its {field}")]
    EmptyField {
        /// Section the record belongs to
        section: Section,
        /// Position of the record in its collection (0-based)
        index: usize,
        /// Name of the empty field
        field: &'static str,
    },
}
