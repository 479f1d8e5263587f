//! "Coming soon" substitution for unfinished guides.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Fragment published in place of a disabled guide.
pub const COMING_SOON_HTML: &str = "<div class=\"coming-soon\">\n<h2>Coming Soon</h2>\n<p>This guide is being written and will be available soon.</p>\n</div>";

/// Publication status recorded in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuideStatus {
    Available,
    ComingSoon,
}

/// Set of guide slugs that are published as "coming soon".
#[derive(Debug, Default, Clone)]
pub struct DisabledPolicy {
    slugs: FxHashSet<String>,
}

impl DisabledPolicy {
    pub fn new<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            slugs: slugs.into_iter().map(Into::into).collect(),
        }
    }

    #[inline]
    pub fn is_disabled(&self, slug: &str) -> bool {
        self.slugs.contains(slug)
    }

    pub fn status(&self, slug: &str) -> GuideStatus {
        if self.is_disabled(slug) {
            GuideStatus::ComingSoon
        } else {
            GuideStatus::Available
        }
    }

    /// Fixed placeholder for a disabled slug, `None` when the guide should
    /// be converted.
    pub fn placeholder(&self, slug: &str) -> Option<&'static str> {
        self.is_disabled(slug).then_some(COMING_SOON_HTML)
    }

    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }
}
