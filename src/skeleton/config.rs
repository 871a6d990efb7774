//! Options that tune skeleton generation.
//!
//! Defaults reproduce the fixed output contract (markers on function-like
//! declarations only, re-parse verification on). The CLI maps its flags onto
//! this struct; library callers construct it directly.

use super::common::DEFAULT_MAX_ERROR_RATIO;

#[derive(Debug, Clone, PartialEq)]
pub struct SkeletonOptions {
    /// Also emit `// Line: N` markers before type and extension declarations.
    pub mark_types: bool,
    /// Re-parse the rendered Swift skeleton and fail if it no longer parses
    /// or its top-level declarations changed.
    pub verify_reparse: bool,
    /// Largest share of source bytes covered by syntax errors that is still
    /// accepted as a best-effort tree.
    pub max_error_ratio: f64,
}

impl Default for SkeletonOptions {
    fn default() -> Self {
        Self {
            mark_types: false,
            verify_reparse: true,
            max_error_ratio: DEFAULT_MAX_ERROR_RATIO,
        }
    }
}

impl SkeletonOptions {
    pub fn with_mark_types(mut self, mark_types: bool) -> Self {
        self.mark_types = mark_types;
        self
    }

    pub fn with_verify_reparse(mut self, verify: bool) -> Self {
        self.verify_reparse = verify;
        self
    }

    /// Clamp into `[0.0, 1.0]`; NaN falls back to the default.
    pub fn with_max_error_ratio(mut self, ratio: f64) -> Self {
        self.max_error_ratio = if ratio.is_nan() {
            DEFAULT_MAX_ERROR_RATIO
        } else {
            ratio.clamp(0.0, 1.0)
        };
        self
    }
}
