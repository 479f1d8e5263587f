//! Emphasis substitution.
//!
//! Four passes in fixed order: `**`, `__` (strong), then `*`, `_` (em).
//! Each pass scans left to right; an opener pairs with the nearest closer
//! that leaves at least one unit of content. Content may hold markup and
//! line breaks, and is not rescanned by the same pass. Unmatched markers
//! stay literal.
//!
//! No delimiter-run rules apply: `snake_case_name` emphasizes `case`, and
//! `***a***` becomes `<strong><em>a</strong></em>`.

use std::borrow::Cow;

use super::Unit;

/// One substitution pass.
struct Pass {
    marker: char,
    width: usize,
    open: &'static str,
    close: &'static str,
}

const PASSES: [Pass; 4] = [
    Pass {
        marker: '*',
        width: 2,
        open: "<strong>",
        close: "</strong>",
    },
    Pass {
        marker: '_',
        width: 2,
        open: "<strong>",
        close: "</strong>",
    },
    Pass {
        marker: '*',
        width: 1,
        open: "<em>",
        close: "</em>",
    },
    Pass {
        marker: '_',
        width: 1,
        open: "<em>",
        close: "</em>",
    },
];

impl Pass {
    #[inline]
    fn delimiter_at(&self, units: &[Unit], pos: usize) -> bool {
        units
            .get(pos..pos + self.width)
            .is_some_and(|run| run.iter().all(|u| u.is_char(self.marker)))
    }

    fn find_closer(&self, units: &[Unit], open: usize) -> Option<usize> {
        let first = open + self.width + 1;
        let last = units.len().checked_sub(self.width)?;
        (first..=last).find(|&pos| self.delimiter_at(units, pos))
    }

    fn apply(&self, units: Vec<Unit>) -> Vec<Unit> {
        if !units.iter().any(|u| u.is_char(self.marker)) {
            return units;
        }

        let mut out = Vec::with_capacity(units.len());
        let mut i = 0;
        while i < units.len() {
            if self.delimiter_at(&units, i) {
                if let Some(close) = self.find_closer(&units, i) {
                    out.push(Unit::Markup(Cow::Borrowed(self.open)));
                    out.extend_from_slice(&units[i + self.width..close]);
                    out.push(Unit::Markup(Cow::Borrowed(self.close)));
                    i = close + self.width;
                    continue;
                }
            }
            out.push(units[i].clone());
            i += 1;
        }
        out
    }
}

/// Apply strong and em substitution to the open characters.
pub(super) fn apply_emphasis(units: Vec<Unit>) -> Vec<Unit> {
    PASSES.iter().fold(units, |units, pass| pass.apply(units))
}
