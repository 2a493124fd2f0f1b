//! Visibility and dirty gate.
//!
//! Renders are expensive relative to document writes, so most writes skip.
//! A render happens only for a forced re-render (dirty marker), a brand new
//! variant, or an upward visibility crossing. A downward crossing does not
//! re-render: the stale artifact stays published until the next qualifying
//! write, which is deliberate policy.

use dendrite_core::model::Variant;

/// Outcome of gating one variant write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Render and publish; clear the dirty marker afterwards when set.
    Render {
        /// Whether a dirty marker triggered this render and must be cleared
        /// once publication completes.
        clear_dirty: bool,
    },
    /// Nothing to do for this write.
    Skip,
}

/// Decide whether a before/after variant pair warrants a render.
#[must_use]
pub fn evaluate(before: Option<&Variant>, after: Option<&Variant>, threshold: f64) -> Decision {
    let Some(after) = after else {
        // Deleted variants are never re-rendered.
        return Decision::Skip;
    };
    if after.dirty {
        return Decision::Render { clear_dirty: true };
    }
    let Some(before) = before else {
        return Decision::Render { clear_dirty: false };
    };

    let crossed_upward = before.visibility.is_some_and(|v| v < threshold)
        && after.visibility.is_some_and(|v| v >= threshold);
    if crossed_upward {
        Decision::Render { clear_dirty: false }
    } else {
        Decision::Skip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 0.5;

    fn variant(visibility: Option<f64>, dirty: bool) -> Variant {
        Variant {
            visibility,
            dirty,
            ..Variant::default()
        }
    }

    #[test]
    fn test_deleted_variant_skips() {
        let before = variant(Some(0.9), false);
        assert_eq!(evaluate(Some(&before), None, THRESHOLD), Decision::Skip);
        assert_eq!(evaluate(None, None, THRESHOLD), Decision::Skip);
    }

    #[test]
    fn test_dirty_marker_forces_render_and_clear() {
        let before = variant(Some(0.9), false);
        let after = variant(Some(0.9), true);
        assert_eq!(
            evaluate(Some(&before), Some(&after), THRESHOLD),
            Decision::Render { clear_dirty: true }
        );
    }

    #[test]
    fn test_new_variant_renders_without_clearing() {
        let after = variant(Some(0.2), false);
        assert_eq!(
            evaluate(None, Some(&after), THRESHOLD),
            Decision::Render { clear_dirty: false }
        );
    }

    #[test]
    fn test_upward_crossing_renders() {
        let before = variant(Some(0.3), false);
        let after = variant(Some(0.6), false);
        assert_eq!(
            evaluate(Some(&before), Some(&after), THRESHOLD),
            Decision::Render { clear_dirty: false }
        );
    }

    #[test]
    fn test_downward_crossing_skips() {
        let before = variant(Some(0.6), false);
        let after = variant(Some(0.3), false);
        assert_eq!(evaluate(Some(&before), Some(&after), THRESHOLD), Decision::Skip);
    }

    #[test]
    fn test_changes_on_one_side_of_the_threshold_skip() {
        let cases = [(0.1, 0.4), (0.6, 0.9), (0.5, 0.7)];
        for (b, a) in cases {
            let before = variant(Some(b), false);
            let after = variant(Some(a), false);
            assert_eq!(
                evaluate(Some(&before), Some(&after), THRESHOLD),
                Decision::Skip,
                "{b} -> {a}"
            );
        }
    }

    #[test]
    fn test_missing_visibility_never_crosses() {
        let unset = variant(None, false);
        let visible = variant(Some(0.9), false);
        let hidden = variant(Some(0.1), false);

        assert_eq!(evaluate(Some(&unset), Some(&visible), THRESHOLD), Decision::Skip);
        assert_eq!(evaluate(Some(&hidden), Some(&unset), THRESHOLD), Decision::Skip);
    }

    #[test]
    fn test_exact_threshold_counts_as_visible() {
        let before = variant(Some(0.49), false);
        let after = variant(Some(0.5), false);
        assert_eq!(
            evaluate(Some(&before), Some(&after), THRESHOLD),
            Decision::Render { clear_dirty: false }
        );
    }
}
