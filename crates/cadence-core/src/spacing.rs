//! Lead-in whitespace between consecutive elements.

use crate::kind::{ElementKind, RenderedMark};
use crate::theme::SpacingRules;

/// Blank lines to emit before `current`.
///
/// Rules, in order:
/// 1. Bypassing elements and the first element of a stream get no gap
/// 2. Otherwise the matrix entry for (previous, current), or the default
/// 3. A transient predecessor gives back one line, floored at zero
pub fn spacing_before(
    previous: Option<RenderedMark>,
    current: ElementKind,
    bypasses: bool,
    rules: &SpacingRules,
) -> usize {
    if bypasses {
        return 0;
    }
    let Some(previous) = previous else {
        return 0;
    };

    let lines = rules.lookup(previous.kind, current);
    let lines = if previous.transient {
        lines.saturating_sub(1)
    } else {
        lines
    };
    tracing::trace!(
        previous = %previous.kind,
        current = %current,
        transient = previous.transient,
        lines,
        "spacing lookup"
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(kind: ElementKind) -> Option<RenderedMark> {
        Some(RenderedMark::new(kind, false))
    }

    fn transient(kind: ElementKind) -> Option<RenderedMark> {
        Some(RenderedMark::new(kind, true))
    }

    #[test]
    fn test_first_element_has_no_gap() {
        let rules = SpacingRules::new(3);
        assert_eq!(spacing_before(None, ElementKind::Info, false, &rules), 0);
    }

    #[test]
    fn test_bypass_ignores_predecessor() {
        let rules = SpacingRules::new(3);
        assert_eq!(
            spacing_before(mark(ElementKind::Table), ElementKind::Spacer, true, &rules),
            0
        );
        assert_eq!(spacing_before(None, ElementKind::Spacer, true, &rules), 0);
    }

    #[test]
    fn test_rule_lookup() {
        let rules = SpacingRules::new(1).with_rule(ElementKind::Error, ElementKind::Info, 2);
        assert_eq!(
            spacing_before(mark(ElementKind::Error), ElementKind::Info, false, &rules),
            2
        );
        // Matrix is ordered: the reverse pair falls back to the default
        assert_eq!(
            spacing_before(mark(ElementKind::Info), ElementKind::Error, false, &rules),
            1
        );
    }

    #[test]
    fn test_unmatched_pairs_use_default() {
        let rules = SpacingRules::new(2).with_rule(ElementKind::Info, ElementKind::Info, 0);
        for previous in ElementKind::ALL {
            for current in ElementKind::ALL {
                if (previous, current) == (ElementKind::Info, ElementKind::Info) {
                    continue;
                }
                assert_eq!(spacing_before(mark(previous), current, false, &rules), 2);
            }
        }
    }

    #[test]
    fn test_same_kind_uses_matrix() {
        let rules = SpacingRules::new(1).with_rule(ElementKind::Panel, ElementKind::Panel, 3);
        assert_eq!(
            spacing_before(mark(ElementKind::Panel), ElementKind::Panel, false, &rules),
            3
        );
    }

    #[test]
    fn test_transient_predecessor_reduces_by_one() {
        let rules = SpacingRules::new(1)
            .with_rule(ElementKind::Spinner, ElementKind::Table, 3)
            .with_rule(ElementKind::Spinner, ElementKind::Info, 0);
        assert_eq!(
            spacing_before(transient(ElementKind::Spinner), ElementKind::Success, false, &rules),
            0
        );
        assert_eq!(
            spacing_before(transient(ElementKind::Spinner), ElementKind::Table, false, &rules),
            2
        );
        // Floors at zero
        assert_eq!(
            spacing_before(transient(ElementKind::Spinner), ElementKind::Info, false, &rules),
            0
        );
    }
}
