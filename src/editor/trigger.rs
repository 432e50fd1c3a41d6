//! Which edits invalidate the calculated quantities.

use crate::cascade::DefaultField;
use crate::model::LineField;

/// A change reported by the host document editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    /// A field changed on the line at `row`.
    LineFieldChanged { row: usize, field: LineField },
    /// A line was inserted at `row`.
    RowInserted { row: usize },
    /// The line at `row` was removed.
    RowRemoved { row: usize },
    /// An order default changed.
    DefaultChanged(DefaultField),
}

/// How much must be recalculated after a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecalcScope {
    /// Nothing calculated depends on the change.
    None,
    /// The line at this row is stale; totals follow it.
    Line(usize),
    /// Every line and the totals are stale.
    Full,
}

/// Check if an edit to `field` makes the line's quantities stale.
pub fn line_field_triggers(field: LineField) -> bool {
    matches!(
        field,
        LineField::DesignGap
            | LineField::Qty
            | LineField::QtyUnit
            | LineField::QtyType
            | LineField::WastagePercent
            | LineField::LengthUnit
    )
}

/// Recalculation required by `event`.
pub fn recalc_scope(event: &ChangeEvent) -> RecalcScope {
    match event {
        ChangeEvent::LineFieldChanged { row, field } if line_field_triggers(*field) => {
            RecalcScope::Line(*row)
        }
        ChangeEvent::LineFieldChanged { .. } => RecalcScope::None,
        ChangeEvent::RowInserted { row } => RecalcScope::Line(*row),
        ChangeEvent::RowRemoved { .. } => RecalcScope::Full,
        ChangeEvent::DefaultChanged(_) => RecalcScope::Full,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_fields() {
        for field in [
            LineField::DesignGap,
            LineField::Qty,
            LineField::QtyUnit,
            LineField::QtyType,
            LineField::WastagePercent,
            LineField::LengthUnit,
        ] {
            assert!(line_field_triggers(field), "{:?} should trigger", field);
        }
        assert!(!line_field_triggers(LineField::DesignHeight));
        assert!(!line_field_triggers(LineField::StockUnit));
    }

    #[test]
    fn test_recalc_scope() {
        let edit = ChangeEvent::LineFieldChanged {
            row: 3,
            field: LineField::Qty,
        };
        assert_eq!(recalc_scope(&edit), RecalcScope::Line(3));

        let untracked = ChangeEvent::LineFieldChanged {
            row: 3,
            field: LineField::StockUnit,
        };
        assert_eq!(recalc_scope(&untracked), RecalcScope::None);

        assert_eq!(
            recalc_scope(&ChangeEvent::RowInserted { row: 0 }),
            RecalcScope::Line(0)
        );
        assert_eq!(
            recalc_scope(&ChangeEvent::RowRemoved { row: 0 }),
            RecalcScope::Full
        );
        assert_eq!(
            recalc_scope(&ChangeEvent::DefaultChanged(DefaultField::Wastage)),
            RecalcScope::Full
        );
    }
}
