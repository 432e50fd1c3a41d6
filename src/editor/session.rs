//! Host-facing editing session over one print order.

use super::trigger::{recalc_scope, ChangeEvent, RecalcScope};
use crate::calc::{recompute_totals, ConversionTable, PrecisionPolicy};
use crate::cascade::{
    apply_all_defaults, apply_default, fill_blank_defaults, set_default, DefaultField,
    DefaultUpdate,
};
use crate::config::CalcConfig;
use crate::error::{CalcError, Result};
use crate::model::{LineField, LineItem, LineUpdate, Order, OrderTotals};
use tracing::debug;

/// Receives one refresh instruction per recalculation.
pub trait RefreshHook {
    /// Called after the order's calculated fields were rewritten.
    fn refresh(&mut self, order: &Order);
}

impl<F> RefreshHook for F
where
    F: FnMut(&Order),
{
    fn refresh(&mut self, order: &Order) {
        self(order)
    }
}

/// Refresh hook that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRefresh;

impl RefreshHook for NoRefresh {
    fn refresh(&mut self, _order: &Order) {}
}

/// Applies edits to an order and keeps its calculated fields current.
///
/// Every triggering edit recalculates immediately unless a batch is open, in
/// which case a single recalculation runs when the outermost batch ends.
pub struct OrderEditor {
    order: Order,
    table: ConversionTable,
    policy: Box<dyn PrecisionPolicy>,
    refresh: Box<dyn RefreshHook>,
    batch_depth: usize,
    pending: bool,
    recalc_count: usize,
}

impl OrderEditor {
    /// Create an editor using the config's conversion table and precisions.
    pub fn new(order: Order, config: &CalcConfig) -> Self {
        Self::with_policy(order, config.conversion_table(), config.field_precision())
    }

    /// Create an editor with an explicit conversion table and precision policy.
    pub fn with_policy(
        order: Order,
        table: ConversionTable,
        policy: impl PrecisionPolicy + 'static,
    ) -> Self {
        Self {
            order,
            table,
            policy: Box::new(policy),
            refresh: Box::new(NoRefresh),
            batch_depth: 0,
            pending: false,
            recalc_count: 0,
        }
    }

    /// Set the hook notified after each recalculation.
    pub fn with_refresh_hook(mut self, hook: impl RefreshHook + 'static) -> Self {
        self.refresh = Box::new(hook);
        self
    }

    /// The order being edited.
    pub fn order(&self) -> &Order {
        &self.order
    }

    /// Mutable access for hosts that write fields themselves and then
    /// report them through [`OrderEditor::notify`].
    pub fn order_mut(&mut self) -> &mut Order {
        &mut self.order
    }

    /// Finish editing and return the order.
    pub fn into_order(self) -> Order {
        self.order
    }

    /// Number of recalculations run so far.
    pub fn recalc_count(&self) -> usize {
        self.recalc_count
    }

    /// Check if a batch is open.
    pub fn in_batch(&self) -> bool {
        self.batch_depth > 0
    }

    // ==================== Edits ====================

    /// Append a new line. Fields it leaves blank take the order defaults.
    /// Returns its row.
    pub fn add_row(&mut self, mut item: LineItem) -> usize {
        fill_blank_defaults(&self.order.defaults, &mut item);
        self.order.items.push(item);
        let row = self.order.items.len() - 1;
        self.schedule(recalc_scope(&ChangeEvent::RowInserted { row }));
        row
    }

    /// Append many lines under one batch, recalculating once.
    pub fn add_rows(&mut self, items: impl IntoIterator<Item = LineItem>) -> Result<Vec<usize>> {
        self.begin_batch();
        let rows = items.into_iter().map(|item| self.add_row(item)).collect();
        self.end_batch()?;
        Ok(rows)
    }

    /// Remove the line at `row` and recalculate without it.
    pub fn remove_row(&mut self, row: usize) -> Result<LineItem> {
        self.check_row(row)?;
        let item = self.order.items.remove(row);
        self.schedule(recalc_scope(&ChangeEvent::RowRemoved { row }));
        Ok(item)
    }

    /// Write one field on the line at `row`, with its side effects.
    pub fn set_line_field(&mut self, row: usize, update: LineUpdate) -> Result<()> {
        self.check_row(row)?;
        let field = update.field();
        self.order.items[row].set(update);
        self.schedule(recalc_scope(&ChangeEvent::LineFieldChanged { row, field }));
        Ok(())
    }

    /// Write an order default, cascade it into every line and recalculate.
    pub fn set_default(&mut self, update: DefaultUpdate) {
        let written = set_default(&mut self.order.defaults, update);
        self.propagate(&written);
        self.schedule(RecalcScope::Full);
    }

    /// React to a change the host already wrote into the order.
    pub fn notify(&mut self, event: ChangeEvent) -> Result<()> {
        match event {
            ChangeEvent::LineFieldChanged {
                row,
                field: LineField::QtyUnit,
            } => {
                self.check_row(row)?;
                let item = &mut self.order.items[row];
                let unit = item.qty_unit;
                item.set(LineUpdate::QtyUnit(unit));
            }
            ChangeEvent::LineFieldChanged { row, .. } => self.check_row(row)?,
            ChangeEvent::RowInserted { row } => {
                // A host-inserted row is blank, so every set default applies.
                self.check_row(row)?;
                apply_all_defaults(&self.order.defaults, &mut self.order.items[row]);
            }
            ChangeEvent::RowRemoved { .. } => {}
            ChangeEvent::DefaultChanged(field) => {
                let written = if field == DefaultField::QtyUnit {
                    let unit = self.order.defaults.default_qty_unit;
                    set_default(&mut self.order.defaults, DefaultUpdate::QtyUnit(unit))
                } else {
                    vec![field]
                };
                self.propagate(&written);
            }
        }

        debug!("Host change {:?}", event);
        self.schedule(recalc_scope(&event));
        Ok(())
    }

    // ==================== Batching ====================

    /// Open a batch: triggering edits are deferred until it ends.
    pub fn begin_batch(&mut self) {
        self.batch_depth += 1;
    }

    /// Close a batch, recalculating once if any edit inside it required it.
    pub fn end_batch(&mut self) -> Result<()> {
        if self.batch_depth == 0 {
            return Err(CalcError::BatchNotOpen);
        }
        self.batch_depth -= 1;
        if self.batch_depth == 0 && self.pending {
            self.recalculate();
        }
        Ok(())
    }

    /// Recalculate every line and the totals now.
    pub fn recalculate(&mut self) -> OrderTotals {
        let totals = recompute_totals(&mut self.order, &self.table, self.policy.as_ref());
        self.pending = false;
        self.recalc_count += 1;
        self.refresh.refresh(&self.order);
        totals
    }

    // ==================== Internals ====================

    fn schedule(&mut self, scope: RecalcScope) {
        if scope == RecalcScope::None {
            return;
        }
        if self.in_batch() {
            self.pending = true;
            return;
        }
        // A single stale line still needs fresh totals, which are always
        // summed over every line.
        self.recalculate();
    }

    fn propagate(&mut self, fields: &[DefaultField]) {
        for field in fields {
            apply_default(&mut self.order, *field);
        }
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row < self.order.items.len() {
            Ok(())
        } else {
            Err(CalcError::RowOutOfRange {
                row,
                len: self.order.items.len(),
            })
        }
    }
}
