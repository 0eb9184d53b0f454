//! Table layouts.

use indexmap::IndexMap;

use super::Reconcile;
use crate::model::{TableColumn, TableLayout};
use crate::pivot::PivotOptions;

impl Reconcile for TableLayout {
    /// Columns that still exist keep their settings and their previous
    /// order; new columns are appended in field order.
    fn reconcile(self, options: &PivotOptions) -> Self {
        let mut columns: IndexMap<String, TableColumn> = self
            .columns
            .into_iter()
            .filter(|(id, _)| options.has_x(id))
            .collect();

        for option in &options.x_axis {
            if !columns.contains_key(&option.field_id) {
                columns.insert(
                    option.field_id.clone(),
                    TableColumn {
                        visible: true,
                        label: option.label.clone(),
                        frozen: false,
                    },
                );
            }
        }

        TableLayout { columns }
    }
}
