//! Bar and line layouts.

use indexmap::IndexSet;

use super::Reconcile;
use crate::model::CartesianLayout;
use crate::pivot::PivotOptions;

impl Reconcile for CartesianLayout {
    fn reconcile(self, options: &PivotOptions) -> Self {
        let x_field = self
            .x_field
            .filter(|id| options.has_x(id))
            .or_else(|| options.first_dimension().map(str::to_string))
            .or_else(|| options.x_axis.first().map(|o| o.field_id.clone()));

        let mut y_fields: Vec<String> = self
            .y_fields
            .into_iter()
            .filter(|id| options.has_y(id))
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect();
        if y_fields.is_empty() {
            y_fields.extend(options.first_metric().map(str::to_string));
        }

        // A series split on the x axis field would yield one point per series.
        let group_by = self
            .group_by
            .filter(|id| options.has_group_by(id) && x_field.as_deref() != Some(id.as_str()));

        CartesianLayout {
            x_field,
            y_fields,
            group_by,
            flip_axes: self.flip_axes,
            stack: self.stack,
        }
    }
}
