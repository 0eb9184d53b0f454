//! Pie layouts.

use super::Reconcile;
use crate::model::PieLayout;
use crate::pivot::PivotOptions;

impl Reconcile for PieLayout {
    fn reconcile(self, options: &PivotOptions) -> Self {
        let group_field = self
            .group_field
            .filter(|id| options.has_group_by(id))
            .or_else(|| options.first_dimension().map(str::to_string));
        let metric_field = self
            .metric_field
            .filter(|id| options.has_y(id))
            .or_else(|| options.first_metric().map(str::to_string));

        PieLayout {
            group_field,
            metric_field,
            donut: self.donut,
        }
    }
}
