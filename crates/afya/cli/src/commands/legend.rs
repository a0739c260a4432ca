//! Status legend

use afya_engine::requires_evidence;
use afya_types::Status;

use crate::output::{print_output, LegendRow, OutputFormat};

/// Rows describing every status level.
pub fn rows() -> Vec<LegendRow> {
    Status::ALL
        .iter()
        .map(|s| LegendRow {
            code: s.code(),
            label: s.label(),
            weight: s.weight(),
            gated: if requires_evidence(*s) { "required" } else { "-" },
            description: s.description(),
        })
        .collect()
}

/// Print the legend
pub fn execute(format: OutputFormat) {
    print_output(rows(), format);
}
