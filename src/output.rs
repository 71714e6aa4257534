use std::fmt::Write;

use chrono::Utc;

use crate::model::SelectionModel;

/// Builds the full plan handed to an external applier: a header comment,
/// then one `name<TAB>path` line per entry in list order.
pub fn format_plan(model: &SelectionModel) -> String {
    // Timestamp in RFC3339 with seconds precision
    let ts = Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    let mut out = String::new();
    writeln!(out, "# fmw-select plan generated-at {ts}").unwrap();
    writeln!(out, "# base-dir {}", model.base_dir()).unwrap();
    for (name, path) in model.names().iter().zip(model.paths()) {
        writeln!(out, "{name}\t{path}").unwrap();
    }
    out
}

/// One line per overridden entry plus a count, for the glance summary shown
/// when no plan output was requested.
pub fn format_override_summary(model: &SelectionModel) -> String {
    let mut out = String::new();
    for i in 0..model.names().len() {
        if !model.is_default_at(i) {
            writeln!(out, "{}\t{}", model.name_at(i), model.path_at(i)).unwrap();
        }
    }
    writeln!(
        out,
        "{} of {} entries overridden",
        model.overridden_count(),
        model.names().len()
    )
    .unwrap();
    out
}
