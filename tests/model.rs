use fmw_select::model::{ListSource, SelectionModel};
use fmw_select::row::{RowFactory, RowTemplate, TextRowFactory};

fn jar_model() -> SelectionModel {
    SelectionModel::new(vec!["services.jar".into(), "framework.jar".into()])
}

#[test]
fn construction_builds_default_paths() {
    let model = jar_model();
    assert_eq!(
        model.paths().to_vec(),
        [
            "/system/framework/services.jar",
            "/system/framework/framework.jar"
        ]
    );
    assert_eq!(model.names().to_vec(), ["services.jar", "framework.jar"]);
}

#[test]
fn empty_name_list_yields_zero_rows() {
    let model = SelectionModel::new(vec![]);
    assert_eq!(model.len(), 0);
    assert!(model.paths().is_empty());
}

#[test]
fn base_dir_is_concatenated_without_separator_handling() {
    let model = SelectionModel::with_base_dir("/tmp/fmw", vec!["services.jar".into()]);
    assert_eq!(model.path_at(0), "/tmp/fmwservices.jar");
}

#[test]
fn set_then_get_round_trips() {
    let mut model = jar_model();
    model.set_path_at(0, "/sdcard/services.jar");

    assert_eq!(model.path_at(0), "/sdcard/services.jar");
    assert_eq!(
        model.paths().to_vec(),
        ["/sdcard/services.jar", "/system/framework/framework.jar"]
    );
}

#[test]
fn equal_length_bulk_write_replaces_elementwise() {
    let mut model = jar_model();
    model.set_paths(vec![
        "/sdcard/services.jar".into(),
        "/sdcard/framework.jar".into(),
    ]);

    assert_eq!(
        model.paths().to_vec(),
        ["/sdcard/services.jar", "/sdcard/framework.jar"]
    );
}

#[test]
fn strict_bulk_write_rejects_a_length_mismatch() {
    let mut model = jar_model();
    let before = model.paths().to_vec();

    let err = model.try_set_paths(vec!["/sdcard/services.jar".into()]).unwrap_err();
    assert!(format!("{err}").contains("expected 2 paths, got 1"), "{err}");
    assert_eq!(model.paths().to_vec(), before);
    assert_eq!(model.generation(), 0);
}

#[test]
fn reset_restores_the_default_path() {
    let mut model = jar_model();
    model.set_path_at(1, "/sdcard/framework.jar");
    model.reset_path_at(1);

    assert_eq!(model.path_at(1), "/system/framework/framework.jar");
    assert!(model.is_default_at(1));
}

#[test]
fn stable_ids_are_positions() {
    let model = jar_model();
    assert_eq!(model.len(), 2);
    assert_eq!(model.stable_id(0), 0);
    assert_eq!(model.stable_id(1), 1);
}

#[test]
fn default_entries_render_with_a_hidden_location() {
    let model = jar_model();
    let factory = TextRowFactory::new();

    let row = model.render_row(0, &factory, None);
    assert_eq!(row.name.text(), "services.jar");
    assert!(!row.location.is_visible());
}

#[test]
fn overridden_entries_render_their_literal_path() {
    let mut model = jar_model();
    let factory = TextRowFactory::new();
    model.set_path_at(0, "/sdcard/services.jar");

    let row = model.render_row(0, &factory, None);
    assert!(row.location.is_visible());
    assert_eq!(row.location.text(), "/sdcard/services.jar");
}

#[test]
fn recycled_rows_keep_their_identity_and_stale_hidden_text() {
    let mut model = jar_model();
    let factory = TextRowFactory::new();
    model.set_path_at(0, "/sdcard/services.jar");

    let row = model.render_row(0, &factory, None);
    let id = row.id();

    // Rebind the same row object to a default entry: identity is unchanged,
    // the location is hidden, and its stale text is not cleared.
    let row = model.render_row(1, &factory, Some(row));
    assert_eq!(row.id(), id);
    assert_eq!(row.name.text(), "framework.jar");
    assert!(!row.location.is_visible());
    assert_eq!(row.location.text(), "/sdcard/services.jar");
}

// Concrete end-to-end scenario over two framework jars
#[test]
fn services_and_framework_scenario() {
    let factory = TextRowFactory::new();
    let mut model = jar_model();
    assert_eq!(
        model.paths().to_vec(),
        [
            "/system/framework/services.jar",
            "/system/framework/framework.jar"
        ]
    );

    model.set_path_at(0, "/sdcard/services.jar");
    assert_eq!(
        model.paths().to_vec(),
        ["/sdcard/services.jar", "/system/framework/framework.jar"]
    );

    let row0 = model.render_row(0, &factory, None);
    let row1 = model.render_row(1, &factory, None);
    assert!(row0.location.is_visible());
    assert_eq!(row0.location.text(), "/sdcard/services.jar");
    assert!(!row1.location.is_visible());
}
