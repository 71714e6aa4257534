use assert_fs::{TempDir, prelude::*};

/// Builds a fixture framework dir:
/// root/
///   ext.jar
///   framework.jar
///   services.jar
///   sub/nested.jar   (subdirectory, must be skipped)
pub fn framework_fixture() -> TempDir {
    let td = TempDir::new().unwrap();
    td.child("services.jar").write_str("dex\n").unwrap();
    td.child("framework.jar").write_str("dex\n").unwrap();
    td.child("ext.jar").write_str("dex\n").unwrap();

    let sub = td.child("sub");
    sub.create_dir_all().unwrap();
    sub.child("nested.jar").write_str("dex\n").unwrap();
    td
}

/// The fixture path as a base dir, with its trailing separator.
pub fn base_dir(td: &TempDir) -> String {
    format!("{}/", td.path().display())
}
