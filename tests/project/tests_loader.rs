//! Data files on disk.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use mcfunction::args::Registries;
use mcfunction::project::{BLOCK_STATES_FILE, COMMANDS_FILE, REGISTRIES_FILE};
use mcfunction::{Context, ContextHandle, LoadError, walk};
use tempfile::TempDir;

use crate::helpers::fixtures::{BLOCK_STATES, COMMANDS, REGISTRIES};

fn data_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

#[test]
fn test_load_full_directory() {
    let dir = data_dir(&[
        (COMMANDS_FILE, COMMANDS),
        (BLOCK_STATES_FILE, BLOCK_STATES),
        (REGISTRIES_FILE, REGISTRIES),
    ]);
    let ctx = Context::load_dir(dir.path()).unwrap();
    assert!(ctx.block_properties("minecraft:barrel").is_some());
    assert!(ctx.registry("minecraft:particle_type").is_some());
    assert!(walk(&ctx, "setblock 0 0 0 barrel[open=true]").unwrap().success);
}

#[test]
fn test_optional_tables_default_to_empty() {
    let dir = data_dir(&[(COMMANDS_FILE, COMMANDS)]);
    let ctx = Context::load_dir(dir.path()).unwrap();
    assert!(ctx.block_properties("minecraft:barrel").is_none());

    // Unknown blocks only warn, so the line still resolves.
    let report = walk(&ctx, "setblock 0 0 0 barrel").unwrap();
    assert!(report.success);
    assert_eq!(report.diagnostics.len(), 1);
}

#[test]
fn test_missing_grammar_is_io_error() {
    let dir = data_dir(&[]);
    match Context::load_dir(dir.path()) {
        Err(LoadError::Io { path, .. }) => {
            assert_eq!(path.file_name(), Path::new(COMMANDS_FILE).file_name());
        }
        other => panic!("expected an io error, got {other:?}"),
    }
}

#[test]
fn test_malformed_table_is_json_error() {
    let dir = data_dir(&[(COMMANDS_FILE, COMMANDS), (REGISTRIES_FILE, "[1, 2")]);
    let err = Context::load_dir(dir.path()).unwrap_err();
    assert!(matches!(err, LoadError::Json { what: "registries", .. }));
}

#[test]
fn test_handle_reload_swaps_atomically() {
    let handle = ContextHandle::default();
    let before = handle.snapshot();
    assert!(walk(&before, "stop").is_ok_and(|r| !r.success));

    let dir = data_dir(&[(COMMANDS_FILE, COMMANDS)]);
    handle.reload(dir.path()).unwrap();

    let after = handle.snapshot();
    assert!(!Arc::ptr_eq(&before, &after));
    assert!(walk(&after, "stop").unwrap().success);
    // The old snapshot is untouched.
    assert!(before.root().children.is_empty());
}
