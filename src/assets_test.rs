use super::*;

/// Fresh scratch directory under the system temp dir.
fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("chatrooms-assets-{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

// =============================================================================
// Naming
// =============================================================================

#[test]
fn stamped_file_name_inserts_stamp_before_extension() {
    assert_eq!(stamped_file_name("chatrooms.js", "chatrooms", 1_700_000_000), Some("chatrooms1700000000.js".to_owned()));
    assert_eq!(stamped_file_name("chatrooms.css", "chatrooms", 7), Some("chatrooms7.css".to_owned()));
}

#[test]
fn stamped_file_name_keeps_wasm_bindgen_suffix() {
    assert_eq!(stamped_file_name("chatrooms_bg.wasm", "chatrooms", 7), Some("chatrooms7_bg.wasm".to_owned()));
}

#[test]
fn stamped_file_name_ignores_other_files() {
    assert_eq!(stamped_file_name("other.js", "chatrooms", 7), None);
    assert_eq!(stamped_file_name("chatrooms7.js", "chatrooms", 8), None);
    assert_eq!(stamped_file_name("chatroomsx.js", "chatrooms", 8), None);
}

#[test]
fn stamped_output_name_appends_stamp() {
    assert_eq!(stamped_output_name("chatrooms", 99), "chatrooms99");
}

#[test]
fn parse_stamp_reads_leading_digits() {
    assert_eq!(parse_stamp("chatrooms1700000000.js", "chatrooms"), Some(1_700_000_000));
    assert_eq!(parse_stamp("chatrooms7_bg.wasm", "chatrooms"), Some(7));
    assert_eq!(parse_stamp("chatrooms.js", "chatrooms"), None);
    assert_eq!(parse_stamp("other1.js", "chatrooms"), None);
}

#[test]
fn current_stamp_is_after_2020() {
    assert!(current_stamp() > 1_577_836_800);
}

// =============================================================================
// stamp_pkg_dir
// =============================================================================

#[test]
fn stamp_pkg_dir_copies_bundle_and_removes_stale_stamps() {
    let dir = scratch_dir();
    fs::write(dir.join("chatrooms.js"), "js").unwrap();
    fs::write(dir.join("chatrooms_bg.wasm"), "wasm").unwrap();
    fs::write(dir.join("chatrooms.css"), "css").unwrap();
    fs::write(dir.join("chatrooms5.js"), "old").unwrap();
    fs::write(dir.join("favicon.ico"), "ico").unwrap();

    let stamped = stamp_pkg_dir(&dir, "chatrooms", 9).unwrap();
    assert_eq!(stamped.len(), 3);
    assert_eq!(fs::read_to_string(dir.join("chatrooms9.js")).unwrap(), "js");

    assert_eq!(
        file_names(&dir),
        [
            "chatrooms.css",
            "chatrooms.js",
            "chatrooms9.css",
            "chatrooms9.js",
            "chatrooms9_bg.wasm",
            "chatrooms_bg.wasm",
            "favicon.ico",
        ]
    );

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn stamp_pkg_dir_is_repeatable_for_same_stamp() {
    let dir = scratch_dir();
    fs::write(dir.join("chatrooms.js"), "js").unwrap();

    stamp_pkg_dir(&dir, "chatrooms", 3).unwrap();
    stamp_pkg_dir(&dir, "chatrooms", 3).unwrap();
    assert_eq!(file_names(&dir), ["chatrooms.js", "chatrooms3.js"]);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn stamp_pkg_dir_without_bundle_is_missing() {
    let dir = scratch_dir();
    fs::write(dir.join("other.js"), "js").unwrap();

    let err = stamp_pkg_dir(&dir, "chatrooms", 1).unwrap_err();
    assert!(matches!(err, AssetError::Missing { .. }));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn stamp_pkg_dir_missing_dir_errors() {
    let dir = std::env::temp_dir().join(format!("chatrooms-missing-{}", uuid::Uuid::new_v4()));
    assert!(matches!(stamp_pkg_dir(&dir, "chatrooms", 1), Err(AssetError::ReadDir { .. })));
}
