//! Edge case and error handling tests for dmitree

#![cfg(unix)]


use harness::{TestTree, run_dmitree, tree_lines};
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

// ============================================================================
// Unreadable Directories
// ============================================================================

#[test]
fn test_unreadable_subdirectory_is_isolated() {
    let tree = TestTree::new();
    tree.add_file("a_dir/one.txt", "");
    tree.add_file("locked/hidden_1.txt", "");
    tree.add_file("z_dir/two.txt", "");
    tree.add_file("top.txt", "");

    let locked = tree.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not stop root
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let (stdout, stderr, success) = run_dmitree(&tree, &["--no-title"]);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(success, "a blocked subtree must not fail the run");
    let lines = tree_lines(&stdout);
    assert_eq!(lines[0], "  └── a_dir/");
    assert_eq!(lines[1], "    ├── one.txt");
    assert_eq!(lines[2], "  └── locked/");
    assert!(lines[3].starts_with("    [error opening dir: "), "{}", lines[3]);
    assert_eq!(lines[4], "├── top.txt");
    assert_eq!(lines[5], "  └── z_dir/");
    assert_eq!(lines[6], "    ├── two.txt");
    assert!(!stdout.contains("hidden_1.txt"));
    assert!(stderr.contains("cannot open directory"), "{}", stderr);
}

/// Nest directories until the full path passes PATH_MAX.
///
/// Each level is moved into the next one with short paths, so building the
/// chain never needs the long path itself. Listing the innermost levels
/// fails with ENAMETOOLONG for any user, root included.
#[cfg(target_os = "linux")]
fn build_overlong_chain(tree: &TestTree, levels: usize) -> String {
    let name = |i: usize| format!("{}{:02}", "d".repeat(240), i);

    tree.add_file(&format!("{}/buried.txt", name(0)), "");
    for i in 1..levels {
        tree.add_dir(&name(i));
        fs::rename(tree.path().join(name(i - 1)), tree.path().join(name(i)).join(name(i - 1)))
            .unwrap();
    }
    name(levels - 1)
}

#[cfg(target_os = "linux")]
#[test]
fn test_overlong_subtree_is_isolated() {
    let tree = TestTree::new();
    tree.add_file("a_before.txt", "");
    tree.add_file("z_after.txt", "");
    tree.add_file("z_dir/two.txt", "");
    let top = build_overlong_chain(&tree, 20);

    let (stdout, stderr, success) = run_dmitree(&tree, &["--no-title"]);

    assert!(success, "a failing subtree must not fail the run");
    let lines = tree_lines(&stdout);
    assert_eq!(lines[0], "├── a_before.txt");
    assert_eq!(lines[1], format!("  └── {}/", top));
    assert_eq!(
        lines.iter().filter(|l| l.contains("[error opening dir: ")).count(),
        1,
        "{}",
        stdout
    );
    assert!(!stdout.contains("buried.txt"));
    assert_eq!(lines[lines.len() - 3], "├── z_after.txt");
    assert_eq!(lines[lines.len() - 2], "  └── z_dir/");
    assert_eq!(lines[lines.len() - 1], "    ├── two.txt");
    assert!(stderr.contains("cannot open directory"), "{}", stderr);
}

// ============================================================================
// Non-UTF-8 Names
// ============================================================================

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_directory_is_listed() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tree = TestTree::new();
    let raw = tree.path().join(OsStr::from_bytes(b"caf\xe9"));
    fs::create_dir(&raw).unwrap();
    fs::write(raw.join("inner.txt"), "").unwrap();
    fs::write(tree.path().join(OsStr::from_bytes(b"shot_1\xff.jpg")), "").unwrap();
    fs::write(tree.path().join(OsStr::from_bytes(b"shot_2\xff.jpg")), "").unwrap();

    let (stdout, stderr, success) = run_dmitree(&tree, &["--no-title"]);
    assert!(success);
    assert!(!stderr.contains("cannot open"), "{}", stderr);
    assert_eq!(
        tree_lines(&stdout),
        vec![
            "  └── caf\u{FFFD}/",
            "    ├── inner.txt",
            "├── shot_#\u{FFFD}.jpg (2 files)",
        ]
    );
}

// ============================================================================
// Closed Output
// ============================================================================

#[test]
fn test_closed_stdout_exits_quietly() {
    use std::process::Stdio;

    let tree = TestTree::new();
    // Enough output to overflow a pipe buffer
    for i in 0..400u32 {
        let suffix: String = [b'a' + (i / 26) as u8, b'a' + (i % 26) as u8]
            .iter()
            .map(|&b| b as char)
            .collect();
        tree.add_file(&format!("{}{}.txt", "x".repeat(200), suffix), "");
    }

    let mut child = tree
        .std_command()
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    drop(child.stdout.take());
    let output = child.wait_with_output().unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "{}", stderr);
    assert!(!stderr.contains("Broken pipe"), "{}", stderr);
}

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_symlink_to_file_is_listed() {
    let tree = TestTree::new();
    tree.add_file("target.txt", "");
    symlink(tree.path().join("target.txt"), tree.path().join("link.txt")).unwrap();

    let (stdout, _stderr, success) = run_dmitree(&tree, &["--no-title"]);
    assert!(success);
    assert_eq!(stdout, "├── link.txt\n├── target.txt\n");
}

#[test]
fn test_symlink_to_directory_not_descended() {
    let tree = TestTree::new();
    tree.add_file("realdir/file.txt", "");
    symlink(tree.path().join("realdir"), tree.path().join("linkdir")).unwrap();

    let (stdout, _stderr, success) = run_dmitree(&tree, &["--no-title"]);
    assert!(success);
    assert_eq!(
        tree_lines(&stdout),
        vec!["  └── linkdir/", "  └── realdir/", "    ├── file.txt"]
    );
}

#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    let tree = TestTree::new();
    tree.add_file("subdir/file.txt", "");
    symlink("..", tree.path().join("subdir").join("parent")).unwrap();

    let (stdout, _stderr, success) = run_dmitree(&tree, &["--no-title"]);
    assert!(success, "dmitree should not hang on parent symlink");
    assert!(stdout.contains("file.txt"));
    assert!(stdout.contains("└── parent/"));
}

#[test]
fn test_broken_symlink_is_skipped() {
    let tree = TestTree::new();
    tree.add_file("real.txt", "");
    symlink("nonexistent.txt", tree.path().join("broken_1.txt")).unwrap();

    let (stdout, _stderr, success) = run_dmitree(&tree, &["--no-title"]);
    assert!(success, "dmitree should handle broken symlinks");
    assert_eq!(stdout, "├── real.txt\n");
}

// ============================================================================
// Naming Edge Cases
// ============================================================================

#[test]
fn test_empty_directory() {
    let tree = TestTree::new();

    let (stdout, _stderr, success) = run_dmitree(&tree, &[]);
    assert!(success);
    assert_eq!(stdout, "Tree structure for: .\n");
}

#[test]
fn test_empty_subdirectory_shows_header() {
    let tree = TestTree::new();
    tree.add_dir("empty");

    let (stdout, _stderr, success) = run_dmitree(&tree, &["--no-title"]);
    assert!(success);
    assert_eq!(stdout, "  └── empty/\n");
}

#[test]
fn test_digit_only_names() {
    let tree = TestTree::new();
    tree.add_files(&["1", "22", "333"]);

    let (stdout, _stderr, success) = run_dmitree(&tree, &["--no-title"]);
    assert!(success);
    assert_eq!(stdout, "├── # (3 files)\n");
}

#[test]
fn test_multiple_digit_runs() {
    let tree = TestTree::new();
    tree.add_files(&["2023-01-05.log", "2024-12-31.log", "v1.2.tar"]);

    let (stdout, _stderr, success) = run_dmitree(&tree, &["--no-title"]);
    assert!(success);
    assert_eq!(stdout, "├── #-#-#.log (2 files)\n├── v1.2.tar\n");
}

#[test]
fn test_unicode_filenames() {
    let tree = TestTree::new();
    tree.add_files(&["фото_1.jpg", "фото_2.jpg", "日本語.txt"]);

    let (stdout, _stderr, success) = run_dmitree(&tree, &["--no-title"]);
    assert!(success);
    assert!(stdout.contains("├── 日本語.txt\n"), "{}", stdout);
    assert!(stdout.contains("├── фото_#.jpg (2 files)\n"), "{}", stdout);
}

#[test]
fn test_spaces_in_names() {
    let tree = TestTree::new();
    tree.add_files(&["my file 1.txt", "my file 2.txt"]);

    let (stdout, _stderr, success) = run_dmitree(&tree, &["--no-title"]);
    assert!(success);
    assert_eq!(stdout, "├── my file #.txt (2 files)\n");
}

#[test]
fn test_numbered_directories_are_not_grouped() {
    let tree = TestTree::new();
    tree.add_dir("run_1");
    tree.add_dir("run_2");

    let (stdout, _stderr, success) = run_dmitree(&tree, &["--no-title"]);
    assert!(success);
    assert_eq!(stdout, "  └── run_1/\n  └── run_2/\n");
}

// ============================================================================
// Nesting
// ============================================================================

#[test]
fn test_deep_nesting_indentation() {
    let tree = TestTree::new();
    tree.add_file("a/b/c/leaf.txt", "");

    let (stdout, _stderr, success) = run_dmitree(&tree, &["--no-title"]);
    assert!(success);
    assert_eq!(
        tree_lines(&stdout),
        vec!["  └── a/", "    └── b/", "      └── c/", "        ├── leaf.txt"]
    );
}

#[test]
fn test_dirs_only_with_depth() {
    let tree = TestTree::new();
    tree.add_dir("a/b/c");
    tree.add_file("a/file.txt", "");

    let (stdout, _stderr, success) = run_dmitree(&tree, &["-d", "-L", "2", "--no-title"]);
    assert!(success);
    assert_eq!(tree_lines(&stdout), vec!["  └── a/", "    └── b/"]);
}

// ============================================================================
// Color Edge Cases
// ============================================================================

#[test]
fn test_color_never_ignores_rules() {
    let tree = TestTree::new();
    tree.add_file("main.c", "");
    tree.write_rc("color = .c:31\n");

    let (stdout, _stderr, success) = run_dmitree(&tree, &["--color=never"]);
    assert!(success);
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn test_color_auto_respects_no_color() {
    let tree = TestTree::new();
    tree.add_file("main.c", "");
    tree.write_rc("color = .c:31\n");

    let output = tree
        .command()
        .arg("--color=auto")
        .env("NO_COLOR", "1")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stdout).contains('\x1b'));
}

#[test]
fn test_color_auto_with_force_color() {
    let tree = TestTree::new();
    tree.add_file("main.c", "");
    tree.write_rc("color = .c:31\n");

    let output = tree
        .command()
        .arg("--color=auto")
        .env("FORCE_COLOR", "1")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("\x1b[31mmain.c"));
}

#[test]
fn test_group_colored_by_extension() {
    let tree = TestTree::new();
    tree.add_files(&["img_1.png", "img_2.png"]);
    tree.write_rc("color = png:35\n");

    let (stdout, _stderr, success) = run_dmitree(&tree, &["--color", "--no-title"]);
    assert!(success);
    assert!(
        stdout.contains("\x1b[35mimg_#.png\x1b[0m (2 files)"),
        "{:?}",
        stdout
    );
}
