use std::fs;
use std::path::{Path, PathBuf};

use tablegen_core::{
    BUILTINS, ParseErrorKind, SIGHANDLERS, TableError, TableProfile, generate, render_table,
    scan_table,
};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Lays out `include/<input>` under a fresh root.
fn workspace(profile: &TableProfile, contents: &str) -> TempDir {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("include")).unwrap();
    fs::write(profile.input_path(root.path()), contents).unwrap();
    root
}

fn read_output(profile: &TableProfile, root: &TempDir) -> String {
    fs::read_to_string(profile.output_path(root.path())).unwrap()
}

#[test]
fn test_builtin_fixture() {
    let table = scan_table(&fixture("builtin.h"), &BUILTINS).unwrap();
    assert_eq!(table.count(), 8);
    assert_eq!(
        table.labels().collect::<Vec<_>>(),
        ["cd", "dot", "exit", "export", "pwd", "alias", "echo", "jobs"]
    );
    assert_eq!(table.entries()[0].line_number, 12);
}

#[test]
fn test_signal_fixture() {
    let text = render_table(&fixture("signal_handlers.h"), &SIGHANDLERS).unwrap();
    assert!(text.contains(
        "sighandler_t signal_handler_list[] = {handle_sigchld, handle_sigint, handle_sigtstp};\n"
    ));
    assert!(text.contains("int signum_list[] = {SIGCHLD, SIGINT, SIGTSTP};\n"));
    assert!(text.contains("int num_sighandlers = 3;\n"));
}

#[test]
fn test_generate_writes_output_next_to_input() {
    let root = workspace(&BUILTINS, &fs::read_to_string(fixture("builtin.h")).unwrap());
    let report = generate(&BUILTINS, root.path()).unwrap();

    assert_eq!(report.count, 8);
    assert_eq!(report.profile, "builtins");
    assert_eq!(report.output, root.path().join("include/builtin_list.h"));

    let text = read_output(&BUILTINS, &root);
    assert!(text.starts_with("#ifndef BUILTIN_LIST_H\n#define BUILTIN_LIST_H\n"));
    assert!(text.contains("#include <builtin.h>\n"));
    assert!(text.contains("\"cd\", \"dot\", \"exit\""));
    assert!(text.contains("int num_builtins = 8;\n"));
    assert!(text.ends_with("#endif\n"));
}

#[test]
fn test_no_table_lines_gives_empty_arrays() {
    let root = workspace(&SIGHANDLERS, "#ifndef X\n#define X\n#endif\n");
    let report = generate(&SIGHANDLERS, root.path()).unwrap();
    assert_eq!(report.count, 0);

    let text = read_output(&SIGHANDLERS, &root);
    assert!(text.contains("sighandler_t signal_handler_list[] = {};\n"));
    assert!(text.contains("int signum_list[] = {};\n"));
    assert!(text.contains("int num_sighandlers = 0;\n"));
}

#[test]
fn test_rerun_is_byte_identical() {
    let root = workspace(&BUILTINS, &fs::read_to_string(fixture("builtin.h")).unwrap());
    generate(&BUILTINS, root.path()).unwrap();
    let first = fs::read(BUILTINS.output_path(root.path())).unwrap();
    generate(&BUILTINS, root.path()).unwrap();
    let second = fs::read(BUILTINS.output_path(root.path())).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_duplicates_survive_in_order() {
    let root = workspace(
        &BUILTINS,
        "BUILTIN_TABLE int do_builtin_cd(x);\n\
         BUILTIN_TABLE int do_builtin_pwd(x);\n\
         BUILTIN_TABLE int do_builtin_cd(x);\n",
    );
    generate(&BUILTINS, root.path()).unwrap();
    let text = read_output(&BUILTINS, &root);
    assert!(text.contains("{do_builtin_cd, do_builtin_pwd, do_builtin_cd}"));
    assert!(text.contains("{\"cd\", \"pwd\", \"cd\"}"));
    assert!(text.contains("int num_builtins = 3;"));
}

#[test]
fn test_stale_entries_do_not_survive() {
    let root = workspace(
        &BUILTINS,
        "BUILTIN_TABLE int do_builtin_cd(x);\nBUILTIN_TABLE int do_builtin_umask(x);\n",
    );
    generate(&BUILTINS, root.path()).unwrap();
    assert!(read_output(&BUILTINS, &root).contains("do_builtin_umask"));

    fs::write(
        BUILTINS.input_path(root.path()),
        "BUILTIN_TABLE int do_builtin_cd(x);\n",
    )
    .unwrap();
    generate(&BUILTINS, root.path()).unwrap();

    let text = read_output(&BUILTINS, &root);
    assert!(!text.contains("umask"));
    assert_eq!(text.matches("#ifndef").count(), 1);
    assert!(text.contains("int num_builtins = 1;"));
}

#[test]
fn test_malformed_line_keeps_previous_output() {
    let root = workspace(&SIGHANDLERS, "SIGNAL_TABLE void handle_sigchld(int);\n");
    generate(&SIGHANDLERS, root.path()).unwrap();
    let before = read_output(&SIGHANDLERS, &root);

    fs::write(
        SIGHANDLERS.input_path(root.path()),
        "SIGNAL_TABLE void handle_sigchld(int);\nSIGNAL_TABLE void handler(int);\n",
    )
    .unwrap();
    let err = generate(&SIGHANDLERS, root.path()).unwrap_err();

    match err {
        TableError::Parse { source, .. } => {
            assert_eq!(source.line_number, 2);
            assert_eq!(source.raw_line, "SIGNAL_TABLE void handler(int);");
            assert!(matches!(source.kind, ParseErrorKind::MissingSegment { index: 1, .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(read_output(&SIGHANDLERS, &root), before);
}

#[test]
fn test_missing_input_touches_nothing() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("include")).unwrap();
    fs::write(BUILTINS.output_path(root.path()), "previous\n").unwrap();

    let err = generate(&BUILTINS, root.path()).unwrap_err();
    assert!(matches!(err, TableError::Input { ref path, .. } if path.ends_with("include/builtin.h")));
    assert_eq!(read_output(&BUILTINS, &root), "previous\n");
}
