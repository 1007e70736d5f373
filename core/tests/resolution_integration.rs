//! Resolution against real document trees, for every command in the table.

use std::fs;
use std::path::Path;

use gsd_core::{resolve, DispatchError, COMMANDS};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, body: &[u8]) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn body_for(name: &str, kind: &str) -> Vec<u8> {
    // includes non-UTF-8 and CRLF bytes to catch any decoding
    let mut body = format!("# {name} ({kind})\r\nStep 1.\n").into_bytes();
    body.extend_from_slice(&[0xff, 0xfe, b'\n']);
    body
}

#[test]
fn command_file_alone_resolves_verbatim() {
    for entry in COMMANDS {
        let dir = TempDir::new().unwrap();
        let body = body_for(entry.name, "command");
        write(dir.path(), entry.command_path, &body);

        let doc = resolve(dir.path(), entry.name).unwrap();
        assert_eq!(doc.path, entry.command_path);
        assert_eq!(doc.content, body);
    }
}

#[test]
fn workflow_file_alone_resolves_verbatim() {
    for entry in COMMANDS {
        let dir = TempDir::new().unwrap();
        let body = body_for(entry.name, "workflow");
        write(dir.path(), entry.workflow_path, &body);

        let doc = resolve(dir.path(), entry.name).unwrap();
        assert_eq!(doc.path, entry.workflow_path);
        assert_eq!(doc.content, body);
    }
}

#[test]
fn command_file_wins_when_both_exist() {
    for entry in COMMANDS {
        let dir = TempDir::new().unwrap();
        let command = body_for(entry.name, "command");
        write(dir.path(), entry.command_path, &command);
        write(dir.path(), entry.workflow_path, &body_for(entry.name, "workflow"));

        let doc = resolve(dir.path(), entry.name).unwrap();
        assert_eq!(doc.content, command);
    }
}

#[test]
fn empty_root_reports_both_candidates() {
    for entry in COMMANDS {
        let dir = TempDir::new().unwrap();
        match resolve(dir.path(), entry.name) {
            Err(DispatchError::MissingDocument { name, tried }) => {
                assert_eq!(name, entry.name);
                assert_eq!(tried, vec![entry.command_path, entry.workflow_path]);
            }
            other => panic!("expected MissingDocument for {}, got {other:?}", entry.name),
        }
    }
}

#[test]
fn unknown_command_ignores_filesystem() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "commands/gsd/frobnicate.md", b"not in the table");
    write(dir.path(), "workflows/frobnicate.md", b"not in the table");

    let err = resolve(dir.path(), "frobnicate").unwrap_err();
    assert!(matches!(err, DispatchError::UnknownCommand { ref name } if name == "frobnicate"));
}

#[test]
fn empty_document_is_still_found() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "workflows/progress.md", b"");
    let doc = resolve(dir.path(), "progress").unwrap();
    assert!(doc.content.is_empty());
    assert_eq!(doc.entry.name, "progress");
}
