// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::locator::{VSWHERE_EXE, locate_with};
use super::query::DiscoveryQuery;
use super::resolver::{VC_TOOLS_COMPONENT, query_args, resolve, vcvarsall_path};
use crate::error::SetupError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[test]
fn test_query_defaults_to_latest() {
    let query = DiscoveryQuery::default();
    assert!(query.wants_latest());
    assert_eq!(query.requested_version(), "latest");
    assert_eq!(query.override_path(), None);
}

#[test]
fn test_query_args_latest() {
    let args = query_args(&DiscoveryQuery::default());
    insta::assert_snapshot!(
        args.join(" "),
        @"-latest -requires Microsoft.VisualStudio.Component.VC.Tools.x86.x64 -property installationPath -products *"
    );
}

#[test]
fn test_query_args_with_version() {
    let query = DiscoveryQuery::builder()
        .requested_version("[17.0,18.0)")
        .build();
    let args = query_args(&query);

    assert_eq!(args.len(), 9);
    assert_eq!(args[..7].join(" "), query_args(&DiscoveryQuery::default()).join(" "));
    assert_eq!(&args[7..], ["-version", "[17.0,18.0)"]);
    assert!(args.iter().any(|a| a == VC_TOOLS_COMPONENT));
}

#[test]
fn test_vcvarsall_path() {
    let path = vcvarsall_path(Path::new("VS"));
    let parts: Vec<_> = path.components().map(|c| c.as_os_str().to_owned()).collect();
    assert_eq!(
        parts,
        ["VS", "VC", "Auxiliary", "Build", "vcvarsall.bat"].map(OsString::from)
    );
}

#[test]
fn test_locate_override_skips_every_other_lookup() {
    let query = DiscoveryQuery::builder()
        .override_path(PathBuf::from("custom"))
        .build();

    let path = locate_with(
        &query,
        |_| panic!("PATH must not be searched"),
        || panic!("ProgramFiles(x86) must not be read"),
    );

    assert_eq!(path, Path::new("custom").join(VSWHERE_EXE));
}

#[test]
fn test_locate_override_is_not_checked_for_existence() {
    let query = DiscoveryQuery::builder()
        .override_path(PathBuf::from("definitely/not/here"))
        .build();
    let path = locate_with(&query, |_| None, || None);
    assert!(!path.exists());
    assert!(path.ends_with(VSWHERE_EXE));
}

#[test]
fn test_locate_prefers_path_search() {
    let found = PathBuf::from("tools").join("vswhere.exe");
    let expected = found.clone();

    let path = locate_with(
        &DiscoveryQuery::default(),
        |name| {
            assert_eq!(name, "vswhere");
            Some(found)
        },
        || panic!("fallback must not be consulted after a PATH hit"),
    );

    assert_eq!(path, expected);
}

#[test]
fn test_locate_falls_back_to_program_files() {
    let path = locate_with(
        &DiscoveryQuery::default(),
        |_| None,
        || Some(OsString::from("PF86")),
    );
    assert_eq!(
        path,
        Path::new("PF86")
            .join("Microsoft Visual Studio")
            .join("Installer")
            .join(VSWHERE_EXE)
    );
}

#[test]
fn test_locate_fallback_without_program_files_variable() {
    let path = locate_with(&DiscoveryQuery::default(), |_| None, || None);
    assert!(path.starts_with(r"C:\Program Files (x86)"));
    assert!(path.ends_with(VSWHERE_EXE));
}

#[tokio::test]
async fn test_resolve_missing_tool() {
    let dir = tempfile::tempdir().unwrap();
    let tool = dir.path().join(VSWHERE_EXE);

    let err = resolve(&tool, &DiscoveryQuery::default()).await.unwrap_err();

    match err {
        SetupError::ToolNotFound { path } => assert_eq!(path, tool),
        other => panic!("expected ToolNotFound, got {other:?}"),
    }
}

#[cfg(unix)]
mod fake_vswhere {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    /// Writes an executable `vswhere.exe` shell script that logs its arguments.
    fn write_tool(dir: &Path, body: &str) -> PathBuf {
        let tool = dir.join(VSWHERE_EXE);
        let log = dir.join("args.txt");
        let script = format!("#!/bin/sh\necho \"$@\" > '{}'\n{body}\n", log.display());
        std::fs::write(&tool, script).unwrap();
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();
        tool
    }

    fn make_installation(dir: &Path) -> PathBuf {
        let root = dir.join("VS").join("2022");
        let script = vcvarsall_path(&root);
        std::fs::create_dir_all(script.parent().unwrap()).unwrap();
        std::fs::write(&script, "@echo off\r\n").unwrap();
        root
    }

    #[tokio::test]
    async fn test_resolve_returns_printed_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = make_installation(dir.path());
        let tool = write_tool(dir.path(), &format!("printf '%s\\r\\n' '{}'", root.display()));

        let installation = resolve(&tool, &DiscoveryQuery::default()).await.unwrap();

        assert_eq!(installation.root(), root);
        assert_eq!(installation.vcvarsall(), vcvarsall_path(&root));
        let logged = std::fs::read_to_string(dir.path().join("args.txt")).unwrap();
        assert_eq!(logged.trim_end(), query_args(&DiscoveryQuery::default()).join(" "));
    }

    #[tokio::test]
    async fn test_resolve_passes_requested_version() {
        let dir = tempfile::tempdir().unwrap();
        let root = make_installation(dir.path());
        let tool = write_tool(dir.path(), &format!("echo '{}'", root.display()));
        let query = DiscoveryQuery::builder().requested_version("16.11").build();

        resolve(&tool, &query).await.unwrap();

        let logged = std::fs::read_to_string(dir.path().join("args.txt")).unwrap();
        assert!(logged.trim_end().ends_with("-version 16.11"), "{logged}");
    }

    #[tokio::test]
    async fn test_resolve_empty_output_is_no_installation() {
        let dir = tempfile::tempdir().unwrap();
        let tool = write_tool(dir.path(), "printf '\\r\\n'");
        let query = DiscoveryQuery::builder().requested_version("15.0").build();

        let err = resolve(&tool, &query).await.unwrap_err();

        match err {
            SetupError::NoInstallation { version } => assert_eq!(version, "15.0"),
            other => panic!("expected NoInstallation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_nonzero_exit_wins_over_printed_path() {
        let dir = tempfile::tempdir().unwrap();
        let root = make_installation(dir.path());
        let tool = write_tool(
            dir.path(),
            &format!("echo '{}'\necho 'Error 0x57: bad argument' >&2\nexit 87", root.display()),
        );

        let err = resolve(&tool, &DiscoveryQuery::default()).await.unwrap_err();

        match err {
            SetupError::ExecFailed { command, code, stderr } => {
                assert_eq!(command, "vswhere");
                assert_eq!(code, 87);
                assert_eq!(stderr, "Error 0x57: bad argument");
            }
            other => panic!("expected ExecFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_decodes_oem_output() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("VS").join("Студия");
        let script = vcvarsall_path(&root);
        std::fs::create_dir_all(script.parent().unwrap()).unwrap();
        std::fs::write(&script, "@echo off\r\n").unwrap();
        // "Студия" in the OEM code page.
        let tool = write_tool(
            dir.path(),
            &format!(
                "printf '%s/VS/\\221\\342\\343\\244\\250\\357\\r\\n' '{}'",
                dir.path().display()
            ),
        );

        let installation = resolve(&tool, &DiscoveryQuery::default()).await.unwrap();

        assert_eq!(installation.root(), root);
        assert_eq!(installation.vcvarsall(), script);
    }

    #[tokio::test]
    async fn test_resolve_missing_script() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("Empty");
        std::fs::create_dir_all(&root).unwrap();
        let tool = write_tool(dir.path(), &format!("echo '{}'", root.display()));

        let err = resolve(&tool, &DiscoveryQuery::default()).await.unwrap_err();

        match err {
            SetupError::ScriptMissing { path } => assert_eq!(path, vcvarsall_path(&root)),
            other => panic!("expected ScriptMissing, got {other:?}"),
        }
    }
}
