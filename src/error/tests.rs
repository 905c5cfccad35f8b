// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, SetupError};
use std::path::PathBuf;

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "discovery".to_string(),
        key: "vs_version".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"missing required config key 'vs_version' in section '[discovery]'"
    );
}

#[test]
fn test_exec_failed_carries_stderr() {
    let err = SetupError::ExecFailed {
        command: "vcvarsall.bat".to_string(),
        code: 1,
        stderr: "  The input line is too long.\r\n".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"vcvarsall.bat failed with exit code 1: The input line is too long."
    );
}

#[test]
fn test_empty_stderr_placeholder() {
    let err = SetupError::ParseEmpty {
        command: "vcvarsall.bat".to_string(),
        stderr: String::new(),
    };
    assert!(err.to_string().ends_with("<no error output>"));
}

#[test]
fn test_path_variants_mention_path() {
    let tool = SetupError::ToolNotFound {
        path: PathBuf::from("/opt/vswhere.exe"),
    };
    let script = SetupError::ScriptMissing {
        path: PathBuf::from("/vs/VC/Auxiliary/Build/vcvarsall.bat"),
    };
    assert!(tool.to_string().contains("/opt/vswhere.exe"));
    assert!(script.to_string().contains("vcvarsall.bat"));
}
