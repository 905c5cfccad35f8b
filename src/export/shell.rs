// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shell and JSON renderings of exported variables.
//!
//! ```text
//! cmd         set "INCLUDE=C:\VS\include"
//! powershell  $env:INCLUDE = 'C:\VS\include'
//!             ${env:ProgramFiles(x86)} = '...'
//! bash        export INCLUDE='C:\VS\include'
//! json        {"INCLUDE": "C:\\VS\\include"}
//! ```

use super::EnvSink;
use crate::error::Result;
use serde_json::{Map, Value};
use std::io::Write;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dialect {
    Cmd,
    Powershell,
    Bash,
}

/// Writes one assignment per line in a shell's syntax.
#[derive(Debug)]
pub struct ShellSink<W: Write> {
    dialect: Dialect,
    out: W,
}

impl<W: Write> ShellSink<W> {
    pub const fn cmd(out: W) -> Self {
        Self {
            dialect: Dialect::Cmd,
            out,
        }
    }

    pub const fn powershell(out: W) -> Self {
        Self {
            dialect: Dialect::Powershell,
            out,
        }
    }

    pub const fn bash(out: W) -> Self {
        Self {
            dialect: Dialect::Bash,
            out,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EnvSink for ShellSink<W> {
    fn export(&mut self, name: &str, value: &str) -> Result<()> {
        match self.dialect {
            Dialect::Cmd => writeln!(self.out, "set \"{name}={value}\"")?,
            Dialect::Powershell => {
                let value = value.replace('\'', "''");
                if is_identifier(name) {
                    writeln!(self.out, "$env:{name} = '{value}'")?;
                } else {
                    writeln!(self.out, "${{env:{name}}} = '{value}'")?;
                }
            }
            Dialect::Bash => {
                if !is_identifier(name) {
                    warn!(name, "skipping variable that is not a valid shell identifier");
                    return Ok(());
                }
                writeln!(self.out, "export {name}={}", single_quote(value))?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Collects variables and writes them as one JSON object on finish.
#[derive(Debug)]
pub struct JsonSink<W: Write> {
    values: Map<String, Value>,
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            values: Map::new(),
            out,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EnvSink for JsonSink<W> {
    fn export(&mut self, name: &str, value: &str) -> Result<()> {
        self.values
            .insert(name.to_string(), Value::String(value.to_string()));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let values = std::mem::take(&mut self.values);
        serde_json::to_writer_pretty(&mut self.out, &values)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn single_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
