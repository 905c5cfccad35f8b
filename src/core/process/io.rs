// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output streaming and capture for processes.
//!
//! ```text
//! run_child()
//!   stdout/stderr reader tasks (one per piped stream)
//!     read chunk --> KEEP_RAW: append bytes
//!                --> EncodedBuffer --> line
//!                      FORWARD_TO_LOG: trace!
//!                      callback:       on_stdout_line
//!                      KEEP_IN_STRING: collect
//!   wait for exit, then join readers
//!   --> ProcessOutput { exit_code, stdout, stderr, raw bytes }
//! ```
//!
//! Readers return what they captured through their `JoinHandle`, so a chatty
//! child never blocks on a full channel while the parent waits for it to exit.

use crate::error::{ProcessError, Result};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Child;
use tokio::task::JoinHandle;
use tracing::{trace, warn};

use super::builder::{LineCallback, ProcessBuilder, ProcessOutput, StreamFlags};
use crate::utility::encoding::{EncodedBuffer, Encoding};

const READ_CHUNK: usize = 8192;

/// Everything one stream produced.
#[derive(Debug, Default)]
struct Captured {
    lines: Vec<String>,
    raw: Vec<u8>,
}

impl Captured {
    fn into_parts(self) -> (String, Vec<u8>) {
        (self.lines.join("\n"), self.raw)
    }
}

/// Reads one child stream until EOF.
struct StreamReader {
    encoding: Encoding,
    flags: StreamFlags,
    process_name: String,
    stream_name: &'static str,
    callback: Option<LineCallback>,
}

impl StreamReader {
    fn spawn<R>(self, stream: Option<R>) -> Option<JoinHandle<Captured>>
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        stream.map(|stream| tokio::spawn(self.read(stream)))
    }

    async fn read<R>(mut self, mut reader: R) -> Captured
    where
        R: AsyncRead + Unpin,
    {
        let mut captured = Captured::default();
        let mut buffer = EncodedBuffer::new(self.encoding);
        let decode = self.decodes();
        let mut chunk = vec![0u8; READ_CHUNK];

        loop {
            match reader.read(&mut chunk).await {
                Ok(0) => break,
                Ok(n) => {
                    let bytes = &chunk[..n];
                    if self.flags.contains(StreamFlags::KEEP_RAW) {
                        captured.raw.extend_from_slice(bytes);
                    }
                    if decode {
                        for line in buffer.push(bytes) {
                            self.handle_line(line, &mut captured);
                        }
                    }
                }
                Err(e) => {
                    warn!(
                        process = %self.process_name,
                        stream = self.stream_name,
                        error = %e,
                        "error reading stream"
                    );
                    break;
                }
            }
        }

        if decode && let Some(line) = buffer.finish() {
            self.handle_line(line, &mut captured);
        }
        captured
    }

    /// Whether anybody looks at decoded lines.
    fn decodes(&self) -> bool {
        self.callback.is_some()
            || self
                .flags
                .intersects(StreamFlags::FORWARD_TO_LOG | StreamFlags::KEEP_IN_STRING)
    }

    fn handle_line(&mut self, line: String, captured: &mut Captured) {
        if self.flags.contains(StreamFlags::FORWARD_TO_LOG) {
            trace!(process = %self.process_name, stream = self.stream_name, line = %line, "output");
        }
        if let Some(callback) = self.callback.as_mut() {
            callback.call(&line);
        }
        if self.flags.contains(StreamFlags::KEEP_IN_STRING) {
            captured.lines.push(line);
        }
    }
}

async fn join_reader(handle: Option<JoinHandle<Captured>>, process_name: &str) -> Captured {
    let Some(handle) = handle else {
        return Captured::default();
    };
    handle.await.unwrap_or_else(|e| {
        warn!(process = %process_name, error = %e, "output reader task failed");
        Captured::default()
    })
}

impl ProcessBuilder {
    /// Streams the child's output and waits for it to exit.
    pub(super) async fn run_child(
        &self,
        name: &str,
        child: &mut Child,
        callback: Option<LineCallback>,
    ) -> Result<ProcessOutput> {
        let stdout_reader = StreamReader {
            encoding: self.stdout_config().encoding(),
            flags: self.stdout_config().flags(),
            process_name: name.to_string(),
            stream_name: "stdout",
            callback,
        };
        let stderr_reader = StreamReader {
            encoding: self.stderr_config().encoding(),
            flags: self.stderr_config().flags(),
            process_name: name.to_string(),
            stream_name: "stderr",
            callback: None,
        };

        let stdout_handle = stdout_reader.spawn(child.stdout.take());
        let stderr_handle = stderr_reader.spawn(child.stderr.take());

        let status = child
            .wait()
            .await
            .map_err(|e| ProcessError::OutputError {
                command: name.to_string(),
                message: e.to_string(),
            })?;

        let stdout = join_reader(stdout_handle, name).await;
        let stderr = join_reader(stderr_handle, name).await;

        Ok(ProcessOutput::new(
            status.code().unwrap_or(-1),
            stdout.into_parts(),
            stderr.into_parts(),
        ))
    }
}
