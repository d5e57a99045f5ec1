//! Writing PNG images to the system clipboard.
//!
//! There is no portable clipboard API, so the image is handed to a platform
//! command on stdin (or through a temp file for `osascript`).

use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("No clipboard command available on this system")]
    Unsupported,
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("{program} failed: {stderr}")]
    CommandFailed { program: String, stderr: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination for captured images.
pub trait ClipboardSink: Send + Sync {
    /// Place `png` on the clipboard as `image/png`. Blocks until done.
    fn write_png(&self, png: &[u8]) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Backend {
    /// Program that reads PNG bytes from stdin.
    Stdin { program: String, args: Vec<String> },
    /// macOS `osascript`, reading the image from a file.
    AppleScript,
}

/// Clipboard backed by a platform command.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    command_override: Option<Vec<String>>,
}

impl SystemClipboard {
    /// `command` overrides detection when non-empty; it is split on
    /// whitespace and receives the PNG on stdin.
    pub fn new(command: &str) -> Self {
        let parts: Vec<String> = command.split_whitespace().map(str::to_string).collect();
        Self {
            command_override: (!parts.is_empty()).then_some(parts),
        }
    }

    fn backend(&self) -> Result<Backend, ClipboardError> {
        if let Some((program, args)) = self.command_override.as_deref().and_then(<[String]>::split_first) {
            return Ok(Backend::Stdin {
                program: program.clone(),
                args: args.to_vec(),
            });
        }
        detect_backend(
            cfg!(target_os = "macos"),
            std::env::var_os("WAYLAND_DISPLAY").is_some(),
            std::env::var_os("DISPLAY").is_some(),
        )
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_png(&self, png: &[u8]) -> Result<(), ClipboardError> {
        match self.backend()? {
            Backend::Stdin { program, args } => pipe_to(&program, &args, png),
            Backend::AppleScript => write_via_osascript(png),
        }
    }
}

fn detect_backend(macos: bool, wayland: bool, x11: bool) -> Result<Backend, ClipboardError> {
    let stdin = |program: &str, args: &[&str]| Backend::Stdin {
        program: program.to_string(),
        args: args.iter().map(|a| a.to_string()).collect(),
    };
    if macos {
        Ok(Backend::AppleScript)
    } else if wayland {
        Ok(stdin("wl-copy", &["--type", "image/png"]))
    } else if x11 {
        Ok(stdin("xclip", &["-selection", "clipboard", "-t", "image/png", "-i"]))
    } else {
        Err(ClipboardError::Unsupported)
    }
}

fn pipe_to(program: &str, args: &[String], data: &[u8]) -> Result<(), ClipboardError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| ClipboardError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        // A program that exits early closes the pipe; its exit status decides.
        match stdin.write_all(data) {
            Err(e) if e.kind() != ErrorKind::BrokenPipe => return Err(e.into()),
            _ => {}
        }
    }

    let output = child.wait_with_output()?;
    if !output.status.success() {
        return Err(ClipboardError::CommandFailed {
            program: program.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    tracing::debug!(program, bytes = data.len(), "Image written to clipboard");
    Ok(())
}

fn write_via_osascript(png: &[u8]) -> Result<(), ClipboardError> {
    let tmp_file: PathBuf = std::env::temp_dir().join(format!("got-paid-clipboard-{}.png", std::process::id()));
    std::fs::write(&tmp_file, png)?;

    let script = format!(
        "set the clipboard to (read (POSIX file \"{}\") as «class PNGf»)",
        tmp_file.display()
    );
    let result = Command::new("osascript")
        .arg("-e")
        .arg(script)
        .output()
        .map_err(|source| ClipboardError::Spawn {
            program: "osascript".into(),
            source,
        });
    let _ = std::fs::remove_file(&tmp_file);

    let output = result?;
    if !output.status.success() {
        return Err(ClipboardError::CommandFailed {
            program: "osascript".into(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_is_split_on_whitespace() {
        let clipboard = SystemClipboard::new("  xclip -selection clipboard ");
        assert_eq!(
            clipboard.backend().unwrap(),
            Backend::Stdin {
                program: "xclip".into(),
                args: vec!["-selection".into(), "clipboard".into()],
            }
        );
    }

    #[test]
    fn detection_order() {
        assert_eq!(detect_backend(true, true, true).unwrap(), Backend::AppleScript);
        assert!(matches!(
            detect_backend(false, true, true).unwrap(),
            Backend::Stdin { program, .. } if program == "wl-copy"
        ));
        assert!(matches!(
            detect_backend(false, false, true).unwrap(),
            Backend::Stdin { program, .. } if program == "xclip"
        ));
        assert!(matches!(
            detect_backend(false, false, false),
            Err(ClipboardError::Unsupported)
        ));
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let clipboard = SystemClipboard::new("got-paid-no-such-clipboard-tool");
        assert!(matches!(
            clipboard.write_png(b"png"),
            Err(ClipboardError::Spawn { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn command_receives_bytes_and_reports_exit_status() {
        assert!(SystemClipboard::new("cat").write_png(&[0x89, b'P', b'N', b'G']).is_ok());
        assert!(matches!(
            SystemClipboard::new("false").write_png(b"png"),
            Err(ClipboardError::CommandFailed { program, .. }) if program == "false"
        ));
    }
}
