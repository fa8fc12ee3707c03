use std::sync::Once;
use std::time::Duration;

use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tokio::process::{Child, ChildStderr, Command};

static INIT: Once = Once::new();

/// How long a child gets to report readiness or to exit after a signal
pub const DEADLINE: Duration = Duration::from_secs(5);

/// Sets up the tracing subscriber for tests, ensuring it's only initialized once.
pub fn setup_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt::init();
    });
}

/// A running pause binary with its stderr attached
pub struct PauseChild {
    pub child: Child,
    pub stderr: Lines<BufReader<ChildStderr>>,
}

impl PauseChild {
    /// Spawn the binary and wait until its handler is installed
    pub async fn spawn_ready() -> Self {
        let mut child = Command::new(env!("CARGO_BIN_EXE_pause"))
            .env("RUST_LOG", "debug")
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .expect("spawn pause binary");

        let stderr = child.stderr.take().expect("piped stderr");
        let mut stderr = BufReader::new(stderr).lines();

        tokio::time::timeout(DEADLINE, async {
            while let Some(line) = stderr.next_line().await.expect("read stderr") {
                if line.contains("waiting for termination signal") {
                    return;
                }
            }
            panic!("pause exited before installing its handler");
        })
        .await
        .expect("pause did not become ready in time");

        Self { child, stderr }
    }

    pub fn signal(&self, signal: Signal) {
        let pid = self.child.id().expect("child still running") as i32;
        kill(Pid::from_raw(pid), signal).expect("send signal");
    }

    /// Remaining stderr lines after the process has exited
    pub async fn drain_stderr(&mut self) -> Vec<String> {
        let mut lines = Vec::new();
        while let Some(line) = self.stderr.next_line().await.expect("read stderr") {
            lines.push(line);
        }
        lines
    }
}
