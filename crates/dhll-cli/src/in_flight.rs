use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

pub const LOCK_FILE_NAME: &str = "enhance.lock";

/// Held while an enhance request is outstanding. Removes the lock file on drop.
pub struct InFlightGuard {
    path: PathBuf,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Take the single-flight lock in `storage_dir`. A second enhance while one
/// is running is refused, never queued.
pub fn acquire(storage_dir: &Path) -> anyhow::Result<InFlightGuard> {
    let lock_path = storage_dir.join(LOCK_FILE_NAME);

    match try_acquire(&lock_path) {
        Ok(guard) => Ok(guard),
        Err(LockState::HeldBy(pid)) => {
            anyhow::bail!("another enhance request is in progress (pid {pid}); wait for it to finish")
        }
        Err(LockState::Stale) => {
            tracing::debug!(path = %lock_path.display(), "reclaiming stale enhance lock");
            let _ = std::fs::remove_file(&lock_path);
            try_acquire(&lock_path).map_err(|_| busy(&lock_path))
        }
        Err(LockState::Unknown) => Err(busy(&lock_path)),
    }
}

fn busy(lock_path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "could not take the enhance lock at {}; remove it if no dhll process is running",
        lock_path.display()
    )
}

#[derive(Debug)]
enum LockState {
    HeldBy(i32),
    Stale,
    Unknown,
}

fn try_acquire(lock_path: &Path) -> Result<InFlightGuard, LockState> {
    if let Some(parent) = lock_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    match OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(lock_path)
    {
        Ok(mut file) => {
            let _ = writeln!(file, "{}", std::process::id());
            Ok(InFlightGuard {
                path: lock_path.to_path_buf(),
            })
        }
        Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
            let mut pid_buf = String::new();
            if OpenOptions::new()
                .read(true)
                .open(lock_path)
                .and_then(|mut file| file.read_to_string(&mut pid_buf))
                .is_err()
            {
                return Err(LockState::Unknown);
            }

            match pid_buf.trim().parse::<i32>() {
                Ok(pid) if is_process_running(pid) => Err(LockState::HeldBy(pid)),
                Ok(_) => Err(LockState::Stale),
                Err(_) => Err(LockState::Unknown),
            }
        }
        Err(_) => Err(LockState::Unknown),
    }
}

fn is_process_running(pid: i32) -> bool {
    let proc_dir = Path::new("/proc");
    if proc_dir.is_dir() {
        return proc_dir.join(pid.to_string()).exists();
    }
    std::process::Command::new("kill")
        .arg("-0")
        .arg(pid.to_string())
        .stderr(std::process::Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
}
