//! Host information printed by `os`

use crate::command::OsQuery;
use crate::AppError;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";

#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Lines to print for an `os` flag
pub fn describe(query: OsQuery) -> Result<Vec<String>, AppError> {
    match query {
        OsQuery::Eol => {
            let quoted = serde_json::to_string(LINE_ENDING)
                .map_err(|e| AppError::OperationFailed(e.to_string()))?;
            Ok(vec![quoted])
        }
        OsQuery::Cpus => Ok(cpu_lines()),
        OsQuery::Homedir => {
            let home = dirs_next::home_dir()
                .ok_or_else(|| AppError::OperationFailed("home directory unknown".into()))?;
            Ok(vec![home.display().to_string()])
        }
        OsQuery::Username => Ok(vec![whoami::username()]),
        OsQuery::Architecture => Ok(vec![std::env::consts::ARCH.to_string()]),
    }
}

fn cpu_lines() -> Vec<String> {
    let sys = System::new_with_specifics(
        RefreshKind::new().with_cpu(CpuRefreshKind::everything()),
    );
    let cpus = sys.cpus();

    let mut lines = Vec::with_capacity(cpus.len() + 1);
    lines.push(format!("Overall amount of CPUs: {}", cpus.len()));
    for (i, cpu) in cpus.iter().enumerate() {
        lines.push(format!(
            "{}: {} ({:.2} GHz)",
            i + 1,
            cpu.brand().trim(),
            cpu.frequency() as f64 / 1000.0
        ));
    }
    lines
}
