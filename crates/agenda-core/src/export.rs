//! Writing rendered reports into the export directory and reading them back.
//!
//! A report is rendered fully in memory first. The bytes then go to a hidden
//! temporary file in the export directory, which is renamed into place
//! without overwriting anything. A failed export therefore never leaves a
//! partial file under a visible name.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use jiff::Zoned;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::{AgendaError, Result};
use crate::models::{ExportFormat, PlanRecord};
use crate::render::render;
use crate::view::PlanView;

/// Prefix of in-flight temporary files. Names starting with `.` are never
/// served by [`read_export`].
const TEMP_PREFIX: &str = ".export-";

/// A document written to the export directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedFile {
    pub plan_id: String,
    pub format: ExportFormat,
    /// Full path of the written file
    pub path: PathBuf,
    /// Bare file name, usable with [`read_export`]
    pub file_name: String,
    /// Size in bytes
    pub size: u64,
}

/// Base file name for an export, e.g. `action_plan_abc_20240305_143000.pdf`.
///
/// Characters of the plan ID outside `[A-Za-z0-9_-]` are replaced by `_`.
///
/// ```rust
/// use agenda_core::export::export_file_name;
/// use agenda_core::models::ExportFormat;
/// use jiff::civil::date;
/// use jiff::tz::TimeZone;
///
/// let at = date(2024, 3, 5).at(14, 30, 0, 0).to_zoned(TimeZone::UTC).unwrap();
/// assert_eq!(
///     export_file_name("team/offsite", ExportFormat::Tabular, &at),
///     "event_plan_team_offsite_20240305_143000.xlsx"
/// );
/// ```
pub fn export_file_name(plan_id: &str, format: ExportFormat, at: &Zoned) -> String {
    let safe_id: String = plan_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!(
        "{}_{}_{}.{}",
        format.file_prefix(),
        safe_id,
        at.strftime("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Renders `record` and writes it into `dir`, creating the directory if
/// needed.
///
/// When the base name is taken (two exports within the same second), `_2`,
/// `_3`, ... is appended before the extension.
///
/// # Errors
///
/// Returns `AgendaError::RenderFailure` if the document cannot be built or
/// the output file cannot be written.
pub fn write_export(
    record: &PlanRecord,
    format: ExportFormat,
    dir: &Path,
    generated_at: &Zoned,
) -> Result<ExportedFile> {
    let view = PlanView::from_record(record);
    let bytes = render(&view, format, generated_at)?;

    fs::create_dir_all(dir).map_err(|e| write_failure(format, dir, &e))?;
    let mut temp = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .tempfile_in(dir)
        .map_err(|e| write_failure(format, dir, &e))?;
    temp.write_all(&bytes)
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| write_failure(format, temp.path(), &e))?;

    let base = export_file_name(&record.plan_id, format, generated_at);
    let (path, file_name) = persist_unique(temp, dir, &base, format)?;

    let size = bytes.len() as u64;
    info!("Exported plan {} as {format} to {}", record.plan_id, path.display());
    Ok(ExportedFile {
        plan_id: record.plan_id.clone(),
        format,
        path,
        file_name,
        size,
    })
}

/// An I/O failure while producing the output file of an export.
fn write_failure(format: ExportFormat, path: &Path, error: &io::Error) -> AgendaError {
    AgendaError::render_failure(format, format!("{}: {error}", path.display()))
}

/// Renames `temp` to `base`, or the first free suffixed variant of it.
fn persist_unique(
    mut temp: NamedTempFile,
    dir: &Path,
    base: &str,
    format: ExportFormat,
) -> Result<(PathBuf, String)> {
    let extension = format.extension();
    let stem = base
        .strip_suffix(extension)
        .and_then(|s| s.strip_suffix('.'))
        .unwrap_or(base);

    let mut attempt = 1u32;
    loop {
        let file_name = if attempt == 1 {
            base.to_string()
        } else {
            format!("{stem}_{attempt}.{extension}")
        };
        let path = dir.join(&file_name);
        match temp.persist_noclobber(&path) {
            Ok(_) => return Ok((path, file_name)),
            Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => {
                warn!("Export file {file_name} already exists, trying next suffix");
                temp = e.file;
                attempt += 1;
            }
            Err(e) => return Err(write_failure(format, &path, &e.error)),
        }
    }
}

/// Reads back a previously exported file by its bare name.
///
/// # Errors
///
/// Returns `AgendaError::FileNotFound` when the name is empty, contains a
/// path separator, is `.`/`..`, starts with `.`, or names no file.
pub fn read_export(dir: &Path, file_name: &str) -> Result<Vec<u8>> {
    let not_found = || AgendaError::FileNotFound {
        name: file_name.to_string(),
    };
    if !is_plain_file_name(file_name) {
        return Err(not_found());
    }

    let path = dir.join(file_name);
    match fs::read(&path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(not_found()),
        Err(e) => Err(AgendaError::file_system(path, e)),
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('.') && !name.contains(['/', '\\', '\0'])
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use jiff::tz::TimeZone;
    use tempfile::TempDir;

    use super::*;
    use crate::fixtures::{full_content, record};

    fn stamp() -> Zoned {
        date(2024, 3, 5).at(14, 30, 0, 0).to_zoned(TimeZone::UTC).unwrap()
    }

    #[test]
    fn test_file_names_per_format() {
        let at = stamp();
        assert_eq!(
            export_file_name("abc", ExportFormat::Paginated, &at),
            "action_plan_abc_20240305_143000.pdf"
        );
        assert_eq!(
            export_file_name("../x y", ExportFormat::Tabular, &at),
            "event_plan____x_y_20240305_143000.xlsx"
        );
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let exports = dir.path().join("nested/exports");
        let plan = record(Some(full_content()));

        let file = write_export(&plan, ExportFormat::Paginated, &exports, &stamp()).unwrap();
        assert_eq!(file.file_name, "action_plan_plan-1_20240305_143000.pdf");
        assert_eq!(file.path, exports.join(&file.file_name));

        let bytes = read_export(&exports, &file.file_name).unwrap();
        assert_eq!(bytes.len() as u64, file.size);
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_same_second_exports_get_suffixes() {
        let dir = TempDir::new().unwrap();
        let plan = record(None);
        let at = stamp();

        let first = write_export(&plan, ExportFormat::Paginated, dir.path(), &at).unwrap();
        let second = write_export(&plan, ExportFormat::Paginated, dir.path(), &at).unwrap();
        let third = write_export(&plan, ExportFormat::Paginated, dir.path(), &at).unwrap();

        assert_ne!(first.path, second.path);
        assert_eq!(second.file_name, "action_plan_plan-1_20240305_143000_2.pdf");
        assert_eq!(third.file_name, "action_plan_plan-1_20240305_143000_3.pdf");
        assert_eq!(
            fs::read(&first.path).unwrap(),
            fs::read(&second.path).unwrap()
        );
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let dir = TempDir::new().unwrap();
        write_export(&record(None), ExportFormat::Tabular, dir.path(), &stamp()).unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["event_plan_plan-1_20240305_143000.xlsx"]);
    }

    #[test]
    fn test_unwritable_export_dir_is_a_render_failure() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("exports");
        fs::write(&blocker, b"not a directory").unwrap();

        for target in [blocker.clone(), blocker.join("nested")] {
            let err = write_export(&record(None), ExportFormat::Paginated, &target, &stamp())
                .unwrap_err();
            assert!(
                matches!(err, AgendaError::RenderFailure { format: ExportFormat::Paginated, .. }),
                "{target:?} gave {err:?}"
            );
        }
        assert_eq!(fs::read(&blocker).unwrap(), b"not a directory");
    }

    #[test]
    fn test_read_rejects_unsafe_names() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".export-abc"), b"partial").unwrap();

        for name in ["", ".", "..", "../secret", "a/b", "a\\b", ".export-abc", "missing.pdf"] {
            let err = read_export(dir.path(), name).unwrap_err();
            assert!(
                matches!(err, AgendaError::FileNotFound { .. }),
                "{name:?} should be not found"
            );
        }
    }
}
