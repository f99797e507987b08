//! # Header Emitter
//!
//! Renders a completed [`GeneratedTable`] into an include-guarded C header and puts it in
//! place of the previous one.
//!
//! ```text
//! #ifndef BUILTIN_LIST_H
//! #define BUILTIN_LIST_H
//!
//! #include <builtin.h>
//!
//! const builtin_t builtin_list[] = {do_builtin_cd, do_builtin_pwd};
//!
//! const char *builtin_commands_list[] = {"cd", "pwd"};
//!
//! int num_builtins = 2;
//!
//! #endif
//! ```
//!
//! The file is replaced, never appended to. The new text is staged in a temporary file next
//! to the target and renamed over it, so a failed run leaves the previous header intact.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::builder::GeneratedTable;
use crate::error::{TableError, TableResult};
use crate::profile::{LabelLiteral, TableProfile};

/// Everything the generated header contains, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedHeader {
    pub guard_name: String,
    pub include_target: String,
    pub primary_decl: String,
    pub primary_array: String,
    pub secondary_decl: String,
    pub secondary_array: String,
    pub count_name: String,
    pub count: usize,
}

impl GeneratedHeader {
    pub fn new(table: &GeneratedTable, profile: &TableProfile) -> Self {
        let labels = table.labels().map(|label| match profile.label_literal {
            LabelLiteral::Quoted => format!("\"{label}\""),
            LabelLiteral::Bare => label.to_string(),
        });

        Self {
            guard_name: profile.guard.to_string(),
            include_target: profile.include_target.to_string(),
            primary_decl: profile.primary_decl.to_string(),
            primary_array: brace_list(table.identifiers()),
            secondary_decl: profile.secondary_decl.to_string(),
            secondary_array: brace_list(labels),
            count_name: profile.count_name.to_string(),
            count: table.count(),
        }
    }

    /// Full header text. Deterministic for a given table and profile.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("#ifndef {}\n", self.guard_name));
        out.push_str(&format!("#define {}\n\n", self.guard_name));
        out.push_str(&format!("#include <{}>\n\n", self.include_target));
        out.push_str(&format!("{}[] = {};\n\n", self.primary_decl, self.primary_array));
        out.push_str(&format!("{}[] = {};\n\n", self.secondary_decl, self.secondary_array));
        out.push_str(&format!("int {} = {};\n\n", self.count_name, self.count));
        out.push_str("#endif\n");
        out
    }
}

/// `{a, b, c}`, or `{}` for nothing.
fn brace_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::from("{");
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(item.as_ref());
    }
    out.push('}');
    out
}

/// Replaces `path` with `contents` through a staged temporary file.
pub fn write_header(path: &Path, contents: &str) -> TableResult<()> {
    let output_error = |source: io::Error| TableError::Output {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir).map_err(output_error)?;
    staged.write_all(contents.as_bytes()).map_err(output_error)?;
    staged.as_file().sync_all().map_err(output_error)?;

    // Temp files are created owner-only; generated headers should read like any source file.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(staged.path(), fs::Permissions::from_mode(0o644))
            .map_err(output_error)?;
    }

    // Dropping a NamedTempFile that was never persisted removes it.
    staged.persist(path).map_err(|e| output_error(e.error))?;
    Ok(())
}
