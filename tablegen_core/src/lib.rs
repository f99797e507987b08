//! # tablegen_core
//!
//! Engine behind the handler table generators. A hand-written header marks handlers with a
//! prefix token:
//!
//! ```text
//! BUILTIN_TABLE int do_builtin_cd(int argc, std::string argv[]);
//! SIGNAL_TABLE void handle_sigchld(int signum);
//! ```
//!
//! and the generator emits a second header with the matching dispatch arrays and a count.
//! One run is a straight pipeline:
//!
//! ```text
//! LineScanner -> parse_entry -> TableBuilder -> GeneratedHeader -> write_header
//! ```
//!
//! The whole input is scanned and validated before the output path is touched.

pub mod builder;
pub mod emitter;
pub mod error;
pub mod parser;
pub mod profile;
pub mod scanner;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

pub use builder::{GeneratedTable, TableBuilder};
pub use emitter::{GeneratedHeader, write_header};
pub use error::{ParseError, ParseErrorKind, TableError, TableResult};
pub use parser::{TableEntry, parse_entry};
pub use profile::{BUILTINS, LabelCase, LabelLiteral, LabelRule, PROFILES, SIGHANDLERS, TableProfile};
pub use scanner::{LineScanner, ScannedLine};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub profile: &'static str,
    pub output: PathBuf,
    pub count: usize,
}

/// Scans `input` with `profile` and returns the validated table.
pub fn scan_table(input: &Path, profile: &TableProfile) -> TableResult<GeneratedTable> {
    let mut builder = TableBuilder::new();
    for line in LineScanner::open(input, profile.prefix)? {
        let line = line?;
        let entry = parse_entry(&line, &profile.label_rule).map_err(|source| TableError::Parse {
            path: input.to_path_buf(),
            source,
        })?;
        debug!(
            line = entry.line_number,
            identifier = %entry.primary_identifier,
            label = %entry.secondary_label,
            "table entry"
        );
        builder.push(entry);
    }
    Ok(builder.finish())
}

/// Renders the header text for `input` without writing anything.
pub fn render_table(input: &Path, profile: &TableProfile) -> TableResult<String> {
    let table = scan_table(input, profile)?;
    Ok(GeneratedHeader::new(&table, profile).render())
}

/// Runs one instantiation with its input and output resolved against `root`.
pub fn generate(profile: &TableProfile, root: &Path) -> TableResult<GenerateReport> {
    generate_between(
        profile,
        &profile.input_path(root),
        &profile.output_path(root),
    )
}

/// Runs one instantiation between explicit paths.
pub fn generate_between(
    profile: &TableProfile,
    input: &Path,
    output: &Path,
) -> TableResult<GenerateReport> {
    let table = scan_table(input, profile)?;
    let header = GeneratedHeader::new(&table, profile);
    write_header(output, &header.render())?;

    info!(
        profile = profile.name,
        entries = table.count(),
        output = %output.display(),
        "generated table header"
    );

    Ok(GenerateReport {
        profile: profile.name,
        output: output.to_path_buf(),
        count: table.count(),
    })
}
