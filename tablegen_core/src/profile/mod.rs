//! # Table Profiles
//!
//! A profile is the whole configuration of one generator instantiation: which lines to
//! pick up, how to name them, and what the generated header looks like. Two profiles are
//! built in, one for shell builtins and one for signal handlers.
//!
//! ```text
//! +--------------+----------------+----------------------------+---------------------+
//! | Profile      | Prefix         | Label                      | Output              |
//! +--------------+----------------+----------------------------+---------------------+
//! | builtins     | BUILTIN_TABLE  | `_` segment 2, quoted      | builtin_list.h      |
//! | sighandlers  | SIGNAL_TABLE   | `_` segment 1, upper, bare | sighandler_list.h   |
//! +--------------+----------------+----------------------------+---------------------+
//! ```

use std::path::{Path, PathBuf};

use crate::error::{TableError, TableResult};

/// Case applied to a label segment after it is cut out of the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelCase {
    Keep,
    Upper,
}

/// How labels are spelled inside the generated array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelLiteral {
    /// `"cd"`, for `const char *` tables.
    Quoted,
    /// `SIGCHLD`, for tables of constants.
    Bare,
}

/// Derivation of the secondary label from the primary identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelRule {
    /// Zero-based index into the `_`-separated segments of the identifier.
    pub segment: usize,
    pub case: LabelCase,
}

impl LabelRule {
    pub const fn new(segment: usize, case: LabelCase) -> Self {
        Self { segment, case }
    }
}

/// Configuration of one generator instantiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableProfile {
    pub name: &'static str,
    /// Literal that a table line must start with.
    pub prefix: &'static str,
    /// Input header, relative to the working directory.
    pub input: &'static str,
    /// Generated header, relative to the working directory.
    pub output: &'static str,
    pub guard: &'static str,
    /// Logical name used in the `#include` directive.
    pub include_target: &'static str,
    /// Declaration of the identifier array, without `[]`.
    pub primary_decl: &'static str,
    /// Declaration of the label array, without `[]`.
    pub secondary_decl: &'static str,
    /// Name of the `int` holding the entry count.
    pub count_name: &'static str,
    pub label_rule: LabelRule,
    pub label_literal: LabelLiteral,
}

/// Shell builtins: `BUILTIN_TABLE int do_builtin_cd(...)` becomes `do_builtin_cd` / `"cd"`.
pub const BUILTINS: TableProfile = TableProfile {
    name: "builtins",
    prefix: "BUILTIN_TABLE",
    input: "include/builtin.h",
    output: "include/builtin_list.h",
    guard: "BUILTIN_LIST_H",
    include_target: "builtin.h",
    primary_decl: "const builtin_t builtin_list",
    secondary_decl: "const char *builtin_commands_list",
    count_name: "num_builtins",
    label_rule: LabelRule::new(2, LabelCase::Keep),
    label_literal: LabelLiteral::Quoted,
};

/// Signal handlers: `SIGNAL_TABLE void handle_sigchld(int)` becomes `handle_sigchld` / `SIGCHLD`.
pub const SIGHANDLERS: TableProfile = TableProfile {
    name: "sighandlers",
    prefix: "SIGNAL_TABLE",
    input: "include/signal_handlers.h",
    output: "include/sighandler_list.h",
    guard: "SIGHANDLER_LIST_H",
    include_target: "signal_handlers.h",
    primary_decl: "sighandler_t signal_handler_list",
    secondary_decl: "int signum_list",
    count_name: "num_sighandlers",
    label_rule: LabelRule::new(1, LabelCase::Upper),
    label_literal: LabelLiteral::Bare,
};

/// Every built-in profile, in a stable order.
pub const PROFILES: [TableProfile; 2] = [BUILTINS, SIGHANDLERS];

impl TableProfile {
    /// Looks a built-in profile up by name.
    pub fn by_name(name: &str) -> TableResult<TableProfile> {
        PROFILES
            .iter()
            .find(|p| p.name == name)
            .copied()
            .ok_or_else(|| TableError::UnknownProfile(name.to_string()))
    }

    pub fn input_path(&self, root: &Path) -> PathBuf {
        root.join(self.input)
    }

    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_finds_builtin_profiles() {
        assert_eq!(TableProfile::by_name("builtins").unwrap(), BUILTINS);
        assert_eq!(TableProfile::by_name("sighandlers").unwrap(), SIGHANDLERS);
    }

    #[test]
    fn test_by_name_rejects_unknown() {
        let err = TableProfile::by_name("aliases").unwrap_err();
        assert!(matches!(err, TableError::UnknownProfile(ref n) if n == "aliases"));
    }

    #[test]
    fn test_paths_share_include_dir() {
        let root = Path::new("/work");
        for p in PROFILES {
            let input = p.input_path(root);
            let output = p.output_path(root);
            assert_eq!(input.parent(), output.parent());
            assert_ne!(input, output);
            assert!(input.ends_with(p.include_target));
        }
    }
}
