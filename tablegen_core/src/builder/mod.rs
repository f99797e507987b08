//! Table builder: order-preserving accumulator over parsed entries.

use crate::parser::TableEntry;

/// Entries collected so far. Appends only; nothing is filtered or deduplicated.
#[derive(Debug, Default)]
pub struct TableBuilder {
    entries: Vec<TableEntry>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: TableEntry) {
        self.entries.push(entry);
    }

    /// Freezes the accumulated entries.
    pub fn finish(self) -> GeneratedTable {
        GeneratedTable {
            entries: self.entries,
        }
    }
}

/// Completed table, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedTable {
    entries: Vec<TableEntry>,
}

impl GeneratedTable {
    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    /// Always equal to `entries().len()`.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.primary_identifier.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.secondary_label.as_str())
    }
}
