use std::fmt;

use crate::lookup::LookupOutcome;
use crate::models::ResourceRecord;

/// Append-only list of lookup results, in arrival order.
#[derive(Debug, Default)]
pub struct ResultList {
    records: Vec<ResourceRecord>,
}

impl ResultList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record to the end of the list and returns its 1-based
    /// position. Existing entries are never reordered or rewritten, and
    /// duplicate submissions each get their own entry.
    pub fn append(&mut self, record: ResourceRecord) -> usize {
        self.records.push(record);
        self.records.len()
    }

    /// Folds a lookup outcome into the list.
    ///
    /// A successful lookup is appended and returned together with its
    /// position. A failed lookup only emits a warning and leaves the list
    /// untouched.
    pub fn apply(&mut self, outcome: LookupOutcome) -> Option<(usize, &ResourceRecord)> {
        match outcome.result {
            Ok(record) => {
                let position = self.append(record);
                self.records.last().map(|record| (position, record))
            }
            Err(error) => {
                warn!(
                    "Failed to look up {} `{}`: {error}",
                    outcome.kind, outcome.identifier
                );
                None
            }
        }
    }

    pub fn records(&self) -> &[ResourceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl fmt::Display for ResultList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, record) in self.records.iter().enumerate() {
            let position = index + 1;
            writeln!(f, "{position}. {} ({})", record.display_name(), record.kind())?;
            writeln!(f, "   {}", record.caption())?;
        }

        Ok(())
    }
}
