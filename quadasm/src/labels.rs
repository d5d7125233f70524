use std::str::FromStr;

use indexmap::IndexMap;
use libquad::reg::Register;

use crate::error::AsmError;

/// Label definitions in source order, keyed by uppercased name.
#[derive(Debug, Clone, Default)]
pub struct Labels {
    labels: IndexMap<String, usize>,
}

impl Labels {
    pub fn new() -> Self {
        Self {
            labels: IndexMap::new(),
        }
    }

    /// Record a definition at the given output offset. Each name may be
    /// defined once, and register names are reserved.
    pub fn add(&mut self, name: &str, offset: usize) -> Result<(), AsmError> {
        let name = name.to_uppercase();
        if self.labels.contains_key(&name) {
            return Err(AsmError::DuplicateLabel(name));
        }
        if Register::from_str(&name).is_ok() {
            return Err(AsmError::ReservedName(name));
        }

        self.labels.insert(name, offset);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.labels.get(name).copied()
    }
}
