//! Species → base stat total lookup.
//!
//! The built-in table covers Gen I–II (the default game is Crystal). A
//! `Pokemon,BST` CSV configured as `bst_file` replaces it entirely.

use crate::errors::{AppError, AppResult};
use crate::models::views::BstEntry;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

const BUILTIN_TABLE: &str = include_str!("../../data/bst.csv");

#[derive(Debug, Deserialize)]
struct BstRecord {
    #[serde(rename = "Pokemon")]
    pokemon: String,
    #[serde(rename = "BST")]
    bst: u32,
}

#[derive(Debug, Clone, Default)]
pub struct BstTable {
    exact: HashMap<String, u32>,
    folded: HashMap<String, u32>,
}

impl BstTable {
    pub fn builtin() -> AppResult<Self> {
        Self::from_reader(BUILTIN_TABLE.as_bytes())
    }

    pub fn from_path(path: &Path) -> AppResult<Self> {
        let file = std::fs::File::open(path).map_err(|e| {
            AppError::BstTable(format!("cannot open {}: {e}", path.display()))
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> AppResult<Self> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut table = Self::default();

        for record in rdr.deserialize::<BstRecord>() {
            let rec = record?;
            table.insert(rec.pokemon, rec.bst);
        }

        if table.exact.is_empty() {
            return Err(AppError::BstTable("table has no entries".into()));
        }
        Ok(table)
    }

    /// Configured override file if any, otherwise the built-in table.
    pub fn load(bst_file: Option<&Path>) -> AppResult<Self> {
        match bst_file {
            Some(path) => {
                let table = Self::from_path(path)?;
                tracing::info!(path = %path.display(), species = table.len(), "Loaded BST table");
                Ok(table)
            }
            None => Self::builtin(),
        }
    }

    pub fn insert(&mut self, pokemon: String, bst: u32) {
        // first spelling wins for case-insensitive lookups
        self.folded.entry(pokemon.to_lowercase()).or_insert(bst);
        self.exact.insert(pokemon, bst);
    }

    /// Exact match first, then case-insensitive.
    pub fn lookup(&self, pokemon: &str) -> Option<u32> {
        self.exact
            .get(pokemon)
            .or_else(|| self.folded.get(&pokemon.to_lowercase()))
            .copied()
    }

    /// BST for a species, 0 when unknown.
    pub fn bst_of(&self, pokemon: &str) -> u32 {
        self.lookup(pokemon).unwrap_or(0)
    }

    /// Whole table sorted by name.
    pub fn listing(&self) -> Vec<BstEntry> {
        let mut rows: Vec<BstEntry> = self
            .exact
            .iter()
            .map(|(pokemon, &bst)| BstEntry {
                pokemon: pokemon.clone(),
                bst,
            })
            .collect();
        rows.sort_by(|a, b| a.pokemon.cmp(&b.pokemon));
        rows
    }

    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}
