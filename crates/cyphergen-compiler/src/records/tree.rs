//! Generated record structures.

use std::collections::HashMap;

use indexmap::IndexMap;

use cyphergen_core::{EntityId, TypeExpr};

/// One generated record type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    /// Entity the record mirrors.
    pub entity: EntityId,
    /// Field name -> type, in attribute declaration order.
    pub fields: IndexMap<String, TypeExpr>,
}

/// Records of one generation pass, in emission order.
#[derive(Clone, Debug, Default)]
pub struct RecordTree {
    pub(super) records: Vec<Record>,
    pub(super) index: HashMap<EntityId, usize>,
    pub(super) names: HashMap<EntityId, String>,
}

impl RecordTree {
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record generated for `entity`.
    pub fn get(&self, entity: EntityId) -> Option<&Record> {
        self.index.get(&entity).map(|&i| &self.records[i])
    }

    pub fn by_name(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Record name assigned to `entity`.
    pub fn name_of(&self, entity: EntityId) -> Option<&str> {
        self.names.get(&entity).map(String::as_str)
    }

    pub(super) fn push(&mut self, record: Record) {
        self.index.insert(record.entity, self.records.len());
        self.records.push(record);
    }
}
