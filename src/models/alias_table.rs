use crate::models::CodepointSequence;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Alias sequence to target sequence, iterated in ascending alias order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: BTreeMap<CodepointSequence, CodepointSequence>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `alias -> target`. A later definition of the same alias replaces
    /// the earlier one; the replaced target is returned.
    pub fn merge(
        &mut self,
        alias: CodepointSequence,
        target: CodepointSequence,
    ) -> Option<CodepointSequence> {
        self.entries.insert(alias, target)
    }

    pub fn get(&self, alias: &CodepointSequence) -> Option<&CodepointSequence> {
        self.entries.get(alias)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending `(alias, target)` order.
    pub fn iter(&self) -> btree_map::Iter<'_, CodepointSequence, CodepointSequence> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a AliasTable {
    type Item = (&'a CodepointSequence, &'a CodepointSequence);
    type IntoIter = btree_map::Iter<'a, CodepointSequence, CodepointSequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(CodepointSequence, CodepointSequence)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (CodepointSequence, CodepointSequence)>>(iter: I) -> Self {
        let mut table = AliasTable::new();
        for (alias, target) in iter {
            table.merge(alias, target);
        }
        table
    }
}
