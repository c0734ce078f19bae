use crate::models::{AliasTable, Diagnostic, DirectoryScan, FileNaming};
use crate::types::FileName;
use log::debug;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// A link to create, and the existing file it displaces if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedAlias {
    pub target_name: FileName,
    pub replaces: Option<FileName>,
}

/// The links to create for one run, keyed by alias file name.
#[derive(Debug, Default)]
pub struct AliasPlan {
    to_create: BTreeMap<FileName, PlannedAlias>,
    to_replace: Vec<FileName>,
    pub diagnostics: Vec<Diagnostic>,
}

impl AliasPlan {
    /// Cross-references the alias table with the files present on disk.
    ///
    /// Aliases are visited in ascending order. An alias is skipped (with a
    /// diagnostic) when its target has no file, or when a file already exists
    /// for it and `replace` is off. With `replace` on, the existing file is
    /// queued for removal and the alias is planned as usual.
    pub fn build(
        aliases: &AliasTable,
        scan: &DirectoryScan,
        naming: &FileNaming,
        replace: bool,
    ) -> Self {
        let mut plan = AliasPlan::default();

        for (alias, target) in aliases {
            let Some(target_name) = scan.file_name(target) else {
                plan.diagnostics.push(Diagnostic::MissingTarget {
                    alias: alias.clone(),
                    target: target.clone(),
                });
                continue;
            };

            let replaces = match scan.file_name(alias) {
                Some(existing) if replace => {
                    plan.to_replace.push(existing.clone());
                    Some(existing.clone())
                }
                Some(_) => {
                    plan.diagnostics.push(Diagnostic::AliasExists { alias: alias.clone() });
                    continue;
                }
                None => None,
            };

            let alias_name = naming.file_name(alias);
            debug!("planning {} -> {}", alias_name, target_name);

            plan.merge(
                alias_name,
                PlannedAlias {
                    target_name: target_name.clone(),
                    replaces,
                },
            );
        }

        plan
    }

    /// Records a planned link. A later plan for the same alias name replaces
    /// the earlier one.
    pub fn merge(&mut self, alias_name: FileName, planned: PlannedAlias) {
        if let Some(previous) = self.to_create.insert(alias_name, planned) {
            debug!("dropping earlier plan for {}", previous.target_name);
        }
    }

    /// Planned links in ascending alias name order.
    pub fn to_create(&self) -> btree_map::Iter<'_, FileName, PlannedAlias> {
        self.to_create.iter()
    }

    /// Existing files that must be removed before any link is created,
    /// in ascending order.
    pub fn to_replace(&self) -> Vec<&FileName> {
        let mut to_replace: Vec<&FileName> = self.to_replace.iter().collect();
        to_replace.sort();
        to_replace
    }

    pub fn len(&self) -> usize {
        self.to_create.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_create.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CodepointSequence, FileExtension};

    fn seq(s: &str) -> CodepointSequence {
        s.parse().unwrap()
    }

    fn naming() -> FileNaming {
        FileNaming::new("emoji_u", FileExtension::Png)
    }

    fn scan_of(sequences: &[&str]) -> DirectoryScan {
        let mut scan = DirectoryScan::new();
        for s in sequences {
            let sequence = seq(s);
            let file_name = naming().file_name(&sequence);
            scan.merge(sequence, file_name);
        }
        scan
    }

    fn table_of(entries: &[(&str, &str)]) -> AliasTable {
        entries
            .iter()
            .map(|(alias, target)| (seq(alias), seq(target)))
            .collect()
    }

    #[test]
    fn test_plans_alias_for_existing_target() {
        let plan = AliasPlan::build(
            &table_of(&[("1f600", "1f601")]),
            &scan_of(&["1f601"]),
            &naming(),
            false,
        );

        let planned: Vec<_> = plan.to_create().collect();
        assert_eq!(planned.len(), 1);
        assert_eq!(planned[0].0, "emoji_u1f600.png");
        assert_eq!(planned[0].1.target_name, "emoji_u1f601.png");
        assert_eq!(planned[0].1.replaces, None);
        assert!(plan.diagnostics.is_empty());
    }

    #[test]
    fn test_missing_target_is_skipped() {
        let plan = AliasPlan::build(
            &table_of(&[("1f600", "1f602")]),
            &scan_of(&["1f601"]),
            &naming(),
            false,
        );

        assert!(plan.is_empty());
        assert_eq!(
            plan.diagnostics[0].to_string(),
            "target 1f602 for 1f600 does not exist"
        );
    }

    #[test]
    fn test_existing_alias_without_replace_is_skipped() {
        let plan = AliasPlan::build(
            &table_of(&[("1f600", "1f601")]),
            &scan_of(&["1f600", "1f601"]),
            &naming(),
            false,
        );

        assert!(plan.is_empty());
        assert!(plan.to_replace().is_empty());
        assert_eq!(plan.diagnostics[0].to_string(), "alias 1f600 exists");
    }

    #[test]
    fn test_existing_alias_with_replace_is_queued() {
        let plan = AliasPlan::build(
            &table_of(&[("1f600", "1f601"), ("1f603", "1f601")]),
            &scan_of(&["1f600", "1f601", "1f603"]),
            &naming(),
            true,
        );

        assert_eq!(plan.len(), 2);
        assert_eq!(
            plan.to_replace(),
            vec!["emoji_u1f600.png", "emoji_u1f603.png"]
        );
        let (_, planned) = plan.to_create().next().unwrap();
        assert_eq!(planned.replaces.as_deref(), Some("emoji_u1f600.png"));
        assert!(plan.diagnostics.is_empty());
    }

    #[test]
    fn test_plan_is_ordered_by_alias_name() {
        let plan = AliasPlan::build(
            &table_of(&[("1f603", "1f600"), ("0023_20e3", "1f600"), ("1f601", "1f600")]),
            &scan_of(&["1f600"]),
            &naming(),
            false,
        );

        let names: Vec<&str> = plan.to_create().map(|(name, _)| name.as_str()).collect();
        assert_eq!(
            names,
            vec!["emoji_u0023_20e3.png", "emoji_u1f601.png", "emoji_u1f603.png"]
        );
    }

    #[test]
    fn test_merge_is_last_wins() {
        let mut plan = AliasPlan::default();
        plan.merge(
            "emoji_u1f600.png".to_string(),
            PlannedAlias {
                target_name: "emoji_u1f601.png".to_string(),
                replaces: None,
            },
        );
        plan.merge(
            "emoji_u1f600.png".to_string(),
            PlannedAlias {
                target_name: "emoji_u1f602.png".to_string(),
                replaces: None,
            },
        );

        assert_eq!(plan.len(), 1);
        let (_, planned) = plan.to_create().next().unwrap();
        assert_eq!(planned.target_name, "emoji_u1f602.png");
    }
}
