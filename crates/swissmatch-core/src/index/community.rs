// crates/swissmatch-core/src/index/community.rs
use super::{next_id, NameIndex};
use crate::error::{IntegrityError, Result};
use crate::model::Community;
use std::collections::HashMap;

/// Communities by community number and by any of their names.
#[derive(Debug, Clone, Default)]
pub struct CommunityIndex {
    communities: Vec<Community>,
    by_number: HashMap<u32, u32>,
    by_name: NameIndex,
}

impl CommunityIndex {
    pub fn build(communities: Vec<Community>) -> Result<Self> {
        let mut idx = CommunityIndex {
            communities: Vec::with_capacity(communities.len()),
            by_number: HashMap::with_capacity(communities.len()),
            by_name: NameIndex::default(),
        };

        for community in communities {
            let id = next_id(&idx.communities);
            if idx.by_number.insert(community.community_number, id).is_some() {
                return Err(
                    IntegrityError::DuplicateCommunityNumber(community.community_number).into(),
                );
            }
            idx.by_name.insert(id, &community.names);
            idx.communities.push(community);
        }
        Ok(idx)
    }

    pub fn all(&self) -> &[Community] {
        &self.communities
    }

    pub fn len(&self) -> usize {
        self.communities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.communities.is_empty()
    }

    pub fn by_community_number(&self, number: u32) -> Option<&Community> {
        self.by_number
            .get(&number)
            .map(|&id| &self.communities[id as usize])
    }

    /// Communities whose name matches `name` after canonicalization.
    pub fn by_name(&self, name: &str) -> Vec<&Community> {
        self.by_name
            .lookup(name)
            .iter()
            .map(|&id| &self.communities[id as usize])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{Locale, Names};

    fn community(number: u32, names: Names) -> Community {
        Community {
            community_number: number,
            names,
            canton: "BE".into(),
            agglomeration: None,
        }
    }

    #[test]
    fn name_lookup_uses_all_locales() {
        let idx = CommunityIndex::build(vec![
            community(371, Names::native("Biel/Bienne").with(Locale::Fr, "Bienne")),
            community(351, Names::native("Bern").with(Locale::Fr, "Berne")),
        ])
        .unwrap();

        assert_eq!(idx.by_name("bielbienne")[0].community_number, 371);
        assert_eq!(idx.by_name("Bienne")[0].community_number, 371);
        assert_eq!(idx.by_name("BERNE")[0].community_number, 351);
        assert!(idx.by_name("Thun").is_empty());
        assert_eq!(idx.by_community_number(351).unwrap().name(), "Bern");
        assert!(idx.by_community_number(1).is_none());
    }

    #[test]
    fn shared_names_keep_insertion_order() {
        let idx = CommunityIndex::build(vec![
            community(1, Names::native("Buchs")),
            community(2, Names::native("Büchs")),
        ])
        .unwrap();
        let numbers: Vec<u32> = idx.by_name("buchs").iter().map(|c| c.community_number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn duplicate_number_fails() {
        let err = CommunityIndex::build(vec![
            community(1, Names::native("A")),
            community(1, Names::native("B")),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Integrity(IntegrityError::DuplicateCommunityNumber(1))
        ));
    }
}
