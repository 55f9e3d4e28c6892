//! Bullet grouping

use serde::Serialize;

use shipnote_core::types::GroupBy;

use crate::types::Bullet;

/// Bullets sharing a type or scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulletGroup {
    /// Group label (a type or a scope)
    pub key: String,
    /// Bullets in their original relative order
    pub bullets: Vec<Bullet>,
}

/// Bullets as they will be rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BulletGroups {
    /// One flat list
    Flat(Vec<Bullet>),
    /// Groups in first-seen order
    Grouped(Vec<BulletGroup>),
}

impl BulletGroups {
    /// Whether there are no bullets at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of bullets
    pub fn len(&self) -> usize {
        match self {
            Self::Flat(bullets) => bullets.len(),
            Self::Grouped(groups) => groups.iter().map(|g| g.bullets.len()).sum(),
        }
    }

    /// Bullets in rendering order
    pub fn iter(&self) -> Box<dyn Iterator<Item = &Bullet> + '_> {
        match self {
            Self::Flat(bullets) => Box::new(bullets.iter()),
            Self::Grouped(groups) => Box::new(groups.iter().flat_map(|g| g.bullets.iter())),
        }
    }
}

/// Partition bullets by the grouping mode
pub fn group_bullets(bullets: Vec<Bullet>, group_by: GroupBy) -> BulletGroups {
    if group_by == GroupBy::None {
        return BulletGroups::Flat(bullets);
    }

    let mut groups: Vec<BulletGroup> = Vec::new();
    for bullet in bullets {
        let key = match group_by {
            GroupBy::Type => bullet.commit_type.clone(),
            _ => bullet.scope.clone(),
        };
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.bullets.push(bullet),
            None => groups.push(BulletGroup {
                key,
                bullets: vec![bullet],
            }),
        }
    }

    BulletGroups::Grouped(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CommitRecord;

    fn commit(commit_type: &str, scope: Option<&str>, text: &str) -> Bullet {
        Bullet::from_commit(&CommitRecord::new(text, commit_type, scope, text))
    }

    fn sample() -> Vec<Bullet> {
        vec![
            commit("feat", Some("api"), "A"),
            commit("fix", Some("ui"), "B"),
            commit("feat", Some("api"), "C"),
            Bullet::from_changelog("X"),
        ]
    }

    #[test]
    fn test_none_is_flat() {
        let groups = group_bullets(sample(), GroupBy::None);
        assert!(matches!(groups, BulletGroups::Flat(ref b) if b.len() == 4));
    }

    #[test]
    fn test_group_by_scope_first_seen_order() {
        let BulletGroups::Grouped(groups) = group_bullets(sample(), GroupBy::Scope) else {
            panic!("expected groups");
        };
        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["api", "ui", "general"]);
        let api: Vec<&str> = groups[0].bullets.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(api, vec!["A", "C"]);
    }

    #[test]
    fn test_group_by_type() {
        let groups = group_bullets(sample(), GroupBy::Type);
        let BulletGroups::Grouped(ref list) = groups else {
            panic!("expected groups");
        };
        let keys: Vec<&str> = list.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["feat", "fix", "general"]);
        assert_eq!(groups.len(), 4);
        let order: Vec<&str> = groups.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(order, vec!["A", "C", "B", "X"]);
    }
}
