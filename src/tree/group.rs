//! Per-directory grouping of numbered files

use std::collections::HashMap;

use crate::pattern::extract_pattern;

/// Files in one directory that share a shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub shape: String,
    pub count: usize,
    /// First file seen with this shape. Printed when the group has one member.
    pub representative: String,
}

/// Shape groups for one directory listing, in order of first occurrence.
#[derive(Debug, Default)]
pub struct GroupMap {
    groups: Vec<Group>,
    index: HashMap<String, usize>,
}

impl GroupMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a numbered filename into its shape group, creating it if needed.
    pub fn insert(&mut self, name: &str) {
        let shape = extract_pattern(name);
        match self.index.get(&shape) {
            Some(&i) => self.groups[i].count += 1,
            None => {
                self.index.insert(shape.clone(), self.groups.len());
                self.groups.push(Group {
                    shape,
                    count: 1,
                    representative: name.to_string(),
                });
            }
        }
    }

    /// Consume the map, yielding groups in creation order.
    pub fn into_groups(self) -> Vec<Group> {
        self.groups
    }
}
