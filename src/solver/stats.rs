use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_nodes: Vec<u64>,
    expanded_nodes: Vec<u64>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    /// Every constructed node, including the root and nodes the strategy discards right away.
    pub fn total_created(&self) -> u64 {
        self.created_nodes.iter().sum()
    }

    pub fn total_expanded(&self) -> u64 {
        self.expanded_nodes.iter().sum()
    }

    pub fn created_by_depth(&self) -> &[u64] {
        &self.created_nodes
    }

    /// Returns true if this is the first node on `depth`.
    pub(crate) fn add_created(&mut self, depth: u32) -> bool {
        Self::add(&mut self.created_nodes, depth)
    }

    pub(crate) fn add_expanded(&mut self, depth: u32) -> bool {
        Self::add(&mut self.expanded_nodes, depth)
    }

    fn add(counts: &mut Vec<u64>, depth: u32) -> bool {
        let depth = depth as usize;
        let mut ret = false;

        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nodes created total: {}", self.total_created().separated_string())?;
        writeln!(f, "Nodes expanded total: {}", self.total_expanded().separated_string())?;
        writeln!(f)?;

        writeln!(f, "{:<15}{:<15}{}", "Depth", "Created", "Expanded")?;
        // created is never shorter - a node has to exist before it's expanded
        for (depth, &created) in self.created_nodes.iter().enumerate() {
            let expanded = self.expanded_nodes.get(depth).cloned().unwrap_or(0);
            writeln!(
                f,
                "{:<15}{:<15}{}",
                format!("{}:", depth),
                created.separated_string(),
                expanded.separated_string()
            )?;
        }
        Ok(())
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_nodes)?;
        writeln!(f, "expanded by depth: {:?}", self.expanded_nodes)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(f, "total expanded: {}", self.total_expanded().separated_string())
    }
}
