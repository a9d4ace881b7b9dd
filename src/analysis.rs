//! End-to-end analysis runs.
//!
//! An [`Analyzer`] validates its inputs once and then chains the pure stages:
//!
//! ```text
//! adjacency + bulk + fragments
//!   → mutual information table
//!   → f-values (Möbius inversion)
//!   → f_k per order
//!   → running synergy ratio
//! ```
//!
//! Each run owns its results and shares nothing mutable with other runs, so
//! independent experiments over one adjacency matrix may be computed in any
//! order or concurrently.

use log::info;
use serde::Serialize;

use crate::adjacency::AdjacencyMatrix;
use crate::aggregate::{aggregate_by_order, synergy_ratio, OrderAggregate, SynergyRatioSeries};
use crate::error::{Error, Result};
use crate::mobius::invert;
use crate::table::{mutual_information_table, FValueTable, MutualInformationTable, MAX_TABLE_FRAGMENTS};
use crate::types::NodeSet;

/// Label of the experiment over the bulk node's neighbourhood.
pub const RECOVERY_WEDGE: &str = "recovery_wedge";

/// A labelled fragment list to analyze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experiment {
    pub label: String,
    pub fragments: Vec<usize>,
}

impl Experiment {
    pub fn new(label: impl Into<String>, fragments: Vec<usize>) -> Self {
        Self {
            label: label.into(),
            fragments,
        }
    }

    /// The recovery wedge of `bulk_target`: its neighbourhood in the graph.
    pub fn wedge(adjacency: &AdjacencyMatrix, bulk_target: usize) -> Self {
        Self::new(RECOVERY_WEDGE, adjacency.neighbors(bulk_target))
    }
}

/// Results of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub label: String,
    pub bulk_target: NodeSet,
    /// Fragments in ascending order.
    pub fragment_set: Vec<usize>,
    pub mutual_information: MutualInformationTable,
    pub f_values: FValueTable,
    pub fk: OrderAggregate,
    pub synergy_ratio: SynergyRatioSeries,
    /// `I(bulk : all fragments)`, read from the table; 0 without fragments.
    pub total_information: f64,
}

/// Graph metadata recorded alongside a batch of experiments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphInfo {
    pub bulk_target: usize,
    pub bulk_nodes: Vec<usize>,
    pub boundary_nodes: Vec<usize>,
}

impl GraphInfo {
    /// Records `bulk_nodes` and their complement in `0..n` as boundary nodes.
    pub fn new(n: usize, bulk_target: usize, bulk_nodes: Vec<usize>) -> Self {
        let boundary_nodes = (0..n).filter(|v| !bulk_nodes.contains(v)).collect();
        Self {
            bulk_target,
            bulk_nodes,
            boundary_nodes,
        }
    }
}

/// A batch of analyses over one graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub graph: GraphInfo,
    pub experiments: Vec<Analysis>,
}

impl Report {
    /// First experiment whose label is any of `labels`, tried in order.
    pub fn find(&self, labels: &[&str]) -> Option<&Analysis> {
        labels
            .iter()
            .find_map(|label| self.experiments.iter().find(|e| e.label == *label))
    }
}

/// Runs analyses with a bound on the fragment count.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Analyzer {
    max_fragments: usize,
}

impl Analyzer {
    /// Default bound: at most 2^20 - 1 subsets per run.
    pub const DEFAULT_MAX_FRAGMENTS: usize = 20;

    /// Largest bound accepted: the largest fragment list a table can hold.
    pub const MAX_FRAGMENTS_LIMIT: usize = MAX_TABLE_FRAGMENTS;

    pub fn new(max_fragments: usize) -> Self {
        assert!(
            max_fragments <= Self::MAX_FRAGMENTS_LIMIT,
            "Fragment bound should be in the range 0..={}",
            Self::MAX_FRAGMENTS_LIMIT
        );
        Self { max_fragments }
    }

    pub fn with_max_fragments(self, max_fragments: usize) -> Self {
        Self::new(max_fragments)
    }

    pub fn max_fragments(&self) -> usize {
        self.max_fragments
    }

    /// Checks node ranges, duplicates, and the fragment bound.
    pub fn validate(&self, adjacency: &AdjacencyMatrix, bulk: &NodeSet, fragments: &[usize]) -> Result<()> {
        let n = adjacency.len();
        bulk.validate(n)?;
        NodeSet::new(fragments.to_vec()).validate(n)?;
        if fragments.len() > self.max_fragments {
            return Err(Error::TooManyFragments {
                count: fragments.len(),
                max: self.max_fragments,
            });
        }
        Ok(())
    }

    /// Decomposes the information `bulk` shares with every subset of `fragments`.
    ///
    /// Fragments are sorted first, so subsets in the results list their members
    /// in ascending order. An empty fragment list is valid and yields empty
    /// tables with zero total information.
    pub fn analyze(
        &self,
        adjacency: &AdjacencyMatrix,
        bulk: &NodeSet,
        fragments: &[usize],
        label: &str,
    ) -> Result<Analysis> {
        self.validate(adjacency, bulk, fragments)?;

        let mut fragment_set = fragments.to_vec();
        fragment_set.sort_unstable();

        let mutual_information = mutual_information_table(adjacency, bulk.as_slice(), &fragment_set);
        let f_values = invert(&mutual_information);
        let fk = aggregate_by_order(&f_values);
        let total_information = mutual_information.total().unwrap_or(0.0);
        let synergy_ratio = synergy_ratio(&fk, total_information);

        info!(
            "{}: {} fragments, I(bulk : fragments) = {}",
            label,
            fragment_set.len(),
            total_information
        );

        Ok(Analysis {
            label: label.to_string(),
            bulk_target: bulk.clone(),
            fragment_set,
            mutual_information,
            f_values,
            fk,
            synergy_ratio,
            total_information,
        })
    }

    /// Runs every experiment against the single bulk node `bulk_target`.
    ///
    /// Stops at the first invalid experiment.
    pub fn run(
        &self,
        adjacency: &AdjacencyMatrix,
        bulk_target: usize,
        experiments: &[Experiment],
    ) -> Result<Vec<Analysis>> {
        let bulk = NodeSet::single(bulk_target);
        experiments
            .iter()
            .map(|e| self.analyze(adjacency, &bulk, &e.fragments, &e.label))
            .collect()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer::new(Self::DEFAULT_MAX_FRAGMENTS)
    }
}
