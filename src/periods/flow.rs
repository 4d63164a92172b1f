use crate::models::PeriodRecord;

/// Label of the pool node every income flows into before fanning out.
pub(crate) const AGGREGATOR_LABEL: &str = "Expenses";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FlowNode {
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FlowEdge {
    pub source: usize,
    pub target: usize,
    pub weight: u32,
}

/// Two-stage Sankey structure: incomes -> aggregator -> expenses.
///
/// Nodes are laid out as `[incomes.., aggregator, expenses..]` and edge
/// endpoints index into that list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
    aggregator: usize,
}

impl FlowGraph {
    pub(crate) fn from_record(record: &PeriodRecord) -> Self {
        let aggregator = record.incomes.len();

        let nodes = record
            .incomes
            .iter()
            .map(|(label, _)| label)
            .chain(std::iter::once(AGGREGATOR_LABEL))
            .chain(record.expenses.iter().map(|(label, _)| label))
            .map(|label| FlowNode {
                label: label.to_string(),
            })
            .collect();

        let inflows = record
            .incomes
            .iter()
            .enumerate()
            .map(|(i, (_, amount))| FlowEdge {
                source: i,
                target: aggregator,
                weight: amount,
            });
        // Targets are positional so a repeated label never aliases another node
        let outflows = record
            .expenses
            .iter()
            .enumerate()
            .map(|(i, (_, amount))| FlowEdge {
                source: aggregator,
                target: aggregator + 1 + i,
                weight: amount,
            });

        Self {
            nodes,
            edges: inflows.chain(outflows).collect(),
            aggregator,
        }
    }

    pub(crate) fn aggregator(&self) -> usize {
        self.aggregator
    }

    pub(crate) fn inflow(&self, node: usize) -> i64 {
        self.edges
            .iter()
            .filter(|e| e.target == node)
            .map(|e| i64::from(e.weight))
            .sum()
    }

    pub(crate) fn outflow(&self, node: usize) -> i64 {
        self.edges
            .iter()
            .filter(|e| e.source == node)
            .map(|e| i64::from(e.weight))
            .sum()
    }

    pub(crate) fn label(&self, node: usize) -> &str {
        self.nodes.get(node).map(|n| n.label.as_str()).unwrap_or("?")
    }

    /// Edges feeding the aggregator, as (source label, weight).
    pub(crate) fn sources(&self) -> Vec<(&str, u32)> {
        self.edges
            .iter()
            .filter(|e| e.target == self.aggregator)
            .map(|e| (self.label(e.source), e.weight))
            .collect()
    }

    /// Edges leaving the aggregator, as (target label, weight).
    pub(crate) fn sinks(&self) -> Vec<(&str, u32)> {
        self.edges
            .iter()
            .filter(|e| e.source == self.aggregator)
            .map(|e| (self.label(e.target), e.weight))
            .collect()
    }
}
