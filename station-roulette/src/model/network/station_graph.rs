use super::{Edge, OutEdge, StationId};
use indexmap::IndexMap;

/// adjacency list keyed by source station. keys appear in the order their
/// station was first seen as an edge's `from`; stations that are only ever
/// destinations are not keys.
#[derive(Default, Debug, Clone)]
pub struct StationGraph {
    adj: IndexMap<StationId, Vec<OutEdge>>,
}

impl StationGraph {
    pub fn empty() -> StationGraph {
        StationGraph {
            adj: IndexMap::new(),
        }
    }

    /// builds the adjacency list from a flat edge list. duplicate edges
    /// between the same pair are kept as-is.
    pub fn new(edges: &[Edge]) -> StationGraph {
        let mut graph = StationGraph::empty();
        for edge in edges.iter() {
            graph.add_edge(edge);
        }
        log::debug!(
            "built station graph with {} source stations from {} edges",
            graph.n_source_stations(),
            edges.len()
        );
        graph
    }

    fn add_edge(&mut self, edge: &Edge) {
        self.adj.entry(edge.from.clone()).or_default().push(OutEdge {
            to: edge.to.clone(),
            minutes: edge.minutes,
        });
    }

    /// number of stations with at least one outgoing edge
    pub fn n_source_stations(&self) -> usize {
        self.adj.len()
    }

    pub fn n_edges(&self) -> usize {
        self.adj.values().map(|out| out.len()).sum::<usize>()
    }

    pub fn contains_station(&self, station: &StationId) -> bool {
        self.adj.contains_key(station)
    }

    /// outgoing edges for a station, in insertion order. empty for sinks
    /// and unknown stations.
    pub fn out_edges(&self, station: &StationId) -> &[OutEdge] {
        self.adj
            .get(station)
            .map(|out| out.as_slice())
            .unwrap_or_default()
    }

    /// source stations in graph order
    pub fn stations(&self) -> impl Iterator<Item = &StationId> {
        self.adj.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::StationGraph;
    use crate::model::network::{Edge, StationId};

    #[test]
    fn test_build_keeps_order_and_duplicates() {
        let edges = vec![
            Edge::new("B", "C", 10.0),
            Edge::new("A", "B", 5.0),
            Edge::new("A", "B", 7.0),
            Edge::new("A", "C", 20.0),
        ];
        let graph = StationGraph::new(&edges);
        let keys: Vec<&str> = graph.stations().map(|s| s.as_str()).collect();
        assert_eq!(keys, vec!["B", "A"]);
        assert_eq!(graph.n_edges(), 4);

        let out_a = graph.out_edges(&StationId::from("A"));
        let minutes: Vec<f64> = out_a.iter().map(|e| e.minutes).collect();
        assert_eq!(minutes, vec![5.0, 7.0, 20.0]);
    }

    #[test]
    fn test_sink_is_not_a_key() {
        let graph = StationGraph::new(&[Edge::new("A", "B", 5.0)]);
        assert!(graph.contains_station(&StationId::from("A")));
        assert!(!graph.contains_station(&StationId::from("B")));
        assert!(graph.out_edges(&StationId::from("B")).is_empty());
    }

    #[test]
    fn test_empty() {
        let graph = StationGraph::new(&[]);
        assert_eq!(graph.n_source_stations(), 0);
        assert_eq!(graph.n_edges(), 0);
    }

    #[test]
    fn test_negative_weights_accepted() {
        let graph = StationGraph::new(&[Edge::new("A", "B", -3.0)]);
        assert_eq!(graph.out_edges(&StationId::from("A"))[0].minutes, -3.0);
    }
}
