use crate::model::{
    network::{DistanceEntry, DistanceTable, StationGraph, StationId},
    RouletteError,
};
use ordered_float::OrderedFloat;
use std::{cmp::Ordering, collections::BinaryHeap};

/// computes the shortest travel time and the hop count along that path from
/// `source` to every station reachable from it.
///
/// every station keyed in the graph starts out unreached; the source is then
/// forced to the origin entry, whether or not it has outgoing edges. stations
/// that are only ever destinations are appended on their first improvement.
/// ties between equal-time paths are broken arbitrarily, so the hop count is
/// that of *a* shortest-time path, not necessarily the fewest hops.
///
/// edge weights are assumed non-negative and are not checked. with negative
/// weights the result is not a shortest path, and a negative cycle reachable
/// from the source never settles.
///
/// # Arguments
///
/// * `graph` - adjacency list to search
/// * `source` - origin of the search
///
/// # Returns
///
/// the distance table, ordered by graph keys, then the source (if not a
/// key), then sink stations in discovery order.
pub fn shortest_distances(graph: &StationGraph, source: &StationId) -> DistanceTable {
    let mut distances: DistanceTable = graph
        .stations()
        .map(|s| (s.clone(), DistanceEntry::unreached()))
        .collect();
    distances.insert(source.clone(), DistanceEntry::origin());

    let mut frontier: BinaryHeap<FrontierElement> = BinaryHeap::new();
    frontier.push(FrontierElement::new(source.clone(), 0.0, 0));

    while let Some(FrontierElement {
        time_minutes,
        stations_number,
        station,
    }) = frontier.pop()
    {
        let time_minutes = time_minutes.into_inner();
        // stale queue entry, a shorter time was found after it was pushed
        let recorded = distances
            .get(&station)
            .map(|e| e.time_minutes)
            .unwrap_or(f64::INFINITY);
        if time_minutes > recorded {
            continue;
        }

        for out in graph.out_edges(&station).iter() {
            let next_time = time_minutes + out.minutes;
            let next_recorded = distances
                .get(&out.to)
                .map(|e| e.time_minutes)
                .unwrap_or(f64::INFINITY);
            if next_time < next_recorded {
                let next_hops = stations_number + 1;
                distances.insert(out.to.clone(), DistanceEntry::new(next_time, next_hops));
                frontier.push(FrontierElement::new(out.to.clone(), next_time, next_hops));
            }
        }
    }

    log::debug!(
        "shortest distances from '{}': {} stations, {} reachable",
        source,
        distances.len(),
        distances.reachable().count()
    );
    distances
}

/// hop count along the shortest-time path from `source` to `destination`.
/// fails if the destination was never computed or is unreachable.
pub fn remaining_stations(
    graph: &StationGraph,
    source: &StationId,
    destination: &StationId,
) -> Result<usize, RouletteError> {
    let distances = shortest_distances(graph, source);
    let entry = distances.get(destination)?;
    entry
        .stations_number
        .filter(|_| entry.is_reachable())
        .ok_or_else(|| RouletteError::StationUnreachable(destination.clone()))
}

/// min-heap element ordered by travel time.
#[derive(Clone, Debug, PartialEq, Eq)]
struct FrontierElement {
    time_minutes: OrderedFloat<f64>,
    stations_number: usize,
    station: StationId,
}

impl FrontierElement {
    fn new(station: StationId, time_minutes: f64, stations_number: usize) -> FrontierElement {
        FrontierElement {
            time_minutes: OrderedFloat(time_minutes),
            stations_number,
            station,
        }
    }
}

impl Ord for FrontierElement {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed so the smallest time bubbles to the top
        other.time_minutes.cmp(&self.time_minutes)
    }
}

impl PartialOrd for FrontierElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::{remaining_stations, shortest_distances};
    use crate::model::{
        network::{DistanceEntry, Edge, StationGraph, StationId},
        RouletteError,
    };
    use itertools::Itertools;

    fn sid(s: &str) -> StationId {
        StationId::from(s)
    }

    fn abc_graph() -> StationGraph {
        StationGraph::new(&[
            Edge::new("A", "B", 5.0),
            Edge::new("B", "C", 10.0),
            Edge::new("A", "C", 20.0),
        ])
    }

    #[test]
    fn test_end_to_end_example() {
        let distances = shortest_distances(&abc_graph(), &sid("A"));
        assert_eq!(distances.len(), 3);
        assert_eq!(*distances.get(&sid("A")).unwrap(), DistanceEntry::new(0.0, 0));
        assert_eq!(*distances.get(&sid("B")).unwrap(), DistanceEntry::new(5.0, 1));
        assert_eq!(*distances.get(&sid("C")).unwrap(), DistanceEntry::new(15.0, 2));
        // C is a sink, so it is appended after the graph keys
        let order = distances.stations().map(|s| s.as_str()).collect_vec();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_source_without_out_edges() {
        let graph = abc_graph();
        let distances = shortest_distances(&graph, &sid("C"));
        assert_eq!(*distances.get(&sid("C")).unwrap(), DistanceEntry::origin());
        // graph keys that cannot be reached stay infinite
        assert_eq!(*distances.get(&sid("A")).unwrap(), DistanceEntry::unreached());
        assert_eq!(*distances.get(&sid("B")).unwrap(), DistanceEntry::unreached());
        // source appended after the graph keys
        assert_eq!(distances.stations().last(), Some(&sid("C")));
    }

    #[test]
    fn test_source_not_in_edges() {
        let distances = shortest_distances(&StationGraph::empty(), &sid("X"));
        assert_eq!(distances.len(), 1);
        assert_eq!(*distances.get(&sid("X")).unwrap(), DistanceEntry::origin());
    }

    #[test]
    fn test_hops_follow_shortest_time_path() {
        // the direct edge has fewer hops but a longer time
        let graph = StationGraph::new(&[
            Edge::new("A", "D", 30.0),
            Edge::new("A", "B", 5.0),
            Edge::new("B", "C", 5.0),
            Edge::new("C", "D", 5.0),
        ]);
        let distances = shortest_distances(&graph, &sid("A"));
        assert_eq!(*distances.get(&sid("D")).unwrap(), DistanceEntry::new(15.0, 3));
    }

    #[test]
    fn test_optimality_against_brute_force() {
        // small bidirectional network, compared against exhaustive path enumeration
        let raw = [
            ("A", "B", 4.0),
            ("A", "C", 1.0),
            ("C", "B", 2.0),
            ("B", "D", 5.0),
            ("C", "D", 8.0),
            ("D", "E", 3.0),
            ("C", "E", 12.0),
        ];
        let edges = raw
            .iter()
            .flat_map(|(a, b, m)| [Edge::new(*a, *b, *m), Edge::new(*b, *a, *m)])
            .collect_vec();
        let graph = StationGraph::new(&edges);
        let distances = shortest_distances(&graph, &sid("A"));

        fn brute(
            graph: &StationGraph,
            at: &StationId,
            goal: &StationId,
            seen: &mut Vec<StationId>,
        ) -> f64 {
            if at == goal {
                return 0.0;
            }
            let mut best = f64::INFINITY;
            for out in graph.out_edges(at) {
                if seen.contains(&out.to) {
                    continue;
                }
                seen.push(out.to.clone());
                best = best.min(out.minutes + brute(graph, &out.to, goal, seen));
                seen.pop();
            }
            best
        }

        for goal in ["A", "B", "C", "D", "E"] {
            let expected = brute(&graph, &sid("A"), &sid(goal), &mut vec![sid("A")]);
            let entry = distances.get(&sid(goal)).unwrap();
            assert_eq!(entry.time_minutes, expected, "station {goal}");
        }
        assert_eq!(*distances.get(&sid("E")).unwrap(), DistanceEntry::new(11.0, 4));
    }

    #[test]
    fn test_duplicate_edges_keep_minimum() {
        let graph = StationGraph::new(&[Edge::new("A", "B", 9.0), Edge::new("A", "B", 3.0)]);
        let distances = shortest_distances(&graph, &sid("A"));
        assert_eq!(*distances.get(&sid("B")).unwrap(), DistanceEntry::new(3.0, 1));
    }

    #[test]
    fn test_unseen_station_lookup_fails() {
        let distances = shortest_distances(&abc_graph(), &sid("A"));
        assert!(matches!(
            distances.get(&sid("Q")),
            Err(RouletteError::StationNotFound(_))
        ));
    }

    #[test]
    fn test_remaining_stations() {
        let graph = abc_graph();
        assert_eq!(remaining_stations(&graph, &sid("A"), &sid("C")).unwrap(), 2);
        assert_eq!(remaining_stations(&graph, &sid("A"), &sid("A")).unwrap(), 0);
    }

    #[test]
    fn test_remaining_stations_unknown_and_unreachable() {
        let graph = abc_graph();
        assert!(matches!(
            remaining_stations(&graph, &sid("A"), &sid("Q")),
            Err(RouletteError::StationNotFound(_))
        ));
        assert!(matches!(
            remaining_stations(&graph, &sid("C"), &sid("A")),
            Err(RouletteError::StationUnreachable(_))
        ));
    }
}
