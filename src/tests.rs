#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use itertools::Itertools;
    use unordered_pair::UnorderedPair;

    use crate::builder::{BuilderInvalidReason, MazeBuilder};
    use crate::location::Location;
    use crate::maze::{Maze, Mode};
    use crate::search::{longest_path, SearchFailure};

    // the 23x23 reference maze; longest hike 94 with slopes enforced, 154 ignoring them
    const REFERENCE_ROWS: &str = "\
#.#####################
#.......#########...###
#######.#########.#.###
###.....#.>.>.###.#.###
###v#####.#v#.###.#.###
###.>...#.#.#.....#...#
###v###.#.#.#########.#
###...#.#.#.......#...#
#####.#.#.#######.#.###
#.....#.#.#.......#...#
#.#####.#.#.#########v#
#.#...#...#...###...>.#
#.#.#v#######v###.###v#
#...#.>.#...>.>.#.###.#
#####v#.#.###v#.#.###.#
#.....#...#...#.#.#...#
#.#########.###.#.#.###
#...###...#...#...#.###
###.###.#.###v#####v###
#...#...#.#.>.>.#.>.###
#.###.###.#.###.#.#v###
#.....###...###...#...#
#####################.#";

    const REFERENCE_START: Location = Location(1, 0);
    const REFERENCE_END: Location = Location(21, 22);

    // one junction at (1, 1), then two disjoint corridors of different length both ending at
    // the goal (3, 3)
    const FORKED_ROWS: &str = "\
#.#####
#...###
#.#.###
#.#.###
#.#.###
#...###";

    // a single corridor and nothing else
    const CORRIDOR_ROWS: &str = "\
#.#
#.#
#.#";

    fn build_maze(rows: &str, start: Location, end: Location) -> Maze {
        MazeBuilder::from_rows(rows)
            .start_at(start)
            .end_at(end)
            .build()
            .unwrap()
    }

    fn reference_maze() -> Maze {
        build_maze(REFERENCE_ROWS, REFERENCE_START, REFERENCE_END)
    }

    #[test]
    fn directional_reference_hike() {
        assert_eq!(reference_maze().longest_hike(Mode::Directional), Ok(94));
    }

    #[test]
    fn unrestricted_reference_hike() {
        assert_eq!(reference_maze().longest_hike(Mode::Unrestricted), Ok(154));
    }

    #[test]
    fn ignoring_slopes_never_shortens_the_hike() {
        let maze = reference_maze();

        let directional = maze.longest_hike(Mode::Directional).unwrap();
        let unrestricted = maze.longest_hike(Mode::Unrestricted).unwrap();

        assert!(directional <= unrestricted);
    }

    #[test]
    fn single_corridor_compacts_to_one_edge() {
        let maze = build_maze(CORRIDOR_ROWS, Location(1, 0), Location(1, 2));
        let compacted = maze.compact(Mode::Unrestricted);

        assert_eq!(compacted.node_count(), 2);
        assert_eq!(compacted.edge_count(), 1);
        assert_eq!(compacted.edges_of(Location(1, 0)), vec![(Location(1, 2), 2)]);
        assert_eq!(longest_path(&compacted, maze.start(), maze.end()), Ok(2));
    }

    #[test]
    fn forked_corridors_prefer_the_longer_way() {
        let maze = build_maze(FORKED_ROWS, Location(1, 0), Location(3, 3));

        // 1 step to the junction, then 8 along the long fork instead of 4 along the short one
        assert_eq!(maze.longest_hike(Mode::Unrestricted), Ok(9));
    }

    #[test]
    fn parallel_corridors_keep_separate_edges() {
        let maze = build_maze(FORKED_ROWS, Location(1, 0), Location(3, 3));
        let compacted = maze.compact(Mode::Unrestricted);
        let junction = Location(1, 1);

        assert_eq!(compacted.node_count(), 3);
        assert_eq!(compacted.edge_count(), 3);

        let fork_lengths = compacted
            .edge_multiset()
            .into_iter()
            .filter(|(endpoints, _)| *endpoints == UnorderedPair::from((junction, maze.end())))
            .map(|(_, steps)| steps)
            .sorted()
            .collect_vec();

        assert_eq!(fork_lengths, vec![4, 8]);
    }

    #[test]
    fn compaction_is_deterministic() {
        let maze = reference_maze();

        let first = maze.compact(Mode::Unrestricted);
        let second = maze.compact(Mode::Unrestricted);

        assert_eq!(first.node_count(), second.node_count());
        assert_eq!(first.edge_multiset(), second.edge_multiset());
    }

    #[test]
    fn every_interior_node_is_a_junction() {
        let maze = reference_maze();
        let compacted = maze.compact(Mode::Unrestricted);

        assert!(compacted.contains(maze.start()));
        assert!(compacted.contains(maze.end()));

        for node in compacted.nodes() {
            if node != maze.start() && node != maze.end() {
                assert!(maze.neighbors(node, Mode::Unrestricted).len() >= 3);
            }
        }
    }

    #[test]
    fn searching_twice_yields_identical_results() {
        let maze = reference_maze();
        let compacted = maze.compact(Mode::Unrestricted);

        let first = longest_path(&compacted, maze.start(), maze.end());
        let second = longest_path(&compacted, maze.start(), maze.end());

        assert_eq!(first, Ok(154));
        assert_eq!(first, second);
    }

    #[test]
    fn slopes_constrain_adjacency_only_in_directional_mode() {
        let maze = build_maze("\
#.#
#v#
#.#", Location(1, 0), Location(1, 2));

        assert_eq!(maze.neighbors(Location(1, 1), Mode::Directional), vec![Location(1, 2)]);

        let unrestricted = maze.neighbors(Location(1, 1), Mode::Unrestricted);
        assert_eq!(unrestricted.len(), 2);
        assert!(unrestricted.contains(&Location(1, 0)));
        assert!(unrestricted.contains(&Location(1, 2)));
    }

    #[test]
    fn uphill_slope_blocks_the_goal_in_directional_mode() {
        let maze = build_maze("\
#.#
#^#
#.#", Location(1, 0), Location(1, 2));

        assert_eq!(maze.longest_hike(Mode::Directional), Err(SearchFailure::Unreachable));
        assert_eq!(maze.longest_hike(Mode::Unrestricted), Ok(2));
    }

    #[test]
    fn disconnected_goal_is_unreachable() {
        let maze = build_maze("\
#.#.#
#.#.#", Location(1, 0), Location(3, 1));

        assert!(!maze.compact(Mode::Unrestricted).contains(maze.end()));
        assert_eq!(maze.longest_hike(Mode::Unrestricted), Err(SearchFailure::Unreachable));
        assert_eq!(maze.longest_hike(Mode::Directional), Err(SearchFailure::Unreachable));
    }

    #[test]
    fn display_round_trips_the_input_rows() {
        let maze = build_maze(FORKED_ROWS, Location(1, 0), Location(3, 3));

        assert_eq!(format!("{maze}"), format!("{FORKED_ROWS}\n"));
        assert_eq!(format!("{}", reference_maze()), format!("{REFERENCE_ROWS}\n"));
    }

    #[test]
    #[should_panic(expected = "absent coordinate")]
    fn adjacency_of_a_wall_is_a_caller_bug() {
        let maze = build_maze(CORRIDOR_ROWS, Location(1, 0), Location(1, 2));

        maze.neighbors(Location(0, 0), Mode::Unrestricted);
    }

    #[test]
    fn slope_into_wall_invalidates() {
        let result = MazeBuilder::from_rows("\
#.#
#>#
#.#")
            .start_at(Location(1, 0))
            .end_at(Location(1, 2))
            .build();

        assert!(result.unwrap_err().contains(&BuilderInvalidReason::SlopeIntoWall));
    }

    #[test]
    fn reassigning_an_endpoint_invalidates() {
        let result = MazeBuilder::from_rows(CORRIDOR_ROWS)
            .start_at(Location(1, 0))
            .start_at(Location(1, 1))
            .end_at(Location(1, 2))
            .build();

        assert!(result.unwrap_err().contains(&BuilderInvalidReason::AmbiguousEndpoint));
    }

    #[test]
    fn missing_endpoints_invalidate() {
        let result = MazeBuilder::from_rows(CORRIDOR_ROWS).build();

        assert!(result.unwrap_err().contains(&BuilderInvalidReason::MissingEndpoint));
    }

    #[test]
    fn endpoint_on_a_wall_invalidates() {
        let result = MazeBuilder::from_rows(CORRIDOR_ROWS)
            .start_at(Location(0, 0))
            .end_at(Location(1, 2))
            .build();

        assert!(result.unwrap_err().contains(&BuilderInvalidReason::EndpointInWall));
    }

    #[test]
    fn endpoint_with_no_neighbors_invalidates() {
        let result = MazeBuilder::from_rows("\
#.#
###
#.#")
            .start_at(Location(1, 0))
            .end_at(Location(1, 2))
            .build();

        assert!(result.unwrap_err().contains(&BuilderInvalidReason::DisconnectedEndpoint));
    }

    #[test]
    fn unknown_symbols_invalidate() {
        let builder = MazeBuilder::from_rows("#q#");

        assert!(builder.is_valid().unwrap().contains(&BuilderInvalidReason::UnknownSymbol));
    }

    #[test]
    fn ragged_and_empty_rows_invalidate() {
        let ragged = MazeBuilder::from_rows("###\n####");
        let empty = MazeBuilder::from_rows("");

        assert!(ragged.is_valid().unwrap().contains(&BuilderInvalidReason::MalformedRows));
        assert!(empty.is_valid().unwrap().contains(&BuilderInvalidReason::MalformedRows));
    }

    #[test]
    fn out_of_bounds_terrain_invalidates() {
        let dims = (NonZero::new(3).unwrap(), NonZero::new(3).unwrap());
        let mut builder = MazeBuilder::with_dims(dims);
        builder.open(Location(5, 5));

        assert!(builder.is_valid().unwrap().contains(&BuilderInvalidReason::FeatureOutOfBounds));
    }

    #[test]
    fn programmatic_building_matches_parsing() {
        let dims = (NonZero::new(3).unwrap(), NonZero::new(3).unwrap());
        let mut builder = MazeBuilder::with_dims(dims);
        builder
            .open(Location(1, 0))
            .open(Location(1, 1))
            .open(Location(1, 2))
            .start_at(Location(1, 0))
            .end_at(Location(1, 2));
        let maze = builder.build().unwrap();

        assert_eq!(format!("{maze}"), format!("{CORRIDOR_ROWS}\n"));
        assert_eq!(maze.longest_hike(Mode::Unrestricted), Ok(2));
    }
}
