use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{graph::Graph, leg};

pub fn generate_complex_graph() -> Graph {
    let mut graph = Graph::new();

    graph.add_legs(&[
        leg!("A", "B", 30, 3), // A <=> B
        leg!("A", "C", 50, 5), // A <=> C
        leg!("A", "K", 30, 3), // A <=> K
        leg!("B", "D", 50, 5), // B <=> D
        leg!("B", "C", 30, 3), // B <=> C
        leg!("C", "D", 20, 2), // C <=> D
        leg!("C", "J", 20, 2), // C <=> J
        leg!("D", "J", 40, 4), // D <=> J
        leg!("D", "E", 70, 7), // D <=> E
        leg!("E", "J", 30, 3), // E <=> J
        leg!("E", "F", 60, 6), // E <=> F
        leg!("F", "H", 20, 2), // F <=> H
        leg!("F", "G", 40, 4), // F <=> G
        leg!("G", "H", 30, 3), // G <=> H
        leg!("G", "I", 50, 5), // G <=> I
        leg!("H", "I", 30, 3), // H <=> I
        leg!("H", "J", 20, 2), // H <=> J
        leg!("I", "J", 40, 4), // I <=> J
        leg!("I", "K", 60, 6), // I <=> K
        leg!("J", "K", 30, 3), // J <=> K
    ]);

    graph
}

pub fn generate_simple_graph() -> Graph {
    // A <=> B <=> C
    let mut g = Graph::new();

    g.add_flight("A", "B", 100, 2);
    g.add_flight("B", "C", 50, 3);

    g
}

/// Random flight network with cities named `C0`, `C1`, ...
///
/// The same `seed` always produces the same graph.
pub fn generate_random_graph(num_cities: usize, num_legs: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = Graph::with_capacity(num_cities, 2 * num_legs);

    if num_cities == 0 {
        return g;
    }

    for _ in 0..num_legs {
        let origin = rng.gen_range(0..num_cities);
        let destination = rng.gen_range(0..num_cities);
        g.add_flight(
            &format!("C{}", origin),
            &format!("C{}", destination),
            rng.gen_range(10..500),
            rng.gen_range(1..24),
        );
    }

    g
}
