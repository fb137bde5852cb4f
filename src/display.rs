use bellman_paths::{PathReconstructor, Result, ShortestPathResult};

/// Print distances and paths, or the negative cycle when there is one
pub fn print_report(result: &ShortestPathResult) -> Result<()> {
    if let Some(cycle) = PathReconstructor::negative_cycle(result)? {
        println!("Graph contains a negative weight cycle; no shortest paths exist.");
        println!("Cycle: {}", join(cycle.as_slice()));
        return Ok(());
    }

    println!("Shortest distances from source vertex {}:", result.source);
    for vertex in 0..result.vertex_count() {
        match PathReconstructor::route(result, vertex)? {
            Some(route) => println!(
                "  {:>3} -> {:>6}   via {}",
                vertex,
                route.distance,
                join(route.path.as_slice())
            ),
            None => println!("  {:>3} -> unreachable", vertex),
        }
    }
    Ok(())
}

fn join(vertices: &[usize]) -> String {
    vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
