//! Builds a small diamond graph and prints both traversal orders.

use bytekit::{Graph, GraphError};

fn main() -> Result<(), GraphError> {
    let mut g = Graph::new(16);
    for (from, to) in [("1", "2"), ("1", "3"), ("2", "4"), ("3", "4")] {
        g.add_edge(from.as_bytes(), to.as_bytes())?;
    }
    println!("diamond: {} nodes, {} edges", g.node_count(), g.edge_count());

    println!("bfs from 1: {}", render(&g.bfs(b"1")?));
    println!("dfs from 1: {}", render(&g.dfs(b"1")?));
    Ok(())
}

fn render(order: &[&[u8]]) -> String {
    order
        .iter()
        .map(|data| String::from_utf8_lossy(data).into_owned())
        .collect::<Vec<_>>()
        .join(" -> ")
}
