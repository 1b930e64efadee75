mod common;

use common::{RANDOM_SEED, petgraph_graph, random_edges, strider_graph};
use fastrand::Rng;
use petgraph::prelude::*;
use strider::{
    algo::{AllPairs, ShortestPaths, shortest_paths::FrontierKind},
    core::VertexId,
};

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.25])]
fn strider_dijkstra_heap<const N: usize>(bencher: divan::Bencher, density: f32) {
    let edges = random_edges(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let graph = strider_graph(&edges);
    let start = VertexId::from_usize(0);

    bencher.bench(|| {
        ShortestPaths::on(&graph)
            .frontier(FrontierKind::Heap)
            .run(start)
    });
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.25])]
fn strider_dijkstra_sorted<const N: usize>(bencher: divan::Bencher, density: f32) {
    let edges = random_edges(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let graph = strider_graph(&edges);
    let start = VertexId::from_usize(0);

    bencher.bench(|| {
        ShortestPaths::on(&graph)
            .frontier(FrontierKind::Sorted)
            .run(start)
    });
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.25])]
fn petgraph_dijkstra<const N: usize>(bencher: divan::Bencher, density: f32) {
    let edges = random_edges(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let graph = petgraph_graph(&strider_graph(&edges), &edges);
    let start = NodeIndex::new(0);

    bencher.bench(|| petgraph::algo::dijkstra(&graph, start, None, |e| *e.weight()));
}

#[divan::bench(consts = [50, 200], args = [false, true])]
fn strider_all_pairs<const N: usize>(bencher: divan::Bencher, parallel: bool) {
    let edges = random_edges(N, 0.1, &mut Rng::with_seed(RANDOM_SEED));
    let graph = strider_graph(&edges);

    bencher.bench(|| AllPairs::on(&graph).parallel(parallel).run());
}

#[divan::bench(args = [1000, 10000])]
fn strider_build(bencher: divan::Bencher, n: usize) {
    let edges = random_edges(n, 0.01, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| strider_graph(&edges));
}
