#![no_main]

use libfuzzer_sys::fuzz_target;

use stepgraph::{
    algo::{BfsTree, DfsForest},
    core::marker::Directed,
    infra::{
        arbitrary::MutOpsSeq,
        testing::{check_bfs_tree, check_dfs_forest},
    },
    Graph,
};

fuzz_target!(|ops: MutOpsSeq<u8>| {
    let mut graph = Graph::<_, Directed>::new();
    ops.apply(&mut graph);

    let forest = DfsForest::on(&graph).run();
    check_dfs_forest(&graph, &forest)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();

    assert_eq!(forest, DfsForest::on(&graph).recursive().run());

    for source in forest.roots() {
        let tree = BfsTree::on(&graph).run(source).unwrap();
        check_bfs_tree(&graph, &tree)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
