#![no_main]

use libfuzzer_sys::fuzz_target;

use stepgraph::{
    core::marker::Directed,
    infra::{arbitrary::MutOpsSeq, testing::check_consistency},
    Graph,
};

fuzz_target!(|ops: MutOpsSeq<i8>| {
    let mut graph = Graph::<_, Directed>::new();

    for op in ops {
        op.apply(&mut graph);
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
