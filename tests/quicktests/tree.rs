use llrb::llrb::Tree;
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::height_bound;

fn build(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x);
    }

    tree
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn len_counts_duplicates(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    tree.len() == xs.len() && tree.is_empty() == xs.is_empty()
}

#[quickcheck]
fn ascending_inserts_stay_balanced(n: u16) -> bool {
    let mut tree = Tree::new();
    for x in 0..n % 4096 {
        tree.insert(x);
    }

    tree.height() <= height_bound(tree.len())
}

#[quickcheck]
fn search_agrees_with_contains(xs: Vec<i8>, probes: Vec<i8>) -> bool {
    let tree = build(&xs);
    let height = tree.height();

    probes.iter().all(|probe| {
        let search = tree.search(probe);
        search.found == tree.contains(probe) && search.depth <= height
    })
}

#[quickcheck]
fn lookups_are_repeatable(xs: Vec<i8>, probe: i8) -> bool {
    let tree = build(&xs);
    let first = tree.search(&probe);

    (0..3).all(|_| tree.search(&probe) == first)
}
