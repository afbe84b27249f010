mod common;

use common::{assert_rb_invariants, init_logging, tree_of};
use rbtree::{Color, DuplicatePolicy, RBTree, RBTreeError, TreeConfig};

#[test]
fn new_tree_init() {
    init_logging();
    let tree = RBTree::<i64>::new();
    assert_eq!(tree.root(), None);
    assert!(tree.is_empty());
}

#[test]
fn insert_single() {
    init_logging();
    let mut tree = RBTree::new();
    let p = tree.insert(1024).unwrap();

    assert_eq!(tree.root(), Some(p));
    assert_eq!(tree.get(p), Some(&1024));
    assert_eq!(tree.color(p), Some(Color::Black));
    assert_eq!(tree.left(p), None);
    assert_eq!(tree.right(p), None);
    assert_eq!(tree.parent(p), None);

    assert_eq!(tree.erase(p), Ok(1024));
    assert!(tree.is_empty());
    assert_eq!(tree.min(), None);
    assert_eq!(tree.max(), None);
}

#[test]
fn find_single() {
    init_logging();
    let mut tree = RBTree::new();
    let ins = tree.insert(512).unwrap();

    let hit = tree.find(&512).unwrap();
    assert_eq!(hit, ins);
    assert_eq!(tree.get(hit), Some(&512));
    assert_eq!(tree.find(&999), None);
}

#[test]
fn erase_root() {
    init_logging();
    let mut tree = RBTree::new();
    let p = tree.insert(128).unwrap();
    assert_eq!(tree.root(), Some(p));

    assert!(tree.erase(p).is_ok());
    assert_eq!(tree.root(), None);
}

#[test]
fn minmax_basic() {
    init_logging();
    let mut arr = [10, 5, 8, 34, 67, 23, 156, 24, 2, 12];
    let mut tree = tree_of(arr);
    assert!(tree.root().is_some());
    arr.sort();

    let mn = tree.min().unwrap();
    let mx = tree.max().unwrap();
    assert_eq!(tree.get(mn), Some(&arr[0]));
    assert_eq!(tree.get(mx), Some(&arr[arr.len() - 1]));

    tree.erase(mn).unwrap();
    let mn = tree.min().unwrap();
    assert_eq!(tree.get(mn), Some(&arr[1]));

    tree.erase(mx).unwrap();
    let mx = tree.max().unwrap();
    assert_eq!(tree.get(mx), Some(&arr[arr.len() - 2]));
    assert_rb_invariants(&tree);
}

#[test]
fn to_array_sorted() {
    init_logging();
    let mut arr = [10, 5, 8, 34, 67, 23, 156, 24, 2, 12, 24, 36, 990, 25];
    let tree = tree_of(arr);
    arr.sort();

    let mut out = vec![0; arr.len()];
    assert_eq!(tree.to_array(&mut out), arr.len());
    assert_eq!(out, arr);
}

#[test]
fn rb_constraints_distinct() {
    init_logging();
    let tree = tree_of([10, 5, 8, 34, 67, 23, 156, 24, 2, 12]);
    assert_rb_invariants(&tree);
}

#[test]
fn rb_constraints_with_dups() {
    init_logging();
    let tree = tree_of([10, 5, 5, 34, 6, 23, 12, 12, 6, 12]);
    assert_rb_invariants(&tree);

    let mut out = [0; 10];
    assert_eq!(tree.to_array(&mut out), 10);
    assert_eq!(out, [5, 5, 6, 6, 10, 12, 12, 12, 23, 34]);
}

#[test]
fn find_erase_roundtrip_fixed() {
    init_logging();
    let arr = [10, 5, 8, 34, 67, 23, 156, 24, 2, 12, 24, 36, 990, 25];
    let mut tree = tree_of(arr);

    for k in arr {
        let p = tree.find(&k).unwrap();
        assert_eq!(tree.get(p), Some(&k));
        assert_eq!(tree.erase(p), Ok(k));
        assert_rb_invariants(&tree);
    }
    for k in arr {
        assert_eq!(tree.find(&k), None);
    }

    for k in arr {
        let p = tree.insert(k).unwrap();
        assert_eq!(tree.find(&k), Some(p));
        tree.erase(p).unwrap();
        assert_eq!(tree.find(&k), None);
    }
    assert!(tree.is_empty());
}

#[test]
fn multi_instance() {
    init_logging();
    let mut arr_a = [10, 5, 8, 34, 67, 23, 156, 24, 2, 12, 24, 36, 990, 25];
    let mut arr_b = [4, 8, 10, 5, 3];
    let a = tree_of(arr_a);
    let mut b = tree_of(arr_b);
    arr_a.sort();
    arr_b.sort();

    assert_eq!(a.to_vec(), arr_a);
    assert_eq!(b.to_vec(), arr_b);

    // trees don't share anything
    b.clear();
    assert_eq!(a.len(), arr_a.len());
    assert_eq!(a.to_vec(), arr_a);
}

#[test]
fn duplicates_survive_erasing_one_copy() {
    init_logging();
    let mut tree = tree_of([3, 1, 3, 2, 3]);
    let hit = tree.find(&3).unwrap();
    tree.erase(hit).unwrap();

    assert!(tree.find(&3).is_some());
    assert_eq!(tree.to_vec(), [1, 2, 3, 3]);
    assert_rb_invariants(&tree);
}

#[test]
fn remove_by_key() {
    init_logging();
    let mut tree = tree_of(["pear", "apple", "fig"]);
    assert_eq!(tree.remove(&"apple"), Some("apple"));
    assert_eq!(tree.remove(&"apple"), None);
    assert_eq!(tree.to_vec(), ["fig", "pear"]);
}

#[test]
fn erase_rejects_stale_reference() {
    init_logging();
    let mut tree = tree_of([1, 2, 3]);
    let two = tree.find(&2).unwrap();
    tree.erase(two).unwrap();

    assert_eq!(tree.erase(two), Err(RBTreeError::InvalidReference));
    assert_eq!(tree.to_vec(), [1, 3]);
}

#[test]
fn reject_policy_behaves_like_a_set() {
    init_logging();
    let config = TreeConfig::new().with_duplicates(DuplicatePolicy::Reject).with_capacity(8);
    let mut tree = RBTree::with_config(config).unwrap();
    let first = tree.insert(42).unwrap();

    let err = tree.insert(42).unwrap_err();
    assert_eq!(err, RBTreeError::DuplicateKey(first));
    assert_eq!(err.to_string(), format!("key is already present in the tree (at {first:?})"));
    assert_eq!(tree.len(), 1);
}

#[test]
fn error_messages() {
    assert_eq!(RBTreeError::AllocationFailure.to_string(), "failed to allocate storage for a tree node");
    assert_eq!(RBTreeError::InvalidReference.to_string(), "node reference is not live in this tree");
}
