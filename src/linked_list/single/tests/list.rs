extern crate std;

use std::format;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use std::vec;
use std::vec::Vec;

use crate::linked_list::single::SingleList;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_push_front_reverses_insertion_order() {
    let mut list = SingleList::new();
    list.push_front(3);
    list.push_front(2);
    list.push_front(1);

    let values: Vec<i32> = list.iter().copied().collect();
    assert_eq!(values, vec![1, 2, 3]);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_len_matches_traversal_count() {
    let mut list = SingleList::new();
    for i in 0..100 {
        list.push_front(i);
        assert_eq!(list.len(), list.iter().count());
    }
    for _ in 0..40 {
        list.pop_front();
    }
    assert_eq!(list.len(), 60);
    assert_eq!(list.len(), list.iter().count());
}

#[test]
fn test_is_empty_iff_len_zero_iff_no_elements() {
    let mut list = SingleList::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert!(list.iter().next().is_none());
    assert!(list.front().is_none());

    list.push_front(7);
    assert!(!list.is_empty());
    assert!(list.iter().next().is_some());

    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert!(list.iter().next().is_none());
}

#[test]
fn test_pop_front_yields_front_to_back() {
    let mut list = SingleList::from([1, 2, 3]);
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_front(), Some(3));
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());
}

#[test]
fn test_front_accessors() {
    let mut list = SingleList::from([10, 20]);
    assert_eq!(list.front(), Some(&10));

    *list.front_mut().unwrap() = 11;
    assert_eq!(list.front(), Some(&11));
    assert_eq!(list.pop_front(), Some(11));
    assert_eq!(list.front(), Some(&20));
}

#[test]
fn test_from_iter_preserves_order() {
    let list: SingleList<u32> = (0..5).collect();
    let values: Vec<u32> = list.iter().copied().collect();
    assert_eq!(values, vec![0, 1, 2, 3, 4]);
    assert_eq!(list.len(), 5);

    let empty: SingleList<u32> = core::iter::empty().collect();
    assert!(empty.is_empty());
}

#[test]
fn test_clone_is_deep() {
    let original = SingleList::from([1, 2, 3]);
    let mut copy = original.clone();
    assert_eq!(original, copy);

    copy.pop_front();
    copy.push_front(9);
    copy.push_front(8);

    let original_values: Vec<i32> = original.iter().copied().collect();
    assert_eq!(original_values, vec![1, 2, 3]);
    assert_ne!(original, copy);
}

#[test]
fn test_clone_from_replaces_contents() {
    let source = SingleList::from([4, 5, 6]);
    let mut target = SingleList::from([1, 2]);
    target.clone_from(&source);

    assert_eq!(target, source);
    let values: Vec<i32> = target.iter().copied().collect();
    assert_eq!(values, vec![4, 5, 6]);
}

#[test]
fn test_swap_exchanges_contents_without_moving_nodes() {
    let mut a = SingleList::from([1, 2, 3]);
    let mut b = SingleList::from([7, 8]);

    let a_addrs: Vec<*const i32> = a.iter().map(|v| v as *const i32).collect();
    let b_addrs: Vec<*const i32> = b.iter().map(|v| v as *const i32).collect();

    a.swap(&mut b);

    assert_eq!(a, SingleList::from([7, 8]));
    assert_eq!(b, SingleList::from([1, 2, 3]));
    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 3);

    // The nodes themselves must not have been reallocated.
    let a_addrs_after: Vec<*const i32> = a.iter().map(|v| v as *const i32).collect();
    let b_addrs_after: Vec<*const i32> = b.iter().map(|v| v as *const i32).collect();
    assert_eq!(a_addrs_after, b_addrs);
    assert_eq!(b_addrs_after, a_addrs);
}

#[test]
fn test_ordering_is_lexicographic() {
    let abc = SingleList::from([1, 2, 3]);
    let abd = SingleList::from([1, 2, 4]);
    let ab = SingleList::from([1, 2]);
    let empty = SingleList::<i32>::new();

    assert!(abc < abd);
    assert!(ab < abc);
    assert!(empty < ab);
    assert!(abd > abc);
    assert!(abc <= abc);
    assert!(abc >= abc);
    assert_eq!(abc, SingleList::from([1, 2, 3]));
    assert_ne!(abc, abd);
    assert_ne!(abc, ab);
}

#[test]
fn test_eq_requires_equal_length() {
    let short = SingleList::from([1, 2]);
    let long = SingleList::from([1, 2, 3]);
    assert_ne!(short, long);
    assert_ne!(long, short);
}

#[test]
fn test_iter_mut_edits_in_place() {
    let mut list = SingleList::from([1, 2, 3]);
    for value in list.iter_mut() {
        *value *= 10;
    }
    let values: Vec<i32> = list.iter().copied().collect();
    assert_eq!(values, vec![10, 20, 30]);
}

#[test]
fn test_iter_is_exact_and_fused() {
    let list = SingleList::from([1, 2, 3]);
    let mut iter = list.iter();
    assert_eq!(iter.len(), 3);
    iter.next();
    assert_eq!(iter.len(), 2);
    iter.next();
    iter.next();
    assert_eq!(iter.len(), 0);
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());
}

#[test]
fn test_into_iter_drains_in_order() {
    let list = SingleList::from([1, 2, 3]);
    let values: Vec<i32> = list.into_iter().collect();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn test_drop_releases_every_node() {
    let tracker = Rc::new(());

    let mut list = SingleList::new();
    for _ in 0..10 {
        list.push_front(Rc::clone(&tracker));
    }
    assert_eq!(Rc::strong_count(&tracker), 11);

    drop(list);
    assert_eq!(Rc::strong_count(&tracker), 1);
}

#[test]
fn test_partially_consumed_into_iter_drops_rest() {
    let tracker = Rc::new(());

    let mut list = SingleList::new();
    for _ in 0..5 {
        list.push_front(Rc::clone(&tracker));
    }

    let mut iter = list.into_iter();
    let first = iter.next().unwrap();
    assert_eq!(Rc::strong_count(&tracker), 6);

    drop(iter);
    assert_eq!(Rc::strong_count(&tracker), 2);
    drop(first);
    assert_eq!(Rc::strong_count(&tracker), 1);
}

#[test]
fn test_debug_formats_as_sequence() {
    let list = SingleList::from([1, 2, 3]);
    assert_eq!(format!("{:?}", list), "[1, 2, 3]");
    assert_eq!(format!("{:?}", SingleList::<i32>::new()), "[]");
}

#[test]
fn test_iterator_debug_shows_remaining_elements() {
    let mut list = SingleList::from([1, 2, 3]);

    let mut iter = list.iter();
    iter.next();
    assert_eq!(format!("{:?}", iter), "[2, 3]");

    let mut iter_mut = list.iter_mut();
    iter_mut.next();
    assert_eq!(format!("{:?}", iter_mut), "[2, 3]");
}

#[test]
fn test_equal_lists_hash_equal() {
    let from_array = SingleList::from([1, 2, 3]);
    let collected: SingleList<i32> = (1..=3).collect();
    assert_eq!(hash_of(&from_array), hash_of(&collected));
    assert_eq!(
        hash_of(&SingleList::<i32>::new()),
        hash_of(&SingleList::<i32>::new())
    );
}

#[test]
fn test_hash_length_prefix_separates_partitionings() {
    // Without the length prefix both streams would feed 1, 2, 3.
    let mut first = DefaultHasher::new();
    SingleList::from([1, 2]).hash(&mut first);
    3.hash(&mut first);

    let mut second = DefaultHasher::new();
    SingleList::from([1]).hash(&mut second);
    2.hash(&mut second);
    3.hash(&mut second);

    assert_ne!(first.finish(), second.finish());
}

#[test]
fn test_clone_from_keeps_old_contents_when_a_clone_panics() {
    struct Fragile(i32);

    impl Clone for Fragile {
        fn clone(&self) -> Self {
            if self.0 == 2 {
                panic!("refusing to copy");
            }
            Fragile(self.0)
        }
    }

    let source = SingleList::from([Fragile(1), Fragile(2)]);
    let mut target = SingleList::from([Fragile(7), Fragile(8)]);

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        target.clone_from(&source);
    }));
    assert!(outcome.is_err());

    let values: Vec<i32> = target.iter().map(|v| v.0).collect();
    assert_eq!(values, vec![7, 8]);
    assert_eq!(target.len(), 2);
}
