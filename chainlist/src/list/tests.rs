use super::*;

use rand::{thread_rng, RngCore};

fn list_from<T: Clone>(v: &[T]) -> ChainList<T> {
    v.iter().cloned().collect()
}

fn to_vec<T: Clone>(list: &ChainList<T>) -> Vec<T> {
    (0..list.len())
        .map(|i| list.get(i).expect("index within len must resolve").clone())
        .collect()
}

/// Walk the chain from the head, verifying link symmetry, the terminal
/// links, and that the walk covers exactly `len()` nodes ending at the tail.
pub fn check_links<T>(list: &ChainList<T>) {
    match list.head {
        None => {
            // tail should also be None.
            assert!(list.tail.is_none());
            assert!(list.is_empty());
            return;
        }
        Some(head) => {
            assert_eq!(list.pool[head].prev, None, "prev link for head");
        }
    }

    let mut len = 0;
    let mut last: Option<PoolPtr> = None;
    let mut cur = list.head;
    while let Some(ptr) = cur {
        let node = &list.pool[ptr];
        assert_eq!(node.prev, last, "asymmetric prev link");
        last = Some(ptr);
        cur = node.next;
        len += 1;
    }

    // verify that the tail field points to the last node.
    assert_eq!(list.tail, last);
    assert_eq!(list.pool[last.unwrap()].next, None, "next link for tail");
    // check that len matches interior links.
    assert_eq!(len, list.len());
    assert_eq!(len, list.pool.len());
}

#[test]
fn push_back_on_empty() {
    let mut list = ChainList::new();
    list.push_back(30);
    check_links(&list);
    assert_eq!(list.len(), 1);
    assert_eq!(list.back(), Some(&30));
    assert_eq!(list.to_string(), "[ 30 ]");
}

#[test]
fn push_front_order() {
    let mut list = ChainList::new();
    list.push_front(10);
    list.push_front(20);
    check_links(&list);
    assert_eq!(list.len(), 2);
    assert_eq!(list.front(), Some(&20));
    assert_eq!(list.back(), Some(&10));
    assert_eq!(list.to_string(), "[ 20 10 ]");
}

#[test]
fn insert_at_builds_sequence() {
    let mut list = ChainList::new();
    list.push_front(10);
    list.insert_at(1, 20);
    list.insert_at(2, 30);
    check_links(&list);
    assert_eq!(list.len(), 3);
    assert_eq!(to_vec(&list), vec![10, 20, 30]);

    // The same sequence, observed through node handles.
    let head = list.head().unwrap();
    let second = list.next(head).unwrap();
    let third = list.next(second).unwrap();
    assert_eq!(list.value(second), Some(&20));
    assert_eq!(list.value(third), Some(&30));
    assert_eq!(list.tail(), Some(third));
}

#[test]
fn insert_at_interior_splice() {
    let mut list = list_from(&[1, 2, 4, 5]);
    list.insert_at(2, 3);
    check_links(&list);
    assert_eq!(to_vec(&list), vec![1, 2, 3, 4, 5]);
    assert_eq!(list.len(), 5);
}

#[test]
fn insert_at_falls_back_to_push_front() {
    // Position 0 of a non-empty list resolves to the head, which degrades
    // to a front insertion. This is a documented quirk, not an accident.
    let mut list = list_from(&[10, 20]);
    list.insert_at(0, 5);
    check_links(&list);
    assert_eq!(to_vec(&list), vec![5, 10, 20]);

    // So does any position beyond the end (other than exactly len()).
    list.insert_at(17, 40);
    check_links(&list);
    assert_eq!(to_vec(&list), vec![40, 5, 10, 20]);
    assert_eq!(list.len(), 4);
}

#[test]
fn pop_front_and_back() {
    let mut list = ChainList::new();
    list.push_front(10);
    list.push_front(20);
    assert_eq!(list.pop_front(), Some(20));
    check_links(&list);
    assert_eq!(list.len(), 1);
    assert_eq!(list.front(), Some(&10));

    assert_eq!(list.pop_back(), Some(10));
    check_links(&list);
    assert!(list.is_empty());
    assert_eq!(list.pop_front(), None);
    assert_eq!(list.pop_back(), None);
}

#[test]
fn pop_back_relinks_tail() {
    let mut list = list_from(&[10, 20]);
    assert_eq!(list.pop_back(), Some(20));
    check_links(&list);
    assert_eq!(list.back(), Some(&10));
    assert_eq!(list.tail(), list.head());
}

#[test]
fn remove_at_interior() {
    let mut list = list_from(&[30, 20, 10]);
    assert_eq!(list.remove_at(1), Some(20));
    check_links(&list);
    assert_eq!(list.len(), 2);
    assert_eq!(to_vec(&list), vec![30, 10]);
}

#[test]
fn remove_at_ends() {
    // Head and tail positions must be safe despite their missing neighbor.
    let mut list = list_from(&[1, 2, 3]);
    assert_eq!(list.remove_at(0), Some(1));
    check_links(&list);
    assert_eq!(list.remove_at(1), Some(3));
    check_links(&list);
    assert_eq!(to_vec(&list), vec![2]);

    // Single-node list
    assert_eq!(list.remove_at(0), Some(2));
    check_links(&list);
    assert!(list.is_empty());
}

#[test]
fn failed_lookups_leave_list_unchanged() {
    let mut list = list_from(&[10, 20]);
    assert!(!list.set_value(3, 40));
    assert_eq!(list.remove_at(2), None);
    assert_eq!(list.remove_at(17), None);
    check_links(&list);
    assert_eq!(to_vec(&list), vec![10, 20]);
    assert_eq!(list.len(), 2);

    let mut empty = ChainList::<i32>::new();
    assert_eq!(empty.remove_at(0), None);
    assert!(!empty.set_value(0, 1));
    assert!(empty.is_empty());
}

#[test]
fn set_value() {
    let mut list = ChainList::new();
    list.push_front(10);
    list.push_front(20);
    assert!(list.set_value(1, 30));
    assert_eq!(list.get(1), Some(&30));
    assert!(!list.set_value(3, 40));
    check_links(&list);
}

#[test]
fn push_front_round_trip() {
    let n = 64;
    let mut list = ChainList::new();
    for i in 0..n {
        list.push_front(i);
    }
    check_links(&list);
    // Reading by index recovers reverse insertion order
    for i in 0..n {
        assert_eq!(list.get(i), Some(&(n - 1 - i)));
    }
    assert_eq!(list.get(n), None);
    assert_eq!(list.node_at(n), None);
}

#[test]
fn handles_invalidate_on_removal() {
    let mut list = ChainList::new();
    let first = list.push_back(1);
    let second = list.push_back(2);

    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.value(first), None);
    assert_eq!(list.next(first), None);
    assert_eq!(list.prev(second), None);

    // A handle from an unrelated list doesn't resolve either.
    let mut other = ChainList::new();
    let foreign = other.push_back(9);
    assert_eq!(list.value(foreign), None);
}

#[test]
fn value_mut_through_handle() {
    let mut list = ChainList::new();
    let ptr = list.push_back(1);
    *list.value_mut(ptr).unwrap() += 10;
    assert_eq!(list.get(0), Some(&11));

    *list.front_mut().unwrap() += 1;
    *list.back_mut().unwrap() += 1;
    assert_eq!(list.front(), Some(&13));
}

#[test]
fn clear() {
    let mut list = list_from(&[1, 2, 3]);
    let ptr = list.head().unwrap();
    list.clear();
    check_links(&list);
    assert!(list.is_empty());
    assert_eq!(list.value(ptr), None);

    list.push_back(4);
    check_links(&list);
    assert_eq!(to_vec(&list), vec![4]);
}

#[test]
fn clone_and_debug() {
    let list = list_from(&[1, 2, 3]);
    let clone = list.clone();
    check_links(&clone);
    assert_eq!(to_vec(&clone), vec![1, 2, 3]);
    assert_eq!(format!("{:?}", clone), "[1, 2, 3]");
}

#[test]
fn display_empty() {
    let list = ChainList::<i32>::new();
    assert_eq!(list.to_string(), "[ ]");
}

#[test]
fn test_fuzz() {
    for _ in 0..25 {
        fuzz_test(3);
        fuzz_test(16);
        fuzz_test(189);
    }
}

fn fuzz_test(sz: i32) {
    let mut m: ChainList<i32> = ChainList::new();
    let mut v = vec![];
    for i in 0..sz {
        check_links(&m);
        let r: u8 = thread_rng().next_u32() as u8;
        match r % 8 {
            0 => {
                m.pop_back();
                v.pop();
            }
            1 => {
                if !v.is_empty() {
                    m.pop_front();
                    v.remove(0);
                }
            }
            2 => {
                if !v.is_empty() {
                    let at = (thread_rng().next_u32() as usize) % v.len();
                    assert_eq!(m.remove_at(at), Some(v.remove(at)));
                }
            }
            3 => {
                // Exercise the quirk-preserving positional insert only
                // where it matches a plain insertion: at the very end.
                m.insert_at(v.len(), i);
                v.push(i);
            }
            4 | 6 => {
                m.push_front(-i);
                v.insert(0, -i);
            }
            5 | 7 | _ => {
                m.push_back(i);
                v.push(i);
            }
        }
    }

    check_links(&m);
    assert_eq!(to_vec(&m), v);
}
