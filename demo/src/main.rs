//! Fixed self-check sequence for `chainlist`.
//!
//! Runs the same scenarios as the library's test suite, but as a plain
//! binary: every scenario prints the rendered list and asserts the expected
//! outcome. A failed assertion panics, so the process exits with a nonzero
//! status; reaching the end means every check passed and the exit status
//! is 0.
use chainlist::ChainList;
use log::debug;

fn main() {
    env_logger::init();

    check_push_back();
    check_push_front();
    check_insert_at();
    check_node_access();
    check_pop_front();
    check_pop_back();
    check_remove_at();
    check_set_value();

    println!("All tests passed!");
}

fn check_push_back() {
    println!("---Check push_back---");
    let mut list = ChainList::new();
    list.push_back(30);
    println!("result: {}", list);
    assert_eq!(list.len(), 1);
    assert_eq!(list.back(), Some(&30));
}

fn check_push_front() {
    println!("---Check push_front---");
    let mut list = ChainList::new();
    list.push_front(10);
    list.push_front(20);
    println!("result: {}", list);
    assert_eq!(list.len(), 2);
    assert_eq!(list.front(), Some(&20));
    assert_eq!(list.back(), Some(&10));
}

fn check_insert_at() {
    println!("---Check insert_at---");
    let mut list = ChainList::new();
    list.push_front(10);
    list.insert_at(1, 20);
    list.insert_at(2, 30);
    println!("result: {}", list);
    assert_eq!(list.len(), 3);
    assert_eq!(list.back(), Some(&30));
    assert_eq!(list.get(1), Some(&20));
    assert_eq!(list.get(2), Some(&30));
}

fn check_node_access() {
    println!("---Check node access---");
    let mut list = ChainList::new();
    list.push_front(10);
    list.push_front(20);
    let found = list.node_at(1).expect("position 1 must exist");
    println!("found node: {}", list.value(found).unwrap());
    assert_eq!(list.value(found), Some(&10));

    // Walking handle to handle reaches the same node
    let head = list.head().unwrap();
    assert_eq!(list.next(head), Some(found));
    assert_eq!(list.prev(found), Some(head));

    debug!("head handle: {:?}", head);
}

fn check_pop_front() {
    println!("---Check pop_front---");
    let mut list = ChainList::new();
    list.push_front(10);
    list.push_front(20);
    assert_eq!(list.pop_front(), Some(20));
    println!("result: {}", list);
    assert_eq!(list.len(), 1);
    assert_eq!(list.front(), Some(&10));
}

fn check_pop_back() {
    println!("---Check pop_back---");
    let mut list = ChainList::new();
    list.push_front(10);
    list.push_front(20);
    assert_eq!(list.pop_back(), Some(10));
    println!("result: {}", list);
    assert_eq!(list.len(), 1);
    assert_eq!(list.back(), Some(&20));
}

fn check_remove_at() {
    println!("---Check remove_at---");
    let mut list = ChainList::new();
    list.push_front(10);
    list.push_front(20);
    list.push_front(30);
    assert_eq!(list.remove_at(1), Some(20));
    println!("result: {}", list);
    assert_eq!(list.len(), 2);
    assert_eq!(list.front(), Some(&30));
}

fn check_set_value() {
    println!("---Check set_value---");
    let mut list = ChainList::new();
    list.push_front(10);
    list.push_front(20);

    let changed = list.set_value(1, 30);
    println!("result: {}", list);
    assert!(changed);
    assert_eq!(list.get(1), Some(&30));

    assert!(!list.set_value(3, 40));
}
