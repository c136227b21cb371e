//! A doubly-linked list addressed by 0-based positions.
use std::fmt;
use std::iter::FromIterator;

use genpool::{Pool, PoolPtr};

#[cfg(test)]
mod tests;

/// A doubly-linked list with pool-owned nodes and positional addressing.
///
/// Every node lives in a [`Pool`] owned by the list; the `head`/`tail`
/// fields and each node's `prev`/`next` fields hold [`PoolPtr`] handles into
/// that pool rather than owning references. Insertion methods return the
/// handle of the new node, which stays valid until that node is removed and
/// can be traversed with [`ChainList::next`] and [`ChainList::prev`].
///
/// Pushing and popping at either end computes in O(1) time; the positional
/// methods (`insert_at`, `node_at`, `set_value`, `remove_at`) walk from the
/// head and compute in O(len) time.
///
/// # Examples
///
/// ```
/// use chainlist::ChainList;
///
/// let mut list = ChainList::new();
/// list.push_back(1);
/// list.push_back(3);
/// list.insert_at(1, 2);
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.get(0), Some(&1));
/// assert_eq!(list.get(1), Some(&2));
/// assert_eq!(list.get(2), Some(&3));
/// ```
pub struct ChainList<T> {
    pool: Pool<Node<T>>,
    head: Option<PoolPtr>,
    tail: Option<PoolPtr>,
    len: usize,
}

struct Node<T> {
    value: T,
    prev: Option<PoolPtr>,
    next: Option<PoolPtr>,
}

impl<T> ChainList<T> {
    /// Create an empty `ChainList`.
    pub const fn new() -> Self {
        Self {
            pool: Pool::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Create an empty `ChainList` with space for at least `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pool: Pool::with_capacity(capacity),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// The number of nodes in the list.
    ///
    /// This operation computes in O(1) time.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is the list empty?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The handle of the first node, or `None` if the list is empty.
    pub fn head(&self) -> Option<PoolPtr> {
        self.head
    }

    /// The handle of the last node, or `None` if the list is empty.
    pub fn tail(&self) -> Option<PoolPtr> {
        self.tail
    }

    /// Insert `value` at the front of the list, returning the new node's
    /// handle.
    ///
    /// This operation computes in O(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::ChainList;
    ///
    /// let mut list = ChainList::new();
    /// list.push_front(10);
    /// list.push_front(20);
    /// assert_eq!(list.front(), Some(&20));
    /// assert_eq!(list.back(), Some(&10));
    /// ```
    pub fn push_front(&mut self, value: T) -> PoolPtr {
        let ptr = self.pool.allocate(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            None => self.tail = Some(ptr),
            Some(head) => self.pool[head].prev = Some(ptr),
        }
        self.head = Some(ptr);
        self.len += 1;
        ptr
    }

    /// Insert `value` at the back of the list, returning the new node's
    /// handle.
    ///
    /// This operation computes in O(1) time.
    pub fn push_back(&mut self, value: T) -> PoolPtr {
        let ptr = self.pool.allocate(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            None => self.head = Some(ptr),
            Some(tail) => self.pool[tail].next = Some(ptr),
        }
        self.tail = Some(ptr);
        self.len += 1;
        ptr
    }

    /// Insert `value` so that it occupies position `index`, returning the
    /// new node's handle.
    ///
    /// `index == len()` appends to the back. For any other `index` the node
    /// currently at that position is located first; if the lookup misses or
    /// yields the current head, the insertion degrades to [`push_front`] —
    /// a long-standing quirk of this operation that callers rely on, kept
    /// as-is rather than corrected. Otherwise the new node is spliced in
    /// immediately before the located one.
    ///
    /// The length grows by exactly one per call in every branch.
    ///
    /// [`push_front`]: ChainList::push_front
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::ChainList;
    ///
    /// let mut list = ChainList::new();
    /// list.push_front(10);
    /// list.insert_at(1, 20);
    /// list.insert_at(2, 30);
    /// assert_eq!(list.get(0), Some(&10));
    /// assert_eq!(list.get(1), Some(&20));
    /// assert_eq!(list.get(2), Some(&30));
    ///
    /// // Out-of-range positions degrade to a front insertion
    /// list.insert_at(17, 40);
    /// assert_eq!(list.front(), Some(&40));
    /// ```
    pub fn insert_at(&mut self, index: usize, value: T) -> PoolPtr {
        if index == self.len {
            return self.push_back(value);
        }
        let at = match self.node_at(index) {
            None => return self.push_front(value),
            Some(at) if Some(at) == self.head => return self.push_front(value),
            Some(at) => at,
        };

        // Splice in before `at`. The fallback above guarantees `at` is not
        // the head, so it has a live predecessor.
        let prev = self.pool[at].prev.expect("non-head node must have a prev link");
        let ptr = self.pool.allocate(Node {
            value,
            prev: Some(prev),
            next: Some(at),
        });
        self.pool[prev].next = Some(ptr);
        self.pool[at].prev = Some(ptr);
        self.len += 1;
        ptr
    }

    /// The handle of the node at position `index`, or `None` if there is no
    /// such position.
    ///
    /// This operation walks from the head and computes in O(index) time.
    pub fn node_at(&self, index: usize) -> Option<PoolPtr> {
        let mut cur = self.head?;
        for _ in 0..index {
            cur = self.pool[cur].next?;
        }
        Some(cur)
    }

    /// A reference to the value at position `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.node_at(index).map(move |p| &self.pool[p].value)
    }

    /// A mutable reference to the value at position `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let ptr = self.node_at(index)?;
        Some(&mut self.pool[ptr].value)
    }

    /// Overwrite the value at position `index`.
    ///
    /// Returns `false`, leaving the list unchanged, if there is no such
    /// position.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::ChainList;
    ///
    /// let mut list = ChainList::new();
    /// list.push_front(10);
    /// list.push_front(20);
    /// assert!(list.set_value(1, 30));
    /// assert_eq!(list.get(1), Some(&30));
    /// assert!(!list.set_value(3, 40));
    /// ```
    pub fn set_value(&mut self, index: usize, value: T) -> bool {
        match self.node_at(index) {
            Some(ptr) => {
                self.pool[ptr].value = value;
                true
            }
            None => false,
        }
    }

    /// Remove the first node and return its value, or `None` if the list is
    /// empty.
    ///
    /// This operation computes in O(1) time.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        let node = self
            .pool
            .deallocate(head)
            .expect("head handle must be live");
        self.head = node.next;
        match self.head {
            None => self.tail = None,
            Some(new_head) => self.pool[new_head].prev = None,
        }
        self.len -= 1;
        Some(node.value)
    }

    /// Remove the last node and return its value, or `None` if the list is
    /// empty.
    ///
    /// This operation computes in O(1) time.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        let node = self
            .pool
            .deallocate(tail)
            .expect("tail handle must be live");
        self.tail = node.prev;
        match self.tail {
            None => self.head = None,
            Some(new_tail) => self.pool[new_tail].next = None,
        }
        self.len -= 1;
        Some(node.value)
    }

    /// Remove the node at position `index` and return its value.
    ///
    /// Returns `None`, leaving the list unchanged, if there is no such
    /// position. Removing the head or tail position behaves exactly like
    /// [`pop_front`]/[`pop_back`], so the interior-splice path only ever
    /// runs with both neighbors present.
    ///
    /// [`pop_front`]: ChainList::pop_front
    /// [`pop_back`]: ChainList::pop_back
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let at = self.node_at(index)?;
        if Some(at) == self.head {
            return self.pop_front();
        }
        if Some(at) == self.tail {
            return self.pop_back();
        }
        let node = self
            .pool
            .deallocate(at)
            .expect("indexed handle must be live");
        let prev = node.prev.expect("interior node must have a prev link");
        let next = node.next.expect("interior node must have a next link");
        self.pool[prev].next = Some(next);
        self.pool[next].prev = Some(prev);
        self.len -= 1;
        Some(node.value)
    }

    /// A reference to the first value, or `None` if the list is empty.
    pub fn front(&self) -> Option<&T> {
        self.head.map(move |p| &self.pool[p].value)
    }

    /// A mutable reference to the first value, or `None` if the list is
    /// empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let head = self.head?;
        Some(&mut self.pool[head].value)
    }

    /// A reference to the last value, or `None` if the list is empty.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(move |p| &self.pool[p].value)
    }

    /// A mutable reference to the last value, or `None` if the list is
    /// empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let tail = self.tail?;
        Some(&mut self.pool[tail].value)
    }

    /// The handle of the node after the one designated by `ptr`.
    ///
    /// Returns `None` if `ptr` is no longer valid or designates the tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::ChainList;
    ///
    /// let mut list = ChainList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let head = list.head().unwrap();
    /// let second = list.next(head).unwrap();
    /// assert_eq!(list.value(second), Some(&2));
    /// assert_eq!(list.next(second), None);
    /// ```
    pub fn next(&self, ptr: PoolPtr) -> Option<PoolPtr> {
        self.pool.get(ptr)?.next
    }

    /// The handle of the node before the one designated by `ptr`.
    ///
    /// Returns `None` if `ptr` is no longer valid or designates the head.
    pub fn prev(&self, ptr: PoolPtr) -> Option<PoolPtr> {
        self.pool.get(ptr)?.prev
    }

    /// A reference to the value of the node designated by `ptr`, or `None`
    /// if the handle is no longer valid.
    pub fn value(&self, ptr: PoolPtr) -> Option<&T> {
        self.pool.get(ptr).map(|node| &node.value)
    }

    /// A mutable reference to the value of the node designated by `ptr`, or
    /// `None` if the handle is no longer valid.
    pub fn value_mut(&mut self, ptr: PoolPtr) -> Option<&mut T> {
        self.pool.get_mut(ptr).map(|node| &mut node.value)
    }

    /// Remove every node.
    ///
    /// All outstanding node handles are invalidated.
    pub fn clear(&mut self) {
        self.pool.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }
}

impl<T> Default for ChainList<T> {
    /// Create an empty `ChainList<T>`.
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ChainList<T> {
    fn clone(&self) -> Self {
        let mut list = Self::with_capacity(self.len);
        let mut cur = self.head;
        while let Some(ptr) = cur {
            let node = &self.pool[ptr];
            list.push_back(node.value.clone());
            cur = node.next;
        }
        list
    }
}

impl<T> Extend<T> for ChainList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for ChainList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for ChainList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_list();
        let mut cur = self.head;
        while let Some(ptr) = cur {
            let node = &self.pool[ptr];
            builder.entry(&node.value);
            cur = node.next;
        }
        builder.finish()
    }
}

impl<T: fmt::Display> fmt::Display for ChainList<T> {
    /// Render the values head to tail, bracketed: `[ 20 10 ]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        let mut cur = self.head;
        while let Some(ptr) = cur {
            let node = &self.pool[ptr];
            write!(f, "{} ", node.value)?;
            cur = node.next;
        }
        f.write_str("]")
    }
}
