//! Non-thread-safe object pool with generation-checked handles.
//!
//! `Pool` hands out a [`PoolPtr`] for every allocated object. Unlike a raw
//! index, a `PoolPtr` remembers the *generation* of the entry it was created
//! for; once the entry is deallocated, every accessor refuses the outdated
//! handle instead of silently resolving it to whatever object reuses the
//! slot. This makes it possible to realize linked data structures on top of
//! the pool within safe Rust — a dangling link is a recoverable lookup
//! failure, not an undefined behavior.
//!
//! Vacant entries are collected into an intrusive free list and reused by
//! later allocations, so the storage never shrinks but its growth is bounded
//! by the peak number of live objects.
use quick_error::quick_error;
use std::{mem, ops};

/// Non-thread-safe object pool with generation-checked handles.
#[derive(Debug, Clone)]
pub struct Pool<T> {
    storage: Vec<Entry<T>>,
    first_free: Option<usize>,
    len: usize,
}

/// A handle to an object in a [`Pool`].
///
/// The handle stays valid until the object it was created for is
/// deallocated. After that, all checked accessors return a failure value for
/// it, even if the underlying entry has been reused by a newer allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolPtr {
    index: usize,
    generation: u32,
}

#[derive(Debug, Clone)]
enum Entry<T> {
    Occupied {
        generation: u32,
        value: T,
    },

    /// This entry is vacant. Points the next vacant entry, forming a
    /// singly-linked list headed by `Pool::first_free`.
    Vacant {
        generation: u32,
        next_free: Option<usize>,
    },
}

quick_error! {
    /// The reason a [`PoolPtr`] failed to resolve.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum BadPtr {
        /// The handle's index lies outside the pool's storage. The handle
        /// belongs to another pool.
        OutOfBounds {
            display("handle index is out of bounds")
        }
        /// The entry was deallocated and has not been reused since.
        Vacant {
            display("handle refers to a vacant entry")
        }
        /// The entry was deallocated and reused by a newer allocation.
        Stale {
            display("handle generation is stale")
        }
    }
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Pool<T> {
    /// Construct an empty `Pool`.
    pub const fn new() -> Self {
        Self {
            storage: Vec::new(),
            first_free: None,
            len: 0,
        }
    }

    /// Construct an empty `Pool` with space for at least `capacity` objects.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            first_free: None,
            len: 0,
        }
    }

    /// Reserve capacity for at least `additional` more objects, counting
    /// vacant entries awaiting reuse toward the surplus.
    pub fn reserve(&mut self, additional: usize) {
        let vacant = self.storage.len() - self.len;
        let surplus = vacant + (self.storage.capacity() - self.storage.len());
        if additional > surplus {
            self.storage.reserve(additional - surplus);
        }
    }

    /// The number of live objects.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is the pool devoid of live objects?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert an object, returning a handle for it.
    pub fn allocate(&mut self, value: T) -> PoolPtr {
        self.len += 1;
        match self.first_free {
            None => {
                self.storage.push(Entry::Occupied {
                    generation: 0,
                    value,
                });
                PoolPtr {
                    index: self.storage.len() - 1,
                    generation: 0,
                }
            }
            Some(index) => {
                let (generation, next_free) = match self.storage[index] {
                    Entry::Vacant {
                        generation,
                        next_free,
                    } => (generation, next_free),
                    Entry::Occupied { .. } => unreachable!("free list points at an occupied entry"),
                };
                self.first_free = next_free;
                self.storage[index] = Entry::Occupied { generation, value };
                PoolPtr { index, generation }
            }
        }
    }

    /// Remove the object designated by `ptr`, returning it.
    ///
    /// Returns `None` if `ptr` does not refer to a live object, in which
    /// case the pool is left unchanged.
    pub fn deallocate(&mut self, ptr: PoolPtr) -> Option<T> {
        match self.storage.get(ptr.index) {
            Some(Entry::Occupied { generation, .. }) if *generation == ptr.generation => {}
            _ => return None,
        }

        // Bumping the generation here is what invalidates every copy of
        // `ptr` still held by the caller.
        let vacant = Entry::Vacant {
            generation: ptr.generation.wrapping_add(1),
            next_free: self.first_free,
        };
        let value = match mem::replace(&mut self.storage[ptr.index], vacant) {
            Entry::Occupied { value, .. } => value,
            Entry::Vacant { .. } => unreachable!(),
        };
        self.first_free = Some(ptr.index);
        self.len -= 1;
        Some(value)
    }

    /// Get a reference to the object designated by `ptr`, or `None` if the
    /// handle is no longer valid.
    pub fn get(&self, ptr: PoolPtr) -> Option<&T> {
        self.try_get(ptr).ok()
    }

    /// Get a mutable reference to the object designated by `ptr`, or `None`
    /// if the handle is no longer valid.
    pub fn get_mut(&mut self, ptr: PoolPtr) -> Option<&mut T> {
        self.try_get_mut(ptr).ok()
    }

    /// Like [`Pool::get`], but reports why the handle failed to resolve.
    pub fn try_get(&self, ptr: PoolPtr) -> Result<&T, BadPtr> {
        match self.storage.get(ptr.index) {
            None => Err(BadPtr::OutOfBounds),
            Some(Entry::Vacant { .. }) => Err(BadPtr::Vacant),
            Some(Entry::Occupied { generation, value }) => {
                if *generation == ptr.generation {
                    Ok(value)
                } else {
                    Err(BadPtr::Stale)
                }
            }
        }
    }

    /// Like [`Pool::get_mut`], but reports why the handle failed to resolve.
    pub fn try_get_mut(&mut self, ptr: PoolPtr) -> Result<&mut T, BadPtr> {
        match self.storage.get_mut(ptr.index) {
            None => Err(BadPtr::OutOfBounds),
            Some(Entry::Vacant { .. }) => Err(BadPtr::Vacant),
            Some(Entry::Occupied { generation, value }) => {
                if *generation == ptr.generation {
                    Ok(value)
                } else {
                    Err(BadPtr::Stale)
                }
            }
        }
    }

    /// Does `ptr` refer to a live object in this pool?
    pub fn contains(&self, ptr: PoolPtr) -> bool {
        self.get(ptr).is_some()
    }

    /// Remove every live object.
    ///
    /// All outstanding handles are invalidated. The entries are kept (with
    /// bumped generations) so that later allocations can reuse them.
    pub fn clear(&mut self) {
        self.first_free = None;
        self.len = 0;
        for (index, entry) in self.storage.iter_mut().enumerate() {
            let generation = match entry {
                Entry::Occupied { generation, .. } => generation.wrapping_add(1),
                Entry::Vacant { generation, .. } => *generation,
            };
            *entry = Entry::Vacant {
                generation,
                next_free: self.first_free,
            };
            self.first_free = Some(index);
        }
    }
}

impl<T> ops::Index<PoolPtr> for Pool<T> {
    type Output = T;

    fn index(&self, index: PoolPtr) -> &Self::Output {
        self.get(index).expect("dangling ptr")
    }
}

impl<T> ops::IndexMut<PoolPtr> for Pool<T> {
    fn index_mut(&mut self, index: PoolPtr) -> &mut Self::Output {
        self.get_mut(index).expect("dangling ptr")
    }
}
