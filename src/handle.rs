
use core::cell::Cell;
use core::fmt::{self, Debug, Formatter};
use core::ops::Deref;
use owning_ref::{CloneStableAddress, StableAddress};
use std::rc::Rc;

/// A reference-counted owning pointer to an optional heap resource.
///
/// The reference-counting protocol is carried out explicitly, as a teaching exercise:
/// the counter is the observable artifact, while the backing [`Rc`]s keep the
/// bookkeeping memory-safe. Every handle in one sharing group reads and writes the
/// same counter cell.
///
/// Unlike [`Rc`], a handle may be null. A null handle still carries a counter object,
/// and that counter reads zero, not one: the count reports live owners of a resource,
/// and a null handle owns nothing.
///
/// The counter is an unsynchronized [`Cell`]; [`Handle`] is single-threaded by
/// construction (`!Send`, `!Sync`). There are no weak references and no custom
/// deleters.
pub struct Handle<T> {
    resource: Option<Rc<T>>,
    count: Rc<Cell<u32>>,
}

impl<T> Handle<T> {
    /// Takes ownership of `value`. The new sharing group's count starts at 1.
    pub fn new(value: T) -> Self {
        Self {
            resource: Some(Rc::new(value)),
            count: Rc::new(Cell::new(1)),
        }
    }

    /// A null handle. Its freshly allocated counter reads zero.
    pub fn empty() -> Self {
        Self {
            resource: None,
            count: Rc::new(Cell::new(0)),
        }
    }

    /// The guarded counterpart of [`Deref`].
    pub fn get(&self) -> Option<&T> {
        self.resource.as_deref()
    }

    /// The number of live handles currently owning this resource.
    pub fn use_count(&self) -> u32 {
        self.count.get()
    }

    /// Whether this handle is the sole owner of its resource.
    pub fn is_unique(&self) -> bool {
        self.count.get() == 1
    }

    /// Whether the resource is null. Independent of the counter value.
    pub fn is_null(&self) -> bool {
        self.resource.is_none()
    }

    /// Releases the current resource exactly as dropping does, then re-initializes
    /// with `value` and a freshly allocated counter: 1 if `value` is non-null, else 0.
    ///
    /// The displaced counter is never reused, even when `value` is `None`. Any
    /// surviving members of the old sharing group keep it until their own count
    /// drops to zero.
    pub fn reset(&mut self, value: Option<T>) {
        self.release();

        self.resource = value.map(Rc::new);
        let init = if self.resource.is_some() { 1 } else { 0 };
        self.count = Rc::new(Cell::new(init));
    }

    /// The decrement half of the drop protocol. Storage for the resource and the
    /// counter is freed by the backing [`Rc`]s once the last member of the sharing
    /// group lets go, which coincides with the count reaching zero.
    fn release(&mut self) {
        if self.resource.take().is_some() {
            self.count.set(self.count.get() - 1);
        }
    }
}

impl<T> From<Option<T>> for Handle<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::new(value),
            None => Self::empty(),
        }
    }
}

impl<T> Clone for Handle<T> {
    /// The new handle shares `self`'s resource and counter. The counter is
    /// incremented only when the resource is non-null. Cloning never allocates a
    /// new counter.
    ///
    /// [`Handle`] is `Clone` regardless of whether `T` is `Clone`.
    fn clone(&self) -> Self {
        if self.resource.is_some() {
            self.count.set(self.count.get() + 1);
        }
        Self {
            resource: self.resource.clone(),
            count: Rc::clone(&self.count),
        }
    }
}

impl<T> Drop for Handle<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T> Deref for Handle<T> {
    type Target = T;

    /// Panics if the handle is null. Dereferencing a null handle is a programming
    /// error, not a runtime condition; use [`Handle::get()`] to branch instead.
    fn deref(&self) -> &T {
        match &self.resource {
            Some(rc) => rc.as_ref(),
            None => panic!("dereferenced a null Handle"),
        }
    }
}

impl<T: Debug> Debug for Handle<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("resource", &self.resource)
            .field("count", &self.count.get())
            .finish()
    }
}

unsafe impl<T> StableAddress for Handle<T> {}
unsafe impl<T> CloneStableAddress for Handle<T> {}
