//! The "has zero length" capability shared by every checkable value shape.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// A value whose emptiness can be checked.
///
/// Text reports its length in bytes, containers their element count, mappings
/// their entry count and slices/arrays their length. Only `value_len() == 0`
/// matters to the checks, so the unit of length is never observable.
pub trait Emptiness {
    fn value_len(&self) -> usize;

    fn is_empty_value(&self) -> bool {
        self.value_len() == 0
    }
}

impl Emptiness for str {
    fn value_len(&self) -> usize {
        self.len()
    }
}

impl Emptiness for String {
    fn value_len(&self) -> usize {
        self.len()
    }
}

impl Emptiness for Cow<'_, str> {
    fn value_len(&self) -> usize {
        self.len()
    }
}

// One impl covers arrays of every primitive (and non-primitive) element type.
impl<T> Emptiness for [T] {
    fn value_len(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Emptiness for [T; N] {
    fn value_len(&self) -> usize {
        N
    }
}

/// Implements [`Emptiness`] for collection types that expose `len()`.
macro_rules! impl_emptiness_by_len {
    ($($ty:ident<$($param:ident),+>),+ $(,)?) => {
        $(
            impl<$($param),+> Emptiness for $ty<$($param),+> {
                fn value_len(&self) -> usize {
                    self.len()
                }
            }
        )+
    };
}

impl_emptiness_by_len!(
    Vec<T>,
    VecDeque<T>,
    LinkedList<T>,
    BinaryHeap<T>,
    BTreeSet<T>,
    BTreeMap<K, V>,
);

impl<T, S> Emptiness for HashSet<T, S> {
    fn value_len(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Emptiness for HashMap<K, V, S> {
    fn value_len(&self) -> usize {
        self.len()
    }
}

/// Forwards [`Emptiness`] through references and smart pointers.
macro_rules! impl_emptiness_deref {
    ($($ptr:ty),+ $(,)?) => {
        $(
            impl<T: Emptiness + ?Sized> Emptiness for $ptr {
                fn value_len(&self) -> usize {
                    (**self).value_len()
                }
            }
        )+
    };
}

impl_emptiness_deref!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);
