//! Value-equality capability for generic, equality-aware containers.

/// A value that compares structurally and exposes a stable hash code.
///
/// Implementors guarantee `a.equals(b) ⇒ a.hash_code() == b.hash_code()`.
pub trait Evaluable {
    /// Structural equality.
    fn equals(&self, other: &Self) -> bool;

    /// Hash code consistent with [`equals`](Evaluable::equals).
    fn hash_code(&self) -> u32;
}

/// Compares two values: identical references, or same hash code and
/// structurally equal.
pub fn is<T: Evaluable + ?Sized>(a: &T, b: &T) -> bool {
    std::ptr::eq(a, b) || (a.hash_code() == b.hash_code() && a.equals(b))
}
