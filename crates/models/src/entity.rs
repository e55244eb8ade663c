use std::fmt::Debug;
use std::hash::Hash;

/// A record with a unique, immutable identifier.
///
/// Uniqueness is the caller's contract; stores built on this trait do not
/// check it.
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Clone + Eq + Hash + Debug + Send + Sync + 'static;

    fn id(&self) -> &Self::Id;
}
