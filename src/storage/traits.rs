//! Storage trait definitions.

use crate::domain::Shoe;
use crate::error::Result;

/// What a load found on disk.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// No file existed; a fresh one holding only the header was created
    Created,
    /// The file existed and these records were read from it, in file order
    Loaded(Vec<Shoe>),
}

/// Persistence for the inventory.
///
/// The session calls `load` once at startup, `append` after each add and
/// `rewrite` after each in-place mutation.
pub trait InventoryStorage {
    /// Read every record, creating the backing store if it does not exist.
    fn load(&self) -> Result<LoadOutcome>;

    /// Persist one newly added record after the existing ones.
    fn append(&self, shoe: &Shoe) -> Result<()>;

    /// Replace everything persisted with `shoes`, in order.
    fn rewrite(&self, shoes: &[Shoe]) -> Result<()>;
}

impl<T: InventoryStorage + ?Sized> InventoryStorage for &T {
    fn load(&self) -> Result<LoadOutcome> {
        (**self).load()
    }

    fn append(&self, shoe: &Shoe) -> Result<()> {
        (**self).append(shoe)
    }

    fn rewrite(&self, shoes: &[Shoe]) -> Result<()> {
        (**self).rewrite(shoes)
    }
}
