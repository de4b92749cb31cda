use crate::{
    common::error::DirectoryError,
    domain::{directory::Directory, seed, session::Session},
};

/// Everything one user session acts on. Owned by the caller and passed by
/// `&mut` into each intent handler.
#[derive(Debug, Default)]
pub struct Bank {
    pub directory: Directory,
    pub session: Session,
}

impl Bank {
    pub fn new(directory: Directory) -> Self {
        Self {
            directory,
            session: Session::new(),
        }
    }

    /// A bank opened with the demo accounts.
    pub fn seeded() -> Result<Self, DirectoryError> {
        Ok(Self::new(Directory::new(seed::demo_accounts())?))
    }
}
