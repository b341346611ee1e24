use super::BookStore;
use crate::directory::Directory;
use crate::error::Result;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshot: Option<Directory>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: Directory) -> Self {
        Self {
            snapshot: Some(book),
            saves: 0,
        }
    }

    /// The last saved book, if any.
    pub fn snapshot(&self) -> Option<&Directory> {
        self.snapshot.as_ref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> Directory {
        self.snapshot.clone().unwrap_or_default()
    }

    fn save(&mut self, book: &Directory) -> Result<()> {
        self.snapshot = Some(book.clone());
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct BookFixture {
        pub book: Directory,
    }

    impl Default for BookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self {
                book: Directory::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phone: &str) -> Self {
            self.book.add_contact(name, phone).unwrap();
            self
        }

        pub fn with_birthday(mut self, name: &str, phone: &str, birthday: &str) -> Self {
            self.book.add_contact(name, phone).unwrap();
            self.book.find_mut(name).unwrap().add_birthday(birthday).unwrap();
            self
        }

        pub fn store(self) -> InMemoryStore {
            InMemoryStore::with_book(self.book)
        }
    }
}
