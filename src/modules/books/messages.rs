//! Client-facing response messages, kept verbatim in Indonesian.

use super::registry::RegistryError;

pub const ADDED: &str = "Buku berhasil ditambahkan";
pub const UPDATED: &str = "Buku berhasil diperbarui";
pub const DELETED: &str = "Buku berhasil dihapus";

/// The operation a failure happened in; messages differ per operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Get,
    Update,
    Delete,
}

impl Operation {
    /// `Get` has no prefixed messages; it only ever reports a missing book.
    fn prefix(self) -> Option<&'static str> {
        match self {
            Operation::Add => Some("Gagal menambahkan buku"),
            Operation::Update => Some("Gagal memperbarui buku"),
            Operation::Delete => Some("Buku gagal dihapus"),
            Operation::Get => None,
        }
    }

    /// Fail message for a registry error, `None` for internal failures.
    pub fn failure(self, error: &RegistryError) -> Option<String> {
        let Some(prefix) = self.prefix() else {
            return matches!(error, RegistryError::NotFound(_))
                .then(|| "Buku tidak ditemukan".to_string());
        };

        let message = match error {
            RegistryError::MissingName => format!("{prefix}. Mohon isi nama buku"),
            RegistryError::ReadPageExceedsPageCount => {
                format!("{prefix}. readPage tidak boleh lebih besar dari pageCount")
            }
            RegistryError::NotFound(_) => format!("{prefix}. Id tidak ditemukan"),
            RegistryError::IdSpaceExhausted(_) | RegistryError::LockPoisoned => return None,
        };
        Some(message)
    }
}
