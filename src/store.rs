//! Whole-file load/save storage for transactions backed by a CSV file.

use std::{
    fs::{self, File},
    path::PathBuf,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{Error, transaction::Transaction};

/// The column names the backing file must declare, in order.
pub const CSV_HEADER: [&str; 5] = [
    "transaction_id",
    "customer_id",
    "payment_amount",
    "payment_date",
    "payment_status",
];

/// A store that keeps the full collection of transactions in a single CSV
/// file, reading and writing the whole file on every operation.
///
/// There is no caching and no indexing: every read loads the entire file and
/// every mutation rewrites it. This keeps the on-disk format simple and
/// human-inspectable at the cost of O(n) work per operation, which is
/// acceptable for the small record counts this service is built for.
///
/// All file access is serialized through one process-wide lock, so two
/// concurrent mutations cannot lose an update: both run their full
/// read-modify-write cycle one after the other. Clones share the same lock
/// and backing file.
#[derive(Debug, Clone)]
pub struct CsvTransactionStore {
    path: Arc<PathBuf>,
    lock: Arc<Mutex<()>>,
}

impl CsvTransactionStore {
    /// Create a store backed by the CSV file at `path`.
    ///
    /// The file is not touched here. It must already exist with a header row
    /// before the first operation; a missing file is a hard error at load
    /// time rather than an implicit empty store.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Read the full collection of transactions from the backing file, in
    /// file order.
    ///
    /// A file containing only the header row yields an empty vector.
    ///
    /// # Errors
    /// Returns [Error::StoreIo] if the file is missing or unreadable,
    /// [Error::InvalidHeader] if the header row does not name the expected
    /// fields, or [Error::InvalidRecord] if any row fails to parse. A single
    /// bad row fails the whole load.
    pub fn load(&self) -> Result<Vec<Transaction>, Error> {
        let _guard = self.lock()?;
        self.load_unlocked()
    }

    /// Replace the contents of the backing file with `transactions`, writing
    /// a header row followed by one row per transaction in the order given.
    ///
    /// # Errors
    /// Returns [Error::StoreIo] on any I/O failure.
    pub fn save(&self, transactions: &[Transaction]) -> Result<(), Error> {
        let _guard = self.lock()?;
        self.save_unlocked(transactions)
    }

    /// Run a full read-modify-write cycle under the store lock: load the
    /// collection, apply `mutation` to it, then save it back.
    ///
    /// The collection is saved even when `mutation` leaves it unchanged, so a
    /// no-op mutation still rewrites the file.
    ///
    /// # Errors
    /// Returns any error from the underlying load or save.
    pub fn mutate<T>(
        &self,
        mutation: impl FnOnce(&mut Vec<Transaction>) -> T,
    ) -> Result<T, Error> {
        let _guard = self.lock()?;
        let mut transactions = self.load_unlocked()?;
        let result = mutation(&mut transactions);
        self.save_unlocked(&transactions)?;

        Ok(result)
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>, Error> {
        self.lock.lock().map_err(|_| Error::LockPoisoned)
    }

    fn load_unlocked(&self) -> Result<Vec<Transaction>, Error> {
        let file = File::open(self.path.as_ref()).map_err(|error| {
            Error::StoreIo(format!(
                "could not open {}: {error}",
                self.path.display()
            ))
        })?;
        let mut reader = csv::Reader::from_reader(file);

        let header = reader
            .headers()
            .map_err(|error| Error::StoreIo(error.to_string()))?;
        if header.iter().ne(CSV_HEADER) {
            return Err(Error::InvalidHeader(format!(
                "got {header:?}, want {CSV_HEADER:?}"
            )));
        }

        reader
            .deserialize()
            .map(|row| row.map_err(|error| Error::InvalidRecord(error.to_string())))
            .collect()
    }

    fn save_unlocked(&self, transactions: &[Transaction]) -> Result<(), Error> {
        // Write to a sibling file and rename it over the target so a crash
        // mid-write cannot leave a truncated store behind.
        let temp_path = self.path.with_extension("tmp");

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&temp_path)
            .map_err(|error| {
                Error::StoreIo(format!(
                    "could not create {}: {error}",
                    temp_path.display()
                ))
            })?;

        writer
            .write_record(CSV_HEADER)
            .map_err(|error| Error::StoreIo(error.to_string()))?;
        for transaction in transactions {
            writer
                .serialize(transaction)
                .map_err(|error| Error::StoreIo(error.to_string()))?;
        }
        writer
            .flush()
            .map_err(|error| Error::StoreIo(error.to_string()))?;
        drop(writer);

        fs::rename(&temp_path, self.path.as_ref()).map_err(|error| {
            Error::StoreIo(format!(
                "could not replace {}: {error}",
                self.path.display()
            ))
        })
    }
}
