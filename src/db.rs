use crate::error::CredentialError;
use crate::models::User;
use rusqlite::{ffi, params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

const CREATE_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL
)";
const INSERT_USER: &str = "INSERT INTO users (username, password) VALUES (?1, ?2)";
const SELECT_USER: &str = "SELECT username, password FROM users WHERE username = ?1 AND password = ?2";

/// SQLite-backed credential table.
///
/// Holds only the database location. Every operation opens its own
/// connection and drops it before returning, on success and on error.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection, CredentialError> {
        Connection::open(&self.path).map_err(CredentialError::Connection)
    }

    pub fn init_schema(&self) -> rusqlite::Result<()> {
        let conn = Connection::open(&self.path)?;
        conn.execute_batch(CREATE_USERS)
    }

    /// Inserts a new record; a taken username maps to `DuplicateUsername`.
    pub fn insert_user(&self, user: &User) -> Result<(), CredentialError> {
        let conn = self.connect()?;
        match conn.execute(INSERT_USER, params![user.username, user.password_hash]) {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                Err(CredentialError::DuplicateUsername(user.username.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Looks up the record matching both the username and the digest.
    pub fn find_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<Option<User>, CredentialError> {
        let conn = self.connect()?;
        let user = conn
            .query_row(SELECT_USER, params![username, password_hash], |row| {
                Ok(User {
                    username: row.get(0)?,
                    password_hash: row.get(1)?,
                })
            })
            .optional()?;
        Ok(user)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tempfile::TempDir;

    pub(crate) fn temp_store() -> (TempDir, CredentialStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("users.db"));
        store.init_schema().unwrap();
        (dir, store)
    }

    pub(crate) fn stored_hash(store: &CredentialStore, username: &str) -> Option<String> {
        let conn = Connection::open(store.path()).unwrap();
        conn.query_row(
            "SELECT password FROM users WHERE username = ?1",
            params![username],
            |row| row.get(0),
        )
        .optional()
        .unwrap()
    }

    fn user(name: &str, hash: &str) -> User {
        User {
            username: name.to_string(),
            password_hash: hash.to_string(),
        }
    }

    #[test]
    fn init_schema_is_idempotent() {
        let (_dir, store) = temp_store();
        store.init_schema().unwrap();
        store.init_schema().unwrap();
    }

    #[test]
    fn insert_then_find() {
        let (_dir, store) = temp_store();
        store.insert_user(&user("alice", "abc")).unwrap();

        let found = store.find_user("alice", "abc").unwrap();
        assert_eq!(found, Some(user("alice", "abc")));
        assert_eq!(store.find_user("alice", "abd").unwrap(), None);
        assert_eq!(store.find_user("bob", "abc").unwrap(), None);
    }

    #[test]
    fn duplicate_username_is_reported_and_keeps_original() {
        let (_dir, store) = temp_store();
        store.insert_user(&user("alice", "first")).unwrap();

        let err = store.insert_user(&user("alice", "second")).unwrap_err();
        assert!(matches!(err, CredentialError::DuplicateUsername(ref u) if u == "alice"));
        assert_eq!(stored_hash(&store, "alice").as_deref(), Some("first"));
    }

    #[test]
    fn unreachable_database_is_a_connection_error() {
        let store = CredentialStore::new("/nonexistent-dir/for/users.db");
        let err = store.insert_user(&user("alice", "abc")).unwrap_err();
        assert!(matches!(err, CredentialError::Connection(_)));
        assert!(err.is_storage());
        assert!(matches!(
            store.find_user("alice", "abc"),
            Err(CredentialError::Connection(_))
        ));
    }

    #[test]
    fn statement_failure_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        // No schema: the connection opens but the statement fails.
        let store = CredentialStore::new(dir.path().join("empty.db"));
        assert!(matches!(
            store.insert_user(&user("alice", "abc")),
            Err(CredentialError::Storage(_))
        ));
        assert!(matches!(
            store.find_user("alice", "abc"),
            Err(CredentialError::Storage(_))
        ));
    }
}
