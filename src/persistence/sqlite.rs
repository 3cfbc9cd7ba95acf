use super::{PersistenceResult, ProfileStore};
use crate::profile::{DogProfile, ProfileBook};
use rusqlite::{Connection, OptionalExtension, params};
use std::sync::Mutex;

pub struct SqliteProfileStore {
    connection: Mutex<Connection>,
}

impl SqliteProfileStore {
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> PersistenceResult<Self> {
        let connection = Connection::open(path)?;
        Self::initialize_schema(&connection)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn initialize_schema(connection: &Connection) -> PersistenceResult<()> {
        let ddl = r#"
            CREATE TABLE IF NOT EXISTS profile_book (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                selected_index INTEGER NOT NULL
            );
            CREATE TABLE IF NOT EXISTS profiles (
                position INTEGER PRIMARY KEY,
                profile_json TEXT NOT NULL
            );
        "#;
        connection.execute_batch(ddl)?;
        Ok(())
    }
}

impl ProfileStore for SqliteProfileStore {
    fn save_book(&self, book: &ProfileBook) -> PersistenceResult<()> {
        super::validate_book(book)?;
        let mut conn = self.connection.lock().expect("sqlite mutex poisoned");
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM profile_book", [])?;
        tx.execute(
            "INSERT INTO profile_book (id, selected_index) VALUES (1, ?1)",
            params![book.selected_index() as i64],
        )?;
        tx.execute("DELETE FROM profiles", [])?;
        {
            let mut stmt =
                tx.prepare("INSERT INTO profiles (position, profile_json) VALUES (?1, ?2)")?;
            for (position, profile) in book.list().iter().enumerate() {
                let json = serde_json::to_string(profile)?;
                stmt.execute(params![position as i64, json])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn load_book(&self) -> PersistenceResult<Option<ProfileBook>> {
        let conn = self.connection.lock().expect("sqlite mutex poisoned");

        let mut stmt = conn.prepare("SELECT selected_index FROM profile_book WHERE id = 1")?;
        let selected_opt: Option<i64> = stmt.query_row([], |row| row.get(0)).optional()?;

        let Some(selected) = selected_opt else {
            return Ok(None);
        };

        let mut stmt = conn.prepare("SELECT profile_json FROM profiles ORDER BY position ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut profiles = Vec::new();
        for json in rows {
            let json = json?;
            let profile: DogProfile = serde_json::from_str(&json)?;
            profiles.push(profile);
        }

        super::validate_profiles(&profiles)?;

        Ok(Some(ProfileBook::from_parts(profiles, selected.max(0) as usize)))
    }
}
