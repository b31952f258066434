use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::{SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;
use uuid::Uuid;

use super::error::StorageError;
use super::repository::{MediaAssetRecord, MediaRepository, NewMediaAsset};
use super::schema::init_database;
use super::MEDIA_DB_FILENAME;

pub struct MediaDatabase {
    data_dir: PathBuf,
    conn: Mutex<Connection>,
}

impl MediaDatabase {
    pub fn new(data_dir: PathBuf) -> Result<Self, StorageError> {
        std::fs::create_dir_all(&data_dir)?;
        let db_path = data_dir.join(MEDIA_DB_FILENAME);
        let conn = Connection::open(&db_path)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        init_database(&conn)?;

        Ok(Self {
            data_dir,
            conn: Mutex::new(conn),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.conn.lock().map_err(|_| StorageError::ConnectionPoisoned)
    }
}

impl MediaRepository for MediaDatabase {
    fn list_sizes_for_owner(&self, owner_id: &str) -> Result<Vec<i64>, StorageError> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT size_bytes
            FROM media_assets
            WHERE owner_id = ?1
            "#,
        )?;

        let rows = stmt.query_map(params![owner_id], |row| row.get::<_, i64>(0))?;

        let mut sizes = Vec::new();
        for row in rows {
            sizes.push(row?);
        }
        Ok(sizes)
    }

    fn list_assets(&self, owner_id: &str, limit: u32) -> Result<Vec<MediaAssetRecord>, StorageError> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, owner_id, title, description, mime_type, size_bytes, is_public, created_at
            FROM media_assets
            WHERE owner_id = ?1
            ORDER BY created_at DESC, rowid DESC
            LIMIT ?2
            "#,
        )?;

        let rows = stmt.query_map(params![owner_id, limit], |row| {
            Ok(MediaAssetRecord {
                id: row.get(0)?,
                owner_id: row.get(1)?,
                title: row.get(2)?,
                description: row.get(3)?,
                mime_type: row.get(4)?,
                size_bytes: row.get(5)?,
                is_public: row.get(6)?,
                created_at: row.get(7)?,
                tags: Vec::new(),
            })
        })?;

        let mut assets = Vec::new();
        for row in rows {
            assets.push(row?);
        }

        let mut tag_stmt = conn.prepare(
            r#"
            SELECT t.name
            FROM media_asset_tags l
            JOIN media_tags t ON t.id = l.tag_id
            WHERE l.asset_id = ?1
            ORDER BY l.rowid
            "#,
        )?;

        for asset in &mut assets {
            let names = tag_stmt.query_map(params![asset.id], |row| row.get::<_, String>(0))?;
            for name in names {
                asset.tags.push(name?);
            }
        }

        Ok(assets)
    }

    fn create_asset(
        &self,
        owner_id: &str,
        asset: NewMediaAsset,
    ) -> Result<MediaAssetRecord, StorageError> {
        let mut conn = self.connection()?;
        let tx = conn.transaction()?;

        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

        tx.execute(
            r#"
            INSERT INTO media_assets (id, owner_id, title, description, mime_type, size_bytes, is_public, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                id,
                owner_id,
                asset.title,
                asset.description,
                asset.mime_type,
                asset.size_bytes,
                asset.is_public,
                now
            ],
        )?;

        for tag in &asset.tags {
            tx.execute(
                r#"
                INSERT INTO media_tags (id, name, created_at)
                VALUES (?1, ?2, ?3)
                ON CONFLICT(name) DO NOTHING
                "#,
                params![Uuid::new_v4().to_string(), tag, now],
            )?;

            let tag_id: String = tx
                .query_row(
                    "SELECT id FROM media_tags WHERE name = ?1",
                    params![tag],
                    |row| row.get(0),
                )
                .optional()?
                .ok_or_else(|| StorageError::UnresolvedTag(tag.clone()))?;

            tx.execute(
                r#"
                INSERT OR IGNORE INTO media_asset_tags (asset_id, tag_id, created_at)
                VALUES (?1, ?2, ?3)
                "#,
                params![id, tag_id, now],
            )?;
        }

        tx.commit()?;
        debug!(asset_id = %id, owner_id, tags = asset.tags.len(), "inserted media asset");

        Ok(MediaAssetRecord {
            id,
            owner_id: owner_id.to_string(),
            title: asset.title,
            description: asset.description,
            mime_type: asset.mime_type,
            size_bytes: asset.size_bytes,
            is_public: asset.is_public,
            created_at: now,
            tags: asset.tags,
        })
    }
}
