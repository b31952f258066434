use rusqlite::Connection;

use super::StorageError;

pub const MEDIA_ASSETS_TABLE_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS media_assets (
    id TEXT PRIMARY KEY,
    owner_id TEXT NOT NULL,
    title TEXT NOT NULL,
    description TEXT,
    mime_type TEXT NOT NULL,
    size_bytes INTEGER NOT NULL,
    is_public INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    updated_at TEXT
);
"#;

pub const MEDIA_TAGS_TABLE_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS media_tags (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    created_at TEXT NOT NULL
);
"#;

pub const MEDIA_ASSET_TAGS_TABLE_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS media_asset_tags (
    asset_id TEXT NOT NULL REFERENCES media_assets(id) ON DELETE CASCADE,
    tag_id TEXT NOT NULL REFERENCES media_tags(id) ON DELETE CASCADE,
    created_at TEXT NOT NULL,
    PRIMARY KEY (asset_id, tag_id)
);
"#;

pub const MEDIA_INDEXES: &str = r#"
CREATE INDEX IF NOT EXISTS idx_media_owner ON media_assets(owner_id);
CREATE INDEX IF NOT EXISTS idx_media_owner_created ON media_assets(owner_id, created_at);
"#;

pub fn init_database(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(MEDIA_ASSETS_TABLE_SCHEMA)?;
    conn.execute_batch(MEDIA_TAGS_TABLE_SCHEMA)?;
    conn.execute_batch(MEDIA_ASSET_TAGS_TABLE_SCHEMA)?;
    conn.execute_batch(MEDIA_INDEXES)?;
    Ok(())
}
