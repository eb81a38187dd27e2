//! Migration v1: initial schema

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS verticals (
    id TEXT PRIMARY KEY,
    slug TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    ui_config TEXT NOT NULL DEFAULT '[]'
);

CREATE TABLE IF NOT EXISTS portal_items (
    id TEXT PRIMARY KEY,
    vertical_id TEXT NOT NULL REFERENCES verticals(id),
    slug TEXT NOT NULL,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    data TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    UNIQUE(vertical_id, slug)
);

CREATE INDEX IF NOT EXISTS idx_items_vertical ON portal_items(vertical_id);
CREATE INDEX IF NOT EXISTS idx_items_title ON portal_items(title);
";
