//! Migration v2: FTS5 index over portal_items
//!
//! External-content table kept in sync by triggers; search joins back on
//! rowid for the full row.

pub(super) const SQL: &str = "
CREATE VIRTUAL TABLE IF NOT EXISTS portal_items_fts USING fts5(
    title, description, slug,
    content='portal_items', content_rowid='rowid'
);

CREATE TRIGGER IF NOT EXISTS portal_items_ai AFTER INSERT ON portal_items BEGIN
    INSERT INTO portal_items_fts(rowid, title, description, slug)
    VALUES (new.rowid, new.title, new.description, new.slug);
END;

CREATE TRIGGER IF NOT EXISTS portal_items_ad AFTER DELETE ON portal_items BEGIN
    INSERT INTO portal_items_fts(portal_items_fts, rowid, title, description, slug)
    VALUES ('delete', old.rowid, old.title, old.description, old.slug);
END;

CREATE TRIGGER IF NOT EXISTS portal_items_au AFTER UPDATE ON portal_items BEGIN
    INSERT INTO portal_items_fts(portal_items_fts, rowid, title, description, slug)
    VALUES ('delete', old.rowid, old.title, old.description, old.slug);
    INSERT INTO portal_items_fts(rowid, title, description, slug)
    VALUES (new.rowid, new.title, new.description, new.slug);
END;
";
