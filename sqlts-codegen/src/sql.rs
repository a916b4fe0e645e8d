//! SQL text for single-table statements.
//!
//! Every statement uses positional `?` placeholders. A [`Statement`] records
//! which column each placeholder binds, in order, so callers can bind values
//! without re-deriving the order from the SQL text.
//!
//! Statements whose column list is only known at call time (insert and
//! update) are described by templates: an ordered list of [`Segment`]s,
//! fixed text around column-dependent lists. Generators translate each
//! segment into an expression of the target language; [`Segment::render`]
//! is the same translation into SQL text, so both follow one segment list.

/// A complete statement with its parameter bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    sql: String,
    params: Vec<String>,
}

impl Statement {
    fn new(sql: String, params: Vec<String>) -> Self {
        Self { sql, params }
    }

    /// The SQL text.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Column bound by each placeholder, in placeholder order.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Number of `?` placeholders outside quoted identifiers and string literals.
    pub fn placeholder_count(&self) -> usize {
        let mut count = 0;
        let mut quote: Option<char> = None;
        for c in self.sql.chars() {
            match (quote, c) {
                (Some(q), c) if c == q => quote = None,
                (Some(_), _) => {}
                (None, '"' | '\'') => quote = Some(c),
                (None, '?') => count += 1,
                (None, _) => {}
            }
        }
        count
    }
}

/// Joins the items of every column-dependent list.
pub const SEPARATOR: &str = ", ";

/// Placeholder for one bound value.
pub const PLACEHOLDER: &str = "?";

/// Follows a quoted column in a SET list.
pub const ASSIGNMENT: &str = " = ?";

/// One piece of a statement whose column list is only known at call time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Fixed SQL text.
    Text(String),
    /// Each column quoted, joined by [`SEPARATOR`].
    Columns,
    /// One [`PLACEHOLDER`] per column, joined by [`SEPARATOR`].
    Placeholders,
    /// Each column quoted and followed by [`ASSIGNMENT`], joined by [`SEPARATOR`].
    Assignments,
}

impl Segment {
    /// SQL text of this segment for the given columns.
    pub fn render<S: AsRef<str>>(&self, columns: &[S]) -> String {
        match self {
            Segment::Text(text) => text.clone(),
            Segment::Columns => columns
                .iter()
                .map(|c| quote_ident(c.as_ref()))
                .collect::<Vec<_>>()
                .join(SEPARATOR),
            Segment::Placeholders => placeholders(columns.len()),
            Segment::Assignments => assignments(columns),
        }
    }
}

fn render_segments<S: AsRef<str>>(segments: &[Segment], columns: &[S]) -> String {
    segments.iter().map(|segment| segment.render(columns)).collect()
}

/// Quote an identifier, doubling any embedded quote.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// `?, ?, ?` for `n` parameters.
pub fn placeholders(n: usize) -> String {
    vec![PLACEHOLDER; n].join(SEPARATOR)
}

/// `"a" = ?, "b" = ?` for a SET clause.
pub fn assignments<S: AsRef<str>>(columns: &[S]) -> String {
    columns
        .iter()
        .map(|c| format!("{}{}", quote_ident(c.as_ref()), ASSIGNMENT))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// `WHERE "k1" = ? AND "k2" = ?` over the key columns, in key order.
///
/// Returns an empty string for an empty key.
pub fn where_clause<S: AsRef<str>>(key: &[S]) -> String {
    if key.is_empty() {
        return String::new();
    }
    let conditions = key
        .iter()
        .map(|c| format!("{} = ?", quote_ident(c.as_ref())))
        .collect::<Vec<_>>()
        .join(" AND ");
    format!("WHERE {}", conditions)
}

fn owned<S: AsRef<str>>(columns: &[S]) -> Vec<String> {
    columns.iter().map(|c| c.as_ref().to_string()).collect()
}

/// `SELECT * FROM "t"`
pub fn select_all(table: &str) -> Statement {
    Statement::new(format!("SELECT * FROM {}", quote_ident(table)), Vec::new())
}

/// `SELECT * FROM "t" WHERE ...` bound by the key columns.
pub fn select_by_key<S: AsRef<str>>(table: &str, key: &[S]) -> Statement {
    Statement::new(
        format!("SELECT * FROM {} {}", quote_ident(table), where_clause(key)),
        owned(key),
    )
}

/// `DELETE FROM "t" WHERE ...` bound by the key columns.
pub fn delete_by_key<S: AsRef<str>>(table: &str, key: &[S]) -> Statement {
    Statement::new(
        format!("DELETE FROM {} {}", quote_ident(table), where_clause(key)),
        owned(key),
    )
}

/// An `INSERT ... RETURNING *` statement over the columns supplied at call time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertTemplate {
    segments: Vec<Segment>,
    /// The whole statement when no column is supplied.
    pub default_values: String,
}

impl InsertTemplate {
    pub fn new(table: &str) -> Self {
        let table = quote_ident(table);
        Self {
            segments: vec![
                Segment::Text(format!("INSERT INTO {} (", table)),
                Segment::Columns,
                Segment::Text(") VALUES (".to_string()),
                Segment::Placeholders,
                Segment::Text(") RETURNING *".to_string()),
            ],
            default_values: format!("INSERT INTO {} DEFAULT VALUES RETURNING *", table),
        }
    }

    /// Segments of the statement for a non-empty column list.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Insert exactly the given columns; absent columns are left to their defaults.
    pub fn render<S: AsRef<str>>(&self, columns: &[S]) -> Statement {
        if columns.is_empty() {
            return Statement::new(self.default_values.clone(), Vec::new());
        }
        Statement::new(render_segments(&self.segments, columns), owned(columns))
    }
}

/// An `UPDATE ... WHERE <key> RETURNING *` statement setting the columns
/// supplied at call time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTemplate {
    segments: Vec<Segment>,
    key: Vec<String>,
}

impl UpdateTemplate {
    pub fn new<S: AsRef<str>>(table: &str, key: &[S]) -> Self {
        Self {
            segments: vec![
                Segment::Text(format!("UPDATE {} SET ", quote_ident(table))),
                Segment::Assignments,
                Segment::Text(format!(" {} RETURNING *", where_clause(key))),
            ],
            key: owned(key),
        }
    }

    /// Segments of the statement for a non-empty column list.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Set the given columns. SET values bind first, then the key values.
    ///
    /// Returns `None` when there is nothing to set.
    pub fn render<S: AsRef<str>>(&self, columns: &[S]) -> Option<Statement> {
        if columns.is_empty() {
            return None;
        }
        let mut params = owned(columns);
        params.extend(self.key.iter().cloned());
        Some(Statement::new(
            render_segments(&self.segments, columns),
            params,
        ))
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::{Connection, OptionalExtension, params_from_iter, types::Value};

    use super::*;

    #[test]
    fn test_quote_ident() {
        assert_eq!(quote_ident("users"), "\"users\"");
        assert_eq!(quote_ident("odd\"name"), "\"odd\"\"name\"");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(placeholders(0), "");
        assert_eq!(placeholders(1), "?");
        assert_eq!(placeholders(3), "?, ?, ?");
    }

    #[test]
    fn test_where_clause_keeps_key_order() {
        assert_eq!(where_clause::<&str>(&[]), "");
        assert_eq!(
            where_clause(&["group_id", "user_id"]),
            "WHERE \"group_id\" = ? AND \"user_id\" = ?"
        );
    }

    #[test]
    fn test_select_all() {
        let stmt = select_all("users");
        assert_eq!(stmt.sql(), "SELECT * FROM \"users\"");
        assert_eq!(stmt.placeholder_count(), 0);
        assert!(stmt.params().is_empty());
    }

    #[test]
    fn test_select_and_delete_by_composite_key() {
        let key = ["group_id", "user_id"];

        let select = select_by_key("memberships", &key);
        assert_eq!(
            select.sql(),
            "SELECT * FROM \"memberships\" WHERE \"group_id\" = ? AND \"user_id\" = ?"
        );
        assert_eq!(select.placeholder_count(), 2);
        assert_eq!(select.params(), key);

        let delete = delete_by_key("memberships", &key);
        assert_eq!(
            delete.sql(),
            "DELETE FROM \"memberships\" WHERE \"group_id\" = ? AND \"user_id\" = ?"
        );
        assert_eq!(delete.placeholder_count(), delete.params().len());
    }

    #[test]
    fn test_insert_template() {
        let template = InsertTemplate::new("users");
        let stmt = template.render(&["username", "bio"]);
        assert_eq!(
            stmt.sql(),
            "INSERT INTO \"users\" (\"username\", \"bio\") VALUES (?, ?) RETURNING *"
        );
        assert_eq!(stmt.params(), ["username", "bio"]);
        assert_eq!(stmt.placeholder_count(), 2);
    }

    #[test]
    fn test_insert_without_columns_uses_defaults() {
        let stmt = InsertTemplate::new("users").render::<&str>(&[]);
        assert_eq!(
            stmt.sql(),
            "INSERT INTO \"users\" DEFAULT VALUES RETURNING *"
        );
        assert_eq!(stmt.placeholder_count(), 0);
    }

    #[test]
    fn test_update_binds_set_values_before_key() {
        let template = UpdateTemplate::new("memberships", &["group_id", "user_id"]);
        let stmt = template.render(&["role"]).unwrap();
        assert_eq!(
            stmt.sql(),
            "UPDATE \"memberships\" SET \"role\" = ? WHERE \"group_id\" = ? AND \"user_id\" = ? RETURNING *"
        );
        assert_eq!(stmt.params(), ["role", "group_id", "user_id"]);
        assert_eq!(stmt.placeholder_count(), 3);
    }

    #[test]
    fn test_segments_describe_the_rendered_statement() {
        let insert = InsertTemplate::new("users");
        assert_eq!(
            insert.segments(),
            [
                Segment::Text("INSERT INTO \"users\" (".to_string()),
                Segment::Columns,
                Segment::Text(") VALUES (".to_string()),
                Segment::Placeholders,
                Segment::Text(") RETURNING *".to_string()),
            ]
        );
        let joined: String = insert
            .segments()
            .iter()
            .map(|segment| segment.render(&["bio"]))
            .collect();
        assert_eq!(joined, insert.render(&["bio"]).sql());

        let update = UpdateTemplate::new("users", &["id"]);
        assert_eq!(update.segments()[1], Segment::Assignments);
        assert_eq!(Segment::Assignments.render(&["a", "b"]), "\"a\" = ?, \"b\" = ?");
    }

    #[test]
    fn test_update_without_columns_is_none() {
        let template = UpdateTemplate::new("users", &["id"]);
        assert!(template.render::<&str>(&[]).is_none());
    }

    #[test]
    fn test_placeholder_count_ignores_quoted_text() {
        let stmt = select_by_key("what?", &["is \"this\"?"]);
        assert_eq!(stmt.placeholder_count(), 1);
    }

    #[test]
    fn test_placeholder_count_matches_params_for_many_columns() {
        let columns: Vec<String> = (0..12).map(|i| format!("c{}", i)).collect();
        let insert = InsertTemplate::new("wide").render(&columns);
        assert_eq!(insert.placeholder_count(), insert.params().len());

        let update = UpdateTemplate::new("wide", &["id"])
            .render(&columns)
            .unwrap();
        assert_eq!(update.placeholder_count(), update.params().len());
        assert_eq!(update.params().last().map(String::as_str), Some("id"));
    }

    fn users_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE users (
                id INTEGER PRIMARY KEY,
                username TEXT NOT NULL,
                bio TEXT,
                status TEXT NOT NULL DEFAULT 'active'
            );",
        )
        .unwrap();
        conn
    }

    type UserRow = (i64, String, Option<String>, String);

    fn query_user(conn: &Connection, stmt: &Statement, values: Vec<Value>) -> Option<UserRow> {
        conn.query_row(stmt.sql(), params_from_iter(values), |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
        })
        .optional()
        .unwrap()
    }

    #[test]
    fn test_insert_then_get_round_trip() {
        let conn = users_db();

        let insert = InsertTemplate::new("users").render(&["username"]);
        let (id, username, bio, status) =
            query_user(&conn, &insert, vec![Value::Text("a".into())]).unwrap();
        assert_eq!(username, "a");
        assert_eq!(bio, None);
        assert_eq!(status, "active");

        let get = select_by_key("users", &["id"]);
        let fetched = query_user(&conn, &get, vec![Value::Integer(id)]).unwrap();
        assert_eq!(fetched, (id, "a".to_string(), None, "active".to_string()));
    }

    #[test]
    fn test_update_and_delete_against_sqlite() {
        let conn = users_db();
        conn.execute("INSERT INTO users (id, username) VALUES (7, 'before')", [])
            .unwrap();

        let update = UpdateTemplate::new("users", &["id"])
            .render(&["username", "bio"])
            .unwrap();
        let updated = query_user(
            &conn,
            &update,
            vec![
                Value::Text("after".into()),
                Value::Text("hello".into()),
                Value::Integer(7),
            ],
        )
        .unwrap();
        assert_eq!(updated.1, "after");
        assert_eq!(updated.2.as_deref(), Some("hello"));

        let missing = query_user(
            &conn,
            &update,
            vec![Value::Text("x".into()), Value::Null, Value::Integer(99)],
        );
        assert!(missing.is_none());

        let delete = delete_by_key("users", &["id"]);
        assert_eq!(conn.execute(delete.sql(), [7]).unwrap(), 1);
        // Deleting again is a no-op, not an error
        assert_eq!(conn.execute(delete.sql(), [7]).unwrap(), 0);
    }

    #[test]
    fn test_default_values_insert_against_sqlite() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE ticks (id INTEGER PRIMARY KEY, at TEXT DEFAULT 'now');")
            .unwrap();

        let stmt = InsertTemplate::new("ticks").render::<&str>(&[]);
        let (id, at): (i64, String) = conn
            .query_row(stmt.sql(), [], |row| Ok((row.get(0)?, row.get(1)?)))
            .unwrap();
        assert_eq!(id, 1);
        assert_eq!(at, "now");
    }
}
