use super::models::{CategoryRow, CATEGORY_COLUMNS};
use crate::application::repositories::{CategoryRepository, UnitOfWork};
use crate::domain::{
    Category, CategoryId, DomainError, DomainResult, Entity, Page, SearchDirection, SearchQuery,
    SortField,
};
use rusqlite::{params, Connection, OptionalExtension, Params, Result as SqliteResult};
use std::rc::Rc;

/// Convert a SQLite failure into an unclassified domain error
fn database_error(e: rusqlite::Error) -> DomainError {
    tracing::error!("Database error: {}", e);
    DomainError::Persistence(e.to_string())
}

fn not_found(id: &CategoryId) -> DomainError {
    DomainError::not_found(format!("Category '{}' not found.", id))
}

/// Open an explicit transaction unless one is already running.
/// Returns whether this call opened it.
fn begin_if_needed(conn: &Connection) -> SqliteResult<bool> {
    if conn.is_autocommit() {
        conn.execute_batch("BEGIN")?;
        return Ok(true);
    }
    Ok(false)
}

/// SQLite-based implementation of the CategoryRepository trait
///
/// Writes open a transaction that stays pending until the paired
/// [`SqliteUnitOfWork`] commits or rolls it back.
pub struct SqliteCategoryRepository {
    conn: Rc<Connection>,
}

impl SqliteCategoryRepository {
    /// Create a new SQLite repository with the given connection
    pub fn new(conn: Connection) -> SqliteResult<Self> {
        super::schema::initialize_database(&conn)?;
        Ok(SqliteCategoryRepository {
            conn: Rc::new(conn),
        })
    }

    /// Create a new in-memory SQLite repository (useful for testing)
    pub fn new_in_memory() -> SqliteResult<Self> {
        Self::new(Connection::open_in_memory()?)
    }

    /// Create a new file-based SQLite repository
    pub fn new_with_path(path: impl AsRef<std::path::Path>) -> SqliteResult<Self> {
        Self::new(Connection::open(path)?)
    }

    /// Unit of work sharing this repository's connection
    pub fn unit_of_work(&self) -> SqliteUnitOfWork {
        SqliteUnitOfWork {
            conn: Rc::clone(&self.conn),
        }
    }

    /// Run one write inside the pending transaction.
    ///
    /// A transaction opened by this call is rolled back again when the
    /// statement fails or touches no row, so nothing is left pending.
    fn write<P: Params>(&self, sql: &str, params: P) -> SqliteResult<usize> {
        let opened = begin_if_needed(&self.conn)?;
        let result = self.conn.execute(sql, params);

        let touched = matches!(&result, Ok(rows) if *rows > 0);
        if opened && !touched && !self.conn.is_autocommit() {
            self.conn.execute_batch("ROLLBACK")?;
        }
        result
    }

    fn write_row(&self, sql: &str, row: &CategoryRow) -> SqliteResult<usize> {
        self.write(
            sql,
            params![
                row.id,
                row.name,
                row.description,
                row.is_active,
                row.created_at,
                row.updated_at,
                row.deleted_at,
            ],
        )
    }

    fn load_page(&self, query: &SearchQuery) -> SqliteResult<(u64, Vec<CategoryRow>)> {
        let terms = if query.has_terms() { query.terms() } else { "" };

        let total: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM categories WHERE ?1 = '' OR instr(name, ?1) > 0",
            params![terms],
            |row| row.get(0),
        )?;

        let sort_column = match query.sort() {
            SortField::Name => "name",
            SortField::Id => "id",
            SortField::CreatedAt => "created_at",
        };
        let direction = match query.direction() {
            SearchDirection::Asc => "ASC",
            SearchDirection::Desc => "DESC",
        };
        let sql = format!(
            "SELECT {columns} FROM categories
             WHERE ?1 = '' OR instr(name, ?1) > 0
             ORDER BY {sort} {dir}, id {dir}
             LIMIT ?2 OFFSET ?3",
            columns = CATEGORY_COLUMNS,
            sort = sort_column,
            dir = direction,
        );

        let offset = i64::try_from(query.offset()).unwrap_or(i64::MAX);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map(
                params![terms, i64::from(query.per_page()), offset],
                CategoryRow::from_row,
            )?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok((u64::try_from(total).unwrap_or_default(), rows))
    }
}

impl CategoryRepository for SqliteCategoryRepository {
    fn get(&self, id: &CategoryId) -> DomainResult<Category> {
        let sql = format!("SELECT {} FROM categories WHERE id = ?1", CATEGORY_COLUMNS);
        let row = self
            .conn
            .query_row(&sql, params![id.to_string()], CategoryRow::from_row)
            .optional()
            .map_err(database_error)?
            .ok_or_else(|| not_found(id))?;

        Category::try_from(row)
    }

    fn insert(&mut self, category: &Category) -> DomainResult<()> {
        self.write_row(
            "INSERT INTO categories (id, name, description, is_active, created_at, updated_at, deleted_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            &CategoryRow::from(category),
        )
        .map_err(database_error)?;
        Ok(())
    }

    fn update(&mut self, category: &Category) -> DomainResult<()> {
        let rows_affected = self
            .write_row(
                "UPDATE categories
                 SET name = ?2, description = ?3, is_active = ?4,
                     created_at = ?5, updated_at = ?6, deleted_at = ?7
                 WHERE id = ?1",
                &CategoryRow::from(category),
            )
            .map_err(database_error)?;

        if rows_affected == 0 {
            return Err(not_found(category.id()));
        }
        Ok(())
    }

    fn delete(&mut self, category: &Category) -> DomainResult<()> {
        let id = category.id();
        let rows_affected = self
            .write("DELETE FROM categories WHERE id = ?1", params![id.to_string()])
            .map_err(database_error)?;

        if rows_affected == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    fn get_all(&self, query: &SearchQuery) -> DomainResult<Page<Category>> {
        let (total, rows) = self.load_page(query).map_err(database_error)?;

        let categories = rows
            .into_iter()
            .map(Category::try_from)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Page::new(query.page(), query.per_page(), total, categories))
    }
}

/// Commits or rolls back the transaction opened by [`SqliteCategoryRepository`] writes
pub struct SqliteUnitOfWork {
    conn: Rc<Connection>,
}

impl UnitOfWork for SqliteUnitOfWork {
    fn commit(&mut self) -> DomainResult<()> {
        if !self.conn.is_autocommit() {
            self.conn.execute_batch("COMMIT").map_err(database_error)?;
        }
        Ok(())
    }

    fn rollback(&mut self) -> DomainResult<()> {
        if !self.conn.is_autocommit() {
            self.conn.execute_batch("ROLLBACK").map_err(database_error)?;
        }
        Ok(())
    }
}
