//! SQLite Todo Handle

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{FromRow, Sqlite};

use crate::application::ports::{Lookup, RepositoryError, TodoHandle};
use crate::domain::{Todo, TodoDraft, TodoId};

/// SQLite 存储句柄
///
/// 持有一个池化连接，drop 时归还连接池。
pub struct SqliteTodoHandle {
    conn: PoolConnection<Sqlite>,
}

impl SqliteTodoHandle {
    pub fn new(conn: PoolConnection<Sqlite>) -> Self {
        Self { conn }
    }
}

#[derive(FromRow)]
struct TodoRow {
    id: i64,
    title: String,
    completed: bool,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo {
            id: TodoId::new(row.id),
            title: row.title,
            completed: row.completed,
        }
    }
}

#[async_trait]
impl TodoHandle for SqliteTodoHandle {
    async fn find_all(&mut self) -> Result<Vec<Todo>, RepositoryError> {
        let rows: Vec<TodoRow> =
            sqlx::query_as("SELECT id, title, completed FROM todos ORDER BY id")
                .fetch_all(&mut *self.conn)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn first(&mut self, id: TodoId) -> Result<Lookup<Todo>, RepositoryError> {
        let row: Option<TodoRow> =
            sqlx::query_as("SELECT id, title, completed FROM todos WHERE id = ?")
                .bind(id.get())
                .fetch_optional(&mut *self.conn)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(row.map(Todo::from).into())
    }

    async fn create(&mut self, draft: &TodoDraft) -> Result<Todo, RepositoryError> {
        let result = sqlx::query("INSERT INTO todos (title, completed) VALUES (?, ?)")
            .bind(&draft.title)
            .bind(draft.completed)
            .execute(&mut *self.conn)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(draft.clone().into_todo(TodoId::new(result.last_insert_rowid())))
    }

    async fn save(&mut self, todo: &Todo) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO todos (id, title, completed)
            VALUES (?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                completed = excluded.completed
            "#,
        )
        .bind(todo.id.get())
        .bind(&todo.title)
        .bind(todo.completed)
        .execute(&mut *self.conn)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn delete(&mut self, id: TodoId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id.get())
            .execute(&mut *self.conn)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
