use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::{SqlitePoolOptions, SqliteRow}, Pool, Row, Sqlite};
use uuid::Uuid;

use crate::domain::{
    repository::TodoRepository,
    todo::{CompletionFilter, CreateTodo, Todo, TodoId, UpdateTodo},
};

const TODO_COLUMNS: &str = "id, title, description, completed, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteTodoRepository {
    pool: Arc<Pool<Sqlite>>,
}

impl SqliteTodoRepository {
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self { pool: Arc::new(pool) })
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn init(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS todos (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT,
                completed INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
        )
        .execute(&*self.pool)
        .await?;
        Ok(())
    }

    async fn create(&self, input: CreateTodo) -> Result<Todo> {
        let now = Utc::now();
        let id = TodoId(Uuid::new_v4());
        sqlx::query(
            "INSERT INTO todos (id, title, description, completed, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(id.0.to_string())
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.completed)
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(&*self.pool)
        .await?;
        Ok(Todo {
            id,
            title: input.title,
            description: input.description,
            completed: input.completed,
            created_at: now,
            updated_at: now,
        })
    }

    async fn get(&self, id: TodoId) -> Result<Option<Todo>> {
        let row = sqlx::query(&format!("SELECT {TODO_COLUMNS} FROM todos WHERE id = ?1"))
            .bind(id.0.to_string())
            .fetch_optional(&*self.pool)
            .await?;
        row.map(row_to_todo).transpose()
    }

    async fn list(&self, filter: CompletionFilter) -> Result<Vec<Todo>> {
        // Completed items sort by most recent completion, the rest by recency of creation.
        let sql = match filter {
            CompletionFilter::All => format!("SELECT {TODO_COLUMNS} FROM todos ORDER BY created_at DESC"),
            CompletionFilter::Completed => {
                format!("SELECT {TODO_COLUMNS} FROM todos WHERE completed = 1 ORDER BY updated_at DESC")
            }
            CompletionFilter::Pending => {
                format!("SELECT {TODO_COLUMNS} FROM todos WHERE completed = 0 ORDER BY created_at DESC")
            }
        };
        let rows = sqlx::query(&sql).fetch_all(&*self.pool).await?;
        rows.into_iter().map(row_to_todo).collect()
    }

    async fn update(&self, id: TodoId, input: UpdateTodo) -> Result<Option<Todo>> {
        let Some(mut todo) = self.get(id).await? else { return Ok(None) };

        if let Some(t) = input.title { todo.title = t; }
        if let Some(d) = input.description { todo.description = Some(d); }
        if let Some(c) = input.completed { todo.completed = c; }
        todo.updated_at = Utc::now();

        sqlx::query("UPDATE todos SET title = ?2, description = ?3, completed = ?4, updated_at = ?5 WHERE id = ?1")
            .bind(todo.id.0.to_string())
            .bind(&todo.title)
            .bind(&todo.description)
            .bind(todo.completed)
            .bind(todo.updated_at.to_rfc3339())
            .execute(&*self.pool)
            .await?;

        Ok(Some(todo))
    }

    async fn delete(&self, id: TodoId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id.0.to_string())
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn row_to_todo(row: SqliteRow) -> Result<Todo> {
    let id: String = row.get("id");
    let created_at: String = row.get("created_at");
    let updated_at: String = row.get("updated_at");
    Ok(Todo {
        id: TodoId(Uuid::parse_str(&id).context("malformed id column")?),
        title: row.get("title"),
        description: row.get("description"),
        completed: row.get("completed"),
        created_at: DateTime::parse_from_rfc3339(&created_at)
            .context("malformed created_at column")?
            .with_timezone(&Utc),
        updated_at: DateTime::parse_from_rfc3339(&updated_at)
            .context("malformed updated_at column")?
            .with_timezone(&Utc),
    })
}
