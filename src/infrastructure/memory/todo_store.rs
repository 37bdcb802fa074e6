//! In-Memory Todo Store Implementation

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;

use crate::application::ports::{
    DbProviderPort, Lookup, ProviderError, RepositoryError, TodoHandle,
};
use crate::domain::{Todo, TodoDraft, TodoId};

/// 共享的内存表
struct TodoTable {
    rows: DashMap<TodoId, Todo>,
    next_id: AtomicI64,
    available: AtomicBool,
    queries_failing: AtomicBool,
}

/// 内存数据库 Provider
///
/// 可以模拟存储不可用（`get` 失败）和查询失败，供测试覆盖 500 分支。
#[derive(Clone)]
pub struct InMemoryDbProvider {
    table: Arc<TodoTable>,
}

impl InMemoryDbProvider {
    pub fn new() -> Self {
        Self {
            table: Arc::new(TodoTable {
                rows: DashMap::new(),
                next_id: AtomicI64::new(1),
                available: AtomicBool::new(true),
                queries_failing: AtomicBool::new(false),
            }),
        }
    }

    /// 设为 false 后 `get` 返回 `ProviderError::Unavailable`
    pub fn set_available(&self, available: bool) {
        self.table.available.store(available, Ordering::SeqCst);
    }

    /// 设为 true 后句柄上的所有操作返回 `RepositoryError`
    pub fn set_queries_failing(&self, failing: bool) {
        self.table.queries_failing.store(failing, Ordering::SeqCst);
    }

    /// 直接取得句柄（不经过可用性检查）
    pub fn handle(&self) -> InMemoryTodoHandle {
        InMemoryTodoHandle {
            table: self.table.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.table.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.rows.is_empty()
    }

    /// 按 id 升序返回当前所有记录
    pub fn snapshot(&self) -> Vec<Todo> {
        let mut todos: Vec<Todo> = self.table.rows.iter().map(|r| r.value().clone()).collect();
        todos.sort_by_key(|t| t.id);
        todos
    }
}

impl Default for InMemoryDbProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DbProviderPort for InMemoryDbProvider {
    async fn get(&self) -> Result<Box<dyn TodoHandle>, ProviderError> {
        if !self.table.available.load(Ordering::SeqCst) {
            return Err(ProviderError::Unavailable(
                "in-memory store is offline".to_string(),
            ));
        }
        Ok(Box::new(self.handle()))
    }
}

/// 内存存储句柄
pub struct InMemoryTodoHandle {
    table: Arc<TodoTable>,
}

impl InMemoryTodoHandle {
    fn check(&self) -> Result<(), RepositoryError> {
        if self.table.queries_failing.load(Ordering::SeqCst) {
            return Err(RepositoryError::DatabaseError(
                "in-memory store rejected the query".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl TodoHandle for InMemoryTodoHandle {
    async fn find_all(&mut self) -> Result<Vec<Todo>, RepositoryError> {
        self.check()?;
        let mut todos: Vec<Todo> = self.table.rows.iter().map(|r| r.value().clone()).collect();
        todos.sort_by_key(|t| t.id);
        Ok(todos)
    }

    async fn first(&mut self, id: TodoId) -> Result<Lookup<Todo>, RepositoryError> {
        self.check()?;
        Ok(self.table.rows.get(&id).map(|r| r.value().clone()).into())
    }

    async fn create(&mut self, draft: &TodoDraft) -> Result<Todo, RepositoryError> {
        self.check()?;
        let id = TodoId::new(self.table.next_id.fetch_add(1, Ordering::SeqCst));
        let todo = draft.clone().into_todo(id);
        self.table.rows.insert(id, todo.clone());
        tracing::debug!(todo_id = %id, "Todo inserted into memory store");
        Ok(todo)
    }

    async fn save(&mut self, todo: &Todo) -> Result<(), RepositoryError> {
        self.check()?;
        self.table.rows.insert(todo.id, todo.clone());
        Ok(())
    }

    async fn delete(&mut self, id: TodoId) -> Result<(), RepositoryError> {
        self.check()?;
        self.table.rows.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_todo_lifecycle() {
        let provider = InMemoryDbProvider::new();
        let mut db = provider.get().await.unwrap();

        // Create
        let todo = db.create(&TodoDraft::new("buy milk", false)).await.unwrap();
        assert_eq!(todo.id, TodoId::new(1));

        // First
        assert_eq!(db.first(todo.id).await.unwrap(), Lookup::Found(todo.clone()));

        // Save
        let replaced = TodoDraft::new("buy bread", true).into_todo(todo.id);
        db.save(&replaced).await.unwrap();
        assert_eq!(db.find_all().await.unwrap(), vec![replaced]);

        // Delete
        db.delete(todo.id).await.unwrap();
        assert_eq!(db.first(todo.id).await.unwrap(), Lookup::NotFound);
        assert!(provider.is_empty());
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let provider = InMemoryDbProvider::new();
        let mut db = provider.get().await.unwrap();

        let first = db.create(&TodoDraft::default()).await.unwrap();
        db.delete(first.id).await.unwrap();
        let second = db.create(&TodoDraft::default()).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_unavailable() {
        let provider = InMemoryDbProvider::new();
        provider.set_available(false);
        assert!(provider.get().await.is_err());

        provider.set_available(true);
        assert!(provider.get().await.is_ok());
    }

    #[tokio::test]
    async fn test_queries_failing() {
        let provider = InMemoryDbProvider::new();
        provider.set_queries_failing(true);

        let mut db = provider.get().await.unwrap();
        assert!(db.find_all().await.is_err());
        assert!(db.first(TodoId::new(1)).await.is_err());
    }
}
