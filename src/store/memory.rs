//! In-process `UserStore` used by tests and local runs without a database.

use crate::error::AppError;
use crate::model::User;
use crate::store::UserStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<BTreeMap<i64, String>>,
    unavailable: AtomicBool,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the database went away.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.users.read().map(|u| u.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::Db(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.check_available()?;
        let users = self.users.read().map_err(|_| AppError::Unavailable)?;
        Ok(users
            .iter()
            .map(|(id, name)| User::new(*id, name.clone()))
            .collect())
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>, AppError> {
        self.check_available()?;
        let users = self.users.read().map_err(|_| AppError::Unavailable)?;
        Ok(users.get(&id).map(|name| User::new(id, name.clone())))
    }

    async fn create_user(&self, user: &User) -> Result<(), AppError> {
        self.check_available()?;
        let mut users = self.users.write().map_err(|_| AppError::Unavailable)?;
        if users.contains_key(&user.id) {
            return Err(AppError::DuplicateUser(user.id));
        }
        users.insert(user.id, user.username.clone());
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::Unavailable);
        }
        Ok(())
    }

    async fn close(&self) {
        self.set_unavailable(true);
    }
}
