//! Port implementations for [`InMemoryStore`].

use async_trait::async_trait;

use super::{FoodRow, InMemoryStore};
use crate::domain::ports::{
    ConfirmationLogPersistenceError, ConfirmationLogRepository, FoodPersistenceError,
    FoodRepository, SensitivityPersistenceError, SensitivityRepository, UserPersistenceError,
    UserRepository,
};
use crate::domain::{
    ConfirmationLog, ContentName, Food, FoodContent, FoodContentId, FoodId, NewConfirmationLog,
    NewFood, NewUser, PhoneNumber, User, UserId,
};

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|existing| existing.phone() == &user.phone) {
            return Err(UserPersistenceError::duplicate_phone(user.phone.as_ref()));
        }
        let id = UserId::from_store(tables.user_ids.next());
        let created = User::new(id, user.full_name.clone(), user.phone.clone());
        tables.users.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_by_phone(
        &self,
        phone: &PhoneNumber,
    ) -> Result<Option<User>, UserPersistenceError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|user| user.phone() == phone).cloned())
    }
}

#[async_trait]
impl FoodRepository for InMemoryStore {
    async fn find_food(&self, id: FoodId) -> Result<Option<Food>, FoodPersistenceError> {
        Ok(self.tables.read().await.food(id))
    }

    async fn list_contents(&self) -> Result<Vec<FoodContent>, FoodPersistenceError> {
        let tables = self.tables.read().await;
        Ok(tables
            .contents
            .iter()
            .map(|(id, name)| FoodContent::new(*id, name.clone()))
            .collect())
    }

    async fn find_contents(
        &self,
        ids: &[FoodContentId],
    ) -> Result<Vec<FoodContent>, FoodPersistenceError> {
        let tables = self.tables.read().await;
        Ok(tables
            .contents
            .iter()
            .filter(|(id, _)| ids.contains(*id))
            .map(|(id, name)| FoodContent::new(*id, name.clone()))
            .collect())
    }

    async fn create_content(
        &self,
        name: &ContentName,
    ) -> Result<FoodContent, FoodPersistenceError> {
        let mut tables = self.tables.write().await;
        let id = FoodContentId::from_store(tables.content_ids.next());
        tables.contents.insert(id, name.clone());
        Ok(FoodContent::new(id, name.clone()))
    }

    async fn create_food(&self, food: &NewFood) -> Result<Food, FoodPersistenceError> {
        let mut tables = self.tables.write().await;
        if let Some(missing) = food
            .contents()
            .iter()
            .find(|id| !tables.contents.contains_key(*id))
        {
            return Err(FoodPersistenceError::query(format!(
                "food content {missing} does not exist"
            )));
        }
        let id = FoodId::from_store(tables.food_ids.next());
        tables.foods.insert(
            id,
            FoodRow {
                name: food.name.clone(),
                image: food.image.clone(),
                contents: food.contents().to_vec(),
            },
        );
        tables
            .food(id)
            .ok_or_else(|| FoodPersistenceError::query("inserted food vanished"))
    }
}

#[async_trait]
impl SensitivityRepository for InMemoryStore {
    async fn add(
        &self,
        user_id: UserId,
        content_id: FoodContentId,
    ) -> Result<(), SensitivityPersistenceError> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&user_id) || !tables.contents.contains_key(&content_id) {
            return Err(SensitivityPersistenceError::query(format!(
                "cannot associate user {user_id} with content {content_id}"
            )));
        }
        tables.sensitivities.push((user_id, content_id));
        Ok(())
    }

    async fn contents_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<FoodContent>, SensitivityPersistenceError> {
        Ok(self.tables.read().await.sensitive_contents(user_id))
    }
}

#[async_trait]
impl ConfirmationLogRepository for InMemoryStore {
    async fn append(
        &self,
        entry: &NewConfirmationLog,
    ) -> Result<ConfirmationLog, ConfirmationLogPersistenceError> {
        let mut tables = self.tables.write().await;
        Ok(tables.push_log(
            entry.user_id(),
            entry.food_id(),
            entry.sensitive_content_ids().to_vec(),
        ))
    }
}
