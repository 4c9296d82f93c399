// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dependent associations.
//!
//! A [`HasMany`] links an owner type to child rows through a foreign key
//! column and decides what happens to those children when the owner is
//! destroyed:
//!
//! | Policy | Children |
//! |--------|----------|
//! | none | left untouched |
//! | [`Dependent::Destroy`] | each live child destroyed through its repository (soft for paranoid children) |
//! | [`Dependent::DeleteAll`] | live children hard-deleted in one statement |
//!
//! Loading through an association goes through the child's default scope,
//! so soft-deleted children disappear from the owner's collection.
//!
//! ```rust,ignore
//! let people = Repository::new(people_store).has_many(
//!     HasMany::new(androids.clone(), "owner_id").dependent(Dependent::Destroy)
//! );
//! ```

use crate::{
    BoxError, Condition, Error, Finder, Record, Repository, Store, Visibility, async_trait
};

/// What to do with children when their owner is destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dependent {
    /// Destroy each live child, running its hooks and cascades.
    Destroy,

    /// Hard-delete live children without hooks.
    DeleteAll
}

/// Cascade behaviour of an owner type `O` over one association.
///
/// Object safe, so a repository can hold associations to children of
/// different types and stores.
#[async_trait]
pub trait Association<O: Record>: Send + Sync {
    /// Association name, used in errors and logs.
    fn name(&self) -> &'static str;

    /// React to `owner` being destroyed.
    ///
    /// Returns the number of children affected.
    async fn on_destroy(&self, owner: &O) -> Result<usize, BoxError>;
}

/// One-to-many association to children of type `C`.
pub struct HasMany<C: Record, S> {
    name:        &'static str,
    foreign_key: &'static str,
    dependent:   Option<Dependent>,
    target:      Repository<C, S>
}

impl<C: Record, S: Store<C>> HasMany<C, S> {
    /// Associate children stored in `target` whose `foreign_key` column
    /// holds the owner's id.
    ///
    /// Named after the child table; no dependent policy.
    pub fn new(target: Repository<C, S>, foreign_key: &'static str) -> Self {
        Self {
            name: C::TABLE,
            foreign_key,
            dependent: None,
            target
        }
    }

    /// Rename the association.
    #[must_use]
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Set the dependent policy.
    #[must_use]
    pub fn dependent(mut self, dependent: Dependent) -> Self {
        self.dependent = Some(dependent);
        self
    }

    /// Foreign key column on the child table.
    pub const fn foreign_key(&self) -> &'static str {
        self.foreign_key
    }

    /// Repository of the children.
    pub const fn target(&self) -> &Repository<C, S> {
        &self.target
    }

    /// Query over the children of `owner`.
    ///
    /// Chain visibility selectors to reach soft-deleted children.
    pub fn of<O: Record>(&self, owner: &O) -> Finder<'_, C, S> {
        self.target
            .query()
            .filter(Condition::Eq(self.foreign_key, owner.id().clone().into()))
    }

    /// Live children of `owner`.
    pub async fn load<O: Record>(&self, owner: &O) -> Result<Vec<C>, Error<S::Error>> {
        self.of(owner).all().await
    }

    /// Number of live children of `owner`.
    pub async fn count<O: Record>(&self, owner: &O) -> Result<usize, Error<S::Error>> {
        self.of(owner).count().await
    }
}

#[async_trait]
impl<O, C, S> Association<O> for HasMany<C, S>
where
    O: Record,
    C: Record,
    S: Store<C>
{
    fn name(&self) -> &'static str {
        self.name
    }

    async fn on_destroy(&self, owner: &O) -> Result<usize, BoxError> {
        match self.dependent {
            None => Ok(0),
            Some(Dependent::Destroy) => Ok(self.of(owner).destroy_all().await?.len()),
            Some(Dependent::DeleteAll) => {
                let removed = self
                    .of(owner)
                    .visibility(Visibility::Live)
                    .delete_all()
                    .await?;
                Ok(removed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        MemoryStore,
        testing::{Droid, Person}
    };

    type Androids = Repository<Droid, MemoryStore<Droid>>;

    type Owned = HasMany<Droid, MemoryStore<Droid>>;

    async fn luke_with_droids(dependent: Option<Dependent>) -> (Person, Androids, Owned) {
        let androids = Repository::new(MemoryStore::new());
        let luke = Person::new("Luke Skywalker");
        androids.create(Droid::owned_by("R2D2", &luke)).await.unwrap();
        androids.create(Droid::owned_by("C3P0", &luke)).await.unwrap();
        androids.create(Droid::new("BB8")).await.unwrap();

        let mut association = HasMany::new(androids.clone(), "owner_id");
        if let Some(dependent) = dependent {
            association = association.dependent(dependent);
        }
        (luke, androids, association)
    }

    #[tokio::test]
    async fn load_skips_destroyed_children() {
        let (luke, androids, association) = luke_with_droids(None).await;
        assert_eq!(association.count(&luke).await.unwrap(), 2);

        let r2d2 = association.load(&luke).await.unwrap().remove(0);
        androids.destroy(&r2d2).await.unwrap();

        assert_eq!(association.count(&luke).await.unwrap(), 1);
        assert_eq!(association.of(&luke).count_with_destroyed().await.unwrap(), 2);
        assert_eq!(association.of(&luke).find_only_destroyed().await.unwrap()[0].name, "R2D2");
    }

    #[tokio::test]
    async fn no_policy_leaves_children() {
        let (luke, androids, association) = luke_with_droids(None).await;
        assert_eq!(Association::<Person>::name(&association), "androids");
        assert_eq!(association.on_destroy(&luke).await.unwrap(), 0);
        assert_eq!(androids.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn destroy_policy_soft_deletes_children() {
        let (luke, androids, association) = luke_with_droids(Some(Dependent::Destroy)).await;
        assert_eq!(association.on_destroy(&luke).await.unwrap(), 2);
        assert_eq!(androids.count().await.unwrap(), 1);
        assert_eq!(androids.count_only_destroyed().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn delete_all_policy_hard_deletes_live_children() {
        let (luke, androids, association) = luke_with_droids(Some(Dependent::DeleteAll)).await;
        let r2d2 = association.load(&luke).await.unwrap().remove(0);
        androids.destroy(&r2d2).await.unwrap();

        assert_eq!(association.on_destroy(&luke).await.unwrap(), 1);
        assert_eq!(androids.count().await.unwrap(), 1);
        // the previously destroyed child is kept
        assert_eq!(androids.count_only_destroyed().await.unwrap(), 1);
    }

    #[test]
    fn builder() {
        let association = HasMany::new(Repository::new(MemoryStore::<Droid>::new()), "owner_id")
            .named("droids");
        assert_eq!(Association::<Person>::name(&association), "droids");
        assert_eq!(association.foreign_key(), "owner_id");
        assert_eq!(association.target().store().len(), 0);
    }
}
