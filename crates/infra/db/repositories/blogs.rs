use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain;
use crate::infra::db::postgres::{postgres_connection::PgPoolSquad, schema::blogs};
use domain::{
    entities::blogs::{BlogEntity, InsertBlogEntity, UpdateBlogEntity},
    repositories::blogs::BlogRepository,
};

pub struct BlogPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl BlogPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl BlogRepository for BlogPostgres {
    async fn list(&self, published_only: bool) -> Result<Vec<BlogEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let mut query = blogs::table
            .order(blogs::created_at.desc())
            .select(BlogEntity::as_select())
            .into_boxed();

        if published_only {
            query = query.filter(blogs::is_published.eq(true));
        }

        let rows = query.load::<BlogEntity>(&mut conn)?;
        Ok(rows)
    }

    async fn find_by_id(&self, blog_id: Uuid) -> Result<Option<BlogEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = blogs::table
            .filter(blogs::id.eq(blog_id))
            .select(BlogEntity::as_select())
            .first::<BlogEntity>(&mut conn)
            .optional()?;

        Ok(row)
    }

    async fn find_by_slug(&self, slug: String) -> Result<Option<BlogEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = blogs::table
            .filter(blogs::slug.eq(slug))
            .select(BlogEntity::as_select())
            .first::<BlogEntity>(&mut conn)
            .optional()?;

        Ok(row)
    }

    async fn create(&self, blog: InsertBlogEntity) -> Result<BlogEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = diesel::insert_into(blogs::table)
            .values(&blog)
            .returning(BlogEntity::as_returning())
            .get_result::<BlogEntity>(&mut conn)?;

        Ok(row)
    }

    async fn update(&self, blog_id: Uuid, blog: UpdateBlogEntity) -> Result<Option<BlogEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = diesel::update(blogs::table.filter(blogs::id.eq(blog_id)))
            .set(&blog)
            .returning(BlogEntity::as_returning())
            .get_result::<BlogEntity>(&mut conn)
            .optional()?;

        Ok(row)
    }

    async fn delete(&self, blog_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted =
            diesel::delete(blogs::table.filter(blogs::id.eq(blog_id))).execute(&mut conn)?;

        Ok(deleted > 0)
    }
}
