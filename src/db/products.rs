use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbBackend, DbErr, EntityTrait, NotSet,
    PaginatorTrait, QueryOrder, QuerySelect, Set,
};

use crate::models::products::{self, CreateProduct, UpdateProduct};

/// Insert a new product. A missing id comes from the database, a missing created date from the clock.
pub async fn insert_product(
    db: &DatabaseConnection,
    input: CreateProduct,
) -> Result<products::Model, DbErr> {
    let explicit_id = input.id.is_some();
    let new_product = products::ActiveModel {
        id: input.id.map_or(NotSet, Set),
        name: Set(input.name),
        description: Set(input.description),
        price: Set(input.price),
        created_date: Set(input.created_date.unwrap_or_else(chrono::Utc::now)),
    };

    let product = new_product.insert(db).await?;

    // Postgres serials do not move past explicitly inserted ids.
    if explicit_id && db.get_database_backend() == DbBackend::Postgres {
        db.execute_unprepared(
            "SELECT setval(pg_get_serial_sequence('products', 'id'), (SELECT MAX(id) FROM products))",
        )
        .await?;
    }

    Ok(product)
}

/// Count every stored product, irrespective of paging.
pub async fn count_products(db: &DatabaseConnection) -> Result<u64, DbErr> {
    products::Entity::find().count(db).await
}

/// Fetch one page of products ordered by id. `page_index` is 1-based.
pub async fn get_products_page(
    db: &DatabaseConnection,
    page_index: u64,
    page_size: u64,
) -> Result<Vec<products::Model>, DbErr> {
    let offset = Ord::min(
        page_index.saturating_sub(1).saturating_mul(page_size),
        i64::MAX as u64,
    );

    products::Entity::find()
        .order_by_asc(products::Column::Id)
        .offset(offset)
        .limit(page_size)
        .all(db)
        .await
}

/// Fetch a single product by ID.
pub async fn get_product_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<products::Model>, DbErr> {
    products::Entity::find_by_id(id).one(db).await
}

/// Overwrite name, description and price. Returns `None` when the product does not exist.
pub async fn update_product(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateProduct,
) -> Result<Option<products::Model>, DbErr> {
    let Some(product) = products::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active: products::ActiveModel = product.into();
    active.name = Set(input.name);
    active.description = Set(input.description);
    active.price = Set(input.price);

    active.update(db).await.map(Some)
}

/// Delete a product by ID. Returns whether a row was removed.
pub async fn delete_product(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
    let result = products::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
