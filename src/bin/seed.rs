use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use shop_schema::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{categories, manufacturers, products, users},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,shop_schema=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;
    run_migrations(&orm).await?;

    let user_id = ensure_user(&orm, "Alice", "Smith", "alice@example.com", "+1 555 0100").await?;
    let manufacturer_id = ensure_manufacturer(&orm, "Acme", "USA").await?;
    let category_id = ensure_category(&orm, "Tools").await?;

    let catalog = [
        ("Hammer", "Claw hammer with fiberglass handle", "19.99", "Steel", "0.75"),
        ("Screwdriver", "Flat-head screwdriver, 6 inch", "7.49", "Steel", "0.20"),
        ("Workbench", "Folding workbench with clamps", "129.00", "Beech", "11.40"),
    ];
    for (name, description, price, material, weight) in catalog {
        ensure_product(
            &orm,
            name,
            category_id,
            manufacturer_id,
            description,
            price.parse::<Decimal>()?,
            material,
            weight.parse::<Decimal>()?,
        )
        .await?;
    }

    tracing::info!(%user_id, "seed completed");
    Ok(())
}

async fn ensure_user(
    orm: &DatabaseConnection,
    first_name: &str,
    last_name: &str,
    email: &str,
    phone: &str,
) -> anyhow::Result<Uuid> {
    if let Some(existing) = users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(orm)
        .await?
    {
        return Ok(existing.id);
    }
    let user = users::ActiveModel {
        id: Set(Uuid::new_v4()),
        first_name: Set(first_name.into()),
        last_name: Set(last_name.into()),
        email: Set(email.into()),
        phone: Set(phone.into()),
    }
    .insert(orm)
    .await?;
    tracing::info!(email, "seeded user");
    Ok(user.id)
}

async fn ensure_manufacturer(
    orm: &DatabaseConnection,
    name: &str,
    country: &str,
) -> anyhow::Result<Uuid> {
    if let Some(existing) = manufacturers::Entity::find()
        .filter(manufacturers::Column::Name.eq(name))
        .one(orm)
        .await?
    {
        return Ok(existing.id);
    }
    let manufacturer = manufacturers::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.into()),
        country: Set(country.into()),
    }
    .insert(orm)
    .await?;
    tracing::info!(name, "seeded manufacturer");
    Ok(manufacturer.id)
}

async fn ensure_category(orm: &DatabaseConnection, name: &str) -> anyhow::Result<Uuid> {
    if let Some(existing) = categories::Entity::find()
        .filter(categories::Column::Name.eq(name))
        .one(orm)
        .await?
    {
        return Ok(existing.id);
    }
    let category = categories::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.into()),
    }
    .insert(orm)
    .await?;
    tracing::info!(name, "seeded category");
    Ok(category.id)
}

#[allow(clippy::too_many_arguments)]
async fn ensure_product(
    orm: &DatabaseConnection,
    name: &str,
    id_category: Uuid,
    id_manufacturer: Uuid,
    description: &str,
    price: Decimal,
    material: &str,
    weight: Decimal,
) -> anyhow::Result<Uuid> {
    if let Some(existing) = products::Entity::find()
        .filter(products::Column::Name.eq(name))
        .one(orm)
        .await?
    {
        return Ok(existing.id);
    }
    let product = products::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.into()),
        id_category: Set(id_category),
        id_manufacturer: Set(id_manufacturer),
        description: Set(description.into()),
        price: Set(price),
        material: Set(material.into()),
        weight: Set(weight),
    }
    .insert(orm)
    .await?;
    tracing::info!(name, "seeded product");
    Ok(product.id)
}
