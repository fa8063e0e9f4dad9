pub mod categories;
pub mod manufacturers;
pub mod orders;
pub mod positions;
pub mod products;
pub mod reviews;
pub mod users;

pub use categories::Entity as Categories;
pub use manufacturers::Entity as Manufacturers;
pub use orders::Entity as Orders;
pub use positions::Entity as Positions;
pub use products::Entity as Products;
pub use reviews::Entity as Reviews;
pub use users::Entity as Users;
