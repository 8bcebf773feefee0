pub use super::favorite::Entity as Favorite;
pub use super::people::Entity as People;
pub use super::person::Entity as Person;
pub use super::planet::Entity as Planet;
pub use super::planets::Entity as Planets;
pub use super::user::Entity as User;
