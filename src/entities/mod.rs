pub mod preference;

pub use preference::Entity as Preference;
