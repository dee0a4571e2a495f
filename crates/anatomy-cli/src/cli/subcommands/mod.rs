pub mod auth;
pub mod profile;
pub mod subscription;

pub use auth::AuthCommands;
pub use profile::ProfileCommands;
pub use subscription::SubscriptionCommands;
