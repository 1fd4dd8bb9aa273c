/// AWS-facing services: credentials, configuration, delivery
pub mod config;
pub mod connector;
pub mod credentials;
pub mod ses;

// Re-export service traits
pub use config::{ConfigResolver, ServiceConfig};
pub use connector::{Connector, SesConnector};
pub use credentials::CredentialSource;
pub use ses::RawEmailSender;
