//! Configuration section definitions.

mod feeds;
mod pagination;
mod site;
mod social;
mod urls;

pub use feeds::FeedsConfig;
pub use pagination::{PaginationConfig, PaginationPattern};
pub use site::SiteConfigSection;
pub use social::SocialConfig;
pub use urls::UrlsConfig;
