pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::SeoConfig;
pub use core::client::Commerce7Client;
pub use core::head::HeadRenderer;
pub use core::mode::HostEffects;
pub use domain::model::{
    HeadOutput, MetaDocument, MetaTag, PageContext, PageKind, SeoMode, SiteInfo,
};
pub use domain::ports::{CommerceApi, SettingsProvider};
pub use utils::error::{Result, SeoError};
