pub mod client;
pub mod head;
pub mod mode;
pub mod render;
pub mod slug;

pub use crate::domain::model::{
    CollectionRecord, HeadOutput, MetaDocument, MetaTag, PageContext, PageKind, ProductRecord,
    ResolvedSlug, SeoMode, SiteInfo,
};
pub use crate::domain::ports::{CommerceApi, SettingsProvider};
pub use crate::utils::error::Result;
