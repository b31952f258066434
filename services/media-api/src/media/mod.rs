pub mod error;
pub mod input;
pub mod service;

pub use error::MediaError;
pub use input::{normalize_tags, CreateMediaInput};
pub use service::{MediaService, StorageSummary};

pub const DEFAULT_LIST_LIMIT: u32 = 12;
pub const MAX_LIST_LIMIT: u32 = 50;

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_DESCRIPTION_CHARS: usize = 2000;
pub const MAX_MIME_TYPE_CHARS: usize = 255;
pub const MAX_TAGS_PER_ASSET: usize = 10;
pub const MAX_TAG_CHARS: usize = 64;
