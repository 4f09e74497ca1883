//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod admin_log;
pub mod asset;
pub mod blog_entry;
pub mod chapter;
pub mod global;
pub mod page;
pub mod page_content;
pub mod series;
pub mod story;
pub mod theme;
pub mod transcript;
pub mod user;

// Re-export specific types to avoid conflicts
pub use admin_log::{Column as AdminLogColumn, Entity as AdminLog, Model as AdminLogModel};
pub use asset::{Column as AssetColumn, Entity as Asset, Model as AssetModel};
pub use blog_entry::{Column as BlogEntryColumn, Entity as BlogEntry, Model as BlogEntryModel};
pub use chapter::{Column as ChapterColumn, Entity as Chapter, Model as ChapterModel};
pub use global::{Column as GlobalColumn, Entity as Global, Model as GlobalModel};
pub use page::{Column as PageColumn, Entity as Page, Model as PageModel};
pub use page_content::{
    Column as PageContentColumn, Entity as PageContent, Model as PageContentModel,
};
pub use series::{Column as SeriesColumn, Entity as Series, Model as SeriesModel};
pub use story::{Column as StoryColumn, Entity as Story, Model as StoryModel};
pub use theme::{Column as ThemeColumn, Entity as Theme, Model as ThemeModel};
pub use transcript::{Column as TranscriptColumn, Entity as Transcript, Model as TranscriptModel};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};
