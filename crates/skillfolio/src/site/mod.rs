mod format;
mod service;
pub mod views;

pub use format::format_post_date;
pub use service::{post_href, SiteService, HOME_POST_LIMIT};
pub use views::{
    AbilityPoint, ActivePostView, BlogPreviewView, HomeView, PostSummaryView, PreviewEntry,
    SkillListingEntry, SkillPageView,
};
