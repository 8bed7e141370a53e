use super::format::format_post_date;
use super::views::{
    AbilityPoint, ActivePostView, BlogPreviewView, HomeView, PostSummaryView, PreviewEntry,
    SkillListingEntry, SkillPageView,
};
use crate::config::SiteConfig;
use crate::content::PostRecord;
use crate::skills::{
    filter_relevant, published_posts, SkillCatalog, EVALUATION_NOTES, RELATED_POST_LIMIT,
    SCORE_RANGE,
};
use tracing::debug;

/// Number of posts listed under the radar chart on the home page.
pub const HOME_POST_LIMIT: usize = 5;

/// Builds page views from a fixed snapshot of posts.
#[derive(Debug, Clone)]
pub struct SiteService {
    site: SiteConfig,
    catalog: SkillCatalog,
    posts: Vec<PostRecord>,
}

impl SiteService {
    pub fn new(site: SiteConfig, posts: Vec<PostRecord>) -> Self {
        Self {
            site,
            catalog: SkillCatalog::standard(),
            posts,
        }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    pub fn posts(&self) -> &[PostRecord] {
        &self.posts
    }

    pub fn home(&self) -> HomeView {
        let ability_chart = self
            .catalog
            .skills()
            .iter()
            .map(|skill| AbilityPoint {
                subject: skill.name,
                score: skill.score,
                url: skill.url(),
            })
            .collect();

        let latest_posts = published_posts(&self.posts)
            .into_iter()
            .take(HOME_POST_LIMIT)
            .map(|post| self.summarize(post))
            .collect();

        HomeView {
            title: self.site.title.clone(),
            description: self.site.description.clone(),
            ability_chart,
            latest_posts,
        }
    }

    pub fn skills(&self) -> Vec<SkillListingEntry> {
        self.catalog
            .skills()
            .iter()
            .map(|skill| SkillListingEntry {
                key: skill.key,
                name: skill.name,
                score: skill.score,
                url: skill.url(),
            })
            .collect()
    }

    /// The detail page for the skill routed at `key`, or `None` for unknown keys.
    pub fn skill_page(&self, key: &str) -> Option<SkillPageView> {
        let skill = self.catalog.find_by_key(key)?;
        let related_posts = self.related_posts(skill.name, RELATED_POST_LIMIT);
        debug!(skill = skill.name, related = related_posts.len(), "skill page built");

        Some(SkillPageView {
            key: skill.key,
            name: skill.name,
            score: skill.score,
            introduction: skill.introduction.to_vec(),
            related_posts,
            rubric: skill.rubric.to_vec(),
            score_range: SCORE_RANGE,
            evaluation: EVALUATION_NOTES,
        })
    }

    /// Posts related to `skill_name` by keyword; unknown skills have none.
    pub fn related_posts(&self, skill_name: &str, limit: usize) -> Vec<PostSummaryView> {
        filter_relevant(&self.posts, skill_name, self.catalog.keywords(), limit)
            .into_iter()
            .map(|post| self.summarize(post))
            .collect()
    }

    /// Post list with one post opened for reading.
    ///
    /// Without a slug the newest post is opened; a slug that matches nothing opens none.
    pub fn blog_preview(&self, slug: Option<&str>) -> BlogPreviewView {
        let posts = published_posts(&self.posts);
        // Slugs are not guaranteed unique, so the active entry is tracked by position.
        let active_index = match slug {
            Some(slug) => posts.iter().position(|post| post.slug == slug),
            None => (!posts.is_empty()).then_some(0),
        };
        let active = active_index.map(|index| posts[index]);

        let entries = posts
            .iter()
            .enumerate()
            .map(|(index, post)| PreviewEntry {
                slug: post.slug.clone(),
                title: post.title.clone(),
                href: post_href(&post.slug),
                active: Some(index) == active_index,
            })
            .collect();

        BlogPreviewView {
            posts: entries,
            active: active.map(|post| ActivePostView {
                slug: post.slug.clone(),
                title: post.title.clone(),
                summary: post.summary.clone().unwrap_or_default(),
                date: post.date.clone(),
                tags: post.tags.clone(),
                body: post.body.clone(),
            }),
        }
    }

    fn summarize(&self, post: &PostRecord) -> PostSummaryView {
        PostSummaryView {
            slug: post.slug.clone(),
            title: post.title.clone(),
            date: post.date.clone(),
            formatted_date: format_post_date(post.date.as_deref(), &self.site.locale),
            tags: post.tags.clone(),
            summary: post.summary.clone().unwrap_or_default(),
            href: post_href(&post.slug),
        }
    }
}

/// Link to the full post; slugs may carry the collection's `blog/` prefix.
pub fn post_href(slug: &str) -> String {
    format!("/blog/{}", slug.strip_prefix("blog/").unwrap_or(slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, title: &str, date: &str) -> PostRecord {
        PostRecord {
            date: Some(date.to_string()),
            ..PostRecord::new(slug, title)
        }
    }

    fn service() -> SiteService {
        SiteService::new(
            SiteConfig::default(),
            vec![
                post("blog/older", "部署笔记", "2024-01-01"),
                post("newer", "随笔", "2024-03-01"),
            ],
        )
    }

    #[test]
    fn hrefs_strip_collection_prefix() {
        assert_eq!(post_href("blog/older"), "/blog/older");
        assert_eq!(post_href("newer"), "/blog/newer");
    }

    #[test]
    fn preview_opens_newest_post_by_default() {
        let preview = service().blog_preview(None);
        let active = preview.active.expect("newest post opened");
        assert_eq!(active.slug, "newer");
        assert!(preview.posts[0].active);
        assert!(!preview.posts[1].active);
    }

    #[test]
    fn preview_with_unknown_slug_opens_nothing() {
        let preview = service().blog_preview(Some("missing"));
        assert!(preview.active.is_none());
        assert!(preview.posts.iter().all(|entry| !entry.active));
    }

    #[test]
    fn preview_marks_one_entry_when_slugs_repeat() {
        let service = SiteService::new(
            SiteConfig::default(),
            vec![
                post("same", "第一篇", "2024-02-01"),
                post("same", "第二篇", "2024-01-01"),
            ],
        );

        let preview = service.blog_preview(Some("same"));
        let flags: Vec<bool> = preview.posts.iter().map(|entry| entry.active).collect();
        assert_eq!(flags, [true, false]);
        assert_eq!(preview.active.expect("first match opened").title, "第一篇");
    }

    #[test]
    fn summaries_use_site_locale() {
        let related = service().related_posts("系统工程与部署能力", 10);
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].formatted_date, "2024年1月1日");
        assert_eq!(related[0].href, "/blog/older");
    }
}
