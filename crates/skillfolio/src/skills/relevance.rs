use crate::content::PostRecord;

/// Number of related posts shown on a skill page.
pub const RELATED_POST_LIMIT: usize = 10;

type KeywordEntry = (&'static str, &'static [&'static str]);

/// Read-only mapping from skill name to the keywords that mark a post as related.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillKeywordTable {
    entries: &'static [KeywordEntry],
}

impl SkillKeywordTable {
    pub const fn new(entries: &'static [KeywordEntry]) -> Self {
        Self { entries }
    }

    /// Keywords for `skill_name`; unknown names have none.
    pub fn keywords_for(&self, skill_name: &str) -> &'static [&'static str] {
        self.entries
            .iter()
            .find(|(name, _)| *name == skill_name)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }
}

/// Selects published posts matching any keyword of `skill_name`, newest first, at most `limit`.
///
/// Equal dates keep their input order. Posts without a readable date sort last.
pub fn filter_relevant<'a>(
    posts: &'a [PostRecord],
    skill_name: &str,
    table: &SkillKeywordTable,
    limit: usize,
) -> Vec<&'a PostRecord> {
    let keywords: Vec<String> = table
        .keywords_for(skill_name)
        .iter()
        .map(|keyword| keyword.to_lowercase())
        .collect();
    if keywords.is_empty() {
        return Vec::new();
    }

    let mut related: Vec<&PostRecord> = posts
        .iter()
        .filter(|post| post.is_published())
        .filter(|post| {
            let haystack = searchable_text(post);
            keywords
                .iter()
                .any(|keyword| haystack.contains(keyword.as_str()))
        })
        .collect();

    sort_newest_first(&mut related);
    related.truncate(limit);
    related
}

/// Published posts, newest first.
pub fn published_posts(posts: &[PostRecord]) -> Vec<&PostRecord> {
    let mut published: Vec<&PostRecord> =
        posts.iter().filter(|post| post.is_published()).collect();
    sort_newest_first(&mut published);
    published
}

/// Stable sort by publication date, descending.
pub fn sort_newest_first(posts: &mut [&PostRecord]) {
    posts.sort_by_cached_key(|post| std::cmp::Reverse(post.sort_key()));
}

fn searchable_text(post: &PostRecord) -> String {
    format!(
        "{} {} {}",
        post.title,
        post.summary.as_deref().unwrap_or(""),
        post.tags.join(" ")
    )
    .to_lowercase()
}
