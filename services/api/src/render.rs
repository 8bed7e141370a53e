use crate::infra::load_site;
use clap::Args;
use skillfolio::config::SiteConfig;
use skillfolio::error::AppError;
use skillfolio::site::{HomeView, PostSummaryView, SiteService, SkillListingEntry, SkillPageView};
use skillfolio::skills::RELATED_POST_LIMIT;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct HomeArgs {
    /// Override the configured posts directory
    #[arg(long)]
    pub(crate) posts_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct SkillShowArgs {
    /// Route key of the skill (see `skills list`)
    pub(crate) key: String,
    /// Override the configured posts directory
    #[arg(long)]
    pub(crate) posts_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct RelatedPostsArgs {
    /// Skill name exactly as it appears in the keyword table
    #[arg(long)]
    pub(crate) skill: String,
    /// Maximum number of posts to list
    #[arg(long, default_value_t = RELATED_POST_LIMIT)]
    pub(crate) limit: usize,
    /// Override the configured posts directory
    #[arg(long)]
    pub(crate) posts_dir: Option<PathBuf>,
}

pub(crate) fn run_home(args: HomeArgs) -> Result<(), AppError> {
    let site = load_site(args.posts_dir)?;
    print!("{}", render_home(&site.home()));
    Ok(())
}

pub(crate) fn run_skill_list() -> Result<(), AppError> {
    let site = SiteService::new(SiteConfig::default(), Vec::new());
    print!("{}", render_skill_list(&site.skills()));
    Ok(())
}

pub(crate) fn run_skill_show(args: SkillShowArgs) -> Result<(), AppError> {
    let SkillShowArgs { key, posts_dir } = args;
    let site = load_site(posts_dir)?;
    let page = site.skill_page(&key).ok_or(AppError::SkillNotFound(key))?;
    print!("{}", render_skill_page(&page));
    Ok(())
}

pub(crate) fn run_related_posts(args: RelatedPostsArgs) -> Result<(), AppError> {
    let RelatedPostsArgs {
        skill,
        limit,
        posts_dir,
    } = args;
    let site = load_site(posts_dir)?;
    let posts = site.related_posts(&skill, limit);

    match site.catalog().find_by_name(&skill) {
        Some(definition) => println!("{} ({})", definition.name, definition.url()),
        None if site.catalog().keywords().keywords_for(&skill).is_empty() => {
            println!("No keywords configured for '{skill}'")
        }
        None => {}
    }
    print!("{}", render_post_list(&posts));
    Ok(())
}

pub(crate) fn render_home(home: &HomeView) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n{}\n", home.title, home.description));

    out.push_str("\nSkill scores\n");
    for point in &home.ability_chart {
        out.push_str(&format!(
            "- {} {:>3} {} ({})\n",
            point.subject,
            point.score,
            score_bar(point.score),
            point.url
        ));
    }

    out.push_str("\nLatest posts\n");
    out.push_str(&render_post_list(&home.latest_posts));
    out
}

pub(crate) fn render_skill_list(entries: &[SkillListingEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{:<12} {:>3}  {}\n", entry.key, entry.score, entry.name))
        .collect()
}

pub(crate) fn render_skill_page(page: &SkillPageView) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n技能评分: {}\n", page.name, page.score));

    out.push_str("\n个人介绍\n");
    for paragraph in &page.introduction {
        out.push_str(paragraph);
        out.push('\n');
    }

    out.push_str("\n相关博客\n");
    if page.related_posts.is_empty() {
        out.push_str("暂无相关博客文章\n");
    } else {
        out.push_str(&render_post_list(&page.related_posts));
    }

    out.push_str("\n评分标准\n");
    for criterion in &page.rubric {
        out.push_str(&format!("- {}：{}\n", criterion.label, criterion.detail));
    }
    out.push_str(&format!(
        "评分范围：{}-{}分\n当前得分：{}\n",
        page.score_range.min, page.score_range.max, page.score
    ));

    let notes = &page.evaluation;
    out.push_str("\n调用模型\n");
    out.push_str(&format!("{}\n", notes.summary));
    out.push_str(&format!("- 评估模型：{}\n", notes.models));
    out.push_str(&format!("- 评估依据：{}\n", notes.basis));
    out.push_str(&format!("- 评估维度：{}\n", notes.dimensions));
    out.push_str(&format!("- 更新频率：{}\n", notes.cadence));
    out.push_str(&format!("提示：{}\n", notes.disclaimer));
    out
}

pub(crate) fn render_post_list(posts: &[PostSummaryView]) -> String {
    if posts.is_empty() {
        return "No posts found.\n".to_string();
    }

    let mut out = String::new();
    for post in posts {
        let date = if post.formatted_date.is_empty() {
            "undated"
        } else {
            post.formatted_date.as_str()
        };
        out.push_str(&format!("- {} | {} | {}\n", date, post.title, post.href));
        if !post.tags.is_empty() {
            out.push_str(&format!("  tags: {}\n", post.tags.join(", ")));
        }
        if !post.summary.is_empty() {
            out.push_str(&format!("  {}\n", post.summary));
        }
    }
    out
}

fn score_bar(score: u8) -> String {
    "#".repeat(usize::from(score.min(100) / 10))
}
