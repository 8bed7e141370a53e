use crate::render::{
    run_home, run_related_posts, run_skill_list, run_skill_show, HomeArgs, RelatedPostsArgs,
    SkillShowArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use skillfolio::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "skillfolio",
    about = "Serve and inspect the portfolio site's skill pages and blog listings",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the home page: site description, skill scores and latest posts
    Home(HomeArgs),
    /// Inspect skill categories and their pages
    Skills {
        #[command(subcommand)]
        command: SkillsCommand,
    },
    /// Query blog posts
    Posts {
        #[command(subcommand)]
        command: PostsCommand,
    },
}

#[derive(Subcommand, Debug)]
enum SkillsCommand {
    /// List every skill with its route key and score
    List,
    /// Print one skill page including its related posts
    Show(SkillShowArgs),
}

#[derive(Subcommand, Debug)]
enum PostsCommand {
    /// List posts related to a skill by keyword
    Related(RelatedPostsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured posts directory
    #[arg(long)]
    pub(crate) posts_dir: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Home(args) => run_home(args),
        Command::Skills {
            command: SkillsCommand::List,
        } => run_skill_list(),
        Command::Skills {
            command: SkillsCommand::Show(args),
        } => run_skill_show(args),
        Command::Posts {
            command: PostsCommand::Related(args),
        } => run_related_posts(args),
    }
}
