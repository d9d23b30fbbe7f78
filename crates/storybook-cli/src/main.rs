mod logger;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use storybook_archive::{Parent, StoryArchive};
use storybook_layout::LayoutOptions;

#[derive(Parser)]
#[command(name = "lsb", about = "Life story book CLI", version)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out a parent's stories as book pages
    Paginate {
        /// Story archive (JSON)
        #[arg(short, long)]
        archive: PathBuf,

        #[arg(short, long, value_enum)]
        parent: ParentArg,

        /// Layout options file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write page models to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show statistics only, don't write pages
        #[arg(long)]
        stats_only: bool,
    },

    /// Record an answer to a chapter question
    Answer {
        #[arg(short, long)]
        archive: PathBuf,

        #[arg(short, long, value_enum)]
        parent: ParentArg,

        /// Chapter id, e.g. "childhood"
        #[arg(long)]
        chapter: String,

        /// Question index within the chapter (from 0)
        #[arg(long)]
        index: usize,

        /// Question text
        #[arg(long)]
        question: String,

        /// Answer text
        #[arg(long)]
        text: String,

        /// Photo reference - can specify multiple
        #[arg(long)]
        photo: Vec<String>,
    },

    /// Set the photo shown with a chapter
    ChapterPhoto {
        #[arg(short, long)]
        archive: PathBuf,

        #[arg(short, long, value_enum)]
        parent: ParentArg,

        #[arg(long)]
        chapter: String,

        #[arg(long)]
        photo: String,
    },

    /// Mark a chapter as complete
    Complete {
        #[arg(short, long)]
        archive: PathBuf,

        #[arg(short, long, value_enum)]
        parent: ParentArg,

        #[arg(long)]
        chapter: String,
    },

    /// Show chapter completion
    Progress {
        #[arg(short, long)]
        archive: PathBuf,

        #[arg(short, long, value_enum)]
        parent: ParentArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ParentArg {
    Mom,
    Dad,
}

impl From<ParentArg> for Parent {
    fn from(arg: ParentArg) -> Self {
        match arg {
            ParentArg::Mom => Self::Mom,
            ParentArg::Dad => Self::Dad,
        }
    }
}

async fn load_options(config: Option<PathBuf>) -> Result<LayoutOptions> {
    match config {
        Some(path) => LayoutOptions::load(&path)
            .await
            .with_context(|| format!("Failed to load layout options from {}", path.display())),
        None => Ok(LayoutOptions::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::CliLogger::new(cli.verbose).init()?;

    match cli.command {
        Commands::Paginate {
            archive,
            parent,
            config,
            output,
            stats_only,
        } => {
            let parent = Parent::from(parent);
            let options = load_options(config).await?;
            let archive = StoryArchive::load(&archive).await?;

            let stories = archive.collect_stories(parent);
            let chapter_photos = archive.chapter_photos(parent);
            let pages = storybook_layout::generate_book_pages_with_chapters(&stories, &chapter_photos, &options);

            let stats = storybook_layout::calculate_statistics(&pages);
            println!("Book Statistics ({}):", parent);
            println!("  Stories: {}", stories.len());
            println!("  Total pages: {}", stats.total_pages);
            println!("  Chapters: {}", stats.chapters);
            println!("  Single-story pages: {}", stats.single_story_pages);
            println!("  Multi-story pages: {}", stats.multi_story_pages);
            println!("  Continuation pages: {}", stats.continuation_pages);
            println!("  Photo pages: {}", stats.photo_pages);
            for (template, count) in &stats.template_usage {
                println!("  {}: {}", template, count);
            }

            if stats_only {
                return Ok(());
            }

            if let Some(output) = output {
                let json = serde_json::to_string_pretty(&pages)?;
                tokio::fs::write(&output, json)
                    .await
                    .with_context(|| format!("Failed to write {}", output.display()))?;
                println!("Paginated {} pages → {}", pages.len(), output.display());
            }
        }

        Commands::Answer {
            archive: path,
            parent,
            chapter,
            index,
            question,
            text,
            photo,
        } => {
            let mut archive = StoryArchive::load(&path).await?;
            archive.save_answer(parent.into(), &chapter, index, question, text, photo)?;
            archive.save(&path).await?;
            println!("Saved answer {}-{} → {}", chapter, index, path.display());
        }

        Commands::ChapterPhoto {
            archive: path,
            parent,
            chapter,
            photo,
        } => {
            let mut archive = StoryArchive::load(&path).await?;
            archive.set_chapter_photo(parent.into(), &chapter, photo)?;
            archive.save(&path).await?;
            println!("Set photo for chapter {}", chapter);
        }

        Commands::Complete {
            archive: path,
            parent,
            chapter,
        } => {
            let mut archive = StoryArchive::load(&path).await?;
            archive.mark_chapter_complete(parent.into(), &chapter)?;
            archive.save(&path).await?;
            println!("Marked chapter {} complete", chapter);
        }

        Commands::Progress { archive, parent } => {
            let parent = Parent::from(parent);
            let archive = StoryArchive::load(&archive).await?;
            let stats = archive.completion_stats(parent);

            println!("Progress ({}):", parent);
            for chapter in &storybook_archive::CHAPTERS {
                let status = if archive.is_chapter_complete(parent, chapter) {
                    "complete"
                } else if archive.is_chapter_started(parent, chapter.id) {
                    "started"
                } else {
                    "-"
                };
                println!("  {:<40} {}", chapter.title, status);
            }
            println!(
                "  {}/{} chapters complete ({}%)",
                stats.completed_chapters, stats.total_chapters, stats.percent_complete
            );
            if stats.is_fully_complete {
                println!("  Book is ready to print");
            }
        }
    }

    Ok(())
}
