use anyhow::{bail, Context, Result};
use clap::Parser;
use copy_tui::app::AppState;
use copy_tui::cli::{document_path, Cli, Commands};
use copy_tui::clipboard::SystemClipboard;
use copy_tui::config::Config;
use copy_tui::controller::{Activation, CopyButtonController, CopyWidget, Outcome};
use copy_tui::document::markers::COPYABLE_TEXT_BUTTON;
use copy_tui::document::{self, load_document};
use copy_tui::logging;
use copy_tui::ui::{self, theme::Theme};
use copy_tui::utils::paths::{ensure_directories_exist, get_log_path};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

// How long a one-shot copy waits for a clipboard manager to take the text.
const CLIPBOARD_HANDOFF: Duration = Duration::from_millis(250);

#[derive(Debug, Serialize)]
struct BlockSummary {
    index: usize,
    caption: Option<String>,
    payload: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Some(Commands::Show { file, json }) => {
            handle_show(&document_path(file), json)?;
        }
        Some(Commands::Copy { index, file }) => {
            handle_copy(&document_path(file), index, &config)?;
        }
        None => {
            handle_tui(document_path(cli.file), &config)?;
        }
    }

    Ok(())
}

fn summarize(path: &Path) -> Result<Vec<BlockSummary>> {
    let doc = load_document(path)?;

    Ok(doc
        .query_all(doc.root(), COPYABLE_TEXT_BUTTON)
        .into_iter()
        .filter_map(|trigger| CopyWidget::locate(&doc, trigger))
        .enumerate()
        .map(|(idx, widget)| BlockSummary {
            index: idx + 1,
            caption: widget.caption(&doc).map(str::to_string),
            payload: widget.payload(&doc).to_string(),
        })
        .collect())
}

fn handle_show(path: &Path, json: bool) -> Result<()> {
    let blocks = summarize(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&blocks)?);
        return Ok(());
    }

    if blocks.is_empty() {
        println!("No code blocks in {}", path.display());
        return Ok(());
    }

    println!("\n📋 {}\n", path.display());

    for block in &blocks {
        println!("{}. {}", block.index, block.caption.as_deref().unwrap_or(""));
        for line in block.payload.lines() {
            println!("   {line}");
        }
    }

    println!();

    Ok(())
}

fn handle_copy(path: &Path, index: usize, config: &Config) -> Result<()> {
    logging::init_stderr(&config.log_level)?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(copy_block(path, index, config))
}

async fn copy_block(path: &Path, index: usize, config: &Config) -> Result<()> {
    let doc = document::share(load_document(path)?);
    let clipboard = SystemClipboard::new().with_handoff(CLIPBOARD_HANDOFF);
    let controller = CopyButtonController::attach(doc, clipboard, config.reset_delay());

    let Some(widget) = index.checked_sub(1).and_then(|i| controller.widgets().get(i)) else {
        bail!(
            "No block {} in {} ({} found)",
            index,
            path.display(),
            controller.widgets().len()
        );
    };

    let handle = match controller.activate(widget.trigger) {
        Activation::Started(handle) => handle,
        Activation::Ignored | Activation::Unwired => bail!("Block {index} is not copyable"),
    };

    match handle.await? {
        Outcome::Copied => {
            println!("✓ Copied block {index} to the clipboard");
            Ok(())
        }
        Outcome::Failed(err) => bail!("Failed to copy block {index}: {err}"),
    }
}

fn handle_tui(path: PathBuf, config: &Config) -> Result<()> {
    ensure_directories_exist()?;
    logging::init_file(&get_log_path()?, &config.log_level)?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let _enter = runtime.enter();

    let doc = document::share(load_document(&path)?);
    let controller = CopyButtonController::attach(doc, SystemClipboard::new(), config.reset_delay());
    info!(
        path = %path.display(),
        blocks = controller.widgets().len(),
        "Opened document"
    );

    let state = AppState::new(controller, Theme::from_config(config), path);
    ui::run_tui(state)
}
