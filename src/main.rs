//! markpass CLI - Markdown to HTML through an ordered pass pipeline

use clap::Parser;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "markpass")]
#[command(about = "Convert Markdown to HTML")]
#[command(version)]
struct Cli {
    /// Markdown file to read; stdin when absent or `-`
    file: Option<PathBuf>,

    /// Render pipe tables
    #[arg(long)]
    tables: bool,

    /// Render horizontal rules
    #[arg(long)]
    hr: bool,

    /// Suffix repeated heading ids
    #[arg(long)]
    unique_ids: bool,

    /// Copy inline code verbatim instead of escaping it
    #[arg(long)]
    raw_inline_code: bool,
}

impl Cli {
    fn options(&self) -> markpass::Options {
        markpass::Options {
            escape_inline_code: !self.raw_inline_code,
            tables: self.tables,
            horizontal_rules: self.hr,
            unique_heading_ids: self.unique_ids,
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let input = match &cli.file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    log::debug!("read {} bytes of markdown", input.len());

    let mut html = markpass::to_html_with_options(&input, &cli.options());
    html.push('\n');
    io::stdout().write_all(html.as_bytes())?;

    Ok(())
}
