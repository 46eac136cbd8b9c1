use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use badgegen::{export, Badge, BADGE_SIZE, ICO_SIZE};

#[derive(Parser, Debug)]
#[command(about = "Render the project badge icon and export PNG + ICO", version)]
struct Args {
    #[arg(long, default_value = "assets/icons/badge.png")]
    out_png: PathBuf,
    #[arg(long, default_value = "assets/icons/badge.ico")]
    out_ico: PathBuf,
    /// Letter drawn at the center of the badge.
    #[arg(long, default_value_t = 'P')]
    letter: char,
    /// Font files to try before the stock serif fallback chain (repeatable).
    #[arg(long)]
    font: Vec<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut badge = Badge::default();
    badge.letter = args.letter;
    if !args.font.is_empty() {
        let mut paths = args.font;
        paths.append(&mut badge.font_paths);
        badge.font_paths = paths;
    }

    let img = badge.render();
    export::write_png(&img, &args.out_png)?;
    println!("Wrote {} ({}x{})", args.out_png.display(), BADGE_SIZE, BADGE_SIZE);
    export::write_ico(&img, &args.out_ico)?;
    println!("Wrote {} ({}x{})", args.out_ico.display(), ICO_SIZE, ICO_SIZE);
    Ok(())
}
