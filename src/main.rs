use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use svgtrim::{
    PreviewOptions, Session, Theme, TransformOptions, render_page, save_download,
};

#[derive(Parser)]
#[command(name = "svgtrim")]
#[command(about = "Strip attributes from SVG icons and preview them recolored", long_about = None)]
struct Cli {
    /// Input file (use - for stdin)
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Output file (use - for stdout)
    #[arg(short, long, default_value = "-")]
    output: PathBuf,

    /// Also save the output as optimized.svg in the current directory
    #[arg(long)]
    download: bool,

    /// Keep class attributes
    #[arg(long)]
    keep_classes: bool,

    /// Keep the root width attribute
    #[arg(long)]
    keep_width: bool,

    /// Keep the root height attribute
    #[arg(long)]
    keep_height: bool,

    /// Remove the root xmlns attribute
    #[arg(long)]
    remove_xmlns: bool,

    /// Preview color written into the root fill
    #[arg(short, long, default_value = "#000000")]
    color: String,

    /// Output the recolored markup instead of the plain one
    #[arg(long)]
    apply_color: bool,

    /// Preview sizes, comma separated
    #[arg(long, default_value = "16, 24, 32, 48")]
    sizes: String,

    /// Print the preview data URL instead of markup
    #[arg(long)]
    data_url: bool,

    /// Write an HTML preview page to this file
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Use the dark theme for the preview page
    #[arg(long)]
    dark: bool,

    /// Print size comparison
    #[arg(short, long)]
    stats: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Read input
    let input = if cli.input.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&cli.input)?
    };

    let transform_options = TransformOptions {
        remove_classes: !cli.keep_classes,
        remove_width: !cli.keep_width,
        remove_height: !cli.keep_height,
        remove_xmlns: cli.remove_xmlns,
    };
    let preview_options = PreviewOptions {
        preview_color: cli.color.clone(),
        apply_preview_color: cli.apply_color,
        output_sizes: cli.sizes.clone(),
    };

    let mut session = Session::new(transform_options, preview_options);
    session.set_input(input);

    let output = if cli.data_url {
        session.data_url()
    } else {
        session.final_output()
    };

    // Write output
    if cli.output.as_os_str() == "-" {
        io::stdout().write_all(output.as_bytes())?;
    } else {
        fs::write(&cli.output, output)?;
    }

    if cli.download {
        save_download(Path::new("."), session.final_output())?;
    }

    if let Some(ref path) = cli.preview {
        let page = render_page(
            session.data_url(),
            &session.layout(),
            Theme::from_prefers_dark(cli.dark),
        );
        fs::write(path, page)?;
    }

    // Print stats if requested
    if cli.stats {
        let input_len = session.input().len();
        let output_len = session.final_output().len();
        let saved = input_len.saturating_sub(output_len);
        let percent = if input_len > 0 {
            (saved as f64 / input_len as f64) * 100.0
        } else {
            0.0
        };
        eprintln!(
            "{} -> {} bytes ({:.1}% smaller)",
            input_len, output_len, percent
        );
    }

    Ok(())
}
