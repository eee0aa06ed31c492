//! nood CLI - create, edit and inspect NOOD documents

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use nood::model::{DEFAULT_FONT_SIZE, DEFAULT_PAGE_HEIGHT, DEFAULT_PAGE_WIDTH};
use nood::{Document, Element, ImageElement, JsonFormat, SaveOptions, TextElement, TextStyle};

#[derive(Parser)]
#[command(name = "nood")]
#[command(version)]
#[command(about = "Create, edit and inspect NOOD documents", long_about = None)]
struct Cli {
    /// Gzip compression level used when saving (0-9)
    #[arg(
        long,
        global = true,
        env = "NOOD_COMPRESSION_LEVEL",
        default_value_t = nood::container::DEFAULT_COMPRESSION_LEVEL
    )]
    compression_level: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new document with one empty page
    New {
        /// Output NOOD file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page width
        #[arg(long, default_value_t = DEFAULT_PAGE_WIDTH)]
        width: f32,

        /// Page height
        #[arg(long, default_value_t = DEFAULT_PAGE_HEIGHT)]
        height: f32,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Append an empty page
    AddPage {
        /// NOOD file to edit
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page width
        #[arg(long, default_value_t = DEFAULT_PAGE_WIDTH)]
        width: f32,

        /// Page height
        #[arg(long, default_value_t = DEFAULT_PAGE_HEIGHT)]
        height: f32,
    },

    /// Add a text element to a page
    AddText {
        /// NOOD file to edit
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Text content
        #[arg(value_name = "TEXT")]
        text: String,

        #[command(flatten)]
        placement: Placement,

        /// Font size
        #[arg(long, default_value_t = DEFAULT_FONT_SIZE)]
        size: f32,

        /// Color as #RRGGBB, 0xRRGGBB or a decimal integer
        #[arg(long, default_value = "#000000", value_parser = parse_color)]
        color: i32,

        /// Bold text
        #[arg(long)]
        bold: bool,

        /// Italic text
        #[arg(long)]
        italic: bool,

        /// Underlined text
        #[arg(long)]
        underline: bool,

        /// Strikethrough text
        #[arg(long)]
        strikethrough: bool,
    },

    /// Embed an image file on a page
    AddImage {
        /// NOOD file to edit
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Image file whose bytes are embedded as-is
        #[arg(value_name = "IMAGE")]
        image: PathBuf,

        #[command(flatten)]
        placement: Placement,

        /// Display width
        #[arg(long, default_value_t = 0.0)]
        width: f32,

        /// Display height
        #[arg(long, default_value_t = 0.0)]
        height: f32,
    },

    /// Show document information
    Info {
        /// Input NOOD file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Print the text content
    Text {
        /// Input NOOD file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print a JSON outline of the document
    Json {
        /// Input NOOD file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Extract embedded images
    Extract {
        /// Input NOOD file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

/// Where to place a new element.
#[derive(Args)]
struct Placement {
    /// Page index (0-based)
    #[arg(long, default_value_t = 0)]
    page: usize,

    /// X position
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    x: f32,

    /// Y position
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    y: f32,
}

fn parse_color(s: &str) -> Result<i32, String> {
    let s = s.trim();
    let parsed = if let Some(hex) = s.strip_prefix('#').or_else(|| s.strip_prefix("0x")) {
        u32::from_str_radix(hex, 16).map(|v| v as i32)
    } else {
        s.parse::<i32>()
    };
    parsed.map_err(|e| format!("invalid color '{}': {}", s, e))
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let save_options = SaveOptions::new().with_compression_level(cli.compression_level);

    let result = match cli.command {
        Commands::New {
            file,
            width,
            height,
            force,
        } => cmd_new(&file, width, height, force, &save_options),
        Commands::AddPage {
            file,
            width,
            height,
        } => cmd_add_page(&file, width, height, &save_options),
        Commands::AddText {
            file,
            text,
            placement,
            size,
            color,
            bold,
            italic,
            underline,
            strikethrough,
        } => {
            let element = TextElement::new(text, placement.x, placement.y)
                .with_font_size(size)
                .with_color(color)
                .with_style(TextStyle {
                    bold,
                    italic,
                    underline,
                    strikethrough,
                });
            cmd_add_element(&file, placement.page, element.into(), &save_options)
        }
        Commands::AddImage {
            file,
            image,
            placement,
            width,
            height,
        } => cmd_add_image(&file, &image, &placement, width, height, &save_options),
        Commands::Info { input } => cmd_info(&input),
        Commands::Text { input, output } => cmd_text(&input, output.as_deref()),
        Commands::Json {
            input,
            output,
            compact,
        } => cmd_json(&input, output.as_deref(), compact),
        Commands::Extract { input, output } => cmd_extract(&input, output.as_deref()),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_new(
    file: &Path,
    width: f32,
    height: f32,
    force: bool,
    options: &SaveOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    if file.exists() && !force {
        return Err(format!("{} already exists (use --force to overwrite)", file.display()).into());
    }

    let mut doc = Document::new();
    doc.add_page(width, height);
    nood::save_with_options(&doc, file, options)?;

    println!("{} {}", "Created".green(), file.display());
    Ok(())
}

fn cmd_add_page(
    file: &Path,
    width: f32,
    height: f32,
    options: &SaveOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = nood::load(file)?;
    doc.add_page(width, height);
    nood::save_with_options(&doc, file, options)?;

    println!(
        "{} page {} ({} x {})",
        "Added".green(),
        doc.page_count() - 1,
        width,
        height
    );
    Ok(())
}

fn cmd_add_element(
    file: &Path,
    page: usize,
    element: Element,
    options: &SaveOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    // Load fully before touching the file; a failed load or bad index writes nothing
    let mut doc = nood::load(file)?;
    let kind = element.kind();
    doc.add_element(page, element)?;
    nood::save_with_options(&doc, file, options)?;

    println!("{} {} element to page {}", "Added".green(), kind, page);
    Ok(())
}

fn cmd_add_image(
    file: &Path,
    image: &Path,
    placement: &Placement,
    width: f32,
    height: f32,
    options: &SaveOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(image)?;
    let element = ImageElement::new(data, placement.x, placement.y).with_size(width, height);
    cmd_add_element(file, placement.page, element.into(), options)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let format = nood::detect_format_from_path(input)?;
    let doc = nood::load(input)?;
    let file_size = fs::metadata(input)?.len();

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);
    println!("{}: {} bytes", "Size".bold(), file_size);
    println!("{}: {}", "Pages".bold(), doc.page_count());

    println!();
    println!("{}", "Pages".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for (index, page) in doc.pages.iter().enumerate() {
        let texts = page.elements.iter().filter(|e| e.is_text()).count();
        let images = page.elements.len() - texts;
        println!(
            "{} {}: {} x {}, {} text, {} images",
            "Page".bold(),
            index,
            page.width,
            page.height,
            texts,
            images
        );
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let text = doc.plain_text();
    let image_bytes: usize = doc
        .pages
        .iter()
        .flat_map(|p| &p.elements)
        .filter(|e| e.is_image())
        .map(|e| e.data().len())
        .sum();

    println!("{}: {}", "Elements".bold(), doc.element_count());
    println!("{}: {}", "Words".bold(), text.split_whitespace().count());
    println!("{}: {}", "Characters".bold(), text.chars().count());
    println!("{}: {} bytes", "Image data".bold(), image_bytes);

    Ok(())
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = nood::load(input)?;
    let text = nood::render::to_text(&doc);

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = nood::load(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = nood::render::to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_extract(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = nood::load(input)?;

    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let mut count = 0;
    for (page_index, page) in doc.pages.iter().enumerate() {
        for (element_index, element) in page.elements.iter().enumerate() {
            if let Some(image) = element.as_image() {
                let filename = format!(
                    "page{}_image{}.{}",
                    page_index,
                    element_index,
                    image.extension()
                );
                fs::write(output_dir.join(&filename), &image.data)?;
                println!("{} {}", "Extracted".green(), filename);
                count += 1;
            }
        }
    }

    println!("\n{} {} images extracted", "Done!".green().bold(), count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "nood".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("NOOD document tool");
    println!();
    println!(
        "Container format: v{} (signature {})",
        nood::FORMAT_VERSION,
        String::from_utf8_lossy(nood::SIGNATURE)
    );
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#FF0000").unwrap(), 0xFF0000);
        assert_eq!(parse_color("0x00ff00").unwrap(), 0x00FF00);
        assert_eq!(parse_color("255").unwrap(), 255);
        assert_eq!(parse_color("-1").unwrap(), -1);
        assert!(parse_color("#GG0000").is_err());
    }

    #[test]
    fn test_cli_parses_add_text() {
        let cli = Cli::try_parse_from([
            "nood", "add-text", "doc.nood", "Hello", "--page", "1", "--x", "-5", "--y", "7.5",
            "--bold", "--color", "#336699",
        ])
        .unwrap();

        match cli.command {
            Commands::AddText {
                text,
                placement,
                color,
                bold,
                italic,
                ..
            } => {
                assert_eq!(text, "Hello");
                assert_eq!(placement.page, 1);
                assert_eq!((placement.x, placement.y), (-5.0, 7.5));
                assert_eq!(color, 0x336699);
                assert!(bold);
                assert!(!italic);
            }
            _ => panic!("expected add-text"),
        }
    }
}
