use clap::{Parser, ValueEnum};
use mapenc::error::Error;
use mapenc::intensity::ChannelSum;
use mapenc::literal::QuoteStyle;
use mapenc::pipeline::MagicPipeline;
use mapenc::render::render_preview;
use mapenc::sampler::CellSize;
use std::path::Path;

/// Command line arguments structure.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Image file to sample
    #[arg(required = true)]
    input: String,
    /// Encode only, or print the grid preview before the encoded string
    #[arg(short, long, value_enum, default_value_t = Action::Encode)]
    action: Action,
    /// Cell width in pixels
    #[arg(short = 'W', long, default_value_t = 10)]
    cell_width: usize,
    /// Cell height in pixels
    #[arg(short = 'H', long, default_value_t = 20)]
    cell_height: usize,
    /// Channels summed into a pixel's intensity
    #[arg(short, long, value_enum, default_value_t = Channels::Rgb)]
    channels: Channels,
    /// Literal syntax used to quote the encoded string
    #[arg(short, long, value_enum, default_value_t = Quote::Python)]
    quote: Quote,
    /// Print the encoded string and grid dimensions as JSON
    #[arg(short, long, default_value_t = false)]
    json: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[clap(rename_all = "lower")]
enum Action {
    Encode,
    Preview,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
#[clap(rename_all = "lower")]
enum Channels {
    Rgb,
    Rgba,
}

impl From<Channels> for ChannelSum {
    fn from(channels: Channels) -> Self {
        match channels {
            Channels::Rgb => ChannelSum::Rgb,
            Channels::Rgba => ChannelSum::Rgba,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
#[clap(rename_all = "lower")]
enum Quote {
    Python,
    Rust,
}

impl From<Quote> for QuoteStyle {
    fn from(quote: Quote) -> Self {
        match quote {
            Quote::Python => QuoteStyle::Python,
            Quote::Rust => QuoteStyle::Rust,
        }
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = Args::parse();

    let cell_size = CellSize::new(args.cell_width, args.cell_height)?;
    let pipeline = MagicPipeline::new(cell_size, args.channels.into());

    log::info!("sampling {} with {cell_size:?}", args.input);
    let (grid, magic) = pipeline.encode_path(Path::new(&args.input))?;

    if args.action == Action::Preview {
        println!("{}", render_preview(&grid));
    }

    if args.json {
        println!("{}", magic.to_json());
    } else {
        println!("{}", magic.quoted(args.quote.into()));
    }
    Ok(())
}
