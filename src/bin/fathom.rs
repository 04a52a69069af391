use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fathom", version, about = "Climate-fisheries data service")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the HTTP API.
    Serve(ServeArgs),
    /// Print a zone's statistics for one period as JSON.
    Zone(ZoneArgs),
    /// Print the pixel under a coordinate as JSON.
    Pixel(PixelArgs),
    /// Write an indicator's legend swatches as a PNG.
    Colorbar(ColorbarArgs),
}

#[derive(Args, Debug)]
struct DataDirArg {
    /// Data tree root. Probed from the working directory when omitted.
    #[arg(long, env = "DATA_DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ServeArgs {
    #[command(flatten)]
    data: DataDirArg,

    /// Static assets root.
    #[arg(long, env = "ASSETS_DIR", default_value = fathom::DEFAULT_ASSETS_DIR)]
    assets_dir: PathBuf,

    /// Listen address.
    #[arg(long, env = "BIND", default_value = "0.0.0.0:3000")]
    bind: SocketAddr,

    /// Recipient shown in contact form previews.
    #[arg(long, env = "CONTACT_EMAIL", default_value = fathom::DEFAULT_CONTACT_EMAIL)]
    contact_email: String,
}

#[derive(Args, Debug)]
struct ZoneArgs {
    #[command(flatten)]
    data: DataDirArg,

    /// Zone model (FAO, LME, EEZ, BGCP, Grid).
    #[arg(long)]
    model: String,
    /// Indicator data name.
    #[arg(long)]
    indicator: String,
    /// Scenario data name (26, 85).
    #[arg(long)]
    climate: String,
    /// Zone identifier.
    #[arg(long)]
    id: String,
    /// Period data name (present, mid, end).
    #[arg(long)]
    period: String,
}

#[derive(Args, Debug)]
struct PixelArgs {
    #[command(flatten)]
    data: DataDirArg,

    /// Indicator data name.
    #[arg(long)]
    indicator: String,
    /// Scenario data name.
    #[arg(long)]
    climate: String,
    /// Period data name.
    #[arg(long)]
    period: String,
    /// Latitude in degrees.
    #[arg(long, allow_hyphen_values = true)]
    lat: String,
    /// Longitude in degrees.
    #[arg(long, allow_hyphen_values = true)]
    lng: String,
    /// Print the aggregated cell summary instead of the raw entry.
    #[arg(long, default_value_t = false)]
    summary: bool,
}

#[derive(Args, Debug)]
struct ColorbarArgs {
    /// Indicator data name or id.
    #[arg(long)]
    indicator: String,
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Zone(args) => cmd_zone(args).await,
        Command::Pixel(args) => cmd_pixel(args).await,
        Command::Colorbar(args) => cmd_colorbar(args),
    }
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = fathom::ServerConfig {
        data_dir: args.data.data_dir,
        assets_dir: args.assets_dir,
        bind: args.bind,
        contact_email: args.contact_email,
    };
    fathom::serve(config).await?;
    Ok(())
}

fn open_store(arg: &DataDirArg) -> anyhow::Result<fathom::DataStore> {
    let cwd = std::env::current_dir().context("resolve working directory")?;
    let root = fathom::resolve_data_dir(arg.data_dir.as_deref(), &cwd);
    tracing::debug!(root = %root.display(), "data directory");
    Ok(fathom::DataStore::new(root))
}

async fn cmd_zone(args: ZoneArgs) -> anyhow::Result<()> {
    let store = open_store(&args.data)?;
    let params = fathom::ZoneQuery {
        model: Some(args.model),
        indicator: Some(args.indicator),
        climate: Some(args.climate),
        id: Some(args.id),
        period: Some(args.period),
    }
    .validate()?;

    let zone = store.zone(&params).await?;
    println!("{}", serde_json::to_string_pretty(&zone)?);
    Ok(())
}

async fn cmd_pixel(args: PixelArgs) -> anyhow::Result<()> {
    let store = open_store(&args.data)?;
    let params = fathom::PixelQuery {
        indicator: Some(args.indicator),
        climate: Some(args.climate),
        period: Some(args.period),
        latitude: Some(args.lat),
        longitude: Some(args.lng),
    }
    .validate()?;

    let cell = store.pixel(&params).await?;
    if args.summary {
        let catalog = fathom::Catalog::builtin();
        let indicator = catalog
            .indicator(&params.layer.indicator)
            .with_context(|| format!("unknown indicator '{}'", params.layer.indicator))?;
        let summary =
            fathom::CellSummary::from_pixel(&cell, indicator, params.latitude, params.longitude);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&cell)?);
    }
    Ok(())
}

fn cmd_colorbar(args: ColorbarArgs) -> anyhow::Result<()> {
    let catalog = fathom::Catalog::builtin();
    let indicator = catalog
        .indicator(&args.indicator)
        .with_context(|| format!("unknown indicator '{}'", args.indicator))?;
    let png = fathom::render_colorbar_png(&indicator.colors)?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    write_file(&args.out, &png)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("write png '{}'", path.display()))
}
