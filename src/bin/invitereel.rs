use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "invitereel", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve every slot and write the renderable scene list as JSON.
    Compile(CompileArgs),
    /// Compile and print the start frame of each scene.
    Timeline(InputArgs),
    /// Run the scene schema registry on a single resolved item.
    Validate(ValidateArgs),
    /// Print the memoization fingerprint of a template + asset pair.
    Fingerprint(InputArgs),
}

#[derive(Parser, Debug)]
struct InputArgs {
    /// Template JSON.
    #[arg(long)]
    template: PathBuf,

    /// User assets JSON (`{"images": {...}, "texts": {...}}`). Empty pool when omitted.
    #[arg(long)]
    assets: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CompileArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Include the composed timeline in the output.
    #[arg(long)]
    timeline: bool,

    /// Exit with an error if any slot fell back to a placeholder.
    #[arg(long)]
    deny_placeholders: bool,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Candidate item JSON.
    #[arg(long)]
    item: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Compile(args) => cmd_compile(args),
        Command::Timeline(args) => cmd_timeline(args),
        Command::Validate(args) => cmd_validate(args),
        Command::Fingerprint(args) => cmd_fingerprint(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_inputs(args: &InputArgs) -> anyhow::Result<(invitereel::Template, invitereel::UserAssets)> {
    let template = invitereel::Template::from_path(&args.template)
        .with_context(|| format!("load template '{}'", args.template.display()))?;
    let assets = match &args.assets {
        Some(path) => invitereel::UserAssets::from_path(path)
            .with_context(|| format!("load assets '{}'", path.display()))?,
        None => invitereel::UserAssets::new(),
    };
    Ok((template, assets))
}

fn cmd_compile(args: CompileArgs) -> anyhow::Result<()> {
    let (template, assets) = read_inputs(&args.input)?;
    let compiled = invitereel::TemplateCompiler::default().compile_video(&template, &assets)?;

    let report = &compiled.report;
    if !report.is_complete() {
        eprintln!(
            "{} slot(s) used placeholders ({} media, {} text); add more assets",
            report.placeholder_count(),
            report.media_placeholder_count(),
            report.text_placeholder_count()
        );
        if args.deny_placeholders {
            anyhow::bail!("placeholders denied");
        }
    }

    let doc = if args.timeline {
        serde_json::json!({
            "video": &compiled,
            "timeline": compiled.timeline(),
        })
    } else {
        serde_json::to_value(&compiled).context("serialize compiled video")?
    };

    match &args.out {
        Some(out) => {
            write_json(out, &doc)?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, &doc).context("write JSON to stdout")?;
            writeln!(w)?;
        }
    }
    Ok(())
}

fn cmd_timeline(args: InputArgs) -> anyhow::Result<()> {
    let (template, assets) = read_inputs(&args)?;
    let compiled = invitereel::TemplateCompiler::default().compile_video(&template, &assets)?;
    let timeline = compiled.timeline();

    for entry in &timeline.entries {
        let range = entry.range();
        println!(
            "{:>4}  {:<12}  {:>6} .. {:<6}",
            entry.index,
            entry.item.kind(),
            range.start.0,
            range.end.0
        );
    }
    println!(
        "total: {} frames ({:.2}s @ {:.3} fps)",
        timeline.total_duration,
        timeline.duration_secs(compiled.fps),
        compiled.fps.as_f64()
    );
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let f = File::open(&args.item)
        .with_context(|| format!("open item '{}'", args.item.display()))?;
    let candidate: serde_json::Value =
        serde_json::from_reader(BufReader::new(f)).context("parse item JSON")?;
    let item = invitereel::validate_item(&candidate)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&item).context("serialize item")?
    );
    Ok(())
}

fn cmd_fingerprint(args: InputArgs) -> anyhow::Result<()> {
    let (template, assets) = read_inputs(&args)?;
    println!("{}", invitereel::fingerprint(&template, &assets)?);
    Ok(())
}

fn write_json(path: &Path, doc: &serde_json::Value) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, doc)
        .with_context(|| format!("write '{}'", path.display()))?;
    w.flush()?;
    Ok(())
}
