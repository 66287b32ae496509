use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use nof1_burden::cli::{Cli, ColumnArgs, Commands, RunArgs, ValidateArgs};
use nof1_burden::ctx::Ctx;
use nof1_burden::input::InputSource;
use nof1_burden::io;
use nof1_burden::io::measurements::ColumnNames;
use nof1_burden::pipeline::Pipeline;
use nof1_burden::scores::RiskParams;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run(args)?,
        Commands::Validate(args) => validate(args)?,
    }

    Ok(())
}

fn run(args: RunArgs) -> Result<()> {
    let horizons = args.requested_horizons();
    let input = InputSource::from_args(args.input, args.demo)
        .context("exactly one of --input or --demo is required")?;

    let mut ctx = Ctx::new(
        input,
        args.out,
        horizons,
        args.json,
        args.csv,
        args.tsv,
        env!("CARGO_PKG_VERSION"),
    );
    ctx.columns = column_names(args.columns);
    ctx.risk_params = RiskParams {
        scale: args.risk_scale,
        midpoint: args.risk_midpoint,
        ..RiskParams::default()
    };

    Pipeline::analysis().run(&mut ctx)?;

    print_summary(&ctx)
}

fn validate(args: ValidateArgs) -> Result<()> {
    let mut ctx = Ctx::new(
        InputSource::Csv(args.input),
        PathBuf::from("."),
        Vec::new(),
        false,
        false,
        false,
        env!("CARGO_PKG_VERSION"),
    );
    ctx.columns = column_names(args.columns);

    Pipeline::validation().run(&mut ctx)?;

    print_validate_summary(&ctx)
}

fn column_names(args: ColumnArgs) -> ColumnNames {
    ColumnNames {
        date: args.date_column,
        value: args.value_column,
    }
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    print_warnings(ctx);
    Ok(())
}

fn print_validate_summary(ctx: &Ctx) -> Result<()> {
    let series = ctx.series()?;
    println!("nof1-burden validate ok");
    println!("measurements: {}", ctx.measurements.len());
    println!("points: {}", series.len());
    println!("dropped: {}", series.dropped());
    println!("origin: {}", series.origin());
    println!("distinct_days: {}", series.distinct_offsets());
    if series.distinct_offsets() < 2 {
        println!("fit: not enough data to predict");
    }
    print_warnings(ctx);
    Ok(())
}

fn print_warnings(ctx: &Ctx) {
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}
