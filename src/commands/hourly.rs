use super::input::Source;
use super::{read_config, render, PipelineArgs};
use crate::libs::messages::Message;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct HourlyArgs {
    #[arg(help = "Duration records (JSON); reads stdin when omitted or '-'")]
    input: Option<PathBuf>,
    #[command(flatten)]
    pipeline: PipelineArgs,
}

pub fn cmd(args: HourlyArgs) -> Result<()> {
    let settings = args.pipeline.resolve(&read_config());
    let source = Source::from(args.input);
    let records = source.load()?;

    let header = Message::HourlyHeader {
        zone: settings.zone.describe(),
        unit: settings.unit.to_string(),
    };

    if args.pipeline.by_day {
        let days = settings
            .allocate_by_day(&records)
            .with_context(|| Message::AllocationFailed(source.to_string()))?;
        render::daily(&days, &settings, &args.pipeline, header)
    } else {
        let set = settings
            .allocate(&records)
            .with_context(|| Message::AllocationFailed(source.to_string()))?;
        render::hourly(&set, &settings, &args.pipeline, header)
    }
}
