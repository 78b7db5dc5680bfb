use super::input::Source;
use super::{read_config, render, PipelineArgs};
use crate::libs::aggregator::{aggregate, aggregate_daily};
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct TeamArgs {
    #[arg(required = true, help = "One duration records file (JSON) per team member")]
    inputs: Vec<PathBuf>,
    #[command(flatten)]
    pipeline: PipelineArgs,
}

pub fn cmd(args: TeamArgs) -> Result<()> {
    if args.inputs.is_empty() {
        return Err(msg_error_anyhow!(Message::NoInputFiles));
    }

    let settings = args.pipeline.resolve(&read_config());
    let sources: Vec<Source> = args.inputs.into_iter().map(|path| Source::from(Some(path))).collect();
    let header = Message::TeamHeader(sources.len());

    if args.pipeline.by_day {
        let mut members = Vec::with_capacity(sources.len());
        for source in &sources {
            let records = source.load()?;
            let days = settings
                .allocate_by_day(&records)
                .with_context(|| Message::AllocationFailed(source.to_string()))?;
            members.push(days);
        }
        render::daily(&aggregate_daily(&members), &settings, &args.pipeline, header)
    } else {
        let mut members = Vec::with_capacity(sources.len());
        for source in &sources {
            let records = source.load()?;
            let set = settings
                .allocate(&records)
                .with_context(|| Message::AllocationFailed(source.to_string()))?;
            members.push(set);
        }
        render::hourly(&aggregate(&members), &settings, &args.pipeline, header)
    }
}
