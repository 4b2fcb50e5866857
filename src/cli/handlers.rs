use std::time::Instant;

use tracing::{debug, info};

use crate::{
    core::{
        color::AnsiCode, config::RenderConfig, error::HistError, histogram::Histogram,
        input::read_text_from_path,
    },
    render::Renderer,
};

use super::parse::Cli;

const NO_PATH_HINT: &str =
    "Please provide a path to a text file as an argument, --help for more details";

pub fn histogram(a: &Cli) -> Result<(), HistError> {
    let Some(path) = a.file.as_deref() else {
        println!("{NO_PATH_HINT}");
        return Ok(());
    };

    // colour and config are checked before the input is read
    let color = a.color.as_deref().map(AnsiCode::from_name).transpose()?;
    let cfg = RenderConfig::builder()
        .rows(a.rows())
        .tick_stride(a.tick_stride())
        .color(color)
        .build()?;

    let t_ingest = Instant::now();
    let text = read_text_from_path(path)?;
    let dur_ingest = t_ingest.elapsed().as_micros();

    let t_bin = Instant::now();
    let hist = Histogram::count(&text);
    let dur_bin = t_bin.elapsed().as_micros();
    info!(
        path,
        bytes = text.len(),
        letters = hist.total(),
        peak = hist.peak(),
        "binned input"
    );

    let t_render = Instant::now();
    Renderer::stdout().render(&hist, &cfg)?;
    let dur_render = t_render.elapsed().as_micros();

    debug!("ingest: {dur_ingest} µs   bin: {dur_bin} µs   render: {dur_render} µs");
    Ok(())
}
