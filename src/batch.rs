//! Parallel decoding of multiple independent GPMF buffers.

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::gps::GpsTrack;

/// Decode every buffer in `buffers` concurrently, one [`GpsTrack`] per
/// input, preserving input order in the output. Each buffer is decoded
/// independently: the core holds no shared mutable state, so this is a
/// pure data-parallel map.
pub fn parse_many(buffers: &[Vec<u8>]) -> Vec<GpsTrack> {
    let progress = ProgressBar::new(buffers.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{bar:40.cyan/blue} {pos}/{len} GPMF buffers decoded")
    {
        progress.set_style(style);
    }

    let tracks = buffers
        .par_iter()
        .map(|bytes| {
            let track = crate::parse(bytes);
            progress.inc(1);
            track
        })
        .collect();

    progress.finish_and_clear();
    tracks
}
