//! Before/After/timing output in text or JSON.

use std::fmt::Display;

use pmerge_core::bounds::{ford_johnson_bound, information_bound};
use pmerge_core::Element;
use serde::Serialize;

use crate::colors::Palette;
use crate::timing::{Measurement, TimeUnit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Reference comparison counts for the input length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub information: u64,
    pub ford_johnson: u64,
}

impl Bounds {
    pub fn for_len(n: usize) -> Self {
        Bounds {
            information: information_bound(n),
            ford_johnson: ford_johnson_bound(n),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub before: Vec<String>,
    pub after: Vec<Element>,
    pub measurements: Vec<Measurement>,
    pub bounds: Bounds,
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub limit: Option<usize>,
    pub precision: usize,
    pub unit: TimeUnit,
    pub stats: bool,
    pub palette: Palette,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            limit: None,
            precision: 6,
            unit: TimeUnit::S,
            stats: false,
            palette: Palette::plain(),
        }
    }
}

impl Report {
    pub fn render_text(&self, opts: &RenderOptions) -> String {
        let p = &opts.palette;
        let mut out = String::new();
        out.push_str(&format!(
            "{}\t{}\n",
            p.bold("Before:"),
            join_limited(&self.before, opts.limit)
        ));
        out.push_str(&format!(
            "{}\t{}\n",
            p.bold("After:"),
            join_limited(&self.after, opts.limit)
        ));
        for m in &self.measurements {
            out.push_str(&format!(
                "Time to process a range of {} elements with {} : {}\n",
                m.elements,
                p.cyan(m.container),
                p.green(&opts.unit.format(m.elapsed, opts.precision))
            ));
        }
        if opts.stats {
            for m in &self.measurements {
                out.push_str(&p.gray(&format!(
                    "  {}: {} comparisons, {} insertions, depth {}",
                    m.container, m.stats.comparisons, m.stats.insertions, m.stats.depth
                )));
                out.push('\n');
            }
            out.push_str(&p.gray(&format!(
                "  bounds: information {}, ford-johnson worst case {}",
                self.bounds.information, self.bounds.ford_johnson
            )));
            out.push('\n');
        }
        out
    }

    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Space-separated items, cut after `limit` with a trailing `[...]`.
fn join_limited<T: Display>(items: &[T], limit: Option<usize>) -> String {
    let shown = limit.unwrap_or(items.len()).min(items.len());
    let mut parts: Vec<String> = items[..shown].iter().map(|i| i.to_string()).collect();
    if shown < items.len() {
        parts.push("[...]".to_string());
    }
    parts.join(" ")
}
