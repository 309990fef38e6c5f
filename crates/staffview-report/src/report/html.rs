//! HTML report assembly.
//!
//! A `Report` is an ordered list of sections, each holding chart, warning,
//! or text blocks. Rendering produces one self-contained page that pulls
//! plotly.js from the CDN and inlines every chart.
use std::path::Path;

use anyhow::{Context, Result};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use plotly::Plot;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

const STYLE: &str = "\
body { font-family: Georgia, serif; margin: 2em auto; max-width: 1100px; color: #1a1a1a; }\n\
h1 { font-size: 1.8em; }\n\
h2 { font-size: 1.3em; margin-top: 2em; }\n\
p.intro { color: #333; }\n\
p.caption { color: #666; font-size: 0.85em; }\n\
div.warning { background: #fff3cd; border: 1px solid #ffeeba; padding: 0.8em 1em; border-radius: 4px; }\n\
footer { margin-top: 3em; color: #999; font-size: 0.8em; }\n";

/// One content block inside a report section.
pub enum SectionBlock {
    Chart(Plot),
    Warning(String),
    Text(String),
}

/// A titled group of blocks, one per dashboard task.
pub struct ReportSection {
    pub heading: String,
    blocks: Vec<SectionBlock>,
}

impl ReportSection {
    pub fn new(heading: impl Into<String>) -> Self {
        ReportSection {
            heading: heading.into(),
            blocks: Vec::new(),
        }
    }

    pub fn add_chart(&mut self, plot: Plot) {
        self.blocks.push(SectionBlock::Chart(plot));
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.blocks.push(SectionBlock::Warning(message.into()));
    }

    pub fn add_text(&mut self, text: impl Into<String>) {
        self.blocks.push(SectionBlock::Text(text.into()));
    }

    pub fn blocks(&self) -> &[SectionBlock] {
        &self.blocks
    }
}

/// The assembled dashboard page.
pub struct Report {
    pub title: String,
    intro: Vec<String>,
    caption: Option<String>,
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn new(title: impl Into<String>) -> Self {
        Report {
            title: title.into(),
            intro: Vec::new(),
            caption: None,
            sections: Vec::new(),
        }
    }

    /// Add an introductory paragraph under the page title.
    pub fn add_intro(&mut self, line: impl Into<String>) {
        self.intro.push(line.into());
    }

    /// Set the small attribution line rendered below the intro.
    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = Some(caption.into());
    }

    pub fn add_section(&mut self, section: ReportSection) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    /// Render the report to a full HTML page.
    pub fn render(&self) -> String {
        let mut chart_index = 0usize;
        let mut rendered_sections: Vec<Markup> = Vec::new();
        for section in &self.sections {
            let mut blocks: Vec<Markup> = Vec::new();
            for block in section.blocks() {
                let markup = match block {
                    SectionBlock::Chart(plot) => {
                        chart_index += 1;
                        let div_id = format!("staffview-chart-{}", chart_index);
                        html! { div { (PreEscaped(plot.to_inline_html(Some(&div_id)))) } }
                    }
                    SectionBlock::Warning(message) => {
                        html! { div class="warning" { (message) } }
                    }
                    SectionBlock::Text(text) => html! { p { (text) } },
                };
                blocks.push(markup);
            }
            rendered_sections.push(html! {
                section {
                    h2 { (section.heading) }
                    @for block in blocks { (block) }
                }
            });
        }

        let generated = format!("Generated {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
        let markup: Markup = html! {
            (DOCTYPE)
            html lang="es" {
                head {
                    meta charset="utf-8";
                    title { (self.title) }
                    script src=(PLOTLY_CDN) {}
                    style { (PreEscaped(STYLE)) }
                }
                body {
                    h1 { (self.title) }
                    @for line in &self.intro {
                        p class="intro" { (line) }
                    }
                    @if let Some(caption) = &self.caption {
                        p class="caption" { (PreEscaped(caption.clone())) }
                    }
                    @for section in rendered_sections { (section) }
                    footer { (generated) }
                }
            }
        };
        markup.into_string()
    }

    /// Write the rendered page to `path`.
    pub fn write_html<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(&path, self.render())
            .with_context(|| format!("Failed to write report: {}", path.as_ref().display()))
    }
}
