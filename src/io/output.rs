use crate::dispatch::{format_score, ActionStatus};
use crate::extraction::Section;
use crate::scorer::RunSummary;
use crate::scoring::ScoreOutcome;
use clap::ValueEnum;
use colored::*;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

pub trait OutputWriter {
    fn write_summary(&mut self, summary: &RunSummary) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_summary(&mut self, summary: &RunSummary) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(summary)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_summary(&mut self, summary: &RunSummary) -> anyhow::Result<()> {
        writeln!(self.writer, "# Severity Report for Issue {}", summary.issue_id)?;
        writeln!(self.writer)?;
        self.write_answers(summary)?;
        self.write_outcome(summary)?;
        self.write_actions(summary)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_answers(&mut self, summary: &RunSummary) -> anyhow::Result<()> {
        let weights = match &summary.outcome {
            ScoreOutcome::Scored(result) => result.weights,
            ScoreOutcome::Skipped { weights, .. } => *weights,
        };

        writeln!(self.writer, "| Section | Answer | Weight |")?;
        writeln!(self.writer, "|---------|--------|--------|")?;
        for section in Section::ALL {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                section.title(),
                summary.submission.answer(section).as_str(),
                format_score(weights.get(section))
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_outcome(&mut self, summary: &RunSummary) -> anyhow::Result<()> {
        match &summary.outcome {
            ScoreOutcome::Scored(result) => {
                writeln!(
                    self.writer,
                    "**Score:** {} (threshold {}, policy `{}`)",
                    format_score(result.final_score),
                    format_score(summary.threshold),
                    summary.urgency_policy
                )?;
                writeln!(self.writer)?;
                writeln!(self.writer, "- Urgent: {}", yes_no(result.is_urgent))?;
                writeln!(
                    self.writer,
                    "- Below threshold: {}",
                    yes_no(result.should_unlabel)
                )?;
            }
            ScoreOutcome::Skipped { missing, .. } => {
                writeln!(self.writer, "**Not scored.** Missing mandatory answers:")?;
                writeln!(self.writer)?;
                for section in missing {
                    writeln!(self.writer, "- {}", section.title())?;
                }
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_actions(&mut self, summary: &RunSummary) -> anyhow::Result<()> {
        if summary.actions.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Actions")?;
        writeln!(self.writer)?;
        for report in &summary.actions {
            match &report.status {
                ActionStatus::Applied => writeln!(self.writer, "- ✅ {}", report.action)?,
                ActionStatus::Failed(error) => {
                    writeln!(self.writer, "- ❌ {}: {}", report.action, error)?
                }
            }
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_summary(&mut self, summary: &RunSummary) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{} {}",
            "Issue".bold(),
            summary.issue_id.bold().cyan()
        )?;

        match &summary.outcome {
            ScoreOutcome::Scored(result) => {
                let score = format_score(result.final_score);
                let score = if result.should_unlabel {
                    score.green()
                } else {
                    score.red()
                };
                writeln!(
                    self.writer,
                    "  Score: {} (threshold {})",
                    score.bold(),
                    format_score(summary.threshold)
                )?;
                if result.is_urgent {
                    writeln!(self.writer, "  {}", "URGENT".red().bold())?;
                }
            }
            ScoreOutcome::Skipped { missing, .. } => {
                let names: Vec<&str> = missing.iter().map(|s| s.title()).collect();
                writeln!(
                    self.writer,
                    "  {} missing: {}",
                    "Skipped,".yellow(),
                    names.join(", ")
                )?;
            }
        }

        for report in &summary.actions {
            match &report.status {
                ActionStatus::Applied => {
                    writeln!(self.writer, "  {} {}", "✓".green(), report.action)?
                }
                ActionStatus::Failed(error) => writeln!(
                    self.writer,
                    "  {} {}: {}",
                    "✗".red(),
                    report.action,
                    error.dimmed()
                )?,
            }
        }
        Ok(())
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(std::io::stdout())),
    }
}
