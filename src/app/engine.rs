use crate::config::toml_config::OutputFormat;
use crate::domain::model::Report;
use crate::domain::ports::Exercise;
use crate::utils::error::Result;
use crate::utils::input::Prompter;
use std::io::{BufRead, Write};

pub struct DrillEngine<E: Exercise> {
    exercise: E,
}

impl<E: Exercise> DrillEngine<E> {
    pub fn new(exercise: E) -> Self {
        Self { exercise }
    }

    pub fn run<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<Report> {
        let name = self.exercise.name();
        tracing::info!("Starting exercise {}", name);

        tracing::debug!("Gathering input...");
        let input = self.exercise.gather(prompter)?;

        tracing::debug!("Solving...");
        let report = self.exercise.solve(input)?;
        tracing::debug!("{} produced {} output lines", name, report.lines.len());

        Ok(report)
    }
}

pub fn render<W: Write>(report: &Report, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => out.write_all(report.text().as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            out.write_all(b"\n")?;
        }
    }
    out.flush()?;
    Ok(())
}
