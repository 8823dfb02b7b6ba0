use clap::ValueEnum;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One user agent per line
    Txt,
    /// Pretty-printed JSON array
    Json,
    /// One single-field CSV record per line
    Csv,
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write CSV record: {0}")]
    Csv(#[from] csv::Error),
}

pub fn write_user_agents<W: Write>(
    out: &mut W,
    user_agents: &[String],
    format: OutputFormat,
) -> Result<(), OutputError> {
    match format {
        OutputFormat::Txt => {
            for ua in user_agents {
                writeln!(out, "{}", ua)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, user_agents)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::WriterBuilder::new()
                .terminator(csv::Terminator::Any(b'\n'))
                .from_writer(&mut *out);
            for ua in user_agents {
                writer.write_record([ua])?;
            }
            writer.flush()?;
        }
    }

    out.flush()?;
    Ok(())
}
