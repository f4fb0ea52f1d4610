use crate::utils::error::Result;
use std::ffi::OsString;
use std::io::Write;

pub const HEADER: &str = "Provided arguments:";
pub const NO_ARGUMENTS: &str = "No arguments found";

/// Echoes positional arguments, one numbered line each.
#[derive(Debug, Clone, Default)]
pub struct ArgumentReporter {
    args: Vec<String>,
}

impl ArgumentReporter {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a reporter from raw OS arguments, excluding the program name.
    pub fn from_os_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        Self {
            args: args
                .into_iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
        }
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn report<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", HEADER)?;

        if self.args.is_empty() {
            writeln!(out, "{}", NO_ARGUMENTS)?;
        } else {
            for (index, arg) in self.args.iter().enumerate() {
                writeln!(out, "{} => {}", index + 1, arg)?;
            }
        }

        out.flush()?;
        tracing::debug!("Reported {} argument(s)", self.args.len());
        Ok(())
    }
}
