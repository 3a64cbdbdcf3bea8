use std::fmt::Display;

use crate::constants::ERROR_STYLE;
use crate::constants::HELP_STYLE;

/// The error context structure, provides an explanation and help.
///
/// The first element is the context of the error, the second is the help
/// message displayed to the user. Either may be empty, in which case it is
/// not printed.
///
/// ```should_panic
/// # use fibload_lib::error::Ctx;
/// # use anyhow::anyhow;
/// # use anyhow::Result;
/// # use anyhow::Context;
/// # fn main() -> Result<()> {
/// Err(anyhow!("Address already in use")).context(Ctx("Could not bind", "Pick another port"))
/// # }
/// ```
#[derive(Debug)]
pub struct Ctx<A, B>(pub A, pub B)
where
    A: Display,
    B: Display;

impl<A: Display, B: Display> Display for Ctx<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !format!("{}", self.0).is_empty() {
            writeln!(f, "{}caused by:{:#} {}", ERROR_STYLE, ERROR_STYLE, self.0)?;
        }

        if !format!("{}", self.1).is_empty() {
            writeln!(f, "\n{}help:{:#} {}", HELP_STYLE, HELP_STYLE, self.1)?;
        }

        Ok(())
    }
}

/// Shorthand for attaching a [Ctx] to an error.
///
/// ```ignore
/// ctx!([context], [context args] ...; [help], [help args] ...)
/// ```
/// desugars to
/// ```ignore
/// || Ctx(format!([context], [context args]), format!([help], [help args]))
/// ```
///
/// The `;` and trailing `,` are required.
///
/// ```no_run
/// # use fibload_lib::error::Ctx;
/// # use fibload_lib::ctx;
/// # use std::path::PathBuf;
/// # use anyhow::Context;
/// # let path: PathBuf = "fibload.toml".into();
/// std::fs::read(&path).with_context(ctx!(
///   "Could not read the file {path:?}", ;
///   "Ensure that the file exists and you have permissions to access it",
/// ));
/// ```
#[macro_export]
macro_rules! ctx {
    {$cause: expr,  $($arg_cause: expr)*; $help: expr, $($arg_help: tt)*} => {
      || $crate::error::Ctx(format!($cause, $($arg_cause)*), format!($help, $($arg_help)*))
    };
}

/// The [anyhow::bail] macro, now with context.
///
/// ```no_run
/// # use fibload_lib::error::Ctx;
/// # use fibload_lib::bailc;
/// # use anyhow::Context;
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// bailc!("Unknown layout", ; "The layout {} is not known", "triple"; "Use split or single", );
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! bailc {
    {$text: expr,  $($arg_text: expr)*; $cause: expr,  $($arg_cause: expr)*; $help: expr, $($arg_help: tt)*} => {
        return Err(anyhow::anyhow!($text, $($arg_text)*)).with_context($crate::error::ctx!($cause, $($arg_cause)*; $help, $($arg_help)*));
    };
    {$text: expr $(,$arg_text: expr)*} => {
        return Err(anyhow::anyhow!($text, $($arg_text)*)).with_context($crate::error::ctx!("",;"",));
    };
}

pub use ctx;

/// The top-level report of a failed command: the root cause after a styled
/// `error:`, then the outermost context with its help.
pub fn render_error(err: &anyhow::Error) -> String {
    format!(
        "{}error:{:#} {}\n{}",
        ERROR_STYLE,
        ERROR_STYLE,
        err.root_cause(),
        err
    )
}

#[cfg(test)]
#[path = "tests/error.rs"]
mod tests;
