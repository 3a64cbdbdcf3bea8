use std::net::Ipv4Addr;
use std::net::SocketAddr;
use std::net::SocketAddrV4;
use std::path::PathBuf;
use std::time::Duration;

use anstyle::AnsiColor;
use anstyle::Color;
use anstyle::Style;

/// The config file read when none is given explicitly.
pub const CONFIG_DEFAULT: fn() -> PathBuf = || "./fibload.toml".into();

/// The default address the server listens on.
pub const ADDRESS_DEFAULT: fn() -> SocketAddr =
    || SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8000));

/// The stack reserved for each computation thread, 256 MiB.
///
/// The recursion goes n frames deep, so this bounds the largest n a request
/// can run without exhausting its stack: a few million.
pub const COMPUTE_STACK_SIZE: usize = 256 << 20;

/// The name given to computation threads.
pub const COMPUTE_THREAD_NAME: &str = "fibload-compute";

/// Profiling is on unless disabled.
pub const PROFILING_DEFAULT: fn() -> bool = || true;

/// The path of the single-term route in the split layout.
pub const TERM_ROUTE: &str = "/unique";

/// The path of the sequence route in the split layout.
pub const SEQUENCE_ROUTE: &str = "/multiple";

/// The path of the sequence route in the single layout.
pub const ROOT_ROUTE: &str = "/";

/// The path serving the accumulated profile.
pub const PROFILE_ROUTE: &str = "/debug/profile";

/// The name of the query string parameter carrying the index.
pub const INDEX_PARAMETER: &str = "n";

/// The content type of every response.
pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Body sent when `n` is absent or not a number.
pub const MISSING_INDEX_MESSAGE: &str = "Missing n query string parameter";

/// Body sent when `n` is a number below 1.
pub const INVALID_INDEX_MESSAGE: &str = "The value of n is invalid";

/// Body sent when a computation outlives the configured timeout.
pub const TIMEOUT_MESSAGE: &str = "The computation did not finish in time";

/// Body sent for unknown paths.
pub const NOT_FOUND_MESSAGE: &str = "404 page not found\n";

/// Body sent when the computation thread could not be started or died.
pub const INTERNAL_ERROR_MESSAGE: &str = "The computation failed";

/// Task name of a single-term request.
pub const TERM_TASK: &str = "UniqueFib";

/// Task name of a sequence request.
pub const SEQUENCE_TASK: &str = "MultipleFib";

/// Region name of a single-term computation.
pub const TERM_REGION: &str = "Compute fibonacci (unique)";

/// Region name of a sequence computation.
pub const SEQUENCE_REGION: &str = "Compute fibonacci suite";

/// How long to wait before accepting again after a failed accept.
pub const ACCEPT_BACKOFF: Duration = Duration::from_millis(10);

/// Create a style with a defined foreground color.
pub const fn style_from_fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

/// The styling for the program name.
pub const PRIMARY_STYLE: Style = style_from_fg(AnsiColor::Green).bold();

/// The styling for the secondary text.
pub const SECONDARY_STYLE: Style = style_from_fg(AnsiColor::BrightGreen);

/// The styling for error messages.
pub const ERROR_STYLE: Style = style_from_fg(AnsiColor::Red).bold().blink();

/// The styling for help messages.
pub const HELP_STYLE: Style = style_from_fg(AnsiColor::Green).bold().underline();
