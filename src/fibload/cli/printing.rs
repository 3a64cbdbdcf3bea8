use anstyle::AnsiColor;
use clap::crate_authors;
use clap::crate_name;
use clap::crate_version;
use fibload_lib::constants::style_from_fg;
use fibload_lib::constants::ERROR_STYLE;
use fibload_lib::constants::HELP_STYLE;
use fibload_lib::constants::PRIMARY_STYLE;
use fibload_lib::constants::SECONDARY_STYLE;

/// Util function for getting the style for the CLI
pub fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(style_from_fg(AnsiColor::Yellow).bold())
        .header(style_from_fg(AnsiColor::Green).bold().underline())
        .literal(style_from_fg(AnsiColor::Cyan).bold())
        .invalid(style_from_fg(AnsiColor::Blue).bold())
        .error(ERROR_STYLE)
        .valid(HELP_STYLE)
        .placeholder(style_from_fg(AnsiColor::White))
}

/// Pretty print fibload's version
pub fn print_version(short: bool) {
    if short {
        println!("{} {}", crate_name!(), crate_version!());

        return;
    }

    println!(
        "{PRIMARY_STYLE}{}{PRIMARY_STYLE:#} at version {SECONDARY_STYLE}{}{SECONDARY_STYLE:#}",
        crate_name!(),
        crate_version!()
    );

    let authors = crate_authors!("\n");
    if !authors.is_empty() {
        println!("Authored by:");
        for author in authors.split('\n') {
            println!("  {author}");
        }
    }
}
