//! Command-line arguments.

use clap::Parser;
use marquee_lib::console::ConsoleScreen;
use marquee_lib::table::Direction;

/// List a cinema console screen as a searched, filtered, sorted page.
#[derive(Debug, Parser)]
#[command(name = "marquee", version)]
pub struct Args {
    /// Screen to list: theatres, screens, devices, tasks, partners or mappings
    pub screen: ConsoleScreen,

    /// Case-insensitive text to look for
    #[arg(short, long)]
    pub search: Option<String>,

    /// Keep rows whose column equals VALUE; repeat a column to accept several values
    #[arg(short, long = "filter", value_name = "COL=VALUE", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Sort column, optionally with a direction
    #[arg(long, value_name = "COL[:asc|desc]", value_parser = parse_sort)]
    pub sort: Option<(String, Direction)>,

    /// 1-based page to show; out-of-range pages are clamped
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page [default: saved preference, else 10]
    #[arg(long, value_parser = parse_page_size)]
    pub page_size: Option<usize>,

    /// Fetch pages through an asynchronous record source
    #[arg(long)]
    pub delegated: bool,

    /// Simulated fetch latency in delegated mode
    #[arg(long, value_name = "MS")]
    pub latency_ms: Option<u64>,

    /// List the filter options of a column instead of the page
    #[arg(long, value_name = "COL")]
    pub options: Option<String>,

    /// Print the rendered table as JSON
    #[arg(long)]
    pub json: bool,

    /// Remember --page-size and --latency-ms for later runs
    #[arg(long)]
    pub save: bool,

    /// Forget saved preferences before running
    #[arg(long, conflicts_with = "save")]
    pub reset: bool,
}

fn parse_filter(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((column, value)) if !column.trim().is_empty() => {
            Ok((column.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected COL=VALUE, got '{}'", s)),
    }
}

fn parse_sort(s: &str) -> Result<(String, Direction), String> {
    let (column, direction) = match s.split_once(':') {
        Some((column, direction)) => (column, direction.parse::<Direction>()?),
        None => (s, Direction::Asc),
    };
    if column.trim().is_empty() {
        return Err(format!("expected COL[:asc|desc], got '{}'", s));
    }
    Ok((column.trim().to_string(), direction))
}

fn parse_page_size(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("page size must be at least 1".to_string()),
        Ok(size) => Ok(size),
        Err(e) => Err(format!("invalid page size '{}': {}", s, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_argument() {
        assert_eq!(
            parse_filter("status=Active"),
            Ok(("status".to_string(), "Active".to_string()))
        );
        assert_eq!(
            parse_filter("region=North America"),
            Ok(("region".to_string(), "North America".to_string()))
        );
        assert!(parse_filter("status").is_err());
        assert!(parse_filter("=Active").is_err());
    }

    #[test]
    fn test_sort_argument() {
        assert_eq!(parse_sort("name"), Ok(("name".to_string(), Direction::Asc)));
        assert_eq!(parse_sort("created_at:desc"), Ok(("created_at".to_string(), Direction::Desc)));
        assert!(parse_sort("name:sideways").is_err());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert_eq!(parse_page_size("25"), Ok(25));
        assert!(parse_page_size("0").is_err());
        assert!(parse_page_size("-1").is_err());
        assert!(
            Args::try_parse_from(["marquee", "theatres", "--page-size", "0", "--save"]).is_err()
        );
    }

    #[test]
    fn test_parse_full_command() {
        let args = Args::try_parse_from([
            "marquee", "theatres", "--search", "cinema", "-f", "status=Active", "-f",
            "status=Inactive", "--sort", "name:desc", "--page-size", "5",
        ])
        .unwrap();
        assert_eq!(args.screen, ConsoleScreen::Theatres);
        assert_eq!(args.filters.len(), 2);
        assert_eq!(args.sort, Some(("name".to_string(), Direction::Desc)));
        assert_eq!(args.page, 1);
        assert_eq!(args.page_size, Some(5));
        assert!(!args.delegated);
    }
}
