use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use crate::models::SortMode;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, env = "TABLESORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON file holding an array of row objects, `-` for stdin
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Initial query string, e.g. `sort=price+desc+n`
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Activate a column header, in order. `COL` sorts alphabetically, `COL:n` numerically
    #[arg(long = "click", value_name = "COL[:a|n]")]
    pub clicks: Vec<Click>,

    /// Print rows as JSON instead of a text table
    #[arg(long)]
    pub json: bool,
}

/// A header activation given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Click {
    pub column: String,
    pub mode: SortMode,
}

impl FromStr for Click {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column, mode) = match s.rsplit_once(':') {
            Some((column, mode)) => {
                let mode = mode
                    .parse::<SortMode>()
                    .map_err(|_| format!("unknown sort mode `{mode}`, expected `a` or `n`"))?;
                (column, mode)
            }
            None => (s, SortMode::Alpha),
        };
        if column.is_empty() || column.contains(' ') {
            return Err(format!("invalid column `{column}`"));
        }
        Ok(Click { column: column.to_owned(), mode })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_click() {
        assert_eq!(
            "name".parse::<Click>(),
            Ok(Click { column: "name".into(), mode: SortMode::Alpha })
        );
        assert_eq!(
            "age:n".parse::<Click>(),
            Ok(Click { column: "age".into(), mode: SortMode::Numeric })
        );
        assert!("age:x".parse::<Click>().is_err());
        assert!(":n".parse::<Click>().is_err());
        assert!("first name".parse::<Click>().is_err());
    }

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from([
            "tablesort",
            "rows.json",
            "--query",
            "sort=age+asc+n",
            "--click",
            "age:n",
            "--click",
            "name",
            "--json",
        ])
        .unwrap();
        assert_eq!(args.input, PathBuf::from("rows.json"));
        assert_eq!(args.query, "sort=age+asc+n");
        assert_eq!(args.clicks.len(), 2);
        assert_eq!(args.clicks[1].mode, SortMode::Alpha);
        assert!(args.json);
    }
}
