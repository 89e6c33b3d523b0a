//! Show command implementation
//!
//! Parses a repository URL and prints the classified reference, either
//! as a labelled field listing or as JSON.

use console::Style;

use crate::cli::ShowArgs;
use crate::error::{Result, YgitError};
use crate::remote::{RepositoryReference, parser};

/// Run show command
pub fn run(args: ShowArgs) -> Result<()> {
    let reference = parser::parse(&args.url)?;

    if args.json {
        let json =
            serde_json::to_string_pretty(&reference).map_err(|e| YgitError::IoError {
                message: e.to_string(),
            })?;
        println!("{json}");
        return Ok(());
    }

    display_reference(&reference);
    Ok(())
}

fn field(label: &str, value: &str) {
    println!("{:>11} {}", Style::new().bold().apply_to(label), value);
}

fn display_reference(reference: &RepositoryReference) {
    println!(
        "{}",
        Style::new().bold().yellow().apply_to(&reference.raw_url)
    );
    field("Protocol:", reference.protocol.as_str());
    if let Some(user) = &reference.user {
        field("User:", user);
    }
    if let Some(host) = &reference.host {
        field("Host:", host);
    }
    if let Some(port) = &reference.port {
        field("Port:", port);
    }
    field("Directory:", &reference.directory);
    field("Name:", &reference.name);
    field("Basename:", &reference.basename);
    field("Path:", &reference.resolved_path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_plain() {
        let args = ShowArgs {
            url: "ssh://user@host.xz:2222/path/to/repo.git/".to_string(),
            json: false,
        };
        assert!(run(args).is_ok());
    }

    #[test]
    fn test_show_json() {
        let args = ShowArgs {
            url: "host.xz:path/to/repo".to_string(),
            json: true,
        };
        assert!(run(args).is_ok());
    }

    #[test]
    fn test_show_rejects_whitespace() {
        let args = ShowArgs {
            url: "bad url".to_string(),
            json: false,
        };
        assert!(matches!(
            run(args),
            Err(YgitError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_json_serialization_shape() {
        let reference = parser::parse("ssh://user@host.xz:2222/path/to/repo.git/").unwrap();
        let value: serde_json::Value = serde_json::to_value(&reference).unwrap();
        assert_eq!(value["protocol"], "ssh");
        assert_eq!(value["user"], "user");
        assert_eq!(value["host"], "host.xz");
        assert_eq!(value["port"], "2222");
        assert_eq!(value["directory"], "/path/to");
        assert_eq!(value["name"], "repo.git");
        assert_eq!(value["basename"], "repo");
        assert_eq!(value["resolved_path"], "/path/to/repo.git");
    }

    #[test]
    fn test_json_omits_absent_fields() {
        let reference = parser::parse("/srv/git/proj").unwrap();
        let value: serde_json::Value = serde_json::to_value(&reference).unwrap();
        assert!(value.get("user").is_none());
        assert!(value.get("host").is_none());
        assert!(value.get("port").is_none());
    }
}
