use anyhow::{Context, Result};
use bugboard::pages::dashboard::{self, DashboardData};
use bugboard::{Board, Config, Dimension};
use std::fs;

/// Seeds the board with the filter, search, and selection state given
/// on the command line. Each flag drives the matching transition.
fn apply_board_state(board: &mut Board, config: &Config) {
    let seeds = [
        (Dimension::Project, &config.project),
        (Dimension::Phase, &config.phase),
        (Dimension::Stage, &config.stage),
        (Dimension::Status, &config.status),
        (Dimension::Severity, &config.severity),
    ];
    for (dimension, value) in seeds {
        if let Some(value) = value {
            board.set_filter(dimension, value);
        }
    }
    if let Some(query) = &config.search {
        board.set_search(query);
    }
    if let Some(id) = &config.select {
        board.select(id);
    }
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let issues = match bugboard::load_issues(&config.data) {
        Ok(issues) => issues,
        Err(err) => {
            eprintln!("Warning: using fallback issues: {:#}", err);
            bugboard::fallback_issues()
        }
    };

    let mut board = Board::new(issues);
    apply_board_state(&mut board, &config);

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;
    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    bugboard::write_css_assets(&assets_dir)?;

    let notes_html = config.notes.as_deref().map(bugboard::markdown::load);

    let title = config.dashboard_title();
    let source = config.data.display().to_string();
    let html = dashboard::generate(DashboardData {
        board: &board,
        title: &title,
        source: &source,
        notes_html: notes_html.as_deref(),
    });

    let index_path = config.output.join("index.html");
    fs::write(&index_path, html.into_string()).context("Failed to write dashboard page")?;

    let summary = board.summary();
    println!(
        "Dashboard written to {} ({} shown / {} total)",
        index_path.display(),
        summary.shown,
        summary.total
    );

    if !config.no_open
        && let Err(err) = open::that(&index_path)
    {
        eprintln!("Warning: failed to open dashboard in browser: {}", err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bugboard::Issue;
    use serde_json::json;
    use std::path::PathBuf;

    fn test_config() -> Config {
        Config {
            data: PathBuf::from("issues.jsonl"),
            output: PathBuf::from("dist"),
            title: None,
            notes: None,
            project: Some("Atlas".to_string()),
            phase: None,
            stage: None,
            status: Some("open".to_string()),
            severity: None,
            search: Some("login".to_string()),
            select: Some("BUG-1".to_string()),
            no_open: true,
        }
    }

    #[test]
    fn test_apply_board_state_seeds_all_transitions() {
        // Arrange
        let mut board = Board::new(vec![
            Issue::new(json!({
                "id": "BUG-1", "status": "open", "project": "Atlas",
                "symptom": "login form hangs",
            })),
            Issue::new(json!({
                "id": "BUG-2", "status": "open", "project": "Borealis",
            })),
        ]);

        // Act
        apply_board_state(&mut board, &test_config());

        // Assert
        assert_eq!(board.filters().project, "Atlas");
        assert_eq!(board.filters().status, "open");
        assert_eq!(board.filters().search, "login");
        assert_eq!(board.selected_id(), "BUG-1");
        assert_eq!(board.visible().len(), 1);
        assert!(board.selected().is_some());
    }

    #[test]
    fn test_apply_board_state_leaves_unset_flags_alone() {
        // Arrange
        let mut board = Board::new(vec![]);
        let mut config = test_config();
        config.project = None;
        config.search = None;
        config.select = None;

        // Act
        apply_board_state(&mut board, &config);

        // Assert
        assert_eq!(board.filters().project, "");
        assert_eq!(board.filters().search, "");
        assert_eq!(board.selected_id(), "");
    }
}
