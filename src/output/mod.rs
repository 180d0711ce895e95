use crate::progress::plural;
use crate::rename::RenameResult;
use std::io::{self, Write};

/// Display dry run results in a formatted output
pub fn display_dry_run(
    result: &RenameResult,
    show_name: &str,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "========================================")?;
    writeln!(writer, "              DRY RUN")?;
    writeln!(writer, "========================================")?;
    writeln!(writer)?;
    writeln!(writer, "Show:       {}", show_name)?;
    writeln!(writer, "Operations: {}", result.operations.len())?;
    writeln!(writer)?;

    if result.operations.is_empty() {
        writeln!(writer, "No files to rename.")?;
        return Ok(());
    }

    writeln!(writer, "Planned changes:")?;

    let mut current_season = None;
    for op in &result.operations {
        if current_season != Some(op.season) {
            writeln!(writer)?;
            writeln!(writer, "  Season {}", op.season)?;
            current_season = Some(op.season);
        }
        writeln!(writer, "     From: {}", op.source_name)?;
        writeln!(writer, "     To:   {}", op.destination_name)?;
    }

    writeln!(writer)?;
    writeln!(writer, "----------------------------------------")?;
    writeln!(writer, "Summary:")?;
    let planned = result.operations.len();
    writeln!(writer, "  {} file{} would be renamed", planned, plural(planned))?;
    let unchanged = result.unchanged.len();
    if unchanged > 0 {
        writeln!(
            writer,
            "  {} file{} already named correctly",
            unchanged,
            plural(unchanged)
        )?;
    }
    let skipped = result.seasons_skipped.len();
    if skipped > 0 {
        writeln!(
            writer,
            "  {} season{} skipped (no supported media)",
            skipped,
            plural(skipped)
        )?;
    }

    writeln!(writer)?;
    writeln!(writer, "Run without --dry to apply these changes.")?;

    Ok(())
}

/// Display execution results (non-dry-run)
pub fn display_execution_result(result: &RenameResult, writer: &mut impl Write) -> io::Result<()> {
    let renamed = result.operations.len();
    let seasons = result.seasons_processed.len();
    writeln!(writer)?;
    writeln!(
        writer,
        "Successfully renamed {} file{} across {} season{}.",
        renamed,
        plural(renamed),
        seasons,
        plural(seasons)
    )?;

    let unchanged = result.unchanged.len();
    if unchanged > 0 {
        let verb = if unchanged == 1 { "was" } else { "were" };
        writeln!(
            writer,
            "  {} file{} {} already named correctly.",
            unchanged,
            plural(unchanged),
            verb
        )?;
    }

    if !result.seasons_skipped.is_empty() {
        let skipped: Vec<String> = result
            .seasons_skipped
            .iter()
            .map(|s| s.to_string())
            .collect();
        writeln!(
            writer,
            "  Skipped seasons without media: {}",
            skipped.join(", ")
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rename::RenameOperation;
    use std::path::PathBuf;

    fn create_test_result(dry_run: bool) -> RenameResult {
        let mut result = RenameResult::new(dry_run);

        result.add_operation(RenameOperation::new(
            PathBuf::from("/tv/Show/Season 1/random.S01E01.mkv"),
            "Show S01E01.mkv".to_string(),
            1,
            1,
        ));
        result.add_operation(RenameOperation::new(
            PathBuf::from("/tv/Show/Season 2/random.S02E01.mkv"),
            "Show S02E01.mkv".to_string(),
            2,
            1,
        ));
        result.unchanged.push(RenameOperation::new(
            PathBuf::from("/tv/Show/Season 2/Show S02E02.mkv"),
            "Show S02E02.mkv".to_string(),
            2,
            2,
        ));
        result.seasons_processed = vec![1, 2];
        result.seasons_skipped = vec![3];

        result
    }

    #[test]
    fn test_display_dry_run() {
        let result = create_test_result(true);
        let mut output = Vec::new();

        display_dry_run(&result, "Show", &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();

        assert!(output_str.contains("DRY RUN"));
        assert!(output_str.contains("Show:       Show"));
        assert!(output_str.contains("Season 1"));
        assert!(output_str.contains("Season 2"));
        assert!(output_str.contains("From: random.S01E01.mkv"));
        assert!(output_str.contains("To:   Show S01E01.mkv"));
        assert!(output_str.contains("2 files would be renamed"));
        assert!(output_str.contains("1 file already named correctly"));
        assert!(output_str.contains("1 season skipped"));
    }

    #[test]
    fn test_display_dry_run_empty() {
        let result = RenameResult::new(true);
        let mut output = Vec::new();

        display_dry_run(&result, "Show", &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();

        assert!(output_str.contains("DRY RUN"));
        assert!(output_str.contains("No files to rename"));
    }

    #[test]
    fn test_display_execution_result_singular() {
        let mut result = RenameResult::new(false);
        result.add_operation(RenameOperation::new(
            PathBuf::from("/tv/Show/Season 1/random.S01E01.mkv"),
            "Show S01E01.mkv".to_string(),
            1,
            1,
        ));
        result.seasons_processed = vec![1];
        let mut output = Vec::new();

        display_execution_result(&result, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.contains("Successfully renamed 1 file across 1 season."));
    }

    #[test]
    fn test_display_execution_result() {
        let result = create_test_result(false);
        let mut output = Vec::new();

        display_execution_result(&result, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();

        assert!(output_str.contains("Successfully renamed 2 files across 2 seasons"));
        assert!(output_str.contains("1 file was already named correctly"));
        assert!(output_str.contains("Skipped seasons without media: 3"));
    }
}
