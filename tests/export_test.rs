mod common;

use anyhow::Result;
use common::{june_expenses, service_with};
use expense_tracker::io::{ExportFormat, Exporter, SessionSnapshot};
use tempfile::TempDir;

#[test]
fn test_export_csv() -> Result<()> {
    let service = service_with(&[
        ("12.5", "Food", "2024-06-03"),
        ("3", "Bus, tram", "2024-06-04"),
    ])?;

    let mut buffer = Vec::new();
    let count = Exporter::new(&service).export_csv(&mut buffer)?;

    assert_eq!(count, 2);
    assert_eq!(
        String::from_utf8(buffer)?,
        "number,date,category,amount\n\
         1,2024-06-03,Food,12.50\n\
         2,2024-06-04,\"Bus, tram\",3.00\n"
    );

    Ok(())
}

#[test]
fn test_export_json_snapshot() -> Result<()> {
    let service = june_expenses()?;

    let mut buffer = Vec::new();
    let count = Exporter::new(&service).export_json(&mut buffer)?;
    let snapshot: SessionSnapshot = serde_json::from_slice(&buffer)?;

    assert_eq!(count, 5);
    assert_eq!(snapshot.expenses, service.list_expenses());
    assert_eq!(snapshot.report.total, service.total());
    assert_eq!(snapshot.report.monthly.total, service.total());

    Ok(())
}

#[test]
fn test_export_to_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("expenses.json");
    let service = june_expenses()?;

    let format = ExportFormat::for_path(path.to_str().unwrap());
    assert_eq!(format, ExportFormat::Json);

    let file = std::fs::File::create(&path)?;
    Exporter::new(&service).export(format, file)?;

    let written = std::fs::read_to_string(&path)?;
    assert!(written.contains("\"category\": \"Rent\""));
    assert!(written.contains("\"unit\": \"monthly\""));

    Ok(())
}

#[test]
fn test_export_format_selection() {
    assert_eq!(ExportFormat::for_path("out.JSON"), ExportFormat::Json);
    assert_eq!(ExportFormat::for_path("out.csv"), ExportFormat::Csv);
    assert_eq!(ExportFormat::for_path("expenses"), ExportFormat::Csv);
    assert_eq!(ExportFormat::from_str("Json"), Some(ExportFormat::Json));
    assert_eq!(ExportFormat::from_str("xml"), None);
}
