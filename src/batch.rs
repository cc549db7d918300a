use crate::config::ModelSpec;
use crate::description::{DescriptionCache, DescriptionProvider};
use crate::images::sample_directory;
use crate::localization::LocalizationProvider;
use crate::processor::{process_row, RowOutcome};
use crate::table::{read_table, write_table, Row, HEADERS};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Inputs and outputs of one localization run
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub table_path: PathBuf,
    pub images_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Only process the first N rows
    pub limit: Option<usize>,
    /// Pause after each row
    pub row_delay: Duration,
    /// Log decoded rows and the images directory before starting
    pub diagnostics: bool,
}

/// Per-row entry of a model's JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedRecord {
    #[serde(rename = "KEY")]
    pub key: String,
    #[serde(rename = "LEVEL_ID")]
    pub level_id: String,
    pub image_id: String,
    pub en: String,
    pub description: String,
    pub localization: RecordLocalization,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordLocalization {
    pub tr: String,
    pub fr: String,
    pub de: String,
}

impl LocalizedRecord {
    fn from_row(row: &Row, description: String) -> Self {
        Self {
            key: row.key.clone(),
            level_id: row.level_id.clone(),
            image_id: row.image_id.clone(),
            en: row.en.clone(),
            description,
            localization: RecordLocalization {
                tr: row.tr.clone(),
                fr: row.fr.clone(),
                de: row.de.clone(),
            },
        }
    }
}

/// What one model's pass over the table produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelReport {
    pub model: ModelSpec,
    pub processed: usize,
    pub skipped: usize,
    pub errored: usize,
    pub table_path: PathBuf,
    pub records_path: PathBuf,
}

/// Output file paths for `model` inside `output_dir`
pub fn output_paths(output_dir: &Path, model: &ModelSpec) -> (PathBuf, PathBuf) {
    let stem = format!("output_{}", model.file_stem());
    (
        output_dir.join(format!("{}.csv", stem)),
        output_dir.join(format!("{}.json", stem)),
    )
}

/// Localize every row of the table with every model, in order.
///
/// The table is read once and each model works on its own copy of the rows.
/// Image descriptions are cached across all models. A failing row is logged
/// and left as it was; only a failure to read the table or write an output
/// file ends the run early. Rows with an empty description are localized but
/// get no JSON record.
pub async fn run_batch<P>(
    provider: &P,
    models: &[ModelSpec],
    options: &RunOptions,
) -> Result<Vec<ModelReport>>
where
    P: DescriptionProvider + LocalizationProvider,
{
    info!("Starting localization run for {}", options.table_path.display());

    let mut rows = read_table(&options.table_path)?;
    info!("Loaded {} rows from {}", rows.len(), options.table_path.display());

    if options.diagnostics {
        log_diagnostics(&rows, &options.images_dir);
    }

    if let Some(limit) = options.limit.filter(|&n| n > 0) {
        rows.truncate(limit);
        info!("Processing only the first {} rows", limit);
    }

    std::fs::create_dir_all(&options.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            options.output_dir.display()
        )
    })?;

    let mut cache = DescriptionCache::new();
    let mut reports = Vec::with_capacity(models.len());

    for model in models {
        info!("Processing with model: {} ({})", model.label, model.id);
        let report = run_model(provider, model, &rows, &mut cache, options).await?;
        info!(
            "✓ {}: {} processed, {} skipped, {} errored",
            model.label, report.processed, report.skipped, report.errored
        );
        reports.push(report);
    }

    info!(
        "✅ Localization run complete ({} models, {} images described)",
        reports.len(),
        cache.len()
    );
    Ok(reports)
}

async fn run_model<P>(
    provider: &P,
    model: &ModelSpec,
    rows: &[Row],
    cache: &mut DescriptionCache,
    options: &RunOptions,
) -> Result<ModelReport>
where
    P: DescriptionProvider + LocalizationProvider,
{
    let mut model_rows = rows.to_vec();
    let mut records = Vec::new();
    let (table_path, records_path) = output_paths(&options.output_dir, model);

    let mut report = ModelReport {
        model: model.clone(),
        processed: 0,
        skipped: 0,
        errored: 0,
        table_path,
        records_path,
    };

    let total = model_rows.len();
    for (index, row) in model_rows.iter_mut().enumerate() {
        let progress = index + 1;
        debug!("[{}/{}] {} row {}", progress, total, model.label, row.key);

        match process_row(row, &options.images_dir, cache, provider, model).await {
            Ok(RowOutcome::Processed { description, .. }) => {
                // Rows whose image got an empty description stay out of the records
                if description.is_empty() {
                    warn!(
                        "Empty description for image {}, no record written",
                        row.image_id.trim()
                    );
                } else {
                    records.push(LocalizedRecord::from_row(row, description));
                }
                report.processed += 1;
                info!("[{}/{}] ✓ {}", progress, total, row.key);
            }
            Ok(RowOutcome::Skipped(reason)) => {
                report.skipped += 1;
                info!("[{}/{}] skipped {} ({})", progress, total, row.key, reason);
            }
            Err(e) => {
                report.errored += 1;
                error!("[{}/{}] ✗ Error processing row {}: {:?}", progress, total, index, e);
            }
        }

        if !options.row_delay.is_zero() {
            tokio::time::sleep(options.row_delay).await;
        }
    }

    write_table(&report.table_path, &model_rows)?;
    info!(
        "✓ Saved table to {} (UTF-8 with BOM)",
        report.table_path.display()
    );

    write_records(&report.records_path, &records)?;
    info!(
        "✓ Saved {} records to {}",
        records.len(),
        report.records_path.display()
    );

    Ok(report)
}

/// Write records as a pretty-printed JSON array, non-ASCII left unescaped
pub fn write_records(path: &Path, records: &[LocalizedRecord]) -> Result<()> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    records
        .serialize(&mut serializer)
        .context("Failed to serialize records")?;

    std::fs::write(path, buffer)
        .with_context(|| format!("Failed to write records file {}", path.display()))
}

fn log_diagnostics(rows: &[Row], images_dir: &Path) {
    for (i, row) in rows.iter().take(3).enumerate() {
        info!("Row {}:", i + 1);
        for (header, value) in HEADERS.iter().zip(row.fields()) {
            info!("  {}: '{}'", header, value);
        }
    }

    match sample_directory(images_dir, 5) {
        Ok((count, sample)) => {
            info!(
                "Images directory {} contains {} files",
                images_dir.display(),
                count
            );
            info!("Sample files: {}", sample.join(", "));
        }
        Err(e) => error!("⚠️ {:#}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debug::DebugProvider;
    use crate::table::{decode, encode};
    use tempfile::TempDir;

    fn write_input(dir: &Path, lines: &[&str]) -> PathBuf {
        let path = dir.join("data.csv");
        let mut text = String::from("\u{feff}KEY;LEVEL_ID;Text_ID;image_id;en;tr;de;fr\n");
        for line in lines {
            text.push_str(line);
            text.push('\n');
        }
        std::fs::write(&path, text).unwrap();
        path
    }

    fn options(root: &Path, table_path: PathBuf) -> RunOptions {
        let images_dir = root.join("imgs");
        std::fs::create_dir_all(&images_dir).unwrap();
        RunOptions {
            table_path,
            images_dir,
            output_dir: root.join("out"),
            limit: None,
            row_delay: Duration::ZERO,
            diagnostics: false,
        }
    }

    // ==================== Output Naming Tests ====================

    #[test]
    fn test_output_paths_use_sanitized_label() {
        let model = ModelSpec::new("3-GPT 4-o mini", "openai/gpt-4o-mini");
        let (csv, json) = output_paths(Path::new("/out"), &model);
        assert_eq!(csv, PathBuf::from("/out/output_3_GPT_4_o_mini.csv"));
        assert_eq!(json, PathBuf::from("/out/output_3_GPT_4_o_mini.json"));
    }

    // ==================== Record Writer Tests ====================

    #[test]
    fn test_write_records_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("records.json");
        let record = LocalizedRecord {
            key: "K1".to_string(),
            level_id: "L1".to_string(),
            image_id: "1".to_string(),
            en: "Hello".to_string(),
            description: "desc".to_string(),
            localization: RecordLocalization {
                tr: "Günaydın".to_string(),
                fr: "Salut".to_string(),
                de: "Grüß dich".to_string(),
            },
        };

        write_records(&path, &[record.clone()]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Günaydın"));
        assert!(text.contains("\n    {\n        \"KEY\": \"K1\""));
        let parsed: Vec<LocalizedRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, vec![record]);
    }

    #[test]
    fn test_write_records_empty_list() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("records.json");
        write_records(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    // ==================== run_batch Tests ====================

    #[tokio::test]
    async fn test_missing_table_is_fatal_and_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let opts = options(dir.path(), dir.path().join("missing.csv"));
        let models = vec![ModelSpec::new("m", "m")];

        let result = run_batch(&DebugProvider, &models, &opts).await;

        assert!(result.is_err());
        assert!(!opts.output_dir.exists());
    }

    #[tokio::test]
    async fn test_limit_truncates_rows() {
        let dir = TempDir::new().unwrap();
        let table = write_input(
            dir.path(),
            &["K1;L1;T1;1;One;;;", "K2;L1;T2;1;Two;;;", "K3;L1;T3;1;Three;;;"],
        );
        let mut opts = options(dir.path(), table);
        std::fs::write(opts.images_dir.join("1.png"), b"img").unwrap();
        opts.limit = Some(2);
        let models = vec![ModelSpec::new("m", "m")];

        let reports = run_batch(&DebugProvider, &models, &opts).await.unwrap();

        assert_eq!(reports[0].processed, 2);
        let out = std::fs::read_to_string(&reports[0].table_path).unwrap();
        assert_eq!(decode(&out).len(), 2);
    }

    #[tokio::test]
    async fn test_zero_limit_means_all_rows() {
        let dir = TempDir::new().unwrap();
        let table = write_input(dir.path(), &["K1;L1;T1;1;One;;;", "K2;L1;T2;1;Two;;;"]);
        let mut opts = options(dir.path(), table);
        std::fs::write(opts.images_dir.join("1.png"), b"img").unwrap();
        opts.limit = Some(0);

        let reports = run_batch(&DebugProvider, &[ModelSpec::new("m", "m")], &opts)
            .await
            .unwrap();

        assert_eq!(reports[0].processed, 2);
    }

    #[tokio::test]
    async fn test_models_do_not_share_row_edits() {
        let dir = TempDir::new().unwrap();
        let table = write_input(dir.path(), &["K1;L1;T1;1;Hello;;;"]);
        let opts = options(dir.path(), table);
        std::fs::write(opts.images_dir.join("1.png"), b"img").unwrap();
        let models = vec![ModelSpec::new("first", "a/1"), ModelSpec::new("second", "b/2")];

        let reports = run_batch(&DebugProvider, &models, &opts).await.unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].model.label, "first");
        for report in &reports {
            let rows = decode(&std::fs::read_to_string(&report.table_path).unwrap());
            assert_eq!(rows[0].tr, "[TR] Hello");
        }
    }

    #[tokio::test]
    async fn test_unreadable_images_dir_marks_rows_errored() {
        let dir = TempDir::new().unwrap();
        let table = write_input(dir.path(), &["K1;L1;T1;1;Hello;x;y;z", "K2;L1;T2;;;;;"]);
        let mut opts = options(dir.path(), table);
        opts.images_dir = dir.path().join("no-such-dir");

        let reports = run_batch(&DebugProvider, &[ModelSpec::new("m", "m")], &opts)
            .await
            .unwrap();

        assert_eq!(reports[0].errored, 1);
        assert_eq!(reports[0].skipped, 1);
        let out = std::fs::read_to_string(&reports[0].table_path).unwrap();
        let expected = encode(&decode(&std::fs::read_to_string(&opts.table_path).unwrap()));
        assert_eq!(out.trim_start_matches('\u{feff}'), expected);
    }
}
