use tabled::Table;

use crate::{
    config::SyncConfig,
    error::SyncError,
    info,
    management::{S3TokenStore, TokenManager},
    sync,
    types::{AddedTrackTableRow, SyncReport},
};

/// Runs the sync flow against the S3 token object from `config`.
pub async fn sync(config: &SyncConfig) -> Result<SyncReport, SyncError> {
    info!(
        "Loading token from s3://{}/{}",
        config.storage.bucket, config.storage.key
    );
    let tokens = TokenManager::new(S3TokenStore::connect(&config.storage).await);
    sync::run(config, &tokens).await
}

/// Prints the tracks a run added, one row per track.
pub fn print_report(report: &SyncReport) {
    if report.added.is_empty() {
        return;
    }

    let rows: Vec<AddedTrackTableRow> = report
        .added
        .iter()
        .map(|t| AddedTrackTableRow {
            name: t.name.clone(),
            artists: t
                .artists
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    println!("{}", Table::new(rows));
}
