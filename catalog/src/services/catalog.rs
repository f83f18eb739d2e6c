use crate::api::{SearchRequest, VideoApi, VideoLookupRequest};
use crate::config::{SearchOptions, LOOKUP_BATCH_SIZE};
use crate::error::{CatalogError, EnrichmentError};
use crate::record::Record;
use log::{debug, info, warn};
use std::collections::HashSet;

/// What one enrichment pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichmentReport {
    /// Ids that still had an unknown duration when the pass started.
    pub requested: usize,
    pub batches: usize,
    pub resolved: usize,
    pub failed: Vec<(String, EnrichmentError)>,
    /// Lookup items whose id matched no record.
    pub unmatched: usize,
}

/// Results of one query: the records found so far and where the next page starts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<Record>,
    page_cursor: Option<String>,
    pages_fetched: u32,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    pub fn reset(&mut self) {
        self.records.clear();
        self.page_cursor = None;
        self.pages_fetched = 0;
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn page_cursor(&self) -> Option<&str> {
        self.page_cursor.as_deref()
    }

    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    pub fn lookup(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn lookup_mut(&mut self, id: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|record| record.id() == id)
    }

    /// Fetch pages until the server runs out or `options.page_limit` is reached,
    /// then enrich everything that arrived.
    pub async fn search<A: VideoApi>(
        &mut self,
        api: &A,
        query: &str,
        options: &SearchOptions,
    ) -> Result<EnrichmentReport, CatalogError> {
        info!(
            "Searching for '{query}' (up to {} page(s))",
            options.page_limit
        );

        loop {
            self.fetch_page(api, query, options).await?;
            if !self.has_more_pages(options.page_limit) {
                break;
            }
        }

        info!(
            "Fetched {} page(s), {} video(s)",
            self.pages_fetched,
            self.records.len()
        );

        self.enrich(api).await
    }

    /// Whether another page exists and the limit allows fetching it.
    pub fn has_more_pages(&self, page_limit: u32) -> bool {
        self.page_cursor.is_some() && self.pages_fetched < page_limit
    }

    /// Fetch the page at the current cursor and append its records.
    /// Returns how many records were added.
    pub async fn fetch_page<A: VideoApi>(
        &mut self,
        api: &A,
        query: &str,
        options: &SearchOptions,
    ) -> Result<usize, CatalogError> {
        let request = SearchRequest::new(query, options, self.page_cursor.clone());
        let response = api.search(&request).await?;

        let page = response
            .items
            .into_iter()
            .map(Record::from_search_item)
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen: HashSet<String> = self.records.iter().map(|r| r.id().to_string()).collect();
        let before = self.records.len();
        for record in page {
            if seen.insert(record.id().to_string()) {
                self.records.push(record);
            } else {
                debug!("Skipping duplicate result {}", record.id());
            }
        }

        self.pages_fetched += 1;
        self.page_cursor = response.next_page_token.filter(|token| !token.is_empty());

        let added = self.records.len() - before;
        debug!(
            "Page {} added {added} video(s), more pages: {}",
            self.pages_fetched,
            self.page_cursor.is_some()
        );
        Ok(added)
    }

    /// Look up duration and statistics for every record whose duration is unknown,
    /// in sequential batches of at most 50 ids.
    ///
    /// A record that cannot be enriched keeps its unknown duration and is listed
    /// in the report; only request failures abort the pass.
    pub async fn enrich<A: VideoApi>(&mut self, api: &A) -> Result<EnrichmentReport, CatalogError> {
        let pending: Vec<String> = self
            .records
            .iter()
            .filter(|record| !record.is_duration_known())
            .map(|record| record.id().to_string())
            .collect();

        let mut report = EnrichmentReport {
            requested: pending.len(),
            ..EnrichmentReport::default()
        };

        for batch in pending.chunks(LOOKUP_BATCH_SIZE) {
            let request = VideoLookupRequest::new(batch.to_vec());
            let response = api.videos(&request).await?;
            report.batches += 1;

            for item in &response.items {
                let Some(record) = self.lookup_mut(&item.id) else {
                    report.unmatched += 1;
                    continue;
                };

                match record.apply_details(item) {
                    Ok(()) => report.resolved += 1,
                    Err(e) => {
                        warn!("Could not enrich video {}: {e}", item.id);
                        report.failed.push((item.id.clone(), e));
                    }
                }
            }
        }

        debug!(
            "Enriched {}/{} video(s) in {} batch(es), {} failed",
            report.resolved,
            report.requested,
            report.batches,
            report.failed.len()
        );
        Ok(report)
    }

    /// Longest first, then drop everything shorter than the minimum.
    /// Records with an unknown duration count as zero seconds.
    pub fn sort_and_filter(&mut self, min_duration_seconds: Option<u64>) {
        // Stable, so equal durations keep their arrival order.
        self.records
            .sort_by(|a, b| b.total_seconds().cmp(&a.total_seconds()));

        if let Some(min_seconds) = min_duration_seconds {
            self.records
                .retain(|record| record.total_seconds() >= min_seconds);
        }
    }

    /// Records still held whose duration never resolved.
    pub fn unresolved_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| !record.is_duration_known())
            .count()
    }
}
