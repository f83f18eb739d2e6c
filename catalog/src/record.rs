use crate::error::{CatalogError, EnrichmentError};
use crate::models::{SearchItem, Statistics, VideoItem};
use crate::utils::parse_iso8601_duration;
use chrono::{DateTime, Datelike, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hms {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Hms {
    pub fn total_seconds(&self) -> u64 {
        u64::from(self.hours) * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoDuration {
    #[default]
    Unknown,
    Resolved(Hms),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EnrichmentStatus {
    #[default]
    Pending,
    Resolved,
    Failed(EnrichmentError),
}

/// Time since publishing, as shown next to each result.
///
/// The elapsed time is read as if it were a date after the Unix epoch, so the
/// month and day components can be off by one around month ends and leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Age {
    pub years: i32,
    pub months: u32,
    pub days: u32,
}

impl Age {
    pub fn between(published_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let elapsed = (now - published_at).num_milliseconds().max(0);
        match DateTime::<Utc>::from_timestamp_millis(elapsed) {
            Some(as_date) => Age {
                years: as_date.year() - 1970,
                months: as_date.month0(),
                days: as_date.day0(),
            },
            None => Age::default(),
        }
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.years > 0 {
            parts.push(format!("{}y", self.years));
        }
        if self.months > 0 {
            parts.push(format!("{}m", self.months));
        }
        if self.days > 0 {
            parts.push(format!("{}d", self.days));
        }
        if parts.is_empty() {
            return f.write_str("0d");
        }
        f.write_str(&parts.join(" "))
    }
}

/// One video as known to the client.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: Option<String>,
    pub channel_name: String,
    pub channel_id: String,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub favorite_count: u64,
    pub published_at: DateTime<Utc>,
    duration: VideoDuration,
    enrichment: EnrichmentStatus,
}

struct Details {
    duration: Hms,
    view_count: u64,
    like_count: u64,
    comment_count: u64,
    favorite_count: u64,
}

impl Record {
    /// Build a record from one search result. The duration stays unknown until enrichment.
    pub fn from_search_item(item: SearchItem) -> Result<Self, CatalogError> {
        let id = item
            .id
            .video_id
            .ok_or(CatalogError::MissingField("id.videoId"))?;
        let snippet = item.snippet.ok_or(CatalogError::MissingField("snippet"))?;
        let published_raw = snippet
            .published_at
            .ok_or(CatalogError::MissingField("snippet.publishedAt"))?;
        let published_at = DateTime::parse_from_rfc3339(&published_raw)
            .map_err(|e| CatalogError::Decode(format!("publishedAt `{published_raw}`: {e}")))?
            .with_timezone(&Utc);

        Ok(Record {
            id,
            title: snippet.title,
            description: snippet.description,
            thumbnail_url: snippet.thumbnails.default.map(|t| t.url),
            channel_name: snippet.channel_title,
            channel_id: snippet.channel_id,
            view_count: 0,
            like_count: 0,
            comment_count: 0,
            favorite_count: 0,
            published_at,
            duration: VideoDuration::Unknown,
            enrichment: EnrichmentStatus::Pending,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn duration(&self) -> VideoDuration {
        self.duration
    }

    pub fn enrichment(&self) -> &EnrichmentStatus {
        &self.enrichment
    }

    pub fn is_duration_known(&self) -> bool {
        matches!(self.duration, VideoDuration::Resolved(_))
    }

    pub fn total_seconds(&self) -> u64 {
        match self.duration {
            VideoDuration::Unknown => 0,
            VideoDuration::Resolved(hms) => hms.total_seconds(),
        }
    }

    /// `HH:MM:SS`, or `None` while the duration is unknown.
    pub fn formatted_duration(&self) -> Option<String> {
        match self.duration {
            VideoDuration::Unknown => None,
            VideoDuration::Resolved(hms) => Some(hms.to_string()),
        }
    }

    pub fn age(&self, now: DateTime<Utc>) -> Age {
        Age::between(self.published_at, now)
    }

    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }

    pub fn channel_url(&self) -> String {
        format!("https://www.youtube.com/channel/{}", self.channel_id)
    }

    /// Apply duration and statistics from a video lookup.
    ///
    /// Either everything is assigned or nothing is: on failure the duration
    /// stays unknown, the counters keep their values and the status records why.
    pub fn apply_details(&mut self, item: &VideoItem) -> Result<(), EnrichmentError> {
        match Self::parse_details(item) {
            Ok(details) => {
                if !self.is_duration_known() {
                    self.duration = VideoDuration::Resolved(details.duration);
                }
                self.view_count = details.view_count;
                self.like_count = details.like_count;
                self.comment_count = details.comment_count;
                self.favorite_count = details.favorite_count;
                self.enrichment = EnrichmentStatus::Resolved;
                Ok(())
            }
            Err(e) => {
                self.enrichment = EnrichmentStatus::Failed(e.clone());
                Err(e)
            }
        }
    }

    fn parse_details(item: &VideoItem) -> Result<Details, EnrichmentError> {
        let content_details = item
            .content_details
            .as_ref()
            .ok_or(EnrichmentError::MissingContentDetails)?;
        let duration = parse_iso8601_duration(&content_details.duration)?;

        let empty = Statistics::default();
        let stats = item.statistics.as_ref().unwrap_or(&empty);

        Ok(Details {
            duration,
            view_count: parse_statistic("viewCount", stats.view_count.as_deref())?,
            like_count: parse_statistic("likeCount", stats.like_count.as_deref())?,
            comment_count: parse_statistic("commentCount", stats.comment_count.as_deref())?,
            favorite_count: parse_statistic("favoriteCount", stats.favorite_count.as_deref())?,
        })
    }
}

fn parse_statistic(field: &'static str, value: Option<&str>) -> Result<u64, EnrichmentError> {
    match value {
        None => Ok(0),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| EnrichmentError::InvalidStatistic {
                field,
                value: raw.to_string(),
            }),
    }
}
