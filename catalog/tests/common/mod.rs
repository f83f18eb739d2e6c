//! Scripted in-memory YouTube API for pipeline tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use tube_catalog::models::{
    ContentDetails, SearchItem, SearchItemId, SearchListResponse, Snippet, Statistics, Thumbnail,
    Thumbnails, VideoItem, VideoListResponse,
};
use tube_catalog::{CatalogError, SearchRequest, VideoApi, VideoLookupRequest};

enum Pages {
    /// Served in order; an exhausted script answers with an empty last page.
    Scripted(VecDeque<SearchListResponse>),
    /// Every page is full and points to another one.
    Endless { per_page: usize },
}

pub struct ScriptedApi {
    pages: RefCell<Pages>,
    details: HashMap<String, VideoItem>,
    extra_details: Vec<VideoItem>,
    fail_search_call: Option<usize>,
    pub search_calls: RefCell<Vec<SearchRequest>>,
    pub lookup_calls: RefCell<Vec<Vec<String>>>,
}

impl ScriptedApi {
    pub fn new(pages: Vec<SearchListResponse>) -> Self {
        Self::with_pages(Pages::Scripted(pages.into()))
    }

    pub fn endless(per_page: usize) -> Self {
        Self::with_pages(Pages::Endless { per_page })
    }

    fn with_pages(pages: Pages) -> Self {
        ScriptedApi {
            pages: RefCell::new(pages),
            details: HashMap::new(),
            extra_details: Vec::new(),
            fail_search_call: None,
            search_calls: RefCell::new(Vec::new()),
            lookup_calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_details(mut self, items: Vec<VideoItem>) -> Self {
        for item in items {
            self.details.insert(item.id.clone(), item);
        }
        self
    }

    /// Items returned with every lookup regardless of the ids asked for.
    pub fn with_extra_details(mut self, items: Vec<VideoItem>) -> Self {
        self.extra_details = items;
        self
    }

    /// Make the n-th search call (zero based) fail with a transport error.
    pub fn failing_search_call(mut self, call: usize) -> Self {
        self.fail_search_call = Some(call);
        self
    }

    pub fn search_count(&self) -> usize {
        self.search_calls.borrow().len()
    }

    pub fn lookup_batches(&self) -> Vec<Vec<String>> {
        self.lookup_calls.borrow().clone()
    }
}

impl VideoApi for ScriptedApi {
    async fn search(&self, request: &SearchRequest) -> Result<SearchListResponse, CatalogError> {
        let call = self.search_calls.borrow().len();
        self.search_calls.borrow_mut().push(request.clone());

        if self.fail_search_call == Some(call) {
            return Err(CatalogError::Transport("connection reset".to_string()));
        }

        let mut pages = self.pages.borrow_mut();
        let page = match &mut *pages {
            Pages::Scripted(queue) => queue.pop_front().unwrap_or_default(),
            Pages::Endless { per_page } => {
                let ids: Vec<String> = (0..*per_page).map(|i| format!("p{call}-{i}")).collect();
                let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
                let token = format!("token-{}", call + 1);
                page(&ids, Some(token.as_str()))
            }
        };
        Ok(page)
    }

    async fn videos(&self, request: &VideoLookupRequest) -> Result<VideoListResponse, CatalogError> {
        self.lookup_calls.borrow_mut().push(request.ids.clone());

        let mut items: Vec<VideoItem> = request
            .ids
            .iter()
            .filter_map(|id| self.details.get(id).cloned())
            .collect();
        items.extend(self.extra_details.iter().cloned());
        Ok(VideoListResponse { items })
    }
}

pub fn search_item(id: &str) -> SearchItem {
    SearchItem {
        id: SearchItemId {
            video_id: Some(id.to_string()),
        },
        snippet: Some(Snippet {
            title: format!("Video {id}"),
            description: String::new(),
            channel_title: "Channel".to_string(),
            channel_id: "UCchannel".to_string(),
            published_at: Some("2022-03-04T05:06:07Z".to_string()),
            thumbnails: Thumbnails {
                default: Some(Thumbnail {
                    url: format!("https://i.ytimg.com/vi/{id}/default.jpg"),
                }),
            },
        }),
    }
}

pub fn page(ids: &[&str], next_page_token: Option<&str>) -> SearchListResponse {
    SearchListResponse {
        items: ids.iter().map(|id| search_item(id)).collect(),
        next_page_token: next_page_token.map(String::from),
    }
}

pub fn details(id: &str, duration: &str) -> VideoItem {
    VideoItem {
        id: id.to_string(),
        content_details: Some(ContentDetails {
            duration: duration.to_string(),
        }),
        statistics: Some(Statistics {
            view_count: Some("1000".to_string()),
            like_count: Some("50".to_string()),
            comment_count: Some("7".to_string()),
            favorite_count: Some("0".to_string()),
        }),
    }
}
