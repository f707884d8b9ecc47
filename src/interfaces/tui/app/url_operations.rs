//! URL operations: list, shorten, delete, copy, resolve
//!
//! Key handlers only queue a [`PendingRequest`]; the event loop draws the
//! loading state and then calls [`App::run_pending`].

use tracing::debug;

use super::state::{App, CurrentScreen, PendingRequest, ResolvedTarget};
use crate::models::CreationRequest;
use crate::services::FlowOutcome;

impl App {
    /// Log the action and surface the notice of a finished flow
    fn report<T>(&mut self, outcome: &FlowOutcome<T>) {
        self.action_log.log(outcome.action.clone());
        if let Some(notice) = &outcome.notice {
            self.show_notice(notice.clone());
        }
    }

    /// Queue a request, replacing one that has not started yet
    pub fn queue(&mut self, request: PendingRequest) {
        debug!("Queued request: {:?}", request);
        self.pending = Some(request);
    }

    pub fn request_refresh(&mut self) {
        self.queue(PendingRequest::Refresh);
    }

    /// Run the queued request, if any; `is_loading` stays true until it ends
    pub async fn run_pending(&mut self) {
        let Some(request) = self.pending.clone() else {
            return;
        };
        match request {
            PendingRequest::Refresh => self.refresh().await,
            PendingRequest::Shorten(request) => self.shorten_now(&request).await,
            PendingRequest::Delete(shortened_url) => self.delete_now(&shortened_url).await,
            PendingRequest::Resolve(identifier) => self.resolve_now(identifier).await,
        }
        self.pending = None;
    }

    /// Fetch the current page and replace the list
    pub async fn refresh(&mut self) {
        let page = self.cursor.current_page;
        let size = self.cursor.page_size;

        let outcome = self.service.fetch_page(page, size).await;

        self.report(&outcome);
        if let Ok(records) = outcome.result {
            self.cursor.record_fetch(records.len());
            self.records = records;
            self.clamp_selection();
        }
    }

    /// Validate the form and queue it; stays on the form when invalid
    pub fn submit_shorten(&mut self) {
        if !self.validate_form() {
            debug!("Shorten form rejected locally");
            return;
        }
        match self.form.to_input().to_request() {
            Ok(request) => self.queue(PendingRequest::Shorten(request)),
            Err(e) => self.form.set_error(e.field().into(), e.to_string()),
        }
    }

    async fn shorten_now(&mut self, request: &CreationRequest) {
        let outcome = self.service.shorten(request).await;

        self.report(&outcome);
        if let Ok(link) = outcome.result {
            self.last_shortened = Some(link);
            self.form.clear();
            self.current_screen = CurrentScreen::Main;
            self.cursor.reset();
            // 列表刷新成功时没有提示，成功消息保持显示
            self.refresh().await;
        }
    }

    /// Queue deletion of the highlighted row
    pub fn delete_selected(&mut self) {
        match self
            .get_selected_record()
            .map(|r| r.shortened_url.clone())
        {
            Some(shortened_url) => self.queue(PendingRequest::Delete(shortened_url)),
            None => self.set_error("No URL selected"),
        }
    }

    async fn delete_now(&mut self, shortened_url: &str) {
        let outcome = self.service.delete(shortened_url).await;

        self.report(&outcome);
        if outcome.is_ok() {
            self.records.retain(|r| r.shortened_url != shortened_url);
            self.clamp_selection();
            self.cursor.reset();
            self.refresh().await;
        }
    }

    /// Copy the shareable link of the highlighted row
    pub fn copy_selected(&mut self) {
        match self
            .get_selected_record()
            .map(|r| r.shortened_url.clone())
        {
            Some(identifier) => self.copy_short_url(&identifier),
            None => self.set_error("No URL selected"),
        }
    }

    /// Copy the link returned by the last successful shorten
    pub fn copy_last_shortened(&mut self) {
        match self.last_shortened.as_ref().map(|l| l.identifier.clone()) {
            Some(identifier) => self.copy_short_url(&identifier),
            None => self.set_error("Nothing shortened yet"),
        }
    }

    fn copy_short_url(&mut self, identifier: &str) {
        let link = self.service.share_link(identifier);
        match self.clipboard.set_text(&link) {
            Ok(()) => {
                self.action_log.log(format!("Copied short URL: {}", identifier));
                self.set_status(format!("Copied! {}", link));
            }
            Err(e) => {
                self.action_log.log(format!("Failed to copy URL: {}", e.message()));
                self.set_error(e.format_simple());
            }
        }
    }

    /// Queue a redirect lookup for the highlighted row
    pub fn resolve_selected(&mut self) {
        match self
            .get_selected_record()
            .map(|r| r.shortened_url.clone())
        {
            Some(identifier) => self.queue(PendingRequest::Resolve(identifier)),
            None => self.set_error("No URL selected"),
        }
    }

    async fn resolve_now(&mut self, identifier: String) {
        let outcome = self.service.resolve(&identifier).await;

        self.report(&outcome);
        if let Ok(target) = outcome.result {
            self.resolved = Some(ResolvedTarget { identifier, target });
        }
    }
}
