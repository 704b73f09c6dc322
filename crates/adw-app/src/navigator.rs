// File: src/navigator.rs
// Purpose: Hash navigation: match, dispatch, discard stale renders

use crate::dispatcher::Dispatcher;
use crate::error::DispatchError;
use crate::region::ContentRegion;
use crate::source::ContentSource;
use adw_router::{RouteMatch, RouteTable};
use std::cell::Cell;
use std::collections::HashMap;

/// Result of one navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The view was rendered into the content region
    Rendered {
        view: String,
        params: HashMap<String, String>,
    },
    /// The view has no renderer; the region was left alone
    Unchanged { view: String },
    /// No route matched; the not-found fragment was rendered
    NotFound,
    /// A newer navigation started while this one was loading
    Superseded,
}

/// Drives the content region from hash changes
///
/// Each navigation takes a generation number. A render that finishes after
/// a newer navigation has started is dropped, so a slow fetch never
/// overwrites the current view. In-flight fetches are not cancelled.
pub struct Navigator<S, R> {
    table: RouteTable,
    dispatcher: Dispatcher<S>,
    region: R,
    generation: Cell<u64>,
}

impl<S: ContentSource, R: ContentRegion> Navigator<S, R> {
    pub fn new(table: RouteTable, dispatcher: Dispatcher<S>, region: R) -> Self {
        Self {
            table,
            dispatcher,
            region,
            generation: Cell::new(0),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn dispatcher(&self) -> &Dispatcher<S> {
        &self.dispatcher
    }

    pub fn region(&self) -> &R {
        &self.region
    }

    pub fn resolve(&self, hash: &str) -> Option<RouteMatch> {
        self.table.match_path(hash)
    }

    pub async fn navigate(&self, hash: &str) -> Result<Outcome, DispatchError> {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let Some(found) = self.resolve(hash) else {
            tracing::debug!("No route for '{}'", hash);
            self.region.replace(&self.dispatcher.not_found());
            return Ok(Outcome::NotFound);
        };

        tracing::debug!("'{}' resolved to {} via {}", hash, found.view, found.pattern);
        let rendered = self.dispatcher.render(&found.view, &found.params).await;

        if self.generation.get() != generation {
            tracing::debug!("Dropping stale render of '{}'", found.view);
            return Ok(Outcome::Superseded);
        }

        match rendered {
            Ok(Some(html)) => {
                self.region.replace(&html);
                Ok(Outcome::Rendered {
                    view: found.view,
                    params: found.params,
                })
            }
            Ok(None) => Ok(Outcome::Unchanged { view: found.view }),
            Err(err) => {
                tracing::error!("Failed to render '{}': {}", found.view, err);
                Err(err)
            }
        }
    }
}
