use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use bytes::Bytes;
use fibload_lib::config::Config;
use fibload_lib::config::RouteLayout;
use fibload_lib::constants::COMPUTE_STACK_SIZE;
use fibload_lib::constants::COMPUTE_THREAD_NAME;
use fibload_lib::constants::INTERNAL_ERROR_MESSAGE;
use fibload_lib::constants::NOT_FOUND_MESSAGE;
use fibload_lib::constants::PROFILE_ROUTE;
use fibload_lib::constants::ROOT_ROUTE;
use fibload_lib::constants::SEQUENCE_REGION;
use fibload_lib::constants::SEQUENCE_ROUTE;
use fibload_lib::constants::SEQUENCE_TASK;
use fibload_lib::constants::TERM_REGION;
use fibload_lib::constants::TERM_ROUTE;
use fibload_lib::constants::TERM_TASK;
use fibload_lib::constants::TEXT_PLAIN;
use fibload_lib::constants::TIMEOUT_MESSAGE;
use fibload_lib::fibonacci::compute_sequence_report;
use fibload_lib::fibonacci::compute_term;
use fibload_lib::measurement::measure;
use fibload_lib::measurement::Profile;
use fibload_lib::measurement::Task;
use http_body_util::Full;
use hyper::header::HeaderValue;
use hyper::header::CONTENT_TYPE;
use hyper::Response;
use hyper::StatusCode;
use hyper::Uri;
use log::debug;
use log::error;
use log::warn;
use tokio::sync::oneshot;
use tokio::time::timeout;

use super::profile::format_profile;
use super::query::parse_index;

/// What a path is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// A single term, `compute_term`.
    Term,

    /// The full report, `compute_sequence_report`.
    Sequence,

    /// The accumulated profile table.
    Profile,
}

/// The route table and everything a handler needs.
///
/// Built once at startup and shared with every connection.
#[derive(Debug)]
pub struct Router {
    routes: BTreeMap<&'static str, Route>,
    fallback: Option<Route>,
    profile: Option<Arc<Profile>>,
    compute_timeout: Option<Duration>,
}

impl Router {
    /// Build the route table for the configured layout.
    pub fn from_config(config: &Config) -> Self {
        let mut routes = BTreeMap::new();

        // The single layout answers the report on every path not bound
        // otherwise, `/` included.
        let fallback = match config.layout {
            RouteLayout::Split => {
                routes.insert(TERM_ROUTE, Route::Term);
                routes.insert(SEQUENCE_ROUTE, Route::Sequence);
                None
            }
            RouteLayout::Single => {
                routes.insert(ROOT_ROUTE, Route::Sequence);
                Some(Route::Sequence)
            }
        };

        let profile = if config.profiling {
            routes.insert(PROFILE_ROUTE, Route::Profile);
            Some(Arc::new(Profile::default()))
        } else {
            None
        };

        Router {
            routes,
            fallback,
            profile,
            compute_timeout: config.compute_timeout,
        }
    }

    /// The route bound to `path`: an exact match first, then the
    /// layout's fallback.
    pub fn route(&self, path: &str) -> Option<Route> {
        self.routes.get(path).copied().or(self.fallback)
    }

    /// The bound paths, in order.
    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.keys().copied()
    }

    /// Answer a request for `uri`. Never fails: every problem becomes a
    /// response with the matching status.
    pub async fn handle(&self, uri: &Uri) -> Response<Full<Bytes>> {
        match self.route(uri.path()) {
            Some(Route::Term) => {
                self.compute(uri, TERM_TASK, TERM_REGION, |n| {
                    compute_term(n).to_string()
                })
                .await
            }
            Some(Route::Sequence) => {
                self.compute(uri, SEQUENCE_TASK, SEQUENCE_REGION, compute_sequence_report)
                    .await
            }
            Some(Route::Profile) => {
                let regions = self
                    .profile
                    .as_ref()
                    .map(|profile| profile.snapshot())
                    .unwrap_or_default();
                text(StatusCode::OK, format_profile(&regions))
            }
            None => {
                debug!("No route for {:?}", uri.path());
                text(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
            }
        }
    }

    /// Validate the index, run `operation` on a dedicated thread within a
    /// task and turn the outcome into a response.
    ///
    /// The thread gets [COMPUTE_STACK_SIZE] of stack, the recursion is as
    /// deep as n.
    async fn compute(
        &self,
        uri: &Uri,
        task_name: &'static str,
        region: &'static str,
        operation: fn(i64) -> String,
    ) -> Response<Full<Bytes>> {
        let task = Task::new(task_name, self.profile.clone());

        let n = match parse_index(uri.query()) {
            Ok(n) => n,
            Err(invalid) => {
                debug!("Rejected {uri}: {invalid}");
                return text(StatusCode::BAD_REQUEST, invalid.to_string());
            }
        };

        task.log("n value", n);

        let (sender, work) = oneshot::channel();

        let spawned = thread::Builder::new()
            .name(COMPUTE_THREAD_NAME.to_string())
            .stack_size(COMPUTE_STACK_SIZE)
            .spawn(move || {
                // The receiver is gone once the request timed out.
                let _ = sender.send(measure(|| operation(n)));
            });

        if let Err(spawn_error) = spawned {
            error!("Could not start {} for n = {n}: {spawn_error}", task.name());
            return text(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE);
        }

        let received = match self.compute_timeout {
            Some(limit) => match timeout(limit, work).await {
                Ok(received) => received,
                Err(_) => {
                    warn!("{} for n = {n} did not finish within {limit:?}", task.name());
                    return text(StatusCode::SERVICE_UNAVAILABLE, TIMEOUT_MESSAGE);
                }
            },
            None => work.await,
        };

        match received {
            Ok((body, measurement)) => {
                task.record(region, &measurement);
                text(StatusCode::OK, body)
            }
            Err(_) => {
                error!("{} for n = {n} died before answering", task.name());
                text(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}

/// A plain text response.
fn text(status: StatusCode, body: impl Into<String>) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(body.into())));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN));
    response
}

#[cfg(test)]
#[path = "tests/router.rs"]
mod tests;
