//! Path routing.
//!
//! The route table is compiled once when the [`Router`] is built and then
//! shared read-only between every connection task.

pub mod handlers;

use std::path::{Path, PathBuf};

use anyhow::Context;
use regex::Regex;

use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};

/// Which handler a route dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Root,
    UserAgent,
    Echo,
    File,
}

/// Route table in precedence order: the first pattern that matches wins.
const ROUTES: &[(&str, Handler)] = &[
    (r"^/$", Handler::Root),
    (r"^/user-agent$", Handler::UserAgent),
    (r"^/echo/([A-Za-z0-9/-]+)$", Handler::Echo),
    (r"^/files/([A-Za-z0-9._-]+)$", Handler::File),
];

/// A compiled path pattern bound to a handler.
#[derive(Debug)]
pub struct Route {
    pattern: Regex,
    handler: Handler,
}

impl Route {
    fn compile(pattern: &str, handler: Handler) -> anyhow::Result<Self> {
        let pattern = Regex::new(pattern)
            .with_context(|| format!("invalid route pattern {pattern:?}"))?;
        Ok(Self { pattern, handler })
    }

    /// Returns the first capture group (if the pattern has one) on a match.
    fn matches<'p>(&self, path: &'p str) -> Option<Option<&'p str>> {
        self.pattern
            .captures(path)
            .map(|caps| caps.get(1).map(|m| m.as_str()))
    }
}

/// Outcome of matching a path against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMatch<'p> {
    pub handler: Handler,
    pub capture: Option<&'p str>,
}

#[derive(Debug)]
pub struct Router {
    routes: Vec<Route>,
    directory: PathBuf,
}

impl Router {
    /// Compiles the route table. `directory` is the base for file requests.
    pub fn new(directory: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let routes = ROUTES
            .iter()
            .map(|(pattern, handler)| Route::compile(pattern, *handler))
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self {
            routes,
            directory: directory.into(),
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Finds the first route matching `path`. `None` means the default route.
    pub fn resolve<'p>(&self, path: &'p str) -> Option<RouteMatch<'p>> {
        self.routes.iter().find_map(|route| {
            route.matches(path).map(|capture| RouteMatch {
                handler: route.handler,
                capture,
            })
        })
    }

    /// Produces the response for `req`.
    pub async fn dispatch(&self, req: &Request) -> Response {
        if req.method != Method::GET {
            tracing::warn!(method = req.method.as_str(), "Method not supported");
            return Response::empty(StatusCode::MethodNotAllowed);
        }

        let Some(matched) = self.resolve(&req.path) else {
            tracing::warn!(path = %req.path, "Path not found");
            return handlers::not_found();
        };

        tracing::debug!(path = %req.path, handler = ?matched.handler, "Matched route");

        let capture = matched.capture.unwrap_or_default();
        match matched.handler {
            Handler::Root => handlers::root(),
            Handler::UserAgent => handlers::user_agent(req),
            Handler::Echo => handlers::echo(capture),
            Handler::File => handlers::file(&self.directory, capture).await,
        }
    }
}
