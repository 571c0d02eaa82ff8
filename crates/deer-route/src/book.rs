//! All routes of a run.

use deer_core::RouteId;

use crate::{Route, RouteError, RouteResult};

/// The routes built for the distribution phase, indexed by `RouteId`.
#[derive(Clone, Debug, Default)]
pub struct RouteBook {
    routes: Vec<Route>,
}

impl RouteBook {
    /// Wrap routes produced by [`build_routes`][crate::build_routes]; their
    /// ids must equal their position.
    pub fn new(routes: Vec<Route>) -> Self {
        debug_assert!(routes.iter().enumerate().all(|(i, r)| r.id.index() == i));
        Self { routes }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Route> {
        self.routes.iter_mut()
    }

    pub fn get(&self, id: RouteId) -> RouteResult<&Route> {
        self.routes.get(id.index()).ok_or(RouteError::RouteNotFound(id))
    }

    pub fn get_mut(&mut self, id: RouteId) -> RouteResult<&mut Route> {
        self.routes.get_mut(id.index()).ok_or(RouteError::RouteNotFound(id))
    }

    /// Claim the first unclaimed route, or `None` if all are taken.
    pub fn claim_next(&mut self) -> RouteResult<Option<RouteId>> {
        match self.routes.iter_mut().find(|r| !r.is_claimed()) {
            Some(route) => {
                route.claim()?;
                Ok(Some(route.id))
            }
            None => Ok(None),
        }
    }

    pub fn unclaimed_count(&self) -> usize {
        self.routes.iter().filter(|r| !r.is_claimed()).count()
    }

    pub fn all_finished(&self) -> bool {
        self.routes.iter().all(Route::is_finished)
    }

    /// Delivered stops across all routes.
    pub fn delivered_count(&self) -> usize {
        self.routes
            .iter()
            .map(|r| r.len() - r.remaining_count())
            .sum()
    }
}
