//! Stack navigation between screens.
//!
//! Mirrors a native stack navigator: `navigate` returns to a route already
//! on the stack (unmounting everything above it) or mounts a new screen on
//! top; `go_back` pops the top screen but never the root.

use crate::models::Route;

/// A navigation request raised by a screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Navigate(Route),
    GoBack,
}

/// Anything that lives on the navigation stack
pub trait Routed {
    fn route(&self) -> Route;
}

/// Stack of mounted screens; the current screen is always present
#[derive(Clone, Debug)]
pub struct Navigator<S> {
    below: Vec<S>,
    current: S,
}

impl<S: Routed> Navigator<S> {
    pub fn new(root: S) -> Self {
        Navigator {
            below: Vec::new(),
            current: root,
        }
    }

    pub fn current(&self) -> &S {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut S {
        &mut self.current
    }

    pub fn depth(&self) -> usize {
        self.below.len() + 1
    }

    /// All mounted screens, bottom first
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.below.iter().chain(std::iter::once(&self.current))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut S> {
        self.below.iter_mut().chain(std::iter::once(&mut self.current))
    }

    pub fn routes(&self) -> Vec<Route> {
        self.iter().map(Routed::route).collect()
    }

    /// Go to `route`, returning the screens that were unmounted
    pub fn navigate(&mut self, route: Route, mount: impl FnOnce(Route) -> S) -> Vec<S> {
        if self.current.route() == route {
            return Vec::new();
        }

        match self.below.iter().rposition(|s| s.route() == route) {
            Some(pos) => {
                let mut unmounted: Vec<S> = self.below.drain(pos + 1..).collect();
                if let Some(target) = self.below.pop() {
                    unmounted.push(std::mem::replace(&mut self.current, target));
                }
                unmounted
            }
            None => {
                let previous = std::mem::replace(&mut self.current, mount(route));
                self.below.push(previous);
                Vec::new()
            }
        }
    }

    /// Pop the current screen, returning it; no-op at the root
    pub fn go_back(&mut self) -> Option<S> {
        let previous = self.below.pop()?;
        Some(std::mem::replace(&mut self.current, previous))
    }

    pub fn apply(&mut self, action: NavAction, mount: impl FnOnce(Route) -> S) -> Vec<S> {
        match action {
            NavAction::Navigate(route) => self.navigate(route, mount),
            NavAction::GoBack => self.go_back().into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Page(Route, u32);

    impl Routed for Page {
        fn route(&self) -> Route {
            self.0
        }
    }

    #[test]
    fn test_navigate_pushes_new_route() {
        let mut nav = Navigator::new(Page(Route::Login, 0));
        let unmounted = nav.navigate(Route::SignUp, |r| Page(r, 1));
        assert!(unmounted.is_empty());
        assert_eq!(nav.routes(), vec![Route::Login, Route::SignUp]);
    }

    #[test]
    fn test_go_back_pops_but_not_root() {
        let mut nav = Navigator::new(Page(Route::Login, 0));
        nav.navigate(Route::SignUp, |r| Page(r, 1));
        assert_eq!(nav.go_back(), Some(Page(Route::SignUp, 1)));
        assert_eq!(nav.go_back(), None);
        assert_eq!(nav.current(), &Page(Route::Login, 0));
    }

    #[test]
    fn test_navigate_to_existing_route_unmounts_above() {
        let mut nav = Navigator::new(Page(Route::Login, 0));
        nav.navigate(Route::SignUp, |r| Page(r, 1));
        nav.navigate(Route::Otp, |r| Page(r, 2));

        let unmounted = nav.navigate(Route::Login, |r| Page(r, 99));
        assert_eq!(unmounted, vec![Page(Route::SignUp, 1), Page(Route::Otp, 2)]);
        assert_eq!(nav.current(), &Page(Route::Login, 0));
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_navigate_to_current_is_noop() {
        let mut nav = Navigator::new(Page(Route::Login, 0));
        assert!(nav.navigate(Route::Login, |r| Page(r, 5)).is_empty());
        assert_eq!(nav.current(), &Page(Route::Login, 0));
    }

    #[test]
    fn test_remount_after_pop_is_fresh() {
        let mut nav = Navigator::new(Page(Route::Login, 0));
        nav.navigate(Route::SignUp, |r| Page(r, 1));
        nav.apply(NavAction::GoBack, |r| Page(r, 0));
        nav.navigate(Route::SignUp, |r| Page(r, 2));
        assert_eq!(nav.current(), &Page(Route::SignUp, 2));
    }
}
