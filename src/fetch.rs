//! Fetch/display state for values produced by asynchronous requests.
//!
//! A [`FetchMachine`] owns one displayed value. Every request is tagged with a
//! [`RequestToken`] so that responses arriving after a newer selection can be
//! told apart from the one the user is waiting on.

use std::fmt::Display;

use log::{debug, error};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FetchState<T> {
	/// Nothing requested yet, or explicitly reset.
	#[default]
	Empty,
	Loading,
	Ready(T),
	/// The last request failed; carries a human-readable reason.
	Failed(String),
}

impl<T> FetchState<T> {
	pub fn value(&self) -> Option<&T> {
		match self {
			FetchState::Ready(value) => Some(value),
			_ => None,
		}
	}

	pub fn is_loading(&self) -> bool {
		matches!(self, FetchState::Loading)
	}

	pub fn error(&self) -> Option<&str> {
		match self {
			FetchState::Failed(reason) => Some(reason),
			_ => None,
		}
	}
}

/// Identity of one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// How late responses are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResolvePolicy {
	/// Only the most recently issued request may change the state.
	#[default]
	LatestSelection,
	/// Every response is applied in arrival order, stale or not.
	LastWriteWins,
}

/// Whether a response changed the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
	Applied,
	Stale,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FetchMachine<T> {
	state: FetchState<T>,
	policy: ResolvePolicy,
	key: Option<String>,
	issued: u64,
}

impl<T> Default for FetchMachine<T> {
	fn default() -> Self {
		Self::new(ResolvePolicy::default())
	}
}

impl<T> FetchMachine<T> {
	pub fn new(policy: ResolvePolicy) -> Self {
		Self {
			state: FetchState::Empty,
			policy,
			key: None,
			issued: 0,
		}
	}

	pub fn state(&self) -> &FetchState<T> {
		&self.state
	}

	pub fn value(&self) -> Option<&T> {
		self.state.value()
	}

	pub fn is_loading(&self) -> bool {
		self.state.is_loading()
	}

	/// Key of the latest request, e.g. the selected company's name.
	pub fn key(&self) -> Option<&str> {
		self.key.as_deref()
	}

	/// Start a request for `key`. The displayed value is dropped right away,
	/// not when the response arrives.
	pub fn begin(&mut self, key: impl Into<String>) -> RequestToken {
		self.issued += 1;
		let token = RequestToken(self.issued);
		let key = key.into();
		debug!("fetch begin: key={key:?} token={}", token.0);
		self.key = Some(key);
		self.state = FetchState::Loading;
		token
	}

	/// Apply the outcome of the request identified by `token`.
	pub fn resolve<E: Display>(&mut self, token: RequestToken, outcome: Result<T, E>) -> Resolution {
		let current = token.0 == self.issued;
		if !current && self.policy == ResolvePolicy::LatestSelection {
			debug!(
				"fetch discarded: token={} superseded by {} (key={:?})",
				token.0, self.issued, self.key
			);
			return Resolution::Stale;
		}
		self.state = match outcome {
			Ok(value) => FetchState::Ready(value),
			Err(err) => {
				error!("fetch failed: key={:?} token={}: {err}", self.key, token.0);
				FetchState::Failed(err.to_string())
			}
		};
		Resolution::Applied
	}

	/// Back to `Empty`; responses to anything issued so far become stale.
	pub fn reset(&mut self) {
		self.issued += 1;
		self.key = None;
		self.state = FetchState::Empty;
	}
}
