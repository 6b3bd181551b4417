//! Recording test doubles for the signup services.

#![allow(dead_code)]

use async_trait::async_trait;
use linkdash_forms::{FormState, InputChange, ProfilePicture, SignupRequest};
use linkdash_pages::{
	AuthError, AuthService, Navigator, SessionRefresher, SignedUpUser, SignupDeps,
};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::{Notify, Semaphore};

pub const WAIT: Duration = Duration::from_secs(2);

/// Auth service returning a fixed response, optionally held until released.
pub struct MockAuth {
	response: Mutex<Result<SignedUpUser, AuthError>>,
	requests: Mutex<Vec<SignupRequest>>,
	gate: Option<Arc<Semaphore>>,
}

impl MockAuth {
	pub fn succeeding() -> Self {
		Self {
			response: Mutex::new(Ok(user())),
			requests: Mutex::new(Vec::new()),
			gate: None,
		}
	}

	pub fn failing(message: &str) -> Self {
		Self {
			response: Mutex::new(Err(AuthError::new(message))),
			requests: Mutex::new(Vec::new()),
			gate: None,
		}
	}

	/// Holds every call until a permit is added to `gate`.
	pub fn gated(mut self, gate: Arc<Semaphore>) -> Self {
		self.gate = Some(gate);
		self
	}

	/// Changes the response of later calls.
	pub fn respond_with(&self, response: Result<SignedUpUser, AuthError>) {
		*self.response.lock() = response;
	}

	pub fn calls(&self) -> usize {
		self.requests.lock().len()
	}

	pub fn requests(&self) -> Vec<SignupRequest> {
		self.requests.lock().clone()
	}
}

#[async_trait]
impl AuthService for MockAuth {
	async fn signup(&self, request: SignupRequest) -> Result<SignedUpUser, AuthError> {
		self.requests.lock().push(request);
		if let Some(gate) = &self.gate {
			let permit = gate
				.acquire()
				.await
				.map_err(|e| AuthError::new(e.to_string()))?;
			permit.forget();
		}
		self.response.lock().clone()
	}
}

#[derive(Default)]
pub struct RecordingNavigator {
	visits: Mutex<Vec<String>>,
	visited: Notify,
}

impl RecordingNavigator {
	pub fn visits(&self) -> Vec<String> {
		self.visits.lock().clone()
	}

	/// Waits for the next navigation, failing the test after [`WAIT`].
	pub async fn wait_for_visit(&self) {
		tokio::time::timeout(WAIT, self.visited.notified())
			.await
			.expect("no navigation happened");
	}
}

impl Navigator for RecordingNavigator {
	fn navigate(&self, location: &str) {
		self.visits.lock().push(location.to_string());
		self.visited.notify_one();
	}
}

#[derive(Default)]
pub struct CountingSession {
	refreshes: AtomicUsize,
	refreshed: Notify,
}

impl CountingSession {
	pub fn refreshes(&self) -> usize {
		self.refreshes.load(Ordering::SeqCst)
	}

	pub async fn wait_for_refresh(&self) {
		tokio::time::timeout(WAIT, self.refreshed.notified())
			.await
			.expect("session was not refreshed");
	}
}

#[async_trait]
impl SessionRefresher for CountingSession {
	async fn refresh_user(&self) {
		self.refreshes.fetch_add(1, Ordering::SeqCst);
		self.refreshed.notify_one();
	}
}

pub struct Harness {
	pub auth: Arc<MockAuth>,
	pub navigator: Arc<RecordingNavigator>,
	pub session: Arc<CountingSession>,
}

impl Harness {
	pub fn new(auth: MockAuth) -> Self {
		Self {
			auth: Arc::new(auth),
			navigator: Arc::new(RecordingNavigator::default()),
			session: Arc::new(CountingSession::default()),
		}
	}

	pub fn deps(&self) -> SignupDeps {
		SignupDeps::new(
			self.auth.clone(),
			self.session.clone(),
			self.navigator.clone(),
		)
	}
}

pub fn user() -> SignedUpUser {
	SignedUpUser {
		id: "usr_1".to_string(),
		name: "Ada Lovelace".to_string(),
		email: "ada@example.com".to_string(),
		profile_pic_url: Some("https://cdn.example.com/ada.png".to_string()),
	}
}

pub fn avatar() -> ProfilePicture {
	ProfilePicture::new("ada.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47])
}

/// Input changes that fill the form with valid values.
pub fn valid_changes() -> Vec<InputChange> {
	vec![
		InputChange::text("name", "Ada Lovelace"),
		InputChange::text("email", "ada@example.com"),
		InputChange::text("password", "analytical"),
		InputChange::files("profile_pic", vec![avatar()]),
	]
}

pub fn valid_form() -> FormState {
	let mut form = FormState::new();
	for change in valid_changes() {
		form.apply(change).expect("valid change");
	}
	form
}

/// Polls `condition` until it holds, failing the test after [`WAIT`].
pub async fn eventually(mut condition: impl FnMut() -> bool) {
	tokio::time::timeout(WAIT, async {
		while !condition() {
			tokio::time::sleep(Duration::from_millis(5)).await;
		}
	})
	.await
	.expect("condition did not hold in time");
}
