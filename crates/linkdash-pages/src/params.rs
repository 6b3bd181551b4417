//! Query parameters captured when the signup page mounts.

/// Name of the query parameter carried from the signup page to the dashboard.
pub const CARRY_PARAM: &str = "createNew";

/// The carried query parameter, read once at mount.
///
/// A visitor who arrives with `?createNew=<url>` wanted to shorten a link
/// before having an account; the value is forwarded to the dashboard so the
/// link can be created right after signup.
///
/// # Examples
///
/// ```
/// use linkdash_pages::LaunchParams;
///
/// let params = LaunchParams::from_query("?createNew=abc", "createNew");
/// assert_eq!(params.destination("/dashboard"), "/dashboard?createNew=abc");
///
/// let params = LaunchParams::from_query("", "createNew");
/// assert_eq!(params.destination("/dashboard"), "/dashboard?");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchParams {
	param: String,
	value: Option<String>,
}

impl LaunchParams {
	/// Reads the first value of `param` from a query string, with or without
	/// the leading `?`. Empty values count as absent.
	pub fn from_query(query: &str, param: &str) -> Self {
		let query = query.strip_prefix('?').unwrap_or(query);
		let value = match serde_urlencoded::from_str::<Vec<(String, String)>>(query) {
			Ok(pairs) => pairs
				.into_iter()
				.find(|(key, _)| key == param)
				.map(|(_, value)| value),
			Err(error) => {
				tracing::warn!(%error, "ignoring malformed query string");
				None
			}
		};

		Self {
			param: param.to_string(),
			value: value.filter(|v| !v.is_empty()),
		}
	}

	/// Parameters without a carried value.
	pub fn empty(param: &str) -> Self {
		Self {
			param: param.to_string(),
			value: None,
		}
	}

	/// The carried value, decoded.
	pub fn value(&self) -> Option<&str> {
		self.value.as_deref()
	}

	/// `base` followed by `?` and, when a value was carried, `param=value`
	/// with the value percent-encoded.
	pub fn destination(&self, base: &str) -> String {
		match &self.value {
			Some(value) => format!("{base}?{}={}", self.param, urlencoding::encode(value)),
			None => format!("{base}?"),
		}
	}
}
