//! Provider registry: the static catalog of log-delivery providers.
//!
//! Pure lookups over process-wide immutable tables. No I/O.

use serde::Serialize;

use crate::domain::error::SetupError;

/// A supported log-delivery provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Provider {
    /// Unique identifier, e.g. `"datadog"`.
    pub slug: &'static str,
    /// Human-readable name shown in the selection prompt.
    pub name: &'static str,
    /// `true` when the provider is provisioned as a managed add-on and needs
    /// no user-supplied credentials.
    pub auto: bool,
    /// Secrets the shipper needs for this provider.
    pub required_vars: &'static [&'static str],
    /// Secrets the shipper accepts but does not need.
    pub optional_vars: &'static [&'static str],
}

impl Provider {
    /// Every variable this provider declares, required first.
    pub fn all_vars(&self) -> impl Iterator<Item = &'static str> {
        self.required_vars
            .iter()
            .chain(self.optional_vars.iter())
            .copied()
    }

    /// Whether `key` is one of this provider's declared variables.
    #[must_use]
    pub fn declares(&self, key: &str) -> bool {
        self.all_vars().any(|v| v == key)
    }

    /// Secret key that carries an automatically provisioned add-on token.
    #[must_use]
    pub fn token_secret_key(&self) -> String {
        format!("{}_TOKEN", self.slug.to_ascii_uppercase())
    }
}

const fn provider(
    slug: &'static str,
    name: &'static str,
    required_vars: &'static [&'static str],
    optional_vars: &'static [&'static str],
) -> Provider {
    Provider {
        slug,
        name,
        auto: false,
        required_vars,
        optional_vars,
    }
}

static PROVIDERS: &[Provider] = &[
    provider(
        "aws_s3",
        "AWS S3",
        &["AWS_BUCKET", "AWS_REGION", "AWS_ACCESS_KEY_ID", "AWS_SECRET_ACCESS_KEY"],
        &["S3_ENDPOINT"],
    ),
    provider("axiom", "Axiom", &["AXIOM_TOKEN", "AXIOM_DATASET"], &[]),
    provider("datadog", "Datadog", &["DATADOG_API_KEY"], &["DATADOG_SITE"]),
    provider(
        "erasearch",
        "Erasearch",
        &["ERASEARCH_URL", "ERASEARCH_INDEX", "ERASEARCH_AUTH"],
        &[],
    ),
    provider(
        "honeycomb",
        "Honeycomb",
        &["HONEYCOMB_API_KEY", "HONEYCOMB_DATASET"],
        &[],
    ),
    provider("http", "HTTP", &["HTTP_URL", "HTTP_TOKEN"], &[]),
    provider("humio", "Humio", &["HUMIO_TOKEN"], &[]),
    provider("mezmo", "Mezmo", &["MEZMO_API_KEY"], &[]),
    provider(
        "logflare",
        "Logflare",
        &["LOGFLARE_API_KEY", "LOGFLARE_SOURCE_TOKEN"],
        &[],
    ),
    Provider {
        slug: "logtail",
        name: "Logtail",
        auto: true,
        required_vars: &[],
        optional_vars: &[],
    },
    provider(
        "loki",
        "Loki",
        &["LOKI_URL", "LOKI_USERNAME", "LOKI_PASSWORD"],
        &[],
    ),
    provider(
        "new_relic",
        "New Relic",
        &["NEW_RELIC_REGION", "NEW_RELIC_ACCOUNT_ID"],
        &["NEW_RELIC_LICENSE_KEY", "NEW_RELIC_INSERT_KEY"],
    ),
    provider(
        "papertrail",
        "Papertrail",
        &["PAPERTRAIL_ENDPOINT"],
        &["PAPERTRAIL_ENCODING_CODEC"],
    ),
    provider(
        "sematext",
        "Sematext",
        &["SEMATEXT_REGION", "SEMATEXT_TOKEN"],
        &[],
    ),
    provider(
        "uptrace",
        "Uptrace",
        &["UPTRACE_API_KEY", "UPTRACE_PROJECT"],
        &["UPTRACE_SINK_INPUT", "UPTRACE_SINK_ENCODING"],
    ),
];

/// Managed add-on types the platform can create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOnType {
    Logtail,
    UpstashRedis,
}

impl AddOnType {
    /// Wire name of the add-on type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Logtail => "logtail",
            Self::UpstashRedis => "upstash_redis",
        }
    }
}

static ADDON_TYPES: &[(&str, AddOnType)] = &[
    ("logtail", AddOnType::Logtail),
    ("upstash_redis", AddOnType::UpstashRedis),
];

/// All providers in display order.
#[must_use]
pub fn list_providers() -> &'static [Provider] {
    PROVIDERS
}

/// Find a provider by slug.
#[must_use]
pub fn lookup(slug: &str) -> Option<&'static Provider> {
    PROVIDERS.iter().find(|p| p.slug == slug)
}

/// Map a provider slug to the add-on type that provisions it.
///
/// Returns `None` for slugs outside the table; callers must reject those
/// rather than fall back to a default type.
#[must_use]
pub fn addon_type_for(slug: &str) -> Option<AddOnType> {
    ADDON_TYPES
        .iter()
        .find(|(s, _)| *s == slug)
        .map(|(_, t)| *t)
}

/// Parse a `KEY=VALUE` secret assignment given on the command line.
///
/// The value may contain `=`; the key may not be empty.
///
/// # Errors
///
/// Returns `SetupError::InvalidSecretAssignment` when there is no `=` or the
/// key is blank.
pub fn parse_secret_assignment(raw: &str) -> Result<(String, String), SetupError> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(SetupError::InvalidSecretAssignment(raw.to_string())),
    }
}
