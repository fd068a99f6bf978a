use tracing_subscriber::{fmt, EnvFilter};

use crate::core::config::Settings;

// The AWS SDK and hyper log every request at info; keep them quiet unless RUST_LOG asks.
const QUIET_DEPENDENCIES: &[&str] = &["aws_config=warn", "aws_smithy_runtime=warn", "hyper=warn"];

pub(crate) fn init_tracing(settings: &Settings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(settings));

    let builder = fmt().with_env_filter(filter).with_target(false);

    let result = if settings.telemetry().json {
        builder.json().with_span_events(fmt::format::FmtSpan::CLOSE).try_init()
    } else {
        builder.with_span_events(fmt::format::FmtSpan::CLOSE).try_init()
    };

    result.map_err(|err| anyhow::anyhow!(err.to_string()))
}

fn default_filter(settings: &Settings) -> EnvFilter {
    let mut directives = vec![settings.telemetry().log_level.clone()];
    directives.extend(QUIET_DEPENDENCIES.iter().map(|item| item.to_string()));
    EnvFilter::new(directives.join(","))
}
