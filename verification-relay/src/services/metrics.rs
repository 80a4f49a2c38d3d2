use metrics::counter;

/// Record an outbound provider call by provider and outcome.
pub fn record_provider_call(provider: &'static str, status: &'static str) {
    counter!(
        "verification_provider_calls_total",
        "provider" => provider,
        "status" => status
    )
    .increment(1);
}
