// ABOUTME: Tests for structured logging fields using tracing-mock
// ABOUTME: Verifies the facade macros emit the levels and fields callers rely on

#[cfg(test)]
mod tests {
    use crate::{debug, info, trace};
    use tracing_mock::{expect, subscriber};

    #[test]
    fn test_structured_info_fields() {
        let (subscriber, handle) = subscriber::mock()
            .event(
                expect::event().at_level(tracing::Level::INFO).with_fields(
                    expect::field("issues_count")
                        .with_value(&2_u64)
                        .and(expect::msg("Palette validation completed")),
                ),
            )
            .only()
            .run_with_handle();

        tracing::subscriber::with_default(subscriber, || {
            info!(issues_count = 2_u64, "Palette validation completed");
        });

        handle.assert_finished();
    }

    #[test]
    fn test_display_fields() {
        let (subscriber, handle) = subscriber::mock()
            .event(
                expect::event().at_level(tracing::Level::TRACE).with_fields(
                    expect::field("locator")
                        .with_value(&tracing::field::display("primary.500"))
                        .and(expect::msg("Palette issue found")),
                ),
            )
            .only()
            .run_with_handle();

        tracing::subscriber::with_default(subscriber, || {
            trace!(locator = %"primary.500", "Palette issue found");
        });

        handle.assert_finished();
    }

    #[test]
    fn test_events_in_order() {
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().at_level(tracing::Level::DEBUG))
            .event(expect::event().at_level(tracing::Level::INFO))
            .only()
            .run_with_handle();

        tracing::subscriber::with_default(subscriber, || {
            debug!(shade_count = 77, "Starting palette validation");
            info!(is_valid = true, "Palette validation completed");
        });

        handle.assert_finished();
    }
}
