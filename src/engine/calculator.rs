//! Local calculation engine.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::Instrument;

use crate::engine::pacer::{Pacer, TokioPacer, LONG_PAUSE, SHORT_PAUSE};
use crate::engine::{CalcError, Op, Reducer, MAX_INPUT_LEN};

/// Strictly sequential left-to-right fold over a bounded integer sequence.
///
/// Inputs longer than [`MAX_INPUT_LEN`] are rejected before any element is
/// looked at. A zero element aborts the whole reduction with no partial
/// result. Every accepted element pays an artificial pause (long when the
/// element is `1`), including a `1` in product mode where the multiplication
/// itself is a no-op.
pub struct CalcEngine {
    pacer: Arc<dyn Pacer>,
}

impl CalcEngine {
    pub fn new() -> Self {
        Self::with_pacer(Arc::new(TokioPacer))
    }

    /// Build an engine with a custom latency simulator.
    pub fn with_pacer(pacer: Arc<dyn Pacer>) -> Self {
        Self { pacer }
    }

    async fn visit(&self, number: i64) -> Result<(), CalcError> {
        if number == 0 {
            tracing::error!("zero value found");
            return Err(CalcError::ZeroValue);
        }
        if number == 1 {
            self.pacer.pause(LONG_PAUSE).await;
        } else {
            self.pacer.pause(SHORT_PAUSE).await;
        }
        Ok(())
    }
}

impl Default for CalcEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Reducer for CalcEngine {
    async fn reduce(&self, numbers: &[i64], op: Op) -> Result<i64, CalcError> {
        let span = tracing::info_span!("engine_reduce", ?op, len = numbers.len());
        async {
            if numbers.len() > MAX_INPUT_LEN {
                let err = CalcError::InvalidSize(numbers.len());
                tracing::error!(size = numbers.len(), error = %err, "input rejected");
                return Err(err);
            }

            let mut acc: i64 = match op {
                Op::Sum => 0,
                Op::Product => 1,
            };
            for &n in numbers {
                let element = tracing::info_span!("visit_number", number = n);
                self.visit(n).instrument(element).await?;
                // Wrapping keeps overflow behavior identical across build profiles.
                acc = match op {
                    Op::Sum => acc.wrapping_add(n),
                    Op::Product => acc.wrapping_mul(n),
                };
            }
            Ok(acc)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Records requested pauses instead of sleeping.
    struct RecordingPacer {
        pauses: Mutex<Vec<Duration>>,
    }

    impl RecordingPacer {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                pauses: Mutex::new(Vec::new()),
            })
        }

        fn recorded(&self) -> Vec<Duration> {
            self.pauses.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Pacer for RecordingPacer {
        async fn pause(&self, duration: Duration) {
            self.pauses.lock().unwrap().push(duration);
        }
    }

    fn engine() -> (CalcEngine, Arc<RecordingPacer>) {
        let pacer = RecordingPacer::new();
        (CalcEngine::with_pacer(pacer.clone()), pacer)
    }

    #[tokio::test]
    async fn sums_nonzero_sequence() {
        let (engine, _) = engine();
        let result = engine.reduce(&[2, 3, 4], Op::Sum).await.unwrap();
        assert_eq!(result, 9);
    }

    #[tokio::test]
    async fn multiplies_nonzero_sequence() {
        let (engine, _) = engine();
        let result = engine.reduce(&[2, 3, 4], Op::Product).await.unwrap();
        assert_eq!(result, 24);
    }

    #[tokio::test]
    async fn sum_of_full_length_input() {
        let (engine, _) = engine();
        let result = engine.reduce(&[1, 2, 3, 4, 5], Op::Sum).await.unwrap();
        assert_eq!(result, 15);
    }

    #[tokio::test]
    async fn zero_aborts_sum() {
        let (engine, _) = engine();
        let err = engine.reduce(&[0, 2, 3], Op::Sum).await.unwrap_err();
        assert!(matches!(err, CalcError::ZeroValue));
    }

    #[tokio::test]
    async fn zero_aborts_product_in_any_position() {
        let (engine, _) = engine();
        let err = engine.reduce(&[2, 3, 0], Op::Product).await.unwrap_err();
        assert!(matches!(err, CalcError::ZeroValue));
    }

    #[tokio::test]
    async fn zero_abort_skips_later_elements() {
        let (engine, pacer) = engine();
        let _ = engine.reduce(&[2, 0, 3], Op::Sum).await;
        // Only the leading 2 was visited before the abort.
        assert_eq!(pacer.recorded(), vec![SHORT_PAUSE]);
    }

    #[tokio::test]
    async fn oversized_input_rejected_before_elements_run() {
        let (engine, pacer) = engine();
        let err = engine.reduce(&[1, 2, 3, 4, 5, 6], Op::Sum).await.unwrap_err();
        assert!(matches!(err, CalcError::InvalidSize(6)));
        assert_eq!(err.to_string(), "size = 6 > 5");
        assert!(pacer.recorded().is_empty());
    }

    #[tokio::test]
    async fn sum_wraps_on_overflow_instead_of_panicking() {
        let (engine, _) = engine();
        let result = engine.reduce(&[i64::MAX, 2], Op::Sum).await.unwrap();
        assert_eq!(result, i64::MIN + 1);
    }

    #[tokio::test]
    async fn product_wraps_on_overflow_instead_of_panicking() {
        let (engine, _) = engine();
        let result = engine
            .reduce(&[i64::MAX, 2], Op::Product)
            .await
            .unwrap();
        assert_eq!(result, i64::MAX.wrapping_mul(2));
    }

    #[tokio::test]
    async fn one_pays_long_pause_even_in_product_mode() {
        let (engine, pacer) = engine();
        let result = engine.reduce(&[1, 5], Op::Product).await.unwrap();
        assert_eq!(result, 5);
        assert_eq!(pacer.recorded(), vec![LONG_PAUSE, SHORT_PAUSE]);
    }
}
