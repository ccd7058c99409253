use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use lazy_static::lazy_static;
use pin_project::pin_project;
use prometheus::{HistogramTimer, HistogramVec, register_histogram_vec};

const API_TIME_SPENT_BUCKETS: &[f64; 8] = &[
    0.1, 0.2, 0.3, 0.5, 0.8, 1.0, 1.5, 2.0
];

lazy_static! {
    pub static ref API_TIME_SPENT_SECONDS: HistogramVec = register_histogram_vec!(
        "api_time_spent_seconds",
        "Slides API time spent seconds",
        &["operation"],
        API_TIME_SPENT_BUCKETS.to_vec()
    ).expect("Can't create a metric");
}

#[pin_project]
pub struct Observed<F> {
    #[pin]
    inner: F,
    timer: Option<HistogramTimer>,
}

impl<F: Future> Future for Observed<F> {
    type Output = F::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        match this.inner.poll(cx) {
            Poll::Ready(output) => {
                if let Some(timer) = this.timer.take() {
                    timer.observe_duration();
                }
                Poll::Ready(output)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

pub trait ObserverExt: Future + Sized {
    /// Records the time until the future resolves under the given operation label.
    fn observe_duration(self, operation: &str) -> Observed<Self> {
        let timer = API_TIME_SPENT_SECONDS.with_label_values(&[operation]).start_timer();
        Observed { inner: self, timer: Some(timer) }
    }
}

impl<F: Future> ObserverExt for F {}
