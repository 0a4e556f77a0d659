//! Shared fixtures and a scripted fetcher for page tests.

use pages_ms::{
    AsyncTask, FetchContext, FetchOutcome, PageError, PageFetcher, PageId, Product, Seo,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

pub fn sample_seo() -> Seo {
    Seo {
        page_id: 0,
        title: "Sample page title".to_string(),
        description: "Sample page description".to_string(),
        robots: "Sample robots".to_string(),
    }
}

pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: 0,
            page_id: 0,
            name: "Sample product 0 name".to_string(),
            description: "Sample product 0 description".to_string(),
            price: 2.50,
        },
        Product {
            id: 1,
            page_id: 0,
            name: "Sample product 1 name".to_string(),
            description: "Sample product 1 description".to_string(),
            price: 19.99,
        },
    ]
}

/// Records what happened to one scripted task.
#[derive(Debug)]
pub struct Probe {
    started: Instant,
    cancelled_after: Mutex<Option<Duration>>,
    delivered: AtomicBool,
}

impl Probe {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            started: Instant::now(),
            cancelled_after: Mutex::new(None),
            delivered: AtomicBool::new(false),
        })
    }

    fn mark_cancelled(&self) {
        *self.cancelled_after.lock().unwrap() = Some(self.started.elapsed());
    }

    pub fn delivered(&self) -> bool {
        self.delivered.load(Ordering::SeqCst)
    }

    pub fn cancelled_after(&self) -> Option<Duration> {
        *self.cancelled_after.lock().unwrap()
    }

    /// Wait up to `limit` for the task to observe cancellation.
    pub async fn wait_cancelled(&self, limit: Duration) -> Option<Duration> {
        let deadline = Instant::now() + limit;
        while Instant::now() < deadline {
            if let Some(after) = self.cancelled_after() {
                return Some(after);
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        self.cancelled_after()
    }
}

type OutcomeFn<T> = Arc<dyn Fn() -> FetchOutcome<T> + Send + Sync>;

/// Delivers a fixed outcome after a delay unless cancelled first.
pub struct Script<T> {
    delay: Duration,
    outcome: OutcomeFn<T>,
}

impl<T: Send + 'static> Script<T> {
    pub fn ok(value: T, delay: Duration) -> Self
    where
        T: Clone + Sync,
    {
        Self {
            delay,
            outcome: Arc::new(move || Ok(value.clone())),
        }
    }

    pub fn err(message: &'static str, delay: Duration) -> Self {
        Self {
            delay,
            outcome: Arc::new(move || Err(PageError::from(message))),
        }
    }

    fn launch(
        &self,
        ctx: &FetchContext,
        probes: &Mutex<Vec<Arc<Probe>>>,
    ) -> AsyncTask<FetchOutcome<T>> {
        let probe = Probe::new();
        probes.lock().unwrap().push(Arc::clone(&probe));
        let delay = self.delay;
        let outcome = Arc::clone(&self.outcome);
        AsyncTask::spawn_async_cancellable(ctx.child(), move |ctx| async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {
                    probe.delivered.store(true, Ordering::SeqCst);
                    outcome()
                }
                _ = ctx.cancelled() => {
                    probe.mark_cancelled();
                    Err(PageError::Cancelled)
                }
            }
        })
    }
}

/// [`PageFetcher`] double driven by two scripts.
pub struct ScriptedFetcher {
    seo: Script<Option<Seo>>,
    products: Script<Option<Vec<Product>>>,
    seo_probes: Mutex<Vec<Arc<Probe>>>,
    products_probes: Mutex<Vec<Arc<Probe>>>,
}

impl ScriptedFetcher {
    pub fn new(seo: Script<Option<Seo>>, products: Script<Option<Vec<Product>>>) -> Self {
        Self {
            seo,
            products,
            seo_probes: Mutex::new(Vec::new()),
            products_probes: Mutex::new(Vec::new()),
        }
    }

    pub fn seo_probe(&self) -> Arc<Probe> {
        Arc::clone(self.seo_probes.lock().unwrap().last().expect("seo fetch launched"))
    }

    pub fn products_probe(&self) -> Arc<Probe> {
        Arc::clone(
            self.products_probes
                .lock()
                .unwrap()
                .last()
                .expect("products fetch launched"),
        )
    }
}

impl PageFetcher for ScriptedFetcher {
    fn fetch_seo(
        &self,
        ctx: &FetchContext,
        _page_id: PageId,
    ) -> AsyncTask<FetchOutcome<Option<Seo>>> {
        self.seo.launch(ctx, &self.seo_probes)
    }

    fn fetch_products(
        &self,
        ctx: &FetchContext,
        _page_id: PageId,
    ) -> AsyncTask<FetchOutcome<Option<Vec<Product>>>> {
        self.products.launch(ctx, &self.products_probes)
    }
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
